//! Handles for diagram elements.
//!
//! Nodes and edges refer to one another (parent, children, endpoints,
//! implicit parameter) through the [`NodeId`] and [`EdgeId`] handles defined
//! here rather than through pointers. Handles are drawn from process-wide
//! counters, so a handle never repeats across graphs, clipboard buffers, or
//! paste staging areas.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_NODE: AtomicU64 = AtomicU64::new(1);
static NEXT_EDGE: AtomicU64 = AtomicU64::new(1);

/// Handle of a node.
///
/// # Examples
///
/// ```
/// use astrolabe_core::identifier::NodeId;
///
/// let a = NodeId::next();
/// let b = NodeId::next();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocates a fresh, never before used node handle.
    pub fn next() -> Self {
        Self(NEXT_NODE.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value of the handle.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Handle of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Allocates a fresh, never before used edge handle.
    pub fn next() -> Self {
        Self(NEXT_EDGE.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value of the handle.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
