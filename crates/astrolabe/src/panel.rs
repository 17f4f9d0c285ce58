//! Graph panels: the editor surface that owns a graph.
//!
//! Paste talks to its destination through the [`GraphPanel`] trait so that
//! the whole paste can be bracketed as one compound edit. [`DiagramPanel`]
//! is the provided implementation; it records each closed compound edit as
//! a [`CompoundEdit`] listing the elements the edit added.

use indexmap::IndexSet;
use log::{debug, warn};

use astrolabe_core::identifier::{EdgeId, NodeId};

use crate::graph::Graph;

/// The destination side of a paste.
pub trait GraphPanel {
    fn graph(&self) -> &Graph;

    fn graph_mut(&mut self) -> &mut Graph;

    /// Opens a compound edit. Scopes may nest.
    fn begin_compound_edit(&mut self);

    /// Closes the innermost open compound edit.
    fn end_compound_edit(&mut self);
}

/// Elements added by one closed compound edit, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundEdit {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
}

impl CompoundEdit {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Handles present when the outermost scope opened.
#[derive(Debug)]
struct OpenEdit {
    depth: usize,
    nodes: IndexSet<NodeId>,
    edges: IndexSet<EdgeId>,
}

/// A panel owning one graph and its compound edit history.
#[derive(Debug)]
pub struct DiagramPanel {
    graph: Graph,
    open: Option<OpenEdit>,
    history: Vec<CompoundEdit>,
}

impl DiagramPanel {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            open: None,
            history: Vec::new(),
        }
    }

    /// Closed compound edits, oldest first. Edits that added nothing are
    /// not recorded.
    pub fn history(&self) -> &[CompoundEdit] {
        &self.history
    }

    /// Returns true while a compound edit is open.
    pub fn in_compound_edit(&self) -> bool {
        self.open.is_some()
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl GraphPanel for DiagramPanel {
    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    fn begin_compound_edit(&mut self) {
        if let Some(open) = &mut self.open {
            open.depth += 1;
            return;
        }
        self.open = Some(OpenEdit {
            depth: 1,
            nodes: self.graph.nodes().map(|n| n.id()).collect(),
            edges: self.graph.edges().map(|e| e.id()).collect(),
        });
    }

    fn end_compound_edit(&mut self) {
        let Some(open) = &mut self.open else {
            warn!("Ignoring end of compound edit without a matching begin");
            return;
        };
        open.depth -= 1;
        if open.depth > 0 {
            return;
        }

        let Some(open) = self.open.take() else {
            return;
        };
        let edit = CompoundEdit {
            nodes: self
                .graph
                .nodes()
                .map(|n| n.id())
                .filter(|id| !open.nodes.contains(id))
                .collect(),
            edges: self
                .graph
                .edges()
                .map(|e| e.id())
                .filter(|id| !open.edges.contains(id))
                .collect(),
        };
        if edit.is_empty() {
            return;
        }
        debug!(
            nodes = edit.nodes.len(),
            edges = edit.edges.len();
            "Recorded compound edit"
        );
        self.history.push(edit);
    }
}
