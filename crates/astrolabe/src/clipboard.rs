//! The clipboard: detached copies of diagram selections.
//!
//! [`Clipboard::capture`] copies a selection out of a live graph into a
//! buffer that references nothing outside itself. [`Clipboard::paste`]
//! copies that buffer again into a destination graph, keeping only the
//! elements the destination admits.
//!
//! # Overview
//!
//! Both directions follow the same three steps:
//! - Duplicate nodes, recording original → copy in an insertion-ordered map
//! - Rewire parent, children and implicit parameters through the map
//! - Re-create edges whose endpoints both appear in the map
//!
//! Nothing here fails. An element that cannot be carried over is left out
//! and the omission is logged at debug level.

mod capture;
mod paste;

use indexmap::IndexMap;

use astrolabe_core::{
    identifier::NodeId,
    model::{Edge, Node},
};

use crate::config::ClipboardConfig;

/// Holder of at most one captured subgraph.
///
/// # Examples
///
/// ```
/// use astrolabe::{
///     Clipboard, DiagramPanel, Graph, SelectionList,
///     diagram::DiagramKind,
///     geometry::Bounds,
///     model::{Node, NodeKind},
/// };
///
/// let mut source = Graph::new(DiagramKind::Class);
/// let class = source.insert_node(Node::new(
///     NodeKind::class("Order"),
///     Bounds::new(10.0, 20.0, 80.0, 40.0),
/// ));
///
/// let mut clipboard = Clipboard::default();
/// clipboard.capture(&source, &SelectionList::from_iter([class]));
///
/// let mut panel = DiagramPanel::new(Graph::new(DiagramKind::Class));
/// let pasted = clipboard.paste(&mut panel);
/// assert_eq!(pasted.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Clipboard {
    config: ClipboardConfig,
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
}

impl Clipboard {
    /// Creates an empty clipboard with the given configuration.
    pub fn new(config: ClipboardConfig) -> Self {
        Self {
            config,
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn config(&self) -> &ClipboardConfig {
        &self.config
    }

    /// Returns true if nothing has been captured, or the capture was empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Drops the captured subgraph.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Captured nodes in capture order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Captured edges in capture order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Copies the relations of the `originals` onto their copies.
///
/// `clone_map` maps original handles to copy handles and `clones` holds the
/// copies keyed by their own handles. Relations pointing outside the map are
/// dropped. Every copied child ends up with its parent set to the copy that
/// lists it.
fn rewire<'a>(
    originals: impl Fn(NodeId) -> Option<&'a Node>,
    clone_map: &IndexMap<NodeId, NodeId>,
    clones: &mut IndexMap<NodeId, Node>,
) {
    let mapped = |id: Option<NodeId>| id.and_then(|id| clone_map.get(&id).copied());

    for (original_id, clone_id) in clone_map {
        let Some(original) = originals(*original_id) else {
            continue;
        };
        let Some(clone) = clones.get_mut(clone_id) else {
            continue;
        };

        let children: Vec<NodeId> = original
            .children()
            .iter()
            .filter_map(|child| clone_map.get(child).copied())
            .collect();
        clone.set_children(children);
        clone.set_parent(mapped(original.parent()));
        if original.is_call() {
            clone.set_implicit_parameter(mapped(original.implicit_parameter()));
        }
    }

    let containment: Vec<(NodeId, NodeId)> = clones
        .values()
        .flat_map(|parent| {
            let id = parent.id();
            parent.children().iter().map(move |child| (id, *child))
        })
        .collect();
    for (parent, child) in containment {
        if let Some(child) = clones.get_mut(&child) {
            child.set_parent(Some(parent));
        }
    }
}

/// Maps both endpoints of `edge` through `clone_map`.
fn mapped_endpoints(
    edge: &Edge,
    clone_map: &IndexMap<NodeId, NodeId>,
) -> Option<(NodeId, NodeId)> {
    let (start, end) = edge.endpoints()?;
    Some((*clone_map.get(&start)?, *clone_map.get(&end)?))
}
