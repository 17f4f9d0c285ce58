//! Paste: instantiating the captured subgraph in a destination graph.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, info, trace};

use astrolabe_core::{
    geometry::{Bounds, Point},
    identifier::{EdgeId, NodeId},
    model::{Edge, Node, NodeTag},
};

use super::{Clipboard, mapped_endpoints, rewire};
use crate::{compat, error::Omission, panel::GraphPanel, selection::SelectionList};

impl Clipboard {
    /// Pastes the captured subgraph into `panel`'s graph, placing it as the
    /// configuration says.
    ///
    /// Equivalent to `paste_with(panel, false)` only under the default
    /// configuration. Otherwise the clipboard's
    /// `ClipboardConfig::keep_original_positions` flag is passed on, and a
    /// true flag keeps the captured coordinates. With the default, the pasted
    /// elements are moved until their bounding box starts at the origin.
    pub fn paste<P: GraphPanel + ?Sized>(&self, panel: &mut P) -> SelectionList {
        self.paste_with(panel, self.config.keep_original_positions())
    }

    /// Pastes the captured subgraph into `panel`'s graph.
    ///
    /// Only nodes whose kind appears in the destination's node prototypes
    /// are pasted. Each captured edge is re-created from every compatible
    /// destination edge prototype, provided both its endpoints were pasted.
    /// All graph mutations happen inside one compound edit.
    ///
    /// Returns the pasted elements, leaving out nodes nested inside another
    /// pasted node. An edge that the destination graph refuses to connect,
    /// because a point lookup misses its endpoints, is neither stored nor
    /// returned.
    pub fn paste_with<P: GraphPanel + ?Sized>(
        &self,
        panel: &mut P,
        keep_original_positions: bool,
    ) -> SelectionList {
        let graph = panel.graph();
        let family = graph.kind();
        let admitted: HashSet<NodeTag> = graph.node_prototypes().iter().map(Node::tag).collect();

        let mut clone_map: IndexMap<NodeId, NodeId> = IndexMap::new();
        let mut nodes: IndexMap<NodeId, Node> = IndexMap::new();
        let mut extent: Option<Bounds> = None;

        for captured in self.nodes.values() {
            if !admitted.contains(&captured.tag()) {
                debug!(
                    node:% = captured.id(),
                    tag:? = captured.tag(),
                    reason:% = Omission::IncompatibleKind;
                    "Dropping node from paste"
                );
                continue;
            }
            let clone = captured.duplicate();
            trace!(
                captured:% = captured.id(),
                clone:% = clone.id();
                "Pasting node"
            );
            extent = Some(match extent {
                Some(extent) => extent.merge(&captured.bounds()),
                None => captured.bounds(),
            });
            clone_map.insert(captured.id(), clone.id());
            nodes.insert(clone.id(), clone);
        }

        rewire(|id| self.nodes.get(&id), &clone_map, &mut nodes);

        let mut edges = Vec::new();
        for captured in &self.edges {
            let Some((start, end)) = mapped_endpoints(captured, &clone_map) else {
                debug!(
                    edge:% = captured.id(),
                    reason:% = Omission::MissingEndpoint;
                    "Dropping edge from paste"
                );
                continue;
            };

            let mut matched = false;
            for prototype in graph.edge_prototypes() {
                if !compat::is_compatible(family, captured.kind(), prototype.kind()) {
                    continue;
                }
                let mut edge = prototype.duplicate();
                edge.connect(start, end);
                edges.push(edge);
                matched = true;
            }
            if !matched {
                debug!(
                    edge:% = captured.id(),
                    reason:% = Omission::IncompatibleKind;
                    "Dropping edge from paste"
                );
            }
        }

        let offset = match extent {
            Some(extent) if !keep_original_positions => extent.min_point(),
            _ => Point::default(),
        };

        let mut selection = SelectionList::new();
        panel.begin_compound_edit();

        for (_, node) in nodes {
            let nested = node.is_parent_capable() && node.parent().is_some();
            let point = node.bounds().min_point().sub_point(offset);
            let id = panel.graph_mut().add(node, point);
            if !nested {
                selection.add(id);
            }
        }

        let mut edge_count = 0;
        for edge in edges {
            if let Some(id) = install_edge(panel, edge) {
                selection.add(id);
                edge_count += 1;
            }
        }

        panel.end_compound_edit();
        info!(
            nodes = clone_map.len(),
            edges = edge_count,
            selected = selection.len();
            "Pasted clipboard contents"
        );
        selection
    }
}

/// Stores a pasted edge in the destination graph.
///
/// An edge between two calls is inserted as is: connecting it by points
/// would make a sequence graph create yet another nested call. Returns
/// `None` when the graph could not connect the edge.
fn install_edge<P: GraphPanel + ?Sized>(panel: &mut P, edge: Edge) -> Option<EdgeId> {
    let (start, end) = edge.endpoints()?;
    let graph = panel.graph_mut();
    let (start_node, end_node) = (graph.node(start)?, graph.node(end)?);

    if start_node.is_call() && end_node.is_call() {
        debug!(
            edge:% = edge.id(),
            reason:% = Omission::DuplicateCallConnect;
            "Inserting edge without connect"
        );
        return graph.insert_edge(edge);
    }

    let (start_point, end_point) = (start_node.bounds().center(), end_node.bounds().center());
    let id = edge.id();
    let installed = graph.connect(edge, start_point, end_point);
    if installed.is_none() {
        debug!(
            edge:% = id,
            reason:% = Omission::MissingEndpoint;
            "Dropping edge from paste"
        );
    }
    installed
}
