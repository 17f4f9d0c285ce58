//! Capture: copying a live selection into the clipboard.

use indexmap::IndexMap;
use log::{debug, info, trace};

use astrolabe_core::{
    identifier::NodeId,
    model::{Edge, Node},
};

use super::{Clipboard, mapped_endpoints, rewire};
use crate::{error::Omission, graph::Graph, selection::SelectionList};

impl Clipboard {
    /// Replaces the clipboard contents with a copy of `selection`, whose
    /// handles refer to elements of `graph`.
    ///
    /// Selected nodes are copied in selection order. Each selected node that
    /// can hold children brings along its unselected direct children, right
    /// after itself. Selected edges are copied only when both endpoints were
    /// copied. Handles that `graph` does not know are ignored.
    ///
    /// The new contents are built aside and swapped in at the end, so the
    /// previous capture stays intact until this returns.
    pub fn capture(&mut self, graph: &Graph, selection: &SelectionList) {
        let mut clone_map: IndexMap<NodeId, NodeId> = IndexMap::new();
        let mut nodes: IndexMap<NodeId, Node> = IndexMap::new();

        let mut copy = |original: &Node, clone_map: &mut IndexMap<NodeId, NodeId>| {
            let clone = original.duplicate();
            trace!(
                original:% = original.id(),
                clone:% = clone.id();
                "Captured node"
            );
            clone_map.insert(original.id(), clone.id());
            nodes.insert(clone.id(), clone);
        };

        for id in selection.nodes() {
            let Some(original) = graph.node(id) else {
                debug!(node:% = id; "Selected node is not in the graph");
                continue;
            };
            if clone_map.contains_key(&id) {
                continue;
            }
            copy(original, &mut clone_map);

            if !original.is_parent_capable() {
                continue;
            }
            for child in original.children() {
                if selection.contains_node(*child) || clone_map.contains_key(child) {
                    continue;
                }
                if let Some(child) = graph.node(*child) {
                    copy(child, &mut clone_map);
                }
            }
        }

        rewire(|id| graph.node(id), &clone_map, &mut nodes);

        let mut edges = Vec::new();
        for id in selection.edges() {
            let Some(original) = graph.edge(id) else {
                debug!(edge:% = id; "Selected edge is not in the graph");
                continue;
            };
            let Some((start, end)) = mapped_endpoints(original, &clone_map) else {
                debug!(
                    edge:% = id,
                    reason:% = Omission::MissingEndpoint;
                    "Dropping edge from capture"
                );
                continue;
            };
            let mut clone: Edge = original.duplicate();
            clone.connect(start, end);
            edges.push(clone);
        }

        info!(
            nodes = nodes.len(),
            edges = edges.len();
            "Captured selection"
        );
        self.nodes = nodes;
        self.edges = edges;
    }
}
