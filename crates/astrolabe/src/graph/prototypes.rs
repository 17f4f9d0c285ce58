//! Default palettes of the five diagram families.
//!
//! Every graph carries a node and an edge prototype table. Editors create
//! new elements by duplicating a prototype, and paste uses the tables to
//! decide what a destination graph admits.

use astrolabe_core::{
    diagram::DiagramKind,
    geometry::Bounds,
    model::{ClassRelationship, Edge, EdgeKind, Node, NodeKind},
};

fn prototype(kind: NodeKind, width: f32, height: f32) -> Node {
    Node::new(kind, Bounds::new(0.0, 0.0, width, height))
}

/// Node kinds admitted by graphs of `kind`.
pub(super) fn node_prototypes(kind: DiagramKind) -> Vec<Node> {
    let mut nodes = match kind {
        DiagramKind::Class => vec![
            prototype(NodeKind::class(""), 100.0, 60.0),
            prototype(NodeKind::interface(""), 100.0, 60.0),
            prototype(NodeKind::package(""), 100.0, 80.0),
        ],
        DiagramKind::Object => vec![
            prototype(NodeKind::object(""), 80.0, 60.0),
            prototype(NodeKind::field("", ""), 60.0, 20.0),
        ],
        DiagramKind::Sequence => vec![
            prototype(NodeKind::implicit_parameter(""), 80.0, 120.0),
            prototype(NodeKind::call(), 16.0, 30.0),
        ],
        DiagramKind::State => vec![
            prototype(NodeKind::state(""), 80.0, 60.0),
            prototype(NodeKind::InitialState, 20.0, 20.0),
            prototype(NodeKind::FinalState, 20.0, 20.0),
        ],
        DiagramKind::UseCase => vec![
            prototype(NodeKind::actor(""), 48.0, 64.0),
            prototype(NodeKind::use_case(""), 110.0, 40.0),
        ],
    };
    nodes.push(prototype(NodeKind::note(""), 60.0, 40.0));
    nodes
}

/// Edge kinds admitted by graphs of `kind`.
pub(super) fn edge_prototypes(kind: DiagramKind) -> Vec<Edge> {
    let kinds: Vec<EdgeKind> = match kind {
        DiagramKind::Class => vec![
            EdgeKind::Note,
            ClassRelationship::dependency().into(),
            ClassRelationship::inheritance().into(),
            ClassRelationship::realization().into(),
            ClassRelationship::association().into(),
            ClassRelationship::aggregation().into(),
            ClassRelationship::composition().into(),
        ],
        DiagramKind::Object => vec![
            EdgeKind::Note,
            EdgeKind::ObjectReference,
            ClassRelationship::plain().into(),
        ],
        DiagramKind::Sequence => vec![EdgeKind::call(), EdgeKind::return_edge(), EdgeKind::Note],
        DiagramKind::State => vec![EdgeKind::transition(""), EdgeKind::Note],
        DiagramKind::UseCase => vec![
            EdgeKind::Note,
            ClassRelationship::plain().into(),
            ClassRelationship::generalization().into(),
            ClassRelationship::extend().into(),
            ClassRelationship::include().into(),
        ],
    };
    kinds.into_iter().map(Edge::new).collect()
}
