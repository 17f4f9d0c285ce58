//! Structural properties of captured and pasted subgraphs

use std::collections::HashSet;

use float_cmp::approx_eq;
use proptest::prelude::*;

use astrolabe::{
    Clipboard, DiagramPanel, Graph, GraphPanel, SelectionList,
    diagram::DiagramKind,
    geometry::{Bounds, Point},
    identifier::{EdgeId, NodeId},
    model::{ClassRelationship, Edge, EdgeKind, Node, NodeKind},
};

fn connect(
    graph: &mut Graph,
    kind: impl Into<EdgeKind>,
    start: NodeId,
    end: NodeId,
) -> EdgeId {
    let mut edge = Edge::new(kind);
    edge.connect(start, end);
    graph.insert_edge(edge).expect("endpoints exist")
}

fn class_at(name: &str, x: f32, y: f32) -> Node {
    Node::new(NodeKind::class(name), Bounds::new(x, y, 80.0, 40.0))
}

fn package_at(name: &str, x: f32) -> Node {
    Node::new(NodeKind::package(name), Bounds::new(x, 0.0, 200.0, 200.0))
}

fn lifeline_at(name: &str, x: f32) -> Node {
    Node::new(
        NodeKind::implicit_parameter(name),
        Bounds::new(x, 0.0, 80.0, 300.0),
    )
}

/// Two packages with one class each, a loose class and edges between all of
/// them. Returns the graph with the package and loose class handles.
fn class_fixture() -> (Graph, [NodeId; 5], Vec<EdgeId>) {
    let mut graph = Graph::new(DiagramKind::Class);
    let p = graph.insert_node(package_at("P", 0.0));
    let a = graph
        .add_child(p, class_at("A", 20.0, 20.0))
        .expect("classes fit in packages");
    let q = graph.insert_node(package_at("Q", 300.0));
    let b = graph
        .add_child(q, class_at("B", 320.0, 20.0))
        .expect("classes fit in packages");
    let c = graph.insert_node(class_at("C", 150.0, 300.0));

    let edges = vec![
        connect(&mut graph, ClassRelationship::association(), a, b),
        connect(&mut graph, ClassRelationship::inheritance(), c, a),
        connect(&mut graph, ClassRelationship::dependency(), b, c),
    ];
    (graph, [p, a, q, b, c], edges)
}

fn selection_of(nodes: &[NodeId], edges: &[EdgeId]) -> SelectionList {
    let mut selection = SelectionList::from_iter(nodes.iter().copied());
    selection.extend(edges.iter().copied());
    selection
}

fn snapshot(clipboard: &Clipboard) -> Vec<(Option<String>, Bounds, usize)> {
    clipboard
        .nodes()
        .map(|n| {
            let name = n.kind().name().map(str::to_owned);
            (name, n.bounds(), n.children().len())
        })
        .collect()
}

#[test]
fn test_clone_independence() {
    let (mut graph, [p, a, q, b, c], edges) = class_fixture();
    let mut clipboard = Clipboard::default();
    clipboard.capture(&graph, &selection_of(&[p, q, c], &edges));
    let before = snapshot(&clipboard);
    let captured_edges = clipboard.edge_count();

    // Mutate the originals in every way the graph allows.
    if let Some(node) = graph.node_mut(a) {
        node.translate(500.0, 500.0);
        if let NodeKind::Class { name, .. } = node.kind_mut() {
            name.push_str("Renamed");
        }
    }
    graph
        .add_child(p, class_at("D", 30.0, 100.0))
        .expect("classes fit in packages");
    connect(&mut graph, ClassRelationship::composition(), c, b);
    graph.remove_node(q);

    assert_eq!(snapshot(&clipboard), before);
    assert_eq!(clipboard.edge_count(), captured_edges);

    let mut panel = DiagramPanel::new(Graph::new(DiagramKind::Class));
    clipboard.paste(&mut panel);
    let names: HashSet<&str> = panel
        .graph()
        .nodes()
        .filter_map(|n| n.kind().name())
        .collect();
    assert_eq!(names, HashSet::from(["P", "A", "Q", "B", "C"]));
    assert_eq!(panel.graph().edge_count(), 3);
    assert!(panel.graph().nodes().all(|n| n.id() != a && n.id() != b));
}

#[test]
fn test_containment_and_edge_closure() {
    let (graph, [p, _, q, _, c], edges) = class_fixture();
    let mut clipboard = Clipboard::default();
    clipboard.capture(&graph, &selection_of(&[p, q, c], &edges));

    let mut panel = DiagramPanel::new(Graph::new(DiagramKind::Class));
    clipboard.paste(&mut panel);
    let edit = panel.history().last().expect("paste recorded").clone();
    let pasted: HashSet<NodeId> = edit.nodes().iter().copied().collect();
    let graph = panel.graph();
    let captured: HashSet<NodeId> = clipboard.nodes().map(Node::id).collect();

    for node in graph.nodes().filter(|n| n.is_parent_capable()) {
        for child in node.children() {
            assert!(pasted.contains(child), "child {child} is not a pasted node");
            assert!(!captured.contains(child));
            assert_eq!(graph.node(*child).and_then(Node::parent), Some(node.id()));
        }
    }

    assert_eq!(edit.edges().len(), 3);
    for id in edit.edges() {
        let (start, end) = graph
            .edge(*id)
            .and_then(Edge::endpoints)
            .expect("pasted edge connected");
        assert!(pasted.contains(&start));
        assert!(pasted.contains(&end));
        let origin = graph.node(start).map(Node::origin_edges);
        let terminal = graph.node(end).map(Node::terminal_edges);
        assert!(origin.is_some_and(|edges| edges.contains(id)));
        assert!(terminal.is_some_and(|edges| edges.contains(id)));
    }
}

#[test]
fn test_endpoint_drop_rule() {
    let (graph, [p, a, q, b, c], edges) = class_fixture();

    // Selecting only Q carries B along, so only edges among {B} survive: none.
    let mut clipboard = Clipboard::default();
    clipboard.capture(&graph, &selection_of(&[q], &edges));
    assert_eq!(clipboard.edge_count(), 0);

    // P and Q bring A and B; C is missing, so only A-B survives.
    clipboard.capture(&graph, &selection_of(&[p, q], &edges));
    assert_eq!(clipboard.edge_count(), 1);
    let mut panel = DiagramPanel::new(Graph::new(DiagramKind::Class));
    let pasted = clipboard.paste(&mut panel);
    assert_eq!(pasted.edges().count(), 1);

    // Selected children count as captured endpoints too.
    clipboard.capture(&graph, &selection_of(&[a, b, c], &edges));
    assert_eq!(clipboard.edge_count(), 3);
}

#[test]
fn test_implicit_children_are_captured_but_not_selected() {
    let (graph, [p, a, q, b, _], _) = class_fixture();
    let mut clipboard = Clipboard::default();
    clipboard.capture(&graph, &SelectionList::from_iter([p, q, b]));

    let names: Vec<Option<&str>> = clipboard.nodes().map(|n| n.kind().name()).collect();
    assert_eq!(names, vec![Some("P"), Some("A"), Some("Q"), Some("B")]);
    assert!(graph.node(a).is_some());

    let mut panel = DiagramPanel::new(Graph::new(DiagramKind::Class));
    let pasted = clipboard.paste(&mut panel);
    let selected: HashSet<&str> = pasted
        .nodes()
        .filter_map(|id| panel.graph().node(id))
        .filter_map(|n| n.kind().name())
        .collect();
    // B was selected but is nested inside Q, so Q carries it.
    assert_eq!(selected, HashSet::from(["P", "Q"]));
}

#[test]
fn test_sequence_edges_never_reach_class_diagrams() {
    let mut source = Graph::new(DiagramKind::Sequence);
    let o = source.insert_node(lifeline_at("o", 0.0));
    let o_prime = source.insert_node(lifeline_at("o'", 200.0));
    let mut k1 = Node::new(NodeKind::call(), Bounds::new(32.0, 60.0, 16.0, 80.0));
    k1.set_implicit_parameter(Some(o));
    let k1 = source.add_child(o, k1).expect("calls fit on lifelines");
    let mut k2 = Node::new(NodeKind::call(), Bounds::new(232.0, 70.0, 16.0, 40.0));
    k2.set_implicit_parameter(Some(o_prime));
    let k2 = source.add_child(o_prime, k2).expect("calls fit on lifelines");
    let call = connect(&mut source, EdgeKind::call(), k1, k2);
    let ret = connect(&mut source, EdgeKind::return_edge(), k2, k1);
    let note = source.insert_node(Node::new(
        NodeKind::note("n"),
        Bounds::new(400.0, 0.0, 60.0, 40.0),
    ));
    let annotation = connect(&mut source, EdgeKind::Note, note, o);

    let mut clipboard = Clipboard::default();
    let nodes = [o, o_prime, note];
    clipboard.capture(&source, &selection_of(&nodes, &[call, ret, annotation]));
    assert_eq!(clipboard.node_count(), 5);
    assert_eq!(clipboard.edge_count(), 3);

    let mut panel = DiagramPanel::new(Graph::new(DiagramKind::Class));
    let pasted = clipboard.paste(&mut panel);

    // Only the note survives. Calls and returns lose their endpoints and the
    // note edge is never compatible.
    assert_eq!(pasted.edges().count(), 0);
    assert_eq!(panel.graph().node_count(), 1);
    assert_eq!(pasted.len(), 1);
    assert_eq!(panel.graph().edge_count(), 0);
}

mod proptest_tests {
    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            1.0f32..200.0,
            1.0f32..200.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new(x, y, w, h))
    }

    fn layout_strategy() -> impl Strategy<Value = Vec<Bounds>> {
        prop::collection::vec(bounds_strategy(), 1..8)
    }

    // ===================
    // Property Test Functions
    // ===================

    fn paste_layout(
        layout: &[Bounds],
        keep_original_positions: bool,
    ) -> (Vec<Bounds>, Vec<Bounds>) {
        let mut source = Graph::new(DiagramKind::State);
        let ids: Vec<NodeId> = layout
            .iter()
            .map(|bounds| Node::new(NodeKind::state("s"), *bounds))
            .map(|node| source.insert_node(node))
            .collect();

        let mut clipboard = Clipboard::default();
        clipboard.capture(&source, &SelectionList::from_iter(ids.iter().copied()));
        let mut panel = DiagramPanel::new(Graph::new(DiagramKind::State));
        let pasted = clipboard.paste_with(&mut panel, keep_original_positions);

        let before = ids
            .iter()
            .filter_map(|id| source.node(*id))
            .map(Node::bounds)
            .collect();
        let after = pasted
            .nodes()
            .filter_map(|id| panel.graph().node(id))
            .map(Node::bounds)
            .collect();
        (before, after)
    }

    /// Pasting without original positions moves the layout to the origin.
    fn check_paste_moves_to_origin(layout: Vec<Bounds>) -> Result<(), TestCaseError> {
        let (_, after) = paste_layout(&layout, false);
        prop_assert_eq!(after.len(), layout.len());

        let min_x = after.iter().map(|b| b.min_x()).fold(f32::INFINITY, f32::min);
        let min_y = after.iter().map(|b| b.min_y()).fold(f32::INFINITY, f32::min);
        prop_assert!(
            approx_eq!(f32, min_x, 0.0, epsilon = 0.001),
            "min x is {min_x}"
        );
        prop_assert!(
            approx_eq!(f32, min_y, 0.0, epsilon = 0.001),
            "min y is {min_y}"
        );
        Ok(())
    }

    /// Pasting keeps the offsets between nodes and their sizes.
    fn check_paste_preserves_offsets(layout: Vec<Bounds>) -> Result<(), TestCaseError> {
        let (before, after) = paste_layout(&layout, false);

        let first_before = before[0].min_point();
        let first_after = after[0].min_point();
        for (old, new) in before.iter().zip(&after) {
            let old_offset = old.min_point().sub_point(first_before);
            let new_offset = new.min_point().sub_point(first_after);
            prop_assert!(approx_eq!(
                f32,
                old_offset.x(),
                new_offset.x(),
                epsilon = 0.01
            ));
            prop_assert!(approx_eq!(
                f32,
                old_offset.y(),
                new_offset.y(),
                epsilon = 0.01
            ));
            prop_assert!(approx_eq!(f32, old.width(), new.width(), epsilon = 0.01));
            prop_assert!(approx_eq!(f32, old.height(), new.height(), epsilon = 0.01));
        }
        Ok(())
    }

    /// Pasting with original positions leaves every node where it was.
    fn check_paste_keeps_positions(layout: Vec<Bounds>) -> Result<(), TestCaseError> {
        let (before, after) = paste_layout(&layout, true);
        for (old, new) in before.iter().zip(&after) {
            let delta = new.min_point().sub_point(old.min_point());
            prop_assert!(delta == Point::default(), "node moved by {delta:?}");
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn paste_moves_to_origin(layout in layout_strategy()) {
            check_paste_moves_to_origin(layout)?;
        }

        #[test]
        fn paste_preserves_offsets(layout in layout_strategy()) {
            check_paste_preserves_offsets(layout)?;
        }

        #[test]
        fn paste_keeps_positions(layout in layout_strategy()) {
            check_paste_keeps_positions(layout)?;
        }
    }
}
