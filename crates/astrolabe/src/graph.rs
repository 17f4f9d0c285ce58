//! Diagram graphs: the arena that owns nodes and edges.
//!
//! A [`Graph`] stores its elements in insertion-ordered maps keyed by
//! handle. Elements refer to one another only through handles, so parent,
//! children, edge endpoints and implicit parameters stay valid as long as
//! the elements they name live in the same graph.
//!
//! # Architecture
//!
//! The graph provides:
//! - Node and edge storage via [`IndexMap`], preserving insertion order
//! - Incidence bookkeeping: every node's origin and terminal edge lists are
//!   derived from the edge set and kept in sync by the graph
//! - Per-family prototype tables (see the `prototypes` submodule)
//! - Point-based hit testing and connection, including the sequence
//!   diagram rule that turns a call onto a lifeline into a nested call

mod prototypes;

use indexmap::IndexMap;
use log::{debug, trace};

use astrolabe_core::{
    diagram::DiagramKind,
    geometry::{Bounds, Point, Size},
    identifier::{EdgeId, NodeId},
    model::{Edge, EdgeTag, Node, NodeKind, NodeTag},
};

/// Width of the call nodes created when a call edge lands on a lifeline.
const CALL_WIDTH: f32 = 16.0;
/// Initial height of such call nodes.
const CALL_HEIGHT: f32 = 30.0;

/// A diagram of one UML family.
#[derive(Debug)]
pub struct Graph {
    kind: DiagramKind,
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
    node_prototypes: Vec<Node>,
    edge_prototypes: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph with the default palette of `kind`.
    pub fn new(kind: DiagramKind) -> Self {
        Self::with_prototypes(
            kind,
            prototypes::node_prototypes(kind),
            prototypes::edge_prototypes(kind),
        )
    }

    /// Creates an empty graph with custom prototype tables.
    pub fn with_prototypes(
        kind: DiagramKind,
        node_prototypes: Vec<Node>,
        edge_prototypes: Vec<Edge>,
    ) -> Self {
        Self {
            kind,
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            node_prototypes,
            edge_prototypes,
        }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    /// The node kinds this graph admits.
    pub fn node_prototypes(&self) -> &[Node] {
        &self.node_prototypes
    }

    /// The edge kinds this graph admits.
    pub fn edge_prototypes(&self) -> &[Edge] {
        &self.edge_prototypes
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Nodes without a parent, in insertion order.
    pub fn root_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|node| node.parent().is_none())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Returns the innermost node whose bounds contain `point`.
    ///
    /// Among nodes at the same nesting depth the most recently added one
    /// wins, since it is drawn on top.
    pub fn find_node(&self, point: Point) -> Option<NodeId> {
        let mut best: Option<(usize, NodeId)> = None;
        for node in self.nodes.values().rev() {
            if !node.bounds().contains(point) {
                continue;
            }
            let depth = self.depth(node.id());
            if best.is_none_or(|(best_depth, _)| depth > best_depth) {
                best = Some((depth, node.id()));
            }
        }
        best.map(|(_, id)| id)
    }

    fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).and_then(Node::parent);
        while let Some(parent) = current {
            depth += 1;
            // Guards against cycles introduced through `node_mut`.
            if depth > self.nodes.len() {
                break;
            }
            current = self.node(parent).and_then(Node::parent);
        }
        depth
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Takes ownership of `node`, placing its top-left corner at `point`.
    ///
    /// The node's incidence lists are reset; they are rebuilt as edges are
    /// inserted. If the node names a parent already in the graph, the parent
    /// lists it as a child.
    pub fn add(&mut self, mut node: Node, point: Point) -> NodeId {
        node.move_to(point);
        node.clear_incidence();

        let id = node.id();
        if let Some(parent) = node.parent().and_then(|p| self.nodes.get_mut(&p)) {
            parent.add_child(id);
        }
        trace!(node:% = id, tag:? = node.tag(); "Adding node");
        self.nodes.insert(id, node);
        id
    }

    /// Adds `node` at its current position.
    pub fn insert_node(&mut self, node: Node) -> NodeId {
        let point = node.bounds().min_point();
        self.add(node, point)
    }

    /// Adds `child` at its current position inside `parent`.
    ///
    /// Returns `None`, dropping the child, when the parent is missing or
    /// either kind cannot take part in containment.
    pub fn add_child(&mut self, parent: NodeId, mut child: Node) -> Option<NodeId> {
        let parent_node = self.nodes.get(&parent)?;
        if !parent_node.is_parent_capable() || !child.is_parent_capable() {
            debug!(
                parent:% = parent,
                child_tag:? = child.tag();
                "Rejecting child"
            );
            return None;
        }
        child.set_parent(Some(parent));
        Some(self.insert_node(child))
    }

    /// Stores an edge whose endpoints are already set and present.
    ///
    /// Returns `None`, dropping the edge, otherwise.
    pub fn insert_edge(&mut self, edge: Edge) -> Option<EdgeId> {
        let (start, end) = edge.endpoints()?;
        if !self.contains_node(start) || !self.contains_node(end) {
            debug!(edge:% = edge.id(); "Rejecting edge with foreign endpoints");
            return None;
        }

        let id = edge.id();
        if let Some(node) = self.nodes.get_mut(&start) {
            node.add_origin_edge(id);
        }
        if let Some(node) = self.nodes.get_mut(&end) {
            node.add_terminal_edge(id);
        }
        trace!(edge:% = id, start:% = start, end:% = end; "Inserting edge");
        self.edges.insert(id, edge);
        Some(id)
    }

    /// Connects `edge` between the nodes under the two points and stores it.
    ///
    /// A point resolves to the endpoint the edge already carries if that
    /// node contains it, otherwise to the innermost node under it. In a
    /// sequence diagram, a call edge that ends on a lifeline is redirected
    /// to a new call node created on that lifeline.
    ///
    /// Returns `None` when either point hits no node.
    pub fn connect(
        &mut self,
        mut edge: Edge,
        start_point: Point,
        end_point: Point,
    ) -> Option<EdgeId> {
        let start = self.resolve(edge.start(), start_point)?;
        let mut end = self.resolve(edge.end(), end_point)?;

        if self.kind == DiagramKind::Sequence
            && edge.tag() == EdgeTag::Call
            && self.node(end).map(Node::tag) == Some(NodeTag::ImplicitParameter)
        {
            end = self.add_call_on(end, end_point)?;
        }

        edge.connect(start, end);
        self.insert_edge(edge)
    }

    fn resolve(&self, preferred: Option<NodeId>, point: Point) -> Option<NodeId> {
        let contains = |id: &NodeId| self.node(*id).is_some_and(|n| n.bounds().contains(point));
        preferred.filter(contains).or_else(|| self.find_node(point))
    }

    /// Creates a call node on `lifeline` at the height of `point`.
    fn add_call_on(&mut self, lifeline: NodeId, point: Point) -> Option<NodeId> {
        let lifeline_bounds = self.node(lifeline)?.bounds();
        let top_left = Point::new(lifeline_bounds.center().x() - CALL_WIDTH / 2.0, point.y());
        let mut call = Node::new(
            NodeKind::call(),
            Bounds::new_from_top_left(top_left, Size::new(CALL_WIDTH, CALL_HEIGHT)),
        );
        call.set_implicit_parameter(Some(lifeline));
        let id = self.add_child(lifeline, call)?;
        debug!(
            lifeline:% = lifeline,
            call:% = id;
            "Created call node on lifeline"
        );
        Some(id)
    }

    /// Removes an edge and forgets it in its endpoints' incidence lists.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.shift_remove(&id)?;
        if let Some((start, end)) = edge.endpoints() {
            for node_id in [start, end] {
                if let Some(node) = self.nodes.get_mut(&node_id) {
                    node.remove_incident_edge(id);
                }
            }
        }
        Some(edge)
    }

    /// Removes a node together with its descendants and every edge touching
    /// any of them. Returns the removed nodes, the requested one first.
    pub fn remove_node(&mut self, id: NodeId) -> Vec<Node> {
        if !self.contains_node(id) {
            return Vec::new();
        }

        let mut doomed = vec![id];
        let mut cursor = 0;
        while let Some(current) = doomed.get(cursor).copied() {
            if let Some(node) = self.nodes.get(&current) {
                let fresh: Vec<NodeId> = node
                    .children()
                    .iter()
                    .copied()
                    .filter(|c| !doomed.contains(c))
                    .collect();
                doomed.extend(fresh);
            }
            cursor += 1;
        }

        let edges: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|edge| doomed.iter().any(|n| edge.touches(*n)))
            .map(Edge::id)
            .collect();
        for edge in edges {
            self.remove_edge(edge);
        }

        if let Some(parent) = self.node(id).and_then(Node::parent) {
            if let Some(parent) = self.nodes.get_mut(&parent) {
                parent.remove_child(id);
            }
        }

        doomed
            .into_iter()
            .filter_map(|n| self.nodes.shift_remove(&n))
            .collect()
    }

    /// Recomputes every origin and terminal edge list from the edge set.
    pub fn rebuild_incidence(&mut self) {
        for node in self.nodes.values_mut() {
            node.clear_incidence();
        }
        for edge in self.edges.values() {
            let Some((start, end)) = edge.endpoints() else {
                continue;
            };
            if let Some(node) = self.nodes.get_mut(&start) {
                node.add_origin_edge(edge.id());
            }
            if let Some(node) = self.nodes.get_mut(&end) {
                node.add_terminal_edge(edge.id());
            }
        }
    }
}
