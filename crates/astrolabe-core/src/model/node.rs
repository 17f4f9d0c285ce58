//! Diagram nodes.

use crate::{
    geometry::{Bounds, Point},
    identifier::{EdgeId, NodeId},
};

/// Payload-free discriminant of a [`NodeKind`].
///
/// Prototype tables compare nodes by tag: a node is admitted into a graph
/// when its tag matches the tag of some prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    Class,
    Interface,
    Package,
    Object,
    Field,
    ImplicitParameter,
    Call,
    State,
    InitialState,
    FinalState,
    Actor,
    UseCase,
    Note,
    Point,
}

impl NodeTag {
    /// Returns true for the kinds that take part in containment, i.e. that
    /// may own children or sit inside a parent.
    pub fn is_parent_capable(self) -> bool {
        matches!(
            self,
            Self::Class
                | Self::Interface
                | Self::Package
                | Self::Object
                | Self::Field
                | Self::ImplicitParameter
                | Self::Call
        )
    }
}

/// The kind of a node together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Class {
        name: String,
        attributes: String,
        methods: String,
    },
    Interface {
        name: String,
        methods: String,
    },
    Package {
        name: String,
        contents: String,
    },
    Object {
        name: String,
    },
    Field {
        name: String,
        value: String,
    },
    /// A lifeline of a sequence diagram.
    ImplicitParameter {
        name: String,
    },
    /// An activation box on a lifeline. `implicit_parameter` points back at
    /// the lifeline that owns the call.
    Call {
        implicit_parameter: Option<NodeId>,
        open_bottom: bool,
    },
    State {
        name: String,
    },
    InitialState,
    FinalState,
    Actor {
        name: String,
    },
    UseCase {
        name: String,
    },
    Note {
        text: String,
    },
    /// Anchor of a note edge that ends in empty space.
    Point,
}

impl NodeKind {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class {
            name: name.into(),
            attributes: String::new(),
            methods: String::new(),
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::Interface {
            name: name.into(),
            methods: String::new(),
        }
    }

    pub fn package(name: impl Into<String>) -> Self {
        Self::Package {
            name: name.into(),
            contents: String::new(),
        }
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::Object { name: name.into() }
    }

    pub fn field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn implicit_parameter(name: impl Into<String>) -> Self {
        Self::ImplicitParameter { name: name.into() }
    }

    /// A call that is not yet attached to any lifeline.
    pub fn call() -> Self {
        Self::Call {
            implicit_parameter: None,
            open_bottom: false,
        }
    }

    pub fn state(name: impl Into<String>) -> Self {
        Self::State { name: name.into() }
    }

    pub fn actor(name: impl Into<String>) -> Self {
        Self::Actor { name: name.into() }
    }

    pub fn use_case(name: impl Into<String>) -> Self {
        Self::UseCase { name: name.into() }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::Note { text: text.into() }
    }

    /// Returns the payload-free tag of this kind.
    pub fn tag(&self) -> NodeTag {
        match self {
            Self::Class { .. } => NodeTag::Class,
            Self::Interface { .. } => NodeTag::Interface,
            Self::Package { .. } => NodeTag::Package,
            Self::Object { .. } => NodeTag::Object,
            Self::Field { .. } => NodeTag::Field,
            Self::ImplicitParameter { .. } => NodeTag::ImplicitParameter,
            Self::Call { .. } => NodeTag::Call,
            Self::State { .. } => NodeTag::State,
            Self::InitialState => NodeTag::InitialState,
            Self::FinalState => NodeTag::FinalState,
            Self::Actor { .. } => NodeTag::Actor,
            Self::UseCase { .. } => NodeTag::UseCase,
            Self::Note { .. } => NodeTag::Note,
            Self::Point => NodeTag::Point,
        }
    }

    /// The display name of named kinds.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Class { name, .. }
            | Self::Interface { name, .. }
            | Self::Package { name, .. }
            | Self::Object { name }
            | Self::Field { name, .. }
            | Self::ImplicitParameter { name }
            | Self::State { name }
            | Self::Actor { name }
            | Self::UseCase { name } => Some(name),
            Self::Call { .. }
            | Self::InitialState
            | Self::FinalState
            | Self::Note { .. }
            | Self::Point => None,
        }
    }
}

/// A node of a diagram.
///
/// Relations to other elements are stored as handles and are maintained by
/// whoever owns the node: a graph, a clipboard buffer, or a paste in
/// progress. `origin_edges` and `terminal_edges` are incidence caches that
/// only the owning graph fills in; they are never carried over by
/// [`Node::duplicate`].
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    bounds: Bounds,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    origin_edges: Vec<EdgeId>,
    terminal_edges: Vec<EdgeId>,
}

impl Node {
    /// Creates a detached node with a fresh handle.
    pub fn new(kind: NodeKind, bounds: Bounds) -> Self {
        Self {
            id: NodeId::next(),
            kind,
            bounds,
            parent: None,
            children: Vec::new(),
            origin_edges: Vec::new(),
            terminal_edges: Vec::new(),
        }
    }

    /// Produces a structurally new node.
    ///
    /// The copy gets a fresh handle, a deep copy of the payload and the same
    /// bounds. It has no parent, no children, no incident edges and, for
    /// calls, no implicit parameter; callers rewire those relations.
    pub fn duplicate(&self) -> Self {
        let mut kind = self.kind.clone();
        if let NodeKind::Call {
            implicit_parameter, ..
        } = &mut kind
        {
            *implicit_parameter = None;
        }
        Self::new(kind, self.bounds)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub fn tag(&self) -> NodeTag {
        self.kind.tag()
    }

    pub fn is_parent_capable(&self) -> bool {
        self.tag().is_parent_capable()
    }

    pub fn is_call(&self) -> bool {
        self.tag() == NodeTag::Call
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Moves this node, and only this node, by the given deltas.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.bounds = self.bounds.translate(Point::new(dx, dy));
    }

    /// Moves the node so that its top-left corner lands on `point`.
    pub fn move_to(&mut self, point: Point) {
        self.bounds = self.bounds.with_min_point(point);
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Ordered children; always empty for kinds that are not parent-capable.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Replaces the children list. Ignored for kinds that cannot hold children.
    pub fn set_children(&mut self, children: Vec<NodeId>) {
        if self.is_parent_capable() {
            self.children = children;
        }
    }

    /// Appends a child handle. Returns false when this kind cannot hold
    /// children or the child is already listed.
    pub fn add_child(&mut self, child: NodeId) -> bool {
        if !self.is_parent_capable() || self.children.contains(&child) {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Removes a child handle, returning whether it was present.
    pub fn remove_child(&mut self, child: NodeId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| *c != child);
        self.children.len() != before
    }

    /// The lifeline owning this call, if this is an attached call node.
    pub fn implicit_parameter(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Call {
                implicit_parameter, ..
            } => implicit_parameter,
            _ => None,
        }
    }

    /// Sets the owning lifeline of a call node. Returns false, leaving the
    /// node untouched, when the node is not a call.
    pub fn set_implicit_parameter(&mut self, lifeline: Option<NodeId>) -> bool {
        match &mut self.kind {
            NodeKind::Call {
                implicit_parameter, ..
            } => {
                *implicit_parameter = lifeline;
                true
            }
            _ => false,
        }
    }

    /// Edges for which this node is the start.
    pub fn origin_edges(&self) -> &[EdgeId] {
        &self.origin_edges
    }

    /// Edges for which this node is the end.
    pub fn terminal_edges(&self) -> &[EdgeId] {
        &self.terminal_edges
    }

    pub fn add_origin_edge(&mut self, edge: EdgeId) {
        if !self.origin_edges.contains(&edge) {
            self.origin_edges.push(edge);
        }
    }

    pub fn add_terminal_edge(&mut self, edge: EdgeId) {
        if !self.terminal_edges.contains(&edge) {
            self.terminal_edges.push(edge);
        }
    }

    /// Forgets an edge in both incidence lists.
    pub fn remove_incident_edge(&mut self, edge: EdgeId) {
        self.origin_edges.retain(|e| *e != edge);
        self.terminal_edges.retain(|e| *e != edge);
    }

    /// Empties both incidence lists.
    pub fn clear_incidence(&mut self) {
        self.origin_edges.clear();
        self.terminal_edges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_gets_fresh_handle_and_payload() {
        let node = Node::new(
            NodeKind::class("Order"),
            Bounds::new(10.0, 20.0, 80.0, 40.0),
        );
        let copy = node.duplicate();

        assert_ne!(copy.id(), node.id());
        assert_eq!(copy.kind(), node.kind());
        assert_eq!(copy.bounds(), node.bounds());
    }

    #[test]
    fn test_duplicate_drops_relations() {
        let mut package = Node::new(
            NodeKind::package("model"),
            Bounds::new(0.0, 0.0, 200.0, 200.0),
        );
        let child = NodeId::next();
        let parent = NodeId::next();
        assert!(package.add_child(child));
        package.set_parent(Some(parent));
        package.add_origin_edge(EdgeId::next());
        package.add_terminal_edge(EdgeId::next());

        let copy = package.duplicate();

        assert!(copy.children().is_empty());
        assert_eq!(copy.parent(), None);
        assert!(copy.origin_edges().is_empty());
        assert!(copy.terminal_edges().is_empty());
    }

    #[test]
    fn test_duplicate_clears_implicit_parameter() {
        let lifeline = NodeId::next();
        let mut call = Node::new(NodeKind::call(), Bounds::new(0.0, 0.0, 16.0, 30.0));
        assert!(call.set_implicit_parameter(Some(lifeline)));
        assert_eq!(call.implicit_parameter(), Some(lifeline));

        let copy = call.duplicate();
        assert!(copy.is_call());
        assert_eq!(copy.implicit_parameter(), None);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let node = Node::new(NodeKind::class("A"), Bounds::new(0.0, 0.0, 10.0, 10.0));
        let mut copy = node.duplicate();
        if let NodeKind::Class { name, .. } = copy.kind_mut() {
            name.push_str("Renamed");
        }
        copy.translate(5.0, 5.0);

        assert_eq!(node.kind().name(), Some("A"));
        assert_eq!(node.bounds(), Bounds::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_non_parent_kinds_reject_children() {
        let mut state = Node::new(NodeKind::state("Idle"), Bounds::default());
        assert!(!state.is_parent_capable());
        assert!(!state.add_child(NodeId::next()));
        state.set_children(vec![NodeId::next()]);
        assert!(state.children().is_empty());
    }

    #[test]
    fn test_add_and_remove_child() {
        let mut package = Node::new(NodeKind::package("p"), Bounds::default());
        let child = NodeId::next();
        assert!(package.add_child(child));
        assert!(!package.add_child(child));
        assert!(package.remove_child(child));
        assert!(!package.remove_child(child));
    }

    #[test]
    fn test_set_implicit_parameter_on_non_call() {
        let mut node = Node::new(NodeKind::implicit_parameter("o"), Bounds::default());
        assert!(!node.set_implicit_parameter(Some(NodeId::next())));
        assert_eq!(node.implicit_parameter(), None);
    }

    #[test]
    fn test_move_to_and_translate() {
        let mut node = Node::new(NodeKind::note("hi"), Bounds::new(10.0, 10.0, 60.0, 40.0));
        node.move_to(Point::new(0.0, 0.0));
        assert_eq!(node.bounds(), Bounds::new(0.0, 0.0, 60.0, 40.0));
        node.translate(3.0, -2.0);
        assert_eq!(node.bounds(), Bounds::new(3.0, -2.0, 60.0, 40.0));
    }

    #[test]
    fn test_parent_capable_tags() {
        assert!(NodeTag::Package.is_parent_capable());
        assert!(NodeTag::ImplicitParameter.is_parent_capable());
        assert!(NodeTag::Class.is_parent_capable());
        assert!(!NodeTag::Note.is_parent_capable());
        assert!(!NodeTag::UseCase.is_parent_capable());
    }

    #[test]
    fn test_incidence_lists() {
        let mut node = Node::new(NodeKind::class("A"), Bounds::default());
        let e1 = EdgeId::next();
        let e2 = EdgeId::next();
        node.add_origin_edge(e1);
        node.add_origin_edge(e1);
        node.add_terminal_edge(e2);
        assert_eq!(node.origin_edges(), &[e1]);
        assert_eq!(node.terminal_edges(), &[e2]);

        node.remove_incident_edge(e1);
        assert!(node.origin_edges().is_empty());
        node.clear_incidence();
        assert!(node.terminal_edges().is_empty());
    }
}
