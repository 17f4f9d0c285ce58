//! Diagram edges.

use crate::{
    identifier::{EdgeId, NodeId},
    model::style::{ArrowHead, BentStyle, LineStyle},
};

/// Payload of a class-relationship edge.
///
/// Class and use-case diagrams encode every relationship flavour
/// (dependency, inheritance, aggregation, «include», ...) as one of these,
/// so the preset constructors below mirror the entries of their palettes.
///
/// # Examples
///
/// ```
/// use astrolabe_core::model::{ArrowHead, ClassRelationship, LineStyle};
///
/// let dependency = ClassRelationship::dependency();
/// assert_eq!(dependency.line_style(), LineStyle::Dotted);
/// assert_eq!(dependency.end_arrow(), ArrowHead::V);
///
/// let labelled = ClassRelationship::association().with_middle_label("uses");
/// assert_eq!(labelled.middle_label(), "uses");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRelationship {
    line_style: LineStyle,
    start_arrow: ArrowHead,
    end_arrow: ArrowHead,
    bent_style: BentStyle,
    start_label: String,
    middle_label: String,
    end_label: String,
}

impl ClassRelationship {
    /// Dotted line ending in an open arrow.
    pub fn dependency() -> Self {
        Self::default()
            .with_line_style(LineStyle::Dotted)
            .with_end_arrow(ArrowHead::V)
    }

    /// Solid line ending in a triangle.
    pub fn inheritance() -> Self {
        Self::default()
            .with_end_arrow(ArrowHead::Triangle)
            .with_bent_style(BentStyle::VHV)
    }

    /// Dotted line ending in a triangle.
    pub fn realization() -> Self {
        Self::inheritance().with_line_style(LineStyle::Dotted)
    }

    /// Solid line ending in an open arrow.
    pub fn association() -> Self {
        Self::default()
            .with_end_arrow(ArrowHead::V)
            .with_bent_style(BentStyle::HVH)
    }

    /// Solid line starting with a hollow diamond.
    pub fn aggregation() -> Self {
        Self::default()
            .with_start_arrow(ArrowHead::Diamond)
            .with_bent_style(BentStyle::HVH)
    }

    /// Solid line starting with a filled diamond.
    pub fn composition() -> Self {
        Self::default()
            .with_start_arrow(ArrowHead::BlackDiamond)
            .with_bent_style(BentStyle::HVH)
    }

    /// Plain solid line, the object and use-case association.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Use-case generalization: solid line ending in a triangle.
    pub fn generalization() -> Self {
        Self::default().with_end_arrow(ArrowHead::Triangle)
    }

    /// Use-case «extend» dependency.
    pub fn extend() -> Self {
        Self::dependency().with_middle_label("\u{ab}extend\u{bb}")
    }

    /// Use-case «include» dependency.
    pub fn include() -> Self {
        Self::dependency().with_middle_label("\u{ab}include\u{bb}")
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    pub fn with_start_arrow(mut self, start_arrow: ArrowHead) -> Self {
        self.start_arrow = start_arrow;
        self
    }

    pub fn with_end_arrow(mut self, end_arrow: ArrowHead) -> Self {
        self.end_arrow = end_arrow;
        self
    }

    pub fn with_bent_style(mut self, bent_style: BentStyle) -> Self {
        self.bent_style = bent_style;
        self
    }

    pub fn with_start_label(mut self, label: impl Into<String>) -> Self {
        self.start_label = label.into();
        self
    }

    pub fn with_middle_label(mut self, label: impl Into<String>) -> Self {
        self.middle_label = label.into();
        self
    }

    pub fn with_end_label(mut self, label: impl Into<String>) -> Self {
        self.end_label = label.into();
        self
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn start_arrow(&self) -> ArrowHead {
        self.start_arrow
    }

    pub fn end_arrow(&self) -> ArrowHead {
        self.end_arrow
    }

    pub fn bent_style(&self) -> BentStyle {
        self.bent_style
    }

    pub fn start_label(&self) -> &str {
        &self.start_label
    }

    pub fn middle_label(&self) -> &str {
        &self.middle_label
    }

    pub fn end_label(&self) -> &str {
        &self.end_label
    }
}

/// Payload-free discriminant of an [`EdgeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeTag {
    ClassRelationship,
    ObjectReference,
    Call,
    Return,
    StateTransition,
    Note,
}

/// The kind of an edge together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    ClassRelationship(ClassRelationship),
    /// Reference from an object field to another object.
    ObjectReference,
    Call {
        signal: bool,
        middle_label: String,
    },
    Return {
        middle_label: String,
    },
    StateTransition {
        label: String,
    },
    /// Diagram-agnostic annotation edge attaching a note.
    Note,
}

impl EdgeKind {
    pub fn call() -> Self {
        Self::Call {
            signal: false,
            middle_label: String::new(),
        }
    }

    pub fn return_edge() -> Self {
        Self::Return {
            middle_label: String::new(),
        }
    }

    pub fn transition(label: impl Into<String>) -> Self {
        Self::StateTransition {
            label: label.into(),
        }
    }

    pub fn tag(&self) -> EdgeTag {
        match self {
            Self::ClassRelationship(_) => EdgeTag::ClassRelationship,
            Self::ObjectReference => EdgeTag::ObjectReference,
            Self::Call { .. } => EdgeTag::Call,
            Self::Return { .. } => EdgeTag::Return,
            Self::StateTransition { .. } => EdgeTag::StateTransition,
            Self::Note => EdgeTag::Note,
        }
    }

    /// The relationship payload, for class-relationship edges.
    pub fn as_class_relationship(&self) -> Option<&ClassRelationship> {
        match self {
            Self::ClassRelationship(relationship) => Some(relationship),
            _ => None,
        }
    }
}

impl From<ClassRelationship> for EdgeKind {
    fn from(relationship: ClassRelationship) -> Self {
        Self::ClassRelationship(relationship)
    }
}

/// An edge of a diagram, connecting a start node to an end node.
#[derive(Debug)]
pub struct Edge {
    id: EdgeId,
    kind: EdgeKind,
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl Edge {
    /// Creates an unconnected edge with a fresh handle.
    pub fn new(kind: impl Into<EdgeKind>) -> Self {
        Self {
            id: EdgeId::next(),
            kind: kind.into(),
            start: None,
            end: None,
        }
    }

    /// Produces an unconnected copy with a fresh handle and a deep copy of
    /// the payload.
    pub fn duplicate(&self) -> Self {
        Self::new(self.kind.clone())
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn kind(&self) -> &EdgeKind {
        &self.kind
    }

    pub fn tag(&self) -> EdgeTag {
        self.kind.tag()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    pub fn end(&self) -> Option<NodeId> {
        self.end
    }

    /// Both endpoints, once the edge is connected.
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        self.start.zip(self.end)
    }

    /// Attaches the edge to its two endpoints.
    pub fn connect(&mut self, start: NodeId, end: NodeId) {
        self.start = Some(start);
        self.end = Some(end);
    }

    /// Returns true if either endpoint is `node`.
    pub fn touches(&self, node: NodeId) -> bool {
        self.start == Some(node) || self.end == Some(node)
    }
}
