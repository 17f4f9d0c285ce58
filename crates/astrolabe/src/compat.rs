//! Edge compatibility between diagram families.
//!
//! Paste re-creates a captured edge from the destination's edge prototypes.
//! A prototype stands in for a captured edge when [`is_compatible`] accepts
//! the pair for the destination's family:
//!
//! | Family | Compatible pair |
//! |---|---|
//! | class, use case | two class relationships of the same style |
//! | object | two class relationships, or two object references |
//! | sequence | two calls, or two returns |
//! | state | two state transitions |
//!
//! Two class relationships share a style when their line style, both
//! arrowheads, bent style and middle label are equal. Note edges match
//! nothing, so paste never carries them over.

use astrolabe_core::{
    diagram::DiagramKind,
    model::{ClassRelationship, EdgeKind, EdgeTag},
};

/// Returns true if `prototype` may replace `captured` in a graph of `family`.
pub fn is_compatible(family: DiagramKind, captured: &EdgeKind, prototype: &EdgeKind) -> bool {
    if captured.tag() != prototype.tag() || !carries(family, captured.tag()) {
        return false;
    }
    match (captured, prototype) {
        (EdgeKind::ClassRelationship(a), EdgeKind::ClassRelationship(b)) => {
            family == DiagramKind::Object || same_relationship(a, b)
        }
        _ => true,
    }
}

/// Edge kinds that survive a paste into `family`.
fn carries(family: DiagramKind, tag: EdgeTag) -> bool {
    let tags: &[EdgeTag] = match family {
        DiagramKind::Class | DiagramKind::UseCase => &[EdgeTag::ClassRelationship],
        DiagramKind::Object => &[EdgeTag::ClassRelationship, EdgeTag::ObjectReference],
        DiagramKind::Sequence => &[EdgeTag::Call, EdgeTag::Return],
        DiagramKind::State => &[EdgeTag::StateTransition],
    };
    tags.contains(&tag)
}

// Start and end labels do not take part in the comparison.
fn same_relationship(a: &ClassRelationship, b: &ClassRelationship) -> bool {
    a.line_style() == b.line_style()
        && a.start_arrow() == b.start_arrow()
        && a.end_arrow() == b.end_arrow()
        && a.bent_style() == b.bent_style()
        && a.middle_label() == b.middle_label()
}
