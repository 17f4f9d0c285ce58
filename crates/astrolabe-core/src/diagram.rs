//! Diagram families.
//!
//! A [`DiagramKind`] tags every graph with the UML family it belongs to. The
//! family decides which node and edge kinds a graph admits and which edges
//! are compatible when pasting into it.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::ParseVariantError;

/// The UML diagram families an editor can hold.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Class,
    Object,
    Sequence,
    State,
    UseCase,
}

impl DiagramKind {
    /// All families, in declaration order.
    pub const ALL: [DiagramKind; 5] = [
        DiagramKind::Class,
        DiagramKind::Object,
        DiagramKind::Sequence,
        DiagramKind::State,
        DiagramKind::UseCase,
    ];
}

impl FromStr for DiagramKind {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(Self::Class),
            "object" => Ok(Self::Object),
            "sequence" => Ok(Self::Sequence),
            "state" => Ok(Self::State),
            "use_case" | "usecase" => Ok(Self::UseCase),
            _ => Err(ParseVariantError::new("diagram kind", s)),
        }
    }
}

impl From<DiagramKind> for &'static str {
    fn from(val: DiagramKind) -> Self {
        match val {
            DiagramKind::Class => "class",
            DiagramKind::Object => "object",
            DiagramKind::Sequence => "sequence",
            DiagramKind::State => "state",
            DiagramKind::UseCase => "use_case",
        }
    }
}

impl Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
