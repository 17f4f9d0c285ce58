//! Element model: nodes, edges and their kind-specific payloads.
//!
//! Elements never own one another. Containment (parent and children),
//! edge endpoints and the implicit parameter of a call are all stored as
//! handles from [`crate::identifier`], so that copies can be rewired by
//! looking handles up in a clone map.
//!
//! - [`Node`] / [`NodeKind`] / [`NodeTag`]
//! - [`Edge`] / [`EdgeKind`] / [`EdgeTag`] / [`ClassRelationship`]
//! - [`LineStyle`], [`ArrowHead`], [`BentStyle`]

mod edge;
mod node;
mod style;

pub use edge::{ClassRelationship, Edge, EdgeKind, EdgeTag};
pub use node::{Node, NodeKind, NodeTag};
pub use style::{ArrowHead, BentStyle, LineStyle};
