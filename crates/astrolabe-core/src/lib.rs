//! Astrolabe Core Types and Definitions
//!
//! This crate provides the foundational types of the Astrolabe UML editor
//! core. It includes:
//!
//! - **Geometry**: Points, sizes and bounding rectangles ([`geometry`] module)
//! - **Identifiers**: Process-wide unique element handles ([`identifier`] module)
//! - **Diagram**: The UML diagram families ([`diagram::DiagramKind`])
//! - **Model**: Nodes, edges and their payloads ([`model`] module)

pub mod diagram;
pub mod error;
pub mod geometry;
pub mod identifier;
pub mod model;

pub use error::ParseVariantError;
