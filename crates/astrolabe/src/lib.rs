//! Astrolabe - Clipboard and graph-cloning core for UML diagram editors.
//!
//! Diagrams of five UML families (class, object, sequence, state and use
//! case) are held in [`Graph`] arenas. A [`Clipboard`] copies a
//! [`SelectionList`] out of one graph and pastes it into another through a
//! [`GraphPanel`], keeping containment, edge endpoints and sequence-diagram
//! call owners consistent on every copy.
//!
//! # Example
//!
//! ```
//! use astrolabe::{
//!     Clipboard, DiagramPanel, Graph, GraphPanel, SelectionList,
//!     diagram::DiagramKind,
//!     geometry::Bounds,
//!     model::{Node, NodeKind},
//! };
//!
//! let mut source = Graph::new(DiagramKind::Class);
//! let package = source.insert_node(Node::new(
//!     NodeKind::package("model"),
//!     Bounds::new(40.0, 40.0, 200.0, 160.0),
//! ));
//! source
//!     .add_child(
//!         package,
//!         Node::new(NodeKind::class("Order"), Bounds::new(50.0, 50.0, 80.0, 40.0)),
//!     )
//!     .expect("classes fit in packages");
//!
//! let mut clipboard = Clipboard::default();
//! clipboard.capture(&source, &SelectionList::from_iter([package]));
//!
//! let mut panel = DiagramPanel::new(Graph::new(DiagramKind::Class));
//! let pasted = clipboard.paste(&mut panel);
//!
//! // The package carries its class along; only the package is selected.
//! assert_eq!(pasted.len(), 1);
//! assert_eq!(panel.graph().node_count(), 2);
//! ```

pub mod clipboard;
pub mod compat;
pub mod config;
pub mod graph;
pub mod panel;
pub mod selection;

mod error;

pub use astrolabe_core::{ParseVariantError, diagram, geometry, identifier, model};

pub use clipboard::Clipboard;
pub use error::{AstrolabeError, Omission};
pub use graph::Graph;
pub use panel::{CompoundEdit, DiagramPanel, GraphPanel};
pub use selection::{ElementRef, SelectionList};
