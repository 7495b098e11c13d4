//! # quire
//!
//! A declarative document-assembly engine: quire walks a tree of tagged
//! nodes describing a word-processing document and drives a host
//! automation backend (selection-based typing, style application, table
//! construction) to realize it.
//!
//! ## Features
//!
//! - Typed style deltas with scoped apply/restore across nested scopes
//! - CSS-like border shorthand expansion with per-edge overrides
//! - Symbolic constant/alias resolution into the host's constant space
//! - Two-pass table construction from loosely specified children
//! - An abstract [`Backend`] trait plus a scripted [`TraceBackend`]
//!
//! ## Quick Start
//!
//! ```
//! use quire::{Node, NodeKind, TraceBackend, emit};
//!
//! let tree = Node::new(NodeKind::Document)
//!     .with_label("report.doc")
//!     .with_child(
//!         Node::new(NodeKind::Para)
//!             .with_label("Quarterly Report")
//!             .with_param("bold", true)
//!             .with_param("align", "center"),
//!     )
//!     .with_child(Node::new(NodeKind::Text).with_body("All figures are preliminary."));
//!
//! let mut backend = TraceBackend::new();
//! emit(&mut backend, &tree).unwrap();
//! assert_eq!(
//!     backend.saved()[0].1,
//!     "Quarterly Report\nAll figures are preliminary."
//! );
//! ```
//!
//! ## Working with Trees
//!
//! The [`Node`] tree is normally produced by an external front-end parser
//! and handed over as JSON; [`Node`] derives serde so the boundary is one
//! `serde_json::from_str` away. During emission the tree is read-only:
//! the engine never mutates it, only the backend.

pub mod backend;
pub mod emit;
pub mod error;
pub mod model;
pub mod style;

pub use backend::{Backend, Constant, DocumentId, StyleState, TableId, Target, TraceBackend};
pub use emit::{emit, emit_into};
pub use error::{Error, Result};
pub use model::{Node, NodeKind, Params, Value};
pub use style::{BorderSpec, Edge, EdgeLine, Namespace, StyleDelta, StyleUndo};
