//! Serializable layout documents.

pub mod model;

pub use model::{ContentSpec, Edges, LayoutDocument, NodeSpec};
