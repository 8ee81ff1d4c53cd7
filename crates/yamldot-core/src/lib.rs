#![forbid(unsafe_code)]

//! Tree-to-graph renderer for YAML/JSON documents.
//!
//! Arbitrary tree-shaped data (mappings, sequences, scalars — possibly a
//! multi-document stream) becomes a directed graph whose nodes are keyed
//! by structural path: keys, list items and scalar leaves each get a node,
//! edges express containment. Serialization to DOT or node-link JSON
//! lives in `yamldot-render`.
//!
//! Design goals:
//! - deterministic, collision-free node identities (paths), even when
//!   labels repeat across sibling branches or documents
//! - pure rendering: no state shared between calls
//! - bounded stack: explicit breadth-first work queue, not recursion

pub mod error;
pub mod loader;
pub mod path;
pub mod render;
pub mod style;
pub mod value;

pub use error::{Error, Result};
pub use render::{
    GraphAttrs, NodeAttrs, RankDir, RenderOptions, TreeGraph, render, render_document,
};
pub use style::AttrMap;
pub use value::{Document, Scalar};
