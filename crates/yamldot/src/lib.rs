#![forbid(unsafe_code)]

//! `yamldot` renders tree-shaped YAML/JSON data as a directed graph.
//!
//! Every mapping key, list item and scalar leaf becomes a node, keyed by
//! its structural path; edges express containment. The graph serializes
//! to Graphviz DOT text or node-link JSON.
//!
//! ```
//! use yamldot::{RenderOptions, loader, render, render_dot};
//!
//! let docs = loader::parse_yaml_documents("service:\n  port: 8080\n").unwrap();
//! let graph = render(&docs, &RenderOptions::default());
//! let dot = render_dot(&graph);
//! assert!(dot.contains("\"0__service\" -> \"0__service__port\""));
//! ```

pub use yamldot_core::*;
pub use yamldot_graph::EdgeKey;
pub use yamldot_render::{NodeLinkData, node_link_data, render_dot, render_node_link_json};
