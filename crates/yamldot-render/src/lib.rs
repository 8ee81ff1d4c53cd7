#![forbid(unsafe_code)]

//! Serializers for rendered document graphs.
//!
//! - [`dot`]: Graphviz DOT text (byte-stable for identical input)
//! - [`node_link`]: networkx-compatible node-link JSON

pub mod dot;
pub mod node_link;

pub use dot::render_dot;
pub use node_link::{NodeLinkData, node_link_data, render_node_link_json};
