//! Node and edge presentation attributes.
//!
//! Attributes are open string-keyed maps merged by simple override, later
//! layers winning: hardcoded defaults < effective shape < caller-supplied
//! overrides. Validity of individual values is deferred to Graphviz.

use indexmap::IndexMap;

/// Ordered attribute map; iteration order is emission order in DOT output.
pub type AttrMap = IndexMap<String, String>;

/// Shape applied when the caller specifies none.
pub const DEFAULT_SHAPE: &str = "rounded";

/// Per-document shape cycle used by round-robin rendering.
pub const ROUND_ROBIN_SHAPES: [&str; 2] = ["rounded", "ellipse"];

pub fn default_node_attrs() -> AttrMap {
    IndexMap::from([
        ("fontname".to_string(), "Fira Mono".to_string()),
        ("fontsize".to_string(), "10".to_string()),
        ("margin".to_string(), "0.3,0.1".to_string()),
        ("fillcolor".to_string(), "#fafafa".to_string()),
        ("penwidth".to_string(), "2.0".to_string()),
        ("style".to_string(), "rounded".to_string()),
    ])
}

/// Merges the three attribute layers for one document's nodes. `shape` is
/// the effective default (caller shape or the round-robin pick); entries in
/// `user` win over everything, including the shape.
pub fn resolve_node_attrs(shape: &str, user: &AttrMap) -> AttrMap {
    let mut attrs = default_node_attrs();
    attrs.insert("shape".to_string(), shape.to_string());
    for (key, value) in user {
        attrs.insert(key.clone(), value.clone());
    }
    attrs
}

/// Fixed presentation attributes for structural edges.
pub fn edge_attrs() -> AttrMap {
    IndexMap::from([
        ("arrowhead".to_string(), "none".to_string()),
        ("penwidth".to_string(), "2.0".to_string()),
    ])
}
