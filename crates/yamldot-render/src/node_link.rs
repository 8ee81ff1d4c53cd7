//! Node-link JSON export.
//!
//! The shape matches networkx's `node_link_data`: parallel `nodes` and
//! `links` lists, each link carrying `source`, `target` and a parallel-edge
//! discriminator `key` (always 0 here, since the renderer never produces
//! parallel edges).

use std::collections::HashMap;

use serde::Serialize;
use yamldot_core::{AttrMap, TreeGraph};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLinkData {
    pub directed: bool,
    pub multigraph: bool,
    pub graph: GraphEntry,
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEntry {
    pub rankdir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeEntry {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub attrs: AttrMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkEntry {
    pub source: String,
    pub target: String,
    pub key: u64,
    #[serde(flatten)]
    pub attrs: AttrMap,
}

/// Build the node-link representation of a rendered graph.
pub fn node_link_data(graph: &TreeGraph) -> NodeLinkData {
    let nodes = graph
        .nodes()
        .map(|(id, node)| NodeEntry {
            id: id.to_string(),
            label: node.label.clone(),
            attrs: node.attrs.clone(),
        })
        .collect();

    // Discriminator per (source, target) pair, counting up from 0.
    let mut seen: HashMap<(&str, &str), u64> = HashMap::new();
    let links = graph
        .edges()
        .map(|(key, attrs)| {
            let slot = seen.entry((key.v.as_str(), key.w.as_str())).or_insert(0);
            let discriminator = *slot;
            *slot += 1;
            LinkEntry {
                source: key.v.clone(),
                target: key.w.clone(),
                key: discriminator,
                attrs: attrs.clone(),
            }
        })
        .collect();

    NodeLinkData {
        directed: true,
        multigraph: true,
        graph: GraphEntry {
            rankdir: graph.graph().rankdir.as_str().to_string(),
        },
        nodes,
        links,
    }
}

/// Serialize the node-link representation as pretty-printed JSON.
pub fn render_node_link_json(graph: &TreeGraph) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&node_link_data(graph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use yamldot_core::{RenderOptions, loader, render};

    #[test]
    fn three_document_fixture_matches_expected_node_link_shape() {
        let docs = loader::parse_json_documents(
            r#"[
                {"key1": "value1"},
                {"key2": {"nested_key": "nested_value"}},
                {"key3": [1, 2, 3]}
            ]"#,
        )
        .unwrap();
        let data = node_link_data(&render(&docs, &RenderOptions::default()));

        assert!(data.directed);
        assert!(data.multigraph);
        assert_eq!(data.graph.rankdir, "LR");

        let ids: Vec<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "0__key1",
                "0__key1__value1",
                "1__key2",
                "1__key2__nested_key",
                "1__key2__nested_key__nested_value",
                "2__key3",
                "2__key3__1",
                "2__key3__2",
                "2__key3__3",
            ]
        );

        let pairs: Vec<(&str, &str, u64)> = data
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str(), l.key))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("0__key1", "0__key1__value1", 0),
                ("1__key2", "1__key2__nested_key", 0),
                ("1__key2__nested_key", "1__key2__nested_key__nested_value", 0),
                ("2__key3", "2__key3__1", 0),
                ("2__key3", "2__key3__2", 0),
                ("2__key3", "2__key3__3", 0),
            ]
        );
    }

    #[test]
    fn node_entries_flatten_style_attributes() {
        let docs = loader::parse_yaml_documents("a: 1\n").unwrap();
        let json = render_node_link_json(&render(&docs, &RenderOptions::default())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["directed"], json!(true));
        assert_eq!(value["multigraph"], json!(true));
        assert_eq!(value["nodes"][0]["id"], json!("0__a"));
        assert_eq!(value["nodes"][0]["label"], json!("a"));
        assert_eq!(value["nodes"][0]["fontname"], json!("Fira Mono"));
        assert_eq!(value["nodes"][0]["shape"], json!("rounded"));
        assert_eq!(value["links"][0]["key"], json!(0));
        assert_eq!(value["links"][0]["arrowhead"], json!("none"));
    }

    #[test]
    fn empty_graph_serializes_empty_lists() {
        let data = node_link_data(&render(&[], &RenderOptions::default()));
        assert!(data.nodes.is_empty());
        assert!(data.links.is_empty());
    }
}
