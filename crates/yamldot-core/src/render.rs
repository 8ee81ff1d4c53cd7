//! The tree-to-graph renderer.
//!
//! One rendering call walks every document breadth-first with an explicit
//! work queue (stack depth independent of input nesting), creating one
//! node per distinct structural path and one edge per parent/child pair,
//! then rewrites each node's label to its final path segment. The function
//! is pure: no state survives between calls.

use std::collections::VecDeque;
use std::str::FromStr;

use crate::path::{child_path, display_label};
use crate::style::{self, AttrMap};
use crate::value::Document;
use yamldot_graph::{Graph, GraphOptions};

/// Graphviz rank direction, passed through as a graph attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    /// Left to right.
    #[default]
    Lr,
    /// Top to bottom.
    Tb,
}

impl RankDir {
    pub fn as_str(self) -> &'static str {
        match self {
            RankDir::Lr => "LR",
            RankDir::Tb => "TB",
        }
    }
}

impl FromStr for RankDir {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LR" => Ok(RankDir::Lr),
            "TB" => Ok(RankDir::Tb),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Layout direction hint for the downstream serializer.
    pub rankdir: RankDir,
    /// Caller attribute overrides, applied last (win over the shape).
    pub node_attrs: AttrMap,
    /// Default node shape. Free-form; validity is Graphviz's problem.
    pub shape: String,
    /// Cycle shapes per document instead of using `shape`. Forced off in
    /// multi-view mode.
    pub round_robin: bool,
    /// Merge all documents into one unprefixed path namespace instead of
    /// prefixing each document's paths with its ordinal index.
    pub multi_view: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rankdir: RankDir::default(),
            node_attrs: AttrMap::new(),
            shape: style::DEFAULT_SHAPE.to_string(),
            round_robin: false,
            multi_view: false,
        }
    }
}

/// Node payload: the display label plus resolved style attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeAttrs {
    pub label: String,
    pub attrs: AttrMap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphAttrs {
    pub rankdir: RankDir,
}

/// The produced graph. A multigraph container for node-link compatibility,
/// though the renderer never emits parallel edges.
pub type TreeGraph = Graph<NodeAttrs, AttrMap, GraphAttrs>;

/// Renders a list of documents into one directed graph.
///
/// Total over the input domain: every structurally valid document renders
/// to some graph, and empty input yields an empty graph.
pub fn render(documents: &[Document], options: &RenderOptions) -> TreeGraph {
    let mut graph: TreeGraph = Graph::new(GraphOptions { multigraph: true });
    graph.set_graph(GraphAttrs {
        rankdir: options.rankdir,
    });

    let round_robin = options.round_robin && !options.multi_view;

    for (index, document) in documents.iter().enumerate() {
        let shape = if round_robin {
            style::ROUND_ROBIN_SHAPES[index % style::ROUND_ROBIN_SHAPES.len()]
        } else {
            options.shape.as_str()
        };
        let node_attrs = style::resolve_node_attrs(shape, &options.node_attrs);
        let prefix = if options.multi_view {
            String::new()
        } else {
            index.to_string()
        };
        process_document(document, &mut graph, &node_attrs, prefix);
    }

    relabel_for_rendering(&mut graph);
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "rendered document graph"
    );
    graph
}

/// Convenience wrapper for a single document.
pub fn render_document(document: &Document, options: &RenderOptions) -> TreeGraph {
    render(std::slice::from_ref(document), options)
}

/// Breadth-first traversal of one document.
///
/// Queue entries are `(subtree, parent_path, parent_node)`. Mapping keys
/// become nodes; scalar values become leaf nodes immediately; container
/// values are enqueued under the key's path. Sequence items are
/// transparent: container items re-enter the queue at the parent's own
/// path and node, scalar items become leaves under the parent.
fn process_document(
    document: &Document,
    graph: &mut TreeGraph,
    node_attrs: &AttrMap,
    prefix: String,
) {
    let mut queue: VecDeque<(&Document, String, Option<String>)> = VecDeque::new();
    queue.push_back((document, prefix, None));

    while let Some((data, parent_path, parent_node)) = queue.pop_front() {
        match data {
            Document::Mapping(entries) => {
                for (key, value) in entries {
                    let key_path = child_path(&parent_path, key);
                    add_node(graph, &key_path, parent_node.as_deref(), node_attrs);
                    if value.is_container() {
                        queue.push_back((value, key_path.clone(), Some(key_path)));
                    } else if let Document::Scalar(scalar) = value {
                        let value_path = child_path(&key_path, &scalar.to_string());
                        add_node(graph, &value_path, Some(&key_path), node_attrs);
                    }
                }
            }
            Document::Sequence(items) => {
                for item in items {
                    if item.is_container() {
                        queue.push_back((item, parent_path.clone(), parent_node.clone()));
                    } else if let Document::Scalar(scalar) = item {
                        let value_path = child_path(&parent_path, &scalar.to_string());
                        add_node(graph, &value_path, parent_node.as_deref(), node_attrs);
                    }
                }
            }
            // A bare scalar document has no containing key to hang a node on.
            Document::Scalar(_) => {}
        }
    }
}

/// Adds one node and its structural edge, once.
///
/// Repeated paths are ignored (equal substructure collapses onto one
/// node), an empty or whitespace-only name is skipped entirely, and the
/// edge is only created when the parent node actually exists, so a node
/// whose parent was skipped becomes a root.
fn add_node(graph: &mut TreeGraph, path: &str, parent: Option<&str>, attrs: &AttrMap) {
    if path.trim().is_empty() {
        return;
    }
    if graph.has_node(path) {
        return;
    }

    graph.set_node(
        path,
        NodeAttrs {
            label: path.to_string(),
            attrs: attrs.clone(),
        },
    );

    if let Some(parent) = parent {
        if graph.has_node(parent) {
            graph.set_edge(parent, path, style::edge_attrs());
        }
    }
}

/// Post-pass: labels carry only the final path segment, with colon
/// escapes restored.
fn relabel_for_rendering(graph: &mut TreeGraph) {
    for (id, node) in graph.nodes_mut() {
        node.label = display_label(id);
    }
}
