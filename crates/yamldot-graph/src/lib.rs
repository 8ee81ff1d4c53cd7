//! Graph container APIs used by the yamldot renderer.
//!
//! A mutating, string-keyed directed multigraph in the spirit of
//! `@dagrejs/graphlib` and networkx's `MultiDiGraph`: nodes are opaque
//! string ids carrying a label value, edges are `(v, w, name)` keys
//! carrying their own label value. Nodes and edges keep insertion order,
//! which serializers rely on for stable output.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Allow parallel edges, discriminated by `EdgeKey::name`.
    pub multigraph: bool,
}

/// Identity of one edge. `name` participates only for multigraphs; on a
/// plain digraph it is coerced to `None` so repeated `set_edge` calls on
/// the same endpoints update a single edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
    pub name: Option<String>,
}

impl EdgeKey {
    pub fn new(
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            name: name.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

/// Directed multigraph with insertion-ordered nodes and edges.
///
/// `N`, `E` and `G` are the node, edge and graph label types. Missing
/// edge endpoints are materialized with `N::default()`, matching graphlib
/// semantics.
#[derive(Debug, Clone)]
pub struct Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    options: GraphOptions,
    graph_label: G,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,
}

impl<N, E, G> Default for Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Insert a node, or replace the label of an existing one.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self
    }

    /// Insert a node with a default label unless it already exists.
    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        self.set_node(id, N::default())
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &N)> {
        self.nodes.iter().map(|n| (n.id.as_str(), &n.label))
    }

    /// Mutable iteration over node labels, in insertion order.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = (&str, &mut N)> {
        self.nodes.iter_mut().map(|n| {
            let NodeEntry { id, label } = n;
            (id.as_str(), label)
        })
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &E)> {
        self.edges.iter().map(|e| (&e.key, &e.label))
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>, label: E) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, label)
    }

    /// Insert an edge, materializing missing endpoints with default node
    /// labels. An existing key only has its label replaced.
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: E,
    ) -> &mut Self {
        let v = v.into();
        let w = w.into();
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        let name = if self.options.multigraph {
            name.map(Into::into)
        } else {
            None
        };
        let key = EdgeKey { v, w, name };

        if let Some(&idx) = self.edge_index.get(&key) {
            self.edges[idx].label = label;
            return self;
        }

        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            label,
        });
        self.edge_index.insert(key, idx);
        self
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.edge_index.contains_key(&EdgeKey {
            v: v.to_string(),
            w: w.to_string(),
            name: if self.options.multigraph {
                name.map(str::to_string)
            } else {
                None
            },
        })
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        let key = EdgeKey {
            v: v.to_string(),
            w: w.to_string(),
            name: if self.options.multigraph {
                name.map(str::to_string)
            } else {
                None
            },
        };
        self.edge_index.get(&key).map(|&idx| &self.edges[idx].label)
    }
}
