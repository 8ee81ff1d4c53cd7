use yamldot_graph::{EdgeKey, Graph, GraphOptions};

#[test]
fn nodes_keep_insertion_order() {
    let mut g: Graph<i32, (), ()> = Graph::default();
    g.set_node("b", 1);
    g.set_node("a", 2);
    g.set_node("c", 3);

    let ids: Vec<&str> = g.nodes().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn set_node_twice_replaces_the_label_without_duplicating() {
    let mut g: Graph<i32, (), ()> = Graph::default();
    g.set_node("a", 1);
    g.set_node("a", 9);

    assert_eq!(g.node_count(), 1);
    assert_eq!(g.node("a"), Some(&9));
}

#[test]
fn set_edge_materializes_missing_endpoints() {
    let mut g: Graph<i32, i32, ()> = Graph::default();
    g.set_edge("a", "b", 5);

    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
    assert_eq!(g.node("a"), Some(&0));
    assert_eq!(g.edge("a", "b", None), Some(&5));
}

#[test]
fn plain_digraph_coerces_edge_names_to_none() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions { multigraph: false });
    g.set_edge_named("a", "b", Some("x"), 1);
    g.set_edge_named("a", "b", Some("y"), 2);

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge("a", "b", None), Some(&2));
}

#[test]
fn multigraph_keeps_parallel_edges_apart_by_name() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions { multigraph: true });
    g.set_edge_named("a", "b", Some("x"), 1);
    g.set_edge_named("a", "b", Some("y"), 2);

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge("a", "b", Some("x")), Some(&1));
    assert_eq!(g.edge("a", "b", Some("y")), Some(&2));
    assert!(!g.has_edge("a", "b", Some("z")));
}

#[test]
fn edges_keep_insertion_order() {
    let mut g: Graph<(), (), ()> = Graph::default();
    g.set_edge("b", "c", ());
    g.set_edge("a", "b", ());

    let keys: Vec<&EdgeKey> = g.edges().map(|(k, _)| k).collect();
    assert_eq!(keys[0].v, "b");
    assert_eq!(keys[1].v, "a");
}

#[test]
fn graph_label_round_trips() {
    let mut g: Graph<(), (), String> = Graph::default();
    assert_eq!(g.graph(), "");
    g.set_graph("LR".to_string());
    assert_eq!(g.graph(), "LR");
}
