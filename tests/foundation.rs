//! Foundation tests: data types + graph store.

use bicolor::graph::{edge_views, node_views, UndirectedGraph};
use bicolor::types::{Color, Coloring};

fn neighbor_labels<'a>(graph: &'a UndirectedGraph, label: &str) -> Vec<&'a str> {
    graph.neighbors(label).iter().map(String::as_str).collect()
}

// ==================== Color Tests ====================

#[test]
fn test_color_opposite() {
    assert_eq!(Color::Red.opposite(), Color::Blue);
    assert_eq!(Color::Blue.opposite(), Color::Red);
    assert_eq!(Color::Red.opposite().opposite(), Color::Red);
}

#[test]
fn test_color_name_and_display() {
    assert_eq!(Color::Red.name(), "red");
    assert_eq!(Color::Blue.name(), "blue");
    assert_eq!(Color::Red.to_string(), "red");
    assert_eq!(Color::Blue.to_string(), "blue");
}

#[test]
fn test_empty_coloring() {
    let coloring = Coloring::new();
    assert!(coloring.is_empty());
    assert_eq!(coloring.len(), 0);
    assert_eq!(coloring.get("a"), None);
}

// ==================== Graph Store Tests ====================

#[test]
fn test_empty_graph() {
    let graph = UndirectedGraph::new();
    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.is_empty());
    assert!(graph.unique_edges().is_empty());
}

#[test]
fn test_add_edge_creates_both_vertices() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");

    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.contains("a"));
    assert!(graph.contains("b"));
    assert!(!graph.contains("c"));
}

#[test]
fn test_adjacency_is_symmetric() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");

    assert_eq!(neighbor_labels(&graph, "a"), ["b"]);
    assert_eq!(neighbor_labels(&graph, "b"), ["a"]);
}

#[test]
fn test_insertion_order_preserved() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("c", "a");
    graph.add_edge("a", "b");
    graph.add_edge("b", "d");

    let labels: Vec<&str> = graph.vertices().iter().map(|v| v.label()).collect();
    assert_eq!(labels, ["c", "a", "b", "d"]);
}

#[test]
fn test_neighbor_order_preserved() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("hub", "x");
    graph.add_edge("hub", "y");
    graph.add_edge("hub", "z");

    assert_eq!(neighbor_labels(&graph, "hub"), ["x", "y", "z"]);
}

#[test]
fn test_add_edge_idempotent_on_repeat() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");
    graph.add_edge("a", "b");
    graph.add_edge("a", "b");

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(neighbor_labels(&graph, "a"), ["b"]);
    assert_eq!(neighbor_labels(&graph, "b"), ["a"]);
    assert_eq!(graph.unique_edges(), [("a", "b")]);
}

#[test]
fn test_add_edge_idempotent_on_swapped_endpoints() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");
    graph.add_edge("b", "a");

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(neighbor_labels(&graph, "a"), ["b"]);
    assert_eq!(neighbor_labels(&graph, "b"), ["a"]);
    assert_eq!(graph.unique_edges(), [("a", "b")]);
}

#[test]
fn test_unique_edges_emits_each_pair_once() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");
    graph.add_edge("c", "a");

    let edges = graph.unique_edges();
    assert_eq!(edges, [("a", "b"), ("a", "c"), ("b", "c")]);

    // Never a pair twice, never both orientations
    for (i, &(f1, t1)) in edges.iter().enumerate() {
        for &(f2, t2) in &edges[i + 1..] {
            assert!(!(f1 == f2 && t1 == t2));
            assert!(!(f1 == t2 && t1 == f2));
        }
    }
}

#[test]
fn test_unique_edges_on_star() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("hub", "x");
    graph.add_edge("hub", "y");
    graph.add_edge("z", "hub");

    assert_eq!(
        graph.unique_edges(),
        [("hub", "x"), ("hub", "y"), ("hub", "z")]
    );
}

#[test]
fn test_self_loop_stored_once() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "a");

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(neighbor_labels(&graph, "a"), ["a"]);
    assert_eq!(graph.unique_edges(), [("a", "a")]);
}

#[test]
fn test_vertex_lookup() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");

    let vertex = graph.vertex("a").unwrap();
    assert_eq!(vertex.label(), "a");
    assert!(graph.vertex("missing").is_none());
    assert!(graph.neighbors("missing").is_empty());
}

// ==================== View Tests ====================

#[test]
fn test_node_views_without_coloring() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");

    let nodes = node_views(&graph, &Coloring::new());
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].id, "a");
    assert_eq!(nodes[0].label, "a");
    assert_eq!(nodes[0].color, None);
    assert_eq!(nodes[1].id, "b");
}

#[test]
fn test_edge_views_match_unique_edges() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");

    let edges = edge_views(&graph);
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].from, "a");
    assert_eq!(edges[0].to, "b");
    assert_eq!(edges[1].from, "b");
    assert_eq!(edges[1].to, "c");
}

#[test]
fn test_views_serialize_for_rendering() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "b");

    let nodes = node_views(&graph, &Coloring::new());
    let json = serde_json::to_value(&nodes).unwrap();
    assert_eq!(json[0]["id"], "a");
    assert_eq!(json[0]["color"], serde_json::Value::Null);

    let edges = edge_views(&graph);
    let json = serde_json::to_value(&edges).unwrap();
    assert_eq!(json[0]["from"], "a");
    assert_eq!(json[0]["to"], "b");
}
