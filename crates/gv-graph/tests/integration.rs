//! Integration tests for gv-graph.

use std::collections::BTreeSet;

use gv_graph::{Edge, Graph};

fn names<'a>(list: &[&'a str]) -> BTreeSet<&'a str> {
    list.iter().copied().collect()
}

fn edges(list: &[(&str, &str)]) -> BTreeSet<Edge> {
    list.iter().map(|&(a, b)| Edge::new(a, b)).collect()
}

#[test]
fn parse_cycle_with_loose_spacing() {
    let mut graph = Graph::new();
    graph.parse_from_text("A -> B\nB -> C\n  C  ->  A  \n");

    assert_eq!(graph.all_vertices(), names(&["A", "B", "C"]));
    assert_eq!(
        *graph.all_edges(),
        edges(&[("A", "B"), ("B", "C"), ("C", "A")])
    );
}

#[test]
fn parse_skips_malformed_lines() {
    let mut graph = Graph::new();
    graph.parse_from_text("A -> B\nfoo\nC -> D -> E\n");

    assert_eq!(graph.all_vertices(), names(&["A", "B"]));
    assert_eq!(*graph.all_edges(), edges(&[("A", "B")]));
}

#[test]
fn parse_accepts_old_mac_line_endings() {
    let graph = Graph::from_text("A -> B\rC -> D");

    assert_eq!(graph.all_vertices(), names(&["A", "B", "C", "D"]));
    assert_eq!(*graph.all_edges(), edges(&[("A", "B"), ("C", "D")]));
}

#[test]
fn parse_accepts_mixed_line_endings() {
    let graph = Graph::from_text("A -> B\r\nB -> C\rC -> A\r");
    assert_eq!(
        *graph.all_edges(),
        edges(&[("A", "B"), ("B", "C"), ("C", "A")])
    );
}

#[test]
fn disabling_shared_vertex_hides_its_edges() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.toggle_vertex("B", false);

    assert!(graph.enabled_edges().is_empty());
    assert_eq!(graph.enabled_vertices(), names(&["A", "C"]));
    assert_eq!(graph.all_edges().len(), 2);
}

#[test]
fn add_edge_twice_keeps_one_edge() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "B");
    assert_eq!(*graph.all_edges(), edges(&[("A", "B")]));
}

#[test]
fn add_vertex_does_not_reenable() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.toggle_vertex("A", false);
    graph.add_vertex("A");

    assert_eq!(graph.all_vertices(), names(&["A"]));
    assert!(graph.enabled_vertices().is_empty());
}

#[test]
fn toggle_of_missing_vertex_adds_nothing() {
    let mut graph = Graph::from_text("A -> B");
    graph.toggle_vertex("x", false);
    assert_eq!(graph.all_vertices(), names(&["A", "B"]));
}

#[test]
fn clear_then_query_is_empty() {
    let mut graph = Graph::from_text("A -> B\nB -> C");
    graph.toggle_vertex("A", false);
    graph.clear();

    assert!(graph.all_vertices().is_empty());
    assert!(graph.enabled_vertices().is_empty());
    assert!(graph.all_edges().is_empty());
    assert!(graph.enabled_edges().is_empty());
}

#[test]
fn parse_resets_flags() {
    let mut graph = Graph::from_text("A -> B");
    graph.toggle_vertex("A", false);
    graph.parse_from_text("A -> B");
    assert_eq!(graph.is_enabled("A"), Some(true));
}

#[test]
fn empty_names_from_degenerate_lines() {
    let graph = Graph::from_text("-> B\nA ->\n");
    assert_eq!(graph.all_vertices(), names(&["", "A", "B"]));
    assert_eq!(*graph.all_edges(), edges(&[("", "B"), ("A", "")]));
}

#[test]
fn enabled_queries_follow_current_flags() {
    let mut graph = Graph::from_text("A -> B\nB -> C\nA -> C");
    graph.toggle_vertex("C", false);
    assert_eq!(graph.enabled_edges(), edges(&[("A", "B")]));

    graph.toggle_vertex("C", true);
    graph.toggle_vertex("A", false);
    assert_eq!(graph.enabled_edges(), edges(&[("B", "C")]));
    assert_eq!(graph.enabled_subgraph().edges, edges(&[("B", "C")]));
}
