//! The editable directed graph.

use core::convert::Infallible;
use core::str::FromStr;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::edge::Edge;
use crate::parse::{self, SkippedLine};

/// A directed graph of named vertices, each carrying an enabled flag.
///
/// The graph stores:
/// - A map from vertex name to its enabled flag.
/// - A set of directed edges referencing vertices by name.
///
/// Every edge endpoint is a vertex: `add_edge` creates missing endpoints.
/// The enabled subgraph is never stored; it is derived from the current
/// flags on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: BTreeMap<String, bool>,
    edges: BTreeSet<Edge>,
}

/// Owned snapshot of the enabled subgraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Subgraph {
    pub vertices: BTreeSet<String>,
    pub edges: BTreeSet<Edge>,
}

/// Summary of a `parse_from_text_with_report` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Edge lines read, duplicates included.
    pub edges_read: usize,
    pub skipped: Vec<SkippedLine>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from edge-list text.
    pub fn from_text(text: &str) -> Self {
        let mut graph = Self::new();
        graph.parse_from_text(text);
        graph
    }

    /// Add a vertex, enabled.
    ///
    /// Does nothing if the vertex already exists; its enabled flag is kept.
    pub fn add_vertex(&mut self, name: impl Into<String>) {
        self.vertices.entry(name.into()).or_insert(true);
    }

    /// Borrowing variant of `add_vertex`: only allocates for new names.
    fn ensure_vertex(&mut self, name: &str) {
        if !self.vertices.contains_key(name) {
            self.add_vertex(name);
        }
    }

    /// Add a directed edge, creating either endpoint if it is missing.
    ///
    /// Existing endpoints keep their enabled flag. Adding an edge twice is a no-op.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.insert_edge(Edge::new(from, to));
    }

    fn insert_edge(&mut self, edge: Edge) {
        self.ensure_vertex(&edge.from);
        self.ensure_vertex(&edge.to);
        self.edges.insert(edge);
    }

    /// Set the enabled flag of an existing vertex.
    ///
    /// Unknown names are ignored: the vertex is not created.
    pub fn toggle_vertex(&mut self, name: &str, enabled: bool) {
        if let Some(flag) = self.vertices.get_mut(name) {
            *flag = enabled;
        }
    }

    /// All vertex names, enabled or not.
    pub fn all_vertices(&self) -> BTreeSet<&str> {
        self.vertices.keys().map(String::as_str).collect()
    }

    /// Names of the vertices that are currently enabled.
    pub fn enabled_vertices(&self) -> BTreeSet<&str> {
        self.vertices
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All edges, including those touching disabled vertices.
    pub fn all_edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// Edges whose endpoints are both currently enabled.
    pub fn enabled_edges(&self) -> BTreeSet<Edge> {
        self.edges
            .iter()
            .filter(|edge| self.is_enabled(&edge.from) == Some(true))
            .filter(|edge| self.is_enabled(&edge.to) == Some(true))
            .cloned()
            .collect()
    }

    /// Snapshot of the enabled vertices and the edges between them.
    pub fn enabled_subgraph(&self) -> Subgraph {
        Subgraph {
            vertices: self
                .enabled_vertices()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            edges: self.enabled_edges(),
        }
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// Enabled flag of a vertex, or `None` if it does not exist.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.vertices.get(name).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Remove every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Replace the graph's contents with the edges described by `text`.
    ///
    /// Malformed lines are skipped silently (logged at debug level).
    pub fn parse_from_text(&mut self, text: &str) {
        self.parse_from_text_with_report(text);
    }

    /// Same as [`Graph::parse_from_text`], reporting what was read and skipped.
    pub fn parse_from_text_with_report(&mut self, text: &str) -> ParseReport {
        self.clear();

        let list = parse::parse_edge_list(text);
        for skipped in &list.skipped {
            debug!(
                line = skipped.line_no,
                content = %skipped.content,
                "skipping malformed edge line"
            );
        }

        let edges_read = list.edges.len();
        self.extend(list.edges);
        debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "parsed edge list"
        );

        ParseReport {
            edges_read,
            skipped: list.skipped,
        }
    }
}

impl FromStr for Graph {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_text(text))
    }
}

impl Extend<Edge> for Graph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.insert_edge(edge);
        }
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
