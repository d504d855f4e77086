//! gv-graph: editable directed graph model for the graph viewer.
//!
//! Provides:
//! - A graph of named vertices with per-vertex enabled flags
//! - The enabled subgraph, derived on demand from the current flags
//! - A line-oriented `from -> to` edge-list parser
//!
//! # Example
//!
//! ```
//! use gv_graph::{Edge, Graph};
//!
//! let mut graph = Graph::from_text("A -> B\nB -> C\n");
//! graph.toggle_vertex("B", false);
//!
//! assert_eq!(graph.all_vertices().len(), 3);
//! assert!(graph.enabled_edges().is_empty());
//! assert!(graph.all_edges().contains(&Edge::new("A", "B")));
//! ```

pub mod edge;
pub mod graph;
pub mod parse;

// Re-exports for ergonomics
pub use edge::Edge;
pub use graph::{Graph, ParseReport, Subgraph};
pub use parse::{EdgeList, SkippedLine, parse_edge_line, parse_edge_list};
