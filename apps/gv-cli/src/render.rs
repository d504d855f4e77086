//! Text and JSON output for a graph or its enabled subgraph.

use std::io::Write;

use clap::ValueEnum;
use gv_graph::{Edge, Graph, ParseReport};
use serde::Serialize;

use crate::error::CliResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct VertexOut<'a> {
    name: &'a str,
    enabled: bool,
}

#[derive(Serialize)]
struct GraphOut<'a> {
    vertices: Vec<VertexOut<'a>>,
    edges: Vec<&'a Edge>,
}

/// Write every vertex and edge, marking disabled vertices and hidden edges.
pub fn write_full(out: &mut impl Write, graph: &Graph, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            let enabled_edges = graph.enabled_edges();

            writeln!(out, "Vertices ({}):", graph.vertex_count())?;
            for name in graph.all_vertices() {
                if graph.is_enabled(name) == Some(false) {
                    writeln!(out, "  {} [disabled]", name)?;
                } else {
                    writeln!(out, "  {}", name)?;
                }
            }

            writeln!(out, "Edges ({}):", graph.edge_count())?;
            for edge in graph.all_edges() {
                if enabled_edges.contains(edge) {
                    writeln!(out, "  {}", edge)?;
                } else {
                    writeln!(out, "  {} [hidden]", edge)?;
                }
            }
        }
        OutputFormat::Json => {
            let doc = GraphOut {
                vertices: graph
                    .all_vertices()
                    .into_iter()
                    .map(|name| VertexOut {
                        name,
                        enabled: graph.is_enabled(name).unwrap_or(false),
                    })
                    .collect(),
                edges: graph.all_edges().iter().collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write only the enabled subgraph.
pub fn write_enabled(out: &mut impl Write, graph: &Graph, format: OutputFormat) -> CliResult<()> {
    let sub = graph.enabled_subgraph();
    match format {
        OutputFormat::Text => {
            writeln!(out, "Vertices ({}):", sub.vertices.len())?;
            for name in &sub.vertices {
                writeln!(out, "  {}", name)?;
            }
            writeln!(out, "Edges ({}):", sub.edges.len())?;
            for edge in &sub.edges {
                writeln!(out, "  {}", edge)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &sub)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the vertex/edge counts and every line that was not an edge.
pub fn write_check_report(
    out: &mut impl Write,
    graph: &Graph,
    report: &ParseReport,
) -> CliResult<()> {
    writeln!(
        out,
        "  {} vertices, {} edges ({} edge lines read)",
        graph.vertex_count(),
        graph.edge_count(),
        report.edges_read
    )?;

    if report.skipped.is_empty() {
        writeln!(out, "✓ Every non-blank line is an edge")?;
    } else {
        writeln!(out, "Skipped {} line(s):", report.skipped.len())?;
        for line in &report.skipped {
            writeln!(out, "  line {}: {}", line.line_no, line.content)?;
        }
    }
    Ok(())
}
