//! Edge-list text format.
//!
//! One edge per line, written `from -> to`. Whitespace around names and
//! around the arrow is ignored. There is no quoting, escaping or comment
//! syntax. Lines that do not contain exactly one arrow are skipped without
//! error; blank lines are ignored.

use crate::edge::Edge;

const ARROW: &str = "->";

/// A non-empty line that did not describe an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input text.
    pub line_no: usize,
    /// The line with surrounding whitespace trimmed.
    pub content: String,
}

/// Result of a stateless pass over edge-list text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Edges in input order, duplicates included.
    pub edges: Vec<Edge>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a single line.
///
/// Returns `None` for blank lines and for lines that split on `->` into
/// anything other than exactly two parts. Empty names are kept as-is, so
/// `"-> B"` yields an edge from `""` to `"B"`.
pub fn parse_edge_line(line: &str) -> Option<Edge> {
    split_arrow(line.trim())
}

/// Split an already trimmed line. A blank line has no arrow, so it yields `None`.
fn split_arrow(line: &str) -> Option<Edge> {
    let mut parts = line.split(ARROW).map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Some(Edge::new(from, to)),
        _ => None,
    }
}

/// Split `text` into lines on `\n`, `\r\n` or a lone `\r`.
///
/// `\r\n` counts as a single break, so line numbers match what an editor shows.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}

/// Parse every line of `text`, collecting edges and malformed lines.
pub fn parse_edge_list(text: &str) -> EdgeList {
    let mut list = EdgeList::default();

    for (idx, raw) in lines(text).enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match split_arrow(line) {
            Some(edge) => list.edges.push(edge),
            None => list.skipped.push(SkippedLine {
                line_no: idx + 1,
                content: line.to_string(),
            }),
        }
    }

    list
}
