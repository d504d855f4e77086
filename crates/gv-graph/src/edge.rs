//! Directed edge value type.

use core::fmt;

/// A directed connection from one vertex to another, referenced by name.
///
/// Edges carry no state of their own. Two edges are the same edge when both
/// endpoints match, which is what keeps the graph's edge set free of
/// duplicates. Self-loops (`from == to`) are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    /// Create an edge from `from` to `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when the edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Edge {
    fn from((from, to): (A, B)) -> Self {
        Self::new(from, to)
    }
}

/// Renders in edge-list notation, e.g. `A -> B`.
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
