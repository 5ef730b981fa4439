use crate::graph::frontier::Prioritized;
use serde::Serialize;
use std::fmt;

/// Weight used for edges inserted without an explicit weight
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A directed half of an undirected edge, stored under the adjacency list of `u`
///
/// Weights must be non-negative for Dijkstra and Prim to be correct. This is
/// not checked on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Edge { u, v, weight }
    }

    pub fn unweighted(u: usize, v: usize) -> Self {
        Edge::new(u, v, DEFAULT_WEIGHT)
    }

    /// The same edge seen from the other endpoint
    pub fn reversed(&self) -> Self {
        Edge::new(self.v, self.u, self.weight)
    }
}

/// Spanning-tree candidates pop cheapest first
impl Prioritized for Edge {
    fn priority(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) -> {}", self.u, self.weight, self.v)
    }
}

/// Sum of the weights along an edge sequence
pub fn total_weight(path: &[Edge]) -> f64 {
    path.iter().map(|e| e.weight).sum()
}

/// Render a weighted route as `U weight > V` lines followed by the total
pub fn format_weighted_path<V: fmt::Display>(
    graph: &super::Graph<V>,
    path: &[Edge],
) -> String {
    let mut out = String::new();
    for edge in path {
        out.push_str(&format!(
            "{} {:.2} > {}\n",
            graph.vertex_at(edge.u),
            edge.weight,
            graph.vertex_at(edge.v)
        ));
    }
    out.push_str(&format!("Total Weight: {}\n", total_weight(path)));
    out
}
