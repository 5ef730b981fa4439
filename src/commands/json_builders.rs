//! Shared JSON building utilities for consistent JSON output formats

use graphwalk_core::graph::{Edge, Graph};

/// Edge with labelled endpoints
pub fn edge_to_json(graph: &Graph<String>, edge: &Edge) -> serde_json::Value {
    serde_json::json!({
        "from": graph.vertex_at(edge.u),
        "to": graph.vertex_at(edge.v),
        "weight": edge.weight,
    })
}

pub fn edges_to_json(graph: &Graph<String>, edges: &[Edge]) -> Vec<serde_json::Value> {
    edges.iter().map(|e| edge_to_json(graph, e)).collect()
}
