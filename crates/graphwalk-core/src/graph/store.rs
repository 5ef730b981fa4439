//! Adjacency-list graph store
//!
//! Vertices are identified by their insertion index. The vertex sequence only
//! grows, so indices stay valid for the lifetime of the graph. Every edge is
//! undirected: inserting `(u, v)` also stores `(v, u)` with the same weight.

use crate::error::{GraphwalkError, Result};
use crate::graph::types::Edge;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: Vec<V>,
    edges: Vec<Vec<Edge>>,
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Build a graph from an initial vertex sequence, with no edges
    pub fn with_vertices(vertices: impl IntoIterator<Item = V>) -> Self {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let edges = vertices.iter().map(|_| Vec::new()).collect();
        Graph { vertices, edges }
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, value: V) -> usize {
        self.vertices.push(value);
        self.edges.push(Vec::new());
        self.vertices.len() - 1
    }

    /// Insert an undirected edge between two vertex indices
    ///
    /// # Panics
    /// Panics if either index is out of range. Indices come from
    /// [`Graph::add_vertex`] or [`Graph::index_of`], so an invalid one is a
    /// programming error.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        let count = self.vertices.len();
        assert!(
            u < count && v < count,
            "edge ({}, {}) references a vertex outside 0..{}",
            u,
            v,
            count
        );
        let edge = Edge::new(u, v, weight);
        self.edges[u].push(edge);
        self.edges[v].push(edge.reversed());
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edge halves (each undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn vertex_at(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    /// Outgoing edges of `index`, in insertion order
    pub fn edges_for_index(&self, index: usize) -> &[Edge] {
        &self.edges[index]
    }

    /// `(neighbor_index, weight)` pairs in insertion order
    ///
    /// This order decides tie-breaking in every traversal, so it must stay
    /// stable across calls.
    pub fn neighbors(&self, index: usize) -> Vec<(usize, f64)> {
        self.edges[index].iter().map(|e| (e.v, e.weight)).collect()
    }

    /// Neighbor indices only, suitable as a successor function
    pub fn neighbor_indices(&self, index: usize) -> Vec<usize> {
        self.edges[index].iter().map(|e| e.v).collect()
    }

    /// Neighbor values in insertion order
    pub fn neighbors_for_index(&self, index: usize) -> Vec<&V> {
        self.edges[index]
            .iter()
            .map(|e| self.vertex_at(e.v))
            .collect()
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> Graph<V> {
    /// Index of the first vertex equal to `value` (linear scan)
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == value)
    }

    pub fn edges_for_value(&self, value: &V) -> Option<&[Edge]> {
        self.index_of(value).map(|i| self.edges_for_index(i))
    }

    pub fn neighbors_for_value(&self, value: &V) -> Option<Vec<&V>> {
        self.index_of(value).map(|i| self.neighbors_for_index(i))
    }
}

impl<V: PartialEq + fmt::Display> Graph<V> {
    /// Insert an edge between two vertices looked up by value
    ///
    /// Duplicate-valued vertices resolve to the first inserted one.
    pub fn add_edge_by_value(&mut self, a: &V, b: &V, weight: f64) -> Result<()> {
        let u = self
            .index_of(a)
            .ok_or_else(|| GraphwalkError::vertex_not_found(a))?;
        let v = self
            .index_of(b)
            .ok_or_else(|| GraphwalkError::vertex_not_found(b))?;
        self.add_edge(u, v, weight);
        Ok(())
    }

    /// Resolve a vertex by value, failing with a data error when absent
    pub fn require_index(&self, value: &V) -> Result<usize> {
        self.index_of(value)
            .ok_or_else(|| GraphwalkError::vertex_not_found(value))
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            let neighbors: Vec<String> = self.edges[i]
                .iter()
                .map(|e| format!("{} ({})", self.vertices[e.v], e.weight))
                .collect();
            writeln!(f, "{} -> [{}]", vertex, neighbors.join(", "))?;
        }
        Ok(())
    }
}
