use crate::graph::store::Graph;
use crate::graph::types::Edge;

/// Trait for providing weighted adjacency to the graph algorithms
///
/// Implementations must return edges in a stable order and must not change
/// while a search is running.
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn edges_for_index(&self, index: usize) -> &[Edge];
}

impl<V> GraphProvider for Graph<V> {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn edges_for_index(&self, index: usize) -> &[Edge] {
        Graph::edges_for_index(self, index)
    }
}
