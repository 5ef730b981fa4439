use crate::graph::frontier::{Frontier, MinHeap};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Edge;

/// Minimum spanning tree of the component containing `start` (Prim)
///
/// Edges are returned in the order they join the tree, each oriented from
/// the tree side to the newly reached vertex. A disconnected graph yields the
/// tree of `start`'s component only. An out-of-range `start` yields no edges.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn mst<G: GraphProvider + ?Sized>(graph: &G, start: usize) -> Vec<Edge> {
    let count = graph.vertex_count();
    if start >= count {
        tracing::debug!(start, count, "start_out_of_range");
        return Vec::new();
    }

    let mut tree = Vec::with_capacity(count.saturating_sub(1));
    let mut visited = vec![false; count];
    let mut heap: MinHeap<Edge> = MinHeap::new();

    let visit = |index: usize, visited: &mut [bool], heap: &mut MinHeap<Edge>| {
        visited[index] = true;
        for edge in graph.edges_for_index(index) {
            if !visited[edge.v] {
                heap.push(*edge);
            }
        }
    };

    visit(start, &mut visited, &mut heap);
    while let Some(edge) = heap.pop() {
        // Both ends may have joined since this edge was pushed
        if visited[edge.v] {
            continue;
        }
        tree.push(edge);
        visit(edge.v, &mut visited, &mut heap);
    }

    tracing::debug!(edges = tree.len(), "mst_done");
    tree
}
