use crate::graph::frontier::MinHeap;
use crate::graph::store::Graph;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Edge;
use std::collections::HashMap;

/// Distances and predecessor edges from a single root
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    root: usize,
    /// `None` for vertices the root cannot reach
    distances: Vec<Option<f64>>,
    /// Edge `(u, v)` on a shortest route into `v`; absent for the root and
    /// unreachable vertices
    predecessors: HashMap<usize, Edge>,
}

impl ShortestPaths {
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn distance(&self, vertex: usize) -> Option<f64> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn distances(&self) -> &[Option<f64>] {
        &self.distances
    }

    pub fn predecessor(&self, vertex: usize) -> Option<&Edge> {
        self.predecessors.get(&vertex)
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Edges of the shortest route from the root to `target`, root first
    ///
    /// Empty when `target` is the root or is unreachable.
    pub fn path_to(&self, target: usize) -> Vec<Edge> {
        let mut path = Vec::new();
        let mut current = target;
        while current != self.root {
            let Some(edge) = self.predecessors.get(&current) else {
                return Vec::new();
            };
            path.push(*edge);
            current = edge.u;
        }
        path.reverse();
        path
    }

    /// Pair every vertex value with its distance, in vertex order
    pub fn distance_map<'g, V>(&self, graph: &'g Graph<V>) -> Vec<(&'g V, Option<f64>)> {
        graph
            .vertices()
            .iter()
            .zip(self.distances.iter().copied())
            .collect()
    }
}

/// Single-source shortest paths from `root`
///
/// All edge weights must be non-negative. With a negative weight the result
/// is unspecified; this is not checked.
///
/// Heap entries are never updated in place. When a vertex is relaxed a new
/// entry is pushed, and an entry whose distance exceeds the recorded
/// distance for its vertex is discarded when popped.
///
/// # Panics
/// Panics if `root` is not a vertex index of `graph`.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra<G: GraphProvider + ?Sized>(graph: &G, root: usize) -> ShortestPaths {
    let count = graph.vertex_count();
    assert!(
        root < count,
        "root {} is outside the graph's 0..{} vertices",
        root,
        count
    );

    let mut distances: Vec<Option<f64>> = vec![None; count];
    let mut predecessors: HashMap<usize, Edge> = HashMap::new();
    let mut heap: MinHeap<usize> = MinHeap::new();
    let mut stale = 0;

    distances[root] = Some(0.0);
    heap.push_with_priority(root, 0.0);

    while let Some((u, dist_u)) = heap.pop_with_priority() {
        if distances[u].is_some_and(|best| dist_u > best) {
            stale += 1;
            continue;
        }

        for edge in graph.edges_for_index(u) {
            let candidate = dist_u + edge.weight;
            if distances[edge.v].is_none_or(|known| candidate < known) {
                distances[edge.v] = Some(candidate);
                predecessors.insert(edge.v, *edge);
                heap.push_with_priority(edge.v, candidate);
            }
        }
    }

    let result = ShortestPaths {
        root,
        distances,
        predecessors,
    };
    tracing::debug!(reachable = result.reachable_count(), stale, "dijkstra_done");
    result
}
