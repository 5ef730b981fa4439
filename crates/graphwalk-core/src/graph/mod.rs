//! Graph storage, frontiers and search algorithms
//!
//! Provides:
//! - An undirected adjacency-list graph store
//! - Stack, queue and min-heap frontiers
//! - DFS, BFS and A* over any successor function
//! - Dijkstra shortest paths and Prim minimum spanning trees over a
//!   [`GraphProvider`]

pub mod algos;
pub mod frontier;
pub mod node;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{astar, astar_weighted, bfs, dfs, dijkstra, mst, SearchStrategy, ShortestPaths};
pub use frontier::{Frontier, MinHeap, Prioritized, Queue, Stack};
pub use node::{node_to_path, Node, NodeArena, NodeId, Solution};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{format_weighted_path, total_weight, Edge, DEFAULT_WEIGHT};
