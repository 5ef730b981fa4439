//! Graphwalk Core Library
//!
//! Graph storage, frontier containers and the search family built on them:
//! depth-first, breadth-first, A*, Dijkstra and Prim. Also the grid maze and
//! city fixtures used to exercise them, graph file loading, configuration
//! and logging setup for the `graphwalk` binary.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod graph;
pub mod grid;
pub mod loader;
pub mod logging;
pub mod records;
