//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `uninformed`: depth-first and breadth-first search
//! - `astar`: heuristic best-first search
//! - `dijkstra`: single-source weighted shortest paths
//! - `mst`: Prim/Jarník minimum spanning tree

pub mod astar;
pub mod dijkstra;
pub mod mst;
pub mod uninformed;

pub use astar::{astar, astar_weighted};
pub use dijkstra::{dijkstra, ShortestPaths};
pub use mst::mst;
pub use uninformed::{bfs, dfs};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GraphwalkError;

/// Goal-directed search selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    #[default]
    Bfs,
    Dfs,
    Astar,
}

impl SearchStrategy {
    pub const NAMES: &'static str = "bfs, dfs, astar";
}

impl FromStr for SearchStrategy {
    type Err = GraphwalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(SearchStrategy::Bfs),
            "dfs" => Ok(SearchStrategy::Dfs),
            "astar" | "a*" => Ok(SearchStrategy::Astar),
            other => Err(GraphwalkError::UnknownAlgorithm(
                other.to_string(),
                Self::NAMES,
            )),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Bfs => write!(f, "bfs"),
            SearchStrategy::Dfs => write!(f, "dfs"),
            SearchStrategy::Astar => write!(f, "astar"),
        }
    }
}
