//! CLI commands for graphwalk

pub mod dispatch;
pub mod graph;
pub mod json_builders;
pub mod maze;
pub mod mst;
pub mod path;
pub mod shortest;
