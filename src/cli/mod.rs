//! CLI argument parsing for graphwalk
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::SearchStrategy;
use parse::{parse_log_level, parse_sparseness, parse_strategy};

/// Graphwalk - graph search and optimization over weighted graphs and mazes
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (.json, .toml, .yaml); defaults to the built-in city network
    #[arg(long, global = true)]
    pub graph: Option<PathBuf>,

    /// Configuration file (defaults to graphwalk.toml in the config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route with the fewest edges between two vertices
    Path {
        /// Start vertex label
        from: String,

        /// Goal vertex label
        to: String,

        /// Search algorithm (bfs, dfs, astar)
        #[arg(long, short, default_value = "bfs", value_parser = parse_strategy)]
        algorithm: SearchStrategy,
    },

    /// Weighted shortest distances from a vertex (Dijkstra)
    Shortest {
        /// Root vertex label
        from: String,

        /// Also print the cheapest route to this vertex
        #[arg(long)]
        to: Option<String>,
    },

    /// Minimum spanning tree of a vertex's component (Prim)
    Mst {
        /// Vertex to grow the tree from (defaults to the first vertex)
        #[arg(long)]
        start: Option<String>,
    },

    /// Generate a random maze and solve it from corner to corner
    Maze {
        /// Number of rows (defaults to the configured value)
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns (defaults to the configured value)
        #[arg(long)]
        columns: Option<usize>,

        /// Probability of a blocked cell, 0.0 to 1.0
        #[arg(long, value_parser = parse_sparseness)]
        sparseness: Option<f64>,

        /// Seed for a reproducible maze
        #[arg(long)]
        seed: Option<u64>,

        /// Search algorithm (bfs, dfs, astar)
        #[arg(long, short, default_value = "astar", value_parser = parse_strategy)]
        algorithm: SearchStrategy,
    },

    /// Print the graph's adjacency lists
    Graph,
}
