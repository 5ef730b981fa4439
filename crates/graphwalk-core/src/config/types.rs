//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Settings read from `graphwalk.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Graph file used when `--graph` is not given (built-in cities otherwise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_graph: Option<PathBuf>,

    /// Maze generation defaults
    #[serde(default)]
    pub maze: MazeConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,

    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Probability that a cell is blocked (0.0 to 1.0)
    #[serde(default = "default_sparseness")]
    pub sparseness: f64,

    /// Fixed seed; a fresh one is drawn per run when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_rows() -> usize {
    10
}

fn default_columns() -> usize {
    10
}

fn default_sparseness() -> f64 {
    0.2
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            rows: default_rows(),
            columns: default_columns(),
            sparseness: default_sparseness(),
            seed: None,
        }
    }
}
