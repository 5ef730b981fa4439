//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use graphwalk_core::config::Config;
use graphwalk_core::error::Result;
use graphwalk_core::fixtures::weighted_city_graph;
use graphwalk_core::graph::Graph;
use graphwalk_core::loader::load_graph;

/// Label used in output when no graph file is given
const BUILTIN_SOURCE: &str = "cities";

/// A graph together with where it came from
pub struct LoadedGraph {
    pub source: String,
    pub graph: Graph<String>,
}

impl LoadedGraph {
    /// Vertex index for a label, or a data error naming the label
    pub fn resolve(&self, label: &str) -> Result<usize> {
        self.graph.require_index(&label.to_string())
    }

    pub fn label(&self, index: usize) -> &str {
        self.graph.vertex_at(index)
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = Config::load_or_default(cli.config.as_deref())?;
        let format = cli.format.unwrap_or(config.output.format);
        Ok(Self {
            cli,
            config,
            format,
            start,
        })
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Load `--graph`, else the configured default graph, else the cities
    pub fn load_graph(&self) -> Result<LoadedGraph> {
        let path = self
            .cli
            .graph
            .as_ref()
            .or(self.config.default_graph.as_ref());

        let loaded = match path {
            Some(path) => LoadedGraph {
                source: path.display().to_string(),
                graph: load_graph(path)?,
            },
            None => LoadedGraph {
                source: BUILTIN_SOURCE.to_string(),
                graph: weighted_city_graph(),
            },
        };

        graphwalk_core::trace_time!(
            self.start,
            "load_graph",
            vertices = loaded.graph.vertex_count()
        );
        Ok(loaded)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path {
                from,
                to,
                algorithm,
            } => {
                let loaded = ctx.load_graph()?;
                commands::path::execute(ctx, &loaded, from, to, *algorithm)
            }

            Commands::Shortest { from, to } => {
                let loaded = ctx.load_graph()?;
                commands::shortest::execute(ctx, &loaded, from, to.as_deref())
            }

            Commands::Mst { start } => {
                let loaded = ctx.load_graph()?;
                commands::mst::execute(ctx, &loaded, start.as_deref())
            }

            Commands::Maze {
                rows,
                columns,
                sparseness,
                seed,
                algorithm,
            } => commands::maze::execute(
                ctx,
                commands::maze::MazeOptions {
                    rows: *rows,
                    columns: *columns,
                    sparseness: *sparseness,
                    seed: *seed,
                    algorithm: *algorithm,
                },
            ),

            Commands::Graph => {
                let loaded = ctx.load_graph()?;
                commands::graph::execute(ctx, &loaded)
            }
        }
    }
}
