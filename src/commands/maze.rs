//! `graphwalk maze` command - generate a random maze and solve it
//!
//! The maze runs from the bottom-left corner to the top-right corner. Flags
//! override the `[maze]` config section; without a seed a fresh one is drawn
//! and reported so the run can be repeated.

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphwalk_core::config::MazeConfig;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{astar, bfs, dfs, SearchStrategy};
use graphwalk_core::grid::{Grid, GridLocation};
use graphwalk_core::records::{format_data_record, format_header, format_vertex_record};

/// Maze flags as given on the command line
#[derive(Debug, Clone, Copy)]
pub struct MazeOptions {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub sparseness: Option<f64>,
    pub seed: Option<u64>,
    pub algorithm: SearchStrategy,
}

impl MazeOptions {
    /// Fill unset flags from the configured defaults
    fn resolve(&self, defaults: &MazeConfig) -> MazeConfig {
        MazeConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            columns: self.columns.unwrap_or(defaults.columns),
            sparseness: self.sparseness.unwrap_or(defaults.sparseness),
            seed: self.seed.or(defaults.seed),
        }
    }
}

/// Execute the maze command
pub fn execute(ctx: &CommandContext, options: MazeOptions) -> Result<()> {
    let settings = options.resolve(&ctx.config.maze);
    settings.validate()?;
    let seed = settings.seed.unwrap_or_else(Grid::fresh_seed);
    let algorithm = options.algorithm;

    let start = GridLocation::new(0, 0);
    let goal = GridLocation::new(settings.rows - 1, settings.columns - 1);
    let mut grid = Grid::random(
        settings.rows,
        settings.columns,
        settings.sparseness,
        start,
        goal,
        seed,
    );

    let solution = match algorithm {
        SearchStrategy::Bfs => bfs(start, |l| grid.is_goal(l), |l| grid.successors(l)),
        SearchStrategy::Dfs => dfs(start, |l| grid.is_goal(l), |l| grid.successors(l)),
        SearchStrategy::Astar => astar(
            start,
            |l| grid.is_goal(l),
            |l| grid.successors(l),
            |l| grid.heuristic(l),
        ),
    };
    let path: Vec<GridLocation> = solution.as_ref().map(|s| s.path()).unwrap_or_default();
    let moves = solution.as_ref().map(|_| path.len() - 1);
    let expanded = solution.as_ref().map(|s| s.expanded());
    grid.mark(&path);

    tracing::debug!(seed, found = solution.is_some(), "maze_solved");

    match ctx.format {
        OutputFormat::Json => {
            let rendered = grid.to_string();
            let output = serde_json::json!({
                "rows": settings.rows,
                "columns": settings.columns,
                "sparseness": settings.sparseness,
                "seed": seed,
                "algorithm": algorithm,
                "found": solution.is_some(),
                "moves": moves,
                "expanded": expanded,
                "path": path,
                "grid": rendered.lines().collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let mut fields = vec![
                ("rows", settings.rows.to_string()),
                ("columns", settings.columns.to_string()),
                ("seed", seed.to_string()),
                ("algorithm", algorithm.to_string()),
                ("found", solution.is_some().to_string()),
            ];
            if let (Some(moves), Some(expanded)) = (moves, expanded) {
                fields.push(("moves", moves.to_string()));
                fields.push(("expanded", expanded.to_string()));
            }
            println!("{}", format_header("maze", "maze", &fields));
            for (step, loc) in path.iter().enumerate() {
                println!("{}", format_vertex_record(step, &loc.to_string()));
            }
            for line in grid.to_string().lines() {
                println!("{}", format_data_record("row", line, &[]));
            }
        }
        OutputFormat::Human => {
            print!("{}", grid);
            if !ctx.quiet() {
                match (moves, expanded) {
                    (Some(moves), Some(expanded)) => println!(
                        "Solved with {} in {} moves, {} states expanded (seed {})",
                        algorithm, moves, expanded, seed
                    ),
                    _ => println!("No path through the maze (seed {})", seed),
                }
            }
        }
    }

    Ok(())
}
