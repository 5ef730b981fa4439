//! `graphwalk path` command - fewest-edge route between two vertices
//!
//! Edge weights are ignored: every search counts hops, A* with a zero
//! heuristic. A missing route is a normal result, reported as not found.

use crate::cli::OutputFormat;
use crate::commands::dispatch::{CommandContext, LoadedGraph};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{astar, bfs, dfs, SearchStrategy, Solution};
use graphwalk_core::records::{format_header, format_vertex_record, quoted};

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    loaded: &LoadedGraph,
    from: &str,
    to: &str,
    algorithm: SearchStrategy,
) -> Result<()> {
    let graph = &loaded.graph;
    let start = loaded.resolve(from)?;
    let goal = loaded.resolve(to)?;

    let solution: Option<Solution<usize>> = match algorithm {
        SearchStrategy::Bfs => bfs(start, |&v| v == goal, |&v| graph.neighbor_indices(v)),
        SearchStrategy::Dfs => dfs(start, |&v| v == goal, |&v| graph.neighbor_indices(v)),
        SearchStrategy::Astar => astar(
            start,
            |&v| v == goal,
            |&v| graph.neighbor_indices(v),
            |_| 0.0,
        ),
    };

    let route: Vec<usize> = solution.as_ref().map(|s| s.path()).unwrap_or_default();
    let hops = route.len().saturating_sub(1);
    let expanded = solution.as_ref().map(|s| s.expanded());

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "graph": loaded.source,
                "from": from,
                "to": to,
                "algorithm": algorithm,
                "found": solution.is_some(),
                "hops": solution.as_ref().map(|_| hops),
                "expanded": expanded,
                "path": route.iter().map(|&i| loaded.label(i)).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let mut fields = vec![
                ("from", quoted(from)),
                ("to", quoted(to)),
                ("algorithm", algorithm.to_string()),
                ("found", solution.is_some().to_string()),
            ];
            if let Some(expanded) = expanded {
                fields.push(("hops", hops.to_string()));
                fields.push(("expanded", expanded.to_string()));
            }
            println!("{}", format_header(&loaded.source, "path", &fields));
            for &index in &route {
                println!("{}", format_vertex_record(index, loaded.label(index)));
            }
        }
        OutputFormat::Human => match &solution {
            Some(found) => {
                let labels: Vec<&str> = route.iter().map(|&i| loaded.label(i)).collect();
                println!("{}", labels.join(" -> "));
                if !ctx.quiet() {
                    println!(
                        "{} hops, {} states expanded ({})",
                        hops,
                        found.expanded(),
                        algorithm
                    );
                }
            }
            None => println!("No path from {} to {}", from, to),
        },
    }

    Ok(())
}
