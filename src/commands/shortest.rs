//! `graphwalk shortest` command - Dijkstra distances from one vertex
//!
//! Prints the distance to every vertex, or with `--to` the cheapest route to
//! one vertex as weighted hops.

use crate::cli::OutputFormat;
use crate::commands::dispatch::{CommandContext, LoadedGraph};
use crate::commands::json_builders::edges_to_json;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{dijkstra, format_weighted_path, total_weight};
use graphwalk_core::records::{format_data_record, format_edge_record, format_header, quoted};

/// Execute the shortest command
pub fn execute(
    ctx: &CommandContext,
    loaded: &LoadedGraph,
    from: &str,
    to: Option<&str>,
) -> Result<()> {
    let graph = &loaded.graph;
    let root = loaded.resolve(from)?;
    let target = to.map(|label| loaded.resolve(label)).transpose()?;

    let paths = dijkstra(graph, root);
    // (target, distance if reachable, route edges)
    let route = target.map(|t| (t, paths.distance(t), paths.path_to(t)));

    match ctx.format {
        OutputFormat::Json => {
            let distances: Vec<_> = paths
                .distance_map(graph)
                .into_iter()
                .map(|(vertex, distance)| {
                    serde_json::json!({ "vertex": vertex, "distance": distance })
                })
                .collect();
            let mut output = serde_json::json!({
                "graph": loaded.source,
                "from": from,
                "reachable": paths.reachable_count(),
                "distances": distances,
            });
            if let Some((t, distance, edges)) = &route {
                output["route"] = serde_json::json!({
                    "to": loaded.label(*t),
                    "found": distance.is_some(),
                    "distance": distance,
                    "edges": edges_to_json(graph, edges),
                });
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let mut fields = vec![
                ("from", quoted(from)),
                ("reachable", paths.reachable_count().to_string()),
            ];
            if let Some((t, distance, _)) = &route {
                fields.push(("to", quoted(loaded.label(*t))));
                fields.push(("found", distance.is_some().to_string()));
                if let Some(d) = distance {
                    fields.push(("distance", d.to_string()));
                }
            }
            println!("{}", format_header(&loaded.source, "shortest", &fields));

            for (vertex, distance) in paths.distance_map(graph) {
                let value = distance.map_or_else(|| "none".to_string(), |d| d.to_string());
                println!(
                    "{}",
                    format_data_record("distance", vertex, &[("value", value)])
                );
            }
            if let Some((_, _, edges)) = &route {
                for edge in edges {
                    println!(
                        "{}",
                        format_edge_record(loaded.label(edge.u), loaded.label(edge.v), edge.weight)
                    );
                }
            }
        }
        OutputFormat::Human => match &route {
            Some((t, Some(_), edges)) => {
                if edges.is_empty() && !ctx.quiet() {
                    println!("{} is the starting vertex", loaded.label(*t));
                }
                print!("{}", format_weighted_path(graph, edges));
            }
            Some((t, None, _)) => {
                println!("No route from {} to {}", from, loaded.label(*t));
            }
            None => {
                for (vertex, distance) in paths.distance_map(graph) {
                    match distance {
                        Some(d) => println!("{}: {}", vertex, d),
                        None => println!("{}: unreachable", vertex),
                    }
                }
                if !ctx.quiet() {
                    println!(
                        "{} of {} vertices reachable from {}",
                        paths.reachable_count(),
                        graph.vertex_count(),
                        from
                    );
                }
            }
        },
    }

    tracing::debug!(
        route_weight = route.as_ref().map(|(_, _, edges)| total_weight(edges)),
        "shortest_done"
    );
    Ok(())
}
