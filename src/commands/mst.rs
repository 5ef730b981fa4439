//! `graphwalk mst` command - Prim minimum spanning tree

use crate::cli::OutputFormat;
use crate::commands::dispatch::{CommandContext, LoadedGraph};
use crate::commands::json_builders::edges_to_json;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{format_weighted_path, mst, total_weight};
use graphwalk_core::records::{format_edge_record, format_header, quoted};

/// Execute the mst command
///
/// Without `--start` the tree grows from the first vertex. On a disconnected
/// graph only the start vertex's component is covered.
pub fn execute(ctx: &CommandContext, loaded: &LoadedGraph, start: Option<&str>) -> Result<()> {
    let graph = &loaded.graph;
    let root = match start {
        Some(label) => loaded.resolve(label)?,
        None => 0,
    };

    let tree = mst(graph, root);
    let weight = total_weight(&tree);
    let covered = if graph.vertex_count() == 0 {
        0
    } else {
        tree.len() + 1
    };
    let spanning = covered == graph.vertex_count();
    let start_label = (root < graph.vertex_count()).then(|| loaded.label(root));

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "graph": loaded.source,
                "start": start_label,
                "edges": edges_to_json(graph, &tree),
                "total_weight": weight,
                "covered": covered,
                "spanning": spanning,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let mut fields = Vec::new();
            if let Some(label) = start_label {
                fields.push(("start", quoted(label)));
            }
            fields.push(("edges", tree.len().to_string()));
            fields.push(("total_weight", weight.to_string()));
            fields.push(("spanning", spanning.to_string()));
            println!("{}", format_header(&loaded.source, "mst", &fields));
            for edge in &tree {
                println!(
                    "{}",
                    format_edge_record(loaded.label(edge.u), loaded.label(edge.v), edge.weight)
                );
            }
        }
        OutputFormat::Human => {
            print!("{}", format_weighted_path(graph, &tree));
            if !spanning && !ctx.quiet() {
                println!(
                    "Graph is disconnected: tree covers {} of {} vertices",
                    covered,
                    graph.vertex_count()
                );
            }
        }
    }

    Ok(())
}
