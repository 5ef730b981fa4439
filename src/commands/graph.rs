//! `graphwalk graph` command - dump the loaded graph
//!
//! JSON output is a graph file and can be passed back with `--graph`.

use crate::cli::OutputFormat;
use crate::commands::dispatch::{CommandContext, LoadedGraph};
use graphwalk_core::error::Result;
use graphwalk_core::loader::GraphFile;
use graphwalk_core::records::{format_edge_record, format_header, format_vertex_record};

/// Execute the graph command
pub fn execute(ctx: &CommandContext, loaded: &LoadedGraph) -> Result<()> {
    let graph = &loaded.graph;
    let file = GraphFile::from_graph(graph);

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&file)?);
        }
        OutputFormat::Records => {
            let fields = [
                ("vertices", graph.vertex_count().to_string()),
                ("edges", file.edges.len().to_string()),
            ];
            println!("{}", format_header(&loaded.source, "graph", &fields));
            for (index, label) in graph.vertices().iter().enumerate() {
                println!("{}", format_vertex_record(index, label));
            }
            for edge in &file.edges {
                println!("{}", format_edge_record(&edge.from, &edge.to, edge.weight));
            }
        }
        OutputFormat::Human => {
            print!("{}", graph);
            if !ctx.quiet() {
                println!(
                    "{} vertices, {} edges",
                    graph.vertex_count(),
                    file.edges.len()
                );
            }
        }
    }

    Ok(())
}
