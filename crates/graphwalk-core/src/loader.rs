//! Graph files
//!
//! A graph file lists vertex labels and undirected edges between them:
//!
//! ```json
//! {
//!   "vertices": ["A", "B", "C"],
//!   "edges": [
//!     { "from": "A", "to": "B", "weight": 1.0 },
//!     { "from": "B", "to": "C" }
//!   ]
//! }
//! ```
//!
//! The same shape is accepted as TOML (`[[edges]]` tables) or YAML. The
//! format is chosen by file extension. `weight` defaults to 1.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphwalkError, Result};
use crate::graph::{Graph, DEFAULT_WEIGHT};
use crate::{bail_invalid, bail_unsupported};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Serialization used for a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFileFormat {
    Json,
    Toml,
    Yaml,
}

impl GraphFileFormat {
    const SUPPORTED: &'static str = "json, toml, yaml, yml";

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(GraphFileFormat::Json),
            "toml" => Ok(GraphFileFormat::Toml),
            "yaml" | "yml" => Ok(GraphFileFormat::Yaml),
            "" => bail_unsupported!("graph file extension", "(none)", Self::SUPPORTED),
            other => bail_unsupported!("graph file extension", other, Self::SUPPORTED),
        }
    }
}

impl GraphFile {
    /// Parse a graph file body without building the graph
    pub fn parse(content: &str, format: GraphFileFormat) -> std::result::Result<Self, String> {
        match format {
            GraphFileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            GraphFileFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            GraphFileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Describe an existing graph, listing each undirected edge once
    ///
    /// A self-loop is stored as two halves in its vertex's own list; every
    /// other half is kept.
    pub fn from_graph(graph: &Graph<String>) -> Self {
        let mut edges = Vec::new();
        for u in 0..graph.vertex_count() {
            let mut loop_half = false;
            for e in graph.edges_for_index(u) {
                let keep = match e.u.cmp(&e.v) {
                    Ordering::Less => true,
                    Ordering::Equal => {
                        loop_half = !loop_half;
                        loop_half
                    }
                    Ordering::Greater => false,
                };
                if keep {
                    edges.push(EdgeSpec {
                        from: graph.vertex_at(e.u).clone(),
                        to: graph.vertex_at(e.v).clone(),
                        weight: e.weight,
                    });
                }
            }
        }
        GraphFile {
            vertices: graph.vertices().to_vec(),
            edges,
        }
    }

    /// Build the graph, checking labels and weights
    pub fn build(&self) -> Result<Graph<String>> {
        let mut seen = HashSet::new();
        for label in &self.vertices {
            if !seen.insert(label.as_str()) {
                bail_invalid!("graph file", format!("duplicate vertex {}", label));
            }
        }

        let mut graph = Graph::with_vertices(self.vertices.iter().cloned());
        for spec in &self.edges {
            if spec.weight.is_nan() || spec.weight < 0.0 {
                bail_invalid!(
                    "edge weight",
                    format!("{} for {} - {}", spec.weight, spec.from, spec.to)
                );
            }
            let u = graph
                .index_of(&spec.from)
                .ok_or_else(|| GraphwalkError::not_found("edge endpoint", &spec.from))?;
            let v = graph
                .index_of(&spec.to)
                .ok_or_else(|| GraphwalkError::not_found("edge endpoint", &spec.to))?;
            graph.add_edge(u, v, spec.weight);
        }
        Ok(graph)
    }
}

/// Read and build a graph file, choosing the parser from its extension
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph<String>> {
    let format = GraphFileFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GraphwalkError::not_found("graph file", path.display()),
        _ => GraphwalkError::Io(e),
    })?;

    let file = GraphFile::parse(&content, format).map_err(|reason| {
        GraphwalkError::InvalidGraphFile {
            path: path.to_path_buf(),
            reason,
        }
    })?;
    let graph = file.build()?;

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count() / 2,
        "graph_loaded"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::weighted_city_graph;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_json_graph() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "g.json",
            r#"{"vertices":["A","B","C"],"edges":[{"from":"A","to":"B","weight":2.5},{"from":"B","to":"C"}]}"#,
        );

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.neighbors(1), vec![(0, 2.5), (2, 1.0)]);
    }

    #[test]
    fn test_load_toml_graph() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "g.toml",
            r#"
vertices = ["A", "B"]

[[edges]]
from = "A"
to = "B"
weight = 3.0
"#,
        );

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.neighbors(0), vec![(1, 3.0)]);
    }

    #[test]
    fn test_load_yaml_graph() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "g.yml",
            "vertices: [A, B, C]\nedges:\n  - {from: A, to: C, weight: 4}\n",
        );

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.neighbors(2), vec![(0, 4.0)]);
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "g.csv", "A,B");
        let err = load_graph(&path).unwrap_err();
        assert!(matches!(err, GraphwalkError::Unsupported { .. }));
    }

    #[test]
    fn test_unknown_endpoint_is_not_found() {
        let file = GraphFile {
            vertices: vec!["A".into()],
            edges: vec![EdgeSpec {
                from: "A".into(),
                to: "Z".into(),
                weight: 1.0,
            }],
        };
        let err = file.build().unwrap_err();
        assert_eq!(err.to_string(), "edge endpoint not found: Z");
    }

    #[test]
    fn test_negative_weight_rejected() {
        let file = GraphFile {
            vertices: vec!["A".into(), "B".into()],
            edges: vec![EdgeSpec {
                from: "A".into(),
                to: "B".into(),
                weight: -1.0,
            }],
        };
        assert!(matches!(
            file.build().unwrap_err(),
            GraphwalkError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let file = GraphFile {
            vertices: vec!["A".into(), "A".into()],
            edges: vec![],
        };
        assert!(file.build().is_err());
    }

    #[test]
    fn test_malformed_file_is_invalid_graph_file() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "g.json", "{ not json");
        let err = load_graph(&path).unwrap_err();
        assert!(matches!(err, GraphwalkError::InvalidGraphFile { .. }));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Data);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GraphwalkError::NotFound { .. }));
    }

    #[test]
    fn test_from_graph_keeps_self_loops() {
        let file = GraphFile::parse(
            r#"{"vertices":["A","B"],"edges":[{"from":"A","to":"A","weight":2.0},{"from":"A","to":"B"}]}"#,
            GraphFileFormat::Json,
        )
        .unwrap();
        let graph = file.build().unwrap();

        let exported = GraphFile::from_graph(&graph);
        assert_eq!(exported.edges.len(), 2);
        assert_eq!(exported.edges[0].from, "A");
        assert_eq!(exported.edges[0].to, "A");
        assert_eq!(exported.edges[0].weight, 2.0);

        let rebuilt = exported.build().unwrap();
        assert_eq!(rebuilt.edge_count(), graph.edge_count());
        assert_eq!(rebuilt.neighbors(0), graph.neighbors(0));
        assert_eq!(rebuilt.neighbors(1), graph.neighbors(1));
    }

    #[test]
    fn test_from_graph_rebuilds_same_graph() {
        let graph = weighted_city_graph();
        let file = GraphFile::from_graph(&graph);
        assert_eq!(file.edges.len(), 26);

        let rebuilt = file.build().unwrap();
        assert_eq!(rebuilt.vertices(), graph.vertices());
        for i in 0..graph.vertex_count() {
            let mut expected = graph.neighbors(i);
            let mut actual = rebuilt.neighbors(i);
            expected.sort_by(|a, b| a.0.cmp(&b.0));
            actual.sort_by(|a, b| a.0.cmp(&b.0));
            assert_eq!(actual, expected);
        }
    }
}
