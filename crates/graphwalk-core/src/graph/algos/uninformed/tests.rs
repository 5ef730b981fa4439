use super::*;
use crate::fixtures::city_graph;
use crate::graph::Graph;
use crate::grid::{Grid, GridLocation};

fn labels(graph: &Graph<String>, path: &[usize]) -> Vec<String> {
    path.iter().map(|&i| graph.vertex_at(i).clone()).collect()
}

fn is_valid_path<V>(graph: &Graph<V>, path: &[usize]) -> bool {
    path.windows(2)
        .all(|pair| graph.neighbor_indices(pair[0]).contains(&pair[1]))
}

/// Fewest edges over every simple path, by exhaustive enumeration
fn brute_force_min_hops<V>(graph: &Graph<V>, from: usize, to: usize) -> Option<usize> {
    fn walk<V>(
        graph: &Graph<V>,
        current: usize,
        to: usize,
        on_path: &mut Vec<bool>,
        depth: usize,
        best: &mut Option<usize>,
    ) {
        if current == to {
            *best = Some(best.map_or(depth, |b| b.min(depth)));
            return;
        }
        for next in graph.neighbor_indices(current) {
            if !on_path[next] {
                on_path[next] = true;
                walk(graph, next, to, on_path, depth + 1, best);
                on_path[next] = false;
            }
        }
    }

    let mut on_path = vec![false; graph.vertex_count()];
    on_path[from] = true;
    let mut best = None;
    walk(graph, from, to, &mut on_path, 0, &mut best);
    best
}

#[test]
fn test_bfs_boston_to_miami() {
    let graph = city_graph();
    let boston = graph.index_of(&"Boston".to_string()).unwrap();
    let miami = graph.index_of(&"Miami".to_string()).unwrap();

    let solution = bfs(boston, |&v| v == miami, |&v| graph.neighbor_indices(v)).unwrap();

    assert_eq!(
        labels(&graph, &solution.path()),
        vec!["Boston", "Detroit", "Washington", "Miami"]
    );
    assert_eq!(solution.depth(), 3);
}

#[test]
fn test_bfs_prefers_fewest_hops_over_weight() {
    let mut graph = Graph::with_vertices(["A", "B", "C"]);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 4.0);
    graph.add_edge(0, 2, 10.0);

    let solution = bfs(0, |&v| v == 2, |&v| graph.neighbor_indices(v)).unwrap();
    assert_eq!(solution.path(), vec![0, 2]);
}

#[test]
fn test_bfs_matches_brute_force_on_every_city_pair() {
    let graph = city_graph();
    for from in 0..graph.vertex_count() {
        for to in 0..graph.vertex_count() {
            let solution = bfs(from, |&v| v == to, |&v| graph.neighbor_indices(v)).unwrap();
            let path = solution.path();
            assert_eq!(path.first(), Some(&from));
            assert_eq!(path.last(), Some(&to));
            assert!(is_valid_path(&graph, &path));
            assert_eq!(
                Some(path.len() - 1),
                brute_force_min_hops(&graph, from, to),
                "bfs from {} to {}",
                from,
                to
            );
        }
    }
}

#[test]
fn test_dfs_returns_valid_path() {
    let graph = city_graph();
    let seattle = graph.index_of(&"Seattle".to_string()).unwrap();
    let miami = graph.index_of(&"Miami".to_string()).unwrap();

    let solution = dfs(seattle, |&v| v == miami, |&v| graph.neighbor_indices(v)).unwrap();
    let path = solution.path();

    assert_eq!(path.first(), Some(&seattle));
    assert_eq!(path.last(), Some(&miami));
    assert!(is_valid_path(&graph, &path));
    // DFS never revisits a state, so the path is simple
    let mut seen = path.clone();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), path.len());
}

#[test]
fn test_search_start_is_goal() {
    let mut graph = Graph::new();
    let only = graph.add_vertex("A");

    let by_bfs = bfs(only, |&v| v == only, |&v| graph.neighbor_indices(v)).unwrap();
    let by_dfs = dfs(only, |&v| v == only, |&v| graph.neighbor_indices(v)).unwrap();

    assert_eq!(by_bfs.path(), vec![only]);
    assert_eq!(by_dfs.path(), vec![only]);
    assert_eq!(by_bfs.expanded(), 1);
}

#[test]
fn test_disconnected_components_not_found() {
    let mut graph = Graph::with_vertices(["A", "B", "C", "D"]);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(2, 3, 1.0);

    assert!(bfs(0, |&v| v == 2, |&v| graph.neighbor_indices(v)).is_none());
    assert!(dfs(0, |&v| v == 2, |&v| graph.neighbor_indices(v)).is_none());
}

#[test]
fn test_not_found_is_distinct_from_index_zero() {
    let graph = Graph::with_vertices(["A", "B"]);
    // Vertex 0 exists but the goal is unreachable
    let result = bfs(0usize, |&v| v == 1, |&v| graph.neighbor_indices(v));
    assert!(result.is_none());
}

#[test]
fn test_open_grid_bfs_path_is_manhattan_length() {
    let start = GridLocation::new(0, 0);
    let goal = GridLocation::new(4, 4);
    let grid = Grid::open(5, 5, start, goal);

    let solution = bfs(start, |l| grid.is_goal(l), |l| grid.successors(l)).unwrap();
    assert_eq!(solution.depth(), 8);
    assert_eq!(solution.expanded(), 25);

    let depth_first = dfs(start, |l| grid.is_goal(l), |l| grid.successors(l)).unwrap();
    let path = depth_first.path();
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert!(path
        .windows(2)
        .all(|pair| grid.successors(&pair[0]).contains(&pair[1])));
}

#[test]
fn test_searches_are_deterministic() {
    let graph = city_graph();
    let run = || {
        (
            bfs(0, |&v| v == 9, |&v| graph.neighbor_indices(v)).map(|s| s.path()),
            dfs(0, |&v| v == 9, |&v| graph.neighbor_indices(v)).map(|s| s.path()),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn test_each_state_discovered_once() {
    let graph = city_graph();
    let solution = bfs(0, |_| false, |&v| graph.neighbor_indices(v));
    assert!(solution.is_none());

    let all = bfs(0, |&v| v == 14, |&v| graph.neighbor_indices(v)).unwrap();
    assert!(all.discovered() <= graph.vertex_count());
}
