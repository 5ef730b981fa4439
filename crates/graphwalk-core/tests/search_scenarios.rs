//! End-to-end searches through the public API

use graphwalk_core::fixtures::{city_graph, weighted_city_graph};
use graphwalk_core::graph::{astar, bfs, dfs, dijkstra, mst, total_weight, Graph};
use graphwalk_core::grid::{Grid, GridLocation};
use graphwalk_core::loader::load_graph;
use std::fs;

const PEOPLE: u8 = 3;

/// Missionaries and cannibals still on the west bank, and where the boat is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Crossing {
    missionaries: u8,
    cannibals: u8,
    boat_west: bool,
}

impl Crossing {
    fn is_legal(&self) -> bool {
        let east_m = PEOPLE - self.missionaries;
        let east_c = PEOPLE - self.cannibals;
        !(self.missionaries > 0 && self.missionaries < self.cannibals)
            && !(east_m > 0 && east_m < east_c)
    }

    fn is_goal(&self) -> bool {
        self.missionaries == 0 && self.cannibals == 0 && !self.boat_west
    }

    fn successors(&self) -> Vec<Crossing> {
        let loads = [(2, 0), (1, 0), (0, 2), (0, 1), (1, 1)];
        let (here_m, here_c) = if self.boat_west {
            (self.missionaries, self.cannibals)
        } else {
            (PEOPLE - self.missionaries, PEOPLE - self.cannibals)
        };
        loads
            .iter()
            .filter(|(m, c)| *m <= here_m && *c <= here_c)
            .map(|&(m, c)| {
                if self.boat_west {
                    Crossing {
                        missionaries: self.missionaries - m,
                        cannibals: self.cannibals - c,
                        boat_west: false,
                    }
                } else {
                    Crossing {
                        missionaries: self.missionaries + m,
                        cannibals: self.cannibals + c,
                        boat_west: true,
                    }
                }
            })
            .filter(Crossing::is_legal)
            .collect()
    }
}

#[test]
fn test_missionaries_and_cannibals_in_eleven_crossings() {
    let start = Crossing {
        missionaries: PEOPLE,
        cannibals: PEOPLE,
        boat_west: true,
    };

    let solution = bfs(start, Crossing::is_goal, Crossing::successors).unwrap();
    let path = solution.path();

    assert_eq!(path.len(), 12);
    assert!(path.iter().all(Crossing::is_legal));
    assert!(path
        .windows(2)
        .all(|pair| pair[0].successors().contains(&pair[1])));
    assert!(path.last().is_some_and(Crossing::is_goal));
}

#[test]
fn test_unit_and_weighted_optimality_diverge() {
    let mut graph = Graph::with_vertices(["A", "B", "C"]);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 4.0);
    graph.add_edge(0, 2, 10.0);

    let fewest_hops = bfs(0, |&v| v == 2, |&v| graph.neighbor_indices(v)).unwrap();
    let cheapest = dijkstra(&graph, 0);

    assert_eq!(fewest_hops.path(), vec![0, 2]);
    assert_eq!(cheapest.path_to(2).len(), 2);
    assert_eq!(cheapest.distance(2), Some(5.0));
}

#[test]
fn test_every_search_solves_open_grid() {
    let start = GridLocation::new(0, 0);
    let goal = GridLocation::new(4, 4);
    let grid = Grid::open(5, 5, start, goal);

    let by_dfs = dfs(start, |l| grid.is_goal(l), |l| grid.successors(l)).unwrap();
    let by_bfs = bfs(start, |l| grid.is_goal(l), |l| grid.successors(l)).unwrap();
    let by_astar = astar(
        start,
        |l| grid.is_goal(l),
        |l| grid.successors(l),
        |l| grid.heuristic(l),
    )
    .unwrap();

    assert_eq!(*by_dfs.state(), goal);
    assert_eq!(by_bfs.path().len(), 9);
    assert_eq!(by_astar.path().len(), 9);
    assert!(by_astar.expanded() < by_bfs.expanded());
}

#[test]
fn test_marked_maze_renders_route() {
    let start = GridLocation::new(0, 0);
    let goal = GridLocation::new(2, 2);
    let mut grid = Grid::open(3, 3, start, goal);

    let solution = bfs(start, |l| grid.is_goal(l), |l| grid.successors(l)).unwrap();
    let path = solution.path();
    grid.mark(&path);

    let rendered = grid.to_string();
    assert_eq!(rendered.matches('*').count(), path.len() - 2);
    assert!(rendered.contains('S'));
    assert!(rendered.contains('G'));

    grid.clear(&path);
    assert!(!grid.to_string().contains('*'));
}

#[test]
fn test_disconnected_components() {
    let mut graph = Graph::with_vertices(["A", "B", "C", "D"]);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(2, 3, 1.0);

    assert!(bfs(0, |&v| v == 2, |&v| graph.neighbor_indices(v)).is_none());
    assert!(astar(0, |&v| v == 2, |&v| graph.neighbor_indices(v), |_| 0.0).is_none());
    assert_eq!(mst(&graph, 0).len(), 1);
}

#[test]
fn test_single_vertex_graph() {
    let graph = Graph::with_vertices(["A"]);

    assert!(mst(&graph, 0).is_empty());
    let found = dfs(0, |&v| v == 0, |&v| graph.neighbor_indices(v)).unwrap();
    assert_eq!(found.path(), vec![0]);
}

#[test]
fn test_loaded_graph_matches_builtin_cities() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.json");
    let builtin = weighted_city_graph();
    let file = graphwalk_core::loader::GraphFile::from_graph(&builtin);
    fs::write(&path, serde_json::to_string_pretty(&file).unwrap()).unwrap();

    let loaded = load_graph(&path).unwrap();
    let from = loaded.index_of(&"Los Angeles".to_string()).unwrap();
    let to = loaded.index_of(&"Boston".to_string()).unwrap();

    let paths = dijkstra(&loaded, from);
    assert_eq!(total_weight(&paths.path_to(to)), 2605.0);
    assert_eq!(total_weight(&mst(&loaded, 0)), 5372.0);
}

#[test]
fn test_city_hops_are_symmetric() {
    let graph = city_graph();
    for a in 0..graph.vertex_count() {
        for b in 0..graph.vertex_count() {
            let there = bfs(a, |&v| v == b, |&v| graph.neighbor_indices(v)).unwrap();
            let back = bfs(b, |&v| v == a, |&v| graph.neighbor_indices(v)).unwrap();
            assert_eq!(there.depth(), back.depth());
        }
    }
}
