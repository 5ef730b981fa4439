use super::*;
use crate::fixtures::{city_graph, weighted_city_graph};
use crate::graph::algos::dijkstra::dijkstra;
use crate::graph::algos::uninformed::bfs;
use crate::graph::Graph;
use crate::grid::{manhattan_distance, Grid, GridLocation};

/// Same cells and moves as the grid, as an explicit unit-weight graph
fn grid_as_graph(grid: &Grid) -> Graph<GridLocation> {
    let mut graph = Graph::new();
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            graph.add_vertex(GridLocation::new(row, column));
        }
    }
    for index in 0..graph.vertex_count() {
        let loc = *graph.vertex_at(index);
        for next in grid.successors(&loc) {
            let other = graph.index_of(&next).unwrap();
            // add_edge stores both halves, so only insert each pair once
            if index < other && grid.successors(&next).contains(&loc) {
                graph.add_edge(index, other, 1.0);
            }
        }
    }
    graph
}

#[test]
fn test_open_grid_astar_expands_fewer_than_bfs() {
    let start = GridLocation::new(0, 0);
    let goal = GridLocation::new(4, 4);
    let grid = Grid::open(5, 5, start, goal);

    let informed = astar(
        start,
        |l| grid.is_goal(l),
        |l| grid.successors(l),
        |l| grid.heuristic(l),
    )
    .unwrap();
    let uninformed = bfs(start, |l| grid.is_goal(l), |l| grid.successors(l)).unwrap();

    assert_eq!(informed.cost(), 8.0);
    assert_eq!(informed.depth(), 8);
    assert_eq!(uninformed.depth(), 8);
    assert!(
        informed.expanded() < uninformed.expanded(),
        "astar expanded {}, bfs expanded {}",
        informed.expanded(),
        uninformed.expanded()
    );
}

#[test]
fn test_maze_astar_cost_matches_dijkstra() {
    let start = GridLocation::new(0, 0);
    let goal = GridLocation::new(9, 9);

    for seed in [1, 7, 36, 99] {
        let grid = Grid::random(10, 10, 0.2, start, goal, seed);
        let graph = grid_as_graph(&grid);
        let paths = dijkstra(&graph, graph.index_of(&start).unwrap());
        let expected = paths.distance(graph.index_of(&goal).unwrap());

        let found = astar(
            start,
            |l| grid.is_goal(l),
            |l| grid.successors(l),
            |l| manhattan_distance(*l, goal),
        );

        assert_eq!(found.as_ref().map(|s| s.cost()), expected, "seed {}", seed);
        if let Some(solution) = found {
            let path = solution.path();
            assert!(path
                .windows(2)
                .all(|pair| grid.successors(&pair[0]).contains(&pair[1])));
        }
    }
}

#[test]
fn test_zero_heuristic_matches_dijkstra_on_unit_graph() {
    let graph = city_graph();
    let paths = dijkstra(&graph, 0);
    for goal in 0..graph.vertex_count() {
        let solution = astar(0, |&v| v == goal, |&v| graph.neighbor_indices(v), |_| 0.0).unwrap();
        assert_eq!(Some(solution.cost()), paths.distance(goal));
    }
}

#[test]
fn test_weighted_astar_matches_dijkstra() {
    let graph = weighted_city_graph();
    let la = graph.index_of(&"Los Angeles".to_string()).unwrap();
    let paths = dijkstra(&graph, la);

    for goal in 0..graph.vertex_count() {
        let solution =
            astar_weighted(la, |&v| v == goal, |&v| graph.neighbors(v), |_| 0.0).unwrap();
        assert_eq!(Some(solution.cost()), paths.distance(goal));
    }
}

#[test]
fn test_cheaper_route_replaces_first_discovery() {
    let mut graph = Graph::with_vertices(["A", "B", "C"]);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 4.0);
    graph.add_edge(0, 2, 10.0);

    let solution = astar_weighted(0, |&v| v == 2, |&v| graph.neighbors(v), |_| 0.0).unwrap();
    assert_eq!(solution.path(), vec![0, 1, 2]);
    assert_eq!(solution.cost(), 5.0);
}

#[test]
fn test_stale_entries_are_not_expanded() {
    // A-C is discovered at cost 10 before the cheaper A-B-C route; the
    // superseded entry must be skipped rather than expanded again.
    let mut graph = Graph::with_vertices(["A", "B", "C"]);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 4.0);
    graph.add_edge(0, 2, 10.0);

    let mut expansions = Vec::new();
    let result = astar_weighted(
        0,
        |_| false,
        |&v| {
            expansions.push(v);
            graph.neighbors(v)
        },
        |_| 0.0,
    );

    assert!(result.is_none());
    assert_eq!(expansions, vec![0, 1, 2]);
}

#[test]
fn test_exact_heuristic_walks_straight_to_goal() {
    let mut graph = Graph::with_vertices(["A", "B", "C"]);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 4.0);
    graph.add_edge(0, 2, 10.0);
    let remaining = [5.0, 4.0, 0.0];

    let solution = astar_weighted(
        0,
        |&v| v == 2,
        |&v| graph.neighbors(v),
        |&v| remaining[v],
    )
    .unwrap();
    assert_eq!(solution.cost(), 5.0);
    assert_eq!(solution.expanded(), 3);
}

#[test]
fn test_disconnected_astar_not_found() {
    let mut graph = Graph::with_vertices(["A", "B", "C", "D"]);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(2, 3, 1.0);

    assert!(astar(0, |&v| v == 2, |&v| graph.neighbor_indices(v), |_| 0.0).is_none());
}

#[test]
fn test_root_node_carries_heuristic() {
    let start = GridLocation::new(0, 0);
    let grid = Grid::open(3, 3, start, GridLocation::new(2, 2));
    let solution = astar(
        start,
        |l| *l == start,
        |l| grid.successors(l),
        |l| grid.heuristic(l),
    )
    .unwrap();
    assert_eq!(solution.node().heuristic, 4.0);
    assert_eq!(solution.node().parent, None);
}
