//! Depth-first and breadth-first search over a successor function
//!
//! Both searches share one loop and differ only in the frontier policy. A
//! state is marked explored when it is first discovered, so every state is
//! pushed at most once and the search terminates on any finite state space.

use crate::graph::frontier::{Frontier, Queue, Stack};
use crate::graph::node::{Node, NodeArena, NodeId, Solution};
use std::collections::HashSet;
use std::hash::Hash;

fn search<S, F, G, N, I>(
    mut frontier: F,
    initial: S,
    mut is_goal: G,
    mut successors: N,
) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    F: Frontier<NodeId>,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut arena = NodeArena::new();
    let mut explored: HashSet<S> = HashSet::new();
    let mut expanded = 0;

    explored.insert(initial.clone());
    frontier.push(arena.insert(Node::root(initial)));

    while let Some(current) = frontier.pop() {
        expanded += 1;
        let state = &arena.get(current).state;

        if is_goal(state) {
            tracing::debug!(expanded, discovered = arena.len(), "goal_reached");
            return Some(Solution::new(arena, current, expanded));
        }

        let children: Vec<S> = successors(state).into_iter().collect();
        for child in children {
            if explored.contains(&child) {
                continue;
            }
            explored.insert(child.clone());
            frontier.push(arena.child(current, child, 0.0, 0.0));
        }
    }

    tracing::debug!(expanded, discovered = arena.len(), "frontier_exhausted");
    None
}

/// Depth-first search from `initial` until `is_goal` accepts a popped state
///
/// Returns `None` when the frontier empties without reaching a goal. The
/// returned path is valid but carries no length guarantee.
#[tracing::instrument(skip_all, fields(strategy = "dfs"))]
pub fn dfs<S, G, N, I>(initial: S, is_goal: G, successors: N) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    search(Stack::new(), initial, is_goal, successors)
}

/// Breadth-first search from `initial` until `is_goal` accepts a popped state
///
/// Expands states in FIFO layer order, so the returned path has the fewest
/// edges of any path from `initial` to a goal state.
#[tracing::instrument(skip_all, fields(strategy = "bfs"))]
pub fn bfs<S, G, N, I>(initial: S, is_goal: G, successors: N) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    search(Queue::new(), initial, is_goal, successors)
}

#[cfg(test)]
mod tests;
