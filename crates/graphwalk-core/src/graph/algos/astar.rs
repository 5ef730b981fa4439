use crate::graph::frontier::MinHeap;
use crate::graph::node::{Node, NodeArena, NodeId, Solution};
use std::collections::HashMap;
use std::hash::Hash;

/// A* search with unit cost per move
///
/// See [`astar_weighted`] for the contract.
#[tracing::instrument(skip_all, fields(strategy = "astar"))]
pub fn astar<S, G, N, I, H>(
    initial: S,
    is_goal: G,
    mut successors: N,
    heuristic: H,
) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    H: FnMut(&S) -> f64,
{
    astar_weighted(
        initial,
        is_goal,
        move |state: &S| {
            successors(state)
                .into_iter()
                .map(|next| (next, 1.0))
                .collect::<Vec<_>>()
        },
        heuristic,
    )
}

/// A* search where each successor carries its step cost
///
/// The frontier is ordered by `cost + heuristic`, with ties going to the
/// node with the smaller heuristic and then to insertion order. A state is
/// pushed again whenever a cheaper route to it is found; superseded entries
/// are skipped when popped.
///
/// If `heuristic` never overestimates the remaining cost and is consistent
/// across every step, the first goal popped has minimum cost. Step costs
/// must be non-negative.
#[tracing::instrument(skip_all, fields(strategy = "astar_weighted"))]
pub fn astar_weighted<S, G, N, I, H>(
    initial: S,
    mut is_goal: G,
    mut successors: N,
    mut heuristic: H,
) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, f64)>,
    H: FnMut(&S) -> f64,
{
    let mut arena = NodeArena::new();
    let mut best_cost: HashMap<S, f64> = HashMap::new();
    let mut frontier: MinHeap<NodeId> = MinHeap::new();
    let mut expanded = 0;
    let mut stale = 0;

    let estimate = heuristic(&initial);
    best_cost.insert(initial.clone(), 0.0);
    let root = arena.insert(Node {
        heuristic: estimate,
        ..Node::root(initial)
    });
    frontier.push_ranked(root, estimate, estimate);

    while let Some((current, _)) = frontier.pop_with_priority() {
        let node = arena.get(current);

        if best_cost
            .get(&node.state)
            .is_some_and(|&best| node.cost > best)
        {
            stale += 1;
            continue;
        }

        expanded += 1;
        if is_goal(&node.state) {
            tracing::debug!(expanded, stale, cost = node.cost, "goal_reached");
            return Some(Solution::new(arena, current, expanded));
        }

        let cost = node.cost;
        let children: Vec<(S, f64)> = successors(&node.state).into_iter().collect();
        for (child, step) in children {
            let new_cost = cost + step;
            let improves = best_cost
                .get(&child)
                .is_none_or(|&best| new_cost < best);
            if !improves {
                continue;
            }
            best_cost.insert(child.clone(), new_cost);
            let estimate = heuristic(&child);
            let id = arena.child(current, child, new_cost, estimate);
            frontier.push_ranked(id, new_cost + estimate, estimate);
        }
    }

    tracing::debug!(expanded, stale, "frontier_exhausted");
    None
}

#[cfg(test)]
mod tests;
