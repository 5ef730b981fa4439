//! Search nodes and parent-chain path reconstruction
//!
//! Each search owns a [`NodeArena`]. A node's parent is a [`NodeId`] into
//! that arena, so the discovered nodes form a tree rooted at the start state
//! and stay valid until the search result is dropped.

use std::fmt;

/// Handle of a node inside one search's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node<S> {
    pub state: S,
    pub parent: Option<NodeId>,
    /// Accumulated path cost from the start (0 for uninformed search)
    pub cost: f64,
    /// Estimated remaining cost to the goal (0 for uninformed search)
    pub heuristic: f64,
}

impl<S> Node<S> {
    pub fn root(state: S) -> Self {
        Node {
            state,
            parent: None,
            cost: 0.0,
            heuristic: 0.0,
        }
    }

    /// Ordering key used by best-first search
    pub fn priority(&self) -> f64 {
        self.cost + self.heuristic
    }
}

#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> NodeArena<S> {
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    pub fn insert(&mut self, node: Node<S>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Allocate the child of `parent` and return its handle
    pub fn child(&mut self, parent: NodeId, state: S, cost: f64, heuristic: f64) -> NodeId {
        self.insert(Node {
            state,
            parent: Some(parent),
            cost,
            heuristic,
        })
    }

    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk parent handles from `terminal` back to the root and return the
/// states in start-to-terminal order
pub fn node_to_path<S: Clone>(arena: &NodeArena<S>, terminal: NodeId) -> Vec<S> {
    let mut path = Vec::new();
    let mut current = Some(terminal);
    while let Some(id) = current {
        let node = arena.get(id);
        path.push(node.state.clone());
        current = node.parent;
    }
    path.reverse();
    path
}

/// Terminal node of a successful search together with the tree that led to it
#[derive(Debug, Clone)]
pub struct Solution<S> {
    arena: NodeArena<S>,
    goal: NodeId,
    expanded: usize,
}

impl<S> Solution<S> {
    pub(crate) fn new(arena: NodeArena<S>, goal: NodeId, expanded: usize) -> Self {
        Solution {
            arena,
            goal,
            expanded,
        }
    }

    /// The goal node
    pub fn node(&self) -> &Node<S> {
        self.arena.get(self.goal)
    }

    pub fn state(&self) -> &S {
        &self.node().state
    }

    pub fn cost(&self) -> f64 {
        self.node().cost
    }

    /// Number of states popped from the frontier and expanded
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of nodes created during the search
    pub fn discovered(&self) -> usize {
        self.arena.len()
    }

    pub fn arena(&self) -> &NodeArena<S> {
        &self.arena
    }

    /// Number of edges on the path (path length minus one)
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node().parent;
        while let Some(id) = current {
            depth += 1;
            current = self.arena.get(id).parent;
        }
        depth
    }
}

impl<S: Clone> Solution<S> {
    /// States from the initial state to the goal, inclusive
    pub fn path(&self) -> Vec<S> {
        node_to_path(&self.arena, self.goal)
    }
}

impl<S: fmt::Debug> fmt::Display for Solution<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} (cost {}, expanded {})",
            self.state(),
            self.cost(),
            self.expanded
        )
    }
}
