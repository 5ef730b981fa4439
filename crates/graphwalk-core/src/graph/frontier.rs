//! Pending-work containers for graph search
//!
//! - [`Stack`]: LIFO, drives depth-first search
//! - [`Queue`]: FIFO ring buffer, drives breadth-first search
//! - [`MinHeap`]: binary min-heap keyed by an `f64` priority, drives A*,
//!   Dijkstra and Prim

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// Common interface of the three frontier policies
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    /// Remove the next item according to the policy, `None` when empty
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Wrapper for BinaryHeap to use as min-heap (ordered by priority, then
/// tiebreak, then insertion sequence)
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub priority: f64,
    pub tiebreak: f64,
    pub sequence: u64,
    pub item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.tiebreak.total_cmp(&other.tiebreak))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Binary min-heap with deterministic tie-breaking
///
/// Items with equal priority and tiebreak pop in insertion order. There is no
/// decrease-key:
/// callers push a fresh entry and skip stale ones when they surface.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_sequence: u64,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push_with_priority(&mut self, item: T, priority: f64) {
        self.push_ranked(item, priority, 0.0);
    }

    /// Push with a secondary key consulted only between equal priorities
    pub fn push_ranked(&mut self, item: T, priority: f64, tiebreak: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            tiebreak,
            sequence,
            item,
        }));
    }

    /// Pop the minimum entry together with the priority it was pushed with
    pub fn pop_with_priority(&mut self) -> Option<(T, f64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Items that carry their own heap key
pub trait Prioritized {
    fn priority(&self) -> f64;
}

impl<T: Prioritized> Frontier<T> for MinHeap<T> {
    fn push(&mut self, item: T) {
        let priority = item.priority();
        self.push_with_priority(item, priority);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }
}
