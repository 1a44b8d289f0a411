//! Open lists holding the nodes that have been generated but not yet
//! expanded. Every frontier is created by, and private to, a single search.

use crate::search::{Cost, NodeId};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque};

/// An open list whose order is fixed by insertion alone.
pub trait Frontier {
    fn push(&mut self, node_id: NodeId);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId) {
        self.queue.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId) {
        self.stack.push(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// A min-priority open list. Entries with equal priority come out in the
/// order they were pushed: each entry is keyed by `(priority, sequence)` where
/// the sequence counter belongs to this frontier alone.
#[derive(Debug)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(Cost, u64)>>,
    next_sequence: u64,
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    /// Push a node with the given priority. Each node must only be pushed
    /// once; the search engines guarantee this through the reached set.
    pub fn push(&mut self, node_id: NodeId, priority: Cost) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let previous = self.queue.push(node_id, Reverse((priority, sequence)));
        debug_assert!(previous.is_none(), "Node {:?} pushed twice", node_id);
    }

    /// Remove the entry with the lowest priority, breaking ties by insertion
    /// order.
    pub fn pop(&mut self) -> Option<(NodeId, Cost)> {
        self.queue
            .pop()
            .map(|(node_id, Reverse((priority, _)))| (node_id, priority))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn ids(ids: &[usize]) -> Vec<NodeId> {
        ids.iter().map(|&id| NodeId::new(id)).collect()
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<NodeId> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn fifo_pops_in_insertion_order() {
        let mut frontier = FifoFrontier::new();
        for node_id in ids(&[3, 1, 2]) {
            frontier.push(node_id);
        }
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), ids(&[3, 1, 2]));
        assert!(frontier.is_empty());
    }

    #[test]
    fn lifo_pops_most_recent_first() {
        let mut frontier = LifoFrontier::new();
        for node_id in ids(&[3, 1, 2]) {
            frontier.push(node_id);
        }
        assert_eq!(drain(&mut frontier), ids(&[2, 1, 3]));
    }

    #[test]
    fn priority_pops_lowest_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId::new(0), OrderedFloat(3.));
        frontier.push(NodeId::new(1), OrderedFloat(1.));
        frontier.push(NodeId::new(2), OrderedFloat(2.));

        assert_eq!(frontier.pop(), Some((NodeId::new(1), OrderedFloat(1.))));
        assert_eq!(frontier.pop(), Some((NodeId::new(2), OrderedFloat(2.))));
        assert_eq!(frontier.pop(), Some((NodeId::new(0), OrderedFloat(3.))));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn priority_ties_break_by_insertion_order() {
        // Same layout as the classic "foo bar taco cat" queue: priorities
        // 3, 1, 2, 1 must come out as bar, cat, taco, foo.
        let mut frontier = PriorityFrontier::new();
        for (id, priority) in [(0, 3.), (1, 1.), (2, 2.), (3, 1.)] {
            frontier.push(NodeId::new(id), OrderedFloat(priority));
        }

        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop())
            .map(|(node_id, _)| node_id.id())
            .collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn priority_ties_survive_interleaved_pops() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId::new(10), OrderedFloat(1.));
        frontier.push(NodeId::new(11), OrderedFloat(1.));
        assert_eq!(frontier.pop().map(|(id, _)| id.id()), Some(10));

        frontier.push(NodeId::new(12), OrderedFloat(1.));
        assert_eq!(frontier.pop().map(|(id, _)| id.id()), Some(11));
        assert_eq!(frontier.pop().map(|(id, _)| id.id()), Some(12));
    }
}
