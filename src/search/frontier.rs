//! Frontier structures: the not-yet-expanded nodes of a search, ordered per
//! algorithm.

use crate::search::HeuristicValue;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque, hash::Hash};

/// LIFO frontier, used by depth-first search.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { elements: vec![] }
    }

    pub fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// FIFO frontier, used by breadth-first search.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    pub fn add(&mut self, element: T) {
        self.elements.push_back(element);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Min-priority frontier. [`PriorityQueue`] is a max-heap, so scores are
/// wrapped in [`Reverse`].
///
/// The underlying heap is not stable: elements with equal scores come out in
/// no particular order.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<T: Hash + Eq> {
    elements: PriorityQueue<T, Reverse<HeuristicValue>>,
}

impl<T: Hash + Eq> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            elements: PriorityQueue::new(),
        }
    }

    /// Insert `element` with the given score. If the element is already
    /// present its score is replaced.
    pub fn add(&mut self, element: T, score: HeuristicValue) {
        self.elements.push(element, Reverse(score));
    }

    /// Remove and return the element with the lowest score.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop().map(|(element, _)| element)
    }

    pub fn peek_score(&self) -> Option<HeuristicValue> {
        self.elements.peek().map(|(_, Reverse(score))| *score)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Hash + Eq> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        stack.add(1);
        stack.add(2);
        stack.add(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        queue.add('a');
        queue.add('b');
        assert_eq!(queue.pop(), Some('a'));
        assert_eq!(queue.pop(), Some('b'));
        assert!(queue.is_empty());
    }

    #[test]
    fn priority_frontier_pops_lowest_score_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.add("far", OrderedFloat(7.));
        frontier.add("near", OrderedFloat(1.));
        frontier.add("middle", OrderedFloat(3.5));
        assert_eq!(frontier.peek_score(), Some(OrderedFloat(1.)));
        assert_eq!(frontier.pop(), Some("near"));
        assert_eq!(frontier.pop(), Some("middle"));
        assert_eq!(frontier.pop(), Some("far"));
        assert!(frontier.is_empty());
    }

    #[test]
    fn priority_frontier_accepts_infinite_scores() {
        let mut frontier = PriorityFrontier::new();
        frontier.add(1, OrderedFloat(f64::INFINITY));
        frontier.add(2, OrderedFloat(1e12));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(1));
    }
}
