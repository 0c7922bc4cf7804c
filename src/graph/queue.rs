//! FIFO work queue shared by both traversal algorithms.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult};

/// Unbounded first-in first-out queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head.
    pub fn dequeue(&mut self) -> GraphResult<T> {
        self.items.pop_front().ok_or(GraphError::EmptyQueue)
    }

    /// True when no items remain.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
