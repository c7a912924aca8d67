//! Array-backed last-in-first-out stack used by the balance checker

use std::fmt;

/// A last-in-first-out stack backed by a `Vec`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item onto the top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item, or `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Return the top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.items)
    }
}
