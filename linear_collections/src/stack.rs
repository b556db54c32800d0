//! A LIFO stack over a singly linked chain of owned nodes.

use std::iter::FromIterator;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A stack implementation using a singly linked list.
///
/// All operations are `O(1)`: new elements are pushed onto the head of
/// the chain and popped from it again.
#[derive(Debug, Clone)]
pub struct LinkedStack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates a new empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Pushes an element onto the stack.
    pub fn push(&mut self, value: T) {
        let new_node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(new_node);
        self.len += 1;
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns a reference to the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the top element without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Returns true if the stack is empty.
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.head.is_none());
        self.head.is_none()
    }

    /// Returns the number of elements in the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Clears all elements from the stack.
    pub fn clear(&mut self) {
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_new() {
        let stack: LinkedStack<i32> = LinkedStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_stack_push_pop_lifo() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_pop_empty() {
        let mut stack: LinkedStack<i32> = LinkedStack::new();
        assert_eq!(stack.pop(), None);
        // Still empty after the failed pop
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_stack_peek() {
        let mut stack = LinkedStack::new();
        stack.push(42);
        stack.push(99);

        assert_eq!(stack.peek(), Some(&99));
        assert_eq!(stack.len(), 2); // Peek doesn't remove

        if let Some(top) = stack.peek_mut() {
            *top = 100;
        }
        assert_eq!(stack.peek(), Some(&100));
    }

    #[test]
    fn test_stack_clear() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(2);
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_stack_from_iter() {
        let mut stack: LinkedStack<_> = vec![1, 2, 3].into_iter().collect();

        // Last element in is the first out
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
    }
}
