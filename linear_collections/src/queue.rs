//! A FIFO queue over singly linked chains of owned nodes.
//!
//! A safe singly linked chain only supports `O(1)` access at its head,
//! so the queue keeps two chains: elements are pushed onto the `inbox`
//! and popped from the `outbox`, with the inbox reversed into the outbox
//! whenever the outbox runs dry. Every element is moved at most twice,
//! so `push` and `pop` are amortized `O(1)` and FIFO order is preserved
//! exactly.

use std::iter::FromIterator;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A FIFO queue implementation using singly linked nodes.
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    /// Most recently pushed element first
    inbox: Option<Box<Node<T>>>,
    /// Next element to pop first
    outbox: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            inbox: None,
            outbox: None,
            len: 0,
        }
    }

    /// Adds an element to the back of the queue.
    ///
    /// Amortized `O(1)`.
    pub fn push(&mut self, value: T) {
        let new_node = Box::new(Node {
            value,
            next: self.inbox.take(),
        });
        self.inbox = Some(new_node);
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue, or
    /// `None` if the queue is empty.
    ///
    /// Amortized `O(1)`.
    pub fn pop(&mut self) -> Option<T> {
        if self.outbox.is_none() {
            self.flip_inbox();
        }

        self.outbox.take().map(|node| {
            self.outbox = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns a reference to the element at the front of the queue
    /// without removing it.
    ///
    /// `O(1)` when the front element sits in the outbox; otherwise one
    /// walk to the bottom of the inbox chain.
    pub fn peek(&self) -> Option<&T> {
        if let Some(front) = self.outbox.as_deref() {
            return Some(&front.value);
        }

        // The oldest element is at the bottom of the inbox chain
        let mut current = self.inbox.as_deref()?;
        while let Some(next) = current.next.as_deref() {
            current = next;
        }
        Some(&current.value)
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || (self.inbox.is_none() && self.outbox.is_none()));
        self.len == 0
    }

    /// Clears all elements from the queue.
    pub fn clear(&mut self) {
        self.inbox = None;
        self.outbox = None;
        self.len = 0;
    }

    /// Reverses the inbox chain into the outbox chain.
    ///
    /// Must only be called when the outbox is empty, otherwise FIFO
    /// order would be destroyed.
    fn flip_inbox(&mut self) {
        debug_assert!(self.outbox.is_none());

        let mut reversed = None;
        let mut current = self.inbox.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }

        self.outbox = reversed;
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
