//! A positional list over a singly linked chain of owned nodes.

use std::mem;
use std::iter::{FromIterator, FusedIterator};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

/// Appends `value` to the end of the chain hanging off `slot`.
fn push_back_into<T>(slot: &mut Option<Box<Node<T>>>, value: T) {
    match slot {
        Some(node) => push_back_into(&mut node.next, value),
        None => *slot = Some(Box::new(Node::new(value))),
    }
}

/// Splices `value` in so that it becomes element `index` of the chain.
///
/// The caller has already checked `index` against the list length, so
/// the descent never falls off the end of the chain.
fn insert_into<T>(slot: &mut Option<Box<Node<T>>>, index: usize, value: T) {
    if index == 0 {
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
    } else {
        match slot {
            Some(node) => insert_into(&mut node.next, index - 1, value),
            None => unreachable!("index was checked against the list length"),
        }
    }
}

/// Unlinks element `index` of the chain and returns its value.
///
/// The caller has already checked `index` against the list length.
fn remove_from<T>(slot: &mut Option<Box<Node<T>>>, index: usize) -> T {
    if index == 0 {
        match slot.take() {
            Some(node) => {
                *slot = node.next;
                node.value
            },
            None => unreachable!("index was checked against the list length"),
        }
    } else {
        match slot {
            Some(node) => remove_from(&mut node.next, index - 1),
            None => unreachable!("index was checked against the list length"),
        }
    }
}

/// A list implementation based on singly linked nodes.
///
/// The list owns its nodes exclusively along `next` pointers and keeps
/// only a head reference, so operations at the front are `O(1)` while
/// operations at the back or at an index walk the chain (`O(n)`). A
/// single-owner chain cannot keep an `O(1)` tail alias the way a
/// garbage-collected implementation would.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.head.is_none());
        self.head.is_none()
    }

    /// Adds an element to the front of the list. `O(1)`.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Adds an element to the end of the list. `O(n)`.
    pub fn push_back(&mut self, value: T) {
        push_back_into(&mut self.head, value);
        self.len += 1;
    }

    /// Inserts an element so that it becomes element `index` of the
    /// list, shifting everything after it one position back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len {
            panic!("insertion index (is {}) should be <= len (is {})", index, self.len);
        }

        insert_into(&mut self.head, index, value);
        self.len += 1;
    }

    /// Returns a reference to the element at `index`, or `None` if the
    /// index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = self.head.as_deref();
        let mut remaining = index;
        while let Some(node) = current {
            if remaining == 0 {
                return Some(&node.value);
            }
            remaining -= 1;
            current = node.next.as_deref();
        }

        None
    }

    /// Returns a mutable reference to the element at `index`, or `None`
    /// if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let mut current = self.head.as_deref_mut();
        let mut remaining = index;
        while let Some(node) = current {
            if remaining == 0 {
                return Some(&mut node.value);
            }
            remaining -= 1;
            current = node.next.as_deref_mut();
        }

        None
    }

    /// Replaces the element at `index`, returning the previous value, or
    /// `None` if the index is out of bounds (the list is unchanged).
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Returns the first element of the list. `O(1)`.
    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the last element of the list. `O(n)`.
    pub fn last(&self) -> Option<&T> {
        let mut current = self.head.as_deref()?;
        while let Some(next) = current.next.as_deref() {
            current = next;
        }
        Some(&current.value)
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it one position forward.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len {
            panic!("removal index (is {}) should be < len (is {})", index, self.len);
        }

        let value = remove_from(&mut self.head, index);
        self.len -= 1;
        value
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        self.head = None;
        self.len = 0;
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if an equal element exists in the list. `O(n)`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();

        // Build back-to-front so every element is an O(1) push_front
        let items: Vec<T> = iter.into_iter().collect();
        for value in items.into_iter().rev() {
            list.push_front(value);
        }

        list
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

/// A front-to-back iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_new() {
        let list: LinkedList<i32> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn test_list_push_back_order() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        let items: Vec<_> = list.iter().copied().collect();
        assert_eq!(&items, &[1, 2, 3]);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&3));
    }

    #[test]
    fn test_list_push_front_order() {
        let mut list = LinkedList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        let items: Vec<_> = list.iter().copied().collect();
        assert_eq!(&items, &[3, 2, 1]);
    }

    #[test]
    fn test_list_get() {
        let list: LinkedList<_> = vec![10, 20, 30].into();

        assert_eq!(list.get(0), Some(&10));
        assert_eq!(list.get(1), Some(&20));
        assert_eq!(list.get(2), Some(&30));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn test_list_set() {
        let mut list: LinkedList<_> = vec![10, 20, 30].into();

        assert_eq!(list.set(1, 99), Some(20));
        assert_eq!(list.get(1), Some(&99));
        assert_eq!(list.len(), 3);

        // Out of bounds leaves the list unchanged
        assert_eq!(list.set(3, 0), None);
        let items: Vec<_> = list.iter().copied().collect();
        assert_eq!(&items, &[10, 99, 30]);
    }

    #[test]
    fn test_list_get_mut() {
        let mut list: LinkedList<_> = vec![1, 2, 3].into();

        if let Some(value) = list.get_mut(2) {
            *value = 30;
        }
        assert_eq!(list.get(2), Some(&30));
        assert_eq!(list.get_mut(3), None);
    }

    #[test]
    fn test_list_insert() {
        let mut list: LinkedList<_> = vec![1, 3].into();

        // Front, middle and back
        list.insert(0, 0);
        list.insert(2, 2);
        list.insert(4, 4);

        let items: Vec<_> = list.iter().copied().collect();
        assert_eq!(&items, &[0, 1, 2, 3, 4]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_list_insert_into_empty() {
        let mut list = LinkedList::new();
        list.insert(0, 7);

        assert_eq!(list.first(), Some(&7));
        assert_eq!(list.last(), Some(&7));
        assert_eq!(list.len(), 1);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 2) should be <= len (is 1)")]
    fn test_list_insert_out_of_bounds() {
        let mut list: LinkedList<_> = vec![1].into();
        list.insert(2, 0);
    }

    #[test]
    fn test_list_remove() {
        let mut list: LinkedList<_> = vec![0, 1, 2, 3, 4].into();

        // Middle, front and back
        assert_eq!(list.remove(2), 2);
        assert_eq!(list.remove(0), 0);
        assert_eq!(list.remove(2), 4);

        let items: Vec<_> = list.iter().copied().collect();
        assert_eq!(&items, &[1, 3]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.last(), Some(&3));
    }

    #[test]
    fn test_list_remove_last_element() {
        let mut list: LinkedList<_> = vec![5].into();

        assert_eq!(list.remove(0), 5);
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    #[should_panic(expected = "removal index (is 1) should be < len (is 1)")]
    fn test_list_remove_out_of_bounds() {
        let mut list: LinkedList<_> = vec![1].into();
        list.remove(1);
    }

    #[test]
    fn test_list_contains() {
        let list: LinkedList<_> = vec![1, 2, 3].into();

        assert!(list.contains(&1));
        assert!(list.contains(&3));
        assert!(!list.contains(&4));
    }

    #[test]
    fn test_list_clear() {
        let mut list: LinkedList<_> = vec![1, 2, 3].into();

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn test_list_extend() {
        let mut list: LinkedList<_> = vec![1, 2].into();
        list.extend(vec![3, 4]);

        let items: Vec<_> = list.iter().copied().collect();
        assert_eq!(&items, &[1, 2, 3, 4]);
    }
}
