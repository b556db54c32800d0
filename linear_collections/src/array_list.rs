//! A positional list backed by a growable array.

use std::mem;
use std::iter::FromIterator;

/// A list implementation using a `Vec` (array-based).
///
/// Indexed access is `O(1)`; insertion and removal at an index shift the
/// tail of the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    data: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Creates a new empty ArrayList.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new ArrayList with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Appends an element to the end of the list.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Inserts an element so that it becomes element `index` of the
    /// list, shifting everything after it one position back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        self.data.insert(index, value);
    }

    /// Returns a reference to the element at `index`, or `None` if the
    /// index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None`
    /// if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Replaces the element at `index`, returning the previous value, or
    /// `None` if the index is out of bounds (the list is unchanged).
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it one position forward.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.data.remove(index)
    }

    /// Returns the first element of the list.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the last element of the list.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the underlying vector.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.data.iter()
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Returns true if an equal element exists in the list.
    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(vec: Vec<T>) -> Self {
        Self { data: vec }
    }
}

impl<T> From<ArrayList<T>> for Vec<T> {
    fn from(list: ArrayList<T>) -> Self {
        list.data
    }
}
