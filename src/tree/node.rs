use std::cmp::Ordering;
use std::borrow::Borrow;

/// A single node of the binary search tree
///
/// Each node exclusively owns its children. There are no parent
/// back-references, so dropping a node drops its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the value of this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// New node MUST maintain BST property
    fn set_left(&mut self, new_node: Self) {
        debug_assert!(self.left.is_none());
        self.left = Some(Box::new(new_node));
    }

    /// New node MUST maintain BST property
    fn set_right(&mut self, new_node: Self) {
        debug_assert!(self.right.is_none());
        self.right = Some(Box::new(new_node));
    }
}

impl<T: Ord> Node<T> {
    /// Inserts `value` into the subtree rooted at this node, keeping the
    /// BST ordering. Returns `true` if a new node was attached, `false`
    /// if an equal value was already present (the subtree is unchanged).
    ///
    /// The new node is only linked once its leaf position is known, so
    /// the subtree is never observable in a half-linked state.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        match value.cmp(&self.value) {
            Ordering::Less => match self.left.as_deref_mut() {
                Some(left) => left.insert(value),
                None => {
                    self.set_left(Node::new(value));
                    true
                },
            },

            Ordering::Greater => match self.right.as_deref_mut() {
                Some(right) => right.insert(value),
                None => {
                    self.set_right(Node::new(value));
                    true
                },
            },

            Ordering::Equal => false,
        }
    }

    /// Searches the subtree rooted at this node for a value equal to
    /// `value`, descending by the sign of each comparison.
    pub(crate) fn find<Q>(&self, value: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        match value.cmp(self.value.borrow()) {
            Ordering::Less => self.left.as_deref().and_then(|left| left.find(value)),
            Ordering::Greater => self.right.as_deref().and_then(|right| right.find(value)),
            Ordering::Equal => Some(&self.value),
        }
    }
}

impl<T> Node<T> {
    /// Returns the number of nodes on the longest path from this node
    /// down to a leaf, counting this node itself (so a leaf reports 1).
    pub(crate) fn depth(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Node::depth);
        let right = self.right.as_deref().map_or(0, Node::depth);
        1 + left.max(right)
    }

    /// Visits the subtree rooted at this node in order: left subtree,
    /// this node's value, right subtree.
    pub(crate) fn for_each_inorder<F: FnMut(&T)>(&self, f: &mut F) {
        if let Some(left) = self.left.as_deref() {
            left.for_each_inorder(f);
        }
        f(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.for_each_inorder(f);
        }
    }
}
