mod node;
mod inorder;

pub use node::*;
pub use inorder::*;

use std::borrow::Borrow;
use std::iter::FromIterator;

/// A binary search tree (BST) holding a set of unique, ordered elements
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than `v`
///
/// Duplicate values are never stored. Inserting a value that already exists in the tree does not
/// modify the tree and reports the rejection through a boolean result.
///
/// The tree performs no rebalancing, so its shape is determined entirely by the order of
/// insertion: random insertion orders give `O(log n)` depth on average, while sorted input
/// degenerates to a linked chain with `O(n)` depth.
#[derive(Debug, Clone)]
pub struct OrderedTree<T> {
    root: Option<Node<T>>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T: Ord + PartialEq> PartialEq for OrderedTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees with the same elements may be shaped differently (e.g. if insertion order was
        // different), so structural comparison is out. In-order traversal is guaranteed to produce
        // the elements in ascending order, and equal sorted sequences mean equal sets.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|(v1, v2)| v1.eq(v2))
    }
}

impl<T: Ord + Eq> Eq for OrderedTree<T> {}

impl<T: Ord> OrderedTree<T> {
    /// Creates an empty `OrderedTree`
    ///
    /// No allocation happens until the first value is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    /// let mut tree: OrderedTree<&str> = OrderedTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements in the tree (i.e. the number of nodes in the binary search
    /// tree)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Inserts a new value into the binary search tree
    ///
    /// If the tree did not have this value present, `true` is returned and the length grows by
    /// one.
    ///
    /// If the tree did have this value present, `false` is returned and the tree is left
    /// completely unchanged. Duplicate rejection is a normal outcome, not an error.
    ///
    /// Exactly one node is allocated per successful insert, and it is only linked into the tree
    /// once its leaf position has been determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// # assert!(tree.is_empty());
    /// assert!(tree.insert(37));
    /// assert!(!tree.is_empty());
    ///
    /// assert!(!tree.insert(37));
    /// assert!(tree.contains(&37));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        match self.root.as_mut() {
            Some(root) => {
                let inserted = root.insert(value);
                if inserted {
                    self.len += 1;
                }
                inserted
            },

            None => {
                self.root = Some(Node::new(value));

                debug_assert_eq!(self.len, 0);
                self.len = 1;

                true
            },
        }
    }

    /// Returns `true` if the tree contains the specified value.
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(depth)`, no allocation
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// # assert!(!tree.contains(&1));
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the tree, or `None` if no such value exists in its
    /// binary search tree
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.get("abc"), Some(&String::from("abc")));
    /// assert_eq!(tree.get("def"), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.root.as_ref().and_then(|root| root.find(value))
    }

    /// Returns the number of edges on the longest path from the root down to a leaf
    ///
    /// Note that this counts edges, not node levels: an empty tree and a tree with a single node
    /// both report a depth of 0.
    ///
    /// Time complexity: `O(n)` (every node is visited)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.depth(), 0);
    ///
    /// tree.insert(10);
    /// assert_eq!(tree.depth(), 0);
    ///
    /// tree.insert(5);
    /// tree.insert(15);
    /// assert_eq!(tree.depth(), 1);
    /// ```
    pub fn depth(&self) -> usize {
        // The recursive node count includes the root itself, so the edge count is one less
        match self.root.as_ref() {
            Some(root) => root.depth() - 1,
            None => 0,
        }
    }

    /// Performs an in-order traversal of the tree
    ///
    /// The returned iterator is lazy and yields the elements in strictly ascending order: left
    /// subtree, node value, right subtree. A single iterator makes one pass over the tree; call
    /// this method again to traverse from the beginning.
    ///
    /// In-order is the only supported enumeration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(10);
    /// tree.insert(15);
    /// tree.insert(5);
    ///
    /// let values: Vec<_> = tree.iter_inorder().copied().collect();
    /// assert_eq!(&values, &[5, 10, 15]);
    ///
    /// // Visitor-style traversal:
    /// let mut doubled = Vec::new();
    /// tree.iter_inorder().for_each(|&value| doubled.push(value * 2));
    /// assert_eq!(&doubled, &[10, 20, 30]);
    /// ```
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(self.root.as_ref())
    }

    /// Applies `f` to every value in the tree in ascending order
    ///
    /// This is the recursive counterpart of [`iter_inorder`](Self::iter_inorder). Prefer the
    /// iterator when you need to stop early or combine the traversal with other adapters.
    pub fn for_each_inorder<F: FnMut(&T)>(&self, mut f: F) {
        if let Some(root) = self.root.as_ref() {
            root.for_each_inorder(&mut f);
        }
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals. The inner
    /// structure of the tree can be anything that satisfies the BST properties; for a guaranteed
    /// ordering, use [`iter_inorder`](Self::iter_inorder).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, tree::Node};
    ///
    /// #[derive(Debug, PartialOrd, Ord, PartialEq, Eq)]
    /// struct Person {
    ///     pub name: String,
    ///     // ...other fields...
    /// }
    ///
    /// // Custom traversal through the values in the tree
    /// fn find_name<'a>(node: Option<&'a Node<Person>>, target_name: &str) -> Option<&'a Node<Person>> {
    ///     let node = node?;
    ///     if node.value().name == target_name {
    ///         Some(node)
    ///     } else {
    ///         // Recurse through left and right subtrees, just like you would in a GC'd language!
    ///         find_name(node.left(), target_name)
    ///             .or_else(|| find_name(node.right(), target_name))
    ///     }
    /// }
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// tree.insert(Person {
    ///     name: String::from("Manish"),
    ///     // ...other fields...
    /// });
    /// // ...more insertions...
    ///
    /// // Find the node with name == "Jane"
    /// assert!(find_name(tree.root(), "Jane").is_none());
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
