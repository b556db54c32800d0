//! A minimal ordered-container library built around a recursive binary
//! search tree.
//!
//! [`OrderedTree`] keeps a set of unique elements ordered by their `Ord`
//! implementation. It supports boolean-result insertion with duplicate
//! rejection, borrowed-form membership queries, an edge-counting
//! [`depth`](OrderedTree::depth) measure, and lazy in-order traversal.
//! There is no rebalancing and no deletion; the shape of the tree is
//! fully determined by insertion order.

pub mod tree;

pub use tree::OrderedTree;

/// Builds an [`OrderedTree`] from the given elements, inserting them in
/// the order written. Duplicates are rejected exactly as they would be
/// by repeated [`insert`](OrderedTree::insert) calls.
#[macro_export(local_inner_macros)]
macro_rules! ordered_tree {
    ($($value:expr,)+) => { ordered_tree!($($value),+) };
    ($($value:expr),*) => {
        {
            let mut _tree = $crate::OrderedTree::new();
            $(
                let _ = _tree.insert($value);
            )*
            _tree
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_tree_macro() {
        let tree = ordered_tree! {
            1,
            3,
            2, // trailing comma
        };

        let items: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&items, &[1, 2, 3]);

        // No trailing comma
        let tree = ordered_tree![99];

        let items: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&items, &[99]);

        // Zero items
        let tree = ordered_tree!();

        let items: Vec<i32> = tree.iter_inorder().copied().collect();
        assert_eq!(&items, &[]);
    }

    #[test]
    fn ordered_tree_macro_duplicates() {
        let tree = ordered_tree![5, 3, 8, 3, 1];

        assert_eq!(tree.len(), 4);

        let items: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&items, &[1, 3, 5, 8]);
    }
}
