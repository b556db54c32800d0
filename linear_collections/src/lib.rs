//! Linear container siblings of the `ordered-tree` crate.
//!
//! Each container here is an independent contract: a singly linked list,
//! an array-backed list, a FIFO queue, and a LIFO stack. All of them own
//! their elements exclusively along `next` pointers (or a `Vec`); none
//! of them is consumed by the tree.

pub mod list;
pub mod array_list;
pub mod queue;
pub mod stack;

pub use list::LinkedList;
pub use array_list::ArrayList;
pub use queue::LinkedQueue;
pub use stack::LinkedStack;
