//! Unbalanced binary search tree with parent links.
//!
//! Insertion order alone decides the shape of the tree, so sorted input degrades it to a chain.
//! Use `Treap` when expected logarithmic depth matters.

mod set;

pub use self::set::{Bst, BstIter};
