//! Ordered sets backed by parent-linked binary search trees, and a tree sort built on them.
//!
//! Two interchangeable trees implement the `Tree` contract:
//!
//! - `Bst`, an unbalanced binary search tree.
//! - `Treap`, a binary search tree that also keeps its nodes in max-heap order of random
//!   priorities, which gives expected logarithmic depth.
//!
//! Both store their nodes in a `TypedArena` and link every child back to its parent, so in-order
//! iteration walks the tree without an auxiliary stack. Elements are ordered by a comparator that
//! each tree stores by value; `Natural` uses the element type's `Ord` implementation.
//!
//! # Examples
//!
//! ```
//! use ordered_trees::{sort, Treap};
//!
//! let mut set = Treap::new();
//! set.add_all(vec![5, 3, 7, 3]);
//! assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&3, &5, &7]);
//!
//! let mut items = [4, 2, 9, 1];
//! sort::sort(&mut items);
//! assert_eq!(items, [1, 2, 4, 9]);
//! ```

pub mod arena;
pub mod bst;
pub mod compare;
mod linked;
pub mod sort;
pub mod treap;
mod tree;

pub use crate::bst::Bst;
pub use crate::compare::{Compare, Natural};
pub use crate::linked::Violation;
pub use crate::treap::Treap;
pub use crate::tree::Tree;
