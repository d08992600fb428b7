//! Parent-linked binary search tree engine shared by `Bst` and `Treap`.
//!
//! Nodes live in a `TypedArena` and refer to each other through `NodeRef` handles. Every child
//! link has a matching parent link, which lets in-order traversal find successors without an
//! auxiliary stack and lets rotations restructure the tree in place.

mod iter;
mod node;
mod tree;
mod violation;

pub use self::iter::Iter;
pub use self::tree::{LinkedTree, DEFAULT_CHUNK_SIZE};
pub use self::violation::Violation;
