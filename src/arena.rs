//! Chunked slot allocator that owns every node of a tree.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to a slot in a `TypedArena<T>`.
///
/// Handles are plain indices, so they can be copied freely and stored as parent and child links
/// without creating ownership cycles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeRef {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<NodeRef>),
}

/// Slot storage for one type of object, grown a chunk at a time.
///
/// A chunk is a `Vec` that is filled up to `chunk_size` slots and never grows past it, so
/// existing objects are never moved. A released slot becomes the head of a free list that later
/// allocations pop from before touching fresh space. Dropping the arena drops every object it
/// still holds.
///
/// # Examples
///
/// ```
/// use ordered_trees::arena::TypedArena;
///
/// let mut arena = TypedArena::new(64);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    free_head: Option<NodeRef>,
    len: usize,
}

impl<T> TypedArena<T> {
    /// Creates an arena whose chunks each hold `chunk_size` slots.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(64);
    /// assert_eq!(arena.chunk_size(), 64);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            chunks: Vec::new(),
            chunk_size,
            free_head: None,
            len: 0,
        }
    }

    fn block(&self, node: NodeRef) -> Option<&Block<T>> {
        self.chunks
            .get(node.chunk_index)
            .and_then(|chunk| chunk.get(node.block_index))
    }

    fn block_mut(&mut self, node: NodeRef) -> Option<&mut Block<T>> {
        self.chunks
            .get_mut(node.chunk_index)
            .and_then(|chunk| chunk.get_mut(node.block_index))
    }

    // Fills the vacant slot at the head of the free list.
    fn reuse(&mut self, node: NodeRef, value: T) -> NodeRef {
        let block = &mut self.chunks[node.chunk_index][node.block_index];
        self.free_head = match *block {
            Block::Vacant(next) => next,
            Block::Occupied(_) => unreachable!("free list points at an occupied block"),
        };
        *block = Block::Occupied(value);
        node
    }

    // Only called with an empty free list, so every chunk but the last is full.
    fn append(&mut self, value: T) -> NodeRef {
        let chunk_size = self.chunk_size;
        if self.chunks.last().map_or(true, |chunk| chunk.len() == chunk_size) {
            self.chunks.push(Vec::with_capacity(chunk_size));
        }
        let chunk_index = self.chunks.len() - 1;
        let chunk = &mut self.chunks[chunk_index];
        chunk.push(Block::Occupied(value));
        NodeRef {
            chunk_index,
            block_index: chunk.len() - 1,
        }
    }

    /// Stores `value` and returns a handle to it. Released slots are reused first, most recently
    /// released first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(64);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> NodeRef {
        self.len += 1;
        match self.free_head {
            Some(node) => self.reuse(node, value),
            None => self.append(value),
        }
    }

    /// Takes the object out of the slot behind `node` and puts the slot on the free list.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds or its slot is already vacant. The arena is left
    /// unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(64);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// ```
    pub fn free(&mut self, node: NodeRef) -> T {
        let next = self.free_head;
        let block = match self.block_mut(node) {
            Some(block) => block,
            None => panic!("Error: attempting to free invalid block."),
        };
        if let Block::Vacant(_) = *block {
            panic!("Error: attempting to free vacant block.");
        }
        let value = match mem::replace(block, Block::Vacant(next)) {
            Block::Occupied(value) => value,
            Block::Vacant(_) => unreachable!("block checked as occupied"),
        };
        self.free_head = Some(node);
        self.len -= 1;
        value
    }

    /// Returns the object behind `node`, or `None` for a vacant or unknown slot.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        match self.block(node) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        match self.block_mut(node) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Drops every object and releases all chunks.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Index<NodeRef> for TypedArena<T> {
    type Output = T;

    fn index(&self, node: NodeRef) -> &Self::Output {
        self.get(node).expect("Error: node reference out of bounds.")
    }
}

impl<T> IndexMut<NodeRef> for TypedArena<T> {
    fn index_mut(&mut self, node: NodeRef) -> &mut Self::Output {
        self.get_mut(node).expect("Error: node reference out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::NodeRef;
    use super::TypedArena;

    #[test]
    #[should_panic]
    fn test_zero_chunk_size() {
        let _arena: TypedArena<u32> = TypedArena::new(0);
    }

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new(16);
        arena.free(NodeRef {
            chunk_index: 0,
            block_index: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_twice() {
        let mut arena = TypedArena::new(16);
        let x = arena.allocate(0);
        arena.free(x);
        arena.free(x);
    }

    #[test]
    fn test_allocate_spans_chunks() {
        let mut arena = TypedArena::new(2);
        let refs: Vec<NodeRef> = (0..5).map(|i| arena.allocate(i)).collect();
        assert_eq!(
            refs[2],
            NodeRef {
                chunk_index: 1,
                block_index: 0
            },
        );
        assert_eq!(
            refs[4],
            NodeRef {
                chunk_index: 2,
                block_index: 0
            },
        );
        assert_eq!(arena.len(), 5);
        for (i, node) in refs.into_iter().enumerate() {
            assert_eq!(arena[node], i);
        }
    }

    #[test]
    fn test_free_reuses_slots_last_in_first_out() {
        let mut arena = TypedArena::new(4);
        let a = arena.allocate('a');
        let b = arena.allocate('b');
        arena.allocate('c');

        assert_eq!(arena.free(a), 'a');
        assert_eq!(arena.free(b), 'b');
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.allocate('d'), b);
        assert_eq!(arena.allocate('e'), a);
        assert_eq!(arena[a], 'e');
        assert_eq!(arena[b], 'd');
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new(16);
        let x = arena.allocate(7);
        arena.free(x);
        assert_eq!(arena.get(x), None);
        assert_eq!(arena.get_mut(x), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new(16);
        let x = arena.allocate(0);
        *arena.get_mut(x).unwrap() = 1;
        assert_eq!(arena.get(x), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new(2);
        let x = arena.allocate(1);
        arena.allocate(2);
        arena.allocate(3);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(x), None);
        assert_eq!(
            arena.allocate(4),
            NodeRef {
                chunk_index: 0,
                block_index: 0
            },
        );
    }

    #[test]
    fn test_allocate_after_reuse_fills_last_chunk() {
        let mut arena = TypedArena::new(2);
        let x = arena.allocate(0);
        arena.free(x);
        assert_eq!(arena.allocate(1), x);
        assert_eq!(
            arena.allocate(2),
            NodeRef {
                chunk_index: 0,
                block_index: 1
            },
        );
        assert_eq!(
            arena.allocate(3),
            NodeRef {
                chunk_index: 1,
                block_index: 0
            },
        );
        assert_eq!(arena.len(), 3);
    }
}
