use crate::arena::{NodeRef, TypedArena};
use crate::linked::node::Node;
use crate::linked::tree::{leftmost, successor};
use std::iter::FusedIterator;

/// An in-order iterator over a parent-linked tree.
///
/// The iterator keeps only the node it will yield next. Each step follows the right subtree if
/// there is one, and otherwise climbs parent links until it arrives from a left child, so no
/// stack is allocated. Every call to `next` is amortized `O(1)`.
pub struct Iter<'a, T, P> {
    arena: &'a TypedArena<Node<T, P>>,
    next: Option<NodeRef>,
    remaining: usize,
}

impl<'a, T, P> Iter<'a, T, P> {
    pub(crate) fn new(
        arena: &'a TypedArena<Node<T, P>>,
        root: Option<NodeRef>,
        len: usize,
    ) -> Self {
        Iter {
            arena,
            next: root.map(|root| leftmost(arena, root)),
            remaining: len,
        }
    }
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let curr = self.next?;
        self.next = successor(arena, curr);
        self.remaining -= 1;
        Some(&arena[curr].element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, P> ExactSizeIterator for Iter<'a, T, P> {}

impl<'a, T, P> FusedIterator for Iter<'a, T, P> {}

impl<'a, T, P> Clone for Iter<'a, T, P> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::Natural;
    use crate::linked::LinkedTree;

    fn build(elements: &[i32]) -> LinkedTree<i32, (), Natural> {
        let mut tree = LinkedTree::new(Natural, 8);
        for &element in elements {
            tree.insert_with(element, || ());
        }
        tree
    }

    #[test]
    fn test_empty() {
        let tree = build(&[]);
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_in_order() {
        let tree = build(&[5, 3, 7, 1, 4, 6, 8]);
        assert_eq!(
            tree.iter().cloned().collect::<Vec<i32>>(),
            vec![1, 3, 4, 5, 6, 7, 8],
        );
    }

    #[test]
    fn test_degenerate_chains() {
        let ascending = build(&[1, 2, 3, 4, 5]);
        assert_eq!(
            ascending.iter().cloned().collect::<Vec<i32>>(),
            vec![1, 2, 3, 4, 5],
        );

        let descending = build(&[5, 4, 3, 2, 1]);
        assert_eq!(
            descending.iter().cloned().collect::<Vec<i32>>(),
            vec![1, 2, 3, 4, 5],
        );

        let zigzag = build(&[1, 5, 2, 4, 3]);
        assert_eq!(
            zigzag.iter().cloned().collect::<Vec<i32>>(),
            vec![1, 2, 3, 4, 5],
        );
    }

    #[test]
    fn test_size_hint_counts_down() {
        let tree = build(&[2, 1, 3]);
        let mut iter = tree.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_fresh_walk_after_exhaustion() {
        let tree = build(&[2, 1]);
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(tree.iter().next(), Some(&1));
    }

    #[test]
    fn test_clone_resumes_independently() {
        let tree = build(&[2, 1, 3]);
        let mut iter = tree.iter();
        iter.next();
        let rest = iter.clone();
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(rest.cloned().collect::<Vec<i32>>(), vec![2, 3]);
    }
}
