//! The ordered-set contract shared by every tree in this crate.

/// An ordered set of distinct elements that can be traversed in ascending order.
///
/// Code written against `Tree<T>`, such as `sort::sort_with`, works with either `Bst` or
/// `Treap`.
///
/// # Examples
///
/// ```
/// use ordered_trees::{Bst, Tree, Treap};
///
/// fn fill<U: Tree<u32>>(tree: &mut U) -> Vec<u32> {
///     tree.add_all(vec![3, 1, 2, 1]);
///     tree.iter().cloned().collect()
/// }
///
/// assert_eq!(fill(&mut Bst::new()), vec![1, 2, 3]);
/// assert_eq!(fill(&mut Treap::new()), vec![1, 2, 3]);
/// ```
pub trait Tree<T> {
    /// In-order iterator returned by `iter`.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Inserts `element` if no equal element is present. Returns `true` if the tree was
    /// modified.
    fn add(&mut self, element: T) -> bool;

    /// Inserts every element of `elements`, skipping ones already present. Returns `true` if at
    /// least one insertion modified the tree.
    fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let mut modified = false;
        for element in elements {
            if self.add(element) {
                modified = true;
            }
        }
        modified
    }

    /// Removes the element equal to `element`. Returns `true` if it was present.
    fn remove(&mut self, element: &T) -> bool;

    /// Returns `true` if an element equal to `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of elements in the tree.
    fn len(&self) -> usize;

    /// Returns `true` if the tree holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a fresh iterator that yields the elements in ascending order.
    fn iter(&self) -> Self::Iter<'_>;
}
