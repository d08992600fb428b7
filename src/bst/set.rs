use crate::compare::{Compare, Natural};
use crate::linked::{self, LinkedTree, Violation, DEFAULT_CHUNK_SIZE};
use crate::tree::Tree;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An ordered set implemented by an unbalanced binary search tree.
///
/// Every element in the left subtree of a node precedes the node's element and every element
/// in its right subtree follows it, according to the comparator `C`. Nodes also link to their
/// parents, which allows in-order iteration without an auxiliary stack. Removing a node with
/// two children moves its in-order successor's element into it, so the node keeps its place.
///
/// # Examples
///
/// ```
/// use ordered_trees::Bst;
///
/// let mut set = Bst::new();
/// assert!(set.add(5));
/// assert!(set.add(3));
/// assert!(!set.add(5));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&3));
/// assert_eq!(set.min(), Some(&3));
///
/// assert!(set.remove(&5));
/// assert!(!set.remove(&5));
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&3]);
/// ```
pub struct Bst<T, C = Natural> {
    tree: LinkedTree<T, (), C>,
}

impl<T> Bst<T>
where
    T: Ord,
{
    /// Constructs a new, empty `Bst<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let set: Bst<u32> = Bst::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Bst<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `Bst<T, C>` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.add_all(vec![1, 3, 2]);
    /// assert_eq!(set.iter().collect::<Vec<&i32>>(), vec![&3, &2, &1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_config(cmp, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `Bst<T, C>` ordered by `cmp` whose nodes are allocated
    /// `chunk_size` at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_config(cmp: C, chunk_size: usize) -> Self {
        Bst {
            tree: LinkedTree::new(cmp, chunk_size),
        }
    }

    /// Inserts an element into the set. Returns `false` and leaves the set unchanged if an
    /// equal element is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        self.tree.insert_with(element, || ()).is_some()
    }

    /// Inserts every element yielded by `elements`. Returns `true` if at least one of them was
    /// not already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::new();
    /// assert!(set.add_all(vec![2, 2, 1]));
    /// assert!(!set.add_all(vec![1, 2]));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .fold(false, |modified, element| self.add(element) || modified)
    }

    /// Removes the element equal to `element` and returns it, or `None` if it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::new();
    /// set.add(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, element: &T) -> Option<T> {
        let node = self.tree.find(element)?;
        Some(self.tree.remove_by_successor(node))
    }

    /// Removes the element equal to `element`. Returns `true` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::new();
    /// set.add(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        self.take(element).is_some()
    }

    /// Checks if an element equal to `element` exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::new();
    /// set.add(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        self.tree.find(element).is_some()
    }

    /// Checks every structural invariant of the tree: strictly ascending order, parent links
    /// that mirror child links, and an element count matching the reachable nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let set: Bst<u32> = (0..10).collect();
    /// assert_eq!(set.verify(), Ok(()));
    /// ```
    pub fn verify(&self) -> Result<(), Violation> {
        self.tree.verify()
    }
}

impl<T, C> Bst<T, C> {
    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::new();
    /// set.add(1);
    /// set.add(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum element of the set, or `None` if it is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum element of the set, or `None` if it is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns the element stored at the root of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::new();
    /// set.add_all(vec![5, 3, 7, 6]);
    /// assert_eq!(set.root(), Some(&5));
    ///
    /// set.remove(&5);
    /// assert_eq!(set.root(), Some(&6));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.tree.root().map(|root| &self.tree.node(root).element)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the comparator ordering the set.
    pub fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    /// Returns an iterator over the set. The iterator yields elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Bst;
    ///
    /// let mut set = Bst::new();
    /// set.add(3);
    /// set.add(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BstIter<'_, T> {
        BstIter {
            inner: self.tree.iter(),
        }
    }
}

impl<T, C> Tree<T> for Bst<T, C>
where
    C: Compare<T>,
{
    type Iter<'a> = BstIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, element: T) -> bool {
        Bst::add(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        Bst::remove(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        Bst::contains(self, element)
    }

    fn len(&self) -> usize {
        Bst::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Bst::iter(self)
    }
}

/// An iterator for `Bst<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct BstIter<'a, T> {
    inner: linked::Iter<'a, T, ()>,
}

impl<'a, T> Iterator for BstIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for BstIter<'a, T> {}

impl<'a, T> FusedIterator for BstIter<'a, T> {}

impl<'a, T, C> IntoIterator for &'a Bst<T, C> {
    type Item = &'a T;
    type IntoIter = BstIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for Bst<T, C>
where
    C: Compare<T>,
{
    fn extend<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.add_all(elements);
    }
}

impl<T> FromIterator<T> for Bst<T>
where
    T: Ord,
{
    fn from_iter<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Bst::new();
        set.add_all(elements);
        set
    }
}

impl<T> Default for Bst<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for Bst<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
