use crate::compare::{Compare, Natural};
use crate::linked::{self, LinkedTree, Violation, DEFAULT_CHUNK_SIZE};
use crate::tree::Tree;
use crate::treap::tree::{bubble_up, sink_and_remove};
use log::trace;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An ordered set implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has an element and a priority drawn uniformly from `[0, 1)` when it is created. The
/// element of any node is greater than all elements in its left subtree and less than all
/// elements in its right subtree. The priority of a node is at least the priority of every node
/// in its subtrees. Because priorities are random, the expected height of the tree is
/// proportional to the logarithm of the number of elements, whatever the insertion order.
///
/// New nodes are attached as leaves and rotated up until the heap property holds again. Removed
/// nodes are rotated down until they have at most one child and then unlinked, so the heap
/// property holds after every operation.
///
/// # Examples
///
/// ```
/// use ordered_trees::Treap;
///
/// let mut set = Treap::new();
/// assert!(set.add(0));
/// assert!(set.add(3));
/// assert!(!set.add(3));
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(&0));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// assert_eq!(set.verify(), Ok(()));
/// ```
pub struct Treap<T, C = Natural, R = XorShiftRng> {
    tree: LinkedTree<T, f64, C>,
    rng: R,
}

impl<T> Treap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `Treap<T>` ordered by `T`'s `Ord` implementation, with a random
    /// source seeded from the operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Treap;
    ///
    /// let set: Treap<u32> = Treap::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Constructs a new, empty `Treap<T>` whose priorities come from a generator seeded with
    /// `seed`. Two treaps built with the same seed and the same operations have the same shape.
    ///
    /// # Panics
    ///
    /// Panics if every word of `seed` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Treap;
    ///
    /// let mut a = Treap::with_seed([1, 2, 3, 4]);
    /// let mut b = Treap::with_seed([1, 2, 3, 4]);
    /// a.add_all(0..100);
    /// b.add_all(0..100);
    /// assert_eq!(a.root(), b.root());
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        Self::with_config(Natural, XorShiftRng::from_seed(seed), DEFAULT_CHUNK_SIZE)
    }
}

impl<T, C> Treap<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `Treap<T, C>` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Treap;
    ///
    /// let mut set = Treap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.add_all(vec![1, 3, 2]);
    /// assert_eq!(set.iter().collect::<Vec<&i32>>(), vec![&3, &2, &1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_config(cmp, rand::weak_rng(), DEFAULT_CHUNK_SIZE)
    }
}

impl<T, C, R> Treap<T, C, R>
where
    C: Compare<T>,
    R: Rng,
{
    /// Constructs a new, empty `Treap<T, C, R>` ordered by `cmp`, drawing priorities from `rng`
    /// and allocating nodes `chunk_size` at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::compare::Natural;
    /// use ordered_trees::Treap;
    /// use rand::{SeedableRng, XorShiftRng};
    ///
    /// let rng = XorShiftRng::from_seed([7, 7, 7, 7]);
    /// let mut set = Treap::with_config(Natural, rng, 256);
    /// set.add(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn with_config(cmp: C, rng: R, chunk_size: usize) -> Self {
        Treap {
            tree: LinkedTree::new(cmp, chunk_size),
            rng,
        }
    }

    /// Inserts an element into the set. Returns `false` and leaves the set unchanged if an
    /// equal element is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Treap;
    ///
    /// let mut set = Treap::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        let Treap {
            ref mut tree,
            ref mut rng,
        } = *self;
        match tree.insert_with(element, || rng.gen::<f64>()) {
            Some(node) => {
                let rotations = bubble_up(tree, node);
                trace!("inserted node rotated up {} levels", rotations);
                true
            },
            None => false,
        }
    }

    /// Inserts every element yielded by `elements`. Returns `true` if at least one of them was
    /// not already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Treap;
    ///
    /// let mut set = Treap::new();
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
    /// use ordered_trees::Treap;
    ///
    /// let mut set = Treap::new();
    /// set.add(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, element: &T) -> Option<T> {
        let node = self.tree.find(element)?;
        let (element, rotations) = sink_and_remove(&mut self.tree, node);
        trace!("removed node rotated down {} levels", rotations);
        Some(element)
    }

    /// Removes the element equal to `element`. Returns `true` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Treap;
    ///
    /// let mut set = Treap::new();
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
    /// use ordered_trees::Treap;
    ///
    /// let mut set = Treap::new();
    /// set.add(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        self.tree.find(element).is_some()
    }

    /// Checks every structural invariant of the treap: strictly ascending order, parent links
    /// that mirror child links, heap order of priorities, and an element count matching the
    /// reachable nodes.
    pub fn verify(&self) -> Result<(), Violation> {
        self.tree.verify()
    }
}

impl<T, C, R> Treap<T, C, R> {
    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every element. The random source keeps its state.
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

    /// Returns the element stored at the root, which carries the highest priority in the set.
    pub fn root(&self) -> Option<&T> {
        self.tree.root().map(|root| &self.tree.node(root).element)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::Treap;
    ///
    /// let mut set = Treap::with_seed([1, 1, 1, 1]);
    /// set.add_all(0..1024);
    /// assert!(set.height() < 50);
    /// ```
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
    /// use ordered_trees::Treap;
    ///
    /// let mut set = Treap::new();
    /// set.add(3);
    /// set.add(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapIter<'_, T> {
        TreapIter {
            inner: self.tree.iter(),
        }
    }
}

impl<T, C, R> Tree<T> for Treap<T, C, R>
where
    C: Compare<T>,
    R: Rng,
{
    type Iter<'a> = TreapIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, element: T) -> bool {
        Treap::add(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        Treap::remove(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        Treap::contains(self, element)
    }

    fn len(&self) -> usize {
        Treap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Treap::iter(self)
    }
}

/// An iterator for `Treap<T, C, R>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct TreapIter<'a, T> {
    inner: linked::Iter<'a, T, f64>,
}

impl<'a, T> Iterator for TreapIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for TreapIter<'a, T> {}

impl<'a, T> FusedIterator for TreapIter<'a, T> {}

impl<'a, T, C, R> IntoIterator for &'a Treap<T, C, R> {
    type Item = &'a T;
    type IntoIter = TreapIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C, R> Extend<T> for Treap<T, C, R>
where
    C: Compare<T>,
    R: Rng,
{
    fn extend<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.add_all(elements);
    }
}

impl<T> FromIterator<T> for Treap<T>
where
    T: Ord,
{
    fn from_iter<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Treap::new();
        set.add_all(elements);
        set
    }
}

impl<T> Default for Treap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, R> fmt::Debug for Treap<T, C, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
