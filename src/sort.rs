//! Tree sort: insert every element of a slice into a tree, then write the tree back in order.
//!
//! Trees hold distinct elements, so duplicates collapse. Each function returns the number of
//! leading slots it overwrote; slots after that keep whatever values they held before the call.

use crate::compare::Compare;
use crate::tree::Tree;
use crate::treap::Treap;
use log::{debug, trace};

/// Sorts `items` with a fresh `Treap`, which gives expected `O(n log n)` time. Returns the
/// number of distinct elements written to the front of `items`.
///
/// # Examples
///
/// ```
/// use ordered_trees::sort;
///
/// let mut items = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
/// let len = sort::sort(&mut items);
/// assert_eq!(len, 7);
/// assert_eq!(&items[..len], &[1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn sort<T>(items: &mut [T]) -> usize
where
    T: Ord + Clone,
{
    sort_with(&mut Treap::new(), items)
}

/// Sorts `items` according to `cmp` with a fresh `Treap`. Elements that `cmp` considers equal
/// collapse to the first one encountered. Returns the number of elements written.
///
/// # Examples
///
/// ```
/// use ordered_trees::sort;
///
/// let mut items = [1, 3, 2];
/// assert_eq!(sort::sort_by(&mut items, |a: &i32, b: &i32| b.cmp(a)), 3);
/// assert_eq!(items, [3, 2, 1]);
/// ```
pub fn sort_by<T, C>(items: &mut [T], cmp: C) -> usize
where
    T: Clone,
    C: Compare<T>,
{
    sort_with(&mut Treap::with_comparator(cmp), items)
}

/// Sorts `items` using `tree`. Every element of `items` is added to `tree`, then the first
/// `tree.len()` slots of `items` are overwritten in ascending order. If `tree` already held
/// elements, at most `items.len()` elements are written. Returns the number of elements
/// written.
///
/// # Examples
///
/// ```
/// use ordered_trees::{sort, Bst};
///
/// let mut tree = Bst::new();
/// let mut items = ["pear", "apple", "fig"];
/// assert_eq!(sort::sort_with(&mut tree, &mut items), 3);
/// assert_eq!(items, ["apple", "fig", "pear"]);
/// assert!(tree.contains(&"fig"));
/// ```
pub fn sort_with<T, U>(tree: &mut U, items: &mut [T]) -> usize
where
    T: Clone,
    U: Tree<T>,
{
    trace!("tree sorting {} items", items.len());
    tree.add_all(items.iter().cloned());

    let mut written = 0;
    for (slot, element) in items.iter_mut().zip(tree.iter()) {
        *slot = element.clone();
        written += 1;
    }

    if written < items.len() {
        debug!(
            "duplicates collapsed: {} of {} slots hold stale values",
            items.len() - written,
            items.len(),
        );
    }
    written
}
