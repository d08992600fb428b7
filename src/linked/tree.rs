use crate::arena::{NodeRef, TypedArena};
use crate::compare::Compare;
use crate::linked::iter::Iter;
use crate::linked::node::{Node, Side};
use crate::linked::violation::Violation;
use std::cmp::Ordering;
use std::mem;

/// Number of nodes allocated per arena chunk unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

pub fn leftmost<T, P>(arena: &TypedArena<Node<T, P>>, mut node: NodeRef) -> NodeRef {
    while let Some(left) = arena[node].left {
        node = left;
    }
    node
}

pub fn rightmost<T, P>(arena: &TypedArena<Node<T, P>>, mut node: NodeRef) -> NodeRef {
    while let Some(right) = arena[node].right {
        node = right;
    }
    node
}

/// Returns the in-order successor of `node`: the leftmost node of its right subtree if it has
/// one, otherwise the first ancestor reached through a left child link.
pub fn successor<T, P>(arena: &TypedArena<Node<T, P>>, node: NodeRef) -> Option<NodeRef> {
    if let Some(right) = arena[node].right {
        return Some(leftmost(arena, right));
    }

    let mut child = node;
    let mut parent = arena[node].parent;
    while let Some(curr) = parent {
        if arena[curr].left == Some(child) {
            return Some(curr);
        }
        child = curr;
        parent = arena[curr].parent;
    }
    None
}

/// An unbalanced binary search tree whose nodes carry parent links and a priority of type `P`.
///
/// The tree keeps the search order under the comparator `C` and the invariant that every child
/// link is mirrored by a parent link. It knows nothing about heap order; callers that maintain
/// one do so through `rotate_up`.
pub struct LinkedTree<T, P, C> {
    arena: TypedArena<Node<T, P>>,
    root: Option<NodeRef>,
    cmp: C,
}

impl<T, P, C> LinkedTree<T, P, C> {
    pub fn new(cmp: C, chunk_size: usize) -> Self {
        LinkedTree {
            arena: TypedArena::new(chunk_size),
            root: None,
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    pub fn node(&self, node: NodeRef) -> &Node<T, P> {
        &self.arena[node]
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }

    pub fn min(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[leftmost(&self.arena, root)].element)
    }

    pub fn max(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[rightmost(&self.arena, root)].element)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeRef, usize)> = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            let Node { left, right, .. } = self.arena[node];
            if let Some(left) = left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = right {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::new(&self.arena, self.root, self.len())
    }

    /// Returns the slot of its parent that holds `node`, or `None` if `node` is the root.
    #[cfg(test)]
    pub fn side_of(&self, node: NodeRef) -> Option<Side> {
        self.arena[node].parent.map(|parent| {
            if self.arena[parent].left == Some(node) {
                Side::Left
            } else {
                Side::Right
            }
        })
    }

    // Points the link that held `old` at `new` and fixes `new`'s parent link.
    fn replace_child(&mut self, parent: Option<NodeRef>, old: NodeRef, new: Option<NodeRef>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent_node = &mut self.arena[parent];
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    parent_node.right = new;
                }
            },
        }
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }

    /// Unlinks a node with at most one child, promoting the child into its slot, and releases it.
    ///
    /// # Panics
    ///
    /// Panics if `node` has two children.
    pub fn splice(&mut self, node: NodeRef) -> Node<T, P> {
        let (parent, child) = {
            let target = &self.arena[node];
            assert!(
                !target.has_two_children(),
                "Error: cannot splice a node with two children."
            );
            (target.parent, target.left.or(target.right))
        };
        self.replace_child(parent, node, child);
        self.arena.free(node)
    }

    /// Removes the element at `node` and returns it.
    ///
    /// A node with two children keeps its position: the in-order successor is spliced out and
    /// its element and priority are moved into `node`.
    pub fn remove_by_successor(&mut self, node: NodeRef) -> T {
        let (left, right) = {
            let target = &self.arena[node];
            (target.left, target.right)
        };
        let right = match (left, right) {
            (Some(_), Some(right)) => right,
            _ => return self.splice(node).element,
        };

        let successor = leftmost(&self.arena, right);
        let Node {
            element, priority, ..
        } = self.splice(successor);
        let target = &mut self.arena[node];
        target.priority = priority;
        mem::replace(&mut target.element, element)
    }

    /// Moves `node` one level up by rotating it over its parent. A right child is rotated left
    /// and a left child is rotated right; search order is preserved either way.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the root.
    pub fn rotate_up(&mut self, node: NodeRef) {
        let parent = self.arena[node]
            .parent
            .expect("Expected a node with a parent.");
        let side = if self.arena[parent].left == Some(node) {
            Side::Left
        } else {
            Side::Right
        };
        let grandparent = self.arena[parent].parent;

        let inner = self.arena[node].child(side.opposite());
        *self.arena[parent].child_mut(side) = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(parent);
        }

        *self.arena[node].child_mut(side.opposite()) = Some(parent);
        self.arena[parent].parent = Some(node);

        self.replace_child(grandparent, parent, Some(node));
    }
}

impl<T, P, C> LinkedTree<T, P, C>
where
    C: Compare<T>,
{
    pub fn find(&self, element: &T) -> Option<NodeRef> {
        let mut curr = self.root;
        while let Some(node) = curr {
            let curr_node = &self.arena[node];
            curr = match self.cmp.compare(element, &curr_node.element) {
                Ordering::Less => curr_node.left,
                Ordering::Greater => curr_node.right,
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Attaches `element` as a new leaf and returns its node. Returns `None` without calling
    /// `priority` if an equal element is already present.
    pub fn insert_with<F>(&mut self, element: T, priority: F) -> Option<NodeRef>
    where
        F: FnOnce() -> P,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(node) = curr {
            let curr_node = &self.arena[node];
            side = match self.cmp.compare(&element, &curr_node.element) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return None,
            };
            parent = Some(node);
            curr = curr_node.child(side);
        }

        let new_node = self.arena.allocate(Node::new(element, priority(), parent));
        match parent {
            None => self.root = Some(new_node),
            Some(parent) => *self.arena[parent].child_mut(side) = Some(new_node),
        }
        Some(new_node)
    }
}

impl<T, P, C> LinkedTree<T, P, C>
where
    P: PartialOrd,
    C: Compare<T>,
{
    /// Walks the whole tree and reports the first broken invariant: search order (which also
    /// rules out duplicates), parent links, heap order of priorities, and the element count.
    pub fn verify(&self) -> Result<(), Violation> {
        let expected = self.len();
        let root = match self.root {
            Some(root) => root,
            None if expected == 0 => return Ok(()),
            None => {
                return Err(Violation::SizeMismatch {
                    expected,
                    reachable: 0,
                })
            },
        };
        if self.arena[root].parent.is_some() {
            return Err(Violation::RootHasParent);
        }

        let mut reachable = 0;
        let mut stack: Vec<(NodeRef, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        while let Some((node, lower, upper)) = stack.pop() {
            reachable += 1;
            if reachable > expected {
                return Err(Violation::SizeMismatch {
                    expected,
                    reachable,
                });
            }

            let curr_node = &self.arena[node];
            let element = &curr_node.element;
            if lower.map_or(false, |lower| !self.cmp.precedes(lower, element))
                || upper.map_or(false, |upper| !self.cmp.precedes(element, upper))
            {
                return Err(Violation::OutOfOrder);
            }

            if let Some(left) = curr_node.left {
                self.verify_link(node, left)?;
                stack.push((left, lower, Some(element)));
            }
            if let Some(right) = curr_node.right {
                self.verify_link(node, right)?;
                stack.push((right, Some(element), upper));
            }
        }

        if reachable != expected {
            return Err(Violation::SizeMismatch {
                expected,
                reachable,
            });
        }
        Ok(())
    }

    fn verify_link(&self, parent: NodeRef, child: NodeRef) -> Result<(), Violation> {
        let child_node = &self.arena[child];
        if child_node.parent != Some(parent) {
            return Err(Violation::BrokenParentLink);
        }
        if !(child_node.priority <= self.arena[parent].priority) {
            return Err(Violation::HeapOrder);
        }
        Ok(())
    }
}
