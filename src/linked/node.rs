use crate::arena::NodeRef;

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a parent-linked tree.
///
/// `priority` is `()` for plain binary search trees and the heap key for treaps.
pub struct Node<T, P> {
    pub element: T,
    pub priority: P,
    pub left: Option<NodeRef>,
    pub right: Option<NodeRef>,
    pub parent: Option<NodeRef>,
}

impl<T, P> Node<T, P> {
    pub fn new(element: T, priority: P, parent: Option<NodeRef>) -> Self {
        Node {
            element,
            priority,
            left: None,
            right: None,
            parent,
        }
    }

    pub fn child(&self, side: Side) -> Option<NodeRef> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Option<NodeRef> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, Side};
    use crate::arena::TypedArena;

    #[test]
    fn test_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_child_slots() {
        let mut arena = TypedArena::new(4);
        let child = arena.allocate(0);
        let mut node = Node::new(1, (), None);
        assert!(!node.has_two_children());

        *node.child_mut(Side::Right) = Some(child);
        assert_eq!(node.child(Side::Right), Some(child));
        assert_eq!(node.child(Side::Left), None);

        node.left = Some(child);
        assert!(node.has_two_children());
    }
}
