use crate::arena::NodeRef;
use crate::linked::LinkedTree;

/// Rotates a freshly attached node up until its parent's priority is at least its own. Returns
/// the number of rotations performed.
pub fn bubble_up<T, P, C>(tree: &mut LinkedTree<T, P, C>, node: NodeRef) -> usize
where
    P: PartialOrd,
{
    let mut rotations = 0;
    while let Some(parent) = tree.node(node).parent {
        if tree.node(node).priority <= tree.node(parent).priority {
            break;
        }
        tree.rotate_up(node);
        rotations += 1;
    }
    rotations
}

/// Rotates `node` down, always lifting its higher-priority child, until it has at most one
/// child, then unlinks it. Returns the removed element and the number of rotations performed.
pub fn sink_and_remove<T, P, C>(tree: &mut LinkedTree<T, P, C>, node: NodeRef) -> (T, usize)
where
    P: PartialOrd,
{
    let mut rotations = 0;
    loop {
        let (left, right) = {
            let target = tree.node(node);
            (target.left, target.right)
        };
        let child = match (left, right) {
            (Some(left), Some(right)) => {
                if tree.node(left).priority > tree.node(right).priority {
                    left
                } else {
                    right
                }
            },
            _ => break,
        };
        tree.rotate_up(child);
        rotations += 1;
    }
    (tree.splice(node).element, rotations)
}

#[cfg(test)]
mod tests {
    use super::{bubble_up, sink_and_remove};
    use crate::compare::Natural;
    use crate::linked::LinkedTree;

    fn build(entries: &[(u32, u32)]) -> LinkedTree<u32, u32, Natural> {
        let mut tree = LinkedTree::new(Natural, 8);
        for &(element, priority) in entries {
            if let Some(node) = tree.insert_with(element, || priority) {
                bubble_up(&mut tree, node);
            }
        }
        tree
    }

    fn root_element(tree: &LinkedTree<u32, u32, Natural>) -> Option<u32> {
        tree.root().map(|root| tree.node(root).element)
    }

    #[test]
    fn test_bubble_up_to_root() {
        let mut tree = build(&[(2, 10), (1, 5), (3, 7)]);
        let node = tree.insert_with(4, || 20).unwrap();
        assert_eq!(bubble_up(&mut tree, node), 2);
        assert_eq!(root_element(&tree), Some(4));
        assert_eq!(tree.verify(), Ok(()));
        assert_eq!(
            tree.iter().cloned().collect::<Vec<u32>>(),
            vec![1, 2, 3, 4],
        );
    }

    #[test]
    fn test_bubble_up_stops_at_larger_parent() {
        let mut tree = build(&[(5, 100), (2, 50)]);
        let node = tree.insert_with(3, || 60).unwrap();
        assert_eq!(bubble_up(&mut tree, node), 1);
        assert_eq!(root_element(&tree), Some(5));
        assert_eq!(tree.verify(), Ok(()));
    }

    #[test]
    fn test_bubble_up_keeps_equal_priority() {
        let mut tree = build(&[(1, 7)]);
        let node = tree.insert_with(2, || 7).unwrap();
        assert_eq!(bubble_up(&mut tree, node), 0);
        assert_eq!(root_element(&tree), Some(1));
    }

    #[test]
    fn test_sink_lifts_higher_priority_child() {
        let mut tree = build(&[(4, 100), (2, 40), (6, 90), (1, 10), (3, 30), (5, 80), (7, 20)]);
        let root = tree.root().unwrap();

        let (element, rotations) = sink_and_remove(&mut tree, root);
        assert_eq!(element, 4);
        assert_eq!(rotations, 2);
        assert_eq!(root_element(&tree), Some(6));
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.verify(), Ok(()));
        assert_eq!(
            tree.iter().cloned().collect::<Vec<u32>>(),
            vec![1, 2, 3, 5, 6, 7],
        );
    }

    #[test]
    fn test_sink_leaf_and_single_child() {
        let mut tree = build(&[(4, 100), (2, 40), (1, 10)]);
        let leaf = tree.find(&1).unwrap();
        assert_eq!(sink_and_remove(&mut tree, leaf), (1, 0));

        let root = tree.root().unwrap();
        assert_eq!(sink_and_remove(&mut tree, root), (4, 0));
        assert_eq!(root_element(&tree), Some(2));
        assert_eq!(tree.verify(), Ok(()));
    }
}
