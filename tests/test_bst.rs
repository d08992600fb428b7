use ordered_trees::Bst;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

#[test]
fn int_test_bst_matches_btreeset() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 2, 3, 4]);
    let mut set = Bst::new();
    let mut expected = BTreeSet::new();

    for _ in 0..10_000 {
        let element = rng.gen_range(0u32, 2_000);
        if rng.gen::<bool>() {
            assert_eq!(set.add(element), expected.insert(element));
        } else {
            assert_eq!(set.remove(&element), expected.remove(&element));
        }
    }

    assert_eq!(set.len(), expected.len());
    assert_eq!(set.verify(), Ok(()));
    assert!(set.iter().eq(expected.iter()));
    assert_eq!(set.min(), expected.iter().next());
    assert_eq!(set.max(), expected.iter().next_back());
}

#[test]
fn int_test_bst_empty() {
    let mut set: Bst<u32> = Bst::new();
    assert_eq!(set.len(), 0);
    assert!(!set.contains(&42));
    assert!(!set.remove(&42));
    assert_eq!(set.iter().next(), None);
}

#[test]
fn int_test_bst_two_child_root_removal() {
    let mut set = Bst::new();
    set.add_all(vec![5, 3, 7, 2, 4, 6, 8]);
    assert!(set.remove(&5));
    assert_eq!(
        set.iter().cloned().collect::<Vec<u32>>(),
        vec![2, 3, 4, 6, 7, 8],
    );
    assert_eq!(set.len(), 6);
    assert_eq!(set.root(), Some(&6));
    assert_eq!(set.verify(), Ok(()));
}

#[test]
fn int_test_bst_idempotent_add() {
    let mut once = Bst::new();
    let mut twice = Bst::new();
    once.add_all(vec![4, 2, 6]);
    twice.add_all(vec![4, 2, 6]);

    assert!(once.add(5));
    assert!(twice.add(5));
    assert!(!twice.add(5));
    assert!(once.iter().eq(twice.iter()));
    assert_eq!(once.len(), twice.len());
}
