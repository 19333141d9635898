use ordered_tree::{InvalidArgument, OrderedTree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops(ops: &[Op], tree: &mut OrderedTree, set: &mut BTreeSet<i32>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k.into());
                set.insert(k.into());
            }
            Op::Remove(k) => {
                tree.remove(k.into());
                set.remove(&i32::from(k));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.size() == set.len()
            && tree.iter().eq(set.iter().copied())
            && set.iter().all(|key| tree.contains(*key))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i32>) -> bool {
        let tree: OrderedTree = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(*x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree = xs.iter().map(|x| i32::from(*x)).collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains((*x).into()))
    }
}

quickcheck::quickcheck! {
    fn size_counts_distinct_keys(xs: Vec<i32>) -> bool {
        let tree: OrderedTree = xs.iter().copied().collect();
        let distinct: HashSet<_> = xs.into_iter().collect();

        tree.size() == distinct.len()
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree = xs.iter().map(|x| i32::from(*x)).collect();
        for delete in &deletes {
            tree.remove((*delete).into());
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains((*x).into()))
            && still_present.iter().all(|x| tree.contains((*x).into()))
    }
}

quickcheck::quickcheck! {
    fn insert_then_remove_is_inverse(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: OrderedTree = xs
            .iter()
            .map(|x| i32::from(*x))
            .filter(|x| *x != i32::from(key))
            .collect();
        let before = tree.to_string();
        let size = tree.size();

        tree.insert(key.into())
            && tree.remove(key.into()) == Some(key.into())
            && tree.size() == size
            && tree.to_string() == before
    }
}

quickcheck::quickcheck! {
    fn removing_missing_key_changes_nothing(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: OrderedTree = xs
            .iter()
            .map(|x| i32::from(*x))
            .filter(|x| *x != i32::from(key))
            .collect();
        let before = format!("{:#?}", tree);
        let size = tree.size();

        tree.remove(key.into()).is_none()
            && tree.size() == size
            && format!("{:#?}", tree) == before
    }
}

quickcheck::quickcheck! {
    fn absent_key_rejects_whole_sequence(xs: Vec<Option<i32>>) -> bool {
        let result = OrderedTree::try_from_keys(xs.clone());
        match xs.iter().position(Option::is_none) {
            Some(index) => result == Err(InvalidArgument::AbsentElement { index }),
            None => {
                let distinct: HashSet<_> = xs.iter().flatten().collect();
                result.map(|tree| tree.size()) == Ok(distinct.len())
            }
        }
    }
}

#[test]
fn renders_sample_tree() {
    let tree = OrderedTree::from([3, 1, 2, 5, 6, 4, 0]);

    assert_eq!(tree.to_string(), "[0, 1, 2, 3, 4, 5, 6]");
    assert_eq!(
        format!("{:#?}", tree),
        "-~--~-  6\n-~-  5\n-~--~-  4\n  3\n-~--~-  2\n-~-  1\n-~--~-  0\n"
    );
}

#[test]
fn two_children_removal_promotes_successor() {
    let mut tree = OrderedTree::from([5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(tree.remove(5), Some(5));
    assert_eq!(tree.to_string(), "[1, 3, 4, 7, 8, 9]");
    assert!(format!("{:#?}", tree).contains("\n  7\n"));
}
