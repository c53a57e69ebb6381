use plain_bst::{Number, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                set.remove(k);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.inorder() == set.into_iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x).map(|n| n.key()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for remove in &removes {
            tree.remove(remove);
        }

        let still_present = xs.iter().filter(|x| !removes.contains(x));

        removes.iter().all(|x| tree.find(x).is_none())
            && still_present.clone().all(|x| tree.contains(x))
            && tree.len() == still_present.collect::<HashSet<_>>().len()
    }
}

quickcheck::quickcheck! {
    fn duplicates_are_idempotent(xs: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before = tree.inorder();
        tree.extend(xs.iter().copied());

        tree.inorder() == before
    }
}

quickcheck::quickcheck! {
    fn number_keys_sort_like_floats(xs: Vec<f64>) -> bool {
        let finite = xs.into_iter().filter(|x| x.is_finite()).collect::<Vec<_>>();
        let tree = finite
            .iter()
            .filter_map(|x| Number::new(*x).ok())
            .collect::<Tree<_>>();

        let mut expected = finite;
        expected.sort_by(f64::total_cmp);
        // `-0.0` and `0.0` are the same key.
        expected.iter_mut().filter(|x| **x == 0.0).for_each(|x| *x = 0.0);
        expected.dedup();

        tree.inorder().into_iter().map(f64::from).collect::<Vec<_>>() == expected
    }
}
