use cmp_bst::{Order, Reversed, NaturalOrder, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|x| tree.search(x)) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_strictly_increasing(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let elements: Vec<_> = tree.iter().collect();

    elements.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.insert(x);
    let before: Vec<_> = tree.iter().copied().collect();

    !tree.insert(x) && tree.iter().copied().eq(before.iter().copied()) && tree.len() == before.len()
}

#[quickcheck]
fn removing_absent_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|y| *y != x).collect();
    let before: Vec<_> = tree.iter().copied().collect();
    let depth = (tree.max_depth(), tree.min_depth());

    !tree.remove(&x)
        && tree.iter().copied().eq(before.iter().copied())
        && depth == (tree.max_depth(), tree.min_depth())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn kth_smallest_reproduces_in_order(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    let by_rank: Vec<_> = (1..=tree.len()).filter_map(|k| tree.kth_smallest(k)).collect();
    by_rank.into_iter().eq(tree.iter())
        && tree.kth_smallest(0).is_none()
        && tree.kth_smallest(tree.len() + 1).is_none()
}

#[quickcheck]
fn validation_orders_agree(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    Order::ALL.iter().all(|order| tree.validate(*order))
}

#[quickcheck]
fn reversed_iterates_backwards(xs: Vec<i16>) -> bool {
    let mut tree = Tree::with_comparator(Reversed(NaturalOrder));
    tree.extend(xs.iter().copied());
    let set: BTreeSet<_> = xs.into_iter().collect();

    tree.iter().eq(set.iter().rev()) && tree.min() == set.iter().next_back()
}
