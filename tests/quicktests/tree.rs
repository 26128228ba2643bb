use bst_explorer::{Key, Order, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both. Returns `false` as soon as a
/// traversal disagrees with the model.
fn do_ops(ops: &[Op<Key>], mut bst: Tree, set: &mut BTreeSet<Key>) -> (Tree, bool) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst = bst.insert(*k);
                set.insert(*k);
            }
            Op::Remove(k) => {
                bst = bst.delete(*k);
                set.remove(k);
            }
            Op::Traverse => {
                if !bst.inorder().into_iter().eq(set.iter().copied()) {
                    return (bst, false);
                }
            }
        }
    }

    (bst, true)
}

/// Checks every key against the bounds its ancestors impose.
fn is_ordered(tree: &Tree, low: Option<Key>, high: Option<Key>) -> bool {
    match tree.root() {
        None => true,
        Some(n) => {
            low.map_or(true, |low| n.key() > low)
                && high.map_or(true, |high| n.key() < high)
                && is_ordered(n.left(), low, Some(n.key()))
                && is_ordered(n.right(), Some(n.key()), high)
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let ops: Vec<Op<Key>> = ops
        .into_iter()
        .map(|op| match op {
            Op::Insert(k) => Op::Insert(Key::from(k)),
            Op::Remove(k) => Op::Remove(Key::from(k)),
            Op::Traverse => Op::Traverse,
        })
        .collect();
    let mut set = BTreeSet::new();

    let (tree, traversals_agreed) = do_ops(&ops, Tree::new(), &mut set);
    traversals_agreed
        && tree.len() == set.len()
        && set.iter().all(|key| tree.contains(*key))
        && is_ordered(&tree, None, None)
}

#[quickcheck]
fn contains(xs: Vec<Key>) -> bool {
    let tree: Tree = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|x| Key::from(*x)).collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(Key::from(*x)))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|x| Key::from(*x)).collect();
    for delete in &deletes {
        tree = tree.delete(Key::from(*delete));
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(Key::from(*x)))
        && still_present.iter().all(|x| tree.contains(Key::from(*x)))
        && is_ordered(&tree, None, None)
}

#[quickcheck]
fn inorder_is_sorted_unique(xs: Vec<Key>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let expected: Vec<Key> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    tree.inorder() == expected
}

#[quickcheck]
fn reinsert_changes_nothing(xs: Vec<Key>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let again = xs.iter().copied().fold(tree.clone(), Tree::insert);

    again == tree
        && again.height() == tree.height()
        && [Order::Inorder, Order::Preorder, Order::Postorder]
            .into_iter()
            .all(|order| again.traverse(order) == tree.traverse(order))
}

#[quickcheck]
fn traversals_visit_every_node(xs: Vec<Key>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let mut pre = tree.preorder();
    let mut post = tree.postorder();
    pre.sort_unstable();
    post.sort_unstable();

    pre == tree.inorder() && post == tree.inorder() && tree.inorder().len() == tree.len()
}

#[quickcheck]
fn min_max_match_inorder_ends(xs: Vec<Key>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let keys = tree.inorder();

    match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => tree.min() == Ok(*first) && tree.max() == Ok(*last),
        _ => tree.min().is_err() && tree.max().is_err(),
    }
}

#[quickcheck]
fn increasing_keys_build_a_chain(n: u8) -> bool {
    let n = usize::from(n % 64);
    let tree: Tree = (0..n as Key).collect();

    tree.height() == n as isize - 1
}
