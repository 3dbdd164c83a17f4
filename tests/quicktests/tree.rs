use linked_ds::{Error, Tree};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::TreeOp;

/// Applies a set of operations to a tree and a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same multiset of values in both.
fn do_ops(ops: &[TreeOp<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) -> bool {
    for op in ops {
        let agrees = match *op {
            TreeOp::Insert(x) => {
                tree.insert(x);
                let position = model.partition_point(|y| *y <= x);
                model.insert(position, x);
                true
            }
            TreeOp::Delete(x) => {
                let expected = match model.binary_search(&x) {
                    Ok(position) => Ok(model.remove(position)),
                    Err(_) => Err(Error::NotFound),
                };
                tree.delete(&x) == expected
            }
            TreeOp::Iter => tree.in_order().eq(model.iter()),
        };

        if !agrees || tree.len() != model.len() {
            return false;
        }
    }

    true
}

fn is_sorted(xs: &[i8]) -> bool {
    xs.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<TreeOp<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree.in_order().eq(model.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let in_order: Vec<_> = tree.in_order().copied().collect();

    is_sorted(&in_order) && in_order.len() == xs.len()
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected = xs.clone();
    expected.sort_unstable();

    let mut pre: Vec<_> = tree.pre_order().copied().collect();
    let mut post: Vec<_> = tree.post_order().copied().collect();
    pre.sort_unstable();
    post.sort_unstable();

    pre == expected && post == expected
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i8>, target: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<_> = tree.in_order().copied().collect();

    match before.binary_search(&target) {
        Ok(position) => {
            let mut expected = before.clone();
            expected.remove(position);

            tree.delete(&target) == Ok(target)
                && tree.in_order().copied().eq(expected.into_iter())
        }
        Err(_) => {
            tree.delete(&target) == Err(Error::NotFound) && tree.in_order().copied().eq(before)
        }
    }
}

#[quickcheck]
fn delete_two_child_node_promotes_successor(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let root = match tree.root() {
        Some(root) if root.left().is_some() && root.right().is_some() => root,
        _ => return true,
    };
    let target = *root.value();
    let mut successor = root.right().unwrap();
    while let Some(left) = successor.left() {
        successor = left;
    }
    let successor = *successor.value();

    tree.delete(&target) == Ok(target)
        && tree.root().map(|root| *root.value()) == Some(successor)
        && is_sorted(&tree.in_order().copied().collect::<Vec<_>>())
}

#[quickcheck]
fn clone_keeps_shape(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let clone = tree.clone();

    clone.pre_order().eq(tree.pre_order()) && clone.height() == tree.height()
}
