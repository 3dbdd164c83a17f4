use linked_ds::{Error, LinkedList};
use quickcheck_macros::quickcheck;

use crate::ListOp;

/// Applies a set of operations to a list and a `Vec`, checking that every
/// operation reports the same outcome on both.
fn do_ops(ops: &[ListOp<i8>], list: &mut LinkedList<i8>, model: &mut Vec<i8>) -> bool {
    for op in ops {
        let agrees = match *op {
            ListOp::Append(x) => {
                list.append(x);
                model.push(x);
                true
            }
            ListOp::InsertAtStart(x) => {
                list.insert_at_start(x);
                model.insert(0, x);
                true
            }
            ListOp::InsertAtPosition(x, position) => {
                let expected = if position <= model.len() {
                    model.insert(position, x);
                    Ok(())
                } else {
                    Err(Error::OutOfBounds {
                        position,
                        len: model.len(),
                    })
                };
                list.insert_at_position(x, position) == expected
            }
            ListOp::RemoveFirst => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                list.remove_first() == expected
            }
            ListOp::RemoveLast => list.remove_last() == model.pop(),
            ListOp::RemoveAtPosition(position) => {
                let len = model.len();
                let expected = if position < len {
                    Ok(Some(model.remove(position)))
                } else if position == len {
                    Ok(None)
                } else {
                    Err(Error::OutOfBounds { position, len })
                };
                list.remove_at_position(position) == expected
            }
            ListOp::RemoveValue(x) => {
                let expected = model
                    .iter()
                    .position(|y| *y == x)
                    .map(|position| model.remove(position));
                list.remove_value(&x) == expected
            }
        };

        if !agrees || list.len() != model.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<ListOp<i8>>) -> bool {
    let mut list = LinkedList::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut list, &mut model) && list.iter().eq(model.iter())
}

#[quickcheck]
fn find_value_is_first_occurrence(xs: Vec<i8>, needle: i8) -> bool {
    let mut list = LinkedList::new();
    for x in &xs {
        list.append(*x);
    }

    list.find_value(&needle) == xs.iter().position(|x| *x == needle)
}

#[quickcheck]
fn insert_then_find_position(xs: Vec<i8>, value: i8, position: usize) -> bool {
    let mut list: LinkedList<_> = xs.iter().copied().collect();
    let position = position % (xs.len() + 1);

    list.insert_at_position(value, position).is_ok()
        && list.find_position(position) == Some(&value)
        && list.len() == xs.len() + 1
}

#[quickcheck]
fn insert_at_zero_is_insert_at_start(xs: Vec<i8>, value: i8) -> bool {
    let mut at_zero: LinkedList<_> = xs.iter().copied().collect();
    let mut at_start = at_zero.clone();

    at_zero.insert_at_position(value, 0).is_ok() && {
        at_start.insert_at_start(value);
        at_zero == at_start
    }
}

#[quickcheck]
fn insert_past_the_end_changes_nothing(xs: Vec<i8>, value: i8, past: u8) -> bool {
    let mut list: LinkedList<_> = xs.iter().copied().collect();
    let position = xs.len() + 1 + past as usize;

    list.insert_at_position(value, position).is_err() && list.iter().eq(xs.iter())
}
