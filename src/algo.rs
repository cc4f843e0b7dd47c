//! Eager sequence algorithms over slices with caller-provided buffers,
//! plus a generic traversal routine.
//!
//! The `*_into` functions mirror output-iterator style APIs: the caller
//! allocates the destination up front and the algorithm reports how much of
//! it holds valid output. A destination that cannot hold the worst-case
//! output is a contract violation, not a domain error.

use std::fmt::Display;

use itertools::zip_eq;
use thiserror::Error;

/// The destination buffer cannot hold the required number of elements.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("destination holds {dst} elements but {needed} are required")]
pub struct SizeMismatch {
    pub needed: usize,
    pub dst: usize,
}

fn check_capacity(needed: usize, dst: usize) -> Result<(), SizeMismatch> {
    if dst < needed {
        return Err(SizeMismatch { needed, dst });
    }
    Ok(())
}

/// Writes `f(src[i])` into `dst[i]` for every index of `src`.
/// `dst` must hold at least `src.len()` elements.
pub fn map_into<T, U>(
    src: &[T],
    dst: &mut [U],
    f: impl Fn(&T) -> U,
) -> Result<(), SizeMismatch> {
    check_capacity(src.len(), dst.len())?;
    for (slot, item) in dst.iter_mut().zip(src) {
        *slot = f(item);
    }
    Ok(())
}

/// Combines `a` and `b` element-wise into `dst`.
/// `a` and `b` must have equal lengths; `dst` must hold at least that many
/// elements.
pub fn combine_into<T, U, V>(
    a: &[T],
    b: &[U],
    dst: &mut [V],
    f: impl Fn(&T, &U) -> V,
) -> Result<(), SizeMismatch> {
    check_capacity(a.len(), dst.len())?;
    // zip_eq panics if the inputs disagree on length.
    for (slot, (x, y)) in dst.iter_mut().zip(zip_eq(a, b)) {
        *slot = f(x, y);
    }
    Ok(())
}

/// Copies the elements of `src` satisfying `pred` into the front of `dst`,
/// preserving relative order, and returns how many were written. Elements of
/// `dst` past the returned count are left as they were.
pub fn copy_if_into<T: Clone>(
    src: &[T],
    dst: &mut [T],
    pred: impl Fn(&T) -> bool,
) -> Result<usize, SizeMismatch> {
    check_capacity(src.len(), dst.len())?;
    let mut written = 0;
    for item in src {
        if pred(item) {
            dst[written] = item.clone();
            written += 1;
        }
    }
    Ok(written)
}

/// Left-associative reduction: `combine(combine(combine(init, a0), a1), a2)`
/// and so on through the sequence.
pub fn fold_left<T, A>(items: &[T], init: A, mut combine: impl FnMut(A, &T) -> A) -> A {
    let mut acc = init;
    for item in items {
        acc = combine(acc, item);
    }
    acc
}

/// Applies `op` to every element in place, through a mutable reference.
pub fn for_each_mut<T>(items: &mut [T], mut op: impl FnMut(&mut T)) {
    for item in items.iter_mut() {
        op(item);
    }
}

/// Prints every element of any iterable, one per line, in traversal order.
/// Works for `Vec`, `VecDeque`, `BTreeSet`, slices, or anything else that
/// can be turned into an iterator.
pub fn print_all<I>(items: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        println!("{}", item);
    }
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn fold_left_matches_sequential_loop(items in prop::collection::vec(-1000i64..1000, 0..50), init in -1000i64..1000) {
            // Subtraction is not commutative, so this pins associativity
            // direction, not just the combined total.
            let folded = fold_left(&items, init, |acc, &x| acc - x);
            let mut expected = init;
            for &x in &items {
                expected -= x;
            }
            prop_assert_eq!(folded, expected);
        }

        #[test]
        fn copy_if_output_is_an_ordered_subsequence(items in prop::collection::vec(-100i32..100, 0..50)) {
            let mut out = vec![0; items.len()];
            let n = copy_if_into(&items, &mut out, |&x| x % 2 == 0).unwrap();
            let kept = &out[..n];
            prop_assert!(kept.iter().all(|&x| x % 2 == 0));
            // Every kept element appears in the input in the same order.
            let mut input = items.iter();
            for wanted in kept {
                prop_assert!(input.any(|x| x == wanted));
            }
        }

        #[test]
        fn map_preserves_length(items in prop::collection::vec(-100i32..100, 0..50)) {
            let mut out = vec![0; items.len()];
            map_into(&items, &mut out, |&x| x * 2).unwrap();
            prop_assert_eq!(out.len(), items.len());
            prop_assert!(out.iter().zip(&items).all(|(&o, &i)| o == i * 2));
        }
    }
}
