//! Functions for driving sequences to a result.
//!
//! These are the terminal operations: they drive a sequence and hand back
//! plain values. Lookups report "not found" as `None`, never as a failure.

use crate::Sequence;

/// Return the element at 0-based `index`, or `None` if `seq` is shorter.
///
/// Drives `seq` only as far as `index`; a short finite sequence is consumed
/// completely before reporting `None`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(at(2, &count(10, 5)), Some(20));
/// assert_eq!(at(3, &values([1, 2])), None);
/// ```
pub fn at<S>(index: usize, seq: &S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    let mut found = None;
    let mut position = 0;
    seq.drive(&mut |x| {
        if found.is_some() {
            return false;
        }
        if position == index {
            found = Some(x);
            return false;
        }
        position += 1;
        true
    });
    found
}

/// Return the first element of `seq`, consuming at most one element.
pub fn first<S>(seq: &S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    at(0, seq)
}

/// Collect every element of `seq`. Never returns for an infinite sequence.
pub fn to_vec<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
{
    let mut out = Vec::new();
    seq.drive(&mut |x| {
        out.push(x);
        true
    });
    out
}

/// Number of elements in `seq`. Never returns for an infinite sequence.
pub fn count_elements<S>(seq: &S) -> usize
where
    S: Sequence + ?Sized,
{
    let mut n = 0;
    seq.drive(&mut |_| {
        n += 1;
        true
    });
    n
}

/// Call `f` on every element of `seq`.
pub fn for_each<S, F>(seq: &S, mut f: F)
where
    S: Sequence + ?Sized,
    F: FnMut(S::Item),
{
    seq.drive(&mut |x| {
        f(x);
        true
    });
}
