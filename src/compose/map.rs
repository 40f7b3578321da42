//! Transforming and filtering elements.
//!
//! This module provides the [`Map`] and [`Filter`] combinators.

use crate::{Latch, Sequence};

/// Applies a function to every element of the wrapped sequence.
///
/// The function runs lazily, once per element that is actually delivered.
pub struct Map<S, F> {
    f: F,
    seq: S,
}

/// Create a sequence that emits `f(x)` for each `x` in `seq`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let lengths = map(|s: &str| s.len(), values(["four", "fives", "sixsix"]));
/// assert_eq!(lengths.to_vec(), vec![4, 5, 6]);
/// ```
pub fn map<S, F, U>(f: F, seq: S) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    Map { f, seq }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn drive(&self, consumer: &mut dyn FnMut(U) -> bool) {
        let mut latch = Latch::new(consumer);
        self.seq.drive(&mut |x| latch.push_with(|| (self.f)(x)));
    }
}

/// Emits only the elements of the wrapped sequence that satisfy a predicate.
pub struct Filter<S, P> {
    pred: P,
    seq: S,
}

/// Create a sequence of the elements of `seq` for which `pred` holds.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let odd = filter(|x: &i32| x % 2 == 1, values([3, 4, 5, 6]));
/// assert_eq!(odd.to_vec(), vec![3, 5]);
/// ```
pub fn filter<S, P>(pred: P, seq: S) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Filter { pred, seq }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(S::Item) -> bool) {
        let mut latch = Latch::new(consumer);
        self.seq.drive(&mut |x| {
            if !latch.is_open() {
                return false;
            }
            if (self.pred)(&x) { latch.push(x) } else { true }
        });
    }
}
