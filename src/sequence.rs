//! Core trait for push-driven sequences.
//!
//! This module defines the [`Sequence`] trait, the fundamental building block of
//! this library. A [`Sequence`] is a cheap, immutable descriptor of a (possibly
//! infinite) stream of values that does work only when driven.
//!
//! # The Sequence Trait
//!
//! [`Sequence`] represents a producer that:
//! - Pushes its elements, in order, into a consumer callback
//! - Stops as soon as the consumer answers `false`
//! - Replays from the beginning every time it is driven
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = count(0_u32, 1).filter(|x| x % 2 == 0).take(3);
//! assert_eq!(evens.to_vec(), vec![0, 2, 4]);
//! // Driving again starts over.
//! assert_eq!(evens.to_vec(), vec![0, 2, 4]);
//! ```

use std::sync::Arc;

use either::Either;

use crate::{
    compose::{
        Chain, Cycle, Enumerate, Filter, Map, PairUp, Skip, SkipWhile, Take, TakeWhile, chain,
        cycle, enumerate, filter, map, pair_up, skip, skip_while, take, take_while,
    },
    concurrent::{Zip, zip},
    consume,
};

/// A lazy, restartable producer of values.
///
/// `drive` invokes `consumer` once per element until the sequence is exhausted
/// or the consumer returns `false`. Because `drive` only borrows the
/// descriptor, driving twice replays the same elements.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seen = Vec::new();
/// values(vec![1, 2, 3]).drive(&mut |x| {
///     seen.push(x);
///     x < 2
/// });
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub trait Sequence {
    /// Type of the elements pushed to the consumer.
    type Item;

    /// Push elements into `consumer` until it returns `false` or the sequence ends.
    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool);

    /// Borrow this sequence so adapters can be built without consuming it.
    fn by_ref(&self) -> &Self
    where
        Self: Sized,
    {
        self
    }

    /// Erase the concrete type so different sequences can share a container.
    fn boxed(self) -> Box<dyn Sequence<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Apply `f` to every element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        map(f, self)
    }

    /// Keep only the elements matching `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        filter(pred, self)
    }

    /// Emit every element of `self`, then every element of `next`.
    fn chain<R>(self, next: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
    {
        chain(self, next)
    }

    /// Emit at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(n, self)
    }

    /// Emit leading elements while `pred` holds.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        take_while(pred, self)
    }

    /// Skip the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        skip(n, self)
    }

    /// Skip leading elements while `pred` holds.
    fn skip_while<P>(self, pred: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        skip_while(pred, self)
    }

    /// Replay this sequence forever.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        cycle(self)
    }

    /// Pair every element with its 0-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        enumerate(self)
    }

    /// Pair elements positionally with `other`, stopping at the shorter side.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized + Sync,
        B: Sequence + Sync,
        Self::Item: Send,
        B::Item: Send,
    {
        zip(self, other)
    }

    /// Turn a sequence of tuples into a sequence of [`Pair`](crate::Pair)s.
    fn pair_up<F, S>(self) -> PairUp<Self>
    where
        Self: Sized + Sequence<Item = (F, S)>,
    {
        pair_up(self)
    }

    /// Element at 0-based `index`, or `None` if the sequence is shorter.
    fn at(&self, index: usize) -> Option<Self::Item> {
        consume::at(index, self)
    }

    /// First element, or `None` for an empty sequence.
    fn first(&self) -> Option<Self::Item> {
        consume::first(self)
    }

    /// Collect every element. Never returns for an infinite sequence.
    fn to_vec(&self) -> Vec<Self::Item> {
        consume::to_vec(self)
    }

    /// Number of elements. Never returns for an infinite sequence.
    fn count_elements(&self) -> usize {
        consume::count_elements(self)
    }

    /// Call `f` on every element.
    fn for_each<F>(&self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        consume::for_each(self, f)
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).drive(consumer)
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).drive(consumer)
    }
}

impl<S> Sequence for Arc<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).drive(consumer)
    }
}

/// `None` is the empty sequence.
impl<S> Sequence for Option<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        if let Some(s) = self {
            s.drive(consumer)
        }
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        match self {
            Either::Left(l) => l.drive(consumer),
            Either::Right(r) => r.drive(consumer),
        }
    }
}
