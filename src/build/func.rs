use std::marker::PhantomData;

use crate::Sequence;

/// A sequence whose driver is a closure.
pub struct FromFn<T, F> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

impl<T, F> Sequence for FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    fn drive(&self, consumer: &mut dyn FnMut(T) -> bool) {
        (self.f)(consumer)
    }
}

/// Create a sequence from a closure that pushes values into a consumer.
///
/// The closure is called once per drive. It should stop as soon as the
/// consumer returns `false`; combinators tolerate closures that do not.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares = from_fn(|consumer| {
///     for i in 1_u64.. {
///         if !consumer(i * i) {
///             return;
///         }
///     }
/// });
/// assert_eq!(squares.take(4).to_vec(), vec![1, 4, 9, 16]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

/// Sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn drive(&self, _consumer: &mut dyn FnMut(T) -> bool) {}
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

/// Create a sequence that never calls its consumer.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

/// Emits a single value, then completes.
#[derive(Debug, Clone)]
pub struct Once<T>(T);

impl<T: Clone> Sequence for Once<T> {
    type Item = T;

    fn drive(&self, consumer: &mut dyn FnMut(T) -> bool) {
        consumer(self.0.clone());
    }
}

/// Create a sequence of exactly one element.
pub fn once<T: Clone>(value: T) -> Once<T> {
    Once(value)
}
