use crate::Sequence;

/// Replays an owned list of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Values<T>(Vec<T>);

impl<T: Clone> Sequence for Values<T> {
    type Item = T;

    fn drive(&self, consumer: &mut dyn FnMut(T) -> bool) {
        for value in &self.0 {
            if !consumer(value.clone()) {
                return;
            }
        }
    }
}

/// Create a sequence over a copy of `items`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let notes = values(["do", "re", "mi"]);
/// assert_eq!(notes.at(2), Some("mi"));
/// ```
pub fn values<T, I>(items: I) -> Values<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    Values(items.into_iter().collect())
}

/// Replays any cloneable iterable, such as a range.
#[derive(Debug, Clone)]
pub struct FromIter<I>(I);

impl<I> Sequence for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn drive(&self, consumer: &mut dyn FnMut(I::Item) -> bool) {
        for value in self.0.clone() {
            if !consumer(value) {
                return;
            }
        }
    }
}

/// Create a sequence that re-iterates `iterable` on every drive.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let digits = from_iter(0..10);
/// assert_eq!(digits.skip(7).to_vec(), vec![7, 8, 9]);
/// ```
pub fn from_iter<I>(iterable: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter(iterable)
}
