use num::traits::WrappingAdd;

use crate::Sequence;

/// Infinite arithmetic progression. Wraps around on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count<T> {
    start: T,
    step: T,
}

impl<T> Sequence for Count<T>
where
    T: WrappingAdd + Clone,
{
    type Item = T;

    fn drive(&self, consumer: &mut dyn FnMut(T) -> bool) {
        let mut current = self.start.clone();
        loop {
            let next = current.wrapping_add(&self.step);
            if !consumer(current) {
                return;
            }
            current = next;
        }
    }
}

/// Count up from `start` by `step` forever.
///
/// Each call returns a fresh descriptor; there is no shared counter.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(count(3, 5).take(4).to_vec(), vec![3, 8, 13, 18]);
/// assert_eq!(count(254_u8, 1).take(3).to_vec(), vec![254, 255, 0]);
/// ```
pub fn count<T>(start: T, step: T) -> Count<T>
where
    T: WrappingAdd + Clone,
{
    Count { start, step }
}

/// Repeats a fixed list of values forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleValues<T>(Vec<T>);

impl<T: Clone> Sequence for CycleValues<T> {
    type Item = T;

    fn drive(&self, consumer: &mut dyn FnMut(T) -> bool) {
        // an empty list is an empty sequence, not a busy loop
        if self.0.is_empty() {
            return;
        }
        loop {
            for value in &self.0 {
                if !consumer(value.clone()) {
                    return;
                }
            }
        }
    }
}

/// Repeat `items` in order, forever. An empty list yields an empty sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(cycle_values([1, 2]).take(5).to_vec(), vec![1, 2, 1, 2, 1]);
/// assert!(cycle_values(Vec::<i32>::new()).to_vec().is_empty());
/// ```
pub fn cycle_values<T, I>(items: I) -> CycleValues<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    CycleValues(items.into_iter().collect())
}
