use crate::{Latch, Sequence};

/// Immutable record of two heterogeneous values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<F, S> {
    pub first: F,
    pub second: S,
}

impl<F, S> Pair<F, S> {
    /// Create a pair from its two parts.
    pub fn new(first: F, second: S) -> Self {
        Self { first, second }
    }

    /// Split the pair back into a tuple.
    pub fn into_tuple(self) -> (F, S) {
        (self.first, self.second)
    }
}

impl<F, S> From<(F, S)> for Pair<F, S> {
    fn from((first, second): (F, S)) -> Self {
        Self { first, second }
    }
}

impl<F, S> From<Pair<F, S>> for (F, S) {
    fn from(pair: Pair<F, S>) -> Self {
        pair.into_tuple()
    }
}

/// Pairs each element with its 0-based position.
pub struct Enumerate<S> {
    seq: S,
}

/// Create a sequence of `(index, element)` tuples.
///
/// Equivalent to zipping `count(0, 1)` with `seq`, without the worker threads.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let notes = enumerate(values(["do", "re", "mi"]));
/// assert_eq!(notes.to_vec(), vec![(0, "do"), (1, "re"), (2, "mi")]);
/// ```
pub fn enumerate<S: Sequence>(seq: S) -> Enumerate<S> {
    Enumerate { seq }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        let mut latch = Latch::new(consumer);
        let mut index = 0;
        self.seq.drive(&mut |x| {
            let open = latch.push((index, x));
            index += 1;
            open
        });
    }
}

/// Converts a sequence of tuples into a sequence of [`Pair`]s.
pub struct PairUp<S> {
    seq: S,
}

/// Create a sequence of [`Pair`] records from a two-valued sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = pair_up(values([(1, "one"), (2, "two")]));
/// assert_eq!(pairs.first(), Some(Pair::new(1, "one")));
/// ```
pub fn pair_up<S, A, B>(seq: S) -> PairUp<S>
where
    S: Sequence<Item = (A, B)>,
{
    PairUp { seq }
}

impl<S, A, B> Sequence for PairUp<S>
where
    S: Sequence<Item = (A, B)>,
{
    type Item = Pair<A, B>;

    fn drive(&self, consumer: &mut dyn FnMut(Pair<A, B>) -> bool) {
        let mut latch = Latch::new(consumer);
        self.seq.drive(&mut |x| latch.push(Pair::from(x)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count, values};
    use crate::compose::take;

    #[test]
    fn test_enumerate_notes() {
        let notes = enumerate(values(["do", "re", "mi"]));
        assert_eq!(notes.to_vec(), vec![(0, "do"), (1, "re"), (2, "mi")]);
    }

    #[test]
    fn test_enumerate_restarts_index() {
        let seq = enumerate(count(100_u16, 100));
        assert_eq!(take(2, &seq).to_vec(), vec![(0, 100), (1, 200)]);
        assert_eq!(seq.first(), Some((0, 100)));
    }

    #[test]
    fn test_pair_up_products() {
        let pairs = pair_up(values([(1, "four"), (2, "fives"), (3, "sixsix")]));
        let first = pairs.first().map(|p| p.first * p.second.len());
        assert_eq!(first, Some(4));
        let mut z = Vec::new();
        pairs.for_each(|p| z.push(p.first * p.second.len()));
        assert_eq!(z, vec![4, 10, 18]);
    }

    #[test]
    fn test_pair_tuple_conversions() {
        let pair = Pair::from(('x', 2));
        assert_eq!(pair, Pair::new('x', 2));
        let (c, n): (char, i32) = pair.into();
        assert_eq!((c, n), ('x', 2));
    }
}
