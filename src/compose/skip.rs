use crate::{Latch, Sequence};

/// Skips the first `n` elements of the wrapped sequence.
pub struct Skip<S> {
    n: usize,
    seq: S,
}

/// Create a sequence of everything in `seq` after its first `n` elements.
///
/// With `n == 0` the wrapped sequence is driven directly.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(skip(2, values([1, 2, 3, 4])).to_vec(), vec![3, 4]);
/// ```
pub fn skip<S: Sequence>(n: usize, seq: S) -> Skip<S> {
    Skip { n, seq }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(S::Item) -> bool) {
        if self.n == 0 {
            return self.seq.drive(consumer);
        }
        let mut latch = Latch::new(consumer);
        let mut skipped = 0;
        self.seq.drive(&mut |x| {
            if skipped < self.n {
                skipped += 1;
                return latch.is_open();
            }
            latch.push(x)
        });
    }
}

/// Skips leading elements while a predicate holds.
pub struct SkipWhile<S, P> {
    pred: P,
    seq: S,
}

/// Create a sequence that drops the leading elements of `seq` satisfying `pred`.
///
/// Once `pred` fails, every later element is emitted, whether or not it
/// satisfies `pred`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let rest = skip_while(|x: &i32| *x < 13, values([10, 13, 16, 1, 2, 3]));
/// assert_eq!(rest.to_vec(), vec![13, 16, 1, 2, 3]);
/// ```
pub fn skip_while<S, P>(pred: P, seq: S) -> SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    SkipWhile { pred, seq }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(S::Item) -> bool) {
        let mut latch = Latch::new(consumer);
        let mut skipping = true;
        self.seq.drive(&mut |x| {
            if !latch.is_open() {
                return false;
            }
            if skipping && (self.pred)(&x) {
                return true;
            }
            skipping = false;
            latch.push(x)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count, values};
    use crate::compose::take;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_skip() {
        let seq = count(10, 1);
        assert_eq!(take(2, skip(3, &seq)).to_vec(), vec![13, 14]);
        assert_eq!(skip(5, values([1, 2])).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_skip_zero_is_unchanged() {
        let seq = values(["a", "b"]);
        assert_eq!(skip(0, &seq).to_vec(), seq.to_vec());
    }

    #[test]
    fn test_skip_while_never_reenters_dropping() {
        let seq = values([10, 13, 16, 1, 2, 3]);
        assert_eq!(
            skip_while(|x: &i32| *x < 13, &seq).to_vec(),
            vec![13, 16, 1, 2, 3]
        );
    }

    #[test]
    fn test_skip_while_all_match_is_empty() {
        let seq = values([1, 2, 3]);
        assert!(skip_while(|_: &i32| true, &seq).to_vec().is_empty());
    }

    #[test]
    fn test_skip_while_stops_consulting_pred() {
        let checks = Cell::new(0);
        let rest = skip_while(
            |x: &i32| {
                checks.set(checks.get() + 1);
                *x < 2
            },
            values([0, 1, 2, 0, 1]),
        );
        assert_eq!(rest.to_vec(), vec![2, 0, 1]);
        assert_eq!(checks.get(), 3);
    }

    proptest! {
        #[test]
        fn test_take_then_skip_partitions(
            items in prop::collection::vec(any::<i32>(), 0..20),
            n in 0_usize..25,
        ) {
            let seq = values(items.clone());
            let mut joined = take(n, &seq).to_vec();
            joined.extend(skip(n, &seq).to_vec());
            prop_assert_eq!(joined, items);
        }

        #[test]
        fn test_skip_while_resumes_permanently(
            items in prop::collection::vec(0_u8..10, 0..20),
            limit in 0_u8..10,
        ) {
            let rest = skip_while(|x: &u8| *x < limit, values(items.clone())).to_vec();
            let expected: Vec<u8> = items.into_iter().skip_while(|x| *x < limit).collect();
            prop_assert_eq!(rest, expected);
        }
    }
}
