use crate::{Latch, Sequence};

/// Emits at most `n` elements of the wrapped sequence.
pub struct Take<S> {
    n: usize,
    seq: S,
}

/// Create a sequence of the first `n` elements of `seq`.
///
/// Upstream is not driven at all when `n` is zero, and is told to stop right
/// after the `n`th element even if the consumer wants more.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(take(3, count(10, 1)).to_vec(), vec![10, 11, 12]);
/// ```
pub fn take<S: Sequence>(n: usize, seq: S) -> Take<S> {
    Take { n, seq }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(S::Item) -> bool) {
        if self.n == 0 {
            return;
        }
        let mut latch = Latch::new(consumer);
        let mut remaining = self.n;
        self.seq.drive(&mut |x| {
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            latch.push(x) && remaining > 0
        });
    }
}

/// Emits leading elements while a predicate holds.
pub struct TakeWhile<S, P> {
    pred: P,
    seq: S,
}

/// Create a sequence of the leading elements of `seq` satisfying `pred`.
///
/// The first failing element is not emitted and ends the sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let small = take_while(|x: &i32| *x < 4, cycle_values([1, 2, 3, 4, 5]));
/// assert_eq!(small.to_vec(), vec![1, 2, 3]);
/// ```
pub fn take_while<S, P>(pred: P, seq: S) -> TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    TakeWhile { pred, seq }
}

impl<S, P> Sequence for TakeWhile<S, P>
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
            if (self.pred)(&x) {
                latch.push(x)
            } else {
                latch.close();
                false
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count, from_fn, values};
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_take() {
        let seq = count(10, 1);
        assert!(take(0, &seq).to_vec().is_empty());
        assert_eq!(take(1, &seq).to_vec(), vec![10]);
        let take_seq = take(3, &seq);
        assert_eq!(take_seq.to_vec(), vec![10, 11, 12]);
        assert_eq!(take_seq.first(), Some(10));
    }

    #[test]
    fn test_take_finite() {
        let seq = values(["abc", "123", "foo"]);
        let take_seq = take(4, &seq);
        assert_eq!(take_seq.to_vec(), vec!["abc", "123", "foo"]);
        assert_eq!(take_seq.first(), Some("abc"));
    }

    #[test]
    fn test_take_zero_never_drives_upstream() {
        let drives = Cell::new(0);
        let seq = from_fn(|consumer| {
            drives.set(drives.get() + 1);
            consumer(1);
        });
        assert!(take(0, &seq).to_vec().is_empty());
        assert_eq!(drives.get(), 0);
    }

    #[test]
    fn test_take_stops_pulling_after_n() {
        let produced = Cell::new(0);
        let seq = from_fn(|consumer| {
            for i in 0.. {
                produced.set(produced.get() + 1);
                if !consumer(i) {
                    return;
                }
            }
        });
        let mut seen = Vec::new();
        take(2, &seq).drive(&mut |x| {
            seen.push(x);
            true
        });
        assert_eq!(seen, vec![0, 1]);
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn test_take_caps_misbehaving_upstream() {
        let stubborn = from_fn(|consumer| {
            for i in 0..10 {
                consumer(i);
            }
        });
        assert_eq!(take(3, &stubborn).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_take_while() {
        let seq = count(10, 1);
        assert!(take_while(|x: &i32| *x < 10, &seq).to_vec().is_empty());
        let take_seq = take_while(|x: &i32| *x < 15, &seq);
        assert_eq!(take_seq.to_vec(), vec![10, 11, 12, 13, 14]);
        assert_eq!(take_seq.first(), Some(10));
    }

    #[test]
    fn test_take_while_finite() {
        let seq = values(["abc", "123", "foo"]);
        let take_seq = take_while(|s: &&str| s.len() < 4, &seq);
        assert_eq!(take_seq.to_vec(), vec!["abc", "123", "foo"]);
        assert_eq!(take_seq.first(), Some("abc"));
    }

    #[test]
    fn test_take_while_does_not_resume() {
        let seq = values([1, 2, 9, 1, 2]);
        assert_eq!(seq.take_while(|x| *x < 5).to_vec(), vec![1, 2]);
    }

    proptest! {
        #[test]
        fn test_take_past_end_yields_everything(
            items in prop::collection::vec(any::<i32>(), 0..20),
            extra in 0_usize..5,
        ) {
            let seq = values(items.clone());
            prop_assert_eq!(take(items.len() + extra, &seq).to_vec(), items);
        }

        #[test]
        fn test_take_while_never_emits_failing_element(
            items in prop::collection::vec(0_u8..10, 0..20),
            limit in 0_u8..10,
        ) {
            let taken = take_while(|x: &u8| *x < limit, values(items.clone())).to_vec();
            let expected: Vec<u8> = items.into_iter().take_while(|x| *x < limit).collect();
            prop_assert_eq!(taken, expected);
        }
    }
}
