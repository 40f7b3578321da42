use crate::{Latch, Sequence};

/// Replays the wrapped sequence forever.
///
/// The first pass is driven from upstream and buffered; later passes replay
/// the buffer. An infinite upstream never finishes its first pass, so the
/// buffer grows for as long as the consumer keeps accepting.
pub struct Cycle<S> {
    seq: S,
}

/// Create a sequence that repeats the elements of `seq` in order, forever.
///
/// If `seq` is empty the result is empty.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let notes = cycle(values(["do", "re"]));
/// assert_eq!(notes.take(5).to_vec(), vec!["do", "re", "do", "re", "do"]);
/// ```
pub fn cycle<S>(seq: S) -> Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    Cycle { seq }
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(S::Item) -> bool) {
        let mut latch = Latch::new(consumer);
        let mut buffer = Vec::new();
        self.seq.drive(&mut |x| {
            if !latch.is_open() {
                return false;
            }
            buffer.push(x.clone());
            latch.push(x)
        });
        if buffer.is_empty() {
            return;
        }
        while latch.is_open() {
            for x in &buffer {
                if !latch.push(x.clone()) {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count, empty, from_fn, values};
    use crate::compose::{chain, take};
    use std::cell::Cell;

    #[test]
    fn test_chain_then_cycle_of_sequence() {
        let seq = take(7, chain(values([1, 3, 5]), cycle(values([2, 4]))));
        assert_eq!(seq.to_vec(), vec![1, 3, 5, 2, 4, 2, 4]);
    }

    #[test]
    fn test_cycle_empty_is_empty() {
        let seq = cycle(empty::<u8>());
        seq.drive(&mut |_| panic!("cycle over nothing produced a value"));
    }

    #[test]
    fn test_cycle_drives_upstream_once_per_drive() {
        let drives = Cell::new(0);
        let upstream = from_fn(|consumer| {
            drives.set(drives.get() + 1);
            let _ = consumer('a') && consumer('b');
        });
        let seq = cycle(&upstream);
        assert_eq!(take(5, &seq).to_vec(), vec!['a', 'b', 'a', 'b', 'a']);
        assert_eq!(drives.get(), 1);
        assert_eq!(take(1, &seq).to_vec(), vec!['a']);
        assert_eq!(drives.get(), 2);
    }

    #[test]
    fn test_cycle_of_infinite_is_the_same_sequence() {
        let seq = cycle(count(0_u32, 1));
        assert_eq!(take(4, &seq).to_vec(), vec![0, 1, 2, 3]);
    }
}
