use either::Either;

use crate::{Latch, Sequence};

/// Emit every element of `l`, then every element of `r`.
///
/// Both sequences must yield the same item type.
pub fn chain<L, R>(l: L, r: R) -> Chain<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    Chain(l, r)
}

/// Chains two sequences back to back.
///
/// Created via `chain()` or [`Sequence::chain`]. The second sequence is never
/// driven once the consumer has stopped.
pub struct Chain<S1, S2>(S1, S2);

impl<L, R> Sequence for Chain<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        let mut latch = Latch::new(consumer);
        self.0.drive(&mut |x| latch.push(x));
        if latch.is_open() {
            self.1.drive(&mut |x| latch.push(x));
        }
    }
}

/// Chains any number of sequences of the same type.
pub struct ChainAll<S>(Vec<S>);

impl<S> Sequence for ChainAll<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        let mut latch = Latch::new(consumer);
        for seq in &self.0 {
            seq.drive(&mut |x| latch.push(x));
            if !latch.is_open() {
                return;
            }
        }
    }
}

/// Emit all of the first sequence, then all of the second, and so on.
///
/// Zero sequences give an empty [`ChainAll`]; exactly one sequence is
/// returned as-is in `Left`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined = chain_all([values([1, 2]), values([3]), values([])]);
/// assert_eq!(joined.to_vec(), vec![1, 2, 3]);
/// assert!(chain_all([values([7])]).is_left());
/// ```
pub fn chain_all<S, I>(seqs: I) -> Either<S, ChainAll<S>>
where
    S: Sequence,
    I: IntoIterator<Item = S>,
{
    let mut seqs: Vec<S> = seqs.into_iter().collect();
    if seqs.len() == 1 {
        if let Some(only) = seqs.pop() {
            return Either::Left(only);
        }
    }
    Either::Right(ChainAll(seqs))
}
