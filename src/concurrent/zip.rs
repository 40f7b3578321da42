use std::panic;

use crate::{
    Error, Latch, Sequence, Side,
    concurrent::bridge::{BridgeConfig, PullSource, ThreadBridge, scoped},
};

/// Pairs the elements of two sequences positionally.
///
/// Each drive opens a fresh [`ThreadBridge`] per side, so both producers run
/// on their own scoped worker while the driving thread alternates between
/// them. Both workers are stopped and joined before the drive returns, on
/// every exit path.
pub struct Zip<A, B> {
    first: A,
    second: B,
    config: BridgeConfig,
}

/// Create a sequence of `(a, b)` tuples that ends with the shorter input.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let notes = values(["do", "re", "mi", "fa", "so"]);
/// let ordinals = chain(values([1, 2, 3]), cycle_values([0]));
/// assert_eq!(
///     zip(notes, ordinals).to_vec(),
///     vec![("do", 1), ("re", 2), ("mi", 3), ("fa", 0), ("so", 0)],
/// );
/// ```
pub fn zip<A, B>(first: A, second: B) -> Zip<A, B>
where
    A: Sequence + Sync,
    B: Sequence + Sync,
    A::Item: Send,
    B::Item: Send,
{
    Zip {
        first,
        second,
        config: BridgeConfig::default(),
    }
}

impl<A, B> Zip<A, B> {
    /// Use `config` for the worker threads of every later drive.
    pub fn with_config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Worker settings used by every drive.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}

impl<A, B> Zip<A, B>
where
    A: Sequence + Sync,
    B: Sequence + Sync,
    A::Item: Send,
    B::Item: Send,
{
    /// Drive the zip, reporting worker failures as values instead of panics.
    pub fn try_drive(
        &self,
        consumer: &mut dyn FnMut((A::Item, B::Item)) -> bool,
    ) -> Result<(), Error> {
        scoped(|scope| {
            let mut first = ThreadBridge::spawn(scope, &self.first, Side::First, &self.config)?;
            let mut second = ThreadBridge::spawn(scope, &self.second, Side::Second, &self.config)?;
            let mut latch = Latch::new(consumer);
            loop {
                // ask both sides every round, even when the first is already done
                let a = first.next();
                let b = second.next();
                let (Some(a), Some(b)) = (a, b) else {
                    break;
                };
                if !latch.push((a, b)) {
                    break;
                }
            }
            let first_stopped = first.stop();
            let second_stopped = second.stop();
            first_stopped.and(second_stopped)
        })
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence + Sync,
    B: Sequence + Sync,
    A::Item: Send,
    B::Item: Send,
{
    type Item = (A::Item, B::Item);

    /// # Panics
    ///
    /// Re-raises a panic from either producer on the driving thread, and
    /// panics if a worker thread cannot be spawned. Use [`Zip::try_drive`] to
    /// observe these as [`Error`]s.
    fn drive(&self, consumer: &mut dyn FnMut(Self::Item) -> bool) {
        if let Err(err) = self.try_drive(consumer) {
            match err {
                Error::ProducerPanicked { payload, .. } => panic::resume_unwind(payload),
                err => panic!("{err}"),
            }
        }
    }
}
