//! Resumable external iteration over push-driven sequences.
//!
//! A [`Sequence`] controls its own loop, so it cannot be asked for "one value,
//! then pause". [`ThreadBridge`] runs the sequence on a scoped worker thread and
//! forces strict alternation with two zero-capacity channels:
//!
//! - `values`: worker → puller, one element at a time
//! - `permits`: puller → worker, "you may produce the next element"
//!
//! The worker hands over an element and then blocks until it is permitted to
//! continue. Stopping drops both channel ends, so the worker's consumer answers
//! `false` at its next crossing, and then joins the worker.

use std::{iter::FusedIterator, mem, panic};

use crossbeam_channel::{Receiver, Sender, bounded};
use crossbeam_utils::thread::{self, Scope, ScopedJoinHandle};

use crate::{Error, Sequence, Side};

/// Settings for the worker threads behind a pull bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Worker threads are named `{name_prefix}-{side}`.
    pub name_prefix: String,
    /// Stack size for worker threads; platform default when `None`.
    pub stack_size: Option<usize>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            name_prefix: "lazyseq-pull".to_string(),
            stack_size: None,
        }
    }
}

impl BridgeConfig {
    /// Name worker threads `{prefix}-{side}`.
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Deeply recursive producers may need more than the default stack.
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }
}

/// Step-at-a-time access to a sequence.
///
/// [`Iterator::next`] fetches the next element and returns `None` exactly
/// once at exhaustion (and on every call after). `stop` releases everything
/// backing the source; it is idempotent and must be called on every exit path.
pub trait PullSource: Iterator {
    /// Guarantee the producer makes no further progress and release its resources.
    fn stop(&mut self) -> Result<(), Error>;
}

struct Link<T> {
    values: Receiver<T>,
    permits: Sender<()>,
    /// The worker handed over an element and waits for a permit.
    holding: bool,
}

enum BridgeState<'scope, T> {
    Running {
        link: Link<T>,
        worker: ScopedJoinHandle<'scope, ()>,
    },
    Exhausted(ScopedJoinHandle<'scope, ()>),
    Stopped,
}

impl<T> BridgeState<'_, T> {
    fn take(&mut self) -> Self {
        mem::replace(self, BridgeState::Stopped)
    }
}

/// A [`PullSource`] backed by a worker thread on a `crossbeam` scope.
///
/// Dropping the bridge stops it, so unwinding out of a scope never leaves a
/// worker blocked on a channel.
pub struct ThreadBridge<'scope, T> {
    side: Side,
    state: BridgeState<'scope, T>,
}

impl<'scope, T> ThreadBridge<'scope, T> {
    /// Start a worker on `scope` that drives `seq` one element at a time.
    pub fn spawn<'env, S>(
        scope: &'scope Scope<'env>,
        seq: &'env S,
        side: Side,
        config: &BridgeConfig,
    ) -> Result<Self, Error>
    where
        S: Sequence<Item = T> + Sync + ?Sized,
        T: Send + 'env,
    {
        let (value_tx, values) = bounded(0);
        let (permits, permit_rx) = bounded(0);

        let mut builder = scope
            .builder()
            .name(format!("{}-{side}", config.name_prefix));
        if let Some(size) = config.stack_size {
            builder = builder.stack_size(size);
        }
        let worker = builder
            .spawn(move |_| produce(seq, side, value_tx, permit_rx))
            .map_err(|source| Error::Spawn { side, source })?;
        tracing::trace!(%side, "pull worker spawned");

        Ok(Self {
            side,
            state: BridgeState::Running {
                link: Link {
                    values,
                    permits,
                    holding: false,
                },
                worker,
            },
        })
    }

    /// Which input this bridge was opened for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns `true` until the source is exhausted or stopped.
    pub fn is_running(&self) -> bool {
        matches!(self.state, BridgeState::Running { .. })
    }

    fn exhaust(&mut self) {
        self.state = match self.state.take() {
            BridgeState::Running { worker, .. } => {
                tracing::trace!(side = %self.side, "pull source exhausted");
                BridgeState::Exhausted(worker)
            }
            other => other,
        };
    }
}

/// Worker body: drive `seq`, handing each element over and waiting for a permit.
fn produce<S, T>(seq: &S, side: Side, values: Sender<T>, permits: Receiver<()>)
where
    S: Sequence<Item = T> + ?Sized,
{
    let mut open = true;
    seq.drive(&mut |value| {
        if !open {
            tracing::trace!(%side, "discarding value produced after stop");
            return false;
        }
        open = values.send(value).is_ok() && permits.recv().is_ok();
        open
    });
    tracing::trace!(%side, stopped = !open, "producer returned");
}

impl<T> Iterator for ThreadBridge<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let BridgeState::Running { link, .. } = &mut self.state else {
            return None;
        };
        if link.holding {
            link.holding = false;
            // only fails if the worker is gone
            if link.permits.send(()).is_err() {
                self.exhaust();
                return None;
            }
        }
        match link.values.recv() {
            Ok(value) => {
                link.holding = true;
                Some(value)
            }
            Err(_) => {
                self.exhaust();
                None
            }
        }
    }
}

impl<T> FusedIterator for ThreadBridge<'_, T> {}

impl<T> PullSource for ThreadBridge<'_, T> {
    fn stop(&mut self) -> Result<(), Error> {
        let worker = match self.state.take() {
            BridgeState::Running { link, worker } => {
                tracing::debug!(side = %self.side, "stopping pull source before exhaustion");
                drop(link);
                worker
            }
            BridgeState::Exhausted(worker) => worker,
            BridgeState::Stopped => return Ok(()),
        };
        worker.join().map_err(|payload| {
            tracing::warn!(side = %self.side, "producer panicked on its pull worker");
            Error::ProducerPanicked {
                side: self.side,
                payload,
            }
        })
    }
}

impl<T> Drop for ThreadBridge<'_, T> {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            tracing::warn!(%err, "pull source dropped without being stopped");
        }
    }
}

/// Run `f` on a crossbeam scope, re-raising any panic of an unjoined worker.
pub(crate) fn scoped<'env, F, R>(f: F) -> R
where
    F: FnOnce(&Scope<'env>) -> R,
{
    thread::scope(f).unwrap_or_else(|payload| panic::resume_unwind(payload))
}

/// Drive `seq` on a worker thread and hand `f` a pull-style view of it.
///
/// The worker is stopped and joined before `pull` returns, whether or not
/// `f` consumed every element.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let firsts = pull(&count(1, 1), |source| source.take(3).collect::<Vec<_>>()).unwrap();
/// assert_eq!(firsts, vec![1, 2, 3]);
/// ```
pub fn pull<'env, S, R, F>(seq: &'env S, f: F) -> Result<R, Error>
where
    S: Sequence + Sync + ?Sized,
    S::Item: Send + 'env,
    F: FnOnce(&mut ThreadBridge<'_, S::Item>) -> R,
{
    pull_with(seq, &BridgeConfig::default(), f)
}

/// [`pull`] with explicit worker settings.
pub fn pull_with<'env, S, R, F>(seq: &'env S, config: &BridgeConfig, f: F) -> Result<R, Error>
where
    S: Sequence + Sync + ?Sized,
    S::Item: Send + 'env,
    F: FnOnce(&mut ThreadBridge<'_, S::Item>) -> R,
{
    scoped(|scope| {
        let mut source = ThreadBridge::spawn(scope, seq, Side::Source, config)?;
        let output = f(&mut source);
        source.stop()?;
        Ok(output)
    })
}
