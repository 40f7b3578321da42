//! Combining sequences together
//!
//! This module provides the single-threaded combinators. Each one wraps an
//! upstream sequence and pushes through a [`Latch`](crate::Latch), so a
//! misbehaving upstream can never push past a stop decision.

mod chain;
mod cycle;
mod map;
mod pair;
mod skip;
mod take;

// Re-export composition operations
pub use chain::{Chain, ChainAll, chain, chain_all};
pub use cycle::{Cycle, cycle};
pub use map::{Filter, Map, filter, map};
pub use pair::{Enumerate, Pair, PairUp, enumerate, pair_up};
pub use skip::{Skip, SkipWhile, skip, skip_while};
pub use take::{Take, TakeWhile, take, take_while};
