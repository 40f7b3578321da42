//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Pair, PullSource, Sequence};

// Sources
pub use crate::build::{count, cycle_values, empty, from_fn, from_iter, once, values};

// Composition
pub use crate::compose::{
    chain, chain_all, cycle, enumerate, filter, map, pair_up, skip, skip_while, take, take_while,
};

// Concurrency
pub use crate::concurrent::{BridgeConfig, pull, pull_with, zip};

// Consumption
pub use crate::consume::{at, count_elements, first};
