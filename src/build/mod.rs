//! Building sequences from scratch
//!
//! This module provides the source sequences that pipelines start from.

mod func;
mod repeat;
mod values;

// Re-export building blocks
pub use func::{Empty, FromFn, Once, empty, from_fn, once};
pub use repeat::{Count, CycleValues, count, cycle_values};
pub use values::{FromIter, Values, from_iter, values};
