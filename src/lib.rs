//! # lazyseq: Lazy Push-Sequence Combinators
//!
//! Build pipelines over possibly-infinite data sources without materializing
//! intermediate collections.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: A restartable producer that pushes elements into a consumer
//! - **[`PullSource`]**: Step-at-a-time access to a sequence, with an explicit stop
//!
//! ## Key Features
//!
//! - **Composable**: Wrap sequences with `.map()`, `.filter()`, `.take()`, `.chain()`
//! - **Lazy**: No element is produced that the consumer did not ask for
//! - **Zippable**: [`zip`] pairs two independent producers through a scoped
//!   worker thread per side, joined before every drive returns
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! // Two independent producers, one of them infinite
//! let notes = values(["do", "re", "mi"]);
//! let squares = count(1_u32, 1).map(|n| n * n);
//!
//! let pairs = zip(notes, squares).to_vec();
//! assert_eq!(pairs, vec![("do", 1), ("re", 4), ("mi", 9)]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`values(items)`](values) - Replay a list
//! - [`count(start, step)`](count) - Arithmetic progression, forever
//! - [`cycle_values(items)`](cycle_values) - Repeat a list, forever
//! - [`from_fn(f)`](from_fn) - Sequence driven by a closure
//!
//! **Composition:**
//! - [`chain(a, b)`](chain) / [`chain_all(seqs)`](chain_all) - One after another
//! - [`take`], [`take_while`], [`skip`], [`skip_while`] - Bounding
//! - [`zip(a, b)`](zip) - Positional pairs, ends with the shorter side
//!
//! **Consumption:**
//! - [`at(i, seq)`](at), [`first(seq)`](first) - Lookups returning `Option`
//! - [`pull(seq, f)`](pull) - External iteration on a scoped worker

mod build;
mod compose;
mod concurrent;
mod consume;
mod error;
mod latch;
pub mod prelude;
mod sequence;
#[cfg(test)]
mod testing;

pub use build::*;
pub use compose::*;
pub use concurrent::*;
pub use consume::*;
pub use error::*;
pub use latch::*;
pub use sequence::*;
