//! Driving sequences concurrently
//!
//! This module provides the pull bridge and the [`Zip`] combinator built on it.
//! These are the only parts of the crate that start threads.

mod bridge;
mod zip;

// Re-export concurrent operations
pub use bridge::{BridgeConfig, PullSource, ThreadBridge, pull, pull_with};
pub use zip::{Zip, zip};
