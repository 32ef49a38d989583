//! Test utilities for node graph lookups.
//!
//! This crate provides fixture graphs, store wrappers that count or fail
//! calls, and helpers for writing snapshot files used by CLI tests.

pub mod counting;
pub mod failing;
pub mod fixtures;
pub mod snapshot;

pub use counting::{CallCounts, CountingStore};
pub use failing::{FailingStore, InjectedError};
pub use snapshot::write_snapshot;
