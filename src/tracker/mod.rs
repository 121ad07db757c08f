//! Failure accumulation for batches of independent operations.
//!
//! [`Tracker`] is the single-threaded accumulator; [`SharedTracker`] wraps it
//! in a lock for callers that must record from several threads (requires the
//! `std` feature).

pub mod core;
#[cfg(feature = "std")]
pub mod shared;

pub use self::core::Tracker;
#[cfg(feature = "std")]
pub use self::shared::SharedTracker;
