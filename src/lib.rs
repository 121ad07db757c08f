//! Defer errors instead of failing fast: run a batch of independent fallible
//! steps, collect every failure, and surface them at the end as one combined
//! error (the first failure, with the rest attached as suppressed causes).
//!
//! The core type is [`Tracker`]. It never drops or reorders a failure, and it
//! never interrupts the caller's control flow until the caller asks for the
//! outcome.
//!
//! # Examples
//!
//! ## Recording failures directly
//!
//! ```
//! use error_defer::Tracker;
//!
//! let mut tracker = Tracker::new();
//! tracker.record("disk full");
//! tracker.record("socket closed");
//!
//! let combined = tracker.into_result().unwrap_err();
//! assert_eq!(*combined.primary(), "disk full");
//! assert_eq!(combined.suppressed(), ["socket closed"]);
//! ```
//!
//! ## Running fallible work through the tracker
//!
//! ```
//! use error_defer::Tracker;
//!
//! let mut tracker = Tracker::new();
//! tracker.run_catching(|| Err::<(), _>("first"));
//! tracker.run_catching(|| Ok::<_, &str>(()));
//! tracker.run_catching(|| Err::<(), _>("second"));
//!
//! let combined = tracker.resolve_if_necessary().unwrap_err();
//! assert_eq!(*combined.primary(), "first");
//! assert_eq!(combined.suppressed(), ["second"]);
//! ```
//!
//! ## Typical shape: closing many resources
//!
//! ```
//! use error_defer::{TrackResult, Tracker};
//!
//! fn close(name: &'static str) -> Result<(), &'static str> {
//!     if name == "flaky" { Err("close failed") } else { Ok(()) }
//! }
//!
//! fn close_all() -> TrackResult<&'static str> {
//!     let mut tracker = Tracker::new();
//!     for name in ["a", "flaky", "b"] {
//!         tracker.run_catching(|| close(name));
//!     }
//!     tracker.into_result()
//! }
//!
//! assert!(close_all().is_err());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Deferral macros for running blocks through a tracker
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for feeding `Result`s into a tracker
pub mod traits;
/// The error tracker and its synchronized variant
pub mod tracker;
/// The combined error type and storage aliases
pub mod types;

pub use traits::DeferExt;
#[cfg(feature = "std")]
pub use tracker::SharedTracker;
pub use tracker::Tracker;
pub use types::{CombinedError, ErrorVec, TrackResult};
