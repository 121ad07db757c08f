//! Convenience re-exports: `use error_defer::prelude::*;` brings in the
//! working set for deferring errors.
//!
//! # Examples
//!
//! ```
//! use error_defer::prelude::*;
//!
//! let mut tracker = Tracker::new();
//! tracker.run_catching(|| Err::<(), _>("boom"));
//! assert!(tracker.into_result().is_err());
//! ```

pub use crate::catching;
pub use crate::traits::DeferExt;
#[cfg(feature = "std")]
pub use crate::tracker::SharedTracker;
pub use crate::tracker::Tracker;
pub use crate::types::{CombinedError, ErrorVec, TrackResult};
