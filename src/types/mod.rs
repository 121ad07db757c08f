//! The combined error type and its backing storage.
//!
//! # Examples
//!
//! ```
//! use error_defer::CombinedError;
//!
//! let mut combined = CombinedError::new("primary failure");
//! combined.suppress("another failure");
//!
//! assert_eq!(combined.len(), 2);
//! assert_eq!(combined.to_string(), "primary failure (1 suppressed)");
//! ```
use smallvec::SmallVec;

pub mod combined_error;

pub use combined_error::*;

/// SmallVec-backed collection used for the suppressed-cause list.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case where a batch produces only a few failures.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias for a batch outcome: clean success, or one [`CombinedError`]
/// carrying every failure that occurred.
///
/// # Type Parameters
///
/// * `E` - The tracked error type
pub type TrackResult<E> = Result<(), CombinedError<E>>;
