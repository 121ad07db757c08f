//! Extension trait for deferring the error side of a `Result` into a
//! [`Tracker`].
//!
//! This gives call sites that already have a `Result` in hand the same
//! swallow-and-defer behavior as [`Tracker::run_catching`], without wrapping
//! the work in a closure.
//!
//! # Examples
//!
//! ```
//! use error_defer::{DeferExt, Tracker};
//!
//! let mut tracker = Tracker::new();
//! let value = "7".parse::<i32>().defer(&mut tracker);
//! let missing = "x".parse::<i32>().defer(&mut tracker);
//!
//! assert_eq!(value, Some(7));
//! assert_eq!(missing, None);
//! assert_eq!(tracker.error_count(), 1);
//! ```

use crate::tracker::Tracker;

/// Extension trait that records a `Result`'s error into a [`Tracker`].
///
/// Calling [`defer`](DeferExt::defer) is equivalent to matching on the
/// `Result` and passing the error to [`Tracker::record`] manually: the error
/// never propagates to the caller, the success value comes back as `Some`.
///
/// # Examples
///
/// ```
/// use error_defer::{DeferExt, Tracker};
///
/// fn step(n: i32) -> Result<i32, String> {
///     if n % 2 == 0 { Ok(n) } else { Err(format!("odd: {n}")) }
/// }
///
/// let mut tracker = Tracker::new();
/// let evens: Vec<i32> = (0..4).filter_map(|n| step(n).defer(&mut tracker)).collect();
///
/// assert_eq!(evens, [0, 2]);
/// let combined = tracker.into_result().unwrap_err();
/// assert_eq!(*combined.primary(), "odd: 1");
/// assert_eq!(combined.suppressed(), ["odd: 3"]);
/// ```
pub trait DeferExt<T, E> {
    /// Records the error side into `tracker`, returning the success value if
    /// there was one.
    fn defer(self, tracker: &mut Tracker<E>) -> Option<T>;
}

impl<T, E> DeferExt<T, E> for Result<T, E> {
    #[inline]
    fn defer(self, tracker: &mut Tracker<E>) -> Option<T> {
        tracker.run_catching(|| self)
    }
}
