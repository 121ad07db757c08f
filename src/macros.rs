//! Ergonomic macro for running several fallible blocks through a
//! [`Tracker`](crate::Tracker).
//!
//! # Examples
//!
//! ```
//! use error_defer::{catching, Tracker};
//!
//! let mut tracker = Tracker::new();
//! catching!(tracker,
//!     { Err::<(), _>("step one failed") },
//!     { Ok::<_, &str>(()) },
//!     { Err::<(), _>("step three failed") },
//! );
//!
//! let combined = tracker.into_result().unwrap_err();
//! assert_eq!(*combined.primary(), "step one failed");
//! assert_eq!(combined.suppressed(), ["step three failed"]);
//! ```

/// Runs each block through [`Tracker::run_catching`](crate::Tracker::run_catching),
/// deferring every failure into the tracker.
///
/// Each block must evaluate to a `Result<_, E>` matching the tracker's error
/// type. Blocks execute in order; a failing block never stops the ones after
/// it.
///
/// # Syntax
///
/// `catching!(tracker, { ... }, { ... }, ...)`
///
/// # Examples
///
/// ```
/// use error_defer::{catching, Tracker};
///
/// fn shutdown(component: &'static str) -> Result<(), &'static str> {
///     if component == "db" { Err("db refused to stop") } else { Ok(()) }
/// }
///
/// let mut tracker = Tracker::new();
/// catching!(tracker,
///     { shutdown("cache") },
///     { shutdown("db") },
///     { shutdown("listener") },
/// );
///
/// assert_eq!(tracker.error_count(), 1);
/// ```
#[macro_export]
macro_rules! catching {
    ($tracker:expr, $($block:block),+ $(,)?) => {{
        $(
            let _ = $tracker.run_catching(|| $block);
        )+
    }};
}
