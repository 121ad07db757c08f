use crate::tracker::Tracker;
use crate::types::TrackResult;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`Tracker`] behind a lock, for recording failures from several threads.
///
/// The plain [`Tracker`] makes no concurrency guarantees; this wrapper adds
/// internal mutual exclusion around every operation, so `record` and
/// `run_catching` take `&self` and the tracker can be shared (for example in
/// an `Arc`). Recording order across threads follows lock acquisition order;
/// within one thread it matches call order.
///
/// Requires the `std` feature.
///
/// # Examples
///
/// ```
/// use error_defer::SharedTracker;
/// use std::sync::Arc;
/// use std::thread;
///
/// let tracker = Arc::new(SharedTracker::new());
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let tracker = Arc::clone(&tracker);
///         thread::spawn(move || tracker.record(i))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(tracker.error_count(), 4);
/// ```
#[must_use]
#[derive(Debug, Default)]
pub struct SharedTracker<E> {
    inner: Mutex<Tracker<E>>,
}

impl<E> SharedTracker<E> {
    /// Creates an empty shared tracker.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Tracker::new()),
        }
    }

    // A poisoned lock still holds failures the caller wants; keep them.
    fn lock(&self) -> MutexGuard<'_, Tracker<E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a failure. See [`Tracker::record`].
    pub fn record(&self, error: E) {
        self.lock().record(error);
    }

    /// Runs a fallible unit of work under the lock, deferring its failure.
    /// See [`Tracker::run_catching`].
    ///
    /// The lock is held while `op` runs, so a long-running operation blocks
    /// other recorders for its duration.
    pub fn run_catching<T, F>(&self, op: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.lock().run_catching(op)
    }

    /// Returns `true` if no failure has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the number of failures recorded so far.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.lock().error_count()
    }

    /// Consumes the shared tracker and surfaces the outcome of the batch.
    /// See [`Tracker::into_result`].
    pub fn into_result(self) -> TrackResult<E> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_result()
    }
}

impl<E: Clone> SharedTracker<E> {
    /// Surfaces the outcome of the batch without consuming the tracker.
    /// See [`Tracker::resolve_if_necessary`].
    pub fn resolve_if_necessary(&self) -> TrackResult<E> {
        self.lock().resolve_if_necessary()
    }
}
