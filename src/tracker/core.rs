use crate::types::{CombinedError, TrackResult};

/// Accumulates failures across a batch of independent operations, deferring
/// them until the caller asks for the outcome.
///
/// The first recorded failure becomes the primary and is never replaced;
/// every later failure is attached to it as a suppressed cause, in recording
/// order. Recording never interrupts the caller's control flow: the batch
/// runs to completion and the accumulated outcome is surfaced at the end by
/// [`resolve_if_necessary`](Tracker::resolve_if_necessary) or
/// [`into_result`](Tracker::into_result).
///
/// A tracker is meant for sequential use on one thread. Its state is plain
/// mutable data with no locking; for concurrent recording use
/// [`SharedTracker`](crate::tracker::SharedTracker) instead.
///
/// # Type Parameters
///
/// * `E` - The tracked error type
///
/// # Examples
///
/// ```
/// use error_defer::Tracker;
///
/// let mut tracker = Tracker::new();
/// tracker.run_catching(|| Err::<(), _>("validator 1 failed"));
/// tracker.run_catching(|| Ok::<_, &str>(()));
/// tracker.run_catching(|| Err::<(), _>("validator 3 failed"));
///
/// let combined = tracker.into_result().unwrap_err();
/// assert_eq!(*combined.primary(), "validator 1 failed");
/// assert_eq!(combined.suppressed(), ["validator 3 failed"]);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tracker<E> {
    combined: Option<CombinedError<E>>,
}

impl<E> Tracker<E> {
    /// Creates an empty tracker with no recorded failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::Tracker;
    ///
    /// let tracker: Tracker<&str> = Tracker::new();
    /// assert!(tracker.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self { combined: None }
    }

    /// Records a failure.
    ///
    /// The first failure recorded becomes the primary; every later one is
    /// attached to it as a suppressed cause, in call order. Recording never
    /// fails and never drops a failure. (The "no absent failure" precondition
    /// of the design is enforced by the type system: `E` is always a value.)
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::Tracker;
    ///
    /// let mut tracker = Tracker::new();
    /// tracker.record("first");
    /// tracker.record("second");
    /// assert_eq!(tracker.error_count(), 2);
    /// ```
    pub fn record(&mut self, error: E) {
        match &mut self.combined {
            None => self.combined = Some(CombinedError::new(error)),
            Some(combined) => combined.suppress(error),
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(total = self.error_count(), "deferred a failure");
    }

    /// Runs a fallible unit of work, deferring its failure instead of
    /// propagating it.
    ///
    /// The operation is invoked exactly once, synchronously, on the calling
    /// thread. On `Ok(value)` nothing is recorded and `Some(value)` is
    /// returned; on `Err(e)` the failure is passed to
    /// [`record`](Tracker::record) and `None` is returned. Either way the
    /// caller's control flow continues.
    ///
    /// # Arguments
    ///
    /// * `op` - The unit of work; its `Result` declares the failure type,
    ///   so no downcasting is involved in capturing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::Tracker;
    ///
    /// let mut tracker = Tracker::new();
    /// let parsed = tracker.run_catching(|| "42".parse::<i32>());
    /// let failed = tracker.run_catching(|| "no".parse::<i32>());
    ///
    /// assert_eq!(parsed, Some(42));
    /// assert_eq!(failed, None);
    /// assert_eq!(tracker.error_count(), 1);
    /// ```
    pub fn run_catching<T, F>(&mut self, op: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match op() {
            Ok(value) => Some(value),
            Err(error) => {
                self.record(error);
                None
            }
        }
    }

    /// Returns `true` if no failure has been recorded.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.combined.is_none()
    }

    /// Returns the number of failures recorded so far.
    #[must_use]
    #[inline]
    pub fn error_count(&self) -> usize {
        self.combined.as_ref().map_or(0, CombinedError::len)
    }

    /// Returns the accumulated combined error, if any failure was recorded.
    #[must_use]
    #[inline]
    pub fn combined(&self) -> Option<&CombinedError<E>> {
        self.combined.as_ref()
    }

    /// Consumes the tracker and surfaces the outcome of the batch.
    ///
    /// Returns `Ok(())` if nothing was recorded, otherwise `Err` carrying the
    /// primary failure with every later failure attached as a suppressed
    /// cause, in recording order.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::Tracker;
    ///
    /// let mut tracker = Tracker::new();
    /// tracker.record("boom");
    ///
    /// let combined = tracker.into_result().unwrap_err();
    /// assert_eq!(*combined.primary(), "boom");
    /// ```
    #[inline]
    pub fn into_result(self) -> TrackResult<E> {
        match self.combined {
            None => Ok(()),
            Some(combined) => Err(combined),
        }
    }
}

impl<E: Clone> Tracker<E> {
    /// Surfaces the outcome of the batch without consuming the tracker.
    ///
    /// A no-op `Ok(())` when nothing was recorded. Otherwise returns a clone
    /// of the combined failure: the primary first, the rest as ordered
    /// suppressed causes. Tracker state is not mutated, so observing twice
    /// yields equal combined failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::Tracker;
    ///
    /// let mut tracker = Tracker::new();
    /// assert!(tracker.resolve_if_necessary().is_ok());
    ///
    /// tracker.record("boom");
    /// let first = tracker.resolve_if_necessary().unwrap_err();
    /// let second = tracker.resolve_if_necessary().unwrap_err();
    /// assert_eq!(first, second);
    /// ```
    #[inline]
    pub fn resolve_if_necessary(&self) -> TrackResult<E> {
        match &self.combined {
            None => Ok(()),
            Some(combined) => Err(combined.clone()),
        }
    }
}
