use crate::types::ErrorVec;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One failure standing for many: a primary error plus every later failure
/// attached as a suppressed cause, in the order the failures occurred.
///
/// A [`Tracker`](crate::Tracker) produces a `CombinedError` when at least one
/// failure was recorded. The first recorded failure is the primary and is
/// never replaced; everything recorded after it lands on the suppressed list.
/// Nothing is ever dropped or reordered.
///
/// # Type Parameters
///
/// * `E` - The underlying error type
///
/// # Examples
///
/// ```
/// use error_defer::CombinedError;
///
/// let mut combined = CombinedError::new("io error");
/// combined.suppress("state error");
/// combined.suppress("interrupt");
///
/// assert_eq!(*combined.primary(), "io error");
/// assert_eq!(combined.suppressed(), ["state error", "interrupt"]);
/// assert_eq!(combined.len(), 3);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedError<E> {
    primary: E,
    suppressed: ErrorVec<E>,
}

#[allow(clippy::len_without_is_empty)] // never empty: there is always a primary
impl<E> CombinedError<E> {
    /// Creates a combined error from its primary failure, with no suppressed
    /// causes yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::CombinedError;
    ///
    /// let combined = CombinedError::new("boom");
    /// assert_eq!(combined.len(), 1);
    /// assert!(combined.suppressed().is_empty());
    /// ```
    #[inline]
    pub fn new(primary: E) -> Self {
        Self {
            primary,
            suppressed: ErrorVec::new(),
        }
    }

    /// Attaches a later failure as a suppressed cause.
    ///
    /// Causes accumulate in call order and are never dropped.
    #[inline]
    pub fn suppress(&mut self, error: E) {
        self.suppressed.push(error);
    }

    /// Returns the primary failure, the first one that occurred.
    #[inline]
    pub fn primary(&self) -> &E {
        &self.primary
    }

    /// Returns the suppressed causes in the order they occurred.
    #[inline]
    pub fn suppressed(&self) -> &[E] {
        &self.suppressed
    }

    /// Returns the total number of failures carried: the primary plus every
    /// suppressed cause. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.suppressed.len()
    }

    /// Iterates over every carried failure, primary first, then the
    /// suppressed causes in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::CombinedError;
    ///
    /// let mut combined = CombinedError::new(0);
    /// combined.suppress(1);
    /// combined.suppress(2);
    ///
    /// let all: Vec<i32> = combined.iter().copied().collect();
    /// assert_eq!(all, [0, 1, 2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        core::iter::once(&self.primary).chain(self.suppressed.iter())
    }

    /// Consumes the combined error, returning only the primary failure and
    /// discarding the suppressed causes.
    #[inline]
    pub fn into_primary(self) -> E {
        self.primary
    }

    /// Consumes the combined error, returning the primary failure and the
    /// suppressed causes separately.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::CombinedError;
    ///
    /// let mut combined = CombinedError::new("first");
    /// combined.suppress("second");
    ///
    /// let (primary, suppressed) = combined.into_parts();
    /// assert_eq!(primary, "first");
    /// assert_eq!(suppressed.as_slice(), ["second"]);
    /// ```
    #[inline]
    pub fn into_parts(self) -> (E, ErrorVec<E>) {
        (self.primary, self.suppressed)
    }
}

impl<E: Display> Display for CombinedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if !self.suppressed.is_empty() {
            write!(f, " ({} suppressed)", self.suppressed.len())?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug + Display> std::error::Error for CombinedError<E> {}

impl<E: PartialOrd> PartialOrd for CombinedError<E> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        match self.primary.partial_cmp(&other.primary) {
            Some(core::cmp::Ordering::Equal) => self.suppressed.partial_cmp(&other.suppressed),
            ord => ord,
        }
    }
}

impl<E: Ord> Ord for CombinedError<E> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.suppressed.cmp(&other.suppressed))
    }
}

impl<E: Hash> Hash for CombinedError<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.primary.hash(state);
        self.suppressed.hash(state);
    }
}

impl<E> From<E> for CombinedError<E> {
    fn from(primary: E) -> Self {
        Self::new(primary)
    }
}
