//! Retry accounting for a single top-level request.
//!
//! A [`RetryBudget`] lives for exactly one call. It is never stored on the
//! client, so concurrent calls on a shared client cannot disturb each other's
//! counts.

/// Counts retries against a fixed ceiling.
///
/// With `max_retries = n`, a request is attempted at most `n + 1` times.
///
/// # Example
///
/// ```rust
/// use lightspeed_api::clients::RetryBudget;
///
/// let mut budget = RetryBudget::new(2);
/// assert!(budget.try_retry());
/// assert!(budget.try_retry());
/// assert!(!budget.try_retry());
/// assert_eq!(budget.attempts(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryBudget {
    max_retries: u32,
    retries: u32,
}

impl RetryBudget {
    /// Creates a fresh budget.
    #[must_use]
    pub const fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            retries: 0,
        }
    }

    /// Records a retry if the ceiling allows one.
    ///
    /// Returns `false` once the budget is exhausted.
    pub fn try_retry(&mut self) -> bool {
        if self.retries < self.max_retries {
            self.retries += 1;
            true
        } else {
            false
        }
    }

    /// Returns the number of retries recorded so far.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the number of attempts made so far, including the first.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.retries + 1
    }

    /// Returns the configured ceiling.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }
}
