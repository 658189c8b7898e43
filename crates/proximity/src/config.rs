//! Configuration for proximity computations.

use almanac_calendar::Truncation;

use crate::error::ProximityError;

/// Whether the kernel checks that events lie on the expected side of
/// their reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderingPolicy {
    /// Compute whatever the inputs imply. A future event fed to
    /// `since_previous` produces a negative distance instead of an error.
    #[default]
    Unchecked,
    /// Reject the whole window with
    /// [`ProximityError::OrderingViolation`] on the first misplaced event.
    Strict,
}

/// Configuration for a proximity computation.
///
/// # Example
///
/// ```
/// use almanac_proximity::{OrderingPolicy, ProximityConfig};
///
/// let config = ProximityConfig::new()
///     .with_ordering(OrderingPolicy::Strict)
///     .with_parallel(false);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ProximityConfig {
    /// Tolerance applied when coercing timestamps to days.
    truncation: Truncation,
    /// Ordering precondition handling.
    ordering: OrderingPolicy,
    /// Whether large windows are mapped on the rayon pool.
    parallel: bool,
    /// Smallest cell count for which the parallel path is taken.
    parallel_min_cells: usize,
}

impl ProximityConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: exact truncation, unchecked ordering, parallel enabled
    /// from 65 536 cells.
    pub fn new() -> Self {
        Self {
            truncation: Truncation::Exact,
            ordering: OrderingPolicy::Unchecked,
            parallel: true,
            parallel_min_cells: 1 << 16,
        }
    }

    /// Sets the truncation tolerance.
    pub fn with_truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }

    /// Sets the ordering policy.
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Enables or disables the parallel path.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the cell count from which the parallel path is used.
    pub fn with_parallel_min_cells(mut self, parallel_min_cells: usize) -> Self {
        self.parallel_min_cells = parallel_min_cells;
        self
    }

    /// Returns the truncation tolerance.
    pub fn truncation(&self) -> Truncation {
        self.truncation
    }

    /// Returns the ordering policy.
    pub fn ordering(&self) -> OrderingPolicy {
        self.ordering
    }

    /// Returns whether the parallel path is enabled.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the parallel cell threshold.
    pub fn parallel_min_cells(&self) -> usize {
        self.parallel_min_cells
    }

    /// Returns `true` if a window of `cells` cells should run in parallel.
    pub(crate) fn runs_parallel(&self, cells: usize) -> bool {
        self.parallel && cells >= self.parallel_min_cells
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `parallel_min_cells` is zero.
    pub fn validate(&self) -> Result<(), ProximityError> {
        if self.parallel_min_cells == 0 {
            return Err(ProximityError::InvalidConfig {
                reason: "parallel_min_cells must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self::new()
    }
}
