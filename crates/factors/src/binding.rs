//! A single event proximity factor: one column, one direction.

use almanac_proximity::{
    ComputationWindow, DayResolution, Direction, DistanceMatrix, ProximityConfig, proximity,
};
use ndarray::ArrayView2;

use crate::column::EventColumn;
use crate::error::FactorError;
use crate::source::ColumnSource;

/// Binds an upstream event-date column to a proximity direction.
///
/// The binding carries no algorithm of its own: every factor runs the same
/// kernel, and a new event type only needs a new binding.
///
/// # Example
///
/// ```
/// use almanac_factors::{EventColumn, EventProximityFactor};
/// use almanac_proximity::Direction;
///
/// let factor = EventProximityFactor::since(
///     "business_days_since_previous_dividend",
///     EventColumn::new("Dividends", "previous_ex_date"),
/// );
/// assert_eq!(factor.direction(), Direction::Since);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventProximityFactor {
    name: String,
    column: EventColumn,
    direction: Direction,
}

impl EventProximityFactor {
    /// Creates a binding.
    pub fn new(name: impl Into<String>, column: EventColumn, direction: Direction) -> Self {
        Self {
            name: name.into(),
            column,
            direction,
        }
    }

    /// Business days since the most recent event in `column`.
    pub fn since(name: impl Into<String>, column: EventColumn) -> Self {
        Self::new(name, column, Direction::Since)
    }

    /// Business days until the next known event in `column`.
    pub fn until(name: impl Into<String>, column: EventColumn) -> Self {
        Self::new(name, column, Direction::Until)
    }

    /// Returns the factor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bound column.
    pub fn column(&self) -> &EventColumn {
        &self.column
    }

    /// Returns the direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// One-line human readable summary.
    pub fn description(&self) -> String {
        match self.direction {
            Direction::Since => format!("business days since {}", self.column),
            Direction::Until => format!("business days until {}", self.column),
        }
    }

    /// Computes the factor over `window` from already-loaded event data.
    ///
    /// # Errors
    ///
    /// Returns [`FactorError::Proximity`] if `event_dates` or `mask` do not
    /// match the window shape, or if the kernel rejects the inputs.
    #[tracing::instrument(skip_all, fields(factor = %self.name, column = %self.column))]
    pub fn compute<D: DayResolution>(
        &self,
        window: &ComputationWindow,
        event_dates: ArrayView2<'_, Option<D>>,
        mask: ArrayView2<'_, bool>,
        config: &ProximityConfig,
    ) -> Result<DistanceMatrix, FactorError> {
        window.check_shape("event dates", event_dates.dim())?;
        window.check_shape("mask", mask.dim())?;
        let distances = proximity(self.direction, event_dates, window.dates(), mask, config)?;
        Ok(distances)
    }

    /// Loads the bound column from `source` and computes the factor.
    ///
    /// # Errors
    ///
    /// Propagates source failures and everything [`compute`](Self::compute)
    /// can return.
    pub fn compute_from<S: ColumnSource>(
        &self,
        source: &S,
        window: &ComputationWindow,
        config: &ProximityConfig,
    ) -> Result<DistanceMatrix, FactorError> {
        let data = source.load(&self.column, window)?;
        self.compute(window, data.dates.view(), data.mask.view(), config)
    }
}
