//! Error types for the almanac-proximity crate.

use almanac_calendar::CalendarError;
use chrono::NaiveDate;

use crate::kernel::Direction;

/// Error type for all fallible operations in the almanac-proximity crate.
///
/// Missing event data is never an error: it is carried as `None` or a
/// `false` mask cell and surfaces as NaN in the output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProximityError {
    /// Returned when an input's dimensions disagree with the window.
    #[error("shape mismatch for {input}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Name of the offending input.
        input: &'static str,
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Actual `(rows, cols)`.
        got: (usize, usize),
    },

    /// Returned when an event timestamp cannot be reduced to a whole day.
    #[error("event date at ({row}, {col}) is unrepresentable: {source}")]
    UnrepresentableDate {
        /// Row (date index) of the offending cell.
        row: usize,
        /// Column (asset index) of the offending cell.
        col: usize,
        /// Underlying coercion failure.
        #[source]
        source: CalendarError,
    },

    /// Returned when a reference timestamp cannot be reduced to a whole day.
    #[error("reference date at row {row} is unrepresentable: {source}")]
    UnrepresentableReferenceDate {
        /// Index into the reference dates.
        row: usize,
        /// Underlying coercion failure.
        #[source]
        source: CalendarError,
    },

    /// Returned when window dates are not strictly increasing.
    #[error("dates must be strictly increasing: {current} at index {index} does not follow {previous}")]
    UnsortedDates {
        /// Index of the first out-of-order date.
        index: usize,
        /// The date preceding it.
        previous: NaiveDate,
        /// The out-of-order date.
        current: NaiveDate,
    },

    /// Returned under strict ordering when an event lies on the wrong side
    /// of its reference date.
    #[error("{direction} event {event} at ({row}, {col}) is on the wrong side of reference date {reference}")]
    OrderingViolation {
        /// Direction of the computation.
        direction: Direction,
        /// Row (date index) of the offending cell.
        row: usize,
        /// Column (asset index) of the offending cell.
        col: usize,
        /// The event date.
        event: NaiveDate,
        /// The reference date for the row.
        reference: NaiveDate,
    },

    /// Returned when a direction name is neither `since` nor `until`.
    #[error("unknown direction '{value}' (expected 'since' or 'until')")]
    UnknownDirection {
        /// The unrecognized name.
        value: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
