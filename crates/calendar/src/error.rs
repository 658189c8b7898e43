//! Error types for the almanac-calendar crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the almanac-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when truncating a timestamp to a whole day would discard
    /// a non-zero time-of-day component.
    #[error("timestamp {timestamp} is not day-aligned and cannot be truncated exactly")]
    UnrepresentableDate {
        /// The timestamp that carries sub-day precision.
        timestamp: NaiveDateTime,
    },
}
