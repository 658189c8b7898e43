//! Error types for the almanac-factors crate.

use almanac_proximity::ProximityError;

use crate::column::EventColumn;

/// Error type for all fallible operations in the almanac-factors crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactorError {
    /// Wrapped error from the proximity kernel.
    #[error(transparent)]
    Proximity(#[from] ProximityError),

    /// Returned when a column reference is not of the form `Dataset.field`.
    #[error("invalid column reference '{text}' (expected 'Dataset.field')")]
    InvalidColumn {
        /// The text that failed to parse.
        text: String,
    },

    /// Returned when registering a factor under a name already taken.
    #[error("factor '{name}' is already registered")]
    DuplicateFactor {
        /// The conflicting name.
        name: String,
    },

    /// Returned when looking up a name that has no binding.
    #[error("no factor named '{name}'")]
    UnknownFactor {
        /// The requested name.
        name: String,
    },

    /// Returned when a column source has no data for a column.
    #[error("column {column} is not available")]
    MissingColumn {
        /// The requested column.
        column: EventColumn,
    },

    /// Returned when a column source fails for any other reason.
    #[error("failed to load column {column}: {reason}")]
    Source {
        /// The requested column.
        column: EventColumn,
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_column() {
        let e = FactorError::InvalidColumn {
            text: "earnings".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid column reference 'earnings' (expected 'Dataset.field')"
        );
    }

    #[test]
    fn display_duplicate_factor() {
        let e = FactorError::DuplicateFactor {
            name: "days_since".to_string(),
        };
        assert_eq!(e.to_string(), "factor 'days_since' is already registered");
    }

    #[test]
    fn display_unknown_factor() {
        let e = FactorError::UnknownFactor {
            name: "nope".to_string(),
        };
        assert_eq!(e.to_string(), "no factor named 'nope'");
    }

    #[test]
    fn display_source() {
        let e = FactorError::Source {
            column: EventColumn::new("EarningsCalendar", "next_announcement"),
            reason: "loader offline".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "failed to load column EarningsCalendar.next_announcement: loader offline"
        );
    }

    #[test]
    fn proximity_errors_pass_through() {
        let inner = ProximityError::ShapeMismatch {
            input: "mask",
            expected: (2, 2),
            got: (2, 1),
        };
        let e = FactorError::from(inner.clone());
        assert_eq!(e.to_string(), inner.to_string());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<FactorError>();
    }
}
