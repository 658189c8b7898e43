//! Coercion of timestamp values to whole-day resolution.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::error::CalendarError;

/// How much sub-day precision may be discarded when coercing to a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Truncation {
    /// Only midnight timestamps are accepted; anything else is an error.
    #[default]
    Exact,
    /// Drop the time of day unconditionally.
    Floor,
}

/// A date or timestamp type that can be reduced to a [`NaiveDate`].
///
/// Implemented for [`NaiveDate`] (infallible) and [`NaiveDateTime`]
/// (checked according to [`Truncation`]).
pub trait DayResolution: Copy + Send + Sync {
    /// Reduces `self` to a calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnrepresentableDate`] if `truncation` is
    /// [`Truncation::Exact`] and `self` has a non-zero time of day.
    fn to_day(self, truncation: Truncation) -> Result<NaiveDate, CalendarError>;
}

impl DayResolution for NaiveDate {
    fn to_day(self, _truncation: Truncation) -> Result<NaiveDate, CalendarError> {
        Ok(self)
    }
}

impl DayResolution for NaiveDateTime {
    fn to_day(self, truncation: Truncation) -> Result<NaiveDate, CalendarError> {
        let time = self.time();
        let aligned = time.num_seconds_from_midnight() == 0 && time.nanosecond() == 0;
        match truncation {
            Truncation::Floor => Ok(self.date()),
            Truncation::Exact if aligned => Ok(self.date()),
            Truncation::Exact => Err(CalendarError::UnrepresentableDate { timestamp: self }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn date_is_identity() {
        assert_eq!(day().to_day(Truncation::Exact).unwrap(), day());
        assert_eq!(day().to_day(Truncation::Floor).unwrap(), day());
    }

    #[test]
    fn midnight_exact() {
        let ts = day().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(ts.to_day(Truncation::Exact).unwrap(), day());
    }

    #[test]
    fn intraday_rejected_when_exact() {
        let ts = day().and_hms_opt(16, 0, 0).unwrap();
        assert_eq!(
            ts.to_day(Truncation::Exact).unwrap_err(),
            CalendarError::UnrepresentableDate { timestamp: ts }
        );
    }

    #[test]
    fn sub_second_rejected_when_exact() {
        let ts = day().and_hms_nano_opt(0, 0, 0, 1).unwrap();
        assert!(ts.to_day(Truncation::Exact).is_err());
    }

    #[test]
    fn intraday_floored() {
        let ts = day().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(ts.to_day(Truncation::Floor).unwrap(), day());
    }

    #[test]
    fn default_is_exact() {
        assert_eq!(Truncation::default(), Truncation::Exact);
    }
}
