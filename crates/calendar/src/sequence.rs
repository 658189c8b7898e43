//! Date sequence generation.

use chrono::{Days, NaiveDate};

use crate::busday::is_business_day;

/// Generates `n_days` consecutive calendar days starting at `start`.
///
/// Stops early if the end of chrono's representable range is reached.
///
/// # Example
///
/// ```
/// use almanac_calendar::day_sequence;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2000, 12, 30).unwrap();
/// let dates = day_sequence(start, 4);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2001, 1, 1).unwrap());
/// ```
pub fn day_sequence(start: NaiveDate, n_days: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n_days);
    let mut current = Some(start);
    while dates.len() < n_days {
        let Some(day) = current else { break };
        dates.push(day);
        current = day.checked_add_days(Days::new(1));
    }
    dates
}

/// Generates the first `n_days` business days on or after `start`.
///
/// A weekend `start` rolls forward to the following Monday.
pub fn business_day_sequence(start: NaiveDate, n_days: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n_days);
    let mut current = Some(start);
    while dates.len() < n_days {
        let Some(day) = current else { break };
        if is_business_day(day) {
            dates.push(day);
        }
        current = day.checked_add_days(Days::new(1));
    }
    dates
}
