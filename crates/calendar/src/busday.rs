//! Weekday-only business-day arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};

/// Business days per calendar week.
const BUSINESS_DAYS_PER_WEEK: i64 = 5;

/// Returns `true` if `date` falls on Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the running count of business days up to and including `date`.
///
/// The origin is arbitrary but fixed, so only differences between ordinals
/// are meaningful. Weekend days share the ordinal of the preceding Friday.
pub fn business_day_ordinal(date: NaiveDate) -> i64 {
    let days = i64::from(date.num_days_from_ce());
    let dow = i64::from(date.weekday().num_days_from_monday());
    // Monday of the same week; every week start is congruent mod 7.
    let week = (days - dow).div_euclid(7);
    week * BUSINESS_DAYS_PER_WEEK + (dow + 1).min(BUSINESS_DAYS_PER_WEEK)
}

/// Signed number of business days in the half-open interval `(from, to]`.
///
/// An event on `to` itself yields 0, an event on the business day before
/// `to` yields 1, and weekends never contribute. When `from > to` the
/// result is the negated count of `(to, from]`.
///
/// # Example
///
/// ```
/// use almanac_calendar::business_day_distance;
/// use chrono::NaiveDate;
///
/// let thu = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
/// let mon = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(business_day_distance(thu, mon), 2); // Fri, Mon
/// assert_eq!(business_day_distance(mon, thu), -2);
/// ```
pub fn business_day_distance(from: NaiveDate, to: NaiveDate) -> i64 {
    business_day_ordinal(to) - business_day_ordinal(from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_are_business_days() {
        // 2024-01-01 is a Monday.
        for d in 1..=5 {
            assert!(is_business_day(ymd(2024, 1, d)), "day {d}");
        }
        assert!(!is_business_day(ymd(2024, 1, 6)));
        assert!(!is_business_day(ymd(2024, 1, 7)));
    }

    #[test]
    fn ordinal_increments_on_weekdays_only() {
        let mut prev = business_day_ordinal(ymd(2024, 1, 1));
        for d in 2..=14 {
            let date = ymd(2024, 1, d);
            let cur = business_day_ordinal(date);
            let step = if is_business_day(date) { 1 } else { 0 };
            assert_eq!(cur - prev, step, "step into {date}");
            prev = cur;
        }
    }

    #[test]
    fn same_day_is_zero() {
        let d = ymd(2024, 1, 3);
        assert_eq!(business_day_distance(d, d), 0);
    }

    #[test]
    fn previous_business_day_is_one() {
        assert_eq!(business_day_distance(ymd(2024, 1, 2), ymd(2024, 1, 3)), 1);
        // Friday to the following Monday.
        assert_eq!(business_day_distance(ymd(2024, 1, 5), ymd(2024, 1, 8)), 1);
    }

    #[test]
    fn weekend_endpoints() {
        // (Sat, Mon] contains only Monday.
        assert_eq!(business_day_distance(ymd(2024, 1, 6), ymd(2024, 1, 8)), 1);
        // (Fri, Sun] contains no business day.
        assert_eq!(business_day_distance(ymd(2024, 1, 5), ymd(2024, 1, 7)), 0);
        // (Sat, Sun] is empty too.
        assert_eq!(business_day_distance(ymd(2024, 1, 6), ymd(2024, 1, 7)), 0);
    }

    #[test]
    fn full_weeks() {
        assert_eq!(business_day_distance(ymd(2024, 1, 1), ymd(2024, 1, 8)), 5);
        assert_eq!(business_day_distance(ymd(2024, 1, 1), ymd(2024, 1, 29)), 20);
    }

    #[test]
    fn reversed_arguments_negate() {
        let a = ymd(2023, 12, 27);
        let b = ymd(2024, 1, 9);
        assert_eq!(business_day_distance(a, b), -business_day_distance(b, a));
    }

    #[test]
    fn spans_year_and_leap_day() {
        // Thu 2024-02-29 to Fri 2024-03-01.
        assert_eq!(business_day_distance(ymd(2024, 2, 29), ymd(2024, 3, 1)), 1);
        // Fri 2021-12-31 to Mon 2022-01-03.
        assert_eq!(business_day_distance(ymd(2021, 12, 31), ymd(2022, 1, 3)), 1);
    }

    #[test]
    fn before_common_era() {
        let a = ymd(-1, 12, 25);
        let b = ymd(1, 1, 8);
        let mut expected = 0;
        let mut d = a;
        while d < b {
            d = d.succ_opt().unwrap();
            if is_business_day(d) {
                expected += 1;
            }
        }
        assert_eq!(business_day_distance(a, b), expected);
    }
}
