//! Worked examples over small windows.

use almanac_calendar::business_day_sequence;
use almanac_proximity::{ComputationWindow, Sid, since_previous, until_next};
use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use ndarray::{Array2, array};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Mon..Fri against an event on Monday counts up from zero.
#[test]
fn since_monday_event_over_one_week() {
    let dates = business_day_sequence(ymd(2024, 1, 1), 5);
    let events = Array2::from_elem((5, 1), Some(ymd(2024, 1, 1)));
    let mask = Array2::from_elem((5, 1), true);

    let out = since_previous(events.view(), &dates, mask.view()).unwrap();

    let expected = [0.0, 1.0, 2.0, 3.0, 4.0];
    for (t, &e) in expected.iter().enumerate() {
        assert_abs_diff_eq!(out[[t, 0]], e);
    }
}

/// Thu and Fri against an event on the following Monday: the weekend in
/// between is not counted, so Friday is one business day away.
#[test]
fn until_monday_event_skips_weekend() {
    let dates = [ymd(2024, 1, 4), ymd(2024, 1, 5)];
    let events = Array2::from_elem((2, 1), Some(ymd(2024, 1, 8)));
    let mask = Array2::from_elem((2, 1), true);

    let out = until_next(events.view(), &dates, mask.view()).unwrap();

    assert_abs_diff_eq!(out[[0, 0]], 2.0);
    assert_abs_diff_eq!(out[[1, 0]], 1.0);
}

/// One fully masked column, one fully valid column.
#[test]
fn masked_column_is_all_nan() {
    let window = ComputationWindow::new(
        business_day_sequence(ymd(2024, 1, 1), 5),
        vec![Sid(10), Sid(20)],
    )
    .unwrap();
    let events = Array2::from_elem(window.shape(), Some(ymd(2024, 1, 1)));
    let mut mask = Array2::from_elem(window.shape(), true);
    mask.column_mut(0).fill(false);

    let out = since_previous(events.view(), window.dates(), mask.view()).unwrap();

    assert!(out.column(0).iter().all(|v| v.is_nan()));
    let valid: Vec<f64> = out.column(1).to_vec();
    assert_eq!(valid, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

/// Different assets with different events and gaps in coverage.
#[test]
fn mixed_assets() {
    let dates = [ymd(2024, 3, 28), ymd(2024, 3, 29), ymd(2024, 4, 1)];
    let events = array![
        [Some(ymd(2024, 3, 28)), None, Some(ymd(2024, 4, 5))],
        [Some(ymd(2024, 3, 28)), Some(ymd(2024, 3, 29)), Some(ymd(2024, 4, 5))],
        [Some(ymd(2024, 4, 1)), Some(ymd(2024, 3, 29)), None],
    ];
    let mask = Array2::from_elem((3, 3), true);

    let since = since_previous(events.view(), &dates, mask.view()).unwrap();
    assert_abs_diff_eq!(since[[0, 0]], 0.0);
    assert!(since[[0, 1]].is_nan());
    assert_abs_diff_eq!(since[[1, 0]], 1.0);
    assert_abs_diff_eq!(since[[1, 1]], 0.0);
    assert_abs_diff_eq!(since[[2, 0]], 0.0);
    assert_abs_diff_eq!(since[[2, 1]], 1.0);
    assert!(since[[2, 2]].is_nan());

    let until = until_next(events.view(), &dates, mask.view()).unwrap();
    // Thu 03-28 -> Fri 04-05: Fri, Mon, Tue, Wed, Thu, Fri.
    assert_abs_diff_eq!(until[[0, 2]], 6.0);
    assert_abs_diff_eq!(until[[1, 2]], 5.0);
}
