//! Day-resolution coercion and copy-on-mask for event matrices.

use almanac_calendar::{DayResolution, Truncation};
use chrono::NaiveDate;
use ndarray::{Array2, ArrayView2, Zip};

use crate::error::ProximityError;

/// Reduces every known cell of `timestamps` to a calendar day.
///
/// Unknown cells stay unknown. The input is left untouched.
///
/// # Errors
///
/// Returns [`ProximityError::UnrepresentableDate`] for the first cell (in
/// row-major order) that cannot be truncated under `truncation`.
pub fn coerce_to_day_resolution<D: DayResolution>(
    timestamps: ArrayView2<'_, Option<D>>,
    truncation: Truncation,
) -> Result<Array2<Option<NaiveDate>>, ProximityError> {
    for ((row, col), cell) in timestamps.indexed_iter() {
        if let Some(ts) = *cell {
            ts.to_day(truncation)
                .map_err(|source| ProximityError::UnrepresentableDate { row, col, source })?;
        }
    }
    Ok(timestamps.map(|cell| match *cell {
        Some(ts) => ts.to_day(truncation).ok(),
        None => None,
    }))
}

/// Reduces the row labels of a window to calendar days.
///
/// # Errors
///
/// Returns [`ProximityError::UnrepresentableReferenceDate`] for the first
/// date that cannot be truncated under `truncation`.
pub fn coerce_reference_dates<D: DayResolution>(
    dates: &[D],
    truncation: Truncation,
) -> Result<Vec<NaiveDate>, ProximityError> {
    dates
        .iter()
        .enumerate()
        .map(|(row, ts)| {
            ts.to_day(truncation)
                .map_err(|source| ProximityError::UnrepresentableReferenceDate { row, source })
        })
        .collect()
}

/// Returns a copy of `dates` with every cell whose mask is `false` set to
/// unknown.
///
/// # Errors
///
/// Returns [`ProximityError::ShapeMismatch`] if `mask` and `dates` differ
/// in shape.
pub fn apply_mask<T: Copy>(
    dates: ArrayView2<'_, Option<T>>,
    mask: ArrayView2<'_, bool>,
) -> Result<Array2<Option<T>>, ProximityError> {
    if mask.dim() != dates.dim() {
        return Err(ProximityError::ShapeMismatch {
            input: "mask",
            expected: dates.dim(),
            got: mask.dim(),
        });
    }
    Ok(Zip::from(dates)
        .and(mask)
        .map_collect(|&cell, &valid| if valid { cell } else { None }))
}
