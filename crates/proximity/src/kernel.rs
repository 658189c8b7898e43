//! The business-day proximity kernel.
//!
//! Both entry points share one cell map and differ only in the order the
//! event and reference dates are handed to
//! [`business_day_distance`]:
//!
//! ```text
//! since_previous[t, n] = distance(event[t, n], dates[t])
//! until_next[t, n]     = distance(dates[t], event[t, n])
//! ```
//!
//! Unknown or masked cells map to NaN.

use std::fmt;
use std::str::FromStr;

use almanac_calendar::{DayResolution, business_day_distance};
use chrono::NaiveDate;
use ndarray::{Array1, Array2, ArrayView2, Axis, Zip};
use tracing::debug;

use crate::DistanceMatrix;
use crate::coerce::{apply_mask, coerce_reference_dates, coerce_to_day_resolution};
use crate::config::{OrderingPolicy, ProximityConfig};
use crate::error::ProximityError;

/// Which side of the reference date an event is looked up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Business days elapsed since a past event.
    Since,
    /// Business days remaining until an upcoming event.
    Until,
}

impl Direction {
    /// Signed business-day distance between `event` and `reference`.
    pub fn distance(self, event: NaiveDate, reference: NaiveDate) -> i64 {
        match self {
            Self::Since => business_day_distance(event, reference),
            Self::Until => business_day_distance(reference, event),
        }
    }

    /// Returns `true` if `event` lies on this direction's side of
    /// `reference` (same day included).
    pub fn admits(self, event: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::Since => event <= reference,
            Self::Until => event >= reference,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Since => f.write_str("since"),
            Self::Until => f.write_str("until"),
        }
    }
}

impl FromStr for Direction {
    type Err = ProximityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "since" => Ok(Self::Since),
            "until" => Ok(Self::Until),
            _ => Err(ProximityError::UnknownDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// Business days since the event in each cell, with default configuration.
///
/// Event dates are expected on or before their row's reference date; see
/// [`OrderingPolicy`] for what happens otherwise.
///
/// # Errors
///
/// See [`proximity`].
pub fn since_previous<E: DayResolution, R: DayResolution>(
    event_dates: ArrayView2<'_, Option<E>>,
    reference_dates: &[R],
    mask: ArrayView2<'_, bool>,
) -> Result<DistanceMatrix, ProximityError> {
    proximity(
        Direction::Since,
        event_dates,
        reference_dates,
        mask,
        &ProximityConfig::default(),
    )
}

/// Business days until the event in each cell, with default configuration.
///
/// Event dates are expected on or after their row's reference date.
///
/// # Errors
///
/// See [`proximity`].
pub fn until_next<E: DayResolution, R: DayResolution>(
    event_dates: ArrayView2<'_, Option<E>>,
    reference_dates: &[R],
    mask: ArrayView2<'_, bool>,
) -> Result<DistanceMatrix, ProximityError> {
    proximity(
        Direction::Until,
        event_dates,
        reference_dates,
        mask,
        &ProximityConfig::default(),
    )
}

/// [`since_previous`] with an explicit configuration.
pub fn since_previous_with_config<E: DayResolution, R: DayResolution>(
    event_dates: ArrayView2<'_, Option<E>>,
    reference_dates: &[R],
    mask: ArrayView2<'_, bool>,
    config: &ProximityConfig,
) -> Result<DistanceMatrix, ProximityError> {
    proximity(Direction::Since, event_dates, reference_dates, mask, config)
}

/// [`until_next`] with an explicit configuration.
pub fn until_next_with_config<E: DayResolution, R: DayResolution>(
    event_dates: ArrayView2<'_, Option<E>>,
    reference_dates: &[R],
    mask: ArrayView2<'_, bool>,
    config: &ProximityConfig,
) -> Result<DistanceMatrix, ProximityError> {
    proximity(Direction::Until, event_dates, reference_dates, mask, config)
}

/// Computes the business-day distance matrix for `direction`.
///
/// Event and reference dates may use different resolutions, e.g.
/// timestamp event columns against day-labelled window rows.
///
/// Steps:
///
/// 1. Copy `event_dates` with masked cells set to unknown, then coerce
///    events and reference dates to whole days.
/// 2. Broadcast `reference_dates` as a column against the asset columns.
/// 3. Map each cell to [`Direction::distance`] as `f64`, or NaN when the
///    event is unknown.
///
/// The inputs are only read; the result is a fresh `T×N` matrix.
///
/// # Errors
///
/// - [`ProximityError::ShapeMismatch`] if `reference_dates` or `mask`
///   disagree with the shape of `event_dates`.
/// - [`ProximityError::UnrepresentableDate`] /
///   [`ProximityError::UnrepresentableReferenceDate`] if coercion fails.
/// - [`ProximityError::OrderingViolation`] under [`OrderingPolicy::Strict`].
/// - [`ProximityError::InvalidConfig`] if `config` does not validate.
#[tracing::instrument(
    skip_all,
    fields(direction = %direction, rows = event_dates.nrows(), cols = event_dates.ncols())
)]
pub fn proximity<E: DayResolution, R: DayResolution>(
    direction: Direction,
    event_dates: ArrayView2<'_, Option<E>>,
    reference_dates: &[R],
    mask: ArrayView2<'_, bool>,
    config: &ProximityConfig,
) -> Result<DistanceMatrix, ProximityError> {
    config.validate()?;

    let (rows, cols) = event_dates.dim();
    if reference_dates.len() != rows {
        return Err(ProximityError::ShapeMismatch {
            input: "dates",
            expected: (rows, 1),
            got: (reference_dates.len(), 1),
        });
    }

    let masked = apply_mask(event_dates, mask)?;
    let events = coerce_to_day_resolution(masked.view(), config.truncation())?;
    let references = coerce_reference_dates(reference_dates, config.truncation())?;

    if config.ordering() == OrderingPolicy::Strict {
        check_ordering(direction, events.view(), &references)?;
    }

    if rows == 0 || cols == 0 {
        return Ok(Array2::zeros((rows, cols)));
    }

    let references = Array1::from(references).insert_axis(Axis(1));
    let zip = Zip::from(&events).and_broadcast(&references);
    let cell = move |event: &Option<NaiveDate>, reference: &NaiveDate| match *event {
        Some(event) => direction.distance(event, *reference) as f64,
        None => f64::NAN,
    };

    let parallel = config.runs_parallel(rows * cols);
    debug!(parallel, "mapping cells");
    let distances = if parallel {
        zip.par_map_collect(cell)
    } else {
        zip.map_collect(cell)
    };
    Ok(distances)
}

/// Fails on the first known event lying on the wrong side of its row's
/// reference date.
fn check_ordering(
    direction: Direction,
    events: ArrayView2<'_, Option<NaiveDate>>,
    references: &[NaiveDate],
) -> Result<(), ProximityError> {
    for ((row, col), cell) in events.indexed_iter() {
        let Some(event) = *cell else { continue };
        let reference = references[row];
        if !direction.admits(event, reference) {
            return Err(ProximityError::OrderingViolation {
                direction,
                row,
                col,
                event,
                reference,
            });
        }
    }
    Ok(())
}
