//! Business-day proximity of trading days to event dates.
//!
//! For every `(date, asset)` cell of a window this crate computes how many
//! business days (Monday to Friday, no holidays) separate the row's date
//! from an event date supplied for that cell, looking either backwards
//! ([`since_previous`]) or forwards ([`until_next`]).
//!
//! | Step | Function | Module |
//! |------|----------|--------|
//! | Copy-on-mask | [`apply_mask`] | `coerce` |
//! | Day coercion | [`coerce_to_day_resolution`], [`coerce_reference_dates`] | `coerce` |
//! | Distance map | [`proximity`] | `kernel` |
//!
//! # Quick start
//!
//! ```
//! use almanac_proximity::since_previous;
//! use chrono::NaiveDate;
//! use ndarray::Array2;
//!
//! let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let dates: Vec<NaiveDate> = (1..=5)
//!     .map(|d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
//!     .collect();
//! let events = Array2::from_elem((5, 1), Some(mon));
//! let mask = Array2::from_elem((5, 1), true);
//!
//! let out = since_previous(events.view(), &dates, mask.view()).unwrap();
//! assert_eq!(out.column(0).to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! Inputs are borrowed as views and never written to; every call returns
//! a freshly allocated matrix. Cells are independent, so large windows are
//! mapped on the rayon pool (see [`ProximityConfig`]).

pub mod coerce;
pub mod config;
pub mod error;
pub mod kernel;
pub mod window;

use chrono::NaiveDate;
use ndarray::Array2;

pub use coerce::{apply_mask, coerce_reference_dates, coerce_to_day_resolution};
pub use config::{OrderingPolicy, ProximityConfig};
pub use error::ProximityError;
pub use kernel::{
    Direction, proximity, since_previous, since_previous_with_config, until_next,
    until_next_with_config,
};
pub use window::{ComputationWindow, Sid};

pub use almanac_calendar::{DayResolution, Truncation};

/// `T×N` event dates; `None` marks a cell with no known event.
pub type EventDateMatrix<D = NaiveDate> = Array2<Option<D>>;

/// `T×N` validity flags; `false` forces the cell to unknown.
pub type ValidityMask = Array2<bool>;

/// `T×N` business-day distances; NaN marks unknown cells.
pub type DistanceMatrix = Array2<f64>;
