//! The seam through which the surrounding pipeline supplies event data.

use std::collections::BTreeMap;

use almanac_proximity::{ComputationWindow, DayResolution, EventDateMatrix, ValidityMask};
use chrono::NaiveDate;

use crate::column::EventColumn;
use crate::error::FactorError;

/// Event dates and validity flags for one column over one window.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnData<D = NaiveDate> {
    /// `T×N` event dates.
    pub dates: EventDateMatrix<D>,
    /// `T×N` validity flags.
    pub mask: ValidityMask,
}

impl<D> ColumnData<D> {
    /// Bundles a date matrix with its mask.
    pub fn new(dates: EventDateMatrix<D>, mask: ValidityMask) -> Self {
        Self { dates, mask }
    }

    /// Wraps a date matrix with an all-`true` mask.
    pub fn unmasked(dates: EventDateMatrix<D>) -> Self {
        let mask = ValidityMask::from_elem(dates.raw_dim(), true);
        Self { dates, mask }
    }
}

/// Supplies event-date columns for a window.
///
/// Implemented by the pipeline engine or data loader that owns storage.
/// Returned data belongs to the caller; a source must not hand out
/// buffers it later mutates.
pub trait ColumnSource {
    /// Date or timestamp type the source produces.
    type Date: DayResolution;

    /// Loads `column` for every `(date, asset)` cell of `window`.
    ///
    /// # Errors
    ///
    /// Returns [`FactorError::MissingColumn`] if the column is unknown to the
    /// source, or [`FactorError::Source`] for any other failure.
    fn load(
        &self,
        column: &EventColumn,
        window: &ComputationWindow,
    ) -> Result<ColumnData<Self::Date>, FactorError>;
}

/// A [`ColumnSource`] holding pre-aligned columns in memory.
///
/// Every stored column is returned as-is regardless of the window; the
/// factor checks the shape.
#[derive(Debug, Clone)]
pub struct InMemorySource<D = NaiveDate> {
    columns: BTreeMap<EventColumn, ColumnData<D>>,
}

impl<D> InMemorySource<D> {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    /// Stores `data` for `column`, replacing any previous entry.
    pub fn insert(&mut self, column: EventColumn, data: ColumnData<D>) {
        self.columns.insert(column, data);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_column(mut self, column: EventColumn, data: ColumnData<D>) -> Self {
        self.insert(column, data);
        self
    }
}

impl<D> Default for InMemorySource<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DayResolution> ColumnSource for InMemorySource<D> {
    type Date = D;

    fn load(
        &self,
        column: &EventColumn,
        _window: &ComputationWindow,
    ) -> Result<ColumnData<D>, FactorError> {
        self.columns
            .get(column)
            .cloned()
            .ok_or_else(|| FactorError::MissingColumn {
                column: column.clone(),
            })
    }
}
