//! The rectangular (dates × assets) window a computation runs over.

use chrono::NaiveDate;

use crate::error::ProximityError;

/// Opaque instrument identifier. Only its position in the window matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sid(pub u64);

/// Row and column labels for one computation.
///
/// `dates` are strictly increasing; `assets` give the column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationWindow {
    dates: Vec<NaiveDate>,
    assets: Vec<Sid>,
}

impl ComputationWindow {
    /// Creates a window after checking that `dates` are strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::UnsortedDates`] at the first date that
    /// does not follow its predecessor.
    pub fn new(dates: Vec<NaiveDate>, assets: Vec<Sid>) -> Result<Self, ProximityError> {
        if let Some(index) = dates.windows(2).position(|w| w[0] >= w[1]) {
            return Err(ProximityError::UnsortedDates {
                index: index + 1,
                previous: dates[index],
                current: dates[index + 1],
            });
        }
        Ok(Self { dates, assets })
    }

    /// Returns the row labels.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the column labels.
    pub fn assets(&self) -> &[Sid] {
        &self.assets
    }

    /// Returns `(n_dates, n_assets)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.dates.len(), self.assets.len())
    }

    /// Checks that an input matrix matches the window.
    pub fn check_shape(&self, input: &'static str, got: (usize, usize)) -> Result<(), ProximityError> {
        let expected = self.shape();
        if got != expected {
            return Err(ProximityError::ShapeMismatch {
                input,
                expected,
                got,
            });
        }
        Ok(())
    }
}
