//! Event proximity factors.
//!
//! A factor is a declarative binding of an upstream event-date column to a
//! direction. All factors share the kernel in `almanac-proximity`:
//!
//! | Factor | Column | Direction |
//! |--------|--------|-----------|
//! | `business_days_until_next_earnings` | `EarningsCalendar.next_announcement` | until |
//! | `business_days_since_previous_earnings` | `EarningsCalendar.previous_announcement` | since |
//! | `business_days_since_previous_cash_buyback_auth` | `CashBuybackAuthorizations.previous_announcement_date` | since |
//! | `business_days_since_previous_share_buyback_auth` | `ShareBuybackAuthorizations.previous_announcement_date` | since |
//!
//! Counts are business days, not trading days. A trading calendar would
//! leak closures that were not known on the evaluation date.
//!
//! # Quick start
//!
//! ```
//! use almanac_factors::{ColumnData, EventColumn, FactorRegistry, InMemorySource};
//! use almanac_proximity::{ComputationWindow, ProximityConfig, Sid};
//! use chrono::NaiveDate;
//! use ndarray::Array2;
//!
//! let thu = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
//! let fri = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let mon = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
//! let window = ComputationWindow::new(vec![thu, fri], vec![Sid(24)]).unwrap();
//!
//! let source = InMemorySource::new().with_column(
//!     EventColumn::new("EarningsCalendar", "next_announcement"),
//!     ColumnData::unmasked(Array2::from_elem((2, 1), Some(mon))),
//! );
//!
//! let registry = FactorRegistry::builtin();
//! let factor = registry.get("business_days_until_next_earnings").unwrap();
//! let out = factor
//!     .compute_from(&source, &window, &ProximityConfig::default())
//!     .unwrap();
//! assert_eq!(out.column(0).to_vec(), vec![2.0, 1.0]);
//! ```

pub mod binding;
pub mod column;
pub mod error;
pub mod registry;
pub mod source;

pub use binding::EventProximityFactor;
pub use column::EventColumn;
pub use error::FactorError;
pub use registry::FactorRegistry;
pub use source::{ColumnData, ColumnSource, InMemorySource};

pub use almanac_proximity::Direction;
