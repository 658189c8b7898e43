//! # almanac-calendar
//!
//! Pure date arithmetic for the weekday-only business calendar.
//!
//! A business day is any Monday through Friday. Holidays are deliberately
//! not modelled: a holiday calendar carries information (e.g. an unscheduled
//! market closure) that would not have been known on the evaluation date.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDateTime"] -->|"DayResolution::to_day()"| B["NaiveDate"]
//!     B -->|"business_day_ordinal()"| C["i64 ordinal"]
//!     C -->|"difference"| D["business_day_distance()"]
//!     B -->|"day_sequence()"| E["Vec of NaiveDate"]
//!     B -->|"business_day_sequence()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{business_day_distance, business_day_sequence};
//! use chrono::NaiveDate;
//!
//! // Fri 2024-01-05 -> Mon 2024-01-08 spans a weekend: one business day.
//! let fri = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let mon = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
//! assert_eq!(business_day_distance(fri, mon), 1);
//!
//! let week = business_day_sequence(mon, 5);
//! assert_eq!(week.len(), 5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `busday` | Business-day predicate, ordinal and signed distance |
//! | `resolution` | Day-resolution coercion of timestamps |
//! | `sequence` | Calendar and business-day sequence generation |
//! | `error` | Error types |

mod busday;
mod error;
mod resolution;
mod sequence;

pub use busday::{business_day_distance, business_day_ordinal, is_business_day};
pub use error::CalendarError;
pub use resolution::{DayResolution, Truncation};
pub use sequence::{business_day_sequence, day_sequence};
