//! # almanac
//!
//! Business-day distances from trading days to corporate events.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["AlmanacConfig (TOML)"] -->|"registry()"| B["FactorRegistry"]
//!     A -->|"proximity_config()"| C["ProximityConfig"]
//!     B -->|"evaluate_window()"| D["EventProximityFactor"]
//!     E["ColumnSource"] -->|"load()"| D
//!     D -->|"proximity()"| F["DistanceMatrix"]
//!     C --> F
//! ```
//!
//! ## Crates
//!
//! | Crate | Description |
//! |-------|-------------|
//! | `almanac-calendar` | Weekday-only business-day arithmetic, day coercion |
//! | `almanac-proximity` | Copy-on-mask, coercion and the distance kernel |
//! | `almanac-factors` | Declarative factor bindings and registry |
//!
//! ## Quick Start
//!
//! ```
//! use almanac::{AlmanacConfig, evaluate_window};
//! use almanac::factors::{ColumnData, InMemorySource};
//! use almanac::proximity::{ComputationWindow, Sid};
//! use chrono::NaiveDate;
//! use ndarray::Array2;
//!
//! let config = AlmanacConfig::from_toml_str("include_builtin = true").unwrap();
//! let registry = config.registry().unwrap();
//!
//! let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let window = ComputationWindow::new(vec![mon], vec![Sid(1)]).unwrap();
//! let mut source = InMemorySource::new();
//! for name in registry.names() {
//!     let column = registry.get(name).unwrap().column().clone();
//!     source.insert(column, ColumnData::unmasked(Array2::from_elem((1, 1), Some(mon))));
//! }
//!
//! let outputs =
//!     evaluate_window(&registry, &source, &window, &config.proximity_config().unwrap()).unwrap();
//! assert!(outputs.values().all(|m| m[[0, 0]] == 0.0));
//! ```

mod config;
mod error;
mod evaluate;

pub use config::{AlmanacConfig, FactorToml, ProximityToml};
pub use error::AlmanacError;
pub use evaluate::{FactorOutputs, evaluate_window};

pub use almanac_calendar as calendar;
pub use almanac_factors as factors;
pub use almanac_proximity as proximity;
