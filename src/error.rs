//! Error type for the almanac facade.

use almanac_factors::FactorError;
use almanac_proximity::ProximityError;

/// Error type for configuration loading and window evaluation.
#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    /// Returned when the TOML document cannot be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Returned when a configuration value is not recognized.
    #[error("invalid value '{value}' for {field}")]
    InvalidValue {
        /// Dotted path of the offending key.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Wrapped error from the factors crate.
    #[error(transparent)]
    Factor(#[from] FactorError),

    /// Wrapped error from the proximity crate.
    #[error(transparent)]
    Proximity(#[from] ProximityError),

    /// Returned when one factor of a window evaluation fails.
    #[error("factor '{factor}' failed: {source}")]
    Evaluation {
        /// Name of the failing factor.
        factor: String,
        /// Underlying failure.
        #[source]
        source: FactorError,
    },
}
