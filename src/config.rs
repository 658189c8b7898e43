//! TOML configuration for proximity computations and extra factor bindings.
//!
//! ```toml
//! include_builtin = true
//!
//! [proximity]
//! truncation = "exact"      # or "floor"
//! ordering = "unchecked"    # or "strict"
//! parallel = true
//! parallel_min_cells = 65536
//!
//! [[factors]]
//! name = "business_days_until_next_ex_dividend"
//! column = "Dividends.next_ex_date"
//! direction = "until"
//! ```

use almanac_factors::{EventColumn, EventProximityFactor, FactorRegistry};
use almanac_proximity::{Direction, OrderingPolicy, ProximityConfig, Truncation};
use serde::Deserialize;

use crate::error::AlmanacError;

/// Top-level almanac configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Whether the earnings and buyback factors are registered.
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Kernel settings.
    #[serde(default)]
    pub proximity: ProximityToml,

    /// Additional factor bindings.
    #[serde(default)]
    pub factors: Vec<FactorToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProximityToml {
    #[serde(default = "default_truncation")]
    pub truncation: String,
    #[serde(default = "default_ordering")]
    pub ordering: String,
    #[serde(default = "default_true")]
    pub parallel: bool,
    #[serde(default = "default_parallel_min_cells")]
    pub parallel_min_cells: usize,
}

impl Default for ProximityToml {
    fn default() -> Self {
        Self {
            truncation: default_truncation(),
            ordering: default_ordering(),
            parallel: true,
            parallel_min_cells: default_parallel_min_cells(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactorToml {
    pub name: String,
    pub column: String,
    pub direction: String,
}

fn default_true() -> bool {
    true
}
fn default_truncation() -> String {
    "exact".to_string()
}
fn default_ordering() -> String {
    "unchecked".to_string()
}
fn default_parallel_min_cells() -> usize {
    ProximityConfig::new().parallel_min_cells()
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            proximity: ProximityToml::default(),
            factors: Vec::new(),
        }
    }
}

impl AlmanacConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, AlmanacError> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the kernel configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::InvalidValue`] for unrecognized `truncation`
    /// or `ordering` names, and [`AlmanacError::Proximity`] if the result
    /// does not validate.
    pub fn proximity_config(&self) -> Result<ProximityConfig, AlmanacError> {
        let truncation = match self.proximity.truncation.as_str() {
            "exact" => Truncation::Exact,
            "floor" => Truncation::Floor,
            other => {
                return Err(AlmanacError::InvalidValue {
                    field: "proximity.truncation",
                    value: other.to_string(),
                });
            }
        };
        let ordering = match self.proximity.ordering.as_str() {
            "unchecked" => OrderingPolicy::Unchecked,
            "strict" => OrderingPolicy::Strict,
            other => {
                return Err(AlmanacError::InvalidValue {
                    field: "proximity.ordering",
                    value: other.to_string(),
                });
            }
        };
        let config = ProximityConfig::new()
            .with_truncation(truncation)
            .with_ordering(ordering)
            .with_parallel(self.proximity.parallel)
            .with_parallel_min_cells(self.proximity.parallel_min_cells);
        config.validate()?;
        Ok(config)
    }

    /// Builds the factor registry: the built-ins (unless disabled) plus
    /// every `[[factors]]` entry.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::Factor`] for malformed columns or duplicate
    /// names, and [`AlmanacError::Proximity`] for unknown directions.
    pub fn registry(&self) -> Result<FactorRegistry, AlmanacError> {
        let mut registry = if self.include_builtin {
            FactorRegistry::builtin()
        } else {
            FactorRegistry::new()
        };
        for entry in &self.factors {
            let column: EventColumn = entry.column.parse()?;
            let direction: Direction = entry.direction.parse()?;
            registry.register(EventProximityFactor::new(&entry.name, column, direction))?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_factors::FactorError;
    use almanac_proximity::ProximityError;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AlmanacConfig::from_toml_str("").unwrap();
        assert!(config.include_builtin);
        assert!(config.factors.is_empty());

        let proximity = config.proximity_config().unwrap();
        assert_eq!(proximity.truncation(), Truncation::Exact);
        assert_eq!(proximity.ordering(), OrderingPolicy::Unchecked);
        assert!(proximity.parallel());
        assert_eq!(proximity.parallel_min_cells(), 65_536);

        assert_eq!(config.registry().unwrap().len(), 4);
    }

    #[test]
    fn full_document() {
        let text = r#"
            include_builtin = false

            [proximity]
            truncation = "floor"
            ordering = "strict"
            parallel = false
            parallel_min_cells = 128

            [[factors]]
            name = "business_days_until_next_ex_dividend"
            column = "Dividends.next_ex_date"
            direction = "until"
        "#;
        let config = AlmanacConfig::from_toml_str(text).unwrap();

        let proximity = config.proximity_config().unwrap();
        assert_eq!(proximity.truncation(), Truncation::Floor);
        assert_eq!(proximity.ordering(), OrderingPolicy::Strict);
        assert!(!proximity.parallel());
        assert_eq!(proximity.parallel_min_cells(), 128);

        let registry = config.registry().unwrap();
        assert_eq!(registry.len(), 1);
        let factor = registry.get("business_days_until_next_ex_dividend").unwrap();
        assert_eq!(factor.direction(), Direction::Until);
        assert_eq!(factor.column().to_string(), "Dividends.next_ex_date");
    }

    #[test]
    fn unknown_key_rejected() {
        let err = AlmanacConfig::from_toml_str("[proximity]\nholidays = true\n").unwrap_err();
        assert!(matches!(err, AlmanacError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn unknown_ordering_rejected() {
        let config = AlmanacConfig::from_toml_str("[proximity]\nordering = \"lenient\"\n").unwrap();
        assert!(matches!(
            config.proximity_config(),
            Err(AlmanacError::InvalidValue {
                field: "proximity.ordering",
                ..
            })
        ));
    }

    #[test]
    fn zero_threshold_rejected() {
        let config =
            AlmanacConfig::from_toml_str("[proximity]\nparallel_min_cells = 0\n").unwrap();
        assert!(matches!(
            config.proximity_config(),
            Err(AlmanacError::Proximity(ProximityError::InvalidConfig { .. }))
        ));
    }

    #[test]
    fn duplicate_of_builtin_rejected() {
        let text = r#"
            [[factors]]
            name = "business_days_since_previous_earnings"
            column = "EarningsCalendar.previous_announcement"
            direction = "since"
        "#;
        let config = AlmanacConfig::from_toml_str(text).unwrap();
        assert!(matches!(
            config.registry(),
            Err(AlmanacError::Factor(FactorError::DuplicateFactor { .. }))
        ));
    }

    #[test]
    fn bad_direction_rejected() {
        let text = r#"
            [[factors]]
            name = "x"
            column = "Dividends.next_ex_date"
            direction = "around"
        "#;
        let config = AlmanacConfig::from_toml_str(text).unwrap();
        assert!(matches!(
            config.registry(),
            Err(AlmanacError::Proximity(ProximityError::UnknownDirection { .. }))
        ));
    }

    #[test]
    fn bad_column_rejected() {
        let text = r#"
            [[factors]]
            name = "x"
            column = "no_dot"
            direction = "since"
        "#;
        let config = AlmanacConfig::from_toml_str(text).unwrap();
        assert!(matches!(
            config.registry(),
            Err(AlmanacError::Factor(FactorError::InvalidColumn { .. }))
        ));
    }
}
