//! References to upstream event-date columns.

use std::fmt;
use std::str::FromStr;

use crate::error::FactorError;

/// A `Dataset.field` reference to an event-date column supplied by the
/// surrounding pipeline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventColumn {
    dataset: String,
    field: String,
}

impl EventColumn {
    /// Creates a column reference.
    pub fn new(dataset: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            field: field.into(),
        }
    }

    /// Returns the dataset name.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Returns the field name within the dataset.
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl fmt::Display for EventColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.dataset, self.field)
    }
}

impl FromStr for EventColumn {
    type Err = FactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FactorError::InvalidColumn {
            text: s.to_string(),
        };
        let (dataset, field) = s.split_once('.').ok_or_else(invalid)?;
        let valid = |part: &str| {
            !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        };
        if !valid(dataset) || !valid(field) {
            return Err(invalid());
        }
        Ok(Self::new(dataset, field))
    }
}
