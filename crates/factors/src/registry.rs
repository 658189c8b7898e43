//! Flat name → binding registry.

use std::collections::BTreeMap;

use almanac_proximity::Direction;

use crate::binding::EventProximityFactor;
use crate::column::EventColumn;
use crate::error::FactorError;

/// Built-in bindings as `(name, dataset, field, direction)`.
#[rustfmt::skip]
const BUILTIN: [(&str, &str, &str, Direction); 4] = [
    ("business_days_until_next_earnings", "EarningsCalendar", "next_announcement", Direction::Until),
    ("business_days_since_previous_earnings", "EarningsCalendar", "previous_announcement", Direction::Since),
    ("business_days_since_previous_cash_buyback_auth", "CashBuybackAuthorizations", "previous_announcement_date", Direction::Since),
    ("business_days_since_previous_share_buyback_auth", "ShareBuybackAuthorizations", "previous_announcement_date", Direction::Since),
];

/// Name-ordered collection of [`EventProximityFactor`] bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorRegistry {
    factors: BTreeMap<String, EventProximityFactor>,
}

impl FactorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the earnings and buyback factors.
    pub fn builtin() -> Self {
        let factors = BUILTIN
            .iter()
            .map(|&(name, dataset, field, direction)| {
                let factor =
                    EventProximityFactor::new(name, EventColumn::new(dataset, field), direction);
                (name.to_string(), factor)
            })
            .collect();
        Self { factors }
    }

    /// Adds a binding.
    ///
    /// # Errors
    ///
    /// Returns [`FactorError::DuplicateFactor`] if the name is taken.
    pub fn register(&mut self, factor: EventProximityFactor) -> Result<(), FactorError> {
        if self.factors.contains_key(factor.name()) {
            return Err(FactorError::DuplicateFactor {
                name: factor.name().to_string(),
            });
        }
        self.factors.insert(factor.name().to_string(), factor);
        Ok(())
    }

    /// Looks up a binding by name.
    ///
    /// # Errors
    ///
    /// Returns [`FactorError::UnknownFactor`] if no binding has that name.
    pub fn get(&self, name: &str) -> Result<&EventProximityFactor, FactorError> {
        self.factors
            .get(name)
            .ok_or_else(|| FactorError::UnknownFactor {
                name: name.to_string(),
            })
    }

    /// Iterates over bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = &EventProximityFactor> {
        self.factors.values()
    }

    /// Returns the registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factors.keys().map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns `true` if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
