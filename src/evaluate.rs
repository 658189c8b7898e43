//! Evaluate every factor of a registry over one window.

use std::collections::BTreeMap;

use almanac_factors::{ColumnSource, EventProximityFactor, FactorError, FactorRegistry};
use almanac_proximity::{ComputationWindow, DistanceMatrix, ProximityConfig};
use rayon::prelude::*;
use tracing::{info, info_span};

use crate::error::AlmanacError;

/// Factor outputs for one window, keyed by factor name.
pub type FactorOutputs = BTreeMap<String, DistanceMatrix>;

/// Computes every factor in `registry` over `window`.
///
/// Factors are independent and run on the rayon pool when
/// `config.parallel()` is set. Failures are reported for the first failing
/// factor in name order, so the outcome does not depend on scheduling.
///
/// # Errors
///
/// Returns [`AlmanacError::Proximity`] if `config` does not validate, or
/// [`AlmanacError::Evaluation`] naming the first factor that failed.
#[tracing::instrument(
    skip_all,
    fields(n_factors = registry.len(), rows = window.shape().0, cols = window.shape().1)
)]
pub fn evaluate_window<S>(
    registry: &FactorRegistry,
    source: &S,
    window: &ComputationWindow,
    config: &ProximityConfig,
) -> Result<FactorOutputs, AlmanacError>
where
    S: ColumnSource + Sync,
{
    config.validate()?;

    let factors: Vec<&EventProximityFactor> = registry.iter().collect();
    let run = |factor: &&EventProximityFactor| -> Result<DistanceMatrix, FactorError> {
        let _span = info_span!("factor", name = factor.name()).entered();
        factor.compute_from(source, window, config)
    };
    let results: Vec<Result<DistanceMatrix, FactorError>> = if config.parallel() {
        factors.par_iter().map(run).collect()
    } else {
        factors.iter().map(run).collect()
    };

    let mut outputs = FactorOutputs::new();
    for (factor, result) in factors.into_iter().zip(results) {
        let matrix = result.map_err(|source| AlmanacError::Evaluation {
            factor: factor.name().to_string(),
            source,
        })?;
        outputs.insert(factor.name().to_string(), matrix);
    }
    info!(n_outputs = outputs.len(), "window evaluated");
    Ok(outputs)
}
