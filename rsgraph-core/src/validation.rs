//! Argument validation shared by the generators.

use std::num::NonZeroUsize;

use tracing::warn;

use crate::error::{GraphError, Result};

/// Accepts finite probabilities in `[0, 1]`.
pub(crate) fn probability(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        warn!(parameter, value, "rejecting probability outside [0, 1]");
        Err(GraphError::invalid(
            parameter,
            format!("must be a probability in [0, 1] (got {value})"),
        ))
    }
}

/// Accepts sizes of at least one.
pub(crate) fn positive(parameter: &'static str, value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or_else(|| {
        warn!(parameter, "rejecting zero size");
        GraphError::invalid(parameter, "must be at least 1 (got 0)")
    })
}

/// Sums `sizes` into a node count of at least one.
pub(crate) fn node_total(parameter: &'static str, sizes: &[usize]) -> Result<NonZeroUsize> {
    let Some(total) = sizes
        .iter()
        .try_fold(0_usize, |acc, &size| acc.checked_add(size))
    else {
        warn!(parameter, "rejecting sizes that overflow the node count");
        return Err(GraphError::invalid(
            parameter,
            "sizes overflow the node count",
        ));
    };
    positive(parameter, total)
}
