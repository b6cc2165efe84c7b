//! models::production — turn flow probabilities into expected migrant counts.
//!
//! Each origin sends out `population[i] · beta` migrants, split over
//! destinations by its row of the probability matrix:
//!
//! ```text
//! F[i][j] = P[i][j] · population[i] · beta
//! ```

use crate::core::{
    errors::{FlowError, FlowResult},
    sanitize::finalize,
    validation::{validate_features, validate_pairwise_shape},
};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

/// Share of a location's population assumed to migrate per period.
pub const DEFAULT_MIGRATION_RATE: f64 = 0.03;

/// Expected flows from a (typically row-stochastic) probability matrix.
///
/// Errors
/// ------
/// - `FlowError::EmptyInput`/`FlowError::InvalidArgument` from the
///   population guard.
/// - `FlowError::ShapeMismatch` if `probabilities` has a different number
///   of rows than `population` has entries.
/// - `FlowError::InvalidArgument` if `beta` is negative or non-finite.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use mobility_flows::models::production::expected_flows;
/// let population = array![100.0, 200.0];
/// let p = array![[0.0, 1.0], [0.5, 0.5]];
/// let flows = expected_flows(population.view(), p.view(), 0.5).unwrap();
/// assert_eq!(flows, array![[0.0, 50.0], [50.0, 50.0]]);
/// ```
pub fn expected_flows(
    population: ArrayView1<'_, f64>, probabilities: ArrayView2<'_, f64>, beta: f64,
) -> FlowResult<Array2<f64>> {
    validate_features("population", population)?;
    let n = population.len();
    validate_pairwise_shape(
        "probability rows",
        "probability columns",
        probabilities,
        n,
        probabilities.ncols(),
    )?;
    if !beta.is_finite() || beta < 0.0 {
        return Err(FlowError::InvalidArgument {
            name: "beta",
            value: beta.to_string(),
            reason: "Migration rate must be finite and non-negative.",
        });
    }

    debug!(n, m = probabilities.ncols(), beta, "expected flows");
    let emigrants = population.mapv(|v| v * beta).insert_axis(Axis(1));
    finalize(&probabilities * &emigrants, false, false)
}
