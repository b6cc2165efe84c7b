//! models::gravity — gravity model of spatial interaction.
//!
//! Flow from origin `i` to destination `j` is proportional to the product
//! of their masses and inversely proportional to a distance penalty:
//!
//! ```text
//! P[i][j] = origins[i] · destinations[j] / f(distance[i][j])
//! f(d) = d^α          (Decay::Power)
//! f(d) = exp(α · d)   (Decay::Exponential)
//! ```
//!
//! The raw matrix is passed through [`finalize`]; a zero distance under
//! power decay produces `x / 0`, which the sanitizer maps to 0. With
//! normalization on, that infinite entry empties its whole row unless
//! `zero_diagonal` clears it first.

use crate::core::{
    errors::FlowResult,
    options::{ComputeMode, Decay, FlowOptions},
    sanitize::finalize,
    validation::{require_square, validate_exponent, validate_features, validate_pairwise_shape},
};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

/// Gravity-model flow matrix.
///
/// Parameters
/// ----------
/// - `origins`: `ArrayView1<f64>`, `n` origin masses.
/// - `destinations`: `ArrayView1<f64>`, `m` destination masses.
/// - `distance`: `ArrayView2<f64>`, `n×m` distances.
/// - `alpha`: `f64`, decay exponent, any finite value.
/// - `decay`: [`Decay`], power or exponential penalty. Parse with
///   `"power".parse::<Decay>()` to get `InvalidArgument` on unknown names.
/// - `opts`: [`FlowOptions`], controls the diagonal, normalization and compute mode.
///
/// Errors
/// ------
/// - `FlowError::EmptyInput`, `FlowError::InvalidArgument` from the mass
///   and exponent guards.
/// - `FlowError::ShapeMismatch` if `distance` is not `n×m`, or if
///   `opts.zero_diagonal` is set and `n != m`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use mobility_flows::core::options::{ComputeMode, Decay, FlowOptions};
/// # use mobility_flows::models::gravity::gravity_model;
/// let masses = array![2.0, 3.0, 5.0];
/// let distance = array![[0.0, 1.0, 2.0], [1.0, 0.0, 1.0], [2.0, 1.0, 0.0]];
/// let opts = FlowOptions::new(false, false, ComputeMode::Vectorized);
/// let p = gravity_model(masses.view(), masses.view(), distance.view(), 1.0, Decay::Power, &opts)
///     .unwrap();
/// assert_eq!(p.row(0).to_vec(), vec![0.0, 6.0, 5.0]);
/// ```
pub fn gravity_model(
    origins: ArrayView1<'_, f64>, destinations: ArrayView1<'_, f64>,
    distance: ArrayView2<'_, f64>, alpha: f64, decay: Decay, opts: &FlowOptions,
) -> FlowResult<Array2<f64>> {
    validate_features("origins", origins)?;
    validate_features("destinations", destinations)?;
    let (n, m) = (origins.len(), destinations.len());
    validate_pairwise_shape("distance rows", "distance columns", distance, n, m)?;
    validate_exponent("alpha", alpha)?;
    if opts.zero_diagonal {
        require_square("destinations (zero_diagonal requires n == m)", n, m)?;
    }

    debug!(n, m, alpha, ?decay, ?opts, "gravity model");
    let raw = match opts.mode {
        ComputeMode::Vectorized => vectorized(origins, destinations, distance, alpha, decay),
        ComputeMode::Reference => reference(origins, destinations, distance, alpha, decay),
    };
    finalize(raw, opts.zero_diagonal, opts.normalize)
}

fn vectorized(
    origins: ArrayView1<'_, f64>, destinations: ArrayView1<'_, f64>,
    distance: ArrayView2<'_, f64>, alpha: f64, decay: Decay,
) -> Array2<f64> {
    let numerator = &origins.insert_axis(Axis(1)) * &destinations.insert_axis(Axis(0));
    let denominator = distance.mapv(|d| decay.penalty(d, alpha));
    numerator / denominator
}

fn reference(
    origins: ArrayView1<'_, f64>, destinations: ArrayView1<'_, f64>,
    distance: ArrayView2<'_, f64>, alpha: f64, decay: Decay,
) -> Array2<f64> {
    let (n, m) = (origins.len(), destinations.len());
    let mut p = Array2::<f64>::zeros((n, m));
    for i in 0..n {
        for j in 0..m {
            p[[i, j]] = origins[i] * destinations[j] / decay.penalty(distance[[i, j]], alpha);
        }
    }
    p
}
