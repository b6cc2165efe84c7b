//! models::radiation — parameter-free radiation model.
//!
//! ```text
//! P[i][j] = o_i · d_j / ((s_ij + o_i) · (s_ij + o_i + d_j))
//! ```
//!
//! where `o` are origin masses, `d` destination masses, and `s` the
//! intervening-opportunities matrix. Zero masses give `0/0` terms, which
//! the sanitizer maps to 0.

use crate::core::{
    errors::FlowResult,
    options::{ComputeMode, FlowOptions},
    sanitize::finalize,
    validation::{require_square, validate_features, validate_pairwise_shape},
};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

/// Radiation-model flow matrix.
///
/// Parameters
/// ----------
/// - `origins`: `ArrayView1<f64>`, `n` origin masses.
/// - `destinations`: `ArrayView1<f64>`, `m` destination masses.
/// - `s`: `ArrayView2<f64>`, `n×m` intervening opportunities, usually
///   from [`intervening_opportunities`](crate::opportunities::intervening_opportunities).
/// - `opts`: [`FlowOptions`].
///
/// Errors
/// ------
/// - `FlowError::EmptyInput`/`FlowError::InvalidArgument` from the mass
///   guards.
/// - `FlowError::ShapeMismatch` if `s` is not `n×m`, or if
///   `opts.zero_diagonal` is set and `n != m`.
pub fn radiation_model(
    origins: ArrayView1<'_, f64>, destinations: ArrayView1<'_, f64>, s: ArrayView2<'_, f64>,
    opts: &FlowOptions,
) -> FlowResult<Array2<f64>> {
    validate_features("origins", origins)?;
    validate_features("destinations", destinations)?;
    let (n, m) = (origins.len(), destinations.len());
    validate_pairwise_shape("opportunities rows", "opportunities columns", s, n, m)?;
    if opts.zero_diagonal {
        require_square("destinations (zero_diagonal requires n == m)", n, m)?;
    }

    debug!(n, m, ?opts, "radiation model");
    let raw = match opts.mode {
        ComputeMode::Vectorized => vectorized(origins, destinations, s),
        ComputeMode::Reference => reference(origins, destinations, s),
    };
    finalize(raw, opts.zero_diagonal, opts.normalize)
}

fn vectorized(
    origins: ArrayView1<'_, f64>, destinations: ArrayView1<'_, f64>, s: ArrayView2<'_, f64>,
) -> Array2<f64> {
    let o = origins.insert_axis(Axis(1));
    let d = destinations.insert_axis(Axis(0));

    let numerator = &o * &d;
    let inner = &s + &o;
    let outer = &inner + &d;
    numerator / (inner * outer)
}

fn reference(
    origins: ArrayView1<'_, f64>, destinations: ArrayView1<'_, f64>, s: ArrayView2<'_, f64>,
) -> Array2<f64> {
    let (n, m) = (origins.len(), destinations.len());
    let mut p = Array2::<f64>::zeros((n, m));
    for i in 0..n {
        for j in 0..m {
            let inner = s[[i, j]] + origins[i];
            let outer = inner + destinations[j];
            p[[i, j]] = origins[i] * destinations[j] / (inner * outer);
        }
    }
    p
}
