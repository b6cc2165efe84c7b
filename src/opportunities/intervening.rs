//! opportunities::intervening — intervening-opportunities matrix `S`.
//!
//! Purpose
//! -------
//! For every ordered pair `(i, j)`, compute the total mass of locations
//! strictly closer to origin `i` than destination `j`, excluding `i`
//! itself. Radiation-family models consume this matrix; it can be built
//! once and shared read-only across many model calls.
//!
//! Algorithm
//! ---------
//! For each origin `i`:
//! 1. Rank all `n` locations by `distance[i][·]`, ties by location index
//!    (see [`ranking`](crate::opportunities::ranking)). Under normal
//!    inputs position 0 is `i` itself (distance 0).
//! 2. Walk the ranking from position 1, keeping a running sum of masses
//!    seen so far (starting at 0). Assign `S[i][k] = running sum` for the
//!    location `k` at the current position, then add `features[k]`.
//!
//! The location in position 0 keeps `S = 0` and its mass is never added.
//! When several locations sit at distance 0 from `i`, the lowest index
//! among them takes position 0, which need not be `i`; no further
//! tie-breaking is applied.
//!
//! Two code paths
//! --------------
//! - [`ComputeMode::Vectorized`]: one ranking per origin, then a
//!   cumulative-sum pass over the gathered masses and a scatter back into
//!   the row. Rows run in parallel with the `parallel` feature.
//! - [`ComputeMode::Reference`]: per origin, an arena of
//!   `(distance, index)` pairs is sorted with the same total order and
//!   walked with an explicit running sum.
//!
//! Both accumulate in the same order, so they agree exactly; the test
//! suite enforces agreement within `1e-4`.
//!
//! Complexity
//! ----------
//! `O(n² log n)` time, `O(n²)` memory for the output.

use crate::{
    core::{
        errors::FlowResult,
        options::ComputeMode,
        validation::{validate_features, validate_pairwise_shape, validate_rankable},
    },
    opportunities::ranking::{by_distance_then_index, rank_by_distance},
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1, Axis, Zip};
use tracing::debug;

/// Build the `n×n` intervening-opportunities matrix.
///
/// Parameters
/// ----------
/// - `features`: `ArrayView1<f64>`
///   Mass of each of the `n` locations; finite and non-negative.
/// - `distance`: `ArrayView2<f64>`
///   `n×n` distances, `distance[i][j]` from `i` to `j`. Need not be
///   symmetric. NaN entries are rejected; +∞ ranks last.
/// - `mode`: [`ComputeMode`]
///   Vectorized (default) or reference implementation.
///
/// Returns
/// -------
/// `FlowResult<Array2<f64>>`
///   `S` with `S[i][j]` = mass strictly closer to `i` than `j`.
///
/// Errors
/// ------
/// - `FlowError::EmptyInput` when `features` is empty.
/// - `FlowError::InvalidArgument` for negative/non-finite masses or NaN
///   distances.
/// - `FlowError::ShapeMismatch` when `distance` is not `n×n`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use mobility_flows::core::options::ComputeMode;
/// # use mobility_flows::opportunities::intervening::intervening_opportunities;
/// let features = array![2.0, 3.0, 5.0];
/// let distance = array![[0.0, 1.0, 2.0], [1.0, 0.0, 1.0], [2.0, 1.0, 0.0]];
/// let s = intervening_opportunities(features.view(), distance.view(), ComputeMode::Vectorized)
///     .unwrap();
/// assert_eq!(s.row(0).to_vec(), vec![0.0, 0.0, 3.0]);
/// ```
pub fn intervening_opportunities(
    features: ArrayView1<'_, f64>, distance: ArrayView2<'_, f64>, mode: ComputeMode,
) -> FlowResult<Array2<f64>> {
    validate_features("features", features)?;
    let n = features.len();
    validate_pairwise_shape("distance rows", "distance columns", distance, n, n)?;
    validate_rankable(distance)?;

    debug!(n, ?mode, "computing intervening opportunities");
    let s = match mode {
        ComputeMode::Vectorized => vectorized(features, distance),
        ComputeMode::Reference => reference(features, distance),
    };
    Ok(s)
}

fn vectorized(features: ArrayView1<'_, f64>, distance: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = features.len();
    let mut s = Array2::<f64>::zeros((n, n));

    #[cfg(feature = "parallel")]
    Zip::from(s.rows_mut())
        .and(distance.rows())
        .par_for_each(|s_row, d_row| fill_row(s_row, features, d_row));
    #[cfg(not(feature = "parallel"))]
    Zip::from(s.rows_mut())
        .and(distance.rows())
        .for_each(|s_row, d_row| fill_row(s_row, features, d_row));

    s
}

/// Fill one row of `S` (already zeroed) from one row of distances.
fn fill_row(
    mut s_row: ArrayViewMut1<'_, f64>, features: ArrayView1<'_, f64>, d_row: ArrayView1<'_, f64>,
) {
    let n = features.len();
    if n < 2 {
        return;
    }
    let order = rank_by_distance(d_row);

    // Mass met before reaching positions 2..n; positions 0 and 1 stay at 0.
    let mut ahead: Array1<f64> = order[1..n - 1].iter().map(|&k| features[k]).collect();
    ahead.accumulate_axis_inplace(Axis(0), |&prev, curr| *curr += prev);

    for (&k, &opportunities) in order[2..].iter().zip(ahead.iter()) {
        s_row[k] = opportunities;
    }
}

fn reference(features: ArrayView1<'_, f64>, distance: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = features.len();
    let mut s = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        let mut arena: Vec<(f64, usize)> = (0..n).map(|j| (distance[[i, j]], j)).collect();
        arena.sort_by(|&a, &b| by_distance_then_index(a, b));

        let mut running = 0.0;
        for &(_, j) in arena.iter().skip(1) {
            s[[i, j]] = running;
            running += features[j];
        }
    }
    s
}
