//! distance::haversine — great-circle distances on a spherical Earth.
//!
//! For two points with latitudes `φ₁, φ₂` and longitudes `λ₁, λ₂` (radians):
//!
//! ```text
//! h = sin²((φ₂ − φ₁)/2) + cos φ₁ · cos φ₂ · sin²((λ₂ − λ₁)/2)
//! d = 2 · R · asin(√h)
//! ```

use crate::core::{
    errors::{FlowError, FlowResult},
    validation::require_square,
};
use ndarray::{Array2, ArrayView1};
use tracing::debug;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Symmetric great-circle distance matrix with a zero diagonal.
///
/// Parameters
/// ----------
/// - `latitudes`: `ArrayView1<f64>`
///   Latitude of each location in degrees, within `[-90, 90]`.
/// - `longitudes`: `ArrayView1<f64>`
///   Longitude of each location in degrees; any finite value.
///
/// Returns
/// -------
/// `FlowResult<Array2<f64>>`
///   `n×n` distances in kilometres.
///
/// Errors
/// ------
/// - `FlowError::EmptyInput` if there are no locations.
/// - `FlowError::ShapeMismatch` if the coordinate vectors differ in length.
/// - `FlowError::InvalidArgument` for a non-finite coordinate or a
///   latitude outside `[-90, 90]`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use mobility_flows::distance::haversine_distance_matrix;
/// let d = haversine_distance_matrix(array![0.0, 0.0].view(), array![0.0, 90.0].view()).unwrap();
/// assert!((d[[0, 1]] - 10_007.557).abs() < 0.01);
/// assert_eq!(d[[0, 1]], d[[1, 0]]);
/// ```
pub fn haversine_distance_matrix(
    latitudes: ArrayView1<'_, f64>, longitudes: ArrayView1<'_, f64>,
) -> FlowResult<Array2<f64>> {
    if latitudes.is_empty() {
        return Err(FlowError::EmptyInput { what: "latitudes" });
    }
    let n = latitudes.len();
    require_square("longitudes (one per latitude)", n, longitudes.len())?;
    for &lat in latitudes {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(FlowError::InvalidArgument {
                name: "latitudes",
                value: lat.to_string(),
                reason: "Latitudes must be finite and within [-90, 90] degrees.",
            });
        }
    }
    if let Some(&lon) = longitudes.iter().find(|v| !v.is_finite()) {
        return Err(FlowError::InvalidArgument {
            name: "longitudes",
            value: lon.to_string(),
            reason: "Longitudes must be finite.",
        });
    }

    debug!(n, "haversine distance matrix");
    let phi = latitudes.mapv(f64::to_radians);
    let lambda = longitudes.mapv(f64::to_radians);
    let cos_phi = phi.mapv(f64::cos);

    let mut distance = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            let half_dphi = ((phi[j] - phi[i]) / 2.0).sin();
            let half_dlambda = ((lambda[j] - lambda[i]) / 2.0).sin();
            let h = half_dphi * half_dphi + cos_phi[i] * cos_phi[j] * half_dlambda * half_dlambda;
            // Rounding can push h a hair past 1 for antipodal points.
            let d = 2.0 * EARTH_RADIUS_KM * h.min(1.0).sqrt().asin();
            distance[[i, j]] = d;
            distance[[j, i]] = d;
        }
    }
    Ok(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    // Purpose
    // -------
    // Check known great-circle lengths.
    //
    // Given
    // -----
    // - The origin, one degree east on the equator, and the two poles.
    //
    // Expect
    // ------
    // - One equatorial degree = R·π/180; pole to pole = R·π.
    // - Symmetric with a zero diagonal.
    fn haversine_distance_matrix_known_lengths() {
        // Arrange
        let latitudes = array![0.0, 0.0, 90.0, -90.0];
        let longitudes = array![0.0, 1.0, 0.0, 0.0];

        // Act
        let d = haversine_distance_matrix(latitudes.view(), longitudes.view()).unwrap();

        // Assert
        assert_abs_diff_eq!(d[[0, 1]], EARTH_RADIUS_KM * PI / 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(d[[2, 3]], EARTH_RADIUS_KM * PI, epsilon = 1e-6);
        assert_abs_diff_eq!(d[[0, 2]], EARTH_RADIUS_KM * PI / 2.0, epsilon = 1e-6);
        assert_eq!(d, d.t());
        assert!(d.diag().iter().all(|&v| v == 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Guards on coordinate inputs.
    //
    // Given
    // -----
    // - Empty vectors, mismatched lengths, a latitude of 91, a NaN longitude.
    //
    // Expect
    // ------
    // - `EmptyInput`, `ShapeMismatch`, and `InvalidArgument` twice.
    fn haversine_distance_matrix_rejects_bad_coordinates() {
        let empty = ndarray::Array1::<f64>::zeros(0);
        assert!(matches!(
            haversine_distance_matrix(empty.view(), empty.view()),
            Err(FlowError::EmptyInput { what: "latitudes" })
        ));
        assert!(matches!(
            haversine_distance_matrix(array![1.0, 2.0].view(), array![1.0].view()),
            Err(FlowError::ShapeMismatch { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            haversine_distance_matrix(array![91.0].view(), array![0.0].view()),
            Err(FlowError::InvalidArgument { name: "latitudes", .. })
        ));
        assert!(matches!(
            haversine_distance_matrix(array![0.0].view(), array![f64::NAN].view()),
            Err(FlowError::InvalidArgument { name: "longitudes", .. })
        ));
    }
}
