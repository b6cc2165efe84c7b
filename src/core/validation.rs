//! core::validation — eager input guards for flow models.
//!
//! Purpose
//! -------
//! Centralize the shape and domain checks every public operation runs
//! before touching its inputs, so that failures are reported as
//! [`FlowError`] values before any output is allocated.
//!
//! Key behaviors
//! -------------
//! - Reject empty feature vectors (`EmptyInput`).
//! - Reject negative or non-finite feature values (`InvalidArgument`).
//! - Check that pairwise matrices align with the origin/destination
//!   counts, and that square-only operations get square matrices
//!   (`ShapeMismatch`).
//! - Reject non-finite exponents and NaN distances where a total order
//!   is required (`InvalidArgument`).
//!
//! Conventions
//! -----------
//! - Pure functions, no allocation beyond error construction.
//! - Callers layer model-specific checks on top of these helpers.

use crate::core::errors::{FlowError, FlowResult};
use ndarray::{ArrayView1, ArrayView2};

/// Validate a per-location feature (mass) vector.
///
/// Errors
/// ------
/// - `FlowError::EmptyInput` if `features` has no entries.
/// - `FlowError::InvalidArgument` for the first entry that is negative,
///   NaN, or ±∞.
pub fn validate_features(name: &'static str, features: ArrayView1<'_, f64>) -> FlowResult<()> {
    if features.is_empty() {
        return Err(FlowError::EmptyInput { what: name });
    }
    for (index, &value) in features.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(FlowError::InvalidArgument {
                name,
                value: format!("{value} at index {index}"),
                reason: "Feature values must be finite and non-negative.",
            });
        }
    }
    Ok(())
}

/// Validate that `matrix` is `rows × cols`.
///
/// `row_label`/`col_label` name the dimension in the error message
/// (e.g. `"distance rows"`).
pub fn validate_pairwise_shape(
    row_label: &'static str, col_label: &'static str, matrix: ArrayView2<'_, f64>, rows: usize,
    cols: usize,
) -> FlowResult<()> {
    if matrix.nrows() != rows {
        return Err(FlowError::ShapeMismatch {
            what: row_label,
            expected: rows,
            actual: matrix.nrows(),
        });
    }
    if matrix.ncols() != cols {
        return Err(FlowError::ShapeMismatch {
            what: col_label,
            expected: cols,
            actual: matrix.ncols(),
        });
    }
    Ok(())
}

/// Require a square `rows × cols` layout.
pub fn require_square(what: &'static str, rows: usize, cols: usize) -> FlowResult<()> {
    if rows != cols {
        return Err(FlowError::ShapeMismatch { what, expected: rows, actual: cols });
    }
    Ok(())
}

/// Require a finite scalar parameter (decay exponent, rate, ...).
pub fn validate_exponent(name: &'static str, value: f64) -> FlowResult<()> {
    if !value.is_finite() {
        return Err(FlowError::InvalidArgument {
            name,
            value: value.to_string(),
            reason: "Exponent must be a finite real number.",
        });
    }
    Ok(())
}

/// Reject NaN entries in a distance matrix that will be ranked.
///
/// Infinite distances are allowed and rank last.
pub fn validate_rankable(distance: ArrayView2<'_, f64>) -> FlowResult<()> {
    for ((i, j), &value) in distance.indexed_iter() {
        if value.is_nan() {
            return Err(FlowError::InvalidArgument {
                name: "distance",
                value: format!("NaN at ({i}, {j})"),
                reason: "Distances used for ranking must not be NaN.",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover every error branch of the guards in this module
    // plus their success paths.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure an empty feature vector is rejected with `EmptyInput`.
    //
    // Given
    // -----
    // - A zero-length feature vector.
    //
    // Expect
    // ------
    // - `Err(FlowError::EmptyInput { what: "features" })`.
    fn validate_features_empty_returns_empty_input() {
        // Arrange
        let features: [f64; 0] = [];

        // Act
        let result = validate_features("features", ArrayView1::from(&features));

        // Assert
        assert_eq!(result, Err(FlowError::EmptyInput { what: "features" }));
    }

    #[test]
    // Purpose
    // -------
    // Verify negative and non-finite masses are rejected.
    //
    // Given
    // -----
    // - One vector with a negative entry, one with NaN, one with +∞.
    //
    // Expect
    // ------
    // - Each returns `InvalidArgument`.
    fn validate_features_rejects_negative_and_non_finite() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            // Arrange
            let features = array![1.0, bad, 2.0];

            // Act
            let result = validate_features("origins", features.view());

            // Assert
            match result {
                Err(FlowError::InvalidArgument { name, .. }) => assert_eq!(name, "origins"),
                other => panic!("expected InvalidArgument for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Check zero masses are legal.
    //
    // Given
    // -----
    // - A vector of zeros.
    //
    // Expect
    // ------
    // - `Ok(())`.
    fn validate_features_accepts_zero_mass() {
        let features = array![0.0, 0.0];
        assert!(validate_features("features", features.view()).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify row and column mismatches are reported on the right dimension.
    //
    // Given
    // -----
    // - A 2×3 matrix checked against 3×3 and against 2×2.
    //
    // Expect
    // ------
    // - Rows mismatch names the row label; columns mismatch names the
    //   column label.
    fn validate_pairwise_shape_reports_offending_dimension() {
        // Arrange
        let m = Array2::<f64>::zeros((2, 3));

        // Act
        let rows = validate_pairwise_shape("rows", "cols", m.view(), 3, 3);
        let cols = validate_pairwise_shape("rows", "cols", m.view(), 2, 2);

        // Assert
        assert_eq!(rows, Err(FlowError::ShapeMismatch { what: "rows", expected: 3, actual: 2 }));
        assert_eq!(cols, Err(FlowError::ShapeMismatch { what: "cols", expected: 2, actual: 3 }));
        assert!(validate_pairwise_shape("rows", "cols", m.view(), 2, 3).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Check the square guard.
    //
    // Given
    // -----
    // - Shapes 3×3 and 3×4.
    //
    // Expect
    // ------
    // - Square passes, rectangular fails with `ShapeMismatch`.
    fn require_square_rejects_rectangular() {
        assert!(require_square("square", 3, 3).is_ok());
        assert!(matches!(
            require_square("square", 3, 4),
            Err(FlowError::ShapeMismatch { expected: 3, actual: 4, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite exponents are rejected.
    //
    // Given
    // -----
    // - alpha = NaN and alpha = -∞, plus a finite negative alpha.
    //
    // Expect
    // ------
    // - Non-finite values fail; the finite one passes.
    fn validate_exponent_requires_finite() {
        assert!(validate_exponent("alpha", f64::NAN).is_err());
        assert!(validate_exponent("alpha", f64::NEG_INFINITY).is_err());
        assert!(validate_exponent("alpha", -0.5).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify NaN distances are refused for ranking while +∞ is allowed.
    //
    // Given
    // -----
    // - A matrix containing +∞, then one containing NaN.
    //
    // Expect
    // ------
    // - First passes, second fails with `InvalidArgument`.
    fn validate_rankable_rejects_nan_only() {
        let ok = array![[0.0, f64::INFINITY], [1.0, 0.0]];
        let bad = array![[0.0, f64::NAN], [1.0, 0.0]];
        assert!(validate_rankable(ok.view()).is_ok());
        assert!(matches!(
            validate_rankable(bad.view()),
            Err(FlowError::InvalidArgument { name: "distance", .. })
        ));
    }
}
