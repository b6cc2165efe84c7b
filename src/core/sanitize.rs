//! core::sanitize — the single post-processing step shared by every model.
//!
//! Purpose
//! -------
//! Turn a raw flow matrix into a returnable one: optionally clear the
//! diagonal, optionally row-normalize, and map every NaN/±∞ entry to zero.
//! No model implements its own NaN handling; they all finish by calling
//! [`finalize`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The returned matrix contains only finite values.
//! - With `normalize = true`, every row with a finite non-zero sum sums to
//!   one; rows summing to zero are returned unchanged instead of producing
//!   NaN.
//! - Steps run in a fixed order: diagonal, normalization, then the NaN/±∞
//!   scrub. A row holding a non-finite entry therefore normalizes to the
//!   all-zero row (`x / ∞ = 0`, `∞ / ∞ = NaN → 0`); keep the diagonal
//!   flag on to drop infinite self-flows before normalizing.

use crate::core::{errors::FlowResult, validation::require_square};
use ndarray::Array2;
use tracing::trace;

/// Sanitize a raw flow matrix in place and hand it back.
///
/// Parameters
/// ----------
/// - `flows`: `Array2<f64>`
///   Raw `n×m` model output. Consumed and returned.
/// - `zero_diagonal`: `bool`
///   Set `P[i][i] = 0`. Requires `n == m`.
/// - `normalize`: `bool`
///   Divide each row by its sum; zero-sum rows are left as they are.
///   Runs before non-finite entries are replaced.
///
/// Returns
/// -------
/// `FlowResult<Array2<f64>>`
///   The sanitized matrix, free of NaN and ±∞.
///
/// Errors
/// ------
/// - `FlowError::ShapeMismatch` if `zero_diagonal` is requested on a
///   non-square matrix.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use mobility_flows::core::sanitize::finalize;
/// let raw = array![[1.0, 3.0, f64::INFINITY], [1.0, 3.0, 0.0], [0.0, 0.0, 0.0]];
/// let p = finalize(raw, false, true).unwrap();
/// assert_eq!(p, array![[0.0, 0.0, 0.0], [0.25, 0.75, 0.0], [0.0, 0.0, 0.0]]);
/// ```
pub fn finalize(
    mut flows: Array2<f64>, zero_diagonal: bool, normalize: bool,
) -> FlowResult<Array2<f64>> {
    if zero_diagonal {
        require_square(
            "columns (zero_diagonal requires a square matrix)",
            flows.nrows(),
            flows.ncols(),
        )?;
        flows.diag_mut().fill(0.0);
    }

    let mut zero_rows = 0usize;
    if normalize {
        for mut row in flows.rows_mut() {
            let total = row.sum();
            if total == 0.0 {
                zero_rows += 1;
                continue;
            }
            row /= total;
        }
    }
    let scrubbed = scrub_non_finite(&mut flows);

    trace!(
        rows = flows.nrows(),
        cols = flows.ncols(),
        scrubbed,
        zero_rows,
        zero_diagonal,
        normalize,
        "sanitized flow matrix"
    );
    Ok(flows)
}

fn scrub_non_finite(flows: &mut Array2<f64>) -> usize {
    let mut count = 0;
    for value in flows.iter_mut() {
        if !value.is_finite() {
            *value = 0.0;
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::FlowError;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - diagonal zeroing and its square-only guard,
    // - row normalization including zero-sum rows,
    // - NaN/±∞ suppression with and without normalization.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify diagonal zeroing on a square matrix without normalization.
    //
    // Given
    // -----
    // - A 2×2 matrix of ones.
    //
    // Expect
    // ------
    // - Diagonal is zero, off-diagonal untouched.
    fn finalize_zero_diagonal_clears_self_flows() {
        // Arrange
        let raw = Array2::<f64>::ones((2, 2));

        // Act
        let p = finalize(raw, true, false).unwrap();

        // Assert
        assert_eq!(p, array![[0.0, 1.0], [1.0, 0.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure diagonal zeroing refuses rectangular matrices.
    //
    // Given
    // -----
    // - A 2×3 matrix with `zero_diagonal = true`.
    //
    // Expect
    // ------
    // - `ShapeMismatch` with expected 2 and actual 3.
    fn finalize_zero_diagonal_on_rectangular_is_shape_mismatch() {
        // Arrange
        let raw = Array2::<f64>::ones((2, 3));

        // Act
        let result = finalize(raw, true, true);

        // Assert
        assert!(matches!(result, Err(FlowError::ShapeMismatch { expected: 2, actual: 3, .. })));
    }

    #[test]
    // Purpose
    // -------
    // Check row-stochastic output and the all-zero row rule.
    //
    // Given
    // -----
    // - Row 0 = [1, 3], row 1 = [0, 0].
    //
    // Expect
    // ------
    // - Row 0 becomes [0.25, 0.75]; row 1 stays [0, 0] with no NaN.
    fn finalize_normalize_keeps_zero_rows_zero() {
        // Arrange
        let raw = array![[1.0, 3.0], [0.0, 0.0]];

        // Act
        let p = finalize(raw, false, true).unwrap();

        // Assert
        assert_abs_diff_eq!(p[[0, 0]], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(p[[0, 1]], 0.75, epsilon = 1e-12);
        assert_eq!(p.row(1).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify every non-finite value is mapped to zero when no
    // normalization is requested.
    //
    // Given
    // -----
    // - A matrix holding NaN, +∞ and -∞ next to finite values.
    //
    // Expect
    // ------
    // - Non-finite entries become 0; finite entries are unchanged.
    fn finalize_scrubs_nan_and_infinities() {
        // Arrange
        let raw = array![[f64::NAN, 2.0], [f64::INFINITY, f64::NEG_INFINITY]];

        // Act
        let p = finalize(raw, false, false).unwrap();

        // Assert
        assert_eq!(p, array![[0.0, 2.0], [0.0, 0.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure normalization runs before the non-finite scrub, so a row
    // holding NaN or ∞ collapses to the all-zero row.
    //
    // Given
    // -----
    // - Row [∞, 6, 5] (a self-flow divided by a zero distance), row
    //   [NaN, 1, 1], and a finite row [1, 1, 2].
    //
    // Expect
    // ------
    // - First two rows all zero; the finite row becomes [0.25, 0.25, 0.5].
    fn finalize_non_finite_rows_normalize_to_zero() {
        // Arrange
        let raw = array![[f64::INFINITY, 6.0, 5.0], [f64::NAN, 1.0, 1.0], [1.0, 1.0, 2.0]];

        // Act
        let p = finalize(raw, false, true).unwrap();

        // Assert
        assert_eq!(p.row(0).to_vec(), vec![0.0, 0.0, 0.0]);
        assert_eq!(p.row(1).to_vec(), vec![0.0, 0.0, 0.0]);
        assert_eq!(p.row(2).to_vec(), vec![0.25, 0.25, 0.5]);
    }

    #[test]
    // Purpose
    // -------
    // Diagonal zeroing precedes normalization, so an infinite self-flow
    // no longer wipes out its row.
    //
    // Given
    // -----
    // - Row [∞, 6, 2] with `zero_diagonal = true`.
    //
    // Expect
    // ------
    // - Output row [0, 0.75, 0.25].
    fn finalize_zero_diagonal_before_normalization() {
        // Arrange
        let raw = array![[f64::INFINITY, 6.0, 2.0], [1.0, 0.0, 1.0], [1.0, 3.0, 0.0]];

        // Act
        let p = finalize(raw, true, true).unwrap();

        // Assert
        assert_eq!(p.row(0).to_vec(), vec![0.0, 0.75, 0.25]);
        assert_eq!(p.row(1).to_vec(), vec![0.5, 0.0, 0.5]);
        assert_abs_diff_eq!(p.row(2).sum(), 1.0, epsilon = 1e-12);
    }
}
