//! diagnostics::summary — coverage statistics for square flow matrices.
//!
//! Purpose
//! -------
//! Summarize an observed or predicted `n×n` migration matrix the way
//! analysts check a new year of data: how many locations send nobody,
//! receive nobody, or do neither, and how many migrants move in total.
//! Self-flows on the diagonal are never counted.
//!
//! Conventions
//! -----------
//! - The input is copied and sanitized (diagonal cleared, NaN/±∞ → 0)
//!   before counting; the caller's matrix is untouched.
//! - "Zero" means an exact `0.0` sum after sanitization.

use crate::core::{
    errors::{FlowError, FlowResult},
    sanitize::finalize,
    validation::require_square,
};
use ndarray::{ArrayView2, Axis};
use tracing::debug;

/// FlowSummary — per-matrix counts of isolated locations and total flow.
///
/// Fields
/// ------
/// - `locations`: number of locations `n`.
/// - `zero_outgoing`: locations whose off-diagonal row sum is zero.
/// - `zero_incoming`: locations whose off-diagonal column sum is zero.
/// - `zero_both`: locations with neither outgoing nor incoming flow.
/// - `total_flow`: sum of all off-diagonal entries.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSummary {
    pub locations: usize,
    pub zero_outgoing: usize,
    pub zero_incoming: usize,
    pub zero_both: usize,
    pub total_flow: f64,
}

impl FlowSummary {
    /// Summarize a square flow matrix.
    ///
    /// Errors
    /// ------
    /// - `FlowError::EmptyInput` for a `0×0` matrix.
    /// - `FlowError::ShapeMismatch` for a non-square matrix.
    pub fn from_matrix(flows: ArrayView2<'_, f64>) -> FlowResult<FlowSummary> {
        if flows.is_empty() {
            return Err(FlowError::EmptyInput { what: "flows" });
        }
        require_square("flow columns (summary requires a square matrix)", flows.nrows(), flows.ncols())?;

        let cleaned = finalize(flows.to_owned(), true, false)?;
        let outgoing = cleaned.sum_axis(Axis(1));
        let incoming = cleaned.sum_axis(Axis(0));

        let mut summary = FlowSummary {
            locations: cleaned.nrows(),
            zero_outgoing: 0,
            zero_incoming: 0,
            zero_both: 0,
            total_flow: cleaned.sum(),
        };
        for (&out, &inc) in outgoing.iter().zip(incoming.iter()) {
            let no_out = out == 0.0;
            let no_in = inc == 0.0;
            summary.zero_outgoing += no_out as usize;
            summary.zero_incoming += no_in as usize;
            summary.zero_both += (no_out && no_in) as usize;
        }

        debug!(?summary, "summarized flow matrix");
        Ok(summary)
    }
}
