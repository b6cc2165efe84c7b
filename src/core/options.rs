//! core::options — configuration for flow models.
//!
//! Purpose
//! -------
//! Collect the small configuration types threaded through the model
//! entry points: the gravity decay family ([`Decay`]), the choice between
//! the vectorized and loop-based code paths ([`ComputeMode`]), and the
//! post-processing flags ([`FlowOptions`]).
//!
//! Conventions
//! -----------
//! - String parsing is case-insensitive and reports unknown names as
//!   `FlowError::InvalidArgument`.
//! - Defaults mirror the common calibration setup: raw (non-zeroed)
//!   diagonal, row-normalized output, vectorized computation.

use crate::core::errors::FlowError;
use std::str::FromStr;

/// Distance-decay family for the gravity model.
///
/// - `Power`: penalty `d^α`.
/// - `Exponential`: penalty `exp(α·d)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decay {
    #[default]
    Power,
    Exponential,
}

impl Decay {
    /// Distance penalty (the gravity denominator) for a single pair.
    ///
    /// No guarding is done here: `0^α` for `α > 0` yields `0` and the
    /// resulting division produces ±∞/NaN, which the sanitizer zeroes.
    #[inline]
    pub fn penalty(&self, distance: f64, alpha: f64) -> f64 {
        match self {
            Decay::Power => distance.powf(alpha),
            Decay::Exponential => (distance * alpha).exp(),
        }
    }
}

impl FromStr for Decay {
    type Err = FlowError;

    /// Parse `"power"` or `"exponential"` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "power" => Ok(Decay::Power),
            "exponential" => Ok(Decay::Exponential),
            _ => Err(FlowError::InvalidArgument {
                name: "decay",
                value: s.to_string(),
                reason: "Valid options are case insensitive 'power' or 'exponential'.",
            }),
        }
    }
}

/// Which implementation of an algorithm to run.
///
/// - `Vectorized`: whole-array operations (and a single ranking pass per
///   origin for intervening opportunities). The default.
/// - `Reference`: plain nested loops over location pairs. Slower, kept as
///   the obviously-correct baseline the vectorized path is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputeMode {
    #[default]
    Vectorized,
    Reference,
}

impl FromStr for ComputeMode {
    type Err = FlowError;

    /// Parse `"vectorized"`/`"fast"` or `"reference"`/`"slow"` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vectorized" | "fast" => Ok(ComputeMode::Vectorized),
            "reference" | "slow" => Ok(ComputeMode::Reference),
            _ => Err(FlowError::InvalidArgument {
                name: "mode",
                value: s.to_string(),
                reason: "Valid options are 'vectorized' (or 'fast') and 'reference' (or 'slow').",
            }),
        }
    }
}

/// FlowOptions — post-processing and execution policy for a model call.
///
/// Fields
/// ------
/// - `zero_diagonal`: `bool`
///   Clear self-flows `P[i][i]`. Only valid for square outputs. The
///   extended radiation model always clears its diagonal regardless.
/// - `normalize`: `bool`
///   Make each row with a non-zero sum sum to one.
/// - `mode`: [`ComputeMode`]
///   Vectorized or reference implementation.
///
/// Notes
/// -----
/// - The default is `zero_diagonal = false`, `normalize = true`,
///   `mode = ComputeMode::Vectorized`.
///
/// Examples
/// --------
/// ```rust
/// # use mobility_flows::core::options::{ComputeMode, FlowOptions};
/// let opts = FlowOptions::new(true, false, ComputeMode::Reference);
/// assert!(opts.zero_diagonal && !opts.normalize);
/// assert!(FlowOptions::default().normalize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOptions {
    pub zero_diagonal: bool,
    pub normalize: bool,
    pub mode: ComputeMode,
}

impl FlowOptions {
    pub fn new(zero_diagonal: bool, normalize: bool, mode: ComputeMode) -> FlowOptions {
        FlowOptions { zero_diagonal, normalize, mode }
    }

    /// Same options with a different compute mode.
    pub fn with_mode(self, mode: ComputeMode) -> FlowOptions {
        FlowOptions { mode, ..self }
    }
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self { zero_diagonal: false, normalize: true, mode: ComputeMode::Vectorized }
    }
}
