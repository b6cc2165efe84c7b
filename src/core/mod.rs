//! core — shared infrastructure for spatial-interaction models.
//!
//! Purpose
//! -------
//! Hold everything the individual models have in common: the error type,
//! eager input validation, configuration enums and options, and the
//! sanitizer that every model runs as its final step.
//!
//! Key behaviors
//! -------------
//! - [`FlowError`]/[`FlowResult`]: one error surface for the whole crate.
//! - [`validation`]: shape, emptiness and domain guards run before any
//!   computation.
//! - [`Decay`], [`ComputeMode`], [`FlowOptions`]: configuration passed by
//!   the caller; no state is retained between calls.
//! - [`finalize`]: diagonal zeroing, row normalization, NaN/±∞ suppression.
//!
//! Conventions
//! -----------
//! - Feature vectors are `ArrayView1<f64>` indexed by location; pairwise
//!   matrices are `ArrayView2<f64>` with rows = origins, columns =
//!   destinations. Outputs are owned `Array2<f64>`.
//! - Indices are 0-based and every input shares the same location order.

pub mod errors;
pub mod options;
pub mod sanitize;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{FlowError, FlowResult};
pub use self::options::{ComputeMode, Decay, FlowOptions};
pub use self::sanitize::finalize;
