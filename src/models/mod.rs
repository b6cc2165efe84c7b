//! models — spatial-interaction flow predictors.
//!
//! Purpose
//! -------
//! Predict pairwise flows between locations from per-location masses and
//! either distances (gravity) or intervening opportunities (radiation,
//! extended radiation), and convert flow probabilities into expected
//! counts (production function).
//!
//! Key behaviors
//! -------------
//! - [`gravity_model`]: `o_i d_j / f(d_ij)` with power or exponential decay.
//! - [`radiation_model`]: the parameter-free radiation model.
//! - [`extended_radiation_model`]: radiation with exponent `α`; diagonal
//!   always zero.
//! - [`expected_flows`]: scale probabilities by `population · beta`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every model is a pure function of its inputs: nothing is cached and
//!   inputs are never mutated, so calls may run concurrently and share a
//!   single intervening-opportunities matrix read-only.
//! - Every model finishes with [`finalize`](crate::core::finalize): no NaN
//!   or ±∞ survives, and normalized rows sum to one unless they are all
//!   zero.
//! - Each model has a vectorized and a loop-based reference path selected
//!   by [`ComputeMode`](crate::core::ComputeMode); both produce the same
//!   matrix up to floating-point rounding.
//!
//! Conventions
//! -----------
//! - Rows are origins, columns destinations. Gravity and radiation accept
//!   rectangular `n×m` inputs; the extended radiation model is square-only.
//! - Model parameters (`α`, decay family) are supplied by the caller; no
//!   fitting happens here.

pub mod extended_radiation;
pub mod gravity;
pub mod production;
pub mod radiation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::extended_radiation::extended_radiation_model;
pub use self::gravity::gravity_model;
pub use self::production::{DEFAULT_MIGRATION_RATE, expected_flows};
pub use self::radiation::radiation_model;
