//! opportunities — intervening opportunities for radiation-family models.
//!
//! Purpose
//! -------
//! Compute, for every ordered origin/destination pair, the total mass of
//! locations strictly closer to the origin than the destination. The
//! radiation and extended radiation models read this matrix; it is built
//! once per (features, distance) pair and can be reused across model calls
//! with different exponents.
//!
//! Key behaviors
//! -------------
//! - [`rank_by_distance`]: explicit total order (distance, then index).
//! - [`intervening_opportunities`]: vectorized and reference builders for
//!   the `S` matrix, selected by [`ComputeMode`](crate::core::ComputeMode).
//!
//! Invariants & assumptions
//! ------------------------
//! - `S[i][i] = 0` whenever `i` is the unique closest location to itself.
//! - For fixed `i`, `S[i][·]` is non-decreasing along the ranking.
//! - Inputs are never mutated; the returned matrix is owned by the caller.

pub mod intervening;
pub mod ranking;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::intervening::intervening_opportunities;
pub use self::ranking::rank_by_distance;
