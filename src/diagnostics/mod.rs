//! diagnostics — descriptive checks on flow matrices.
//!
//! Purpose
//! -------
//! Summaries used before and after modeling: which locations are isolated
//! in an observed migration matrix, and how much total flow it carries.
//! Predicted matrices from [`models`](crate::models) can be summarized the
//! same way for a side-by-side comparison.

pub mod summary;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::summary::FlowSummary;
