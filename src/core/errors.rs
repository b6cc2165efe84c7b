//! core::errors — shared error type for flow models and their inputs.
//!
//! Purpose
//! -------
//! Provide the single error enum and result alias used by every public
//! operation in this crate: intervening opportunities, the three
//! spatial-interaction models, the production function, and the
//! migration-matrix summary.
//!
//! Key behaviors
//! -------------
//! - Define [`FlowResult`] and [`FlowError`] as the canonical result and
//!   error types.
//! - Attach human-readable `Display` messages that embed the offending
//!   dimension or value.
//! - Implement `From<FlowError> for PyErr` when the `python-bindings`
//!   feature is enabled, mapping every variant to `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are raised eagerly by `core::validation` before any output
//!   matrix is allocated; a call either returns a complete matrix or fails.
//! - Numerical degeneracies during computation (x/0, 0/0, overflow) are
//!   never errors. They are mapped to `0.0` by the sanitizer.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages carry their payloads.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for operations that may produce [`FlowError`].
pub type FlowResult<T> = Result<T, FlowError>;

/// FlowError — validation failures for flow-model inputs.
///
/// Variants
/// --------
/// - `ShapeMismatch { what, expected, actual }`
///   A single dimension disagrees with the location count it must align
///   with (e.g. distance rows vs origin count), or a square-only operation
///   received a rectangular matrix.
/// - `InvalidArgument { name, value, reason }`
///   A scalar or element is outside its domain: unknown decay or compute
///   mode, non-finite exponent, negative or non-finite feature value, NaN
///   distance in a ranking input.
/// - `EmptyInput { what }`
///   A zero-location input.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowError {
    // ---- Shape / alignment ----
    ShapeMismatch { what: &'static str, expected: usize, actual: usize },

    // ---- Domain ----
    InvalidArgument { name: &'static str, value: String, reason: &'static str },

    // ---- Empty ----
    EmptyInput { what: &'static str },
}

impl std::error::Error for FlowError {}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::ShapeMismatch { what, expected, actual } => {
                write!(f, "Shape mismatch for {what}: expected {expected}, got {actual}")
            }
            FlowError::InvalidArgument { name, value, reason } => {
                write!(f, "Invalid argument `{name}` = {value}. {reason}")
            }
            FlowError::EmptyInput { what } => {
                write!(f, "Input `{what}` is empty; at least one location is required.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<FlowError> for PyErr {
    fn from(err: FlowError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover `Display` formatting for every `FlowError` variant.
    //
    // They intentionally DO NOT cover the `PyErr` conversion, which needs the
    // Python C API and belongs to Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `ShapeMismatch` reports the dimension name and both sizes.
    //
    // Given
    // -----
    // - A mismatch on "distance rows" with expected 3, actual 4.
    //
    // Expect
    // ------
    // - The message contains "distance rows", "3" and "4".
    fn shape_mismatch_display_includes_dimension_and_sizes() {
        // Arrange
        let err = FlowError::ShapeMismatch { what: "distance rows", expected: 3, actual: 4 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("distance rows"), "Got: {msg}");
        assert!(msg.contains('3') && msg.contains('4'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidArgument` embeds the argument name and value.
    //
    // Given
    // -----
    // - An unknown decay name "linear".
    //
    // Expect
    // ------
    // - The message contains both "decay" and "linear".
    fn invalid_argument_display_includes_name_and_value() {
        // Arrange
        let err = FlowError::InvalidArgument {
            name: "decay",
            value: "linear".to_string(),
            reason: "Valid options are 'power' or 'exponential'.",
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("decay") && msg.contains("linear"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `EmptyInput` names the empty input.
    //
    // Given
    // -----
    // - An empty "features" vector.
    //
    // Expect
    // ------
    // - The message contains "features".
    fn empty_input_display_names_input() {
        // Arrange
        let err = FlowError::EmptyInput { what: "features" };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("features"), "Got: {msg}");
    }
}
