//! utils — conversion helpers for the PyO3 boundary.
//!
//! Accept NumPy arrays, pandas objects (via `to_numpy()`), or plain nested
//! Python sequences of floats, and copy them into owned `ndarray` buffers
//! so the core never holds references into Python memory.

#[cfg(feature = "python-bindings")]
use crate::core::options::{ComputeMode, Decay};

#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use numpy::{PyReadonlyArray1, PyReadonlyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

/// Copy a 1-D float64 input (ndarray, Series, or sequence) into an `Array1`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector<'py>(raw: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr.as_array().to_owned());
    }

    if let Ok(obj) = raw.call_method0("to_numpy") {
        if let Ok(arr) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(arr.as_array().to_owned());
        }
    }

    let vec: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(Array1::from(vec))
}

/// Copy a 2-D float64 input (ndarray, DataFrame, or nested sequence) into
/// an `Array2`. Ragged nested sequences are rejected.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(raw: &Bound<'py, PyAny>) -> PyResult<Array2<f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr.as_array().to_owned());
    }

    if let Ok(obj) = raw.call_method0("to_numpy") {
        if let Ok(arr) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(arr.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    let n = rows.len();
    let m = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != m) {
        return Err(PyValueError::new_err("matrix rows must all have the same length"));
    }
    Array2::from_shape_vec((n, m), rows.into_iter().flatten().collect())
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Parse an optional compute-mode name; `None` selects the vectorized path.
#[cfg(feature = "python-bindings")]
pub fn extract_mode(mode: Option<&str>) -> PyResult<ComputeMode> {
    Ok(mode.map(|name| name.parse::<ComputeMode>()).transpose()?.unwrap_or_default())
}

/// Parse a decay name (`"power"` / `"exponential"`).
#[cfg(feature = "python-bindings")]
pub fn extract_decay(decay: &str) -> PyResult<Decay> {
    Ok(decay.parse::<Decay>()?)
}
