//! mobility_flows — spatial-interaction models for migration flows, with
//! optional Python bindings.
//!
//! Purpose
//! -------
//! Predict pairwise flows between locations from per-location masses
//! (population, attractiveness) and pairwise distances using the gravity,
//! radiation, and extended radiation model families. Serve as the crate
//! root for Rust callers and, with the `python-bindings` feature, as the
//! PyO3 bridge exposing the same routines to Python via the
//! `_mobility_flows` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules (`core`, `distance`, `opportunities`,
//!   `models`, `diagnostics`) as the public crate surface.
//! - Define `#[pyfunction]`/`#[pyclass]` wrappers and the `#[pymodule]`
//!   initializer, registering `mobility_flows.models`,
//!   `mobility_flows.distance` and `mobility_flows.diagnostics` submodules.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every public operation validates its inputs eagerly and returns a
//!   [`FlowError`](core::FlowError) before computing anything.
//! - Returned flow matrices never contain NaN or ±∞.
//! - No component keeps state between calls; all matrices are owned by
//!   the caller.
//!
//! Conventions
//! -----------
//! - Feature vectors and matrices share one location ordering; rows are
//!   origins and columns destinations.
//! - Raw-data ingestion (census tables, migration records, centroids) and
//!   parameter fitting live outside this crate.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use mobility_flows::prelude::*;
//! use ndarray::array;
//!
//! let masses = array![2.0, 3.0, 5.0];
//! let distance = array![[0.0, 1.0, 2.0], [1.0, 0.0, 1.0], [2.0, 1.0, 0.0]];
//!
//! let s = intervening_opportunities(masses.view(), distance.view(), ComputeMode::Vectorized)?;
//! let opts = FlowOptions::new(true, true, ComputeMode::Vectorized);
//! let radiation = radiation_model(masses.view(), masses.view(), s.view(), &opts)?;
//! let extended = extended_radiation_model(masses.view(), masses.view(), s.view(), 1.5, &opts)?;
//! assert_eq!(radiation.shape(), extended.shape());
//! # Ok::<(), FlowError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/integration_flow_pipeline.rs`
//!   checks the vectorized/reference equivalence on random inputs and the
//!   end-to-end invariants.

pub mod core;
pub mod diagnostics;
pub mod distance;
pub mod models;
pub mod opportunities;
pub mod utils;

/// One-line import of the main surface.
pub mod prelude {
    pub use crate::core::{ComputeMode, Decay, FlowError, FlowOptions, FlowResult, finalize};
    pub use crate::diagnostics::FlowSummary;
    pub use crate::distance::haversine_distance_matrix;
    pub use crate::models::{
        DEFAULT_MIGRATION_RATE, expected_flows, extended_radiation_model, gravity_model,
        radiation_model,
    };
    pub use crate::opportunities::intervening_opportunities;
}

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    core::options::FlowOptions,
    diagnostics::FlowSummary,
    utils::{extract_decay, extract_f64_matrix, extract_f64_vector, extract_mode},
};

/// Intervening-opportunities matrix `S` for Python callers.
///
/// `intervening_opportunities(features, distance, /, mode=None)`; `mode`
/// is `"vectorized"` (default) or `"reference"`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "intervening_opportunities", signature = (features, distance, mode = None))]
fn py_intervening_opportunities<'py>(
    py: Python<'py>, features: &Bound<'py, PyAny>, distance: &Bound<'py, PyAny>,
    mode: Option<&str>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let features = extract_f64_vector(features)?;
    let distance = extract_f64_matrix(distance)?;
    let mode = extract_mode(mode)?;
    let s = opportunities::intervening_opportunities(features.view(), distance.view(), mode)?;
    Ok(s.into_pyarray(py))
}

/// Gravity model for Python callers.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "gravity_model",
    signature = (
        origins,
        destinations,
        distance,
        alpha,
        decay = "power",
        zero_diagonal = false,
        normalize = true,
        mode = None,
    )
)]
fn py_gravity_model<'py>(
    py: Python<'py>, origins: &Bound<'py, PyAny>, destinations: &Bound<'py, PyAny>,
    distance: &Bound<'py, PyAny>, alpha: f64, decay: &str, zero_diagonal: bool, normalize: bool,
    mode: Option<&str>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let origins = extract_f64_vector(origins)?;
    let destinations = extract_f64_vector(destinations)?;
    let distance = extract_f64_matrix(distance)?;
    let opts = FlowOptions::new(zero_diagonal, normalize, extract_mode(mode)?);
    let p = models::gravity_model(
        origins.view(),
        destinations.view(),
        distance.view(),
        alpha,
        extract_decay(decay)?,
        &opts,
    )?;
    Ok(p.into_pyarray(py))
}

/// Radiation model for Python callers.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "radiation_model",
    signature = (origins, destinations, s, zero_diagonal = false, normalize = true, mode = None)
)]
fn py_radiation_model<'py>(
    py: Python<'py>, origins: &Bound<'py, PyAny>, destinations: &Bound<'py, PyAny>,
    s: &Bound<'py, PyAny>, zero_diagonal: bool, normalize: bool, mode: Option<&str>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let origins = extract_f64_vector(origins)?;
    let destinations = extract_f64_vector(destinations)?;
    let s = extract_f64_matrix(s)?;
    let opts = FlowOptions::new(zero_diagonal, normalize, extract_mode(mode)?);
    let p = models::radiation_model(origins.view(), destinations.view(), s.view(), &opts)?;
    Ok(p.into_pyarray(py))
}

/// Extended radiation model for Python callers; the diagonal is always zero.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "extended_radiation_model",
    signature = (origins, destinations, s, alpha, normalize = true, mode = None)
)]
fn py_extended_radiation_model<'py>(
    py: Python<'py>, origins: &Bound<'py, PyAny>, destinations: &Bound<'py, PyAny>,
    s: &Bound<'py, PyAny>, alpha: f64, normalize: bool, mode: Option<&str>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let origins = extract_f64_vector(origins)?;
    let destinations = extract_f64_vector(destinations)?;
    let s = extract_f64_matrix(s)?;
    let opts = FlowOptions::new(true, normalize, extract_mode(mode)?);
    let p = models::extended_radiation_model(
        origins.view(),
        destinations.view(),
        s.view(),
        alpha,
        &opts,
    )?;
    Ok(p.into_pyarray(py))
}

/// Expected migrant counts `P[i][j] · population[i] · beta`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "expected_flows", signature = (population, probabilities, beta = 0.03))]
fn py_expected_flows<'py>(
    py: Python<'py>, population: &Bound<'py, PyAny>, probabilities: &Bound<'py, PyAny>,
    beta: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let population = extract_f64_vector(population)?;
    let probabilities = extract_f64_matrix(probabilities)?;
    let flows = models::expected_flows(population.view(), probabilities.view(), beta)?;
    Ok(flows.into_pyarray(py))
}

/// Great-circle distance matrix (km) from latitude/longitude in degrees.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "haversine_distance_matrix", signature = (latitudes, longitudes))]
fn py_haversine_distance_matrix<'py>(
    py: Python<'py>, latitudes: &Bound<'py, PyAny>, longitudes: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let latitudes = extract_f64_vector(latitudes)?;
    let longitudes = extract_f64_vector(longitudes)?;
    let distance = distance::haversine_distance_matrix(latitudes.view(), longitudes.view())?;
    Ok(distance.into_pyarray(py))
}

/// MigrationSummary — Python-facing wrapper for [`FlowSummary`].
///
/// Constructed from Python via `MigrationSummary(flows)` with a square
/// 2-D array-like; exposes the counts as read-only properties.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "mobility_flows.diagnostics")]
pub struct MigrationSummary {
    inner: FlowSummary,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MigrationSummary {
    #[new]
    #[pyo3(text_signature = "(flows, /)", signature = (flows))]
    pub fn new<'py>(flows: &Bound<'py, PyAny>) -> PyResult<MigrationSummary> {
        let flows = extract_f64_matrix(flows)?;
        Ok(MigrationSummary { inner: FlowSummary::from_matrix(flows.view())? })
    }

    #[getter]
    pub fn locations(&self) -> usize {
        self.inner.locations
    }

    #[getter]
    pub fn zero_outgoing(&self) -> usize {
        self.inner.zero_outgoing
    }

    #[getter]
    pub fn zero_incoming(&self) -> usize {
        self.inner.zero_incoming
    }

    #[getter]
    pub fn zero_both(&self) -> usize {
        self.inner.zero_both
    }

    #[getter]
    pub fn total_flow(&self) -> f64 {
        self.inner.total_flow
    }

    fn __repr__(&self) -> String {
        format!(
            "MigrationSummary(locations={}, zero_outgoing={}, zero_incoming={}, zero_both={}, total_flow={})",
            self.inner.locations,
            self.inner.zero_outgoing,
            self.inner.zero_incoming,
            self.inner.zero_both,
            self.inner.total_flow
        )
    }
}

/// _mobility_flows — PyO3 module initializer for the Python extension.
///
/// Creates the `models`, `distance` and `diagnostics` submodules, attaches
/// them to the parent module, and registers them in `sys.modules` so dotted
/// imports (`import mobility_flows.models`) work.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _mobility_flows<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let models_mod = PyModule::new(py, "models")?;
    let distance_mod = PyModule::new(py, "distance")?;
    let diagnostics_mod = PyModule::new(py, "diagnostics")?;
    register_models(m, &models_mod)?;
    register_distance(m, &distance_mod)?;
    register_diagnostics(m, &diagnostics_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let sys_modules = py.import("sys")?.getattr("modules")?;
    sys_modules.set_item("mobility_flows.models", models_mod)?;
    sys_modules.set_item("mobility_flows.distance", distance_mod)?;
    sys_modules.set_item("mobility_flows.diagnostics", diagnostics_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn register_models<'py>(parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_intervening_opportunities, m)?)?;
    m.add_function(wrap_pyfunction!(py_gravity_model, m)?)?;
    m.add_function(wrap_pyfunction!(py_radiation_model, m)?)?;
    m.add_function(wrap_pyfunction!(py_extended_radiation_model, m)?)?;
    m.add_function(wrap_pyfunction!(py_expected_flows, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn register_distance<'py>(parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_haversine_distance_matrix, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn register_diagnostics<'py>(
    parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<MigrationSummary>()?;
    parent.add_submodule(m)?;
    Ok(())
}
