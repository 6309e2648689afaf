// ─────────────────────────────────────────────────────────────────────
// RingGeom — PyO3 FFI Bindings
// (C) 2026 RingGeom contributors.
// License: GNU GPL v2 or later
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the RingGeom grid builders.
//!
//! Exposes `GridGeometry` with one static constructor per grid scheme,
//! plus the raw latitude weight solvers.
//!
//! # Error mapping
//!
//! - Config / validation errors → `ValueError`
//! - Gauss-Legendre non-convergence → `RuntimeError`
//!
//! Install: `pip install -e crates/ringgeom-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from ringgeom import GridGeometry
//!
//! geom = GridGeometry.healpix(nside=4)
//! assert abs(geom.total_weight() - 4 * math.pi) < 1e-9
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use ringgeom_grids::{
    build_grid, make_driscoll_healy_geometry, make_ecp_geometry, make_gauss_geometry,
    make_healpix_geometry, make_weighted_healpix_geometry,
};
use ringgeom_types::config::contiguous_stride_lat;
use ringgeom_types::{GeomError, GridGeometry, GridSpec};

fn to_py_err(e: GeomError) -> PyErr {
    match e {
        GeomError::Convergence { .. } => PyRuntimeError::new_err(e.to_string()),
        GeomError::Config(_) | GeomError::Validation(_) => PyValueError::new_err(e.to_string()),
    }
}

// ─── PyGridGeometry ─────────────────────────────────────────────────

/// Python-visible ring geometry.
#[pyclass(name = "GridGeometry")]
#[derive(Clone)]
struct PyGridGeometry {
    inner: GridGeometry,
}

impl From<GridGeometry> for PyGridGeometry {
    fn from(inner: GridGeometry) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyGridGeometry {
    /// HEALPix rings; `weights` holds 2*nside per-latitude factors.
    #[staticmethod]
    #[pyo3(signature = (nside, stride = 1, weights = None))]
    fn healpix(nside: usize, stride: i64, weights: Option<Vec<f64>>) -> PyResult<Self> {
        let geometry = match weights {
            Some(w) => make_weighted_healpix_geometry(nside, stride, &w),
            None => make_healpix_geometry(nside, stride),
        };
        geometry.map(Self::from).map_err(to_py_err)
    }

    #[staticmethod]
    #[pyo3(signature = (nrings, nphi, stride_lon = 1, stride_lat = None))]
    fn gauss(nrings: usize, nphi: usize, stride_lon: i64, stride_lat: Option<i64>) -> PyResult<Self> {
        let stride_lat = contiguous_stride_lat(stride_lat, nphi, stride_lon);
        make_gauss_geometry(nrings, nphi, stride_lon, stride_lat)
            .map(Self::from)
            .map_err(to_py_err)
    }

    #[staticmethod]
    #[pyo3(signature = (nrings, nphi, phi0 = 0.0, stride_lon = 1, stride_lat = None))]
    fn ecp(
        nrings: usize,
        nphi: usize,
        phi0: f64,
        stride_lon: i64,
        stride_lat: Option<i64>,
    ) -> PyResult<Self> {
        let stride_lat = contiguous_stride_lat(stride_lat, nphi, stride_lon);
        make_ecp_geometry(nrings, nphi, phi0, stride_lon, stride_lat)
            .map(Self::from)
            .map_err(to_py_err)
    }

    #[staticmethod]
    #[pyo3(signature = (nrings, ppring, phi0 = 0.0, stride_lon = 1, stride_lat = None))]
    fn driscoll_healy(
        nrings: usize,
        ppring: usize,
        phi0: f64,
        stride_lon: i64,
        stride_lat: Option<i64>,
    ) -> PyResult<Self> {
        let stride_lat = contiguous_stride_lat(stride_lat, ppring, stride_lon);
        make_driscoll_healy_geometry(nrings, ppring, phi0, stride_lon, stride_lat)
            .map(Self::from)
            .map_err(to_py_err)
    }

    /// Construct from a JSON grid description.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let spec = GridSpec::from_json(json).map_err(to_py_err)?;
        build_grid(&spec).map(Self::from).map_err(to_py_err)
    }

    #[getter]
    fn kind(&self) -> &'static str {
        self.inner.kind().name()
    }

    #[getter]
    fn nrings(&self) -> usize {
        self.inner.nrings()
    }

    #[getter]
    fn npix(&self) -> usize {
        self.inner.npix()
    }

    #[getter]
    fn theta(&self) -> Vec<f64> {
        self.inner.thetas()
    }

    #[getter]
    fn nphi(&self) -> Vec<usize> {
        self.inner.nphis()
    }

    #[getter]
    fn phi0(&self) -> Vec<f64> {
        self.inner.phi0s()
    }

    #[getter]
    fn offset(&self) -> Vec<i64> {
        self.inner.offsets()
    }

    #[getter]
    fn stride(&self) -> Vec<i64> {
        self.inner.strides()
    }

    #[getter]
    fn weight(&self) -> Vec<f64> {
        self.inner.weights()
    }

    /// Σ nphi·weight over all rings.
    fn total_weight(&self) -> f64 {
        self.inner.total_weight()
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("kind", self.inner.kind().name())?;
        dict.set_item("theta", self.inner.thetas())?;
        dict.set_item("nphi", self.inner.nphis())?;
        dict.set_item("phi0", self.inner.phi0s())?;
        dict.set_item("offset", self.inner.offsets())?;
        dict.set_item("stride", self.inner.strides())?;
        dict.set_item("weight", self.inner.weights())?;
        Ok(dict)
    }

    fn __len__(&self) -> usize {
        self.inner.nrings()
    }

    fn __repr__(&self) -> String {
        format!(
            "GridGeometry(kind={}, nrings={}, npix={})",
            self.inner.kind().name(),
            self.inner.nrings(),
            self.inner.npix()
        )
    }
}

// ─── Weight solvers ─────────────────────────────────────────────────

/// Gauss-Legendre nodes and weights of order `n` as `(x, w)`.
#[pyfunction]
#[pyo3(name = "gauss_legendre")]
fn py_gauss_legendre(n: usize) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let rule = ringgeom_quad::gauss_legendre(n).map_err(to_py_err)?;
    Ok((rule.x, rule.w))
}

/// Equidistant-cylindrical ring weights for half-bandwidth `bw`.
#[pyfunction]
#[pyo3(name = "ecp_weights")]
fn py_ecp_weights(bw: usize) -> Vec<f64> {
    ringgeom_quad::ecp_weights(bw)
}

// ─── Module Registration ────────────────────────────────────────────

/// RingGeom — ring geometries and quadrature weights for sphere grids.
///
/// - `GridGeometry` — HEALPix, Gauss, ECP and Driscoll-Healy ring layouts
/// - `gauss_legendre(n)` — Gauss-Legendre nodes/weights
/// - `ecp_weights(bw)` — equidistant-cylindrical ring weights
#[pymodule]
fn ringgeom(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGridGeometry>()?;
    m.add_function(wrap_pyfunction!(py_gauss_legendre, m)?)?;
    m.add_function(wrap_pyfunction!(py_ecp_weights, m)?)?;
    Ok(())
}
