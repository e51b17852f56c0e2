//! Python Bindings for vectorkit
//!
//! Exposes the Rust vector types to Python via PyO3, wired into the usual
//! dunder protocol.
//!
//! ## Usage
//! ```python
//! from vectorkit import Vector2d, Vector
//!
//! v = Vector2d(3, 4)
//! abs(v)                  # 5.0
//! format(v, '.3ep')       # '<5.000e+00, 9.273e-01>'
//! Vector2d.frombytes(bytes(v)) == v   # True
//! {v, Vector2d(3.0, 4.0)}             # one element
//! ```

use pyo3::exceptions::{PyIndexError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyIterator, PyTuple};

use crate::core::hash::hash_isize;
use crate::core::{Components, Vector, Vector2d, VectorError};

fn to_py_err(e: VectorError) -> PyErr {
    match e {
        VectorError::UndefinedOperation(_) => PyTypeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Components of any Python iterable of numbers, or None
fn extract_components(other: &Bound<'_, PyAny>) -> Option<Vec<f64>> {
    other
        .iter()
        .ok()?
        .map(|item| item.and_then(|i| i.extract::<f64>()).ok())
        .collect()
}

fn components_iter<'py>(py: Python<'py>, components: &[f64]) -> PyResult<Bound<'py, PyIterator>> {
    PyTuple::new_bound(py, components).as_any().iter()
}

// =============================================================================
// Vector2d
// =============================================================================

/// Immutable two-dimensional vector
#[pyclass(name = "Vector2d", frozen)]
#[derive(Clone)]
pub struct PyVector2d {
    inner: Vector2d,
}

#[pymethods]
impl PyVector2d {
    #[new]
    fn new(x: f64, y: f64) -> PyResult<Self> {
        let inner = Vector2d::new(x, y).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x()
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.y()
    }

    fn angle(&self) -> f64 {
        self.inner.angle()
    }

    /// Decode from bytes produced by `bytes(v)`
    #[staticmethod]
    fn frombytes(data: &[u8]) -> PyResult<Self> {
        let inner = Vector2d::from_bytes(data).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn __bytes__<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.to_bytes())
    }

    #[pyo3(signature = (spec=""))]
    fn __format__(&self, spec: &str) -> PyResult<String> {
        self.inner.format(spec).map_err(to_py_err)
    }

    fn __eq__(&self, other: &Bound<'_, PyAny>) -> bool {
        extract_components(other).is_some_and(|c| self.inner.eq_components(c))
    }

    fn __hash__(&self) -> isize {
        hash_isize(self.inner.hash_value())
    }

    fn __abs__(&self) -> f64 {
        self.inner.magnitude()
    }

    fn __bool__(&self) -> bool {
        self.inner.is_truthy()
    }

    fn __len__(&self) -> usize {
        2
    }

    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        components_iter(py, self.inner.as_slice())
    }

    fn __repr__(&self) -> String {
        self.inner.repr()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

// =============================================================================
// Vector
// =============================================================================

/// Immutable N-dimensional vector
#[pyclass(name = "Vector", frozen)]
#[derive(Clone)]
pub struct PyVector {
    inner: Vector,
}

#[pymethods]
impl PyVector {
    #[new]
    fn new(components: Vec<f64>) -> PyResult<Self> {
        let inner = Vector::new(components).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[staticmethod]
    fn frombytes(data: &[u8]) -> PyResult<Self> {
        let inner = Vector::from_bytes(data).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn __bytes__<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.to_bytes())
    }

    #[pyo3(signature = (spec=""))]
    fn __format__(&self, spec: &str) -> PyResult<String> {
        self.inner.format(spec).map_err(to_py_err)
    }

    fn __eq__(&self, other: &Bound<'_, PyAny>) -> bool {
        extract_components(other).is_some_and(|c| self.inner.eq_components(c))
    }

    fn __hash__(&self) -> isize {
        hash_isize(self.inner.hash_value())
    }

    fn __abs__(&self) -> f64 {
        self.inner.magnitude()
    }

    fn __bool__(&self) -> bool {
        self.inner.is_truthy()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __getitem__(&self, index: isize) -> PyResult<f64> {
        let len = self.inner.len() as isize;
        let position = if index < 0 { index + len } else { index };
        usize::try_from(position)
            .ok()
            .and_then(|i| self.inner.get(i))
            .ok_or_else(|| PyIndexError::new_err("Vector index out of range"))
    }

    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        components_iter(py, self.inner.as_slice())
    }

    fn __repr__(&self) -> String {
        self.inner.repr()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

// =============================================================================
// Module Definition
// =============================================================================

#[pymodule]
#[pyo3(name = "_core")]
fn vectorkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyVector2d>()?;
    m.add_class::<PyVector>()?;

    m.add("__doc__", "vectorkit: immutable vectors with a byte codec and a format mini-language.")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
