// In: src/ffi/python.rs

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::config::BitweaveConfig;
use crate::observability;
use crate::vector::BitVector;

//==================================================================================
// I. Stateful Vector API
//==================================================================================

/// A `BitVector` owned by Python. Integers cross the boundary as Python ints;
/// widths are validated on the Rust side and surface as `ValueError`.
#[pyclass(name = "BitVector", module = "bitweave")]
pub struct PyBitVector {
    inner: BitVector,
}

#[pymethods]
impl PyBitVector {
    #[new]
    #[pyo3(signature = (initial_capacity_words = 4, log_growth = false))]
    fn new(initial_capacity_words: usize, log_growth: bool) -> Self {
        let config = BitweaveConfig {
            initial_capacity_words,
            log_growth,
        };
        Self {
            inner: BitVector::with_config(&config),
        }
    }

    /// Rebuilds a vector from bytes produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(data: &[u8]) -> Self {
        Self {
            inner: BitVector::from_bytes(data),
        }
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.to_bytes())
    }

    #[getter]
    fn write_cursor(&self) -> usize {
        self.inner.write_cursor()
    }

    #[getter]
    fn read_cursor(&self) -> usize {
        self.inner.read_cursor()
    }

    fn reset_read_cursor(&mut self) {
        self.inner.reset_read_cursor();
    }

    fn __len__(&self) -> usize {
        self.inner.write_cursor()
    }

    // --- bits ---

    fn append_bit(&mut self, value: bool) {
        self.inner.append_bit(value);
    }

    fn read_bit(&mut self) -> bool {
        self.inner.read_bit()
    }

    // --- integers ---

    #[pyo3(signature = (value, bits = 64))]
    fn append_int(&mut self, value: i64, bits: u8) -> PyResult<()> {
        Ok(self.inner.append_int_checked(value, bits)?)
    }

    #[pyo3(signature = (bits = 64))]
    fn read_int(&mut self, bits: u8) -> PyResult<i64> {
        Ok(self.inner.read_int(bits)?)
    }

    #[pyo3(signature = (value, bits = 64))]
    fn append_uint(&mut self, value: u64, bits: u8) -> PyResult<()> {
        Ok(self.inner.append_int_checked(value, bits)?)
    }

    #[pyo3(signature = (bits = 64))]
    fn read_uint(&mut self, bits: u8) -> PyResult<u64> {
        Ok(self.inner.read_int(bits)?)
    }

    fn append_dynamic(&mut self, value: i64) {
        self.inner.append_dynamic(value);
    }

    fn read_dynamic(&mut self) -> PyResult<i64> {
        Ok(self.inner.read_dynamic()?)
    }

    fn append_float(&mut self, value: f64) {
        self.inner.append(value);
    }

    fn read_float(&mut self) -> PyResult<f64> {
        Ok(self.inner.read()?)
    }

    // --- variable length ---

    fn append_string(&mut self, value: Option<String>) -> PyResult<()> {
        Ok(self.inner.append_string(value.as_deref())?)
    }

    fn read_string(&mut self) -> PyResult<Option<String>> {
        Ok(self.inner.read_string()?)
    }

    fn append_bytes(&mut self, value: Option<Vec<u8>>) -> PyResult<()> {
        Ok(self.inner.append_byte_array(value.as_deref())?)
    }

    fn read_bytes<'py>(&mut self, py: Python<'py>) -> Option<Bound<'py, PyBytes>> {
        self.inner
            .read_byte_array()
            .map(|bytes| PyBytes::new_bound(py, &bytes))
    }
}

//==================================================================================
// II. Module-level functions
//==================================================================================

#[pyfunction]
#[pyo3(name = "enable_verbose_logging")]
#[pyo3(signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    Ok(observability::enable_verbose_logging(log_file.as_deref())?)
}
