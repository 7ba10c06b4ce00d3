//! ffi/context.rs
//! `ZstdCompressContext` / `ZstdDecompressContext`.
//!
//! Setters return `self` so Python callers can chain them. Constructing a
//! stream takes the context; the Python object stays alive but every later
//! call on it raises `ZstdCodecError`.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use zstd_codec_core::binding::ContextBinding;
use zstd_codec_core::config::CodecConfig;
use zstd_codec_core::context::{CompressContext, DecompressContext};

use super::binder::{py_binder, PyBytesCodec, PyCallbackCodec, PyErrorReporter};

type Binding<T> = ContextBinding<T, PyBytesCodec, PyCallbackCodec, PyErrorReporter>;

#[pyclass(name = "ZstdCompressContext", module = "zstd_codec")]
pub struct PyCompressContext {
    pub(crate) inner: Binding<CompressContext>,
}

#[pymethods]
impl PyCompressContext {
    #[new]
    #[pyo3(signature = (level=None, checksum=None, original_size=None))]
    fn new(
        py: Python<'_>,
        level: Option<i32>,
        checksum: Option<bool>,
        original_size: Option<u64>,
    ) -> PyResult<Self> {
        let mut inner: Binding<CompressContext> = Binding::create(py, py_binder())?;
        inner.configure(py, &CodecConfig::new(level, checksum, original_size))?;
        Ok(Self { inner })
    }

    fn reset_session(mut slf: PyRefMut<'_, Self>) -> PyResult<PyRefMut<'_, Self>> {
        let py = slf.py();
        slf.inner.reset_session(py)?;
        Ok(slf)
    }

    fn clear_dictionary(mut slf: PyRefMut<'_, Self>) -> PyResult<PyRefMut<'_, Self>> {
        let py = slf.py();
        slf.inner.clear_dictionary(py)?;
        Ok(slf)
    }

    fn load_dictionary<'py>(
        mut slf: PyRefMut<'py, Self>,
        dictionary: &Bound<'py, PyBytes>,
    ) -> PyResult<PyRefMut<'py, Self>> {
        let py = slf.py();
        slf.inner.load_dictionary(py, dictionary)?;
        Ok(slf)
    }

    fn set_compression_level(mut slf: PyRefMut<'_, Self>, level: i32) -> PyResult<PyRefMut<'_, Self>> {
        let py = slf.py();
        slf.inner.set_compression_level(py, level)?;
        Ok(slf)
    }

    fn set_checksum(mut slf: PyRefMut<'_, Self>, enable: bool) -> PyResult<PyRefMut<'_, Self>> {
        let py = slf.py();
        slf.inner.set_checksum(py, enable)?;
        Ok(slf)
    }

    /// Negative sizes are rejected by the `u64` conversion with `OverflowError`.
    fn set_original_size(mut slf: PyRefMut<'_, Self>, size: u64) -> PyResult<PyRefMut<'_, Self>> {
        let py = slf.py();
        slf.inner.set_original_size(py, size)?;
        Ok(slf)
    }

    fn close(&mut self, py: Python<'_>) -> PyResult<()> {
        self.inner.close(py)
    }

    #[getter]
    fn moved(&self) -> bool {
        self.inner.is_moved()
    }
}

#[pyclass(name = "ZstdDecompressContext", module = "zstd_codec")]
pub struct PyDecompressContext {
    pub(crate) inner: Binding<DecompressContext>,
}

#[pymethods]
impl PyDecompressContext {
    #[new]
    fn new(py: Python<'_>) -> PyResult<Self> {
        Ok(Self { inner: Binding::create(py, py_binder())? })
    }

    fn reset_session(mut slf: PyRefMut<'_, Self>) -> PyResult<PyRefMut<'_, Self>> {
        let py = slf.py();
        slf.inner.reset_session(py)?;
        Ok(slf)
    }

    fn clear_dictionary(mut slf: PyRefMut<'_, Self>) -> PyResult<PyRefMut<'_, Self>> {
        let py = slf.py();
        slf.inner.clear_dictionary(py)?;
        Ok(slf)
    }

    fn load_dictionary<'py>(
        mut slf: PyRefMut<'py, Self>,
        dictionary: &Bound<'py, PyBytes>,
    ) -> PyResult<PyRefMut<'py, Self>> {
        let py = slf.py();
        slf.inner.load_dictionary(py, dictionary)?;
        Ok(slf)
    }

    fn close(&mut self, py: Python<'_>) -> PyResult<()> {
        self.inner.close(py)
    }

    #[getter]
    fn moved(&self) -> bool {
        self.inner.is_moved()
    }
}
