//! ffi/stream.rs
//! `ZstdCompressStream` / `ZstdDecompressStream`.
//!
//! Each output chunk is delivered to the Python callback as its own
//! `bytes` object, in order, before the method returns.

use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use zstd_codec_core::binding::StreamBinding;
use zstd_codec_core::stream::{CompressStream, DecompressStream, StreamState};
use zstd_codec_core::telemetry::StreamCounters;

use super::binder::{py_binder, PyBytesCodec, PyCallbackCodec, PyErrorReporter};
use super::context::{PyCompressContext, PyDecompressContext};

type Binding<S> = StreamBinding<S, PyBytesCodec, PyCallbackCodec, PyErrorReporter>;

fn counters_dict<'py>(py: Python<'py>, counters: &StreamCounters) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("bytes_in", counters.bytes_in)?;
    dict.set_item("bytes_out", counters.bytes_out)?;
    dict.set_item("chunks_out", counters.chunks_out)?;
    dict.set_item("frames_completed", counters.frames_completed)?;
    Ok(dict)
}

#[pyclass(name = "ZstdCompressStream", module = "zstd_codec")]
pub struct PyCompressStream {
    inner: Binding<CompressStream>,
}

#[pymethods]
impl PyCompressStream {
    /// Takes ownership of `context`'s session.
    #[new]
    fn new(py: Python<'_>, context: &Bound<'_, PyCompressContext>) -> PyResult<Self> {
        let taken = context.try_borrow_mut()?.inner.take_context(py)?;
        Ok(Self { inner: Binding::create(py, py_binder(), taken)? })
    }

    fn compress<'py>(
        &mut self,
        py: Python<'py>,
        data: &Bound<'py, PyBytes>,
        callback: Bound<'py, PyAny>,
    ) -> PyResult<()> {
        self.inner.compress(py, data, callback)
    }

    fn flush<'py>(&mut self, py: Python<'py>, callback: Bound<'py, PyAny>) -> PyResult<()> {
        self.inner.flush(py, callback)
    }

    fn complete<'py>(&mut self, py: Python<'py>, callback: Bound<'py, PyAny>) -> PyResult<()> {
        self.inner.complete(py, callback)
    }

    fn close(&mut self, py: Python<'_>) -> PyResult<()> {
        self.inner.close(py)
    }

    #[getter]
    fn closed(&self) -> bool {
        self.inner.state() == StreamState::Closed
    }

    fn counters<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        counters_dict(py, &self.inner.counters())
    }
}

#[pyclass(name = "ZstdDecompressStream", module = "zstd_codec")]
pub struct PyDecompressStream {
    inner: Binding<DecompressStream>,
}

#[pymethods]
impl PyDecompressStream {
    #[new]
    fn new(py: Python<'_>, context: &Bound<'_, PyDecompressContext>) -> PyResult<Self> {
        let taken = context.try_borrow_mut()?.inner.take_context(py)?;
        Ok(Self { inner: Binding::create(py, py_binder(), taken)? })
    }

    fn decompress<'py>(
        &mut self,
        py: Python<'py>,
        data: &Bound<'py, PyBytes>,
        callback: Bound<'py, PyAny>,
    ) -> PyResult<()> {
        self.inner.decompress(py, data, callback)
    }

    /// `None` when the frame header does not record the size.
    fn get_frame_content_size<'py>(
        &mut self,
        py: Python<'py>,
        data: &Bound<'py, PyBytes>,
    ) -> PyResult<Option<u64>> {
        self.inner.get_frame_content_size(py, data)
    }

    #[getter]
    fn frame_complete(&self) -> bool {
        self.inner.frame_complete()
    }

    fn close(&mut self, py: Python<'_>) -> PyResult<()> {
        self.inner.close(py)
    }

    #[getter]
    fn closed(&self) -> bool {
        self.inner.state() == StreamState::Closed
    }

    fn counters<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        counters_dict(py, &self.inner.counters())
    }
}
