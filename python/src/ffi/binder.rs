//! ffi/binder.rs
//! Python capability set: `bytes` objects, callables, `ZstdCodecError`.

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use zstd_codec_core::binding::{Binder, BindingError, BytesCodec, CallbackCodec, ErrorReporter, Sink};

create_exception!(zstd_codec, ZstdCodecError, PyException);

#[derive(Debug, Clone, Copy, Default)]
pub struct PyBytesCodec;

impl<'py> BytesCodec<Python<'py>> for PyBytesCodec {
    type Wire = Bound<'py, PyBytes>;

    fn from_wire<'w>(&'w mut self, _py: Python<'py>, wire: &'w Bound<'py, PyBytes>) -> &'w [u8] {
        wire.as_bytes()
    }

    fn into_wire(&self, py: Python<'py>, bytes: &[u8]) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, bytes)
    }
}

/// Calls a Python callable once per chunk with a fresh `bytes` object.
#[derive(Debug, Default)]
pub struct PyCallbackCodec {
    bytes: PyBytesCodec,
    pending: Option<PyErr>,
}

impl<'py> CallbackCodec<Python<'py>> for PyCallbackCodec {
    type Wire = Bound<'py, PyAny>;
    type Failure = PyErr;

    fn from_wire<'s>(&'s mut self, py: Python<'py>, wire: Bound<'py, PyAny>) -> Sink<'s>
    where
        Python<'py>: 's,
        Bound<'py, PyAny>: 's,
    {
        let bytes = &self.bytes;
        let pending = &mut self.pending;
        Box::new(move |chunk: &[u8]| {
            if pending.is_some() {
                return;
            }
            if let Err(err) = wire.call1((bytes.into_wire(py, chunk),)) {
                *pending = Some(err);
            }
        })
    }

    fn take_failure(&mut self) -> Option<PyErr> {
        self.pending.take()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PyErrorReporter;

impl<'py> ErrorReporter<Python<'py>> for PyErrorReporter {
    type Failure = PyErr;

    fn report(&self, _py: Python<'py>, error: BindingError) -> PyErr {
        ZstdCodecError::new_err(error.to_string())
    }
}

pub type PyBinder = Binder<PyBytesCodec, PyCallbackCodec, PyErrorReporter>;

pub fn py_binder() -> PyBinder {
    Binder::default()
}
