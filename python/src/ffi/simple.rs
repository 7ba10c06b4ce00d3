//! ffi/simple.rs
//! One-shot module functions.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use zstd_codec_core::binding::{BindingError, ErrorReporter};
use zstd_codec_core::constants::DEFAULT_COMPRESSION_LEVEL;
use zstd_codec_core::simple;
use zstd_codec_core::types::CodecError;

use super::binder::PyErrorReporter;

fn to_py(py: Python<'_>, e: CodecError) -> PyErr {
    PyErrorReporter.report(py, BindingError::from(e))
}

#[pyfunction]
#[pyo3(signature = (data, level=None, dictionary=None))]
pub fn compress<'py>(
    py: Python<'py>,
    data: &[u8],
    level: Option<i32>,
    dictionary: Option<&[u8]>,
) -> PyResult<Bound<'py, PyBytes>> {
    let level = level.unwrap_or(DEFAULT_COMPRESSION_LEVEL);
    let frame = match dictionary {
        Some(dict) => simple::compress_using_dict(data, dict, level),
        None => simple::compress(data, level),
    }
    .map_err(|e| to_py(py, e))?;
    Ok(PyBytes::new_bound(py, &frame))
}

#[pyfunction]
#[pyo3(signature = (data, dictionary=None))]
pub fn decompress<'py>(
    py: Python<'py>,
    data: &[u8],
    dictionary: Option<&[u8]>,
) -> PyResult<Bound<'py, PyBytes>> {
    let decoded = match dictionary {
        Some(dict) => simple::decompress_using_dict(data, dict),
        None => simple::decompress(data),
    }
    .map_err(|e| to_py(py, e))?;
    Ok(PyBytes::new_bound(py, &decoded))
}

#[pyfunction]
pub fn compress_bound(len: usize) -> usize {
    simple::compress_bound(len)
}

#[pyfunction]
pub fn content_size(py: Python<'_>, data: &[u8]) -> PyResult<Option<u64>> {
    simple::content_size(data).map_err(|e| to_py(py, e))
}
