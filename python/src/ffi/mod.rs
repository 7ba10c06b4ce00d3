//! ffi/mod.rs
//! Python-facing classes and functions.

mod binder;
mod context;
mod logging;
mod simple;
mod stream;

use pyo3::prelude::*;

pub use binder::ZstdCodecError;

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("ZstdCodecError", py.get_type_bound::<ZstdCodecError>())?;
    m.add(
        "DEFAULT_COMPRESSION_LEVEL",
        zstd_codec_core::constants::DEFAULT_COMPRESSION_LEVEL,
    )?;

    m.add("MIN_COMPRESSION_LEVEL", zstd_codec_core::engine::min_level())?;
    m.add("MAX_COMPRESSION_LEVEL", zstd_codec_core::engine::max_level())?;

    m.add_class::<context::PyCompressContext>()?;
    m.add_class::<context::PyDecompressContext>()?;
    m.add_class::<stream::PyCompressStream>()?;
    m.add_class::<stream::PyDecompressStream>()?;

    m.add_function(wrap_pyfunction!(simple::compress, m)?)?;
    m.add_function(wrap_pyfunction!(simple::decompress, m)?)?;
    m.add_function(wrap_pyfunction!(simple::compress_bound, m)?)?;
    m.add_function(wrap_pyfunction!(simple::content_size, m)?)?;
    m.add_function(wrap_pyfunction!(logging::enable_verbose_logging_py, m)?)?;
    Ok(())
}
