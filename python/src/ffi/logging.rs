//! ffi/logging.rs
//! On-demand `env_logger` backend for the core's `log` output.

use std::fs::OpenOptions;
use std::sync::Once;

use log::LevelFilter;
use pyo3::exceptions::PyIOError;
use pyo3::prelude::*;

static INIT_LOGGER: Once = Once::new();

/// Route core logging to stderr, or append it to `log_file`.
///
/// Only the first call installs a logger; later calls are no-ops.
#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file=None, level="debug"))]
pub fn enable_verbose_logging_py(log_file: Option<String>, level: &str) -> PyResult<()> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| pyo3::exceptions::PyValueError::new_err(format!("unknown log level: {}", level)))?;

    let target = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(&path)
                .map_err(|e| PyIOError::new_err(format!("cannot open log file {}: {}", path, e)))?,
        ),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.is_test(false);
        builder.filter_level(filter);

        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        if let Err(e) = builder.try_init() {
            log::warn!("verbose logging not enabled, another logger is installed: {}", e);
        }
    });
    Ok(())
}
