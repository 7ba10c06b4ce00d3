//! zstd-codec-core
//!
//! Streaming zstd contexts and a host-agnostic binding layer.
//! No Python, no wasm-bindgen; hosts live in their own crates.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;

// Engine and session owners
pub mod context;
pub mod engine;
pub mod stream;

// Host binding layer
pub mod binding;

pub mod simple;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::binding::{Binder, BindingError, ContextBinding, StreamBinding};
    pub use crate::config::CodecConfig;
    pub use crate::constants::DEFAULT_COMPRESSION_LEVEL;
    pub use crate::context::{CompressContext, DecompressContext, SessionContext};
    pub use crate::stream::{CompressStream, DecompressStream, SessionStream, StreamState};
    pub use crate::telemetry::StreamCounters;
    pub use crate::types::CodecError;
}
