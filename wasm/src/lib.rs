//! zstd-codec-wasm
//!
//! wasm-bindgen host for zstd-codec-core: contexts, streams with JS
//! callbacks, and one-shot helpers.

mod utils;

pub mod binder;
pub mod context;
pub mod simple;
pub mod stream;

pub use binder::{content_size_to_number, original_size_from_number, WasmHost};
pub use context::{CompressContextHandle, DecompressContextHandle};
pub use stream::{CompressStreamHandle, DecompressStreamHandle};
