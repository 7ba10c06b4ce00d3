//! binding/mod.rs
//! Host-agnostic binding layer.
//!
//! Summary:
//! - A host supplies three capabilities (bytes, callback, error) keyed by
//!   its per-call context type and bundles them in a `Binder`.
//! - `ContextBinding` and `StreamBinding` forward every context and stream
//!   operation, converting host values on the way in and failures on the
//!   way out.
//! - `plain` is the Rust-native host used by the tests.

pub mod binder;
pub mod context;
pub mod plain;
pub mod stream;
pub mod traits;
pub mod types;

pub use binder::Binder;
pub use context::ContextBinding;
pub use stream::StreamBinding;
pub use traits::{BytesCodec, CallbackCodec, ErrorReporter, Sink};
pub use types::BindingError;
