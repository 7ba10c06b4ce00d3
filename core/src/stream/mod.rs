//! stream/mod.rs
//! Chunked pumps over a context.
//!
//! Summary:
//! - A stream owns its context and one output scratch buffer sized to the
//!   engine's recommended output chunk.
//! - Input is split into slices of at most the engine's recommended input
//!   size and processed in order.
//! - Every non-empty pull goes to the sink as its own chunk; nothing is
//!   buffered across calls.

pub mod compress;
pub mod decompress;

pub use compress::CompressStream;
pub use decompress::DecompressStream;

use crate::context::SessionContext;
use crate::telemetry::StreamCounters;
use crate::types::CodecError;

/// Stream lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StreamState {
    Uninitialized,
    Active,
    Closed,
}

/// Operations shared by both stream variants.
pub trait SessionStream: Sized {
    type Context: SessionContext;

    /// Label used in errors and logs.
    const KIND: &'static str;

    /// Reset `context` and take ownership of it.
    fn with_context(context: Self::Context) -> Result<Self, CodecError>;

    /// Release the owned context. Terminal and idempotent.
    fn close(&mut self) -> Result<(), CodecError>;

    fn state(&self) -> StreamState;

    fn counters(&self) -> &StreamCounters;
}

pub(crate) fn ensure_active(state: StreamState, kind: &'static str) -> Result<(), CodecError> {
    match state {
        StreamState::Active => Ok(()),
        _ => Err(CodecError::Closed(kind)),
    }
}

/// Scratch buffer for engine output. Only its capacity matters; the
/// length is reset before each pull.
pub(crate) fn scratch_buffer(out_size: usize) -> Vec<u8> {
    Vec::with_capacity(out_size)
}
