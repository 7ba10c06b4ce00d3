//! context/mod.rs
//! Engine session owners.
//!
//! A context owns exactly one engine session. The session is in reset
//! state right after `create` and after `reset_session`; once `close` has
//! run every mutator fails with `CodecError::Closed`.

pub mod compress;
pub mod decompress;

pub use compress::CompressContext;
pub use decompress::DecompressContext;

use crate::types::CodecError;

/// Operations shared by both context variants.
pub trait SessionContext: Sized {
    /// Label used in errors and logs.
    const KIND: &'static str;

    fn create() -> Result<Self, CodecError>;

    /// Reset the session only; parameters and dictionary survive.
    fn reset_session(&mut self) -> Result<(), CodecError>;

    /// Detach any dictionary from the session.
    fn clear_dictionary(&mut self) -> Result<(), CodecError>;

    /// Attach a dictionary; the engine keeps its own copy.
    fn load_dictionary(&mut self, dict: &[u8]) -> Result<(), CodecError>;

    /// Release the session. Idempotent.
    fn close(&mut self) -> Result<(), CodecError>;

    fn is_closed(&self) -> bool;
}

/// Teardown path for contexts and streams: a failing close means the
/// session was already broken, which is not recoverable.
pub(crate) fn close_or_abort<T: SessionContext>(context: &mut T) {
    if let Err(e) = context.close() {
        log::error!("{} teardown failed: {}", T::KIND, e);
        std::process::abort();
    }
}
