//! context/decompress.rs
//! Decompression session.

use zstd_safe::{DCtx, ResetDirective};

use crate::constants::kinds;
use crate::context::{close_or_abort, SessionContext};
use crate::engine::check;
use crate::types::CodecError;

/// Owns one decompression session.
pub struct DecompressContext {
    session: Option<DCtx<'static>>,
}

impl DecompressContext {
    pub fn create() -> Result<Self, CodecError> {
        let session = DCtx::try_create().ok_or(CodecError::Allocation {
            kind: kinds::DECOMPRESS_CONTEXT,
        })?;
        log::debug!("{} created", kinds::DECOMPRESS_CONTEXT);
        Ok(Self { session: Some(session) })
    }

    pub(crate) fn session_mut(&mut self) -> Result<&mut DCtx<'static>, CodecError> {
        self.session
            .as_mut()
            .ok_or(CodecError::Closed(kinds::DECOMPRESS_CONTEXT))
    }

    pub fn reset_session(&mut self) -> Result<(), CodecError> {
        check("reset_session", self.session_mut()?.reset(ResetDirective::SessionOnly))?;
        Ok(())
    }

    pub fn clear_dictionary(&mut self) -> Result<(), CodecError> {
        check("clear_dictionary", self.session_mut()?.disable_dictionary())?;
        Ok(())
    }

    pub fn load_dictionary(&mut self, dict: &[u8]) -> Result<(), CodecError> {
        check("load_dictionary", self.session_mut()?.load_dictionary(dict))?;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), CodecError> {
        if self.session.take().is_some() {
            log::debug!("{} closed", kinds::DECOMPRESS_CONTEXT);
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }
}

impl SessionContext for DecompressContext {
    const KIND: &'static str = kinds::DECOMPRESS_CONTEXT;

    fn create() -> Result<Self, CodecError> {
        DecompressContext::create()
    }
    fn reset_session(&mut self) -> Result<(), CodecError> {
        DecompressContext::reset_session(self)
    }
    fn clear_dictionary(&mut self) -> Result<(), CodecError> {
        DecompressContext::clear_dictionary(self)
    }
    fn load_dictionary(&mut self, dict: &[u8]) -> Result<(), CodecError> {
        DecompressContext::load_dictionary(self, dict)
    }
    fn close(&mut self) -> Result<(), CodecError> {
        DecompressContext::close(self)
    }
    fn is_closed(&self) -> bool {
        DecompressContext::is_closed(self)
    }
}

impl Drop for DecompressContext {
    fn drop(&mut self) {
        close_or_abort(self);
    }
}
