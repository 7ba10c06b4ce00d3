//! context/compress.rs
//! Compression session and its parameters.

use zstd_safe::{CCtx, CParameter, ResetDirective};

use crate::constants::kinds;
use crate::context::{close_or_abort, SessionContext};
use crate::engine::check;
use crate::types::CodecError;

/// Owns one compression session.
pub struct CompressContext {
    session: Option<CCtx<'static>>,
    // The engine forgets the pledge on every session reset; keep it so a
    // stream built from this context can apply it again.
    pledged_size: Option<u64>,
}

impl CompressContext {
    pub fn create() -> Result<Self, CodecError> {
        let session = CCtx::try_create().ok_or(CodecError::Allocation {
            kind: kinds::COMPRESS_CONTEXT,
        })?;
        log::debug!("{} created", kinds::COMPRESS_CONTEXT);
        Ok(Self { session: Some(session), pledged_size: None })
    }

    pub(crate) fn session_mut(&mut self) -> Result<&mut CCtx<'static>, CodecError> {
        self.session
            .as_mut()
            .ok_or(CodecError::Closed(kinds::COMPRESS_CONTEXT))
    }

    pub fn reset_session(&mut self) -> Result<(), CodecError> {
        check("reset_session", self.session_mut()?.reset(ResetDirective::SessionOnly))?;
        self.pledged_size = None;
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

    /// Level range is engine-defined; out-of-range values are engine errors.
    pub fn set_compression_level(&mut self, level: i32) -> Result<(), CodecError> {
        check(
            "set_compression_level",
            self.session_mut()?.set_parameter(CParameter::CompressionLevel(level)),
        )?;
        Ok(())
    }

    pub fn set_checksum(&mut self, enable: bool) -> Result<(), CodecError> {
        check(
            "set_checksum",
            self.session_mut()?.set_parameter(CParameter::ChecksumFlag(enable)),
        )?;
        Ok(())
    }

    /// Pledge the total number of bytes the next frame will carry.
    ///
    /// The engine checks the pledge while compressing; a mismatch shows up
    /// as an engine error from the stream.
    pub fn set_original_size(&mut self, size: u64) -> Result<(), CodecError> {
        check(
            "set_original_size",
            self.session_mut()?.set_pledged_src_size(Some(size)),
        )?;
        self.pledged_size = Some(size);
        Ok(())
    }

    /// Pledge recorded since the last session reset.
    pub fn pledged_size(&self) -> Option<u64> {
        self.pledged_size
    }

    pub fn close(&mut self) -> Result<(), CodecError> {
        if self.session.take().is_some() {
            self.pledged_size = None;
            log::debug!("{} closed", kinds::COMPRESS_CONTEXT);
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }
}

impl SessionContext for CompressContext {
    const KIND: &'static str = kinds::COMPRESS_CONTEXT;

    fn create() -> Result<Self, CodecError> {
        CompressContext::create()
    }
    fn reset_session(&mut self) -> Result<(), CodecError> {
        CompressContext::reset_session(self)
    }
    fn clear_dictionary(&mut self) -> Result<(), CodecError> {
        CompressContext::clear_dictionary(self)
    }
    fn load_dictionary(&mut self, dict: &[u8]) -> Result<(), CodecError> {
        CompressContext::load_dictionary(self, dict)
    }
    fn close(&mut self) -> Result<(), CodecError> {
        CompressContext::close(self)
    }
    fn is_closed(&self) -> bool {
        CompressContext::is_closed(self)
    }
}

impl Drop for CompressContext {
    fn drop(&mut self) {
        close_or_abort(self);
    }
}
