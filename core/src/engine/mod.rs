//! engine/mod.rs
//! Thin layer over `zstd-safe`.
//!
//! Summary: the rest of the crate talks to the engine through the helpers
//! here (directive mapping, error translation, chunk sizes, frame queries),
//! never through raw `zstd_sys` values.

use zstd_safe::zstd_sys::ZSTD_EndDirective;
use zstd_safe::{CCtx, DCtx, SafeResult};

use crate::types::CodecError;

/// End-of-input hint passed with every compression push.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Buffer freely, more input follows.
    Continue,
    /// Emit everything buffered, keep the frame open.
    Flush,
    /// Finalize the current frame.
    End,
}

impl Directive {
    pub(crate) fn end_op(self) -> ZSTD_EndDirective {
        match self {
            Directive::Continue => ZSTD_EndDirective::ZSTD_e_continue,
            Directive::Flush => ZSTD_EndDirective::ZSTD_e_flush,
            Directive::End => ZSTD_EndDirective::ZSTD_e_end,
        }
    }

    /// Operation name used in engine error messages.
    pub(crate) fn op(self) -> &'static str {
        match self {
            Directive::Continue => "compress_stream(continue)",
            Directive::Flush => "compress_stream(flush)",
            Directive::End => "compress_stream(end)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Directive::Continue => "continue",
            Directive::Flush => "flush",
            Directive::End => "end",
        }
    }
}

/// Translate an engine return value, tagging failures with `op`.
pub fn check(op: &str, result: SafeResult) -> Result<usize, CodecError> {
    result.map_err(|code| CodecError::engine(op, code))
}

/// Human readable name for an engine error code.
pub fn error_name(code: usize) -> &'static str {
    zstd_safe::get_error_name(code)
}

/// Recommended input slice size for compression.
pub fn compress_in_size() -> usize {
    CCtx::in_size()
}

/// Recommended output buffer size for compression; always fits one block.
pub fn compress_out_size() -> usize {
    CCtx::out_size()
}

pub fn decompress_in_size() -> usize {
    DCtx::in_size()
}

pub fn decompress_out_size() -> usize {
    DCtx::out_size()
}

pub fn min_level() -> i32 {
    zstd_safe::min_c_level()
}

pub fn max_level() -> i32 {
    zstd_safe::max_c_level()
}

/// Worst-case compressed size for `len` input bytes.
pub fn compress_bound(len: usize) -> usize {
    zstd_safe::compress_bound(len)
}

/// Decoded size recorded in a frame header.
///
/// `Ok(None)` when the frame does not record it (streamed frames often
/// don't); `Err` only for input that is not a frame header.
pub fn frame_content_size(src: &[u8]) -> Result<Option<u64>, CodecError> {
    zstd_safe::get_frame_content_size(src).map_err(|_| CodecError::Engine {
        code: None,
        message: "op=get_frame_content_size, error=invalid frame header".into(),
    })
}

/// Compressed length of the first frame in `src`.
pub fn first_frame_len(src: &[u8]) -> Result<usize, CodecError> {
    check("find_frame_compressed_size", zstd_safe::find_frame_compressed_size(src))
}
