//! simple.rs
//! One-shot helpers for callers that hold the whole input in memory.
//!
//! Frames produced here always record their content size, so `decompress`
//! can size its output up front. Frames without a recorded size, with one
//! above `MAX_PRESIZED_OUTPUT`, or followed by further frames are decoded
//! through a stream instead.

use crate::constants::MAX_PRESIZED_OUTPUT;
use crate::context::{CompressContext, DecompressContext};
use crate::engine::{self, check};
use crate::stream::{CompressStream, DecompressStream};
use crate::types::CodecError;

pub fn compress_bound(len: usize) -> usize {
    engine::compress_bound(len)
}

pub fn content_size(src: &[u8]) -> Result<Option<u64>, CodecError> {
    engine::frame_content_size(src)
}

pub fn compress(src: &[u8], level: i32) -> Result<Vec<u8>, CodecError> {
    let mut dst = Vec::with_capacity(compress_bound(src.len()));
    check("compress", zstd_safe::compress(&mut dst, src, level))?;
    Ok(dst)
}

pub fn decompress(src: &[u8]) -> Result<Vec<u8>, CodecError> {
    match presized_capacity(src)? {
        Some(capacity) => {
            let mut dst = Vec::with_capacity(capacity);
            check("decompress", zstd_safe::decompress(&mut dst, src))?;
            Ok(dst)
        }
        None => decode_all(DecompressContext::create()?, src),
    }
}

pub fn compress_using_dict(src: &[u8], dict: &[u8], level: i32) -> Result<Vec<u8>, CodecError> {
    let mut context = CompressContext::create()?;
    context.load_dictionary(dict)?;
    context.set_compression_level(level)?;

    let mut stream = CompressStream::with_original_size(context, src.len() as u64)?;
    let mut dst = Vec::with_capacity(compress_bound(src.len()));
    stream.compress(src, |chunk| dst.extend_from_slice(chunk))?;
    stream.complete(|chunk| dst.extend_from_slice(chunk))?;
    stream.close()?;
    Ok(dst)
}

pub fn decompress_using_dict(src: &[u8], dict: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut context = DecompressContext::create()?;
    context.load_dictionary(dict)?;
    decode_all(context, src)
}

/// Output capacity to reserve, or `None` to stream.
///
/// The header only sizes its own frame, so input holding more than one
/// frame always streams.
fn presized_capacity(src: &[u8]) -> Result<Option<usize>, CodecError> {
    let size = content_size(src)?;
    if size.is_some() && engine::first_frame_len(src)? != src.len() {
        return Ok(None);
    }
    match size {
        Some(size) if size <= MAX_PRESIZED_OUTPUT => usize::try_from(size)
            .map(Some)
            .map_err(|_| CodecError::Size(format!("content size {} exceeds usize::MAX", size))),
        _ => Ok(None),
    }
}

fn decode_all(context: DecompressContext, src: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut stream = DecompressStream::with_context(context)?;
    let mut dst = Vec::new();
    stream.decompress(src, |chunk| dst.extend_from_slice(chunk))?;
    let complete = stream.frame_complete();
    stream.close()?;
    if !complete {
        return Err(CodecError::Engine {
            code: None,
            message: "op=decompress, error=truncated frame".into(),
        });
    }
    Ok(dst)
}
