//! One-shot functions for JS.

use wasm_bindgen::prelude::*;

use zstd_codec_core::constants::DEFAULT_COMPRESSION_LEVEL;
use zstd_codec_core::simple;

use crate::binder::{content_size_to_number, report};

/// Single frame with the content size recorded.
#[wasm_bindgen]
pub fn compress(data: &[u8], level: Option<i32>) -> Result<Box<[u8]>, JsValue> {
    let frame = simple::compress(data, level.unwrap_or(DEFAULT_COMPRESSION_LEVEL)).map_err(report)?;
    Ok(frame.into_boxed_slice())
}

#[wasm_bindgen]
pub fn decompress(data: &[u8]) -> Result<Box<[u8]>, JsValue> {
    Ok(simple::decompress(data).map_err(report)?.into_boxed_slice())
}

#[wasm_bindgen(js_name = compressUsingDict)]
pub fn compress_using_dict(data: &[u8], dictionary: &[u8], level: Option<i32>) -> Result<Box<[u8]>, JsValue> {
    let level = level.unwrap_or(DEFAULT_COMPRESSION_LEVEL);
    Ok(simple::compress_using_dict(data, dictionary, level).map_err(report)?.into_boxed_slice())
}

#[wasm_bindgen(js_name = decompressUsingDict)]
pub fn decompress_using_dict(data: &[u8], dictionary: &[u8]) -> Result<Box<[u8]>, JsValue> {
    Ok(simple::decompress_using_dict(data, dictionary).map_err(report)?.into_boxed_slice())
}

#[wasm_bindgen(js_name = compressBound)]
pub fn compress_bound(len: usize) -> usize {
    simple::compress_bound(len)
}

/// `undefined` when the frame does not record its size.
#[wasm_bindgen(js_name = frameContentSize)]
pub fn frame_content_size(data: &[u8]) -> Result<Option<f64>, JsValue> {
    let size = simple::content_size(data).map_err(report)?;
    content_size_to_number(size).map_err(report)
}
