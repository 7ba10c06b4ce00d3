//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use zstd_codec_wasm::binder::HostCallback;
use zstd_codec_wasm::{
    CompressContextHandle, CompressStreamHandle, DecompressContextHandle, DecompressStreamHandle,
};

wasm_bindgen_test_configure!(run_in_browser);

type Collector = Closure<dyn FnMut(Box<[u8]>)>;

fn collector() -> (Rc<RefCell<Vec<u8>>>, Collector) {
    let out = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&out);
    let closure = Closure::wrap(Box::new(move |chunk: Box<[u8]>| {
        sink.borrow_mut().extend_from_slice(&chunk);
    }) as Box<dyn FnMut(Box<[u8]>)>);
    (out, closure)
}

fn callback(closure: &Collector) -> HostCallback {
    closure.as_ref().clone().unchecked_into()
}

#[wasm_bindgen_test]
fn stream_round_trip() {
    let input = "the quick brown fox".repeat(10_000).into_bytes();

    let mut cctx = CompressContextHandle::new().unwrap();
    cctx.set_compression_level(5).unwrap();
    cctx.set_original_size(input.len() as f64).unwrap();
    let mut cstream = CompressStreamHandle::new(&mut cctx).unwrap();

    let (frame, closure) = collector();
    cstream.compress(input.clone().into_boxed_slice(), callback(&closure)).unwrap();
    cstream.complete(callback(&closure)).unwrap();
    cstream.close().unwrap();
    let frame = frame.borrow().clone();
    assert!(frame.len() < input.len());

    let mut dctx = DecompressContextHandle::new().unwrap();
    let mut dstream = DecompressStreamHandle::new(&mut dctx).unwrap();
    assert_eq!(
        dstream.get_frame_content_size(frame.clone().into_boxed_slice()).unwrap(),
        Some(input.len() as f64)
    );

    let (decoded, closure) = collector();
    dstream.decompress(frame.into_boxed_slice(), callback(&closure)).unwrap();
    assert_eq!(*decoded.borrow(), input);
    assert!(dstream.frame_complete());
}

#[wasm_bindgen_test]
fn context_is_single_use() {
    let mut cctx = CompressContextHandle::new().unwrap();
    let _stream = CompressStreamHandle::new(&mut cctx).unwrap();
    assert!(CompressStreamHandle::new(&mut cctx).is_err());
    assert!(cctx.set_checksum(true).is_err());
}

#[wasm_bindgen_test]
fn rejects_unrepresentable_original_size() {
    let mut cctx = CompressContextHandle::new().unwrap();
    assert!(cctx.set_original_size(-1.0).is_err());
    assert!(cctx.set_original_size(1.5).is_err());
    assert!(cctx.set_original_size(f64::NAN).is_err());
    assert!(cctx.set_original_size(1024.0).is_ok());
}

#[wasm_bindgen_test]
fn invalid_frame_throws() {
    let mut dctx = DecompressContextHandle::new().unwrap();
    let mut dstream = DecompressStreamHandle::new(&mut dctx).unwrap();
    let (out, closure) = collector();
    let data = b"not a zstd frame".to_vec().into_boxed_slice();
    assert!(dstream.decompress(data, callback(&closure)).is_err());
    assert!(out.borrow().is_empty());
}
