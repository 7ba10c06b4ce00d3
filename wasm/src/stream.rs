//! `ZstdCompressStream` / `ZstdDecompressStream` for JS.
//!
//! Constructing a stream takes the context out of its handle; the handle
//! throws on every later call.

use wasm_bindgen::prelude::*;

use zstd_codec_core::binding::StreamBinding;
use zstd_codec_core::stream::{CompressStream, DecompressStream, StreamState};

use crate::binder::{content_size_to_number, report, wasm_binder, HostCallback, WasmBytes, WasmCallbacks, WasmErrors, WasmHost};
use crate::context::{CompressContextHandle, DecompressContextHandle};

type Binding<S> = StreamBinding<S, WasmBytes, WasmCallbacks, WasmErrors>;

#[wasm_bindgen(js_name = ZstdCompressStream)]
pub struct CompressStreamHandle {
    inner: Binding<CompressStream>,
}

#[wasm_bindgen(js_class = ZstdCompressStream)]
impl CompressStreamHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(context: &mut CompressContextHandle) -> Result<CompressStreamHandle, JsValue> {
        let taken = context.inner.take_context(WasmHost)?;
        Ok(Self { inner: Binding::create(WasmHost, wasm_binder(), taken)? })
    }

    pub fn compress(&mut self, data: Box<[u8]>, callback: HostCallback) -> Result<(), JsValue> {
        self.inner.compress(WasmHost, &data, callback)
    }

    pub fn flush(&mut self, callback: HostCallback) -> Result<(), JsValue> {
        self.inner.flush(WasmHost, callback)
    }

    pub fn complete(&mut self, callback: HostCallback) -> Result<(), JsValue> {
        self.inner.complete(WasmHost, callback)
    }

    pub fn close(&mut self) -> Result<(), JsValue> {
        self.inner.close(WasmHost)
    }

    #[wasm_bindgen(getter)]
    pub fn closed(&self) -> bool {
        self.inner.state() == StreamState::Closed
    }

    /// Counters as a JSON string.
    pub fn counters(&self) -> Result<String, JsValue> {
        self.inner
            .counters()
            .to_json()
            .map_err(|e| JsError::new(&e.to_string()).into())
    }
}

#[wasm_bindgen(js_name = ZstdDecompressStream)]
pub struct DecompressStreamHandle {
    inner: Binding<DecompressStream>,
}

#[wasm_bindgen(js_class = ZstdDecompressStream)]
impl DecompressStreamHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(context: &mut DecompressContextHandle) -> Result<DecompressStreamHandle, JsValue> {
        let taken = context.inner.take_context(WasmHost)?;
        Ok(Self { inner: Binding::create(WasmHost, wasm_binder(), taken)? })
    }

    pub fn decompress(&mut self, data: Box<[u8]>, callback: HostCallback) -> Result<(), JsValue> {
        self.inner.decompress(WasmHost, &data, callback)
    }

    /// `undefined` when the frame does not record its size.
    #[wasm_bindgen(js_name = getFrameContentSize)]
    pub fn get_frame_content_size(&mut self, data: Box<[u8]>) -> Result<Option<f64>, JsValue> {
        let size = self.inner.get_frame_content_size(WasmHost, &data)?;
        content_size_to_number(size).map_err(report)
    }

    #[wasm_bindgen(getter, js_name = frameComplete)]
    pub fn frame_complete(&self) -> bool {
        self.inner.frame_complete()
    }

    pub fn close(&mut self) -> Result<(), JsValue> {
        self.inner.close(WasmHost)
    }

    #[wasm_bindgen(getter)]
    pub fn closed(&self) -> bool {
        self.inner.state() == StreamState::Closed
    }

    pub fn counters(&self) -> Result<String, JsValue> {
        self.inner
            .counters()
            .to_json()
            .map_err(|e| JsError::new(&e.to_string()).into())
    }
}
