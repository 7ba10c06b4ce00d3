//! WASM capability set.
//!
//! Bytes cross the boundary as `Uint8Array`s; wasm-bindgen copies them
//! into linear memory on the way in and out of it on the way back.
//! Callbacks are plain JS functions and failures are thrown `Error`s.

use wasm_bindgen::prelude::*;

use zstd_codec_core::binding::{Binder, BindingError, BytesCodec, CallbackCodec, ErrorReporter, Sink};
use zstd_codec_core::constants::MAX_SAFE_HOST_INTEGER;
use zstd_codec_core::types::CodecError;

#[wasm_bindgen]
extern "C" {
    /// JS function receiving one `Uint8Array` chunk per call.
    #[wasm_bindgen(typescript_type = "(chunk: Uint8Array) => void")]
    pub type HostCallback;

    #[wasm_bindgen(method, catch, js_name = call)]
    fn call_with(this: &HostCallback, this_arg: &JsValue, chunk: Box<[u8]>) -> Result<JsValue, JsValue>;
}

/// Per-call host handle. The JS side has no per-call state to carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct WasmHost;

#[derive(Debug, Clone, Copy, Default)]
pub struct WasmBytes;

impl BytesCodec<WasmHost> for WasmBytes {
    type Wire = Box<[u8]>;

    fn from_wire<'w>(&'w mut self, _host: WasmHost, wire: &'w Box<[u8]>) -> &'w [u8] {
        wire
    }

    fn into_wire(&self, _host: WasmHost, bytes: &[u8]) -> Box<[u8]> {
        bytes.into()
    }
}

#[derive(Default)]
pub struct WasmCallbacks {
    bytes: WasmBytes,
    pending: Option<JsValue>,
}

impl CallbackCodec<WasmHost> for WasmCallbacks {
    type Wire = HostCallback;
    type Failure = JsValue;

    fn from_wire<'s>(&'s mut self, host: WasmHost, wire: HostCallback) -> Sink<'s>
    where
        WasmHost: 's,
        HostCallback: 's,
    {
        let bytes = &self.bytes;
        let pending = &mut self.pending;
        Box::new(move |chunk: &[u8]| {
            if pending.is_some() {
                return;
            }
            if let Err(thrown) = wire.call_with(&JsValue::NULL, bytes.into_wire(host, chunk)) {
                *pending = Some(thrown);
            }
        })
    }

    fn take_failure(&mut self) -> Option<JsValue> {
        self.pending.take()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WasmErrors;

impl ErrorReporter<WasmHost> for WasmErrors {
    type Failure = JsValue;

    fn report(&self, _host: WasmHost, error: BindingError) -> JsValue {
        JsError::new(&error.to_string()).into()
    }
}

pub type WasmBinder = Binder<WasmBytes, WasmCallbacks, WasmErrors>;

pub fn wasm_binder() -> WasmBinder {
    Binder::default()
}

/// JS numbers are doubles; only non-negative integers up to 2^53 - 1 are
/// exact byte counts.
pub fn original_size_from_number(size: f64) -> Result<u64, CodecError> {
    if size.is_finite() && size >= 0.0 && size.fract() == 0.0 && size <= MAX_SAFE_HOST_INTEGER as f64 {
        Ok(size as u64)
    } else {
        Err(CodecError::Size(format!(
            "originalSize must be zero or a positive integer no larger than {}, got {}",
            MAX_SAFE_HOST_INTEGER, size
        )))
    }
}

/// Frame headers may record any `u64`; only sizes up to 2^53 - 1 survive
/// the trip to a JS number.
pub fn content_size_to_number(size: Option<u64>) -> Result<Option<f64>, CodecError> {
    match size {
        Some(n) if n > MAX_SAFE_HOST_INTEGER => Err(CodecError::Size(format!(
            "frame content size {} exceeds the largest exact number {}",
            n, MAX_SAFE_HOST_INTEGER
        ))),
        other => Ok(other.map(|n| n as f64)),
    }
}

pub(crate) fn report(error: CodecError) -> JsValue {
    WasmErrors.report(WasmHost, BindingError::from(error))
}
