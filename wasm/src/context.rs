//! `ZstdCompressContext` / `ZstdDecompressContext` for JS.

use wasm_bindgen::prelude::*;

use zstd_codec_core::binding::ContextBinding;
use zstd_codec_core::config::CodecConfig;
use zstd_codec_core::context::{CompressContext, DecompressContext};

use crate::binder::{original_size_from_number, report, wasm_binder, WasmBytes, WasmCallbacks, WasmErrors, WasmHost};
use crate::utils::set_panic_hook;

pub(crate) type Binding<T> = ContextBinding<T, WasmBytes, WasmCallbacks, WasmErrors>;

#[wasm_bindgen(js_name = ZstdCompressContext)]
pub struct CompressContextHandle {
    pub(crate) inner: Binding<CompressContext>,
}

#[wasm_bindgen(js_class = ZstdCompressContext)]
impl CompressContextHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CompressContextHandle, JsValue> {
        set_panic_hook();
        Ok(Self { inner: Binding::create(WasmHost, wasm_binder())? })
    }

    /// Build from `{"compressionLevel", "checksum", "originalSize"}`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<CompressContextHandle, JsValue> {
        let config = CodecConfig::from_json(json).map_err(report)?;
        let mut handle = Self::new()?;
        handle.inner.configure(WasmHost, &config)?;
        Ok(handle)
    }

    #[wasm_bindgen(js_name = resetSession)]
    pub fn reset_session(&mut self) -> Result<(), JsValue> {
        self.inner.reset_session(WasmHost)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = clearDictionary)]
    pub fn clear_dictionary(&mut self) -> Result<(), JsValue> {
        self.inner.clear_dictionary(WasmHost)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = loadDictionary)]
    pub fn load_dictionary(&mut self, dictionary: Box<[u8]>) -> Result<(), JsValue> {
        self.inner.load_dictionary(WasmHost, &dictionary)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setCompressionLevel)]
    pub fn set_compression_level(&mut self, level: i32) -> Result<(), JsValue> {
        self.inner.set_compression_level(WasmHost, level)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setChecksum)]
    pub fn set_checksum(&mut self, enable: bool) -> Result<(), JsValue> {
        self.inner.set_checksum(WasmHost, enable)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setOriginalSize)]
    pub fn set_original_size(&mut self, size: f64) -> Result<(), JsValue> {
        let size = original_size_from_number(size).map_err(|e| self.inner.reject(WasmHost, e))?;
        self.inner.set_original_size(WasmHost, size)?;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), JsValue> {
        self.inner.close(WasmHost)
    }
}

#[wasm_bindgen(js_name = ZstdDecompressContext)]
pub struct DecompressContextHandle {
    pub(crate) inner: Binding<DecompressContext>,
}

#[wasm_bindgen(js_class = ZstdDecompressContext)]
impl DecompressContextHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DecompressContextHandle, JsValue> {
        set_panic_hook();
        Ok(Self { inner: Binding::create(WasmHost, wasm_binder())? })
    }

    #[wasm_bindgen(js_name = resetSession)]
    pub fn reset_session(&mut self) -> Result<(), JsValue> {
        self.inner.reset_session(WasmHost)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = clearDictionary)]
    pub fn clear_dictionary(&mut self) -> Result<(), JsValue> {
        self.inner.clear_dictionary(WasmHost)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = loadDictionary)]
    pub fn load_dictionary(&mut self, dictionary: Box<[u8]>) -> Result<(), JsValue> {
        self.inner.load_dictionary(WasmHost, &dictionary)?;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), JsValue> {
        self.inner.close(WasmHost)
    }
}
