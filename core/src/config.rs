//! config.rs
//! Optional compression settings applied to a fresh context.
//!
//! Design notes:
//! - Every field is optional; `None` leaves the engine default in place.
//! - Hosts build it from keyword arguments or a JSON document.

use serde::{Deserialize, Serialize};

use crate::context::CompressContext;
use crate::types::CodecError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodecConfig {
    pub compression_level: Option<i32>,
    pub checksum: Option<bool>,
    pub original_size: Option<u64>,
}

impl CodecConfig {
    pub fn new(
        compression_level: Option<i32>,
        checksum: Option<bool>,
        original_size: Option<u64>,
    ) -> Self {
        Self { compression_level, checksum, original_size }
    }

    /// Parse `{"compressionLevel": 5, "checksum": true, "originalSize": 1024}`.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// Forward the fields that are set to `context`.
    pub fn apply(&self, context: &mut CompressContext) -> Result<(), CodecError> {
        if let Some(level) = self.compression_level {
            context.set_compression_level(level)?;
        }
        if let Some(checksum) = self.checksum {
            context.set_checksum(checksum)?;
        }
        if let Some(size) = self.original_size {
            context.set_original_size(size)?;
        }
        Ok(())
    }

    /// New context with this configuration applied.
    pub fn build(&self) -> Result<CompressContext, CodecError> {
        let mut context = CompressContext::create()?;
        self.apply(&mut context)?;
        Ok(context)
    }
}
