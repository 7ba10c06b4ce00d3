//! binding/types.rs
//! Structured error handed to a host's error reporter.

use thiserror::Error;

use crate::types::CodecError;

/// Optional engine code plus a message, rendered as
/// `code=Some(11), message=...` or `code=None, message=...`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("code={code:?}, message={message}")]
pub struct BindingError {
    pub code: Option<usize>,
    pub message: String,
}

impl BindingError {
    pub fn new(code: Option<usize>, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl From<CodecError> for BindingError {
    fn from(e: CodecError) -> Self {
        Self { code: e.code(), message: e.to_string() }
    }
}
