//! types.rs
//! Unified error type for contexts, streams and the one-shot API.
//!
//! Summary: every fallible core operation returns `Result<_, CodecError>`.
//! Engine failures keep the numeric engine code so hosts can surface it.

use thiserror::Error;

/// Errors raised by the codec core.
///
/// "Content size unknown" is deliberately absent: the content-size query
/// reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The engine could not allocate a session.
    #[error("allocation error: failed to create {kind} session")]
    Allocation { kind: &'static str },

    /// Any engine call that returned an error status.
    #[error("engine error: {message}")]
    Engine { code: Option<usize>, message: String },

    /// A byte count outside the representable range.
    #[error("size error: {0}")]
    Size(String),

    /// The context was already moved into a stream.
    #[error("use after move: context ownership was already taken")]
    UseAfterMove,

    /// Operation on a closed context or stream.
    #[error("{0} is closed")]
    Closed(&'static str),

    /// Malformed configuration document.
    #[error("config error: {0}")]
    Config(String),
}

impl CodecError {
    /// Build an engine error from a raw engine code.
    pub fn engine(op: &str, code: usize) -> Self {
        CodecError::Engine {
            code: Some(code),
            message: format!("op={}, error={}", op, crate::engine::error_name(code)),
        }
    }

    /// Engine code, when the failure came from the engine.
    pub fn code(&self) -> Option<usize> {
        match self {
            CodecError::Engine { code, .. } => *code,
            _ => None,
        }
    }
}
