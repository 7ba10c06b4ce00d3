//! binding/binder.rs

/// One host's capability set.
#[derive(Debug, Clone, Default)]
pub struct Binder<B, F, E> {
    pub bytes: B,
    pub callback: F,
    pub error: E,
}

impl<B, F, E> Binder<B, F, E> {
    pub fn new(bytes: B, callback: F, error: E) -> Self {
        Self { bytes, callback, error }
    }
}
