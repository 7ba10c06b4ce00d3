//! binding/plain.rs
//! Rust-native host: bytes are `Vec<u8>`, callbacks are boxed closures,
//! failures are `BindingError` values.

use crate::binding::binder::Binder;
use crate::binding::context::ContextBinding;
use crate::binding::stream::StreamBinding;
use crate::binding::traits::{BytesCodec, CallbackCodec, ErrorReporter, Sink};
use crate::binding::types::BindingError;

/// Host callback; returning `Err` aborts delivery for the current call.
pub type PlainCallback = Box<dyn FnMut(Vec<u8>) -> Result<(), BindingError>>;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBytes;

impl BytesCodec<()> for PlainBytes {
    type Wire = Vec<u8>;

    fn from_wire<'w>(&'w mut self, _ctx: (), wire: &'w Vec<u8>) -> &'w [u8] {
        wire.as_slice()
    }

    fn into_wire(&self, _ctx: (), bytes: &[u8]) -> Vec<u8> {
        bytes.to_vec()
    }
}

#[derive(Debug, Default)]
pub struct PlainCallbacks {
    bytes: PlainBytes,
    pending: Option<BindingError>,
}

impl CallbackCodec<()> for PlainCallbacks {
    type Wire = PlainCallback;
    type Failure = BindingError;

    fn from_wire<'s>(&'s mut self, ctx: (), mut wire: PlainCallback) -> Sink<'s>
    where
        (): 's,
        PlainCallback: 's,
    {
        let bytes = &self.bytes;
        let pending = &mut self.pending;
        Box::new(move |chunk: &[u8]| {
            if pending.is_some() {
                return;
            }
            if let Err(e) = wire(bytes.into_wire(ctx, chunk)) {
                *pending = Some(e);
            }
        })
    }

    fn take_failure(&mut self) -> Option<BindingError> {
        self.pending.take()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainErrors;

impl ErrorReporter<()> for PlainErrors {
    type Failure = BindingError;

    fn report(&self, _ctx: (), error: BindingError) -> BindingError {
        error
    }
}

pub type PlainBinder = Binder<PlainBytes, PlainCallbacks, PlainErrors>;
pub type PlainContextBinding<T> = ContextBinding<T, PlainBytes, PlainCallbacks, PlainErrors>;
pub type PlainStreamBinding<S> = StreamBinding<S, PlainBytes, PlainCallbacks, PlainErrors>;

pub fn plain_binder() -> PlainBinder {
    Binder::default()
}
