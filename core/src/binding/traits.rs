//! binding/traits.rs
//! The three host capabilities.
//!
//! `Ctx` is the host's per-call handle (for example a GIL token). It is
//! `Copy` so every capability can receive it by value.

use crate::binding::types::BindingError;

/// Plain sink produced from a host callback.
pub type Sink<'s> = Box<dyn FnMut(&[u8]) + 's>;

/// Host byte values to and from plain byte slices.
pub trait BytesCodec<Ctx: Copy> {
    type Wire;

    /// Borrow the bytes of `wire` for the current call.
    ///
    /// Implementations may copy into scratch storage owned by the codec;
    /// the slice never outlives the call.
    fn from_wire<'w>(&'w mut self, ctx: Ctx, wire: &'w Self::Wire) -> &'w [u8];

    fn into_wire(&self, ctx: Ctx, bytes: &[u8]) -> Self::Wire;
}

/// Host callbacks to plain sinks.
///
/// Implementations hold a `BytesCodec` and re-encode every chunk with it,
/// so sink callers only see byte slices.
pub trait CallbackCodec<Ctx: Copy> {
    type Wire;
    type Failure;

    fn from_wire<'s>(&'s mut self, ctx: Ctx, wire: Self::Wire) -> Sink<'s>
    where
        Ctx: 's,
        Self::Wire: 's;

    /// Failure raised by the host callback during the last call, if any.
    ///
    /// Once a callback fails the sink skips the remaining chunks of that
    /// call; the failure wins over whatever the engine returned.
    fn take_failure(&mut self) -> Option<Self::Failure> {
        None
    }
}

/// Structured errors to the host's native failure value.
pub trait ErrorReporter<Ctx: Copy> {
    type Failure;

    fn report(&self, ctx: Ctx, error: BindingError) -> Self::Failure;
}
