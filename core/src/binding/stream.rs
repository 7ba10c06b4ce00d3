//! binding/stream.rs
//! Stream wrapper exposed to hosts.
//!
//! Each operation decodes the host input, wraps the host callback into a
//! plain sink, runs the stream operation, then reports failures in this
//! order: a failed host callback first, an engine error second.

use crate::binding::binder::Binder;
use crate::binding::context::fail;
use crate::binding::traits::{BytesCodec, CallbackCodec, ErrorReporter};
use crate::stream::{CompressStream, DecompressStream, SessionStream, StreamState};
use crate::telemetry::StreamCounters;
use crate::types::CodecError;

pub struct StreamBinding<S, B, F, E> {
    stream: S,
    binder: Binder<B, F, E>,
}

impl<S: SessionStream, B, F, E> StreamBinding<S, B, F, E> {
    /// Build the stream around a context taken from a `ContextBinding`.
    pub fn create<Ctx>(ctx: Ctx, binder: Binder<B, F, E>, context: S::Context) -> Result<Self, E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        match S::with_context(context) {
            Ok(stream) => Ok(Self { stream, binder }),
            Err(e) => Err(fail(&binder.error, ctx, e)),
        }
    }

    pub fn close<Ctx>(&mut self, ctx: Ctx) -> Result<(), E::Failure>
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        self.stream
            .close()
            .map_err(|e| fail(&self.binder.error, ctx, e))
    }

    pub fn state(&self) -> StreamState {
        self.stream.state()
    }

    pub fn counters(&self) -> StreamCounters {
        self.stream.counters().clone()
    }

    /// Report a host-side validation failure through this binding's reporter.
    pub fn reject<Ctx>(&self, ctx: Ctx, error: CodecError) -> E::Failure
    where
        Ctx: Copy,
        E: ErrorReporter<Ctx>,
    {
        fail(&self.binder.error, ctx, error)
    }

    /// Run `op` with the decoded input and a sink built from `callback`.
    fn drive<Ctx>(
        &mut self,
        ctx: Ctx,
        input: Option<&<B as BytesCodec<Ctx>>::Wire>,
        callback: <F as CallbackCodec<Ctx>>::Wire,
        op: impl FnOnce(&mut S, &[u8], &mut dyn FnMut(&[u8])) -> Result<(), CodecError>,
    ) -> Result<(), <E as ErrorReporter<Ctx>>::Failure>
    where
        Ctx: Copy,
        B: BytesCodec<Ctx>,
        F: CallbackCodec<Ctx, Failure = <E as ErrorReporter<Ctx>>::Failure>,
        E: ErrorReporter<Ctx>,
    {
        let Self { stream, binder } = self;
        let result = {
            let data: &[u8] = match input {
                Some(wire) => binder.bytes.from_wire(ctx, wire),
                None => &[],
            };
            let mut sink = binder.callback.from_wire(ctx, callback);
            op(stream, data, &mut *sink)
        };

        if let Some(failure) = binder.callback.take_failure() {
            log::warn!("{} callback failed, dropping remaining output", S::KIND);
            return Err(failure);
        }
        result.map_err(|e| fail(&binder.error, ctx, e))
    }
}

impl<B, F, E> StreamBinding<CompressStream, B, F, E> {
    pub fn compress<Ctx>(
        &mut self,
        ctx: Ctx,
        data: &<B as BytesCodec<Ctx>>::Wire,
        callback: <F as CallbackCodec<Ctx>>::Wire,
    ) -> Result<(), <E as ErrorReporter<Ctx>>::Failure>
    where
        Ctx: Copy,
        B: BytesCodec<Ctx>,
        F: CallbackCodec<Ctx, Failure = <E as ErrorReporter<Ctx>>::Failure>,
        E: ErrorReporter<Ctx>,
    {
        self.drive(ctx, Some(data), callback, |s, bytes, sink| s.compress(bytes, sink))
    }

    pub fn flush<Ctx>(
        &mut self,
        ctx: Ctx,
        callback: <F as CallbackCodec<Ctx>>::Wire,
    ) -> Result<(), <E as ErrorReporter<Ctx>>::Failure>
    where
        Ctx: Copy,
        B: BytesCodec<Ctx>,
        F: CallbackCodec<Ctx, Failure = <E as ErrorReporter<Ctx>>::Failure>,
        E: ErrorReporter<Ctx>,
    {
        self.drive(ctx, None, callback, |s, _, sink| s.flush(sink))
    }

    pub fn complete<Ctx>(
        &mut self,
        ctx: Ctx,
        callback: <F as CallbackCodec<Ctx>>::Wire,
    ) -> Result<(), <E as ErrorReporter<Ctx>>::Failure>
    where
        Ctx: Copy,
        B: BytesCodec<Ctx>,
        F: CallbackCodec<Ctx, Failure = <E as ErrorReporter<Ctx>>::Failure>,
        E: ErrorReporter<Ctx>,
    {
        self.drive(ctx, None, callback, |s, _, sink| s.complete(sink))
    }
}

impl<B, F, E> StreamBinding<DecompressStream, B, F, E> {
    pub fn decompress<Ctx>(
        &mut self,
        ctx: Ctx,
        data: &<B as BytesCodec<Ctx>>::Wire,
        callback: <F as CallbackCodec<Ctx>>::Wire,
    ) -> Result<(), <E as ErrorReporter<Ctx>>::Failure>
    where
        Ctx: Copy,
        B: BytesCodec<Ctx>,
        F: CallbackCodec<Ctx, Failure = <E as ErrorReporter<Ctx>>::Failure>,
        E: ErrorReporter<Ctx>,
    {
        self.drive(ctx, Some(data), callback, |s, bytes, sink| s.decompress(bytes, sink))
    }

    pub fn get_frame_content_size<Ctx>(
        &mut self,
        ctx: Ctx,
        data: &<B as BytesCodec<Ctx>>::Wire,
    ) -> Result<Option<u64>, <E as ErrorReporter<Ctx>>::Failure>
    where
        Ctx: Copy,
        B: BytesCodec<Ctx>,
        E: ErrorReporter<Ctx>,
    {
        let Self { stream, binder } = self;
        let bytes = binder.bytes.from_wire(ctx, data);
        stream
            .get_frame_content_size(bytes)
            .map_err(|e| fail(&binder.error, ctx, e))
    }

    pub fn frame_complete(&self) -> bool {
        self.stream.frame_complete()
    }
}
