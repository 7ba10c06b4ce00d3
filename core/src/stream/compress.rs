//! stream/compress.rs
//! Compression pump.
//!
//! Design notes:
//! - `compress` pushes with the continue directive and stops once the
//!   slice is consumed and a pull came back short of the scratch capacity.
//! - `flush` and `complete` push an empty slice until the engine reports
//!   nothing left to flush.
//! - After `complete` the engine is ready for a new frame; the pledge made
//!   for the finished frame does not carry over.

use zstd_safe::{InBuffer, OutBuffer};

use crate::constants::kinds;
use crate::context::CompressContext;
use crate::engine::{self, check, Directive};
use crate::stream::{ensure_active, scratch_buffer, SessionStream, StreamState};
use crate::telemetry::StreamCounters;
use crate::types::CodecError;

pub struct CompressStream {
    context: CompressContext,
    scratch: Vec<u8>,
    state: StreamState,
    counters: StreamCounters,
}

impl CompressStream {
    /// Reset `context` and wrap it.
    ///
    /// A pledge set on the context before the hand-over is applied again
    /// after the reset.
    pub fn with_context(mut context: CompressContext) -> Result<Self, CodecError> {
        let pledge = context.pledged_size();
        context.reset_session()?;
        if let Some(size) = pledge {
            context.set_original_size(size)?;
        }

        let mut stream = Self {
            context,
            scratch: scratch_buffer(engine::compress_out_size()),
            state: StreamState::Uninitialized,
            counters: StreamCounters::default(),
        };
        stream.state = StreamState::Active;
        log::debug!("{} created (pledge={:?})", kinds::COMPRESS_STREAM, pledge);
        Ok(stream)
    }

    /// Reset `context`, wrap it, and pledge `size` bytes for the first frame.
    pub fn with_original_size(context: CompressContext, size: u64) -> Result<Self, CodecError> {
        let mut stream = Self::with_context(context)?;
        stream.context.set_original_size(size)?;
        Ok(stream)
    }

    /// Feed `data`, handing every produced chunk to `sink`.
    ///
    /// Empty input is a no-op and never calls `sink`. On error the bytes of
    /// this call must be treated as unprocessed.
    pub fn compress<F>(&mut self, data: &[u8], mut sink: F) -> Result<(), CodecError>
    where
        F: FnMut(&[u8]),
    {
        ensure_active(self.state, kinds::COMPRESS_STREAM)?;
        if data.is_empty() {
            return Ok(());
        }

        for slice in data.chunks(engine::compress_in_size()) {
            self.pump(slice, Directive::Continue, &mut sink)?;
            self.counters.add_input(slice.len());
        }
        Ok(())
    }

    /// Emit everything the engine holds without ending the frame.
    pub fn flush<F>(&mut self, mut sink: F) -> Result<(), CodecError>
    where
        F: FnMut(&[u8]),
    {
        ensure_active(self.state, kinds::COMPRESS_STREAM)?;
        self.pump(&[], Directive::Flush, &mut sink)
    }

    /// Finish the current frame.
    pub fn complete<F>(&mut self, mut sink: F) -> Result<(), CodecError>
    where
        F: FnMut(&[u8]),
    {
        ensure_active(self.state, kinds::COMPRESS_STREAM)?;
        self.pump(&[], Directive::End, &mut sink)?;
        self.counters.add_frame();
        log::debug!(
            "{} frame completed ({} bytes in, {} bytes out)",
            kinds::COMPRESS_STREAM,
            self.counters.bytes_in,
            self.counters.bytes_out
        );
        Ok(())
    }

    /// Close the owned context. The stream is closed afterwards even when
    /// the context reports a failure.
    pub fn close(&mut self) -> Result<(), CodecError> {
        if self.state == StreamState::Closed {
            return Ok(());
        }
        let result = self.context.close();
        self.state = StreamState::Closed;
        log::debug!("{} closed", kinds::COMPRESS_STREAM);
        result
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn counters(&self) -> &StreamCounters {
        &self.counters
    }

    fn pump(
        &mut self,
        input: &[u8],
        directive: Directive,
        sink: &mut dyn FnMut(&[u8]),
    ) -> Result<(), CodecError> {
        let session = self.context.session_mut()?;
        let capacity = self.scratch.capacity();
        let mut in_buf = InBuffer::around(input);

        loop {
            self.scratch.clear();
            let remaining = {
                let mut out_buf = OutBuffer::around(&mut self.scratch);
                check(
                    directive.op(),
                    session.compress_stream2(&mut out_buf, &mut in_buf, directive.end_op()),
                )?
            };

            let produced = self.scratch.len();
            log::trace!(
                "{} pull: directive={}, produced={}, remaining={}",
                kinds::COMPRESS_STREAM,
                directive.as_str(),
                produced,
                remaining
            );
            if produced > 0 {
                self.counters.add_output(produced);
                sink(&self.scratch);
            }

            let done = match directive {
                Directive::Continue => in_buf.pos() == input.len() && produced < capacity,
                Directive::Flush | Directive::End => remaining == 0,
            };
            if done {
                return Ok(());
            }
        }
    }
}

impl SessionStream for CompressStream {
    type Context = CompressContext;
    const KIND: &'static str = kinds::COMPRESS_STREAM;

    fn with_context(context: CompressContext) -> Result<Self, CodecError> {
        CompressStream::with_context(context)
    }
    fn close(&mut self) -> Result<(), CodecError> {
        CompressStream::close(self)
    }
    fn state(&self) -> StreamState {
        self.state
    }
    fn counters(&self) -> &StreamCounters {
        &self.counters
    }
}

impl Drop for CompressStream {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::error!("{} teardown failed: {}", kinds::COMPRESS_STREAM, e);
            std::process::abort();
        }
    }
}
