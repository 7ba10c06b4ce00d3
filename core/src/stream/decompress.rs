//! stream/decompress.rs
//! Decompression pump.
//!
//! There is no terminal directive: a frame ends when the engine reports
//! zero bytes left to produce for it.

use zstd_safe::{InBuffer, OutBuffer};

use crate::constants::kinds;
use crate::context::DecompressContext;
use crate::engine::{self, check};
use crate::stream::{ensure_active, scratch_buffer, SessionStream, StreamState};
use crate::telemetry::StreamCounters;
use crate::types::CodecError;

pub struct DecompressStream {
    context: DecompressContext,
    scratch: Vec<u8>,
    state: StreamState,
    counters: StreamCounters,
    frame_complete: bool,
}

impl DecompressStream {
    pub fn with_context(mut context: DecompressContext) -> Result<Self, CodecError> {
        context.reset_session()?;

        let mut stream = Self {
            context,
            scratch: scratch_buffer(engine::decompress_out_size()),
            state: StreamState::Uninitialized,
            counters: StreamCounters::default(),
            frame_complete: false,
        };
        stream.state = StreamState::Active;
        log::debug!("{} created", kinds::DECOMPRESS_STREAM);
        Ok(stream)
    }

    /// Feed compressed `data`, handing every decoded chunk to `sink`.
    ///
    /// Input may stop anywhere, including mid-frame, and may span several
    /// frames. Invalid input fails with `CodecError::Engine`; `sink` is not
    /// called again after the failing pull.
    pub fn decompress<F>(&mut self, data: &[u8], mut sink: F) -> Result<(), CodecError>
    where
        F: FnMut(&[u8]),
    {
        ensure_active(self.state, kinds::DECOMPRESS_STREAM)?;
        if data.is_empty() {
            return Ok(());
        }

        for slice in data.chunks(engine::decompress_in_size()) {
            self.pump(slice, &mut sink)?;
            self.counters.add_input(slice.len());
        }
        Ok(())
    }

    /// Decoded size recorded in the frame header at the start of `data`.
    pub fn get_frame_content_size(&self, data: &[u8]) -> Result<Option<u64>, CodecError> {
        engine::frame_content_size(data)
    }

    /// Whether the last productive pull finished a frame.
    pub fn frame_complete(&self) -> bool {
        self.frame_complete
    }

    pub fn close(&mut self) -> Result<(), CodecError> {
        if self.state == StreamState::Closed {
            return Ok(());
        }
        let result = self.context.close();
        self.state = StreamState::Closed;
        log::debug!("{} closed", kinds::DECOMPRESS_STREAM);
        result
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn counters(&self) -> &StreamCounters {
        &self.counters
    }

    fn pump(&mut self, input: &[u8], sink: &mut dyn FnMut(&[u8])) -> Result<(), CodecError> {
        let session = self.context.session_mut()?;
        let capacity = self.scratch.capacity();
        let mut in_buf = InBuffer::around(input);

        loop {
            let consumed_before = in_buf.pos();
            self.scratch.clear();
            let hint = {
                let mut out_buf = OutBuffer::around(&mut self.scratch);
                check("decompress_stream", session.decompress_stream(&mut out_buf, &mut in_buf))?
            };

            let produced = self.scratch.len();
            log::trace!(
                "{} pull: consumed={}, produced={}, hint={}",
                kinds::DECOMPRESS_STREAM,
                in_buf.pos() - consumed_before,
                produced,
                hint
            );
            if produced > 0 {
                self.counters.add_output(produced);
                sink(&self.scratch);
            }

            // Idle pulls (nothing consumed, nothing produced) say nothing
            // about frame boundaries.
            if produced > 0 || in_buf.pos() > consumed_before {
                self.frame_complete = hint == 0;
                if self.frame_complete {
                    self.counters.add_frame();
                    log::debug!("{} frame completed", kinds::DECOMPRESS_STREAM);
                }
            }

            if in_buf.pos() == input.len() && produced < capacity {
                return Ok(());
            }
        }
    }
}

impl SessionStream for DecompressStream {
    type Context = DecompressContext;
    const KIND: &'static str = kinds::DECOMPRESS_STREAM;

    fn with_context(context: DecompressContext) -> Result<Self, CodecError> {
        DecompressStream::with_context(context)
    }
    fn close(&mut self) -> Result<(), CodecError> {
        DecompressStream::close(self)
    }
    fn state(&self) -> StreamState {
        self.state
    }
    fn counters(&self) -> &StreamCounters {
        &self.counters
    }
}

impl Drop for DecompressStream {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::error!("{} teardown failed: {}", kinds::DECOMPRESS_STREAM, e);
            std::process::abort();
        }
    }
}
