//! telemetry/counters.rs
//! Byte and chunk counters collected by a stream.
//!
//! Summary: each stream owns one `StreamCounters` and bumps it per pull.
//! Hosts read a copy through `counters()`.

use serde::Serialize;
use std::ops::AddAssign;

/// Deterministic counters collected during stream processing.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StreamCounters {
    /// Bytes handed to the engine.
    pub bytes_in: u64,
    /// Bytes delivered to sinks.
    pub bytes_out: u64,
    /// Number of sink invocations.
    pub chunks_out: u64,
    /// Frames finished (`complete` on compression, end-of-frame on decompression).
    pub frames_completed: u64,
}

impl StreamCounters {
    /// Record one input slice consumed by the engine.
    pub fn add_input(&mut self, len: usize) {
        self.bytes_in += len as u64;
    }

    /// Record one non-empty chunk handed to a sink.
    pub fn add_output(&mut self, len: usize) {
        self.chunks_out += 1;
        self.bytes_out += len as u64;
    }

    pub fn add_frame(&mut self) {
        self.frames_completed += 1;
    }

    /// Output over input, `0.0` before any input was seen.
    pub fn ratio(&self) -> f64 {
        if self.bytes_in > 0 {
            self.bytes_out as f64 / self.bytes_in as f64
        } else {
            0.0
        }
    }

    pub fn merge(&mut self, other: &StreamCounters) {
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
        self.chunks_out += other.chunks_out;
        self.frames_completed += other.frames_completed;
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl AddAssign for StreamCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
