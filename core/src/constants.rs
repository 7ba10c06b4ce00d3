//! constants.rs
//! Defaults shared by the core and the host adapters.

/// Compression level used when the caller does not pick one.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Checksum flag used when the caller does not pick one.
pub const DEFAULT_CHECKSUM: bool = false;

/// Largest integer a JS number carries exactly (2^53 - 1).
pub const MAX_SAFE_HOST_INTEGER: u64 = (1 << 53) - 1;

/// Kind labels used in errors and logs.
pub mod kinds {
    pub const COMPRESS_CONTEXT: &str = "compress context";
    pub const DECOMPRESS_CONTEXT: &str = "decompress context";
    pub const COMPRESS_STREAM: &str = "compress stream";
    pub const DECOMPRESS_STREAM: &str = "decompress stream";
}

/// Largest recorded content size the one-shot decoder allocates up front.
pub const MAX_PRESIZED_OUTPUT: u64 = 256 * 1024 * 1024;
