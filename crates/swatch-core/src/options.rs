//! Decoder configuration

/// Default cap on a single chunk's declared payload length (16 MiB)
pub const DEFAULT_MAX_CHUNK_LENGTH: u32 = 16 * 1024 * 1024;

/// Options controlling how swatch files are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Largest payload length a chunk may declare before it is rejected.
    /// Checked before any bytes of the payload are read.
    pub max_chunk_length: u32,
    /// Reject files whose header chunk count disagrees with the decoded
    /// entries. When off, the mismatch is only logged.
    pub strict_chunk_count: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_chunk_length: DEFAULT_MAX_CHUNK_LENGTH,
            strict_chunk_count: false,
        }
    }
}

impl DecoderOptions {
    /// Set the largest accepted chunk payload length
    pub const fn with_max_chunk_length(mut self, length: u32) -> Self {
        self.max_chunk_length = length;
        self
    }

    /// Enable or disable the header chunk count check
    pub const fn with_strict_chunk_count(mut self, strict: bool) -> Self {
        self.strict_chunk_count = strict;
        self
    }
}
