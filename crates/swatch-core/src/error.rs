//! Error types for swatch-core

use thiserror::Error;

/// Result type for swatch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or encoding a swatch file
///
/// Every variant aborts the current call. The decoder never resynchronizes
/// after an error, so a failed decode yields no partial document.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Fewer bytes were available than a length field demanded
    #[error("Truncated input: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    /// A chunk tag outside the recognized set
    #[error("Malformed chunk tag: 0x{0:04X}")]
    MalformedChunkTag(u16),

    /// A group body was not closed by `0xC002` followed by four zero bytes
    #[error("Malformed group terminator: tag 0x{tag:04X}, payload {payload:02X?}")]
    MalformedGroupTerminator { tag: u16, payload: [u8; 4] },

    /// A color-space tag not present in the registry
    #[error("Unknown color space: {:?}", String::from_utf8_lossy(.0))]
    UnknownColorSpace([u8; 4]),

    /// A usage code outside Global/Spot/Process
    #[error("Invalid usage code: {0}")]
    InvalidUsageCode(i16),

    /// Title bytes are not valid UTF-16BE
    #[error("Title is not valid UTF-16BE: {0}")]
    TextDecode(#[from] std::string::FromUtf16Error),

    /// Color values do not match the arity of their color space
    #[error("{space} color needs {expected} values, got {actual}")]
    ArityMismatch {
        space: crate::ColorSpace,
        expected: usize,
        actual: usize,
    },

    /// A chunk payload carries bytes its grammar does not account for
    #[error("Chunk 0x{tag:04X} has {count} trailing bytes")]
    TrailingBytes { tag: u16, count: usize },

    /// Title block does not end with its NUL terminator
    #[error("Title is missing its NUL terminator")]
    UnterminatedTitle,

    /// Names cannot carry the NUL terminator inside them
    #[error("Name contains an embedded NUL: {0:?}")]
    InvalidName(String),

    /// Name is longer than the 16-bit title length allows
    #[error("Name too long: {0} UTF-16 code units")]
    NameTooLong(usize),

    /// A chunk length above the configured or representable limit
    #[error("Chunk too large: {length} bytes exceeds limit of {limit}")]
    ChunkTooLarge { length: u64, limit: u64 },

    /// File does not start with `ASEF`
    #[error("Invalid file signature: {0:02X?} (expected 'ASEF')")]
    InvalidSignature([u8; 4]),

    /// File version other than 1.0
    #[error("Unsupported file version: {major}.{minor}")]
    UnsupportedVersion { major: u16, minor: u16 },

    /// Header chunk count disagrees with the decoded entries
    #[error("Chunk count mismatch: header declares {declared}, entries need {actual}")]
    ChunkCountMismatch { declared: u32, actual: usize },

    /// Document expands to more chunks than the header can declare
    #[error("Too many chunks for header: {0}")]
    TooManyChunks(usize),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
