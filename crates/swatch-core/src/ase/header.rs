//! ASE File Header
//!
//! Every file starts with a fixed 12-byte header:
//!
//! | Offset | Size | Field                    |
//! |--------|------|--------------------------|
//! | 0      | 4    | signature `ASEF`         |
//! | 4      | 2    | major version (1)        |
//! | 6      | 2    | minor version (0)        |
//! | 8      | 4    | number of body chunks    |

use std::io::{Read, Write};

use crate::error::{Error, Result};

/// File signature
pub const SIGNATURE: [u8; 4] = *b"ASEF";

/// Supported major version
pub const VERSION_MAJOR: u16 = 1;

/// Supported minor version
pub const VERSION_MINOR: u16 = 0;

/// Size of the header in bytes
pub const HEADER_SIZE: usize = 12;

/// Parsed file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// File signature (must be `ASEF`)
    pub signature: [u8; 4],
    /// Major version
    pub major: u16,
    /// Minor version
    pub minor: u16,
    /// Declared number of chunks in the body
    pub chunk_count: u32,
}

impl FileHeader {
    /// Header for a version 1.0 file with `chunk_count` body chunks
    pub const fn new(chunk_count: u32) -> Self {
        Self {
            signature: SIGNATURE,
            major: VERSION_MAJOR,
            minor: VERSION_MINOR,
            chunk_count,
        }
    }

    /// Header for a body of `chunks` chunks, failing if it does not fit
    pub fn for_chunk_count(chunks: usize) -> Result<Self> {
        let count = u32::try_from(chunks).map_err(|_| Error::TooManyChunks(chunks))?;
        Ok(Self::new(count))
    }

    /// Parse a header from its 12 bytes, without validating it
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::TruncatedInput {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        Ok(Self {
            signature: [data[0], data[1], data[2], data[3]],
            major: u16::from_be_bytes([data[4], data[5]]),
            minor: u16::from_be_bytes([data[6], data[7]]),
            chunk_count: u32::from_be_bytes([data[8], data[9], data[10], data[11]]),
        })
    }

    /// Read and validate a header from the start of a stream
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut data = Vec::with_capacity(HEADER_SIZE);
        reader
            .by_ref()
            .take(HEADER_SIZE as u64)
            .read_to_end(&mut data)?;

        let header = Self::parse(&data)?;
        header.validate()?;
        Ok(header)
    }

    /// Check signature and version
    pub fn validate(&self) -> Result<()> {
        if self.signature != SIGNATURE {
            return Err(Error::InvalidSignature(self.signature));
        }
        if (self.major, self.minor) != (VERSION_MAJOR, VERSION_MINOR) {
            return Err(Error::UnsupportedVersion {
                major: self.major,
                minor: self.minor,
            });
        }
        Ok(())
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.signature);
        out[4..6].copy_from_slice(&self.major.to_be_bytes());
        out[6..8].copy_from_slice(&self.minor.to_be_bytes());
        out[8..12].copy_from_slice(&self.chunk_count.to_be_bytes());
        out
    }

    /// Write the header to a stream
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }
}
