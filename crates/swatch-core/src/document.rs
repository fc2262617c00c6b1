//! Reading and writing whole swatch files
//!
//! This is the layer that owns the 12-byte file header. The body is handed
//! to [`EntryReader`] on the way in and to [`encode_document`] on the way out.

use std::io::{Read, Write};

use log::{debug, warn};

use crate::ase::header::HEADER_SIZE;
use crate::ase::{Document, EntryReader, FileHeader, encode_document};
use crate::error::{Error, Result};
use crate::options::DecoderOptions;

/// Decode the chunk body of a file lazily
///
/// `reader` must be positioned just after the file header. Entries are
/// produced one at a time; the first error ends the sequence.
pub fn decode_entries<R: Read>(reader: R, options: DecoderOptions) -> EntryReader<R> {
    EntryReader::new(reader, options)
}

impl Document {
    /// Read a complete file: header, then every entry in the body
    pub fn read_from<R: Read>(mut reader: R, options: DecoderOptions) -> Result<Self> {
        let header = FileHeader::read(&mut reader)?;
        debug!(
            "ASE header: version {}.{}, {} chunks",
            header.major, header.minor, header.chunk_count
        );

        let document = decode_entries(reader, options).collect::<Result<Document>>()?;

        let actual = document.chunk_count();
        if actual != header.chunk_count as usize {
            if options.strict_chunk_count {
                return Err(Error::ChunkCountMismatch {
                    declared: header.chunk_count,
                    actual,
                });
            }
            warn!(
                "Header declares {} chunks but entries need {}",
                header.chunk_count, actual
            );
        }

        Ok(document)
    }

    /// Decode a complete file held in memory, with default options
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read_from(data, DecoderOptions::default())
    }

    /// Encode a complete file: header followed by the body
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let header = FileHeader::for_chunk_count(self.chunk_count())?;
        let body = encode_document(self)?;

        let mut out = Vec::with_capacity(HEADER_SIZE + body.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Encode a complete file into `writer`
    ///
    /// The whole file is built before anything is written, so an encoding
    /// error leaves `writer` untouched.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes()?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}
