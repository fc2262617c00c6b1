//! Chunk decoder
//!
//! [`EntryReader`] pulls chunks from any [`Read`] source one at a time and
//! yields top-level [`Entry`] values. Only the current chunk's payload is
//! buffered, so large files never need to be held in memory.
//!
//! The reader is single pass and fused: after end of stream or the first
//! error it yields nothing further.

use std::io::{self, Read};

use log::{debug, trace};

use super::chunk::{
    COLOR_TAG, ChunkKind, GROUP_END_PAYLOAD, GROUP_END_TAG, parse_color_payload,
    parse_group_payload,
};
use super::types::{Color, Entry, Group};
use crate::error::{Error, Result};
use crate::options::DecoderOptions;

/// Lazy sequence of top-level entries decoded from a chunk stream
#[derive(Debug)]
pub struct EntryReader<R> {
    reader: R,
    options: DecoderOptions,
    chunks_read: usize,
    done: bool,
}

impl<R: Read> EntryReader<R> {
    /// Create a reader positioned at the first chunk (after the file header)
    pub fn new(reader: R, options: DecoderOptions) -> Self {
        Self {
            reader,
            options,
            chunks_read: 0,
            done: false,
        }
    }

    /// Number of chunks consumed so far, group-end markers included
    pub fn chunks_read(&self) -> usize {
        self.chunks_read
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decode the next top-level entry, `None` at a clean end of stream
    fn next_entry(&mut self) -> Result<Option<Entry>> {
        loop {
            let Some(tag) = self.read_tag()? else {
                return Ok(None);
            };

            match ChunkKind::from_tag(tag)? {
                ChunkKind::Color => {
                    let color = self.read_color()?;
                    trace!("Color chunk: {:?} ({})", color.name, color.space);
                    return Ok(Some(Entry::Color(color)));
                }
                ChunkKind::GroupStart => {
                    let group = self.read_group()?;
                    return Ok(Some(Entry::Group(group)));
                }
                ChunkKind::GroupEnd => {
                    // Stray terminator with no open group: consume it, emit nothing
                    self.read_group_end(tag)?;
                    debug!("Skipping group end marker at top level");
                }
            }
        }
    }

    fn read_color(&mut self) -> Result<Color> {
        let payload = self.read_payload()?;
        parse_color_payload(&payload)
    }

    fn read_group(&mut self) -> Result<Group> {
        let payload = self.read_payload()?;
        let mut group = Group::new(parse_group_payload(&payload)?);
        debug!("Group start: {:?}", group.name);

        loop {
            let tag = self.read_tag()?.ok_or(Error::TruncatedInput {
                expected: 2,
                actual: 0,
            })?;

            match tag {
                COLOR_TAG => {
                    let color = self.read_color()?;
                    trace!("Group member: {:?} ({})", color.name, color.space);
                    group.push(color);
                }
                GROUP_END_TAG => {
                    self.read_group_end(tag)?;
                    debug!("Group end: {:?} with {} colors", group.name, group.len());
                    return Ok(group);
                }
                _ => {
                    // Nested groups are not part of the format
                    ChunkKind::from_tag(tag)?;
                    return Err(Error::MalformedGroupTerminator {
                        tag,
                        payload: [0; 4],
                    });
                }
            }
        }
    }

    /// Read the fixed four-byte body of a group-end chunk
    fn read_group_end(&mut self, tag: u16) -> Result<()> {
        let mut payload = [0u8; 4];
        self.read_exact_counted(&mut payload)?;
        if payload != GROUP_END_PAYLOAD {
            return Err(Error::MalformedGroupTerminator { tag, payload });
        }
        Ok(())
    }

    /// Read a chunk tag, `None` if the stream ended cleanly before it
    fn read_tag(&mut self) -> Result<Option<u16>> {
        let mut buf = [0u8; 2];
        match fill(&mut self.reader, &mut buf)? {
            0 => Ok(None),
            2 => {
                self.chunks_read += 1;
                Ok(Some(u16::from_be_bytes(buf)))
            }
            n => Err(Error::TruncatedInput {
                expected: 2,
                actual: n,
            }),
        }
    }

    /// Read a length-prefixed payload
    fn read_payload(&mut self) -> Result<Vec<u8>> {
        let mut len = [0u8; 4];
        self.read_exact_counted(&mut len)?;
        let length = u32::from_be_bytes(len);

        if length > self.options.max_chunk_length {
            return Err(Error::ChunkTooLarge {
                length: u64::from(length),
                limit: u64::from(self.options.max_chunk_length),
            });
        }

        // Grows with the bytes actually present, not the declared length
        let mut payload = Vec::new();
        self.reader
            .by_ref()
            .take(u64::from(length))
            .read_to_end(&mut payload)?;

        if payload.len() < length as usize {
            return Err(Error::TruncatedInput {
                expected: length as usize,
                actual: payload.len(),
            });
        }
        Ok(payload)
    }

    fn read_exact_counted(&mut self, buf: &mut [u8]) -> Result<()> {
        let n = fill(&mut self.reader, buf)?;
        if n < buf.len() {
            return Err(Error::TruncatedInput {
                expected: buf.len(),
                actual: n,
            });
        }
        Ok(())
    }
}

impl<R: Read> Iterator for EntryReader<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for EntryReader<R> {}

/// Read until `buf` is full or the stream ends, returning the bytes read
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ase::space::ColorSpace;
    use crate::ase::types::Usage;

    fn color_chunk(name: &str, space: &[u8; 4], values: &[f32], usage: i16) -> Vec<u8> {
        let mut payload = Vec::new();
        let units: Vec<u16> = name.encode_utf16().chain([0]).collect();
        payload.extend_from_slice(&(units.len() as u16).to_be_bytes());
        for unit in units {
            payload.extend_from_slice(&unit.to_be_bytes());
        }
        payload.extend_from_slice(space);
        for value in values {
            payload.extend_from_slice(&value.to_be_bytes());
        }
        payload.extend_from_slice(&usage.to_be_bytes());

        let mut chunk = vec![0x00, 0x01];
        chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        chunk.extend_from_slice(&payload);
        chunk
    }

    fn group_start(name: &str) -> Vec<u8> {
        let units: Vec<u16> = name.encode_utf16().chain([0]).collect();
        let mut payload = (units.len() as u16).to_be_bytes().to_vec();
        for unit in units {
            payload.extend_from_slice(&unit.to_be_bytes());
        }
        let mut chunk = vec![0xC0, 0x01];
        chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        chunk.extend_from_slice(&payload);
        chunk
    }

    const GROUP_END: [u8; 6] = [0xC0, 0x02, 0, 0, 0, 0];

    fn decode(data: &[u8]) -> Vec<Result<Entry>> {
        EntryReader::new(data, DecoderOptions::default()).collect()
    }

    #[test]
    fn test_empty_stream() {
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn test_single_color() {
        let data = color_chunk("Light Grey", b"Gray", &[0.75], 2);
        let entries = decode(&data);
        assert_eq!(entries.len(), 1);

        let color = entries[0].as_ref().unwrap().as_color().unwrap();
        assert_eq!(color.name, "Light Grey");
        assert_eq!(color.space, ColorSpace::Gray);
        assert_eq!(color.values, vec![0.75]);
        assert_eq!(color.usage, Usage::Process);
    }

    #[test]
    fn test_group_with_members() {
        let mut data = group_start("Accent Colors");
        data.extend(color_chunk("Red", b"RGB ", &[1.0, 0.0, 0.0], 0));
        data.extend(color_chunk("Cyan", b"LAB ", &[0.6, -35.0, -5.0], 1));
        data.extend_from_slice(&GROUP_END);
        data.extend(color_chunk("After", b"CMYK", &[0.0, 0.0, 0.0, 1.0], 2));

        let mut reader = EntryReader::new(&data[..], DecoderOptions::default());
        let group = reader.next().unwrap().unwrap();
        let group = group.as_group().unwrap();
        assert_eq!(group.name, "Accent Colors");
        assert_eq!(group.len(), 2);
        assert_eq!(group.colors[1].values, vec![0.6, -35.0, -5.0]);
        assert_eq!(group.colors[1].usage, Usage::Spot);

        let after = reader.next().unwrap().unwrap();
        assert_eq!(after.name(), "After");
        assert!(reader.next().is_none());
        assert_eq!(reader.chunks_read(), 5);
    }

    #[test]
    fn test_empty_group() {
        let mut data = group_start("empty");
        data.extend_from_slice(&GROUP_END);
        let entries = decode(&data);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].as_ref().unwrap().as_group().unwrap().is_empty());
    }

    #[test]
    fn test_stray_group_end_is_skipped() {
        let mut data = GROUP_END.to_vec();
        data.extend(color_chunk("a", b"Gray", &[0.0], 0));
        let entries = decode(&data);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].as_ref().unwrap().name(), "a");
    }

    #[test]
    fn test_stray_group_end_with_payload() {
        let data = [0xC0, 0x02, 0, 0, 0, 1];
        let entries = decode(&data);
        assert!(matches!(
            entries[0],
            Err(Error::MalformedGroupTerminator {
                tag: GROUP_END_TAG,
                payload: [0, 0, 0, 1]
            })
        ));
    }

    #[test]
    fn test_unknown_top_level_tag() {
        let mut data = color_chunk("a", b"Gray", &[0.0], 0);
        data.extend_from_slice(&[0x00, 0x02, 0, 0, 0, 0]);
        data.extend(color_chunk("b", b"Gray", &[0.0], 0));

        let entries = decode(&data);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_ok());
        assert!(matches!(entries[1], Err(Error::MalformedChunkTag(0x0002))));
    }

    #[test]
    fn test_group_interrupted_by_unknown_tag() {
        let mut data = color_chunk("before", b"Gray", &[0.0], 0);
        data.extend(group_start("g"));
        data.extend(color_chunk("a", b"Gray", &[0.0], 0));
        data.extend_from_slice(&[0xFF, 0xFF, 0, 0, 0, 0]);

        let entries = decode(&data);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_ok());
        assert!(matches!(entries[1], Err(Error::MalformedChunkTag(0xFFFF))));
    }

    #[test]
    fn test_nested_group_rejected() {
        let mut data = group_start("outer");
        data.extend(group_start("inner"));
        assert!(matches!(
            decode(&data)[0],
            Err(Error::MalformedGroupTerminator {
                tag: 0xC001,
                ..
            })
        ));
    }

    #[test]
    fn test_group_end_with_nonzero_payload() {
        let mut data = group_start("g");
        data.extend_from_slice(&[0xC0, 0x02, 0, 0, 0, 4]);
        assert!(matches!(
            decode(&data)[0],
            Err(Error::MalformedGroupTerminator { .. })
        ));
    }

    #[test]
    fn test_unterminated_group() {
        let mut data = group_start("g");
        data.extend(color_chunk("a", b"Gray", &[0.0], 0));
        assert!(matches!(
            decode(&data)[0],
            Err(Error::TruncatedInput { expected: 2, actual: 0 })
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let mut data = color_chunk("a", b"RGB ", &[0.0, 0.0, 0.0], 0);
        data.truncate(data.len() - 3);
        let declared = u32::from_be_bytes([data[2], data[3], data[4], data[5]]) as usize;
        assert!(matches!(
            decode(&data)[0],
            Err(Error::TruncatedInput { expected, actual })
                if expected == declared && actual == declared - 3
        ));
    }

    #[test]
    fn test_odd_trailing_byte() {
        let mut data = color_chunk("a", b"Gray", &[0.0], 0);
        data.push(0x00);
        let entries = decode(&data);
        assert_eq!(entries.len(), 2);
        assert!(matches!(
            entries[1],
            Err(Error::TruncatedInput { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_unknown_color_space() {
        let data = color_chunk("a", b"HSV ", &[0.0, 0.0, 0.0], 0);
        assert!(matches!(
            decode(&data)[0],
            Err(Error::UnknownColorSpace(t)) if &t == b"HSV "
        ));
    }

    #[test]
    fn test_invalid_usage() {
        let data = color_chunk("a", b"Gray", &[0.0], 3);
        assert!(matches!(decode(&data)[0], Err(Error::InvalidUsageCode(3))));
    }

    #[test]
    fn test_chunk_length_limit() {
        let data = color_chunk("a long enough name", b"Gray", &[0.0], 0);
        let options = DecoderOptions::default().with_max_chunk_length(8);
        let entries: Vec<_> = EntryReader::new(&data[..], options).collect();
        assert!(matches!(
            entries[0],
            Err(Error::ChunkTooLarge { limit: 8, .. })
        ));
    }

    #[test]
    fn test_huge_declared_length_does_not_allocate() {
        let data = [0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xF0, 0x00];
        let options = DecoderOptions::default().with_max_chunk_length(u32::MAX);
        let entries: Vec<_> = EntryReader::new(&data[..], options).collect();
        assert!(matches!(
            entries[0],
            Err(Error::TruncatedInput { actual: 1, .. })
        ));
    }
}
