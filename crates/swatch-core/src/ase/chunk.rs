//! Chunk framing and payload layout
//!
//! The file body is a flat run of chunks:
//!
//! ```text
//! tag: u16 | length: u32 | payload: [u8; length]
//! ```
//!
//! Color and group-start payloads share a title block:
//!
//! ```text
//! title_len: u16 | title: UTF-16BE, title_len code units, NUL terminated
//! ```
//!
//! A color payload continues with `space: [u8; 4] | values: [f32] | usage: i16`.
//! A group-start payload ends after the title. A group-end chunk is just its
//! tag followed by four zero bytes.

use super::space::{ColorSpace, SPACE_TAG_SIZE};
use super::types::{Color, Usage, validate_name};
use crate::error::{Error, Result};

/// Tag of a color chunk
pub const COLOR_TAG: u16 = 0x0001;
/// Tag opening a group
pub const GROUP_START_TAG: u16 = 0xC001;
/// Tag closing a group
pub const GROUP_END_TAG: u16 = 0xC002;
/// Fixed four bytes following a group-end tag
pub const GROUP_END_PAYLOAD: [u8; 4] = [0; 4];

/// Size of the tag + length prefix of every chunk
pub const CHUNK_PREFIX_SIZE: usize = 6;
/// Size of the usage code that ends a color payload
pub const USAGE_SIZE: usize = 2;

/// Recognized chunk kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// Single color
    Color,
    /// Start of a group, carries the group name
    GroupStart,
    /// End of a group
    GroupEnd,
}

impl ChunkKind {
    pub fn from_tag(tag: u16) -> Result<Self> {
        match tag {
            COLOR_TAG => Ok(Self::Color),
            GROUP_START_TAG => Ok(Self::GroupStart),
            GROUP_END_TAG => Ok(Self::GroupEnd),
            _ => Err(Error::MalformedChunkTag(tag)),
        }
    }

    pub const fn tag(&self) -> u16 {
        match self {
            Self::Color => COLOR_TAG,
            Self::GroupStart => GROUP_START_TAG,
            Self::GroupEnd => GROUP_END_TAG,
        }
    }
}

/// Split a payload into its decoded name and the bytes after the title
pub(crate) fn split_title(data: &[u8]) -> Result<(String, &[u8])> {
    if data.len() < 2 {
        return Err(Error::TruncatedInput {
            expected: 2,
            actual: data.len(),
        });
    }

    let units = u16::from_be_bytes([data[0], data[1]]) as usize;
    let title_end = 2 + units * 2;
    if data.len() < title_end {
        return Err(Error::TruncatedInput {
            expected: title_end,
            actual: data.len(),
        });
    }

    let code_units: Vec<u16> = data[2..title_end]
        .chunks_exact(2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .collect();
    // Exactly one NUL, in the last code unit
    let (terminator, text) = code_units.split_last().ok_or(Error::UnterminatedTitle)?;
    if *terminator != 0 {
        return Err(Error::UnterminatedTitle);
    }
    if text.contains(&0) {
        return Err(Error::InvalidName(String::from_utf16_lossy(text)));
    }
    let name = String::from_utf16(text)?;

    Ok((name, &data[title_end..]))
}

/// Decode a group-start payload: a title and nothing else
pub(crate) fn parse_group_payload(data: &[u8]) -> Result<String> {
    let (name, rest) = split_title(data)?;
    if !rest.is_empty() {
        return Err(Error::TrailingBytes {
            tag: GROUP_START_TAG,
            count: rest.len(),
        });
    }
    Ok(name)
}

/// Decode a color payload
pub(crate) fn parse_color_payload(data: &[u8]) -> Result<Color> {
    let (name, rest) = split_title(data)?;

    // A color always carries a space tag, at least one value and a usage code
    if rest.len() < SPACE_TAG_SIZE {
        return Err(Error::TruncatedInput {
            expected: SPACE_TAG_SIZE,
            actual: rest.len(),
        });
    }
    let space = ColorSpace::from_tag([rest[0], rest[1], rest[2], rest[3]])?;
    let rest = &rest[SPACE_TAG_SIZE..];

    let needed = space.value_size() + USAGE_SIZE;
    if rest.len() < needed {
        return Err(Error::TruncatedInput {
            expected: needed,
            actual: rest.len(),
        });
    }
    if rest.len() > needed {
        return Err(Error::TrailingBytes {
            tag: COLOR_TAG,
            count: rest.len() - needed,
        });
    }

    let values = space.decode_values(&rest[..space.value_size()])?;
    let usage = Usage::from_code(i16::from_be_bytes([rest[needed - 2], rest[needed - 1]]))?;

    Ok(Color {
        name,
        usage,
        space,
        values,
    })
}

/// Append the title block for `name`
pub(crate) fn write_title(name: &str, out: &mut Vec<u8>) -> Result<()> {
    validate_name(name)?;

    let units = name.encode_utf16().count() + 1;
    let title_len = u16::try_from(units).map_err(|_| Error::NameTooLong(units))?;

    out.reserve(2 + units * 2);
    out.extend_from_slice(&title_len.to_be_bytes());
    for unit in name.encode_utf16().chain(std::iter::once(0)) {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    Ok(())
}

/// Build a color payload (without tag and length)
pub(crate) fn color_payload(color: &Color) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(
        2 + (color.name.len() + 1) * 2 + SPACE_TAG_SIZE + color.space.value_size() + USAGE_SIZE,
    );
    write_title(&color.name, &mut payload)?;
    payload.extend_from_slice(&color.space.tag());
    color.space.encode_values(&color.values, &mut payload)?;
    payload.extend_from_slice(&color.usage.code().to_be_bytes());
    Ok(payload)
}

/// Build a group-start payload (without tag and length)
pub(crate) fn group_payload(name: &str) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    write_title(name, &mut payload)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_kind_tags() {
        for kind in [ChunkKind::Color, ChunkKind::GroupStart, ChunkKind::GroupEnd] {
            assert_eq!(ChunkKind::from_tag(kind.tag()).unwrap(), kind);
        }
        assert!(matches!(
            ChunkKind::from_tag(0x0002),
            Err(Error::MalformedChunkTag(0x0002))
        ));
    }

    #[test]
    fn test_title_layout() {
        let mut out = Vec::new();
        write_title("foo", &mut out).unwrap();
        assert_eq!(out, [0, 4, 0, b'f', 0, b'o', 0, b'o', 0, 0]);

        let (name, rest) = split_title(&out).unwrap();
        assert_eq!(name, "foo");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_empty_name() {
        let mut out = Vec::new();
        write_title("", &mut out).unwrap();
        assert_eq!(out, [0, 1, 0, 0]);
        assert_eq!(parse_group_payload(&out).unwrap(), "");
    }

    #[test]
    fn test_title_counts_utf16_units() {
        // U+1F3A8 is a surrogate pair
        let mut out = Vec::new();
        write_title("a\u{1F3A8}", &mut out).unwrap();
        assert_eq!(u16::from_be_bytes([out[0], out[1]]), 4);
        assert_eq!(out.len(), 2 + 8);
        assert_eq!(split_title(&out).unwrap().0, "a\u{1F3A8}");
    }

    #[test]
    fn test_invalid_utf16() {
        // Lone high surrogate followed by the terminator
        let data = [0, 2, 0xD8, 0x00, 0, 0];
        assert!(matches!(split_title(&data), Err(Error::TextDecode(_))));
    }

    #[test]
    fn test_title_without_terminator() {
        // "a" with a length of one unit and no NUL
        assert!(matches!(
            split_title(&[0, 1, 0, b'a']),
            Err(Error::UnterminatedTitle)
        ));
        // Zero-length title has no room for the terminator
        assert!(matches!(split_title(&[0, 0]), Err(Error::UnterminatedTitle)));
    }

    #[test]
    fn test_title_with_extra_terminator() {
        let data = [0, 3, 0, b'a', 0, 0, 0, 0];
        assert!(matches!(
            split_title(&data),
            Err(Error::InvalidName(name)) if name == "a\0"
        ));
    }

    #[test]
    fn test_title_with_interior_nul() {
        let data = [0, 4, 0, b'a', 0, 0, 0, b'b', 0, 0];
        assert!(matches!(
            split_title(&data),
            Err(Error::InvalidName(name)) if name == "a\0b"
        ));
    }

    #[test]
    fn test_title_truncated() {
        let data = [0, 5, 0, b'a'];
        assert!(matches!(
            split_title(&data),
            Err(Error::TruncatedInput {
                expected: 12,
                actual: 4
            })
        ));
        assert!(split_title(&[0]).is_err());
    }

    #[test]
    fn test_name_with_nul_rejected() {
        let mut out = Vec::new();
        assert!(matches!(
            write_title("a\0b", &mut out),
            Err(Error::InvalidName(_))
        ));
    }

    #[test]
    fn test_name_too_long() {
        let name = "x".repeat(u16::MAX as usize);
        let mut out = Vec::new();
        assert!(matches!(
            write_title(&name, &mut out),
            Err(Error::NameTooLong(n)) if n == u16::MAX as usize + 1
        ));
    }

    #[test]
    fn test_color_payload_roundtrip() {
        let color = Color::cmyk("Green", [0.5, 0.25, 1.0, 0.0], Usage::Global);
        let payload = color_payload(&color).unwrap();
        assert_eq!(parse_color_payload(&payload).unwrap(), color);
    }

    #[test]
    fn test_color_payload_without_color_data() {
        let payload = group_payload("Only a name").unwrap();
        assert!(matches!(
            parse_color_payload(&payload),
            Err(Error::TruncatedInput { expected: 4, actual: 0 })
        ));
    }

    #[test]
    fn test_color_payload_trailing_bytes() {
        let mut payload = color_payload(&Color::gray("g", 0.5, Usage::Spot)).unwrap();
        payload.extend_from_slice(&[0, 0]);
        assert!(matches!(
            parse_color_payload(&payload),
            Err(Error::TrailingBytes { tag: COLOR_TAG, count: 2 })
        ));
    }

    #[test]
    fn test_color_payload_missing_usage() {
        let mut payload = color_payload(&Color::gray("g", 0.5, Usage::Spot)).unwrap();
        payload.truncate(payload.len() - 2);
        assert!(matches!(
            parse_color_payload(&payload),
            Err(Error::TruncatedInput { expected: 6, actual: 4 })
        ));
    }

    #[test]
    fn test_group_payload_with_color_data() {
        let payload = color_payload(&Color::gray("g", 0.5, Usage::Spot)).unwrap();
        assert!(matches!(
            parse_group_payload(&payload),
            Err(Error::TrailingBytes { tag: GROUP_START_TAG, count: 10 })
        ));
    }
}
