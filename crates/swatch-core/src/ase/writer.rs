//! Chunk encoder
//!
//! Mirror of the decoder: flattens a [`Document`] into the chunk sequence the
//! decoder accepts, in entry order, without reordering or deduplication.

use log::trace;

use super::chunk::{
    COLOR_TAG, GROUP_END_PAYLOAD, GROUP_END_TAG, GROUP_START_TAG, color_payload, group_payload,
};
use super::types::{Color, Document, Entry, Group};
use crate::error::{Error, Result};

/// Append one chunk: tag, length, payload
fn push_chunk(tag: u16, payload: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let length = u32::try_from(payload.len()).map_err(|_| Error::ChunkTooLarge {
        length: payload.len() as u64,
        limit: u64::from(u32::MAX),
    })?;
    out.extend_from_slice(&tag.to_be_bytes());
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(payload);
    Ok(())
}

/// Encode a single color chunk onto `out`
pub fn encode_color(color: &Color, out: &mut Vec<u8>) -> Result<()> {
    let payload = color_payload(color)?;
    trace!("Encoding color {:?} ({} bytes)", color.name, payload.len());
    push_chunk(COLOR_TAG, &payload, out)
}

/// Encode a group: start chunk, one chunk per member, end marker
pub fn encode_group(group: &Group, out: &mut Vec<u8>) -> Result<()> {
    let payload = group_payload(&group.name)?;
    trace!(
        "Encoding group {:?} with {} colors",
        group.name,
        group.colors.len()
    );
    push_chunk(GROUP_START_TAG, &payload, out)?;
    for color in &group.colors {
        encode_color(color, out)?;
    }
    // The end marker has no length prefix of its own
    out.extend_from_slice(&GROUP_END_TAG.to_be_bytes());
    out.extend_from_slice(&GROUP_END_PAYLOAD);
    Ok(())
}

/// Encode any entry
pub fn encode_entry(entry: &Entry, out: &mut Vec<u8>) -> Result<()> {
    match entry {
        Entry::Color(color) => encode_color(color, out),
        Entry::Group(group) => encode_group(group, out),
    }
}

/// Encode the body of a document (every entry, no file header)
pub fn encode_document(document: &Document) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for entry in document {
        encode_entry(entry, &mut out)?;
    }
    Ok(out)
}
