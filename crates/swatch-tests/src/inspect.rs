//! Raw chunk walker
//!
//! Splits an encoded body into chunks by framing alone, without decoding any
//! payload. Used to count what the encoder actually emitted.

use anyhow::{Context, Result, bail, ensure};

/// A chunk as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    pub tag: u16,
    /// Payload bytes (empty for group-end markers)
    pub payload: Vec<u8>,
}

/// Split `body` into its chunks
pub fn walk_chunks(body: &[u8]) -> Result<Vec<RawChunk>> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < body.len() {
        let tag_bytes = body.get(pos..pos + 2).context("truncated tag")?;
        let tag = u16::from_be_bytes([tag_bytes[0], tag_bytes[1]]);
        pos += 2;

        match tag {
            0xC002 => {
                let marker = body.get(pos..pos + 4).context("truncated group end")?;
                ensure!(marker == [0, 0, 0, 0], "group end with data {marker:?}");
                pos += 4;
                chunks.push(RawChunk {
                    tag,
                    payload: Vec::new(),
                });
            }
            0x0001 | 0xC001 => {
                let len = body.get(pos..pos + 4).context("truncated length")?;
                let len = u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize;
                pos += 4;
                let payload = body
                    .get(pos..pos + len)
                    .with_context(|| format!("payload of {len} bytes truncated"))?;
                pos += len;
                chunks.push(RawChunk {
                    tag,
                    payload: payload.to_vec(),
                });
            }
            other => bail!("unexpected tag 0x{other:04X} at offset {}", pos - 2),
        }
    }

    Ok(chunks)
}
