//! ASE (Adobe Swatch Exchange) Format
//!
//! # Structure
//!
//! An ASE file consists of:
//! 1. A 12-byte header (signature, version, chunk count)
//! 2. A flat sequence of tagged, length-prefixed chunks
//!
//! Chunks are read in order and rebuilt into a tree: a group-start chunk
//! collects every following color chunk until its group-end marker.
//!
//! # Example
//!
//! ```
//! use swatch_core::ase::{Color, Document, Usage};
//!
//! let mut doc = Document::new();
//! doc.push(Color::gray("Light Grey", 0.75, Usage::Process));
//!
//! let bytes = doc.to_bytes()?;
//! assert_eq!(Document::from_bytes(&bytes)?, doc);
//! # Ok::<(), swatch_core::Error>(())
//! ```

pub mod chunk;
pub mod header;
pub mod space;

mod count;
mod reader;
mod types;
mod writer;

pub use chunk::ChunkKind;
pub use count::chunk_count;
pub use header::FileHeader;
pub use reader::EntryReader;
pub use space::ColorSpace;
pub use types::{Color, Document, Entry, Group, Usage};
pub use writer::{encode_color, encode_document, encode_entry, encode_group};
