//! # swatch-core
//!
//! Reader and writer for ASE (Adobe Swatch Exchange) color swatch files.
//!
//! An ASE file holds named colors and named color groups. Each color carries
//! a color space (RGB, Gray, CMYK or LAB), its components as 32-bit floats,
//! and a usage classification (Global, Spot or Process).
//!
//! The codec is lossless: decoding a well-formed file and encoding the result
//! reproduces the input bytes exactly.
//!
//! ## Quick Start
//!
//! ```
//! use swatch_core::{Color, Document, Group, Usage};
//!
//! let mut doc = Document::new();
//! doc.push(Color::gray("Light Grey", 0.75, Usage::Process));
//! doc.push(Group::with_colors(
//!     "Accent Colors",
//!     vec![
//!         Color::rgb("Red", [1.0, 0.0, 0.0], Usage::Global),
//!         Color::cmyk("Green", [0.53, 0.24, 1.0, 0.04], Usage::Process),
//!     ],
//! ));
//!
//! let bytes = doc.to_bytes()?;
//! assert_eq!(doc.chunk_count(), 5);
//!
//! let decoded = Document::from_bytes(&bytes)?;
//! assert_eq!(decoded, doc);
//! # Ok::<(), swatch_core::Error>(())
//! ```
//!
//! ## Streaming
//!
//! [`decode_entries`] yields entries one at a time from any [`std::io::Read`],
//! without buffering the whole body:
//!
//! ```
//! use swatch_core::{DecoderOptions, FileHeader, decode_entries};
//! # use swatch_core::{Color, Document, Entry, Usage};
//! # let grey = Entry::from(Color::gray("g", 0.5, Usage::Spot));
//! # let bytes = Document::from_iter([grey]).to_bytes()?;
//!
//! let mut stream = &bytes[..];
//! let header = FileHeader::read(&mut stream)?;
//! assert_eq!(header.chunk_count, 1);
//! for entry in decode_entries(stream, DecoderOptions::default()) {
//!     println!("{}", entry?.name());
//! }
//! # Ok::<(), swatch_core::Error>(())
//! ```

pub mod ase;
pub mod document;
pub mod error;
pub mod options;

pub use ase::{
    ChunkKind, Color, ColorSpace, Document, Entry, EntryReader, FileHeader, Group, Usage,
    chunk_count, encode_document,
};
pub use document::decode_entries;
pub use error::{Error, Result};
pub use options::DecoderOptions;

/// Version of swatch-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
