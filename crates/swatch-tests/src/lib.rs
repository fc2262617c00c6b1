//! # swatch-tests
//!
//! Conformance testing for swatch-core.
//!
//! This crate provides:
//! - Byte fixtures assembled by hand, independent of the encoder
//! - A seeded random document generator for round-trip tests
//! - A raw chunk walker used to check header chunk counts against real output
//!
//! ## Test Categories
//!
//! 1. **Fixtures**: known files decode to known documents and back
//! 2. **Round-trip**: generated documents survive encode/decode exactly
//! 3. **Malformed input**: every error kind is reachable and fatal
//! 4. **Chunk counts**: header counts match the emitted chunks
//! 5. **Concurrency**: independent calls share no state

pub mod fixtures;
pub mod generate;
pub mod inspect;

pub use fixtures::{Fixture, all_fixtures};
pub use generate::DocumentGenerator;
pub use inspect::{RawChunk, walk_chunks};
