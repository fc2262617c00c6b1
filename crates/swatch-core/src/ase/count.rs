//! Chunk counting for the file header
//!
//! The header declares how many chunks the body holds: one per color and,
//! for each group, its start and end markers plus one per member.

use super::types::{Document, Entry};

impl Entry {
    /// Number of chunks this entry expands to
    pub fn chunk_count(&self) -> usize {
        match self {
            Entry::Color(_) => 1,
            Entry::Group(group) => 2 + group.colors.len(),
        }
    }
}

impl Document {
    /// Number of chunks the whole body expands to
    pub fn chunk_count(&self) -> usize {
        chunk_count(self.entries())
    }
}

/// Sum of [`Entry::chunk_count`] over `entries`
pub fn chunk_count<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> usize {
    entries.into_iter().map(Entry::chunk_count).sum()
}
