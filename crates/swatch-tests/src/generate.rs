//! Seeded random documents
//!
//! Documents are reproducible from their seed so a failing round-trip can be
//! replayed exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use swatch_core::{Color, ColorSpace, Document, Entry, Group, Usage};

const USAGES: [Usage; 3] = [Usage::Global, Usage::Spot, Usage::Process];

const NAME_PARTS: [&str; 12] = [
    "Red",
    "Deep",
    "Ocean",
    "Sand",
    "Spot",
    "Grey",
    "Été",
    "紅",
    "\u{1F3A8}",
    "",
    "Cyan (global)",
    "#7F7F7F",
];

/// Generates random documents that satisfy every model invariant
pub struct DocumentGenerator {
    rng: ChaCha8Rng,
    /// Upper bound on top-level entries
    pub max_entries: usize,
    /// Upper bound on colors per group
    pub max_group_size: usize,
}

impl DocumentGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_entries: 12,
            max_group_size: 8,
        }
    }

    pub fn name(&mut self) -> String {
        let parts = self.rng.gen_range(0..4);
        (0..parts)
            .map(|_| NAME_PARTS[self.rng.gen_range(0..NAME_PARTS.len())])
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn component(&mut self, space: ColorSpace, index: usize) -> f32 {
        match (space, index) {
            // LAB A and B are unbounded on the wire
            (ColorSpace::Lab, 1 | 2) => self.rng.gen_range(-128.0f32..=127.0),
            _ => self.rng.r#gen::<f32>(),
        }
    }

    pub fn color(&mut self) -> Color {
        let space = ColorSpace::ALL[self.rng.gen_range(0..ColorSpace::ALL.len())];
        let values = (0..space.arity())
            .map(|i| self.component(space, i))
            .collect();
        let usage = USAGES[self.rng.gen_range(0..USAGES.len())];
        let name = self.name();

        Color {
            name,
            usage,
            space,
            values,
        }
    }

    pub fn group(&mut self) -> Group {
        let size = self.rng.gen_range(0..=self.max_group_size);
        let name = self.name();
        let colors = (0..size).map(|_| self.color()).collect();
        Group::with_colors(name, colors)
    }

    pub fn entry(&mut self) -> Entry {
        if self.rng.gen_bool(0.3) {
            Entry::Group(self.group())
        } else {
            Entry::Color(self.color())
        }
    }

    pub fn document(&mut self) -> Document {
        let count = self.rng.gen_range(0..=self.max_entries);
        (0..count).map(|_| self.entry()).collect()
    }
}
