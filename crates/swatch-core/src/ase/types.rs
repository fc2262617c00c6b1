//! Swatch document model
//!
//! A [`Document`] is an ordered list of [`Entry`] values. An entry is either a
//! single [`Color`] or a named [`Group`] of colors. Groups do not nest.

use std::fmt;

use super::space::ColorSpace;
use crate::error::{Error, Result};

/// How a color is meant to be used, independent of its numeric encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Usage {
    /// Global color, edits propagate to every use
    Global,
    /// Spot (premixed ink) color
    Spot,
    /// Process color
    #[default]
    Process,
}

impl Usage {
    /// Map a wire code to a usage
    pub fn from_code(code: i16) -> Result<Self> {
        match code {
            0 => Ok(Self::Global),
            1 => Ok(Self::Spot),
            2 => Ok(Self::Process),
            _ => Err(Error::InvalidUsageCode(code)),
        }
    }

    /// Wire code for this usage
    pub const fn code(&self) -> i16 {
        match self {
            Self::Global => 0,
            Self::Spot => 1,
            Self::Process => 2,
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Global => "Global",
            Self::Spot => "Spot",
            Self::Process => "Process",
        })
    }
}

/// A named color
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Display name, without terminator
    pub name: String,
    /// Usage classification
    pub usage: Usage,
    /// Color model of `values`
    pub space: ColorSpace,
    /// Components, exactly `space.arity()` of them
    pub values: Vec<f32>,
}

impl Color {
    /// Create a color, checking the value count against the space
    pub fn new(
        name: impl Into<String>,
        space: ColorSpace,
        values: Vec<f32>,
        usage: Usage,
    ) -> Result<Self> {
        space.check_arity(&values)?;
        Ok(Self {
            name: name.into(),
            usage,
            space,
            values,
        })
    }

    /// RGB color
    pub fn rgb(name: impl Into<String>, rgb: [f32; 3], usage: Usage) -> Self {
        Self::from_parts(name, ColorSpace::Rgb, rgb.to_vec(), usage)
    }

    /// Grayscale color
    pub fn gray(name: impl Into<String>, level: f32, usage: Usage) -> Self {
        Self::from_parts(name, ColorSpace::Gray, vec![level], usage)
    }

    /// CMYK color
    pub fn cmyk(name: impl Into<String>, cmyk: [f32; 4], usage: Usage) -> Self {
        Self::from_parts(name, ColorSpace::Cmyk, cmyk.to_vec(), usage)
    }

    /// LAB color, `l` in `[0, 1]`, `a` and `b` unbounded
    pub fn lab(name: impl Into<String>, lab: [f32; 3], usage: Usage) -> Self {
        Self::from_parts(name, ColorSpace::Lab, lab.to_vec(), usage)
    }

    fn from_parts(
        name: impl Into<String>,
        space: ColorSpace,
        values: Vec<f32>,
        usage: Usage,
    ) -> Self {
        Self {
            name: name.into(),
            usage,
            space,
            values,
        }
    }

    /// Check the invariants a color must hold before it can be written
    ///
    /// Fields are public, so a color edited in place may have drifted from
    /// what [`Color::new`] accepted.
    pub fn validate(&self) -> Result<()> {
        self.space.check_arity(&self.values)?;
        validate_name(&self.name)
    }
}

/// A named, ordered collection of colors
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Display name, without terminator
    pub name: String,
    /// Member colors, in file order
    pub colors: Vec<Color>,
}

impl Group {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
        }
    }

    /// Create a group from a list of colors
    pub fn with_colors(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Append a color
    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Number of member colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the group has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Top-level document entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Entry {
    /// A color outside any group
    Color(Color),
    /// A color group
    Group(Group),
}

impl Entry {
    /// Name of the color or group
    pub fn name(&self) -> &str {
        match self {
            Entry::Color(color) => &color.name,
            Entry::Group(group) => &group.name,
        }
    }

    /// Get the color, if this entry is one
    pub fn as_color(&self) -> Option<&Color> {
        match self {
            Entry::Color(color) => Some(color),
            _ => None,
        }
    }

    /// Get the group, if this entry is one
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Entry::Group(group) => Some(group),
            _ => None,
        }
    }
}

impl From<Color> for Entry {
    fn from(color: Color) -> Self {
        Entry::Color(color)
    }
}

impl From<Group> for Entry {
    fn from(group: Group) -> Self {
        Entry::Group(group)
    }
}

/// An ordered list of colors and groups
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a color or group
    pub fn push(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }

    /// Top-level entries in order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Take ownership of the entries
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over top-level entries
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Every color in file order, group members included
    pub fn colors(&self) -> impl Iterator<Item = &Color> + '_ {
        self.entries.iter().flat_map(|entry| match entry {
            Entry::Color(color) => std::slice::from_ref(color).iter(),
            Entry::Group(group) => group.colors.iter(),
        })
    }
}

impl From<Vec<Entry>> for Document {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Entry> for Document {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Document {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.contains('\0') {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_codes() {
        for code in 0..3 {
            assert_eq!(Usage::from_code(code).unwrap().code(), code);
        }
        assert_eq!(Usage::from_code(2).unwrap(), Usage::Process);
        assert!(matches!(Usage::from_code(3), Err(Error::InvalidUsageCode(3))));
        assert!(Usage::from_code(-1).is_err());
    }

    #[test]
    fn test_color_new_checks_arity() {
        assert!(Color::new("ok", ColorSpace::Rgb, vec![1.0, 0.5, 0.0], Usage::Spot).is_ok());
        let err = Color::new("bad", ColorSpace::Cmyk, vec![1.0], Usage::Spot).unwrap_err();
        assert!(matches!(
            err,
            Error::ArityMismatch {
                space: ColorSpace::Cmyk,
                expected: 4,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_validate_catches_edits() {
        let mut color = Color::gray("Light Grey", 0.75, Usage::Process);
        assert!(color.validate().is_ok());

        color.values.push(0.1);
        assert!(matches!(color.validate(), Err(Error::ArityMismatch { .. })));

        color.values.pop();
        color.name = "bad\0name".into();
        assert!(matches!(color.validate(), Err(Error::InvalidName(_))));
    }

    #[test]
    fn test_document_colors_flattens_groups() {
        let mut doc = Document::new();
        doc.push(Color::gray("a", 0.0, Usage::Global));
        doc.push(Group::with_colors(
            "g",
            vec![
                Color::gray("b", 0.1, Usage::Global),
                Color::gray("c", 0.2, Usage::Global),
            ],
        ));
        doc.push(Group::new("empty"));
        doc.push(Color::gray("d", 0.3, Usage::Global));

        let names: Vec<_> = doc.colors().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.entries()[1].name(), "g");
        assert!(doc.entries()[2].as_group().unwrap().is_empty());
    }
}
