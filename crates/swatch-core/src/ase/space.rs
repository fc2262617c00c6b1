//! Color-space registry
//!
//! Each color chunk names its color model with a 4-byte ASCII tag. The tag
//! fixes how many big-endian `f32` values follow it:
//!
//! | Tag    | Values | Meaning                         |
//! |--------|--------|---------------------------------|
//! | `RGB ` | 3      | red, green, blue in `[0, 1]`    |
//! | `Gray` | 1      | gray level, 1 is white          |
//! | `CMYK` | 4      | cyan, magenta, yellow, black    |
//! | `LAB ` | 3      | L in `[0, 1]`, then raw A and B |
//!
//! Tags shorter than four characters are padded with trailing spaces on the
//! wire. LAB's A and B components are stored as-is; the codec never clamps.

use std::fmt;

use crate::error::{Error, Result};

/// Size of a color-space tag on the wire
pub const SPACE_TAG_SIZE: usize = 4;

/// Color model of a swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    /// RGB, three components
    #[cfg_attr(feature = "serde", serde(rename = "RGB"))]
    Rgb,
    /// Grayscale, one component
    Gray,
    /// CMYK, four components
    #[cfg_attr(feature = "serde", serde(rename = "CMYK"))]
    Cmyk,
    /// CIELAB, three components
    #[cfg_attr(feature = "serde", serde(rename = "LAB"))]
    Lab,
}

impl ColorSpace {
    /// Every registered color space
    pub const ALL: [ColorSpace; 4] = [Self::Rgb, Self::Gray, Self::Cmyk, Self::Lab];

    /// Look up a color space from its raw 4-byte tag
    ///
    /// Trailing padding spaces are trimmed before the lookup, so `b"RGB "`
    /// and `b"LAB "` resolve the same way as `b"Gray"`.
    pub fn from_tag(tag: [u8; 4]) -> Result<Self> {
        let end = tag.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
        match &tag[..end] {
            b"RGB" => Ok(Self::Rgb),
            b"Gray" => Ok(Self::Gray),
            b"CMYK" => Ok(Self::Cmyk),
            b"LAB" => Ok(Self::Lab),
            _ => Err(Error::UnknownColorSpace(tag)),
        }
    }

    /// The wire tag, right-padded with spaces to four bytes
    pub fn tag(&self) -> [u8; 4] {
        let mut tag = [b' '; SPACE_TAG_SIZE];
        let name = self.name().as_bytes();
        tag[..name.len()].copy_from_slice(name);
        tag
    }

    /// Unpadded tag text
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Gray => "Gray",
            Self::Cmyk => "CMYK",
            Self::Lab => "LAB",
        }
    }

    /// Number of `f32` values a color in this space carries
    pub const fn arity(&self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb | Self::Lab => 3,
            Self::Cmyk => 4,
        }
    }

    /// Byte length of the packed values
    pub const fn value_size(&self) -> usize {
        self.arity() * 4
    }

    /// Check a value slice against this space's arity
    pub fn check_arity(&self, values: &[f32]) -> Result<()> {
        if values.len() != self.arity() {
            return Err(Error::ArityMismatch {
                space: *self,
                expected: self.arity(),
                actual: values.len(),
            });
        }
        Ok(())
    }

    /// Unpack big-endian floats
    ///
    /// `data` must hold exactly [`value_size`](Self::value_size) bytes.
    pub(crate) fn decode_values(&self, data: &[u8]) -> Result<Vec<f32>> {
        if data.len() != self.value_size() {
            return Err(Error::TruncatedInput {
                expected: self.value_size(),
                actual: data.len(),
            });
        }
        Ok(data
            .chunks_exact(4)
            .map(|b| f32::from_be_bytes([b[0], b[1], b[2], b[3]]))
            .collect())
    }

    /// Pack values as big-endian floats onto `out`
    pub(crate) fn encode_values(&self, values: &[f32], out: &mut Vec<u8>) -> Result<()> {
        self.check_arity(values)?;
        for value in values {
            out.extend_from_slice(&value.to_be_bytes());
        }
        Ok(())
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
