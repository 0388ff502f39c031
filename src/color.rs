//! RGB color values.
//!
//! Colors in the config document are written as three-element integer arrays
//! (`[r, g, b]`, each 0-255). `Rgb` is the validated form: it can only be built
//! from a well-formed triple, so consumers never re-check components.

use std::fmt;
use serde::{Deserialize, Serialize};

/// Alpha the renderer applies to the preview connector line.
///
/// Not part of the document; resolved colors are always opaque.
pub const PREVIEW_CONNECTOR_ALPHA: f32 = 0.7;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Why a raw triple could not become an `Rgb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RgbError {
    /// Array did not have exactly three elements.
    Arity(usize),
    /// Component at index was not an integer.
    NotInteger(usize),
    /// Component at index was outside 0-255.
    OutOfRange { index: usize, value: i64 },
}

impl fmt::Display for RgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RgbError::Arity(n) => write!(f, "expected 3 components, got {}", n),
            RgbError::NotInteger(i) => write!(f, "component {} is not an integer", i),
            RgbError::OutOfRange { index, value } => {
                write!(f, "component {} is {} (must be 0-255)", index, value)
            }
        }
    }
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from loosely typed components.
    ///
    /// `None` marks a component that was not an integer in the source document.
    pub fn from_components(components: &[Option<i64>]) -> Result<Self, RgbError> {
        if components.len() != 3 {
            return Err(RgbError::Arity(components.len()));
        }

        let mut out = [0u8; 3];
        for (index, component) in components.iter().enumerate() {
            let value = component.ok_or(RgbError::NotInteger(index))?;
            out[index] =
                u8::try_from(value).map_err(|_| RgbError::OutOfRange { index, value })?;
        }

        Ok(Self::from(out))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Components scaled to 0.0-1.0, the form most renderers take.
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Normalized RGBA with the given alpha (clamped to 0.0-1.0).
    pub fn with_alpha(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_f32();
        [r, g, b, alpha.clamp(0.0, 1.0)]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
