//! RGBA colour with the blending operations the console needs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a colour string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    #[error("Colour must start with '#': {0}")]
    MissingHash(String),

    /// The string has neither 6 nor 8 hex digits.
    #[error("Colour must have 6 or 8 hex digits: {0}")]
    InvalidLength(String),

    /// A digit pair is not valid hexadecimal.
    #[error("Invalid hex digits in colour: {0}")]
    InvalidHex(String),
}

/// 8-bit per channel colour, straight (non premultiplied) alpha.
///
/// Serialized as `"#RRGGBB"` or `"#RRGGBBAA"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Linear interpolation towards `other`. `amount` is clamped to `[0, 1]`
    /// and channels are truncated, so `lerp(x, 0.0) == self` exactly.
    pub fn lerp(self, other: Rgba, amount: f32) -> Rgba {
        let t = if amount.is_nan() {
            0.0
        } else {
            amount.clamp(0.0, 1.0)
        };
        let mix = |from: u8, to: u8| -> u8 {
            let value = from as f32 + (to as f32 - from as f32) * t;
            value.clamp(0.0, 255.0) as u8
        };
        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Scale every channel (alpha included) by `factor`, clamped to `[0, 1]`.
    pub fn scale(self, factor: f32) -> Rgba {
        Rgba::TRANSPARENT.lerp(self, factor)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::TRANSPARENT
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }

        let channel = |idx: usize| {
            u8::from_str_radix(&hex[idx..idx + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(s.to_string()))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}
