//! Hex colors for shape fills.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color.
///
/// Parses `#rgb` and `#rrggbb` in any case and always formats as lowercase
/// `#rrggbb`, which is also its serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Parse a hex color string.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidColor {
            value: value.to_string(),
        };

        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                    // to_digit cannot fail after the hexdigit check above
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    *slot = v * 16 + v;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let channel =
                    |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Build a color from hue/saturation/lightness, all in `[0, 1]`.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self::rgb(v, v, v);
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        let channel = |t: f64| {
            let t = t.rem_euclid(1.0);
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Self::rgb(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
