//! RGBA color

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color `{0}`: expected #rgb, #rrggbb or #rrggbbaa")]
pub struct ColorParseError(pub String);

/// RGBA color, each channel in `0.0..=1.0`
///
/// Serializes as a hex string (`"#ffd700"`), with an alpha byte only when the
/// color is not fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse a CSS hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f32, ColorParseError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| err())
        };

        match digits.len() {
            3 => {
                // #abc expands to #aabbcc
                let expand = |i: usize| -> Result<f32, ColorParseError> {
                    let nibble = u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| err())?;
                    Ok((nibble * 17) as f32 / 255.0)
                };
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(err()),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when translucent
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if byte(self.a) == 255 {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
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
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("#ffd700").unwrap(), Color::from_hex(0xffd700));
        assert_eq!(Color::parse_hex("#00000000").unwrap(), Color::rgba(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["ffd700", "#ffd70", "#gggggg", "", "#"] {
            assert!(Color::parse_hex(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn hex_output_drops_opaque_alpha() {
        assert_eq!(Color::from_hex(0xd4b511).to_hex(), "#d4b511");
        assert_eq!(Color::BLACK.with_alpha(0.5).to_hex(), "#00000080");
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0x5e5e53)).unwrap();
        assert_eq!(json, "\"#5e5e53\"");
        let back: Color = serde_json::from_str("\"#5e5e53\"").unwrap();
        assert_eq!(back.to_hex(), "#5e5e53");
    }
}
