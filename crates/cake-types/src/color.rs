use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color, written on the wire as `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fallback piping color when neither an explicit piping color nor a
    /// flavor color is available.
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ColorParseError {
    #[error("color must have the form #RRGGBB, got {got:?}")]
    BadFormat { got: String },

    #[error("invalid hex digits in color {got:?}")]
    BadHex { got: String },
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or_else(|| ColorParseError::BadFormat {
            got: s.to_string(),
        })?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::BadFormat { got: s.to_string() });
        }
        let channel = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::BadHex {
                got: s.to_string(),
            })
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

// Colors cross the bridge as the hex strings the UI already uses.
impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
