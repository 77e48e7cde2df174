use serde::Deserialize;
use thiserror::Error;

/// A fill / stroke colour, expressed in the RGB or Gray colour spaces.
///
/// Colours deserialize from `#rrggbb` hex strings so that they can live in a
/// [Style](crate::Style) configuration table.
#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

/// A hex colour string could not be parsed
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid hex colour {0:?}, expected #rrggbb")]
pub struct InvalidHexColour(pub String);

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string
    pub fn from_hex(hex: &str) -> Result<Colour, InvalidHexColour> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidHexColour(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| InvalidHexColour(hex.to_string()))
        };
        Ok(Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Colour {
    type Error = InvalidHexColour;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&value)
    }
}

/// Colours used by the default [Style](crate::Style)
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    /// `#0b4b71`, section titles and rules
    pub const ACCENT: Colour = Colour::new_rgb_bytes(0x0b, 0x4b, 0x71);
    /// `#2f855a`, the status badge
    pub const STATUS: Colour = Colour::new_rgb_bytes(0x2f, 0x85, 0x5a);
    /// `#6b7280`, footer text and separator
    pub const MUTED: Colour = Colour::new_rgb_bytes(0x6b, 0x72, 0x80);
}
