//! # RGB565 Colors
//!
//! Small TFT panels (ILI9341, ST7789 and friends) take pixels as 16-bit
//! RGB565 codes: 5 bits of red, 6 bits of green, 5 bits of blue.
//!
//! ```text
//! bit  15 ........ 11 10 ........... 5 4 ......... 0
//!      R  R  R  R  R  G  G  G  G  G  G B  B  B  B  B
//! ```
//!
//! Codes are stored little-endian in framebuffers: the low byte comes first.
//!
//! Every color constant in the crate is derived through [`Rgb565::from_rgb`],
//! so there is exactly one place where 8-bit channels are packed.
//!
//! ## Example
//!
//! ```
//! use qrfb::color::Rgb565;
//!
//! let blue = Rgb565::from_rgb(0, 0, 255);
//! assert_eq!(blue, Rgb565::BLUE);
//! assert_eq!(blue.to_le_bytes(), [0x1F, 0x00]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FramebufferError;

/// Bytes occupied by one packed pixel.
pub const BYTES_PER_PIXEL: usize = 2;

/// A packed 16-bit RGB565 color code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorValue", into = "u16")]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);

    /// Pack 8-bit channels, dropping the low bits of each.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 >> 3) << 11;
        let g = (g as u16 >> 2) << 5;
        let b = b as u16 >> 3;
        Self(r | g | b)
    }

    /// Expand back to 8-bit channels.
    ///
    /// The high bits are replicated into the low bits so full-scale
    /// channels map back to 255 rather than 248/252.
    #[inline]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r5 = (self.0 >> 11) & 0x1F;
        let g6 = (self.0 >> 5) & 0x3F;
        let b5 = self.0 & 0x1F;
        (
            ((r5 << 3) | (r5 >> 2)) as u8,
            ((g6 << 2) | (g6 >> 4)) as u8,
            ((b5 << 3) | (b5 >> 2)) as u8,
        )
    }

    #[inline]
    pub const fn to_le_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub const fn from_le_bytes(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

impl fmt::Display for Rgb565 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl FromStr for Rgb565 {
    type Err = FramebufferError;

    /// Parse a color.
    ///
    /// Accepted forms:
    /// - `#RRGGBB`: 8-bit channels, packed with [`Rgb565::from_rgb`]
    /// - `0xNNNN`: an already packed code
    /// - a decimal number: an already packed code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || FramebufferError::InvalidColor(s.to_string());

        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u16::from_str_radix(hex, 16).map(Self).map_err(|_| invalid());
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        s.parse::<u16>().map(Self).map_err(|_| invalid())
    }
}

/// Wire form of a color in option files: a packed integer or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Packed(u16),
    Text(String),
}

impl TryFrom<ColorValue> for Rgb565 {
    type Error = FramebufferError;

    fn try_from(value: ColorValue) -> Result<Self, Self::Error> {
        match value {
            ColorValue::Packed(code) => Ok(Self(code)),
            ColorValue::Text(text) => text.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_constants() {
        assert_eq!(Rgb565::BLACK.0, 0x0000);
        assert_eq!(Rgb565::WHITE.0, 0xFFFF);
        assert_eq!(Rgb565::BLUE.0, 0x001F);
        assert_eq!(Rgb565::RED.0, 0xF800);
        assert_eq!(Rgb565::GREEN.0, 0x07E0);
    }

    #[test]
    fn test_little_endian_bytes() {
        assert_eq!(Rgb565::GREEN.to_le_bytes(), [0xE0, 0x07]);
        assert_eq!(Rgb565::RED.to_le_bytes(), [0x00, 0xF8]);
        assert_eq!(Rgb565::from_le_bytes([0x1F, 0x00]), Rgb565::BLUE);
    }

    #[test]
    fn test_from_rgb_truncates_low_bits() {
        // 0x07 red, 0x03 green, 0x07 blue all fall below one step
        assert_eq!(Rgb565::from_rgb(7, 3, 7), Rgb565::BLACK);
        assert_eq!(Rgb565::from_rgb(8, 4, 8).0, (1 << 11) | (1 << 5) | 1);
    }

    #[test]
    fn test_to_rgb_full_scale() {
        assert_eq!(Rgb565::WHITE.to_rgb(), (255, 255, 255));
        assert_eq!(Rgb565::BLACK.to_rgb(), (0, 0, 0));
        assert_eq!(Rgb565::BLUE.to_rgb(), (0, 0, 255));
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("#0000FF".parse::<Rgb565>().unwrap(), Rgb565::BLUE);
        assert_eq!("#ff0000".parse::<Rgb565>().unwrap(), Rgb565::RED);
        assert_eq!("0x07E0".parse::<Rgb565>().unwrap(), Rgb565::GREEN);
        assert_eq!("31".parse::<Rgb565>().unwrap(), Rgb565::BLUE);
        assert!("#12345".parse::<Rgb565>().is_err());
        assert!("blue".parse::<Rgb565>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let color = Rgb565::from_rgb(0x40, 0x80, 0xC0);
        let parsed: Rgb565 = color.to_string().parse().unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_serde_accepts_number_and_string() {
        let packed: Rgb565 = serde_json::from_str("31").unwrap();
        let hex: Rgb565 = serde_json::from_str("\"#0000FF\"").unwrap();
        assert_eq!(packed, Rgb565::BLUE);
        assert_eq!(hex, Rgb565::BLUE);
        assert_eq!(serde_json::to_string(&Rgb565::BLUE).unwrap(), "31");
    }
}
