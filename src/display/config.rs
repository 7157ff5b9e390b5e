//! # Display Configuration
//!
//! This module defines the geometry of the small TFT panels the framebuffer
//! is rendered for.
//!
//! ## Supported Panels
//!
//! | Id | Size | Frame bytes |
//! |----|------|-------------|
//! | `qvga` | 320×240 | 153600 |
//! | `st7789` | 240×240 | 115200 |
//!
//! Arbitrary sizes are accepted as `WIDTHxHEIGHT`.
//!
//! ## Usage
//!
//! ```
//! use qrfb::display::DisplayConfig;
//!
//! let config = DisplayConfig::QVGA_320X240;
//! assert_eq!(config.frame_bytes(), Some(320 * 240 * 2));
//! ```

use crate::color::Rgb565;
use crate::framebuffer::byte_len;

/// # Display Configuration
///
/// Describes the panel a framebuffer is composited for.
///
/// ## Frame Size
///
/// ```text
/// frame_bytes = width * height * 2   (RGB565, no padding)
///
/// For a 320x240 QVGA panel:
///   320 * 240 * 2 = 153600 bytes
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Short identifier used on the command line
    pub id: &'static str,

    /// Panel description
    pub name: &'static str,

    /// Width in pixels
    pub width: usize,

    /// Height in pixels
    pub height: usize,

    /// Color shown around the QR code
    pub background: Rgb565,
}

impl DisplayConfig {
    /// # 320×240 QVGA Panel
    ///
    /// The common 2.2"–3.2" ILI9341 landscape panel, as used by PiTFT-style
    /// hats exposing `/dev/fb1`.
    pub const QVGA_320X240: Self = Self {
        id: "qvga",
        name: "QVGA 320x240",
        width: 320,
        height: 240,
        background: Rgb565::BLUE,
    };

    /// # 240×240 ST7789 Panel
    ///
    /// Square 1.3"/1.54" IPS panel.
    pub const ST7789_240X240: Self = Self {
        id: "st7789",
        name: "ST7789 240x240",
        width: 240,
        height: 240,
        background: Rgb565::BLUE,
    };

    /// Size of one full frame in bytes, or `None` if no buffer can hold it.
    #[inline]
    pub fn frame_bytes(&self) -> Option<usize> {
        byte_len(self.width, self.height)
    }

    /// Largest integer module scale at which an `size`×`size` matrix still
    /// fits on the panel. Zero when even one pixel per module overflows.
    pub fn max_integer_scale(&self, size: usize) -> usize {
        if size == 0 {
            return 0;
        }
        self.width.min(self.height) / size
    }

    /// Parse a display name.
    ///
    /// Formats:
    /// - a built-in id (`"qvga"`, `"st7789"`)
    /// - `"WIDTHxHEIGHT"` for any other panel (e.g. `"480x320"`)
    pub fn parse(s: &str) -> Result<Self, String> {
        let lower = s.to_lowercase();
        if let Some(config) = Self::built_in().iter().find(|c| c.id == lower) {
            return Ok(*config);
        }

        let (w, h) = lower
            .split_once('x')
            .ok_or_else(|| format!("Unknown display '{}'. Use 'qvga', 'st7789' or 'WIDTHxHEIGHT'", s))?;
        let width: usize = w.parse().map_err(|_| format!("Invalid width: {}", w))?;
        let height: usize = h.parse().map_err(|_| format!("Invalid height: {}", h))?;
        Ok(Self {
            id: "custom",
            name: "Custom",
            width,
            height,
            ..Self::QVGA_320X240
        })
    }

    /// List all built-in displays.
    pub fn built_in() -> &'static [Self] {
        &[Self::QVGA_320X240, Self::ST7789_240X240]
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::QVGA_320X240
    }
}

// ============================================================================
// TESTS
// ============================================================================
