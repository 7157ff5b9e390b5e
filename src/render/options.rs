//! Render options.
//!
//! Options deserialize from JSON with every field optional:
//!
//! ```
//! use qrfb::render::RenderOptions;
//! use qrfb::color::Rgb565;
//!
//! let opts: RenderOptions = serde_json::from_str(r##"{"scale": 8, "background_color": "#000000"}"##)?;
//! assert_eq!(opts.scale, 8.0);
//! assert_eq!(opts.canvas_width, 320);
//! assert_eq!(opts.background_color, Rgb565::BLACK);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb565;
use crate::display::DisplayConfig;
use crate::error::FramebufferError;

/// Settings for one run of the render pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Pixels per module; any positive finite factor
    pub scale: f64,
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub dark_color: Rgb565,
    pub light_color: Rgb565,
    pub background_color: Rgb565,
}

impl RenderOptions {
    /// Options targeting `display`, with its geometry and background.
    pub fn for_display(display: &DisplayConfig) -> Self {
        Self {
            canvas_width: display.width,
            canvas_height: display.height,
            background_color: display.background,
            ..Self::default()
        }
    }

    /// Load options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FramebufferError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| FramebufferError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        let display = DisplayConfig::default();
        Self {
            scale: 1.0,
            canvas_width: display.width,
            canvas_height: display.height,
            dark_color: Rgb565::BLACK,
            light_color: Rgb565::WHITE,
            background_color: display.background,
        }
    }
}
