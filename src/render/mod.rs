//! # Rendering Module
//!
//! This module turns a QR module matrix into a display-ready RGB565 frame.
//!
//! ## Pipeline
//!
//! ```text
//! ModuleMatrix ──rasterize──▶ N×N ──scale──▶ ⌊N·s⌋×⌊N·s⌋ ──composite──▶ W×H frame
//! ```
//!
//! Each stage borrows its input and returns a new [`PixelBuffer`]; nothing is
//! mutated once handed on. Inputs are validated before any output is built,
//! so a caller gets either a complete frame or an error.
//!
//! ## Modules
//!
//! - [`rasterize`]: one pixel per module
//! - [`scale`]: nearest-neighbor resampling
//! - [`composite`]: centering on a background canvas
//! - [`options`]: render settings
//!
//! ## Usage Example
//!
//! ```
//! use qrfb::matrix::{ErrorLevel, ModuleMatrix};
//! use qrfb::render::{self, RenderOptions};
//!
//! let matrix = ModuleMatrix::encode("https://example.com", ErrorLevel::M)?;
//! let options = RenderOptions::default().with_scale(8.0);
//!
//! let frame = render::render(&matrix, &options)?;
//! assert_eq!(frame.len(), 320 * 240 * 2);
//! # Ok::<(), qrfb::FramebufferError>(())
//! ```

pub mod composite;
pub mod options;
pub mod rasterize;
pub mod scale;

pub use composite::{Canvas, composite};
pub use options::RenderOptions;
pub use rasterize::rasterize;
pub use scale::scale;

use crate::error::FramebufferError;
use crate::framebuffer::PixelBuffer;
use crate::matrix::ModuleMatrix;

/// Run the full pipeline: rasterize, scale, composite.
///
/// ## Errors
///
/// - [`FramebufferError::InvalidScale`] for a non-positive or non-finite scale
/// - [`FramebufferError::TooLarge`] for a canvas that cannot be allocated
pub fn render(matrix: &ModuleMatrix, options: &RenderOptions) -> Result<PixelBuffer, FramebufferError> {
    // Validate before any stage allocates
    if !(options.scale > 0.0 && options.scale.is_finite()) {
        return Err(FramebufferError::InvalidScale(options.scale));
    }

    let raster = rasterize(matrix, options.dark_color, options.light_color)?;
    let scaled = scale(&raster, options.scale)?;
    let canvas = Canvas::new(
        options.canvas_width,
        options.canvas_height,
        options.background_color,
    );
    let frame = composite(&scaled, &canvas)?;

    tracing::debug!(
        modules = matrix.size(),
        qr_pixels = scaled.width(),
        bytes = frame.len(),
        "rendered frame"
    );
    Ok(frame)
}
