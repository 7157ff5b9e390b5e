//! # PNG Preview
//!
//! Converts an RGB565 frame to a PNG so it can be inspected without the
//! panel. Channels are expanded with [`Rgb565::to_rgb`], so what the PNG
//! shows is exactly what the panel can show.
//!
//! ## Example
//!
//! ```
//! use qrfb::color::Rgb565;
//! use qrfb::framebuffer::PixelBuffer;
//! use qrfb::preview;
//!
//! let frame = PixelBuffer::filled(4, 4, Rgb565::BLUE)?;
//! let png = preview::to_png(&frame)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), qrfb::FramebufferError>(())
//! ```

use std::io::Cursor;
use std::path::Path;

use image::{Rgb, RgbImage};

use crate::color::Rgb565;
use crate::error::FramebufferError;
use crate::framebuffer::PixelBuffer;

/// Expand a frame to 8-bit RGB.
pub fn to_rgb_image(frame: &PixelBuffer) -> Result<RgbImage, FramebufferError> {
    let (width, height) = image_dimensions(frame)?;
    let mut img = RgbImage::new(width, height);

    for (x, y, px) in img.enumerate_pixels_mut() {
        let color = frame
            .pixel(x as usize, y as usize)
            .unwrap_or(Rgb565::BLACK);
        let (r, g, b) = color.to_rgb();
        *px = Rgb([r, g, b]);
    }

    Ok(img)
}

/// Encode a frame as PNG bytes.
pub fn to_png(frame: &PixelBuffer) -> Result<Vec<u8>, FramebufferError> {
    let img = to_rgb_image(frame)?;
    let mut png_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)
        .map_err(|e| FramebufferError::Image(format!("PNG encoding failed: {}", e)))?;
    Ok(png_bytes)
}

/// Save a frame as a PNG file.
pub fn save_png<P: AsRef<Path>>(frame: &PixelBuffer, path: P) -> Result<(), FramebufferError> {
    let path = path.as_ref();
    to_rgb_image(frame)?
        .save(path)
        .map_err(|e| FramebufferError::Image(format!("Failed to save PNG: {}", e)))?;
    tracing::info!(path = %path.display(), "saved preview");
    Ok(())
}

fn image_dimensions(frame: &PixelBuffer) -> Result<(u32, u32), FramebufferError> {
    if frame.is_empty() {
        return Err(FramebufferError::Image(
            "cannot preview an empty frame".to_string(),
        ));
    }
    let width = u32::try_from(frame.width())
        .map_err(|_| FramebufferError::Image(format!("width {} too large", frame.width())))?;
    let height = u32::try_from(frame.height())
        .map_err(|_| FramebufferError::Image(format!("height {} too large", frame.height())))?;
    Ok((width, height))
}
