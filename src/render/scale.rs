//! # Nearest-Neighbor Scaling
//!
//! Resamples a [`PixelBuffer`] by a real factor without blending:
//!
//! ```text
//! out_w = floor(in_w * s)            out_h = floor(in_h * s)
//! out(x, y) = in(min(floor(x / s), in_w - 1), min(floor(y / s), in_h - 1))
//! ```
//!
//! Factors above 1 replicate each source pixel into a block; factors below 1
//! skip source pixels. Pixels are copied byte-for-byte, so the palette of the
//! output is always a subset of the palette of the input.
//!
//! The `min(.., in - 1)` clamp keeps the last row and column in range when
//! floating-point rounding of `x / s` lands exactly on the source edge.

use crate::color::Rgb565;
use crate::error::FramebufferError;
use crate::framebuffer::PixelBuffer;

/// Scale `src` by `factor`.
///
/// ## Errors
///
/// [`FramebufferError::InvalidScale`] if `factor` is not a positive finite
/// number, or if the scaled buffer would not fit in memory.
///
/// A result dimension that rounds down to zero is not an error; it gives an
/// empty buffer.
pub fn scale(src: &PixelBuffer, factor: f64) -> Result<PixelBuffer, FramebufferError> {
    if !(factor > 0.0 && factor.is_finite()) {
        return Err(FramebufferError::InvalidScale(factor));
    }

    let invalid = || FramebufferError::InvalidScale(factor);
    let out_w = scaled_dimension(src.width(), factor).ok_or_else(invalid)?;
    let out_h = scaled_dimension(src.height(), factor).ok_or_else(invalid)?;

    let mut out = PixelBuffer::filled(out_w, out_h, Rgb565::BLACK).map_err(|_| invalid())?;

    tracing::debug!(
        from_width = src.width(),
        from_height = src.height(),
        to_width = out_w,
        to_height = out_h,
        factor,
        "scaling buffer"
    );

    if out.is_empty() {
        return Ok(out);
    }

    // Column lookup is identical for every row
    let columns: Vec<usize> = (0..out_w)
        .map(|x| source_index(x, factor, src.width()))
        .collect();

    for y in 0..out_h {
        let sy = source_index(y, factor, src.height());
        for (x, &sx) in columns.iter().enumerate() {
            if let Some(pixel) = src.pixel_bytes(sx, sy) {
                out.set_pixel_bytes(x, y, pixel);
            }
        }
    }

    Ok(out)
}

/// `floor(dim * factor)`, or `None` if it does not fit in `usize`.
pub fn scaled_dimension(dim: usize, factor: f64) -> Option<usize> {
    let scaled = (dim as f64 * factor).floor();
    (scaled < usize::MAX as f64).then_some(scaled as usize)
}

/// Source coordinate for output coordinate `i`, clamped to `[0, len)`.
///
/// Only called with `len > 0`: an empty source axis always yields an empty
/// output axis.
#[inline]
fn source_index(i: usize, factor: f64, len: usize) -> usize {
    let src = (i as f64 / factor).floor() as usize;
    src.min(len - 1)
}
