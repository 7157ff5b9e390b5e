//! # Compositing
//!
//! Places a foreground buffer in the middle of a fixed-size canvas.
//!
//! ```text
//! x_offset = floor((canvas_w - fg_w) / 2)
//! y_offset = floor((canvas_h - fg_h) / 2)
//!
//!  ┌──────────── canvas ────────────┐
//!  │ background                     │
//!  │        ┌──── fg ────┐          │
//!  │        │            │          │
//!  │        └────────────┘          │
//!  └────────────────────────────────┘
//! ```
//!
//! Offsets go negative when the foreground is larger than the canvas. Any
//! foreground pixel that would land outside the canvas is dropped; the
//! canvas keeps its exact size.

use crate::color::{BYTES_PER_PIXEL, Rgb565};
use crate::display::DisplayConfig;
use crate::error::FramebufferError;
use crate::framebuffer::PixelBuffer;

/// Target surface: size plus the color under everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub background: Rgb565,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Rgb565) -> Self {
        Self {
            width,
            height,
            background,
        }
    }
}

impl From<&DisplayConfig> for Canvas {
    fn from(display: &DisplayConfig) -> Self {
        Self::new(display.width, display.height, display.background)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

/// Composite `fg` centered on a freshly filled `canvas`.
///
/// ## Errors
///
/// [`FramebufferError::TooLarge`] if the canvas itself cannot be allocated.
/// Clipping never errors.
pub fn composite(fg: &PixelBuffer, canvas: &Canvas) -> Result<PixelBuffer, FramebufferError> {
    let mut out = PixelBuffer::filled(canvas.width, canvas.height, canvas.background)?;

    let x_offset = centered_offset(canvas.width, fg.width());
    let y_offset = centered_offset(canvas.height, fg.height());
    let cols = visible_span(x_offset, fg.width(), canvas.width);
    let rows = visible_span(y_offset, fg.height(), canvas.height);

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        x_offset,
        y_offset,
        "compositing onto canvas"
    );
    if cols.len < fg.width() || rows.len < fg.height() {
        tracing::debug!(
            visible_cols = cols.len,
            visible_rows = rows.len,
            fg_width = fg.width(),
            fg_height = fg.height(),
            "foreground clipped at canvas edge"
        );
    }

    let src_bytes = cols.src * BYTES_PER_PIXEL..(cols.src + cols.len) * BYTES_PER_PIXEL;
    let dst_bytes = cols.dst * BYTES_PER_PIXEL..(cols.dst + cols.len) * BYTES_PER_PIXEL;

    for i in 0..rows.len {
        let Some(src) = fg.row(rows.src + i).and_then(|r| r.get(src_bytes.clone())) else {
            continue;
        };
        let Some(dst) = out
            .row_mut(rows.dst + i)
            .and_then(|r| r.get_mut(dst_bytes.clone()))
        else {
            continue;
        };
        dst.copy_from_slice(src);
    }

    Ok(out)
}

/// `floor((canvas - fg) / 2)`, negative when the foreground is larger.
///
/// Saturates at the `isize` range; an empty buffer may have a zero width and a
/// height near `usize::MAX`.
pub fn centered_offset(canvas: usize, fg: usize) -> isize {
    let offset = (canvas as i128 - fg as i128).div_euclid(2);
    offset.clamp(isize::MIN as i128, isize::MAX as i128) as isize
}

/// Overlap of a foreground axis placed at `offset` with a canvas axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    /// First visible foreground coordinate
    src: usize,
    /// Where it lands on the canvas
    dst: usize,
    /// Number of visible coordinates
    len: usize,
}

fn visible_span(offset: isize, fg_len: usize, canvas_len: usize) -> Span {
    if offset >= 0 {
        let dst = offset as usize;
        Span {
            src: 0,
            dst,
            len: fg_len.min(canvas_len.saturating_sub(dst)),
        }
    } else {
        let src = offset.unsigned_abs();
        Span {
            src,
            dst: 0,
            len: fg_len.saturating_sub(src).min(canvas_len),
        }
    }
}
