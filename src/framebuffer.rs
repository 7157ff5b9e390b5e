//! # Pixel Buffers
//!
//! [`PixelBuffer`] is a W×H grid of RGB565 pixels that owns its bytes and
//! carries its own geometry. Every pipeline stage reads and writes pixels
//! through it, so no stage ever computes a byte offset by hand or guesses
//! dimensions from a byte count.
//!
//! ## Memory Layout
//!
//! ```text
//! row 0:  [p(0,0) lo][p(0,0) hi][p(1,0) lo][p(1,0) hi] ... [p(W-1,0) hi]
//! row 1:  [p(0,1) lo][p(0,1) hi] ...
//! ...
//! ```
//!
//! Row-major, top-left origin, 2 bytes per pixel in little-endian order,
//! no row padding. `bytes.len() == width * height * 2` always holds.

use crate::color::{BYTES_PER_PIXEL, Rgb565};
use crate::error::FramebufferError;

/// A packed RGB565 pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a buffer with every pixel set to `color`.
    ///
    /// A zero width or height gives an empty buffer.
    ///
    /// ## Errors
    ///
    /// Returns [`FramebufferError::TooLarge`] if the byte length exceeds
    /// `isize::MAX` or the allocation fails.
    pub fn filled(width: usize, height: usize, color: Rgb565) -> Result<Self, FramebufferError> {
        let too_large = || FramebufferError::TooLarge { width, height };
        let len = byte_len(width, height).ok_or_else(too_large)?;

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len).map_err(|_| too_large())?;
        bytes.resize(len, 0);
        let pixel = color.to_le_bytes();
        for chunk in bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&pixel);
        }

        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Wrap raw framebuffer bytes with explicit geometry.
    ///
    /// ## Errors
    ///
    /// Returns [`FramebufferError::Image`] if the byte count does not match
    /// `width * height * 2`.
    pub fn from_bytes(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self, FramebufferError> {
        if byte_len(width, height) != Some(bytes.len()) {
            return Err(FramebufferError::Image(format!(
                "{}x{} buffer needs {} bytes, got {}",
                width,
                height,
                width.saturating_mul(height).saturating_mul(BYTES_PER_PIXEL),
                bytes.len()
            )));
        }
        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Byte length of the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw framebuffer bytes, ready for a display or file.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y * self.width + x) * BYTES_PER_PIXEL)
    }

    /// Raw bytes of pixel (x, y), or `None` outside the grid.
    #[inline]
    pub fn pixel_bytes(&self, x: usize, y: usize) -> Option<[u8; BYTES_PER_PIXEL]> {
        let i = self.offset(x, y)?;
        Some([self.bytes[i], self.bytes[i + 1]])
    }

    /// Color of pixel (x, y), or `None` outside the grid.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        self.pixel_bytes(x, y).map(Rgb565::from_le_bytes)
    }

    /// Write raw pixel bytes at (x, y).
    ///
    /// Returns `false` and leaves the buffer untouched when (x, y) is outside
    /// the grid.
    #[inline]
    pub fn set_pixel_bytes(&mut self, x: usize, y: usize, pixel: [u8; BYTES_PER_PIXEL]) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.bytes[i..i + BYTES_PER_PIXEL].copy_from_slice(&pixel);
                true
            }
            None => false,
        }
    }

    /// Set pixel (x, y) to `color`. Out-of-range writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) -> bool {
        self.set_pixel_bytes(x, y, color.to_le_bytes())
    }

    /// Bytes of row `y`.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        Some(&self.bytes[y * stride..(y + 1) * stride])
    }

    /// Mutable bytes of row `y`.
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        Some(&mut self.bytes[y * stride..(y + 1) * stride])
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }
}

/// `width * height * 2`, or `None` when it exceeds `isize::MAX`, the largest
/// size a `Vec<u8>` can hold.
pub(crate) fn byte_len(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .filter(|&len| len <= isize::MAX as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_layout() {
        let buf = PixelBuffer::filled(3, 2, Rgb565::BLUE).unwrap();
        assert_eq!(buf.len(), 3 * 2 * 2);
        assert!(buf.as_bytes().chunks(2).all(|p| p == [0x1F, 0x00]));
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(PixelBuffer::filled(0, 5, Rgb565::WHITE).unwrap().is_empty());
        assert!(PixelBuffer::filled(5, 0, Rgb565::WHITE).unwrap().is_empty());
    }

    #[test]
    fn test_get_set_pixel() {
        let mut buf = PixelBuffer::filled(4, 3, Rgb565::BLACK).unwrap();
        assert!(buf.set_pixel(3, 2, Rgb565::RED));
        assert_eq!(buf.pixel(3, 2), Some(Rgb565::RED));
        assert_eq!(buf.pixel(2, 2), Some(Rgb565::BLACK));
        // last pixel lives at the last two bytes
        assert_eq!(&buf.as_bytes()[22..], &[0x00, 0xF8]);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut buf = PixelBuffer::filled(2, 2, Rgb565::BLACK).unwrap();
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 2), None);
        assert!(!buf.set_pixel(2, 0, Rgb565::WHITE));
        assert!(!buf.set_pixel(0, 7, Rgb565::WHITE));
        assert_eq!(buf, PixelBuffer::filled(2, 2, Rgb565::BLACK).unwrap());
    }

    #[test]
    fn test_rows() {
        let mut buf = PixelBuffer::filled(2, 2, Rgb565::BLACK).unwrap();
        buf.row_mut(1).unwrap().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(buf.row(0).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(buf.row(1).unwrap(), &[1, 2, 3, 4]);
        assert!(buf.row(2).is_none());
    }

    #[test]
    fn test_from_bytes_checks_length() {
        assert!(PixelBuffer::from_bytes(2, 2, vec![0; 8]).is_ok());
        assert!(PixelBuffer::from_bytes(2, 2, vec![0; 7]).is_err());
        assert!(PixelBuffer::from_bytes(usize::MAX, 2, Vec::new()).is_err());
    }

    #[test]
    fn test_filled_rejects_overflow() {
        assert!(matches!(
            PixelBuffer::filled(usize::MAX, 2, Rgb565::BLACK),
            Err(FramebufferError::TooLarge { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_filled_rejects_unallocatable_length() {
        // 2^63 bytes fits in usize but not in a Vec
        assert!(matches!(
            PixelBuffer::filled(1 << 62, 1, Rgb565::BLACK),
            Err(FramebufferError::TooLarge { width, height: 1 }) if width == 1 << 62
        ));
        assert_eq!(byte_len(1 << 62, 1), None);
        assert_eq!(byte_len(1 << 61, 1), Some(1 << 62));
    }

    #[test]
    fn test_zero_width_with_huge_height() {
        let buf = PixelBuffer::filled(0, usize::MAX, Rgb565::BLACK).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.height(), usize::MAX);
    }
}
