//! Module matrix to pixels, one pixel per module.

use crate::color::Rgb565;
use crate::error::FramebufferError;
use crate::framebuffer::PixelBuffer;
use crate::matrix::ModuleMatrix;

/// Rasterize `matrix` into an N×N buffer.
///
/// Dark modules become `dark`, light modules become `light`. An empty matrix
/// gives an empty buffer.
pub fn rasterize(
    matrix: &ModuleMatrix,
    dark: Rgb565,
    light: Rgb565,
) -> Result<PixelBuffer, FramebufferError> {
    let size = matrix.size();
    let mut buffer = PixelBuffer::filled(size, size, light)?;

    for (y, row) in matrix.rows().enumerate() {
        for (x, _) in row.iter().enumerate().filter(|(_, is_dark)| **is_dark) {
            buffer.set_pixel(x, y, dark);
        }
    }

    tracing::debug!(modules = size, "rasterized module matrix");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard() {
        let m = ModuleMatrix::from_rows(&[vec![true, false], vec![false, true]]).unwrap();
        let buf = rasterize(&m, Rgb565::BLACK, Rgb565::WHITE).unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 2));
        assert_eq!(
            buf.as_bytes(),
            &[0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00]
        );
    }

    #[test]
    fn test_custom_palette() {
        let m = ModuleMatrix::from_rows(&[vec![true, false], vec![false, false]]).unwrap();
        let buf = rasterize(&m, Rgb565::GREEN, Rgb565::RED).unwrap();
        assert_eq!(buf.pixel(0, 0), Some(Rgb565::GREEN));
        assert_eq!(buf.pixel(1, 0), Some(Rgb565::RED));
        assert_eq!(buf.pixel(1, 1), Some(Rgb565::RED));
    }

    #[test]
    fn test_row_col_orientation() {
        // dark module at row 0, col 2 must land at x=2, y=0
        let m = ModuleMatrix::new(3, vec![false, false, true, false, false, false, false, false, false])
            .unwrap();
        let buf = rasterize(&m, Rgb565::BLACK, Rgb565::WHITE).unwrap();
        assert_eq!(buf.pixel(2, 0), Some(Rgb565::BLACK));
        assert_eq!(buf.pixel(0, 2), Some(Rgb565::WHITE));
    }

    #[test]
    fn test_empty_matrix() {
        let m = ModuleMatrix::new(0, Vec::new()).unwrap();
        let buf = rasterize(&m, Rgb565::BLACK, Rgb565::WHITE).unwrap();
        assert!(buf.is_empty());
        assert_eq!((buf.width(), buf.height()), (0, 0));
    }
}
