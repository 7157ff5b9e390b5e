//! # Module Matrix
//!
//! A QR code is a square grid of dark and light modules. [`ModuleMatrix`] is
//! the immutable input to the render pipeline: once constructed it is
//! guaranteed to hold exactly `size * size` cells.
//!
//! ## Sources
//!
//! - [`ModuleMatrix::new`]: flat row-major cells plus a side length
//! - [`ModuleMatrix::from_rows`]: nested rows (handy in tests)
//! - [`ModuleMatrix::encode`]: encode data with the `qrcode` crate
//!
//! ```
//! use qrfb::matrix::ModuleMatrix;
//!
//! let m = ModuleMatrix::from_rows(&[vec![true, false], vec![false, true]])?;
//! assert_eq!(m.size(), 2);
//! assert_eq!(m.is_dark(0, 0), Some(true));
//! # Ok::<(), qrfb::FramebufferError>(())
//! ```

use qrcode::{EcLevel, QrCode};
use serde::{Deserialize, Serialize};

use crate::error::FramebufferError;

/// QR error correction level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum ErrorLevel {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl From<ErrorLevel> for EcLevel {
    fn from(level: ErrorLevel) -> Self {
        match level {
            ErrorLevel::L => EcLevel::L,
            ErrorLevel::M => EcLevel::M,
            ErrorLevel::Q => EcLevel::Q,
            ErrorLevel::H => EcLevel::H,
        }
    }
}

/// Square grid of QR modules; `true` is dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl ModuleMatrix {
    /// Build from a side length and row-major cells.
    ///
    /// ## Errors
    ///
    /// [`FramebufferError::InvalidMatrix`] if `cells.len() != size * size`.
    pub fn new(size: usize, cells: Vec<bool>) -> Result<Self, FramebufferError> {
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(FramebufferError::InvalidMatrix(format!(
                "size {} needs {} cells, got {}",
                size,
                size.saturating_mul(size),
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    /// Build from nested rows.
    ///
    /// ## Errors
    ///
    /// [`FramebufferError::InvalidMatrix`] if any row length differs from the
    /// number of rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, FramebufferError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(FramebufferError::InvalidMatrix(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Encode `data` as a QR code.
    pub fn encode(data: impl AsRef<[u8]>, level: ErrorLevel) -> Result<Self, FramebufferError> {
        let code = QrCode::with_error_correction_level(data, level.into())
            .map_err(|e| FramebufferError::Encode(format!("QR code generation failed: {}", e)))?;
        Ok(Self::from(&code))
    }

    /// Side length in modules.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at (row, col) is dark; `None` outside the grid.
    #[inline]
    pub fn is_dark(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

impl From<&QrCode> for ModuleMatrix {
    fn from(code: &QrCode) -> Self {
        let size = code.width();
        let cells = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        Self { size, cells }
    }
}
