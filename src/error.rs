//! # Error Types
//!
//! This module defines error types used throughout the qrfb library.

use thiserror::Error;

/// Main error type for qrfb operations
#[derive(Debug, Error)]
pub enum FramebufferError {
    /// Module matrix is not square or its cell count does not match its size
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// Scale factor is not a positive finite number, or its output is too large
    #[error("Invalid scale factor: {0}")]
    InvalidScale(f64),

    /// Requested buffer geometry overflows addressable memory
    #[error("Buffer too large: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    /// Color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// QR encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// Options file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
