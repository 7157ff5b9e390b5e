//! # qrfb - QR Codes for Small Framebuffers
//!
//! qrfb renders a QR code module matrix into a raw RGB565 frame that can be
//! written straight to a small TFT panel (for example a 320×240 SPI display
//! exposed as `/dev/fb1`). It provides:
//!
//! - **Rasterizing**: one pixel per QR module, in any two colors
//! - **Scaling**: nearest-neighbor resampling by any positive factor
//! - **Compositing**: centering on a fixed-size background canvas, with clipping
//! - **Sinks**: one-shot delivery of finished frames to files, devices or writers
//!
//! ## Quick Start
//!
//! ```no_run
//! use qrfb::{
//!     matrix::{ErrorLevel, ModuleMatrix},
//!     render::{self, RenderOptions},
//!     sink::{FileSink, FrameSink},
//! };
//!
//! // Encode the payload
//! let matrix = ModuleMatrix::encode("https://example.com", ErrorLevel::M)?;
//!
//! // 8 pixels per module, centered on a blue 320x240 canvas
//! let options = RenderOptions::default().with_scale(8.0);
//! let frame = render::render(&matrix, &options)?;
//!
//! // Push the frame to the panel
//! FileSink::create("/dev/fb1")?.send_frame(&frame)?;
//!
//! # Ok::<(), qrfb::error::FramebufferError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`matrix`] | QR module matrices |
//! | [`color`] | RGB565 packing |
//! | [`framebuffer`] | Bounds-checked pixel grid |
//! | [`render`] | Rasterize, scale, composite |
//! | [`sink`] | Frame delivery |
//! | [`preview`] | PNG previews |
//! | [`display`] | Panel configurations |
//! | [`error`] | Error types |
//!
//! ## Frame Format
//!
//! `width * height * 2` bytes, row-major from the top-left pixel, each pixel
//! an RGB565 code in little-endian byte order. No header, no row padding.

pub mod color;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod matrix;
pub mod preview;
pub mod render;
pub mod sink;

// Re-exports for convenience
pub use color::Rgb565;
pub use display::DisplayConfig;
pub use error::FramebufferError;
pub use framebuffer::PixelBuffer;
pub use matrix::ModuleMatrix;
pub use render::{RenderOptions, render};
