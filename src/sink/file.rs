//! # File and Device Sink
//!
//! Writes frames to a regular file or to a Linux framebuffer device.
//!
//! ## Framebuffer Devices
//!
//! Small SPI panels driven by `fbtft` show up as `/dev/fb1`. Writing a
//! full RGB565 frame from offset 0 replaces what is on screen:
//!
//! ```bash
//! $ qrfb render "https://example.com" --scale 8 --out /dev/fb1
//! ```
//!
//! The panel's color depth must be 16 bpp (`fbset -depth 16`).

use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

use super::{FrameSink, write_frame};
use crate::error::FramebufferError;
use crate::framebuffer::PixelBuffer;

/// Default framebuffer device for SPI panels
pub const DEFAULT_DEVICE: &str = "/dev/fb1";

/// # File Sink
///
/// Each frame overwrites the target from its first byte.
///
/// ## Example
///
/// ```no_run
/// use qrfb::sink::{FileSink, FrameSink};
/// use qrfb::framebuffer::PixelBuffer;
/// use qrfb::color::Rgb565;
///
/// let mut sink = FileSink::create("/dev/fb1")?;
/// sink.send_frame(&PixelBuffer::filled(320, 240, Rgb565::BLUE)?)?;
/// # Ok::<(), qrfb::FramebufferError>(())
/// ```
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for writing, creating it if needed.
    ///
    /// Existing regular files are truncated. Device nodes are opened as-is.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, FramebufferError> {
        let path = path.as_ref();
        let is_device = path.starts_with("/dev");

        let file = OpenOptions::new()
            .write(true)
            .create(!is_device)
            .truncate(!is_device)
            .open(path)
            .map_err(|e| {
                FramebufferError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to open {}: {}", path.display(), e),
                ))
            })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Open the default framebuffer device (/dev/fb1)
    pub fn open_default() -> Result<Self, FramebufferError> {
        Self::create(DEFAULT_DEVICE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for FileSink {
    fn send_frame(&mut self, frame: &PixelBuffer) -> Result<(), FramebufferError> {
        // Every frame starts at the top-left pixel
        self.file.seek(SeekFrom::Start(0))?;
        write_frame(&mut self.file, frame)?;
        tracing::info!(path = %self.path.display(), bytes = frame.len(), "wrote frame");
        Ok(())
    }
}
