//! # Frame Sinks
//!
//! This module hands finished frames to whatever consumes them.
//!
//! A frame is always delivered in one shot: the whole buffer is written,
//! then the sink is flushed to signal completion. Sinks never see a partial
//! frame, and the render pipeline never chunks.
//!
//! ## Available Sinks
//!
//! - [`WriterSink`]: any [`std::io::Write`] (stdout, a `Vec<u8>`, a socket)
//! - [`file::FileSink`]: a file or a Linux framebuffer device such as `/dev/fb1`

pub mod file;

use std::io::Write;
use std::path::Path;

pub use file::FileSink;

use crate::error::FramebufferError;
use crate::framebuffer::PixelBuffer;
use crate::matrix::ModuleMatrix;
use crate::render::{self, RenderOptions};

/// Consumer of complete frames.
pub trait FrameSink {
    /// Deliver `frame` in full, then signal completion.
    fn send_frame(&mut self, frame: &PixelBuffer) -> Result<(), FramebufferError>;
}

/// Sink over any writer.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for WriterSink<W> {
    fn send_frame(&mut self, frame: &PixelBuffer) -> Result<(), FramebufferError> {
        write_frame(&mut self.writer, frame)
    }
}

/// Write every byte of `frame`, then flush.
pub fn write_frame<W: Write>(writer: &mut W, frame: &PixelBuffer) -> Result<(), FramebufferError> {
    writer.write_all(frame.as_bytes())?;
    writer.flush()?;
    tracing::debug!(bytes = frame.len(), "frame delivered");
    Ok(())
}

/// Render `matrix` and send the frame to `sink`.
///
/// Nothing is written if rendering fails.
pub fn render_to_sink<S: FrameSink + ?Sized>(
    sink: &mut S,
    matrix: &ModuleMatrix,
    options: &RenderOptions,
) -> Result<PixelBuffer, FramebufferError> {
    let frame = render::render(matrix, options)?;
    sink.send_frame(&frame)?;
    Ok(frame)
}

/// Render `matrix` into `writer`.
pub fn render_to_writer<W: Write>(
    writer: W,
    matrix: &ModuleMatrix,
    options: &RenderOptions,
) -> Result<(), FramebufferError> {
    let mut sink = WriterSink::new(writer);
    render_to_sink(&mut sink, matrix, options).map(|_| ())
}

/// Render `matrix` into the file or device at `path`.
///
/// The path is only opened once rendering has succeeded, so a bad option
/// never truncates an existing file.
pub fn render_to_file<P: AsRef<Path>>(
    path: P,
    matrix: &ModuleMatrix,
    options: &RenderOptions,
) -> Result<(), FramebufferError> {
    let frame = render::render(matrix, options)?;
    FileSink::create(path)?.send_frame(&frame)
}
