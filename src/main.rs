//! # qrfb CLI
//!
//! Command-line interface for rendering QR codes to framebuffers.
//!
//! ## Usage
//!
//! ```bash
//! # Render to the SPI panel, 8 pixels per module
//! qrfb render --scale 8 --out /dev/fb1 "https://example.com"
//!
//! # As large as the panel allows
//! qrfb render --fit --out /dev/fb1 "https://example.com"
//!
//! # Raw frame to stdout, plus a PNG preview
//! qrfb render --png preview.png "hello" > frame.raw
//!
//! # Square panel, custom colors
//! qrfb render --display st7789 --dark "#003366" --background 0 "hello"
//!
//! # Options from a JSON file
//! qrfb render --config options.json "hello"
//!
//! # List known panels
//! qrfb displays
//! ```
//!
//! Set `RUST_LOG=qrfb=debug` to trace each pipeline stage.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use qrfb::{
    DisplayConfig, FramebufferError, ModuleMatrix, RenderOptions, Rgb565,
    matrix::ErrorLevel,
    preview,
    render,
    sink::{FileSink, FrameSink, WriterSink},
};

/// qrfb - QR code framebuffer renderer
#[derive(Parser, Debug)]
#[command(name = "qrfb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode data as a QR code and render it to a raw RGB565 frame
    Render {
        /// Data to encode
        data: String,

        /// Output file or framebuffer device (defaults to stdout)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Also save a PNG preview
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        /// JSON options file; flags override its values
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Display panel: qvga, st7789 or WIDTHxHEIGHT
        #[arg(long)]
        display: Option<String>,

        /// Pixels per module (any positive number)
        #[arg(long, conflicts_with = "fit")]
        scale: Option<f64>,

        /// Use the largest whole-pixel scale that fits the canvas
        #[arg(long)]
        fit: bool,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<usize>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<usize>,

        /// Dark module color (#RRGGBB, 0xNNNN or packed decimal)
        #[arg(long)]
        dark: Option<Rgb565>,

        /// Light module color
        #[arg(long)]
        light: Option<Rgb565>,

        /// Canvas background color
        #[arg(long)]
        background: Option<Rgb565>,

        /// QR error correction level
        #[arg(long, value_enum, default_value = "m")]
        ec_level: ErrorLevel,
    },

    /// List known display panels
    Displays,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FramebufferError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Displays => {
            println!("Available displays:");
            for display in DisplayConfig::built_in() {
                let bytes = display
                    .frame_bytes()
                    .map_or_else(|| "too large".to_string(), |n| format!("{} bytes/frame", n));
                println!("  {:<8} {} ({})", display.id, display.name, bytes);
            }
            println!("  WxH      any other size, e.g. 480x320");
        }
        Commands::Render {
            data,
            out,
            png,
            config,
            display,
            scale,
            fit,
            width,
            height,
            dark,
            light,
            background,
            ec_level,
        } => {
            let mut options = match config {
                Some(path) => RenderOptions::from_json_file(path)?,
                None => RenderOptions::default(),
            };

            if let Some(name) = display {
                let display = DisplayConfig::parse(&name).map_err(FramebufferError::Config)?;
                options.canvas_width = display.width;
                options.canvas_height = display.height;
                options.background_color = display.background;
            }
            if let Some(scale) = scale {
                options.scale = scale;
            }
            if let Some(width) = width {
                options.canvas_width = width;
            }
            if let Some(height) = height {
                options.canvas_height = height;
            }
            if let Some(dark) = dark {
                options.dark_color = dark;
            }
            if let Some(light) = light {
                options.light_color = light;
            }
            if let Some(background) = background {
                options.background_color = background;
            }

            let matrix = ModuleMatrix::encode(data.as_bytes(), ec_level)?;
            if fit {
                let canvas = DisplayConfig {
                    width: options.canvas_width,
                    height: options.canvas_height,
                    ..DisplayConfig::default()
                };
                // Oversized codes fall back to 1:1 and get clipped
                options.scale = canvas.max_integer_scale(matrix.size()).max(1) as f64;
            }
            tracing::info!(
                modules = matrix.size(),
                scale = options.scale,
                width = options.canvas_width,
                height = options.canvas_height,
                "rendering QR code"
            );

            let frame = render::render(&matrix, &options)?;

            match out {
                Some(path) => FileSink::create(path)?.send_frame(&frame)?,
                None => WriterSink::new(io::stdout().lock()).send_frame(&frame)?,
            }

            if let Some(path) = png {
                preview::save_png(&frame, path)?;
            }
        }
    }

    Ok(())
}
