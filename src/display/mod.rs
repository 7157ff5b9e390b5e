//! # Display Module
//!
//! This module provides display panel configurations.
//!
//! ## Modules
//!
//! - [`config`]: Panel geometry and default colors

pub mod config;

pub use config::DisplayConfig;
