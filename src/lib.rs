//! Swatch - color conversion, palette scales and contrast checks
//!
//! Command-line front end for the `colorkit` crate.
//! This library exposes modules for integration testing.

pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;

pub use config::SwatchConfig;
pub use error::SwatchError;
