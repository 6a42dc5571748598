//! Configuration management for boxen.
//!
//! This crate loads the default box options and render settings from
//! configuration files and the environment.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`color_mode`]: When to emit ANSI color
//! - [`env`]: Environment variable overrides
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Command-line flags (applied by the binary)
//! 2. Environment variables (`BOXEN_*`, `NO_COLOR`)
//! 3. Local config (`./boxen.json5` or `./boxen.json`)
//! 4. User config (`~/.config/boxen/config.json5` or `~/.config/boxen/config.json`)
//! 5. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   // Any box option can be given a default here
//!   box: { style: "double", color: "cyan", padding: [1, 2] },
//!   width: 80,
//!   color_mode: "auto",
//! }
//! ```

pub mod color_mode;
pub mod config;
pub mod env;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use color_mode::ColorMode;
pub use config::{Config, MIN_WIDTH};
pub use error::{ConfigError, Result};
