//! Rendering for boxen.
//!
//! This crate turns validated box requests into terminal text using
//! ratatui widgets, and exposes the [`Boxen`] service and the [`boxen`]
//! shortcut.
//!
//! # Overview
//!
//! - [`service`]: The [`Boxen`] service and the [`boxen`] function
//! - [`renderer`]: The [`Renderer`] seam and the ratatui-backed [`TerminalRenderer`]
//! - [`geometry`]: Panel and margin placement
//! - [`border`]: Border glyphs per style
//! - [`capture`]: Buffer to text, with optional ANSI color
//! - [`terminal`]: Terminal width detection
//! - [`error`]: Error types for rendering
//!
//! # Example
//!
//! ```
//! use boxen_protocol::BoxOptions;
//! use boxen_render::{Boxen, TerminalRenderer};
//!
//! let boxen = Boxen::new(TerminalRenderer::new(80, false));
//! let options = BoxOptions::new().with_padding(1u16);
//!
//! let rendered = boxen.render(["hello"], &options).unwrap();
//! assert!(rendered.contains("│   hello   │"));
//! ```

pub mod border;
pub mod capture;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod service;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_utils;


// Re-export primary types at crate root for convenience
pub use error::{RenderError, Result};
pub use renderer::{Renderer, TerminalRenderer};
pub use service::{Boxen, boxen};
