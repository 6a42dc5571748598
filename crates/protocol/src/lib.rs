//! Shared protocol types for boxen.
//!
//! This crate holds the part of boxen that makes decisions: turning the
//! user-facing options of a box into a validated, fully resolved
//! [`BoxRequest`]. Drawing the box is left to a renderer.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`size`]: Size specs and their resolution into [`Insets`]
//! - [`style`]: The named border styles
//! - [`alignment`]: Horizontal alignment
//! - [`options`]: User-facing options and validation
//! - [`request`]: The resolved request handed to renderers
//! - [`error`]: Error types for validation
//!
//! # Examples
//!
//! ```
//! use boxen_protocol::{BoxOptions, BoxRequest, Insets};
//!
//! let options = BoxOptions::new().with_padding(1u16).with_margin((1, 2));
//! let request = BoxRequest::new(["hello"], &options).unwrap();
//!
//! assert_eq!(request.padding(), Insets::new(1, 3, 1, 3));
//! assert_eq!(request.margin(), Insets::new(1, 2, 1, 2));
//! ```

pub mod alignment;
pub mod error;
pub mod options;
pub mod request;
pub mod size;
pub mod style;

// Re-export primary types at crate root for convenience
pub use alignment::Alignment;
pub use error::{BoxenError, Result};
pub use options::{BoxOptions, DEFAULT_COLOR, DEFAULT_STYLE, OPTION_NAMES};
pub use request::BoxRequest;
pub use size::{HORIZONTAL_SCALE, Insets, SizeRole, SizeSpec, resolve_size};
pub use style::BoxStyle;
