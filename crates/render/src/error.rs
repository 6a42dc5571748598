//! Error types for rendering.

use boxen_protocol::BoxenError;

/// Errors that can occur while rendering a box.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The box options failed validation; nothing was drawn.
    #[error(transparent)]
    Invalid(#[from] BoxenError),

    /// The color token could not be resolved to a terminal color.
    #[error("invalid color {color:?}: expected a color name, #rrggbb or a 0-255 index")]
    InvalidColor {
        /// The rejected token.
        color: String,
    },

    /// Writing the captured output failed.
    #[error("failed to capture rendered output")]
    Capture(#[from] std::fmt::Error),
}

/// A specialized Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
