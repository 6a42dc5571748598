//! The boxen entry points.
//!
//! [`Boxen`] pairs a renderer handle with the validate-resolve-render
//! pipeline. [`boxen`] is a one-shot shortcut that renders for the attached
//! terminal.

use boxen_protocol::{BoxOptions, BoxRequest};
use tracing::debug;

use crate::error::Result;
use crate::renderer::{Renderer, TerminalRenderer};

/// Renders boxes through a shared renderer.
///
/// Options are validated and resolved into a [`BoxRequest`] on every call;
/// nothing is drawn when validation fails.
///
/// # Examples
///
/// ```
/// use boxen_protocol::BoxOptions;
/// use boxen_render::{Boxen, TerminalRenderer};
///
/// let boxen = Boxen::new(TerminalRenderer::new(40, false));
/// let options = BoxOptions::new().with_style("ascii");
///
/// assert_eq!(boxen.render(["ok"], &options).unwrap(), "+--+\n|ok|\n+--+\n");
/// assert!(boxen.render(["ok"], &BoxOptions::new().with_style("wavy")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Boxen<R = TerminalRenderer> {
    renderer: R,
}

impl<R: Renderer> Boxen<R> {
    /// Creates a service around `renderer`.
    pub const fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// The renderer handle.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Validates `options`, resolves them against `content` and renders the
    /// box.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Invalid`](crate::RenderError::Invalid) when the
    /// options fail validation, or any error from the renderer.
    pub fn render<I, S>(&self, content: I, options: &BoxOptions) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = BoxRequest::new(content, options)?;
        debug!(
            lines = request.lines().count(),
            padding = ?request.padding(),
            margin = ?request.margin(),
            "resolved box request"
        );
        self.renderer.render(&request)
    }
}

impl Default for Boxen<TerminalRenderer> {
    fn default() -> Self {
        Self::new(TerminalRenderer::detect())
    }
}

/// Renders one box for the attached terminal.
///
/// The width is detected from the terminal and color is emitted only when
/// standard output is a terminal. Use [`Boxen`] with an explicit
/// [`TerminalRenderer`] for reproducible output.
///
/// # Errors
///
/// See [`Boxen::render`].
///
/// # Examples
///
/// ```no_run
/// use boxen_protocol::BoxOptions;
/// use boxen_render::boxen;
///
/// let rendered = boxen(["Hello, world!"], &BoxOptions::new().with_padding(1u16))?;
/// print!("{rendered}");
/// # Ok::<(), boxen_render::RenderError>(())
/// ```
pub fn boxen<I, S>(content: I, options: &BoxOptions) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Boxen::<TerminalRenderer>::default().render(content, options)
}
