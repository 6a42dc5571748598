//! The rendering delegate.
//!
//! [`Renderer`] is the seam between validated requests and the text that
//! ends up on screen. [`TerminalRenderer`] draws with ratatui: a [`Block`]
//! supplies the border, padding and titles, a [`Paragraph`] lays out the
//! content, and the resulting buffer is captured as text.

use std::str::FromStr;

use boxen_config::Config;
use boxen_protocol::{Alignment, BoxRequest, Insets};
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment as TextAlignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use tracing::{debug, instrument};

use crate::border::apply_border;
use crate::capture::capture;
use crate::error::{RenderError, Result};
use crate::geometry::{BoxGeometry, decorate_title};
use crate::terminal;

/// Something that turns a [`BoxRequest`] into printable text.
pub trait Renderer {
    /// Renders `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be drawn, for example when
    /// its color token is not a known color.
    fn render(&self, request: &BoxRequest) -> Result<String>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, request: &BoxRequest) -> Result<String> {
        (**self).render(request)
    }
}

/// Draws boxes with ratatui at a fixed width.
///
/// The renderer holds no mutable state, so one instance can render any
/// number of boxes and identical requests always produce identical text.
///
/// Border colors are color names, 256-color indices or `#rrggbb`. `white`
/// means the standard palette white (SGR 37); use `bright_white` for the
/// bright variant.
///
/// # Examples
///
/// ```
/// use boxen_protocol::{BoxOptions, BoxRequest};
/// use boxen_render::{Renderer, TerminalRenderer};
///
/// let renderer = TerminalRenderer::new(40, false);
/// let request = BoxRequest::new(["hi"], &BoxOptions::default()).unwrap();
///
/// assert_eq!(renderer.render(&request).unwrap(), "╭──╮\n│hi│\n╰──╯\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalRenderer {
    width: u16,
    styled: bool,
}

impl TerminalRenderer {
    /// Creates a renderer `width` columns wide, emitting ANSI colors when
    /// `styled` is set.
    #[must_use]
    pub const fn new(width: u16, styled: bool) -> Self {
        Self { width, styled }
    }

    /// Creates a renderer for the attached terminal, coloring only when
    /// standard output is a terminal.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a renderer from configured settings, detecting whatever the
    /// configuration leaves open.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let width = config.width.unwrap_or_else(terminal::detect_width);
        Self::new(width, config.color_mode.resolve())
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn styled(&self) -> bool {
        self.styled
    }
}

impl Renderer for TerminalRenderer {
    #[instrument(level = "debug", skip_all, fields(style = %request.style(), width = self.width))]
    fn render(&self, request: &BoxRequest) -> Result<String> {
        let color = parse_color(request.color())?;
        let geometry = BoxGeometry::compute(request, self.width);
        debug!(?geometry, "computed box geometry");

        let border_style = Style::default().fg(color);
        let mut block = apply_border(Block::bordered(), request.style())
            .border_style(border_style)
            .title_style(border_style)
            .padding(to_padding(request.padding()));
        if let Some((title, alignment)) = request.title() {
            block = block.title_top(
                Line::from(decorate_title(title)).alignment(to_text_alignment(alignment)),
            );
        }
        if let Some((subtitle, alignment)) = request.subtitle() {
            block = block.title_bottom(
                Line::from(decorate_title(subtitle)).alignment(to_text_alignment(alignment)),
            );
        }

        let text = Text::from(request.lines().map(Line::from).collect::<Vec<_>>());
        let mut buf = Buffer::empty(geometry.canvas);
        Paragraph::new(text)
            .alignment(to_text_alignment(request.text_alignment()))
            .block(block)
            .render(geometry.panel, &mut buf);

        Ok(capture(&buf, self.styled)?)
    }
}

/// Resolves a color token with ratatui's color parser.
///
/// `white` is the standard white of the 16-color palette (SGR 37, index 7),
/// not ratatui's bright white; `bright_white` selects index 15.
fn parse_color(token: &str) -> Result<Color> {
    let name: String = token
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect();
    match name.as_str() {
        "white" => Ok(Color::Gray),
        "brightwhite" | "lightwhite" => Ok(Color::White),
        _ => Color::from_str(token).map_err(|_| RenderError::InvalidColor {
            color: token.to_string(),
        }),
    }
}

fn to_padding(insets: Insets) -> Padding {
    Padding::new(insets.left, insets.right, insets.top, insets.bottom)
}

fn to_text_alignment(alignment: Alignment) -> TextAlignment {
    match alignment {
        Alignment::Left => TextAlignment::Left,
        Alignment::Center => TextAlignment::Center,
        Alignment::Right => TextAlignment::Right,
    }
}
