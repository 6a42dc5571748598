//! Fully resolved box requests.
//!
//! A [`BoxRequest`] is what a renderer consumes. It can only be built from
//! [`BoxOptions`] through [`BoxRequest::new`], which validates the options
//! and resolves padding and margin, so every request in hand is valid.

use crate::alignment::Alignment;
use crate::error::Result;
use crate::options::BoxOptions;
use crate::size::{Insets, SizeRole, resolve_size};
use crate::style::BoxStyle;

/// A validated, resolved description of one box.
///
/// # Examples
///
/// ```
/// use boxen_protocol::{Alignment, BoxOptions, BoxRequest, BoxStyle, Insets};
///
/// let options = BoxOptions::new().with_padding(1u16).with_title("Hi");
/// let request = BoxRequest::new(["hello"], &options).unwrap();
///
/// assert_eq!(request.style(), BoxStyle::Rounded);
/// assert_eq!(request.padding(), Insets::new(1, 3, 1, 3));
/// assert_eq!(request.title(), Some(("Hi", Alignment::Left)));
/// assert_eq!(request.content(), ["hello"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxRequest {
    content: Vec<String>,
    color: String,
    style: BoxStyle,
    padding: Insets,
    margin: Insets,
    text_alignment: Alignment,
    box_alignment: Alignment,
    title: Option<(String, Alignment)>,
    subtitle: Option<(String, Alignment)>,
    fullwidth: bool,
}

impl BoxRequest {
    /// Validates `options` and resolves them against `content`.
    ///
    /// Each content item is rendered as one or more lines, stacked in
    /// order. Padding is resolved before margin. An empty title or subtitle
    /// is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns the first validation error in option order, then any
    /// [`BoxenError::InvalidSize`](crate::BoxenError::InvalidSize) from
    /// padding or margin.
    pub fn new<I, S>(content: I, options: &BoxOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        options.validate()?;

        let padding = resolve_size(&options.padding, SizeRole::Padding)?;
        let margin = resolve_size(&options.margin, SizeRole::Margin)?;

        Ok(Self {
            content: content.into_iter().map(Into::into).collect(),
            color: options.color_token().to_string(),
            style: options.box_style()?,
            padding,
            margin,
            text_alignment: options.text_align()?,
            box_alignment: options.box_align()?,
            title: options
                .title
                .clone()
                .filter(|title| !title.is_empty())
                .map(|title| options.title_align().map(|align| (title, align)))
                .transpose()?,
            subtitle: options
                .subtitle
                .clone()
                .filter(|subtitle| !subtitle.is_empty())
                .map(|subtitle| options.subtitle_align().map(|align| (subtitle, align)))
                .transpose()?,
            fullwidth: options.fullwidth,
        })
    }

    /// The content items, in order.
    #[must_use]
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Every content line, with items split on `\n`.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.iter().flat_map(|item| item.split('\n'))
    }

    /// The border color token. Resolution is left to the renderer.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn style(&self) -> BoxStyle {
        self.style
    }

    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding
    }

    #[must_use]
    pub fn margin(&self) -> Insets {
        self.margin
    }

    #[must_use]
    pub fn text_alignment(&self) -> Alignment {
        self.text_alignment
    }

    #[must_use]
    pub fn box_alignment(&self) -> Alignment {
        self.box_alignment
    }

    /// The title and its alignment, if any.
    #[must_use]
    pub fn title(&self) -> Option<(&str, Alignment)> {
        self.title.as_ref().map(|(text, align)| (text.as_str(), *align))
    }

    /// The subtitle and its alignment, if any.
    #[must_use]
    pub fn subtitle(&self) -> Option<(&str, Alignment)> {
        self.subtitle
            .as_ref()
            .map(|(text, align)| (text.as_str(), *align))
    }

    #[must_use]
    pub fn fullwidth(&self) -> bool {
        self.fullwidth
    }
}
