//! Placement of a box on the canvas.
//!
//! The panel (border included) is sized to fit its widest element: the
//! padded content, the decorated title or the decorated subtitle. The margin
//! surrounds the panel, and the margin-wrapped panel is placed within the
//! render width according to the box alignment.

use boxen_protocol::BoxRequest;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Columns taken by the left and right border.
const BORDER: u16 = 2;

/// Where a box lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGeometry {
    /// The whole output area, starting at the origin.
    pub canvas: Rect,
    /// The bordered panel within the canvas.
    pub panel: Rect,
}

impl BoxGeometry {
    /// Computes the geometry of `request` rendered `width` columns wide.
    ///
    /// A panel that would not fit is clamped to the width left after the
    /// margin; its content is then clipped. The canvas only grows beyond
    /// `width` when even the two border columns do not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxen_protocol::{BoxOptions, BoxRequest};
    /// use boxen_render::geometry::BoxGeometry;
    /// use ratatui::layout::Rect;
    ///
    /// let request = BoxRequest::new(["hello"], &BoxOptions::new().with_padding(1u16)).unwrap();
    /// let geometry = BoxGeometry::compute(&request, 80);
    ///
    /// assert_eq!(geometry.panel, Rect::new(0, 0, 13, 5));
    /// assert_eq!(geometry.canvas, Rect::new(0, 0, 80, 5));
    /// ```
    #[must_use]
    pub fn compute(request: &BoxRequest, width: u16) -> Self {
        let padding = request.padding();
        let margin = request.margin();

        let available = width.saturating_sub(margin.horizontal());
        let panel_width = if request.fullwidth() {
            available
        } else {
            natural_width(request).min(available)
        }
        .max(BORDER);

        let content_height = u16::try_from(request.lines().count()).unwrap_or(u16::MAX);
        let panel_height = content_height
            .saturating_add(padding.vertical())
            .saturating_add(BORDER);

        let outer_width = panel_width.saturating_add(margin.horizontal());
        let canvas_width = width.max(outer_width);
        let canvas_height = panel_height.saturating_add(margin.vertical());

        let offset = request.box_alignment().offset(outer_width, canvas_width);
        let panel = Rect::new(
            offset.saturating_add(margin.left),
            margin.top,
            panel_width,
            panel_height,
        );

        Self {
            canvas: Rect::new(0, 0, canvas_width, canvas_height),
            panel,
        }
    }
}

/// Width of the panel when nothing constrains it.
fn natural_width(request: &BoxRequest) -> u16 {
    let content = request.lines().map(text_width).max().unwrap_or(0);
    let title = request.title().map_or(0, |(text, _)| decorated_width(text));
    let subtitle = request.subtitle().map_or(0, |(text, _)| decorated_width(text));

    content
        .saturating_add(request.padding().horizontal())
        .max(title)
        .max(subtitle)
        .saturating_add(BORDER)
}

/// Display width of `text` in terminal columns.
fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Width of a title with its surrounding spaces.
fn decorated_width(text: &str) -> u16 {
    text_width(text).saturating_add(2)
}

/// Formats a title the way it is drawn on the border.
#[must_use]
pub fn decorate_title(text: &str) -> String {
    format!(" {text} ")
}
