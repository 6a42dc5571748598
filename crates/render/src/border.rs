//! Border glyphs for each [`BoxStyle`].
//!
//! A box only draws its outline, so styles that differ solely in their
//! inner separators (the `*_double_head` variants, `ascii2`) share the
//! outline of their base style.

use boxen_protocol::BoxStyle;
use ratatui::symbols::border;
use ratatui::widgets::Block;

/// Sets the outline glyphs for `style` on `block`.
///
/// # Examples
///
/// ```
/// use boxen_protocol::BoxStyle;
/// use boxen_render::border::apply_border;
/// use ratatui::widgets::Block;
///
/// let block = apply_border(Block::bordered(), BoxStyle::Heavy);
/// ```
#[must_use]
pub fn apply_border(block: Block<'_>, style: BoxStyle) -> Block<'_> {
    match style {
        BoxStyle::Ascii | BoxStyle::Ascii2 | BoxStyle::AsciiDoubleHead => {
            block.border_set(border::Set {
                top_left: "+",
                top_right: "+",
                bottom_left: "+",
                bottom_right: "+",
                vertical_left: "|",
                vertical_right: "|",
                horizontal_top: "-",
                horizontal_bottom: "-",
            })
        }
        BoxStyle::Square | BoxStyle::SquareDoubleHead => block.border_set(border::PLAIN),
        // Blank glyphs still reserve the border cells.
        BoxStyle::Minimal => block.border_set(border::Set {
            top_left: " ",
            top_right: " ",
            bottom_left: " ",
            bottom_right: " ",
            vertical_left: " ",
            vertical_right: " ",
            horizontal_top: " ",
            horizontal_bottom: " ",
        }),
        BoxStyle::Horizontals => block.border_set(border::Set {
            top_left: " ",
            top_right: " ",
            bottom_left: " ",
            bottom_right: " ",
            vertical_left: " ",
            vertical_right: " ",
            horizontal_top: "─",
            horizontal_bottom: "─",
        }),
        BoxStyle::Rounded => block.border_set(border::ROUNDED),
        BoxStyle::Heavy => block.border_set(border::THICK),
        BoxStyle::Double => block.border_set(border::DOUBLE),
    }
}
