//! Capturing a rendered [`Buffer`] as terminal text.
//!
//! Each buffer row becomes one line terminated by `\n`. Trailing blank cells
//! are dropped. When styling is enabled, foreground color changes are
//! written as SGR sequences and every colored line ends with a reset, so
//! lines can be printed independently.

use std::fmt::{self, Write};

use crossterm::Command;
use crossterm::style::{self as ct, ResetColor, SetForegroundColor};
use ratatui::buffer::{Buffer, Cell};
use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

/// Captures `buf` as text, with ANSI colors when `styled` is set.
///
/// # Errors
///
/// Propagates formatter errors; writing into a `String` does not fail.
///
/// # Examples
///
/// ```
/// use boxen_render::capture::capture;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use ratatui::style::Style;
///
/// let mut buf = Buffer::empty(Rect::new(0, 0, 8, 2));
/// buf.set_string(0, 0, "Hello", Style::default());
///
/// assert_eq!(capture(&buf, false).unwrap(), "Hello\n\n");
/// ```
pub fn capture(buf: &Buffer, styled: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_buffer(&mut out, buf, styled)?;
    Ok(out)
}

/// Writes every row of `buf` into `out`.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_buffer(out: &mut impl Write, buf: &Buffer, styled: bool) -> fmt::Result {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let row: Vec<&Cell> = (area.left()..area.right())
            .filter_map(|x| buf.cell((x, y)))
            .collect();
        let end = row
            .iter()
            .rposition(|cell| cell.symbol() != " ")
            .map_or(0, |last| last + 1);

        let mut current = Color::Reset;
        let mut hidden = 0;
        for cell in &row[..end] {
            // Cells covered by a wide grapheme hold filler blanks.
            if hidden > 0 {
                hidden -= 1;
                continue;
            }
            if styled && cell.fg != current {
                SetForegroundColor(to_crossterm(cell.fg)).write_ansi(out)?;
                current = cell.fg;
            }
            out.write_str(cell.symbol())?;
            hidden = cell.symbol().width().saturating_sub(1);
        }
        if styled && current != Color::Reset {
            ResetColor.write_ansi(out)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Maps a ratatui color onto the crossterm palette.
///
/// ratatui names the dim ANSI colors plainly (`Red`) and the bright ones
/// `Light*`; crossterm names them `Dark*` and plainly.
#[must_use]
pub fn to_crossterm(color: Color) -> ct::Color {
    match color {
        Color::Reset => ct::Color::Reset,
        Color::Black => ct::Color::Black,
        Color::Red => ct::Color::DarkRed,
        Color::Green => ct::Color::DarkGreen,
        Color::Yellow => ct::Color::DarkYellow,
        Color::Blue => ct::Color::DarkBlue,
        Color::Magenta => ct::Color::DarkMagenta,
        Color::Cyan => ct::Color::DarkCyan,
        Color::Gray => ct::Color::Grey,
        Color::DarkGray => ct::Color::DarkGrey,
        Color::LightRed => ct::Color::Red,
        Color::LightGreen => ct::Color::Green,
        Color::LightYellow => ct::Color::Yellow,
        Color::LightBlue => ct::Color::Blue,
        Color::LightMagenta => ct::Color::Magenta,
        Color::LightCyan => ct::Color::Cyan,
        Color::White => ct::Color::White,
        Color::Rgb(r, g, b) => ct::Color::Rgb { r, g, b },
        Color::Indexed(i) => ct::Color::AnsiValue(i),
    }
}
