//! Test utilities for the render crate.

use ratatui::buffer::Buffer;

use crate::capture::capture;

/// Converts a buffer to plain text, one line per row with trailing blanks
/// trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    capture(buf, false).expect("writing to a String cannot fail")
}
