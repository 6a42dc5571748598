//! Terminal width detection.
//!
//! The render width comes from, in order: the `COLUMNS` environment
//! variable, the size reported by the terminal, and finally
//! [`DEFAULT_WIDTH`] when output is not attached to a terminal.

use tracing::debug;

/// Width used when nothing else is known.
pub const DEFAULT_WIDTH: u16 = 80;

/// Detects the width of the terminal attached to the process.
///
/// # Examples
///
/// ```no_run
/// use boxen_render::terminal;
///
/// let width = terminal::detect_width();
/// assert!(width > 0);
/// ```
#[must_use]
pub fn detect_width() -> u16 {
    if let Some(columns) = columns_from(std::env::var("COLUMNS").ok().as_deref()) {
        debug!(columns, "using width from COLUMNS");
        return columns;
    }

    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => {
            debug!(columns, "using terminal width");
            columns
        }
        Ok(_) => DEFAULT_WIDTH,
        Err(err) => {
            debug!(%err, default = DEFAULT_WIDTH, "terminal size unavailable");
            DEFAULT_WIDTH
        }
    }
}

/// Parses a `COLUMNS` value, ignoring anything that is not a positive width.
fn columns_from(value: Option<&str>) -> Option<u16> {
    value
        .and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|columns| *columns > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_parsing() {
        assert_eq!(columns_from(Some("120")), Some(120));
        assert_eq!(columns_from(Some(" 60\n")), Some(60));
        assert_eq!(columns_from(Some("0")), None);
        assert_eq!(columns_from(Some("wide")), None);
        assert_eq!(columns_from(None), None);
    }
}
