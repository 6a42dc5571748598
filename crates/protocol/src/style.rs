//! Named border styles.
//!
//! The set of styles is deliberately small: variants that would render the
//! same outline as another entry are not offered. Lookup is
//! case-insensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoxenError;

/// A named border-glyph set used to draw the box outline.
///
/// # Examples
///
/// ```
/// use boxen_protocol::BoxStyle;
///
/// let style: BoxStyle = "Rounded".parse().unwrap();
/// assert_eq!(style, BoxStyle::Rounded);
/// assert_eq!(style.key(), "rounded");
///
/// assert!("fancy".parse::<BoxStyle>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxStyle {
    /// `+`, `-` and `|`.
    Ascii,
    /// ASCII outline, alternate table separators.
    Ascii2,
    /// ASCII outline with a double header separator.
    AsciiDoubleHead,
    /// Square single-line corners.
    Square,
    /// Square corners with a double header separator.
    SquareDoubleHead,
    /// Invisible outline.
    Minimal,
    /// Horizontal lines only.
    Horizontals,
    /// Rounded single-line corners.
    #[default]
    Rounded,
    /// Thick lines.
    Heavy,
    /// Double lines.
    Double,
}

impl BoxStyle {
    /// Returns all styles in their canonical order.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Ascii,
            Self::Ascii2,
            Self::AsciiDoubleHead,
            Self::Square,
            Self::SquareDoubleHead,
            Self::Minimal,
            Self::Horizontals,
            Self::Rounded,
            Self::Heavy,
            Self::Double,
        ]
    }

    /// Returns the lookup key for this style.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Ascii2 => "ascii2",
            Self::AsciiDoubleHead => "ascii_double_head",
            Self::Square => "square",
            Self::SquareDoubleHead => "square_double_head",
            Self::Minimal => "minimal",
            Self::Horizontals => "horizontals",
            Self::Rounded => "rounded",
            Self::Heavy => "heavy",
            Self::Double => "double",
        }
    }

    /// Returns the comma-separated list of valid keys, for error messages.
    #[must_use]
    pub fn valid_keys() -> String {
        Self::all().map(Self::key).join(", ")
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BoxStyle {
    type Err = BoxenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|style| style.key() == wanted)
            .ok_or_else(|| BoxenError::InvalidStyle {
                style: s.to_string(),
                valid: Self::valid_keys(),
            })
    }
}
