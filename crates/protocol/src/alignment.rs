//! Horizontal alignment for text, boxes, titles and subtitles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoxenError;

/// Horizontal placement of one element within another.
///
/// Matching is exact: only the lowercase names are accepted.
///
/// # Examples
///
/// ```
/// use boxen_protocol::Alignment;
///
/// assert_eq!("center".parse::<Alignment>().unwrap(), Alignment::Center);
/// assert!("up".parse::<Alignment>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush against the left edge.
    #[default]
    Left,
    /// Centered, extra space going to the right.
    Center,
    /// Flush against the right edge.
    Right,
}

impl Alignment {
    /// Returns all alignments.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Left, Self::Center, Self::Right]
    }

    /// Returns the name of this alignment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Returns the comma-separated list of valid names, for error messages.
    #[must_use]
    pub fn valid_names() -> String {
        Self::all().map(Self::as_str).join(", ")
    }

    /// Parses an alignment, attributing failures to `field`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxenError::InvalidAlignment`] for unknown names.
    pub fn parse_field(value: &str, field: &'static str) -> Result<Self, BoxenError> {
        Self::all()
            .into_iter()
            .find(|alignment| alignment.as_str() == value)
            .ok_or_else(|| BoxenError::InvalidAlignment {
                field,
                value: value.to_string(),
                valid: Self::valid_names(),
            })
    }

    /// Offset of an element of width `inner` placed inside `outer` columns.
    ///
    /// Returns 0 when the element does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxen_protocol::Alignment;
    ///
    /// assert_eq!(Alignment::Left.offset(4, 10), 0);
    /// assert_eq!(Alignment::Center.offset(4, 10), 3);
    /// assert_eq!(Alignment::Right.offset(4, 10), 6);
    /// ```
    #[must_use]
    pub const fn offset(self, inner: u16, outer: u16) -> u16 {
        let free = outer.saturating_sub(inner);
        match self {
            Self::Left => 0,
            Self::Center => free / 2,
            Self::Right => free,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = BoxenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field(s, "alignment")
    }
}
