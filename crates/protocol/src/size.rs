//! Size specifications and their resolution into four-sided insets.
//!
//! Padding and margin share the same input shape: a single integer, a pair
//! `(vertical, horizontal)` or a quad `(top, right, bottom, left)`. This module
//! normalizes all of them into [`Insets`].
//!
//! A single integer `n` does not expand uniformly. Terminal cells are roughly
//! twice as tall as they are wide, so the horizontal sides get `n * 3`
//! columns while the vertical sides get `n` rows. Tuples are taken verbatim.
//!
//! # Examples
//!
//! ```
//! use boxen_protocol::{Insets, SizeRole, SizeSpec, resolve_size};
//!
//! let insets = resolve_size(&SizeSpec::Uniform(1), SizeRole::Padding).unwrap();
//! assert_eq!(insets, Insets::new(1, 3, 1, 3));
//!
//! let insets = resolve_size(&SizeSpec::from((2, 4)), SizeRole::Margin).unwrap();
//! assert_eq!(insets, Insets::new(2, 4, 2, 4));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BoxenError, Result};

/// Horizontal multiplier applied to a uniform size.
pub const HORIZONTAL_SCALE: u16 = 3;

const SIZE_EXPECTED: &str = "either int or tuple of ints";

/// Which part of the box a size spec describes.
///
/// Only used to label error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeRole {
    /// Space between the content and the border.
    Padding,
    /// Space between the border and the surrounding terminal.
    Margin,
}

impl SizeRole {
    /// Returns the lowercase label of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Margin => "margin",
        }
    }
}

impl fmt::Display for SizeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-supplied padding or margin.
///
/// Tuples of any length can be represented; only lengths 2 and 4 resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    /// A single value, expanded to `(n, 3n, n, 3n)`.
    Uniform(u16),
    /// An explicit tuple of 2 or 4 values.
    Tuple(Vec<u16>),
}

impl Default for SizeSpec {
    fn default() -> Self {
        Self::Uniform(0)
    }
}

impl From<u16> for SizeSpec {
    fn from(n: u16) -> Self {
        Self::Uniform(n)
    }
}

impl From<(u16, u16)> for SizeSpec {
    fn from((vertical, horizontal): (u16, u16)) -> Self {
        Self::Tuple(vec![vertical, horizontal])
    }
}

impl From<(u16, u16, u16, u16)> for SizeSpec {
    fn from((top, right, bottom, left): (u16, u16, u16, u16)) -> Self {
        Self::Tuple(vec![top, right, bottom, left])
    }
}

impl From<Vec<u16>> for SizeSpec {
    fn from(values: Vec<u16>) -> Self {
        Self::Tuple(values)
    }
}

impl SizeSpec {
    /// Decodes a size spec from an untyped JSON value.
    ///
    /// Accepts a non-negative integer or an array of non-negative integers.
    /// The array length is not checked here; that happens in
    /// [`resolve_size`].
    ///
    /// # Errors
    ///
    /// Returns [`BoxenError::InvalidType`] for any other value.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxen_protocol::{SizeRole, SizeSpec};
    /// use serde_json::json;
    ///
    /// let spec = SizeSpec::from_value(&json!([1, 2, 3]), SizeRole::Padding).unwrap();
    /// assert_eq!(spec, SizeSpec::Tuple(vec![1, 2, 3]));
    ///
    /// assert!(SizeSpec::from_value(&json!("big"), SizeRole::Padding).is_err());
    /// ```
    pub fn from_value(value: &Value, role: SizeRole) -> Result<Self> {
        let invalid = || BoxenError::invalid_type(role.as_str(), SIZE_EXPECTED);
        match value {
            Value::Number(_) => value_to_u16(value).map(Self::Uniform).ok_or_else(invalid),
            Value::Array(items) => items
                .iter()
                .map(|item| value_to_u16(item).ok_or_else(invalid))
                .collect::<Result<Vec<_>>>()
                .map(Self::Tuple),
            _ => Err(invalid()),
        }
    }

    /// Parses a size spec from command-line text, labelling errors with `role`.
    ///
    /// `"2"` is uniform, `"1,3"` and `"1,2,3,4"` are tuples. Whitespace around
    /// the values is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BoxenError::InvalidType`] if any element is not a
    /// non-negative integer.
    pub fn parse(text: &str, role: SizeRole) -> Result<Self> {
        let invalid = || BoxenError::invalid_type(role.as_str(), SIZE_EXPECTED);
        let parts = text
            .split(',')
            .map(|part| part.trim().parse::<u16>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;

        if parts.len() == 1 && !text.contains(',') {
            Ok(Self::Uniform(parts[0]))
        } else {
            Ok(Self::Tuple(parts))
        }
    }
}

impl FromStr for SizeSpec {
    type Err = BoxenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, SizeRole::Padding)
    }
}

fn value_to_u16(value: &Value) -> Option<u16> {
    value.as_u64().and_then(|n| u16::try_from(n).ok())
}

/// Resolved four-sided spacing, in `(top, right, bottom, left)` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    /// Rows above.
    pub top: u16,
    /// Columns to the right.
    pub right: u16,
    /// Rows below.
    pub bottom: u16,
    /// Columns to the left.
    pub left: u16,
}

impl Insets {
    /// Creates insets in CSS order: top, right, bottom, left.
    #[must_use]
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns the insets as a `(top, right, bottom, left)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (u16, u16, u16, u16) {
        (self.top, self.right, self.bottom, self.left)
    }

    /// Total horizontal space (`left + right`).
    #[must_use]
    pub const fn horizontal(self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical space (`top + bottom`).
    #[must_use]
    pub const fn vertical(self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<Insets> for (u16, u16, u16, u16) {
    fn from(insets: Insets) -> Self {
        insets.as_tuple()
    }
}

/// Resolves a size spec into four-sided insets.
///
/// - `Uniform(n)` becomes `(n, n * 3, n, n * 3)`, saturating at `u16::MAX`.
/// - `Tuple([a, b])` becomes `(a, b, a, b)`.
/// - `Tuple([a, b, c, d])` becomes `(a, b, c, d)`.
///
/// # Errors
///
/// Returns [`BoxenError::InvalidSize`] for tuples of any other length.
///
/// # Examples
///
/// ```
/// use boxen_protocol::{SizeRole, SizeSpec, resolve_size};
///
/// let err = resolve_size(&SizeSpec::Tuple(vec![1, 2, 3]), SizeRole::Margin).unwrap_err();
/// assert!(err.to_string().starts_with("margin tuples"));
/// ```
pub fn resolve_size(spec: &SizeSpec, role: SizeRole) -> Result<Insets> {
    match spec {
        SizeSpec::Uniform(n) => {
            let horizontal = n.saturating_mul(HORIZONTAL_SCALE);
            Ok(Insets::new(*n, horizontal, *n, horizontal))
        }
        SizeSpec::Tuple(values) => match values.as_slice() {
            &[vertical, horizontal] => Ok(Insets::new(vertical, horizontal, vertical, horizontal)),
            &[top, right, bottom, left] => Ok(Insets::new(top, right, bottom, left)),
            other => Err(BoxenError::InvalidSize {
                role: role.as_str(),
                len: other.len(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn uniform_expands_horizontally() {
        let insets = resolve_size(&SizeSpec::Uniform(2), SizeRole::Padding).unwrap();
        assert_eq!(insets.as_tuple(), (2, 6, 2, 6));
    }

    #[test]
    fn zero_is_empty() {
        let insets = resolve_size(&SizeSpec::default(), SizeRole::Padding).unwrap();
        assert_eq!(insets, Insets::default());
    }

    #[test]
    fn uniform_saturates() {
        let insets = resolve_size(&SizeSpec::Uniform(u16::MAX), SizeRole::Margin).unwrap();
        assert_eq!(insets.right, u16::MAX);
        assert_eq!(insets.top, u16::MAX);
    }

    #[test]
    fn pair_is_vertical_then_horizontal() {
        let insets = resolve_size(&SizeSpec::from((1, 5)), SizeRole::Padding).unwrap();
        assert_eq!(insets.as_tuple(), (1, 5, 1, 5));
    }

    #[test]
    fn quad_is_verbatim() {
        let insets = resolve_size(&SizeSpec::from((1, 2, 3, 4)), SizeRole::Padding).unwrap();
        assert_eq!(insets.as_tuple(), (1, 2, 3, 4));
    }

    #[test]
    fn bad_tuple_lengths_are_rejected() {
        for len in [0, 1, 3, 5] {
            let spec = SizeSpec::Tuple(vec![1; len]);
            let err = resolve_size(&spec, SizeRole::Padding).unwrap_err();
            assert_eq!(err, BoxenError::InvalidSize { role: "padding", len });
        }
    }

    #[test]
    fn error_names_the_role() {
        let spec = SizeSpec::Tuple(vec![1]);
        let err = resolve_size(&spec, SizeRole::Margin).unwrap_err();
        assert!(err.to_string().starts_with("margin"));
    }

    #[test]
    fn from_value_accepts_ints_and_arrays() {
        assert_eq!(
            SizeSpec::from_value(&json!(3), SizeRole::Padding).unwrap(),
            SizeSpec::Uniform(3)
        );
        assert_eq!(
            SizeSpec::from_value(&json!([1, 2]), SizeRole::Padding).unwrap(),
            SizeSpec::Tuple(vec![1, 2])
        );
    }

    #[test]
    fn from_value_rejects_other_kinds() {
        for value in [
            json!("1"),
            json!(1.5),
            json!(-1),
            json!(true),
            json!({"top": 1}),
            json!([1, "2"]),
            json!(100_000),
        ] {
            let err = SizeSpec::from_value(&value, SizeRole::Margin).unwrap_err();
            assert_eq!(
                err,
                BoxenError::InvalidType {
                    field: "margin".to_string(),
                    expected: SIZE_EXPECTED,
                },
                "value {value} should be rejected"
            );
        }
    }

    #[test]
    fn parse_command_line_forms() {
        assert_eq!(SizeSpec::parse("2", SizeRole::Padding).unwrap(), SizeSpec::Uniform(2));
        assert_eq!(
            SizeSpec::parse("1, 3", SizeRole::Padding).unwrap(),
            SizeSpec::Tuple(vec![1, 3])
        );
        assert_eq!(
            "1,2,3,4".parse::<SizeSpec>().unwrap(),
            SizeSpec::Tuple(vec![1, 2, 3, 4])
        );
        assert!(SizeSpec::parse("wide", SizeRole::Padding).is_err());
        assert!(SizeSpec::parse("1,,2", SizeRole::Padding).is_err());
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_value(SizeSpec::Uniform(1)).unwrap(), json!(1));
        assert_eq!(
            serde_json::to_value(SizeSpec::from((1, 2))).unwrap(),
            json!([1, 2])
        );
    }
}
