//! User-facing box options and their validation.
//!
//! [`BoxOptions`] is the unvalidated parameter set a caller fills in, with
//! the same defaults as the command line. It can be built in code, decoded
//! from an untyped JSON map with [`BoxOptions::from_value`], or deserialized
//! from a config file. [`BoxOptions::validate`] checks every enumerated
//! field; [`BoxRequest::new`](crate::BoxRequest::new) runs it before
//! resolving anything.
//!
//! # Examples
//!
//! ```
//! use boxen_protocol::{BoxOptions, SizeSpec};
//!
//! let options = BoxOptions {
//!     style: "double".to_string(),
//!     padding: SizeSpec::Uniform(1),
//!     title: Some("Notice".to_string()),
//!     ..Default::default()
//! };
//! assert!(options.validate().is_ok());
//!
//! let options = BoxOptions {
//!     text_alignment: "up".to_string(),
//!     ..Default::default()
//! };
//! assert!(options.validate().is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::alignment::Alignment;
use crate::error::{BoxenError, Result};
use crate::size::{SizeRole, SizeSpec};
use crate::style::BoxStyle;

/// Default border color token.
pub const DEFAULT_COLOR: &str = "white";

/// Default border style key.
pub const DEFAULT_STYLE: &str = "rounded";

/// Option names accepted by [`BoxOptions::from_value`].
pub const OPTION_NAMES: &[&str] = &[
    "color",
    "style",
    "padding",
    "margin",
    "text_alignment",
    "box_alignment",
    "title",
    "title_alignment",
    "subtitle",
    "subtitle_alignment",
    "fullwidth",
];

/// Older option names, mapped to their current equivalents.
const OPTION_ALIASES: &[(&str, &str)] = &[("align", "text_alignment"), ("box_align", "box_alignment")];

/// The configurable parameters of a box, before validation.
///
/// Enumerated fields are kept as text so that values from configuration
/// files and the command line can be validated with precise errors. An
/// empty enumerated field means "use the default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct BoxOptions {
    /// Border color token (a name like `"red"`, `"#ff8800"` or an ANSI index).
    pub color: String,
    /// Border style key, case-insensitive.
    pub style: String,
    /// Space between the content and the border.
    pub padding: SizeSpec,
    /// Space between the border and the surrounding terminal.
    pub margin: SizeSpec,
    /// Alignment of the content inside the box.
    pub text_alignment: String,
    /// Alignment of the box inside the terminal.
    pub box_alignment: String,
    /// Title drawn on the top border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Alignment of the title.
    pub title_alignment: String,
    /// Subtitle drawn on the bottom border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Alignment of the subtitle.
    pub subtitle_alignment: String,
    /// Expand the box to the full available width.
    pub fullwidth: bool,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            style: DEFAULT_STYLE.to_string(),
            padding: SizeSpec::default(),
            margin: SizeSpec::default(),
            text_alignment: Alignment::Center.as_str().to_string(),
            box_alignment: Alignment::Left.as_str().to_string(),
            title: None,
            title_alignment: Alignment::Left.as_str().to_string(),
            subtitle: None,
            subtitle_alignment: Alignment::Left.as_str().to_string(),
            fullwidth: false,
        }
    }
}

impl BoxOptions {
    /// Creates options with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the border style key.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<SizeSpec>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: impl Into<SizeSpec>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Decodes and validates options from an untyped JSON object.
    ///
    /// Missing keys and `null` values keep their defaults. The legacy names
    /// `align` and `box_align` are accepted for `text_alignment` and
    /// `box_alignment`. Fields are checked in order: `color`, `title`,
    /// `subtitle`, `style`, the four alignments, `fullwidth`, then
    /// `padding` and `margin`. The style and each alignment are validated
    /// as soon as they are decoded, so the first failing field in that
    /// order decides the error.
    ///
    /// # Errors
    ///
    /// - [`BoxenError::UnknownOption`] for keys that are not options.
    /// - [`BoxenError::InvalidType`] for values of the wrong kind.
    /// - [`BoxenError::InvalidStyle`] or [`BoxenError::InvalidAlignment`]
    ///   for unknown names.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxen_protocol::{BoxOptions, BoxenError};
    /// use serde_json::json;
    ///
    /// let options = BoxOptions::from_value(&json!({ "style": "heavy", "padding": [1, 2] })).unwrap();
    /// assert_eq!(options.style, "heavy");
    ///
    /// let err = BoxOptions::from_value(&json!({ "fullwidth": "yes" })).unwrap_err();
    /// assert!(matches!(err, BoxenError::InvalidType { .. }));
    ///
    /// let err = BoxOptions::from_value(&json!({ "style": "wavy", "fullwidth": "yes" })).unwrap_err();
    /// assert!(matches!(err, BoxenError::InvalidStyle { .. }));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::decode(value, true)
    }

    /// Decodes `value`, validating names along the way when `check_values`
    /// is set.
    fn decode(value: &Value, check_values: bool) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(BoxenError::invalid_type("box options", "an object"));
        };

        if let Some(unknown) = map.keys().find(|key| !is_known_option(key)) {
            return Err(BoxenError::UnknownOption(unknown.clone()));
        }

        let mut options = Self::default();
        if let Some(color) = string_field(map, "color")? {
            options.color = color;
        }
        options.title = string_field(map, "title")?;
        options.subtitle = string_field(map, "subtitle")?;
        if let Some(style) = string_field(map, "style")? {
            options.style = style;
        }
        if check_values {
            options.box_style()?;
        }
        if let Some(alignment) = aliased_string_field(map, "text_alignment")? {
            options.text_alignment = alignment;
        }
        if check_values {
            options.text_align()?;
        }
        if let Some(alignment) = aliased_string_field(map, "box_alignment")? {
            options.box_alignment = alignment;
        }
        if check_values {
            options.box_align()?;
        }
        if let Some(alignment) = string_field(map, "title_alignment")? {
            options.title_alignment = alignment;
        }
        if check_values {
            options.title_align()?;
        }
        if let Some(alignment) = string_field(map, "subtitle_alignment")? {
            options.subtitle_alignment = alignment;
        }
        if check_values {
            options.subtitle_align()?;
        }
        match present(map, "fullwidth") {
            None => {}
            Some(Value::Bool(fullwidth)) => options.fullwidth = *fullwidth,
            Some(_) => {
                return Err(BoxenError::invalid_type(
                    "fullwidth",
                    "either true or false",
                ));
            }
        }
        if let Some(padding) = present(map, "padding") {
            options.padding = SizeSpec::from_value(padding, SizeRole::Padding)?;
        }
        if let Some(margin) = present(map, "margin") {
            options.margin = SizeSpec::from_value(margin, SizeRole::Margin)?;
        }

        Ok(options)
    }

    /// Validates every enumerated field.
    ///
    /// Checks run in order (`style`, text, box, title, subtitle alignment)
    /// and the first failure is returned. Each field is rejected only when
    /// it is non-empty and not a known value.
    ///
    /// # Errors
    ///
    /// Returns [`BoxenError::InvalidStyle`] or
    /// [`BoxenError::InvalidAlignment`].
    pub fn validate(&self) -> Result<()> {
        self.box_style()?;
        self.text_align()?;
        self.box_align()?;
        self.title_align()?;
        self.subtitle_align()?;
        Ok(())
    }

    /// Resolves the border style, falling back to the default when empty.
    pub fn box_style(&self) -> Result<BoxStyle> {
        if self.style.is_empty() {
            return Ok(BoxStyle::default());
        }
        self.style.parse()
    }

    /// Resolves the content alignment.
    pub fn text_align(&self) -> Result<Alignment> {
        parse_alignment(&self.text_alignment, "text alignment", Alignment::Center)
    }

    /// Resolves the box alignment.
    pub fn box_align(&self) -> Result<Alignment> {
        parse_alignment(&self.box_alignment, "box alignment", Alignment::Left)
    }

    /// Resolves the title alignment.
    pub fn title_align(&self) -> Result<Alignment> {
        parse_alignment(&self.title_alignment, "title alignment", Alignment::Left)
    }

    /// Resolves the subtitle alignment.
    pub fn subtitle_align(&self) -> Result<Alignment> {
        parse_alignment(
            &self.subtitle_alignment,
            "subtitle alignment",
            Alignment::Left,
        )
    }

    /// Returns the color token, falling back to the default when empty.
    #[must_use]
    pub fn color_token(&self) -> &str {
        if self.color.is_empty() {
            DEFAULT_COLOR
        } else {
            &self.color
        }
    }
}

/// Checks kinds only. Names are left to [`BoxOptions::validate`] so that
/// layered sources can still override them before validation.
impl TryFrom<Value> for BoxOptions {
    type Error = BoxenError;

    fn try_from(value: Value) -> Result<Self> {
        Self::decode(&value, false)
    }
}

fn parse_alignment(value: &str, field: &'static str, default: Alignment) -> Result<Alignment> {
    if value.is_empty() {
        return Ok(default);
    }
    Alignment::parse_field(value, field)
}

fn is_known_option(key: &str) -> bool {
    OPTION_NAMES.contains(&key) || OPTION_ALIASES.iter().any(|(alias, _)| *alias == key)
}

/// Returns the value for `key` unless it is absent or `null`.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn string_field(map: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(BoxenError::invalid_type(key, "a string")),
    }
}

/// Like [`string_field`], also consulting the legacy alias of `key`.
fn aliased_string_field(map: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    if let Some(value) = string_field(map, key)? {
        return Ok(Some(value));
    }
    match OPTION_ALIASES.iter().find(|(_, target)| *target == key) {
        Some((alias, _)) => string_field(map, alias),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(BoxOptions::default().validate().is_ok());
    }

    #[test]
    fn defaults_match_documented_values() {
        let options = BoxOptions::default();
        assert_eq!(options.color, "white");
        assert_eq!(options.style, "rounded");
        assert_eq!(options.padding, SizeSpec::Uniform(0));
        assert_eq!(options.margin, SizeSpec::Uniform(0));
        assert_eq!(options.text_alignment, "center");
        assert_eq!(options.box_alignment, "left");
        assert_eq!(options.title, None);
        assert_eq!(options.title_alignment, "left");
        assert_eq!(options.subtitle, None);
        assert_eq!(options.subtitle_alignment, "left");
        assert!(!options.fullwidth);
    }

    #[test]
    fn unknown_style_is_rejected() {
        let options = BoxOptions::new().with_style("not_a_style");
        let err = options.validate().unwrap_err();
        assert!(matches!(err, BoxenError::InvalidStyle { .. }));
        assert!(err.to_string().contains("ascii_double_head"));
    }

    #[test]
    fn style_is_case_insensitive() {
        let options = BoxOptions::new().with_style("DOUBLE");
        assert_eq!(options.box_style().unwrap(), BoxStyle::Double);
    }

    #[test]
    fn unknown_text_alignment_is_rejected() {
        let options = BoxOptions {
            text_alignment: "up".to_string(),
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert_eq!(
            err,
            BoxenError::InvalidAlignment {
                field: "text alignment",
                value: "up".to_string(),
                valid: "left, center, right".to_string(),
            }
        );
    }

    #[test]
    fn title_and_subtitle_alignment_accept_every_valid_value() {
        for alignment in Alignment::all() {
            let options = BoxOptions {
                title_alignment: alignment.to_string(),
                subtitle_alignment: alignment.to_string(),
                ..Default::default()
            };
            assert!(options.validate().is_ok(), "{alignment} should be accepted");
        }
    }

    #[test]
    fn subtitle_alignment_error_names_field() {
        let options = BoxOptions {
            subtitle_alignment: "middle".to_string(),
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().starts_with("subtitle alignment"));
    }

    #[test]
    fn first_failing_check_wins() {
        let options = BoxOptions {
            style: "bogus".to_string(),
            box_alignment: "nowhere".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(BoxenError::InvalidStyle { .. })
        ));
    }

    #[test]
    fn empty_fields_fall_back_to_defaults() {
        let options = BoxOptions {
            color: String::new(),
            style: String::new(),
            text_alignment: String::new(),
            title_alignment: String::new(),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
        assert_eq!(options.box_style().unwrap(), BoxStyle::Rounded);
        assert_eq!(options.text_align().unwrap(), Alignment::Center);
        assert_eq!(options.color_token(), "white");
    }

    #[test]
    fn from_value_reads_every_field() {
        let options = BoxOptions::from_value(&json!({
            "color": "red",
            "style": "ascii",
            "padding": 2,
            "margin": [1, 2, 3, 4],
            "text_alignment": "left",
            "box_alignment": "right",
            "title": "T",
            "title_alignment": "center",
            "subtitle": "S",
            "subtitle_alignment": "right",
            "fullwidth": true,
        }))
        .unwrap();

        assert_eq!(options.color, "red");
        assert_eq!(options.style, "ascii");
        assert_eq!(options.padding, SizeSpec::Uniform(2));
        assert_eq!(options.margin, SizeSpec::Tuple(vec![1, 2, 3, 4]));
        assert_eq!(options.text_alignment, "left");
        assert_eq!(options.box_alignment, "right");
        assert_eq!(options.title.as_deref(), Some("T"));
        assert_eq!(options.title_alignment, "center");
        assert_eq!(options.subtitle.as_deref(), Some("S"));
        assert_eq!(options.subtitle_alignment, "right");
        assert!(options.fullwidth);
    }

    #[test]
    fn from_value_treats_null_as_missing() {
        let options = BoxOptions::from_value(&json!({ "color": null, "title": null })).unwrap();
        assert_eq!(options, BoxOptions::default());
    }

    #[test]
    fn from_value_accepts_legacy_names() {
        let options =
            BoxOptions::from_value(&json!({ "align": "right", "box_align": "center" })).unwrap();
        assert_eq!(options.text_alignment, "right");
        assert_eq!(options.box_alignment, "center");

        let options =
            BoxOptions::from_value(&json!({ "align": "right", "text_alignment": "left" })).unwrap();
        assert_eq!(options.text_alignment, "left");
    }

    #[test]
    fn from_value_type_errors() {
        let cases = [
            (json!({ "color": 7 }), "color must be a string"),
            (json!({ "title": ["a"] }), "title must be a string"),
            (json!({ "subtitle": false }), "subtitle must be a string"),
            (json!({ "style": 1 }), "style must be a string"),
            (json!({ "title_alignment": 0 }), "title_alignment must be a string"),
            (json!({ "fullwidth": "yes" }), "fullwidth must be either true or false"),
            (
                json!({ "padding": "1" }),
                "padding must be either int or tuple of ints",
            ),
        ];
        for (value, message) in cases {
            let err = BoxOptions::from_value(&value).unwrap_err();
            assert!(matches!(err, BoxenError::InvalidType { .. }), "{value}");
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn from_value_type_checks_follow_field_order() {
        let err = BoxOptions::from_value(&json!({ "fullwidth": 1, "color": 1 })).unwrap_err();
        assert_eq!(err.to_string(), "color must be a string");
    }

    #[test]
    fn from_value_checks_names_before_later_kinds() {
        let err = BoxOptions::from_value(&json!({ "style": "bogus", "fullwidth": "yes" }))
            .unwrap_err();
        assert!(matches!(err, BoxenError::InvalidStyle { ref style, .. } if style == "bogus"));

        let err = BoxOptions::from_value(&json!({ "text_alignment": "up", "padding": "x" }))
            .unwrap_err();
        assert!(matches!(
            err,
            BoxenError::InvalidAlignment { field: "text alignment", .. }
        ));
    }

    #[test]
    fn from_value_checks_earlier_kinds_before_names() {
        let err = BoxOptions::from_value(&json!({ "style": "bogus", "color": 3 })).unwrap_err();
        assert_eq!(err.to_string(), "color must be a string");

        let err = BoxOptions::from_value(&json!({ "box_align": "up", "title_alignment": 1 }))
            .unwrap_err();
        assert!(matches!(err, BoxenError::InvalidAlignment { field: "box alignment", .. }));
    }

    #[test]
    fn deserializing_defers_name_checks() {
        let options: BoxOptions = serde_json::from_value(json!({ "style": "wavy" })).unwrap();
        assert!(matches!(
            options.validate(),
            Err(BoxenError::InvalidStyle { .. })
        ));
    }

    #[test]
    fn from_value_rejects_unknown_keys() {
        let err = BoxOptions::from_value(&json!({ "colour": "red" })).unwrap_err();
        assert_eq!(err, BoxenError::UnknownOption("colour".to_string()));
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(BoxOptions::from_value(&json!("rounded")).is_err());
    }

    #[test]
    fn deserializing_checks_kinds() {
        let options: BoxOptions =
            serde_json::from_value(json!({ "style": "heavy", "margin": [1, 1] })).unwrap();
        assert_eq!(options.style, "heavy");
        assert_eq!(options.margin, SizeSpec::Tuple(vec![1, 1]));

        let err = serde_json::from_value::<BoxOptions>(json!({ "fullwidth": "yes" })).unwrap_err();
        assert!(err.to_string().contains("fullwidth must be either true or false"));
    }

    #[test]
    fn serialize_then_deserialize_preserves_options() {
        let options = BoxOptions::new()
            .with_title("Title")
            .with_padding((1, 2))
            .with_style("square");
        let json = serde_json::to_value(&options).unwrap();
        let parsed: BoxOptions = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, options);
    }
}
