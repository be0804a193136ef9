use std::collections::BTreeMap;

use crate::{
    foundation::error::{RichTextError, RichTextResult},
    markup::attributes::AttrValue,
};

/// Reserved style-set key holding the base style for all text.
pub const DEFAULT_STYLE_KEY: &str = "default";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal alignment of lines.
pub enum Align {
    /// Lines start at x = 0.
    #[default]
    Left,
    /// Lines end at the line width.
    Right,
    /// Lines are centered in the line width.
    Center,
    /// Laid out like [`Align::Left`]; inter-word stretching is not performed.
    Justify,
}

impl std::str::FromStr for Align {
    type Err = RichTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            "justify" => Ok(Self::Justify),
            other => Err(RichTextError::validation(format!(
                "unknown align '{other}' (expected left|right|center|justify)"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Named vertical alignments.
pub enum VAlignKind {
    /// Top of the line box.
    Top,
    /// Middle of the line box.
    Middle,
    /// Bottom of the line box.
    Bottom,
    /// Shared text baseline.
    Baseline,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Vertical alignment of a run within its line.
pub enum VAlign {
    /// One of the named positions.
    Named(VAlignKind),
    /// Pixel offset from the top of the line.
    Offset(f64),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Fill or stroke color.
pub enum Color {
    /// Packed `0xRRGGBB`.
    Rgb(u32),
    /// Any CSS color string (`"red"`, `"#ff0000"`).
    Css(String),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// CSS-style font weight.
pub enum FontWeight {
    /// Numeric weight (100..=950).
    Numeric(f32),
    /// Keyword such as `normal` or `bold`.
    Keyword(String),
}

impl FontWeight {
    /// Numeric weight; unknown keywords map to 400.
    pub fn value(&self) -> f32 {
        match self {
            Self::Numeric(w) => *w,
            Self::Keyword(k) => match k.as_str() {
                "bold" => 700.0,
                "bolder" => 800.0,
                "lighter" => 300.0,
                _ => k.parse::<f32>().unwrap_or(400.0),
            },
        }
    }
}

/// Partial style record attached to a tag name.
///
/// Every field is optional; unset fields fall through to earlier records when styles are
/// combined (see [`TextStyle::merge`]). Keys that are not modeled here are kept in
/// [`TextStyle::extra`] so inline attributes are never dropped.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Line alignment; only read from the default style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Vertical alignment within the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valign: Option<VAlign>,
    /// Whether lines wrap at [`TextStyle::word_wrap_width`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<bool>,
    /// Wrap width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_wrap_width: Option<f64>,
    /// Whether the renderer may break inside words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_words: Option<bool>,
    /// Text fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    /// CSS font-family list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// `normal`, `italic` or `oblique`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    /// `normal` or `small-caps`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_variant: Option<String>,
    /// Font weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Extra space between lines in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading: Option<f64>,
    /// Extra space between letters in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    /// Line height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Outline color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    /// Outline thickness in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_thickness: Option<f64>,
    /// Whether a drop shadow is painted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_shadow: Option<bool>,
    /// Any other keys, passed through to the renderer untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, AttrValue>,
}

impl TextStyle {
    /// Built-in base style: left aligned, wrapping at 500px.
    pub fn builtin_default() -> Self {
        Self {
            align: Some(Align::Left),
            word_wrap: Some(true),
            word_wrap_width: Some(500.0),
            ..Self::default()
        }
    }
}

/// Mapping from tag name to style, including the reserved [`DEFAULT_STYLE_KEY`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StyleSet {
    styles: BTreeMap<String, TextStyle>,
}

impl StyleSet {
    /// Empty set without a default entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whose default entry is `default` layered over [`TextStyle::builtin_default`].
    pub fn with_default(default: TextStyle) -> Self {
        let mut set = Self::new();
        set.set_default(default);
        set
    }

    /// Parse a JSON object keyed by tag name; the default entry is layered over the built-in.
    pub fn from_json(json: &str) -> RichTextResult<Self> {
        let mut set: Self = serde_json::from_str(json)?;
        let default = set.styles.remove(DEFAULT_STYLE_KEY).unwrap_or_default();
        set.set_default(default);
        Ok(set)
    }

    /// Serialize as a pretty JSON object.
    pub fn to_json(&self) -> RichTextResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace the default entry with `default` layered over the built-in default.
    pub fn set_default(&mut self, default: TextStyle) {
        let merged = TextStyle::builtin_default().merge(&default);
        self.styles.insert(DEFAULT_STYLE_KEY.to_string(), merged);
    }

    /// The default entry, if present.
    pub fn default_style(&self) -> Option<&TextStyle> {
        self.styles.get(DEFAULT_STYLE_KEY)
    }

    /// Insert or replace the style for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, style: TextStyle) -> Option<TextStyle> {
        self.styles.insert(name.into(), style)
    }

    /// Remove the style for `name`.
    pub fn remove(&mut self, name: &str) -> Option<TextStyle> {
        self.styles.remove(name)
    }

    /// Style registered for `name`.
    pub fn get(&self, name: &str) -> Option<&TextStyle> {
        self.styles.get(name)
    }

    /// Whether `name` has a registered style.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered tag names, excluding the default entry.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.styles
            .keys()
            .map(String::as_str)
            .filter(|k| *k != DEFAULT_STYLE_KEY)
    }

    /// Number of entries, including the default.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the set has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/model.rs"]
mod tests;
