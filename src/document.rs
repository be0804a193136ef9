use crate::{
    foundation::error::RichTextResult,
    layout::engine::{LayoutOptions, PositionedRun, calculate_layout},
    layout::measure::TextMeasurer,
    markup::format::remove_tags,
    markup::tokenize::{ParseReport, Token, parse_tags_report},
    style::model::{DEFAULT_STYLE_KEY, StyleSet, TextStyle},
};

/// Tagged text plus the style set used to lay it out.
///
/// Nothing is cached: every query re-runs the parse (and layout) from scratch, so the result
/// always reflects the current text and styles.
#[derive(Clone, Debug, PartialEq)]
pub struct RichText {
    text: String,
    tag_styles: StyleSet,
}

impl Default for RichText {
    fn default() -> Self {
        Self::new(String::new(), StyleSet::new())
    }
}

impl RichText {
    /// Create a document; the `default` entry of `tag_styles` is layered over the built-in
    /// default style.
    pub fn new(text: impl Into<String>, mut tag_styles: StyleSet) -> Self {
        let default = tag_styles.remove(DEFAULT_STYLE_KEY).unwrap_or_default();
        tag_styles.set_default(default);
        Self {
            text: text.into(),
            tag_styles,
        }
    }

    /// Raw tagged text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the raw tagged text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Text with every recognized tag removed.
    pub fn untagged_text(&self) -> RichTextResult<String> {
        remove_tags(&self.text, &self.tag_styles)
    }

    /// Current style set.
    pub fn tag_styles(&self) -> &StyleSet {
        &self.tag_styles
    }

    /// Replace the whole style set.
    pub fn set_tag_styles(&mut self, tag_styles: StyleSet) {
        *self = Self::new(std::mem::take(&mut self.text), tag_styles);
    }

    /// Register or replace the style for `tag`.
    pub fn set_style_for_tag(&mut self, tag: impl Into<String>, style: TextStyle) {
        let tag = tag.into();
        if tag == DEFAULT_STYLE_KEY {
            self.tag_styles.set_default(style);
        } else {
            self.tag_styles.insert(tag, style);
        }
    }

    /// Remove the style for `tag`; returns whether one was registered. Text inside that tag
    /// is treated as literal afterwards.
    pub fn remove_styles_for_tag(&mut self, tag: &str) -> bool {
        self.tag_styles.remove(tag).is_some()
    }

    /// Default style entry.
    pub fn default_style(&self) -> TextStyle {
        self.tag_styles.default_style().cloned().unwrap_or_default()
    }

    /// Replace the default style (layered over the built-in default).
    pub fn set_default_style(&mut self, style: TextStyle) {
        self.tag_styles.set_default(style);
    }

    /// Layout options implied by the default style.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::from_default_style(&self.default_style())
    }

    /// Parse the text into tokens.
    pub fn tokens(&self) -> RichTextResult<Vec<Token>> {
        Ok(self.parse()?.tokens)
    }

    /// Parse the text, also reporting tags left open.
    pub fn parse(&self) -> RichTextResult<ParseReport> {
        parse_tags_report(&self.text, &self.tag_styles)
    }

    /// Run a full parse + layout pass with `measurer`.
    pub fn layout<M: TextMeasurer>(&self, measurer: &mut M) -> RichTextResult<Vec<PositionedRun>> {
        let tokens = self.tokens()?;
        calculate_layout(&tokens, &self.tag_styles, measurer, &self.layout_options())
    }
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod tests;
