use std::borrow::Cow;

use parley::style::{FontStack, FontStyle, FontWeight, StyleProperty};

use crate::{
    foundation::core::Size,
    foundation::error::{RichTextError, RichTextResult},
    layout::measure::{DEFAULT_FONT_SIZE, TextMeasurer},
    style::model::TextStyle,
};

/// [`TextMeasurer`] that shapes runs with Parley against caller-provided font data.
///
/// The registered family is always appended to the requested `fontFamily` stack, so a style
/// naming an unavailable family still measures with real metrics instead of collapsing to zero.
pub struct ParleyMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
}

impl ParleyMeasurer {
    /// Register `font_bytes` (TTF/OTF) and use it as the fallback family.
    pub fn new(font_bytes: Vec<u8>) -> RichTextResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            RichTextError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| RichTextError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Name of the registered fallback family.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn font_stack(&self, style: &TextStyle) -> String {
        match style.font_family.as_deref().map(str::trim) {
            Some(requested) if !requested.is_empty() => {
                format!("{requested}, \"{}\"", self.family_name)
            }
            _ => format!("\"{}\"", self.family_name),
        }
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> RichTextResult<Size> {
        let size_px = style.font_size.unwrap_or(DEFAULT_FONT_SIZE) as f32;
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(RichTextError::validation(
                "text fontSize must be finite and > 0",
            ));
        }

        let stack = self.font_stack(style);
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(StyleProperty::FontStack(FontStack::Source(Cow::Owned(stack))));
        builder.push_default(StyleProperty::FontSize(size_px));
        if let Some(weight) = &style.font_weight {
            builder.push_default(StyleProperty::FontWeight(FontWeight::new(weight.value())));
        }
        match style.font_style.as_deref() {
            Some("italic") => builder.push_default(StyleProperty::FontStyle(FontStyle::Italic)),
            Some("oblique") => {
                builder.push_default(StyleProperty::FontStyle(FontStyle::Oblique(None)))
            }
            _ => {}
        }
        if let Some(spacing) = style.letter_spacing {
            builder.push_default(StyleProperty::LetterSpacing(spacing as f32));
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        Ok(Size::new(f64::from(layout.width()), f64::from(layout.height())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/parley_measure.rs"]
mod tests;
