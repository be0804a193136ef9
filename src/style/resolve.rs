use crate::{
    foundation::error::{RichTextError, RichTextResult},
    markup::attributes::{AttrValue, AttributeMap},
    markup::tokenize::TagEntry,
    style::model::{Color, FontWeight, StyleSet, TextStyle, VAlign, VAlignKind},
};

impl TextStyle {
    /// Field-wise overlay: values set in `over` replace values in `self`.
    pub fn merge(&self, over: &TextStyle) -> TextStyle {
        let mut extra = self.extra.clone();
        extra.extend(over.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        TextStyle {
            align: over.align.or(self.align),
            valign: over.valign.or(self.valign),
            word_wrap: over.word_wrap.or(self.word_wrap),
            word_wrap_width: over.word_wrap_width.or(self.word_wrap_width),
            break_words: over.break_words.or(self.break_words),
            fill: over.fill.clone().or_else(|| self.fill.clone()),
            font_family: over.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: over.font_size.or(self.font_size),
            font_style: over.font_style.clone().or_else(|| self.font_style.clone()),
            font_variant: over.font_variant.clone().or_else(|| self.font_variant.clone()),
            font_weight: over.font_weight.clone().or_else(|| self.font_weight.clone()),
            leading: over.leading.or(self.leading),
            letter_spacing: over.letter_spacing.or(self.letter_spacing),
            line_height: over.line_height.or(self.line_height),
            stroke: over.stroke.clone().or_else(|| self.stroke.clone()),
            stroke_thickness: over.stroke_thickness.or(self.stroke_thickness),
            drop_shadow: over.drop_shadow.or(self.drop_shadow),
            extra,
        }
    }

    /// Copy of this style with inline tag attributes applied on top.
    ///
    /// Attribute names use the same camelCase keys as serialized styles. Unknown names are
    /// stored in [`TextStyle::extra`].
    pub fn with_attributes(&self, attributes: &AttributeMap) -> RichTextResult<TextStyle> {
        let mut out = self.clone();
        for (name, value) in attributes {
            out.apply_attribute(name, value)?;
        }
        Ok(out)
    }

    fn apply_attribute(&mut self, name: &str, value: &AttrValue) -> RichTextResult<()> {
        match name {
            "align" => self.align = Some(value.to_string().parse()?),
            "valign" => self.valign = Some(attr_valign(value)?),
            "wordWrap" => self.word_wrap = Some(attr_bool(name, value)?),
            "wordWrapWidth" => self.word_wrap_width = Some(attr_number(name, value)?),
            "breakWords" => self.break_words = Some(attr_bool(name, value)?),
            "fill" => self.fill = Some(attr_color(value)),
            "fontFamily" => self.font_family = Some(value.to_string()),
            "fontSize" => self.font_size = Some(attr_number(name, value)?),
            "fontStyle" => self.font_style = Some(value.to_string()),
            "fontVariant" => self.font_variant = Some(value.to_string()),
            "fontWeight" => {
                self.font_weight = Some(match value {
                    AttrValue::Number(n) => FontWeight::Numeric(*n as f32),
                    other => FontWeight::Keyword(other.to_string()),
                })
            }
            "leading" => self.leading = Some(attr_number(name, value)?),
            "letterSpacing" => self.letter_spacing = Some(attr_number(name, value)?),
            "lineHeight" => self.line_height = Some(attr_number(name, value)?),
            "stroke" => self.stroke = Some(attr_color(value)),
            "strokeThickness" => self.stroke_thickness = Some(attr_number(name, value)?),
            "dropShadow" => self.drop_shadow = Some(attr_bool(name, value)?),
            _ => {
                self.extra.insert(name.to_string(), value.clone());
            }
        }
        Ok(())
    }
}

fn attr_number(name: &str, value: &AttrValue) -> RichTextResult<f64> {
    value.as_f64().ok_or_else(|| {
        RichTextError::validation(format!("attribute '{name}' expects a number, got '{value}'"))
    })
}

fn attr_bool(name: &str, value: &AttrValue) -> RichTextResult<bool> {
    value.as_bool().ok_or_else(|| {
        RichTextError::validation(format!(
            "attribute '{name}' expects true or false, got '{value}'"
        ))
    })
}

fn attr_color(value: &AttrValue) -> Color {
    match value {
        AttrValue::Number(n) if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(n) => {
            Color::Rgb(*n as u32)
        }
        other => Color::Css(other.to_string()),
    }
}

fn attr_valign(value: &AttrValue) -> RichTextResult<VAlign> {
    match value {
        AttrValue::Number(n) => Ok(VAlign::Offset(*n)),
        AttrValue::String(s) => match s.as_str() {
            "top" => Ok(VAlign::Named(VAlignKind::Top)),
            "middle" => Ok(VAlign::Named(VAlignKind::Middle)),
            "bottom" => Ok(VAlign::Named(VAlignKind::Bottom)),
            "baseline" => Ok(VAlign::Named(VAlignKind::Baseline)),
            other => Err(RichTextError::validation(format!(
                "unknown valign '{other}'"
            ))),
        },
        AttrValue::Bool(b) => Err(RichTextError::validation(format!(
            "attribute 'valign' expects a keyword or number, got '{b}'"
        ))),
    }
}

/// Left fold of [`TextStyle::merge`]; later styles win.
pub fn combine_styles<'a>(styles: impl IntoIterator<Item = &'a TextStyle>) -> TextStyle {
    styles
        .into_iter()
        .fold(TextStyle::default(), |acc, style| acc.merge(style))
}

impl StyleSet {
    /// Style for one tag with its inline attributes applied; unregistered tags contribute
    /// only their attributes.
    pub fn style_for_tag(&self, name: &str, attributes: &AttributeMap) -> RichTextResult<TextStyle> {
        match self.get(name) {
            Some(style) => style.with_attributes(attributes),
            None => TextStyle::default().with_attributes(attributes),
        }
    }

    /// Combined style of a tag stack, outermost first.
    pub fn style_for_tags(&self, tags: &[TagEntry]) -> RichTextResult<TextStyle> {
        let mut combined = TextStyle::default();
        for tag in tags {
            combined = combined.merge(&self.style_for_tag(&tag.name, &tag.attributes)?);
        }
        Ok(combined)
    }

    /// Fully resolved style of a tag stack: the default entry overlaid with every tag.
    pub fn resolve(&self, tags: &[TagEntry]) -> RichTextResult<TextStyle> {
        let base = self.default_style().cloned().unwrap_or_default();
        Ok(base.merge(&self.style_for_tags(tags)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolve.rs"]
mod tests;
