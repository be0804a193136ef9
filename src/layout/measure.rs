use crate::{
    foundation::core::Size,
    foundation::error::{RichTextError, RichTextResult},
    style::model::TextStyle,
};

/// Font size used when a resolved style does not set one.
pub const DEFAULT_FONT_SIZE: f64 = 26.0;

/// External capability reporting the rendered size of a text run.
///
/// Implementations must reflect the style they are given and return the same size for the
/// same `(text, style)` pair. `&mut self` allows internal caching.
pub trait TextMeasurer {
    /// Measure `text` rendered with `style`.
    fn measure(&mut self, text: &str, style: &TextStyle) -> RichTextResult<Size>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn measure(&mut self, text: &str, style: &TextStyle) -> RichTextResult<Size> {
        (**self).measure(text, style)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&mut self, text: &str, style: &TextStyle) -> RichTextResult<Size> {
        (**self).measure(text, style)
    }
}

/// Adapter turning a closure into a [`TextMeasurer`].
pub struct MeasureFn<F>(pub F);

impl<F> TextMeasurer for MeasureFn<F>
where
    F: FnMut(&str, &TextStyle) -> Size,
{
    fn measure(&mut self, text: &str, style: &TextStyle) -> RichTextResult<Size> {
        Ok((self.0)(text, style))
    }
}

/// Wrap a closure as a [`TextMeasurer`].
pub fn measure_fn<F>(f: F) -> MeasureFn<F>
where
    F: FnMut(&str, &TextStyle) -> Size,
{
    MeasureFn(f)
}

/// Deterministic measurer with a fixed advance per character.
///
/// Width is `chars * font_size * advance`; height is `font_size * line_height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance per character as a fraction of the font size.
    pub advance: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> RichTextResult<Size> {
        let font_size = style.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let letter_spacing = style.letter_spacing.unwrap_or(0.0);
        let chars = text.chars().count() as f64;
        Ok(Size::new(
            chars * (font_size * self.advance + letter_spacing),
            font_size * self.line_height,
        ))
    }
}

/// Reject measurements that cannot come from a measurer honoring `style`.
///
/// Non-finite or negative sizes, and an all-zero size for non-empty text, usually mean the
/// measurer answered for a style it was never given.
///
/// Only the size itself is inspected. A measurer that ignores `style` altogether and returns
/// plausible metrics for some other font size is not detected here.
pub fn check_measurement(text: &str, style: &TextStyle, size: Size) -> RichTextResult<Size> {
    if !size.width.is_finite() || !size.height.is_finite() {
        return Err(RichTextError::measurement(format!(
            "non-finite size {}x{} for {text:?}",
            size.width, size.height
        )));
    }
    if size.width < 0.0 || size.height < 0.0 {
        return Err(RichTextError::measurement(format!(
            "negative size {}x{} for {text:?}",
            size.width, size.height
        )));
    }
    if !text.is_empty() && size.width == 0.0 && size.height == 0.0 {
        return Err(RichTextError::measurement(format!(
            "degenerate zero size for {text:?} at font size {}",
            style.font_size.unwrap_or(DEFAULT_FONT_SIZE)
        )));
    }
    Ok(size)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
