use crate::{
    foundation::core::{LineWidth, Point, Rect, Size},
    foundation::error::RichTextResult,
    layout::measure::{TextMeasurer, check_measurement},
    markup::tokenize::Token,
    style::model::{Align, StyleSet, TextStyle},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Line policy for one layout pass.
pub struct LayoutOptions {
    /// Width at which lines wrap.
    pub max_line_width: LineWidth,
    /// Horizontal alignment of finished lines.
    pub align: Align,
}

impl LayoutOptions {
    /// Options read from a default style: wraps at `wordWrapWidth` only when `wordWrap` is set.
    pub fn from_default_style(style: &TextStyle) -> Self {
        let max_line_width = match (style.word_wrap, style.word_wrap_width) {
            (Some(true), Some(w)) => LineWidth::Bounded(w),
            _ => LineWidth::Unbounded,
        };
        Self {
            max_line_width,
            align: style.align.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A token with its resolved style and measured size.
pub struct MeasuredToken<'a> {
    /// Source token.
    pub token: &'a Token,
    /// Default style overlaid with every enclosing tag.
    pub style: TextStyle,
    /// Size reported by the measurer.
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A positioned, styled run ready to hand to a renderer.
pub struct PositionedRun {
    /// Text of the run.
    pub text: String,
    /// Resolved style of the run.
    pub style: TextStyle,
    /// Placement in document coordinates.
    pub rect: Rect,
}

struct Line {
    start: usize,
    end: usize,
    width: f64,
}

#[derive(Default)]
struct Cursor {
    offset: Point,
    largest_line_height: f64,
    line_start: usize,
    lines: Vec<Line>,
}

impl Cursor {
    fn finish_line(&mut self, placed: usize) {
        self.lines.push(Line {
            start: self.line_start,
            end: placed,
            width: self.offset.x,
        });
        self.line_start = placed;
        self.offset.x = 0.0;
        self.offset.y += self.largest_line_height;
        self.largest_line_height = 0.0;
    }
}

/// Resolve and measure every non-empty token, keeping `None` for empty ones.
pub fn measure_tokens<'a, M: TextMeasurer>(
    tokens: &'a [Token],
    styles: &StyleSet,
    measurer: &mut M,
) -> RichTextResult<Vec<Option<MeasuredToken<'a>>>> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.text.is_empty() {
            out.push(None);
            continue;
        }
        let style = styles.resolve(&token.tags)?;
        let size = measurer.measure(&token.text, &style)?;
        let size = check_measurement(&token.text, &style, size)?;
        out.push(Some(MeasuredToken { token, style, size }));
    }
    Ok(out)
}

/// Place measured tokens on lines. `measured` must be aligned with `tokens` as returned by
/// [`measure_tokens`].
///
/// Tokens whose stack contains the line-break tag start a new line, even when empty. A token
/// that does not fit the remaining width moves to the next line whole; a token wider than the
/// line gets a line to itself. Finished lines are then shifted according to `opts.align`,
/// relative to the bounded line width or, when unbounded, to the widest line.
pub fn place_tokens(
    tokens: &[Token],
    measured: Vec<Option<MeasuredToken<'_>>>,
    opts: &LayoutOptions,
) -> Vec<PositionedRun> {
    let mut cursor = Cursor::default();
    let mut runs: Vec<PositionedRun> = Vec::with_capacity(measured.len());

    for (token, m) in tokens.iter().zip(measured) {
        if token.is_line_break() {
            cursor.finish_line(runs.len());
        }
        let Some(m) = m else {
            continue;
        };
        let line_has_runs = runs.len() > cursor.line_start;
        if line_has_runs && opts.max_line_width.exceeded_by(cursor.offset.x + m.size.width) {
            cursor.finish_line(runs.len());
        }

        let rect = Rect::from_origin_size(cursor.offset, m.size);
        cursor.offset.x = rect.x1;
        cursor.largest_line_height = cursor.largest_line_height.max(m.size.height);
        runs.push(PositionedRun {
            text: m.token.text.clone(),
            style: m.style,
            rect,
        });
    }
    let placed = runs.len();
    cursor.lines.push(Line {
        start: cursor.line_start,
        end: placed,
        width: cursor.offset.x,
    });

    align_lines(&mut runs, &cursor.lines, opts);
    runs
}

fn align_lines(runs: &mut [PositionedRun], lines: &[Line], opts: &LayoutOptions) {
    let factor = match opts.align {
        Align::Left | Align::Justify => return,
        Align::Right => 1.0,
        Align::Center => 0.5,
    };
    let reference = opts
        .max_line_width
        .bounded()
        .unwrap_or_else(|| lines.iter().map(|l| l.width).fold(0.0, f64::max));

    for line in lines {
        let shift = ((reference - line.width) * factor).max(0.0);
        if shift == 0.0 {
            continue;
        }
        for run in &mut runs[line.start..line.end] {
            run.rect = run.rect + kurbo::Vec2::new(shift, 0.0);
        }
    }
}

/// Full layout pass: resolve styles, measure, and position every non-empty token.
///
/// Output is in token order with no entries for empty tokens.
#[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
pub fn calculate_layout<M: TextMeasurer>(
    tokens: &[Token],
    styles: &StyleSet,
    measurer: &mut M,
    opts: &LayoutOptions,
) -> RichTextResult<Vec<PositionedRun>> {
    let measured = measure_tokens(tokens, styles, measurer)?;
    let runs = place_tokens(tokens, measured, opts);
    tracing::debug!(runs = runs.len(), "laid out tagged text");
    Ok(runs)
}

/// Like [`calculate_layout`], returning only the rectangles.
pub fn calculate_measurements<M: TextMeasurer>(
    tokens: &[Token],
    styles: &StyleSet,
    measurer: &mut M,
    opts: &LayoutOptions,
) -> RichTextResult<Vec<Rect>> {
    Ok(calculate_layout(tokens, styles, measurer, opts)?
        .into_iter()
        .map(|r| r.rect)
        .collect())
}

/// Union of all run rectangles; [`Rect::ZERO`] when there are none.
pub fn layout_bounds(runs: &[PositionedRun]) -> Rect {
    runs.iter()
        .map(|r| r.rect)
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
