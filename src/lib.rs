//! richtext parses text marked up with inline, XML-like tags and lays the styled runs out on
//! wrapped, aligned lines.
//!
//! # Pipeline overview
//!
//! 1. **Match**: `markup + StyleSet -> Vec<TagMatch>` (one regex built from the known tag names)
//! 2. **Segment**: `markup + matches -> Vec<&str>` (plain text between tags)
//! 3. **Tokenize**: `segments + matches -> Vec<Token>` (text paired with its open-tag stack)
//! 4. **Layout**: `tokens + StyleSet + TextMeasurer -> Vec<PositionedRun>`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every pass is a pure function of text, styles and measurements.
//! - **Measurement is injected**: the engine never renders glyphs; callers supply a
//!   [`TextMeasurer`] ([`MonospaceMeasurer`], [`ParleyMeasurer`], or their own).
//!
//! ```
//! use richtext::{MonospaceMeasurer, RichText, StyleSet, TextStyle};
//!
//! let mut styles = StyleSet::with_default(TextStyle::default());
//! styles.insert("b", TextStyle { font_size: Some(30.0), ..TextStyle::default() });
//!
//! let doc = RichText::new("plain <b>bold</b><br/>next line", styles);
//! let runs = doc.layout(&mut MonospaceMeasurer::default()).unwrap();
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[2].rect.x0, 0.0);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;
mod layout;
mod markup;
mod style;

pub use document::RichText;
pub use foundation::core::{LineWidth, Point, Rect, Size};
pub use foundation::error::{RichTextError, RichTextResult};
pub use layout::engine::{
    LayoutOptions, MeasuredToken, PositionedRun, calculate_layout, calculate_measurements,
    layout_bounds, measure_tokens, place_tokens,
};
pub use layout::measure::{
    DEFAULT_FONT_SIZE, MeasureFn, MonospaceMeasurer, TextMeasurer, check_measurement, measure_fn,
};
pub use layout::parley_measure::ParleyMeasurer;
pub use markup::attributes::{AttrValue, AttributeMap, parse_attributes};
pub use markup::format::{remove_tags, tokens_to_string};
pub use markup::matcher::{LINE_BREAK_TAG_NAME, TagMatch, TagMatcher, match_tags};
pub use markup::segment::extract_segments;
pub use markup::tokenize::{
    ParseReport, TagEntry, TagStack, Token, create_tokens, parse_tags, parse_tags_report,
    parse_with,
};
pub use style::model::{
    Align, Color, DEFAULT_STYLE_KEY, FontWeight, StyleSet, TextStyle, VAlign, VAlignKind,
};
pub use style::resolve::combine_styles;
