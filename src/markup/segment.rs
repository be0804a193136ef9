use crate::{
    foundation::error::{RichTextError, RichTextResult},
    markup::matcher::TagMatch,
};

/// Slice `input` into the plain-text runs around `matches`.
///
/// Always returns `matches.len() + 1` segments; tag text itself is excluded.
pub fn extract_segments<'a>(input: &'a str, matches: &[TagMatch]) -> RichTextResult<Vec<&'a str>> {
    let mut segments = Vec::with_capacity(matches.len() + 1);
    let mut cursor = 0usize;
    for m in matches {
        let end = m.end();
        if m.offset < cursor || end > input.len() {
            return Err(RichTextError::validation(format!(
                "tag '{}' at offset {} overlaps a previous tag or runs past the input",
                m.tag, m.offset
            )));
        }
        if !input.is_char_boundary(m.offset) || !input.is_char_boundary(end) {
            return Err(RichTextError::validation(format!(
                "tag '{}' at offset {} does not fall on a character boundary",
                m.tag, m.offset
            )));
        }
        segments.push(&input[cursor..m.offset]);
        cursor = end;
    }
    segments.push(&input[cursor..]);
    Ok(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/markup/segment.rs"]
mod tests;
