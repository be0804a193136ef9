use regex::Regex;

use crate::{
    foundation::error::{RichTextError, RichTextResult},
    markup::attributes::{AttributeMap, is_name_char, parse_attributes},
    style::model::{DEFAULT_STYLE_KEY, StyleSet},
};

/// Reserved tag that forces a line break wherever it encloses a token.
pub const LINE_BREAK_TAG_NAME: &str = "br";

#[derive(Clone, Debug, PartialEq)]
/// One opening or closing tag found in the source string.
pub struct TagMatch {
    /// Full matched tag text, e.g. `<b size="3">`. Empty for the synthetic close of `<br/>`.
    pub tag: String,
    /// Tag name.
    pub name: String,
    /// `true` for opening tags.
    pub is_opening: bool,
    /// Parsed attributes; always empty for closing tags.
    pub attributes: AttributeMap,
    /// Byte offset of `tag` in the source string.
    pub offset: usize,
}

impl TagMatch {
    /// Byte offset just past the tag text.
    pub fn end(&self) -> usize {
        self.offset + self.tag.len()
    }
}

/// Compiled scanner for a fixed set of tag names.
#[derive(Clone, Debug)]
pub struct TagMatcher {
    re: Regex,
    names: Vec<String>,
}

impl TagMatcher {
    /// Build a scanner recognizing `names` plus [`LINE_BREAK_TAG_NAME`].
    ///
    /// `default` and names containing characters outside `[A-Za-z0-9_-]` are skipped.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> RichTextResult<Self> {
        let mut names: Vec<String> = names
            .into_iter()
            .filter(|n| *n != DEFAULT_STYLE_KEY)
            .filter(|n| {
                let ok = !n.is_empty() && n.chars().all(is_name_char);
                if !ok {
                    tracing::warn!(name = %n, "skipping style key that cannot be used as a tag name");
                }
                ok
            })
            .map(str::to_string)
            .collect();
        names.push(LINE_BREAK_TAG_NAME.to_string());
        // Longest first so that a name never loses to one of its own prefixes.
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();

        let alternation = names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");
        let attr = r#"\s+[A-Za-z0-9_-]+=(?:"[^"]*"|'[^']*')"#;
        let pattern = format!(
            r"<(?P<open>{alternation})(?P<attrs>(?:{attr})*)\s*(?P<self_close>/)?>|</(?P<close>{alternation})\s*>"
        );
        let re = Regex::new(&pattern)
            .map_err(|e| RichTextError::validation(format!("invalid tag pattern: {e}")))?;
        Ok(Self { re, names })
    }

    /// Build a scanner for the tags registered in `styles`.
    pub fn for_styles(styles: &StyleSet) -> RichTextResult<Self> {
        Self::new(styles.tag_names())
    }

    /// Recognized names, longest first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Scan `input` and return every tag occurrence in ascending offset order.
    ///
    /// A self-closing tag (`<br/>`) yields an opening match followed by a zero-length closing
    /// match at its end.
    pub fn find_all(&self, input: &str) -> RichTextResult<Vec<TagMatch>> {
        let mut out = Vec::new();
        for caps in self.re.captures_iter(input) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if let Some(name) = caps.name("open") {
                // The pattern only admits well-formed `name="value"` pairs.
                let attributes = match caps.name("attrs") {
                    Some(a) => parse_attributes(a.as_str())?,
                    None => AttributeMap::new(),
                };
                out.push(TagMatch {
                    tag: whole.as_str().to_string(),
                    name: name.as_str().to_string(),
                    is_opening: true,
                    attributes,
                    offset: whole.start(),
                });
                if caps.name("self_close").is_some() {
                    out.push(TagMatch {
                        tag: String::new(),
                        name: name.as_str().to_string(),
                        is_opening: false,
                        attributes: AttributeMap::new(),
                        offset: whole.end(),
                    });
                }
            } else if let Some(name) = caps.name("close") {
                out.push(TagMatch {
                    tag: whole.as_str().to_string(),
                    name: name.as_str().to_string(),
                    is_opening: false,
                    attributes: AttributeMap::new(),
                    offset: whole.start(),
                });
            }
        }
        Ok(out)
    }
}

/// Scan `input` for the tags registered in `styles`.
pub fn match_tags(input: &str, styles: &StyleSet) -> RichTextResult<Vec<TagMatch>> {
    TagMatcher::for_styles(styles)?.find_all(input)
}

#[cfg(test)]
#[path = "../../tests/unit/markup/matcher.rs"]
mod tests;
