use crate::{
    foundation::error::{RichTextError, RichTextResult},
    markup::attributes::AttributeMap,
    markup::matcher::{LINE_BREAK_TAG_NAME, TagMatch, TagMatcher},
    markup::segment::extract_segments,
    style::model::StyleSet,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An open tag together with its attributes.
pub struct TagEntry {
    /// Tag name.
    pub name: String,
    /// Attributes given on the opening tag.
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub attributes: AttributeMap,
}

impl TagEntry {
    /// Entry with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: AttributeMap::new(),
        }
    }

    /// Entry with the given attributes.
    pub fn with_attributes(name: impl Into<String>, attributes: AttributeMap) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

impl From<&TagMatch> for TagEntry {
    fn from(m: &TagMatch) -> Self {
        Self::with_attributes(m.name.clone(), m.attributes.clone())
    }
}

/// Currently open tags, outermost first.
pub type TagStack = Vec<TagEntry>;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A run of text and the tags enclosing it.
pub struct Token {
    /// Text of the run; may be empty.
    pub text: String,
    /// Snapshot of the tag stack at this run, outermost first.
    pub tags: TagStack,
}

impl Token {
    /// True if any enclosing tag is named `name`.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// True if this token is enclosed by the line-break tag.
    pub fn is_line_break(&self) -> bool {
        self.has_tag(LINE_BREAK_TAG_NAME)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Tokens of one parse plus the tags left open at the end of input.
pub struct ParseReport {
    /// Token stream in source order.
    pub tokens: Vec<Token>,
    /// Names of tags still open at end of input, outermost first.
    pub unclosed: Vec<String>,
}

/// Walk segments and tag matches together, tracking the open-tag stack.
///
/// `segments` must hold one more entry than `matches` (see [`extract_segments`]).
pub fn create_tokens(segments: &[&str], matches: &[TagMatch]) -> RichTextResult<Vec<Token>> {
    Ok(create_tokens_report(segments, matches)?.tokens)
}

fn create_tokens_report(segments: &[&str], matches: &[TagMatch]) -> RichTextResult<ParseReport> {
    let mut tokens = Vec::with_capacity(matches.len() + 1);
    tokens.push(Token {
        text: segments.first().copied().unwrap_or_default().to_string(),
        tags: TagStack::new(),
    });

    let mut open: Vec<&TagMatch> = Vec::new();
    for (i, m) in matches.iter().enumerate() {
        if m.is_opening {
            open.push(m);
        } else {
            match open.pop() {
                Some(top) if top.name == m.name => {}
                Some(top) => {
                    return Err(RichTextError::nesting(format!(
                        "closing tag '{}' at offset {} does not match open tag '{}'",
                        m.tag, m.offset, top.tag
                    )));
                }
                None => {
                    return Err(RichTextError::nesting(format!(
                        "closing tag '{}' at offset {} has no open tag",
                        m.tag, m.offset
                    )));
                }
            }
        }

        tokens.push(Token {
            text: segments.get(i + 1).copied().unwrap_or_default().to_string(),
            tags: open.iter().map(|t| TagEntry::from(*t)).collect(),
        });
    }

    let unclosed: Vec<String> = open.iter().map(|t| t.name.clone()).collect();
    if !unclosed.is_empty() {
        tracing::warn!(
            count = unclosed.len(),
            tags = %unclosed.join("-"),
            "found unclosed tags at end of input"
        );
    }

    Ok(ParseReport { tokens, unclosed })
}

/// Convert tagged `input` into tokens, recognizing only tags registered in `styles`.
pub fn parse_tags(input: &str, styles: &StyleSet) -> RichTextResult<Vec<Token>> {
    Ok(parse_tags_report(input, styles)?.tokens)
}

/// Like [`parse_tags`], also reporting tags left open at end of input.
#[tracing::instrument(skip(input, styles), fields(len = input.len()))]
pub fn parse_tags_report(input: &str, styles: &StyleSet) -> RichTextResult<ParseReport> {
    let matcher = TagMatcher::for_styles(styles)?;
    parse_with(&matcher, input)
}

/// Tokenize `input` with an already compiled matcher.
pub fn parse_with(matcher: &TagMatcher, input: &str) -> RichTextResult<ParseReport> {
    let matches = matcher.find_all(input)?;
    let segments = extract_segments(input, &matches)?;
    let report = create_tokens_report(&segments, &matches)?;
    tracing::debug!(
        tags = matches.len(),
        tokens = report.tokens.len(),
        "parsed tagged text"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/markup/tokenize.rs"]
mod tests;
