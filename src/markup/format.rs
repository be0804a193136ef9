use crate::{
    foundation::error::RichTextResult,
    markup::attributes::AttributeMap,
    markup::matcher::TagMatcher,
    markup::segment::extract_segments,
    markup::tokenize::{TagEntry, Token},
    style::model::StyleSet,
};

fn attributes_to_string(attributes: &AttributeMap) -> String {
    attributes
        .iter()
        .map(|(k, v)| format!(" {k}=\"{v}\""))
        .collect()
}

fn tags_to_string(tags: &[TagEntry]) -> String {
    tags.iter()
        .map(|t| format!(" <{}{}>", t.name, attributes_to_string(&t.attributes)))
        .collect::<Vec<_>>()
        .join(",")
}

/// One line per non-empty token: the quoted text followed by its tag stack.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens.iter().filter(|t| !t.text.is_empty()) {
        out.push_str(&format!(
            "\"{}\"   {}\n",
            token.text.replace('\n', "\\n"),
            tags_to_string(&token.tags)
        ));
    }
    out
}

/// Strip every recognized tag from `input`, leaving unknown tag-like text in place.
///
/// Nesting is not validated.
pub fn remove_tags(input: &str, styles: &StyleSet) -> RichTextResult<String> {
    let matches = TagMatcher::for_styles(styles)?.find_all(input)?;
    Ok(extract_segments(input, &matches)?.concat())
}

#[cfg(test)]
#[path = "../../tests/unit/markup/format.rs"]
mod tests;
