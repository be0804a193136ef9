use std::collections::BTreeMap;

use crate::foundation::error::{RichTextError, RichTextResult};

/// Attributes of one opening tag, keyed by attribute name.
pub type AttributeMap = BTreeMap<String, AttrValue>;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Typed attribute value, inferred from its literal form.
pub enum AttrValue {
    /// `"true"` or `"false"`.
    Bool(bool),
    /// Any literal that parses fully as a finite float.
    Number(f64),
    /// Everything else, verbatim.
    String(String),
}

impl AttrValue {
    /// Coerce a raw (unquoted) attribute literal.
    pub fn from_literal(raw: &str) -> Self {
        match raw {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::String(raw.to_string()),
        }
    }

    /// Numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean payload, if this is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parse XML-style attribute text such as `src='/image.png' alt="foo"`.
///
/// Values are coerced with [`AttrValue::from_literal`]. Quoted values may contain whitespace.
/// A repeated name keeps the last value.
pub fn parse_attributes(input: &str) -> RichTextResult<AttributeMap> {
    let mut out = AttributeMap::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let name_len = rest
            .find(|c: char| !is_name_char(c))
            .unwrap_or(rest.len());
        if name_len == 0 {
            return Err(RichTextError::attribute_parse(format!(
                "expected attribute name at '{rest}'"
            )));
        }
        let (name, after_name) = rest.split_at(name_len);

        let Some(after_eq) = after_name.strip_prefix('=') else {
            return Err(RichTextError::attribute_parse(format!(
                "attribute '{name}' is missing '='"
            )));
        };

        let quote = match after_eq.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => {
                return Err(RichTextError::attribute_parse(format!(
                    "attribute '{name}' value must be quoted"
                )));
            }
        };
        let body = &after_eq[1..];
        let Some(close) = body.find(quote) else {
            return Err(RichTextError::attribute_parse(format!(
                "attribute '{name}' has an unterminated {quote} quote"
            )));
        };

        out.insert(name.to_string(), AttrValue::from_literal(&body[..close]));

        let tail = &body[close + 1..];
        let trimmed = tail.trim_start();
        if !trimmed.is_empty() && trimmed.len() == tail.len() {
            return Err(RichTextError::attribute_parse(format!(
                "expected whitespace after attribute '{name}'"
            )));
        }
        rest = trimmed;
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/markup/attributes.rs"]
mod tests;
