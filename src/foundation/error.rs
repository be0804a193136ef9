/// Convenience result type used across richtext.
pub type RichTextResult<T> = Result<T, RichTextError>;

/// Top-level error taxonomy used by parsing and layout APIs.
#[derive(thiserror::Error, Debug)]
pub enum RichTextError {
    /// Malformed inline attribute text (missing `=`, bad quoting).
    #[error("attribute parse error: {0}")]
    AttributeParse(String),

    /// A closing tag that does not match the innermost open tag.
    #[error("nesting error: {0}")]
    Nesting(String),

    /// The measurement service returned sizes that cannot be laid out.
    #[error("measurement error: {0}")]
    Measurement(String),

    /// Invalid user-provided data (styles, offsets, fonts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing style sets.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RichTextError {
    /// Build a [`RichTextError::AttributeParse`] value.
    pub fn attribute_parse(msg: impl Into<String>) -> Self {
        Self::AttributeParse(msg.into())
    }

    /// Build a [`RichTextError::Nesting`] value.
    pub fn nesting(msg: impl Into<String>) -> Self {
        Self::Nesting(msg.into())
    }

    /// Build a [`RichTextError::Measurement`] value.
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Build a [`RichTextError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RichTextError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RichTextError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
