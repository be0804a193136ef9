use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RichTextError::attribute_parse("x")
            .to_string()
            .contains("attribute parse error:")
    );
    assert!(
        RichTextError::nesting("x")
            .to_string()
            .contains("nesting error:")
    );
    assert!(
        RichTextError::measurement("x")
            .to_string()
            .contains("measurement error:")
    );
    assert!(
        RichTextError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RichTextError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RichTextError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_kind() {
    let err: RichTextError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, RichTextError::Serde(_)));
}
