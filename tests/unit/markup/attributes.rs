use super::*;

#[test]
fn empty_and_blank_inputs_give_empty_map() {
    assert!(parse_attributes("").unwrap().is_empty());
    assert!(parse_attributes("   \t ").unwrap().is_empty());
}

#[test]
fn literals_are_coerced() {
    let m = parse_attributes(r#"key="true""#).unwrap();
    assert_eq!(m["key"], AttrValue::Bool(true));

    let m = parse_attributes(r#"key="42""#).unwrap();
    assert_eq!(m["key"], AttrValue::Number(42.0));

    let m = parse_attributes(r#"key="3.14""#).unwrap();
    assert_eq!(m["key"], AttrValue::Number(3.14));

    let m = parse_attributes(r#"key="hi""#).unwrap();
    assert_eq!(m["key"], AttrValue::String("hi".to_string()));

    let m = parse_attributes(r#"key="false""#).unwrap();
    assert_eq!(m["key"], AttrValue::Bool(false));
}

#[test]
fn non_finite_and_partial_numbers_stay_strings() {
    let m = parse_attributes(r#"a="NaN" b="inf" c="12px""#).unwrap();
    assert_eq!(m["a"], AttrValue::String("NaN".to_string()));
    assert_eq!(m["b"], AttrValue::String("inf".to_string()));
    assert_eq!(m["c"], AttrValue::String("12px".to_string()));
}

#[test]
fn multiple_pairs_with_mixed_quotes_and_whitespace() {
    let m = parse_attributes("  src='/image.png'\t alt=\"foo bar\"  ").unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m["src"], AttrValue::String("/image.png".to_string()));
    assert_eq!(m["alt"], AttrValue::String("foo bar".to_string()));
}

#[test]
fn other_quote_kind_is_plain_content() {
    let m = parse_attributes(r#"title="it's""#).unwrap();
    assert_eq!(m["title"], AttrValue::String("it's".to_string()));
}

#[test]
fn repeated_name_keeps_last_value() {
    let m = parse_attributes(r#"a="1" a="2""#).unwrap();
    assert_eq!(m["a"], AttrValue::Number(2.0));
}

#[test]
fn malformed_pairs_are_errors() {
    for bad in [
        "key",
        "key=value",
        r#"key="open"#,
        r#"="x""#,
        r#"a="1"b="2""#,
        r#"a='1""#,
    ] {
        let err = parse_attributes(bad).unwrap_err();
        assert!(
            matches!(err, RichTextError::AttributeParse(_)),
            "expected attribute parse error for {bad:?}, got {err:?}"
        );
    }
}

#[test]
fn display_matches_literal_form() {
    assert_eq!(AttrValue::Number(42.0).to_string(), "42");
    assert_eq!(AttrValue::Number(0.5).to_string(), "0.5");
    assert_eq!(AttrValue::Bool(true).to_string(), "true");
    assert_eq!(AttrValue::String("x y".to_string()).to_string(), "x y");
}
