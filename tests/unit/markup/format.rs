use super::*;
use crate::markup::attributes::AttrValue;
use crate::style::model::TextStyle;

#[test]
fn tokens_to_string_lists_non_empty_tokens_with_stacks() {
    let mut attrs = AttributeMap::new();
    attrs.insert("size".to_string(), AttrValue::Number(3.0));
    attrs.insert("bold".to_string(), AttrValue::Bool(true));
    let tokens = vec![
        Token {
            text: String::new(),
            tags: vec![],
        },
        Token {
            text: "a\nb".to_string(),
            tags: vec![
                TagEntry::with_attributes("b", attrs),
                TagEntry::new("i"),
            ],
        },
    ];
    assert_eq!(
        tokens_to_string(&tokens),
        "\"a\\nb\"    <b bold=\"true\" size=\"3\">, <i>\n"
    );
}

#[test]
fn untagged_token_has_no_stack_suffix() {
    let tokens = vec![Token {
        text: "plain".to_string(),
        tags: vec![],
    }];
    assert_eq!(tokens_to_string(&tokens), "\"plain\"   \n");
}

#[test]
fn remove_tags_keeps_unknown_markup() {
    let mut styles = StyleSet::default();
    styles.insert("b", TextStyle::default());
    let out = remove_tags("<b>x</b> <i>y</i><br/>z", &styles).unwrap();
    assert_eq!(out, "x <i>y</i>z");
}

#[test]
fn remove_tags_ignores_nesting_errors() {
    let mut styles = StyleSet::default();
    styles.insert("b", TextStyle::default());
    assert_eq!(remove_tags("x</b>", &styles).unwrap(), "x");
}
