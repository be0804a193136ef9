use super::*;
use crate::markup::attributes::AttrValue;
use crate::style::model::TextStyle;

fn styles(names: &[&str]) -> StyleSet {
    let mut set = StyleSet::default();
    for n in names {
        set.insert(*n, TextStyle::default());
    }
    set
}

fn names(token: &Token) -> Vec<&str> {
    token.tags.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn untagged_input_is_a_single_token() {
    let tokens = parse_tags("just text", &styles(&["b"])).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "just text");
    assert!(tokens[0].tags.is_empty());
}

#[test]
fn first_token_is_text_before_first_tag_even_if_empty() {
    let tokens = parse_tags("<b>x</b>", &styles(&["b"])).unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text, "");
    assert!(tokens[0].tags.is_empty());
    assert_eq!(tokens[1].text, "x");
    assert_eq!(names(&tokens[1]), vec!["b"]);
    assert_eq!(tokens[2].text, "");
    assert!(tokens[2].tags.is_empty());
}

#[test]
fn nested_stacks_are_outermost_first() {
    let tokens = parse_tags("a<b>b<i>c</i>d</b>e", &styles(&["b", "i"])).unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(names(&tokens[0]), Vec::<&str>::new());
    assert_eq!(names(&tokens[1]), vec!["b"]);
    assert_eq!(names(&tokens[2]), vec!["b", "i"]);
    assert_eq!(names(&tokens[3]), vec!["b"]);
    assert_eq!(names(&tokens[4]), Vec::<&str>::new());
}

#[test]
fn attributes_travel_with_stack_entries() {
    let tokens = parse_tags(r#"<b size="3">x<i>y</i></b>"#, &styles(&["b", "i"])).unwrap();
    assert_eq!(tokens[2].tags[0].attributes["size"], AttrValue::Number(3.0));
    assert!(tokens[2].tags[1].attributes.is_empty());
}

#[test]
fn stack_snapshots_are_independent() {
    let mut tokens = parse_tags("<b>x<i>y</i></b>", &styles(&["b", "i"])).unwrap();
    tokens[1].tags.push(TagEntry::new("zzz"));
    tokens[2].tags[0].name = "changed".to_string();
    assert_eq!(names(&tokens[1]), vec!["b", "zzz"]);
    assert_eq!(names(&tokens[2]), vec!["changed", "i"]);
    assert_eq!(names(&tokens[3]), vec!["b"]);
}

#[test]
fn crossed_tags_fail_with_nesting_error() {
    let err = parse_tags("<b><i>x</b></i>", &styles(&["b", "i"])).unwrap_err();
    assert!(matches!(err, RichTextError::Nesting(_)));
}

#[test]
fn stray_closing_tag_fails_with_nesting_error() {
    let err = parse_tags("x</b>", &styles(&["b"])).unwrap_err();
    assert!(matches!(err, RichTextError::Nesting(_)));
}

#[test]
fn malformed_open_tag_is_literal_so_its_close_is_stray() {
    let err = parse_tags("<b foo>x</b>", &styles(&["b"])).unwrap_err();
    assert!(matches!(err, RichTextError::Nesting(_)));
}

#[test]
fn unclosed_tags_warn_but_still_produce_tokens() {
    let report = parse_tags_report("<b>x", &styles(&["b"])).unwrap();
    assert_eq!(report.unclosed, vec!["b".to_string()]);
    let non_empty: Vec<&Token> = report.tokens.iter().filter(|t| !t.text.is_empty()).collect();
    assert_eq!(non_empty.len(), 1);
    assert_eq!(non_empty[0].text, "x");
    assert_eq!(names(non_empty[0]), vec!["b"]);
}

#[test]
fn unclosed_report_lists_outermost_first() {
    let report = parse_tags_report("<b><i>x", &styles(&["b", "i"])).unwrap();
    assert_eq!(report.unclosed, vec!["b".to_string(), "i".to_string()]);
}

#[test]
fn self_closing_break_marks_an_empty_token() {
    let tokens = parse_tags("one<br/>two", &styles(&[])).unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "", "two"]);
    assert!(tokens[1].is_line_break());
    assert!(!tokens[2].is_line_break());
}

#[test]
fn concatenated_tokens_reconstruct_untagged_text() {
    let input = "Hello <b>bold <i>and italic</i></b> and <u>unknown</u> tags";
    let tokens = parse_tags(input, &styles(&["b", "i"])).unwrap();
    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, "Hello bold and italic and <u>unknown</u> tags");
}

#[test]
fn create_tokens_tolerates_missing_trailing_segments() {
    let m = TagMatcher::new(["b"]).unwrap();
    let matches = m.find_all("<b>x</b>").unwrap();
    let tokens = create_tokens(&["", "x"], &matches).unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].text, "");
}
