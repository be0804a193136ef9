use super::*;
use crate::markup::attributes::AttributeMap;
use crate::markup::matcher::TagMatcher;

fn tag(text: &str, offset: usize) -> TagMatch {
    TagMatch {
        tag: text.to_string(),
        name: "b".to_string(),
        is_opening: !text.starts_with("</"),
        attributes: AttributeMap::new(),
        offset,
    }
}

#[test]
fn no_tags_yields_whole_input() {
    assert_eq!(extract_segments("plain", &[]).unwrap(), vec!["plain"]);
    assert_eq!(extract_segments("", &[]).unwrap(), vec![""]);
}

#[test]
fn segments_surround_every_tag() {
    let input = "x<b>y</b>z";
    let segs = extract_segments(input, &[tag("<b>", 1), tag("</b>", 5)]).unwrap();
    assert_eq!(segs, vec!["x", "y", "z"]);
}

#[test]
fn adjacent_tags_produce_empty_segments() {
    let input = "<b></b>";
    let segs = extract_segments(input, &[tag("<b>", 0), tag("</b>", 3)]).unwrap();
    assert_eq!(segs, vec!["", "", ""]);
}

#[test]
fn multibyte_text_is_sliced_on_offsets() {
    let m = TagMatcher::new(["b"]).unwrap();
    let input = "héllo <b>wörld</b> ✓";
    let matches = m.find_all(input).unwrap();
    let segs = extract_segments(input, &matches).unwrap();
    assert_eq!(segs, vec!["héllo ", "wörld", " ✓"]);
    assert_eq!(segs.len(), matches.len() + 1);
}

#[test]
fn overlapping_or_out_of_range_offsets_are_rejected() {
    let input = "x<b>y</b>z";
    let err = extract_segments(input, &[tag("<b>", 1), tag("</b>", 2)]).unwrap_err();
    assert!(matches!(err, RichTextError::Validation(_)));

    let err = extract_segments(input, &[tag("</b>", 8)]).unwrap_err();
    assert!(matches!(err, RichTextError::Validation(_)));
}
