//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by loader parse diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Hints carry the category label and caller-supplied context.
//! Notes: Uses a source include to exercise internal helpers without widening the API.

#[path = "../src/json/parse.rs"]
mod parse;

use parse::ParseFailureCategory;

#[test]
fn syntax_failures_map_to_syntax() {
    let mut bytes = br#"{"id":}"#.to_vec();
    let err = parse::parse_document(&mut bytes).unwrap_err();
    assert_eq!(parse::categorize_error(&err), ParseFailureCategory::Syntax);
}

#[test]
fn category_mapping_is_stable_for_known_messages() {
    assert_eq!(
        parse::categorize_message("invalid UTF-8 sequence"),
        ParseFailureCategory::Utf8
    );
    assert_eq!(
        parse::categorize_message("number overflow while parsing"),
        ParseFailureCategory::NumericRange
    );
    assert_eq!(
        parse::categorize_message("recursion limit exceeded while parsing"),
        ParseFailureCategory::DepthLimit
    );
    assert_eq!(
        parse::categorize_message("unexpected character"),
        ParseFailureCategory::Syntax
    );
    assert_eq!(
        parse::categorize_message("opaque parser issue"),
        ParseFailureCategory::Unknown
    );
}

#[test]
fn hint_contains_category_and_context() {
    let mut bytes = br#"{"id""#.to_vec();
    let err = parse::parse_document(&mut bytes).unwrap_err();
    let hint = parse::hint_for_error(&err, "records.json");
    assert!(hint.contains("parse category: "));
    assert!(hint.contains("context: records.json"));
}

#[test]
fn snippet_is_bounded() {
    let snippet = parse::snippet(br#"{"id":"abcdefghijklmnopqrstuvwxyz"}"#, 16);
    assert!(snippet.len() <= 16);
    assert!(snippet.ends_with("..."));
}

#[test]
fn snippet_decodes_invalid_bytes_lossily() {
    let snippet = parse::snippet(&[0xff, b'{', b'}'], 16);
    assert!(snippet.contains('\u{fffd}'));
    assert!(snippet.contains("{}"));
}
