//! End-to-end checks of the behaviour the input pipeline relies on

use imetext_core::util::{comma_text, hex, remove_duplicates, DisplayStringizer, Stringizer};
use imetext_core::*;

#[test]
fn test_capitalization_categories() {
    assert_eq!(capitalization_type(""), CapitalizationType::None);
    assert_eq!(capitalization_type("a"), CapitalizationType::None);
    assert_eq!(capitalization_type("A"), CapitalizationType::FirstOnly);
    assert_eq!(capitalization_type("ABC"), CapitalizationType::All);
    assert_eq!(capitalization_type("AbC"), CapitalizationType::None);
    assert_eq!(capitalization_type("IT'S"), CapitalizationType::All);
    assert_eq!(capitalization_type("It's"), CapitalizationType::FirstOnly);
}

#[test]
fn test_empty_text_boundaries() {
    let separators = SeparatorSet::from_text(" ");
    let english = Locale::english();
    assert_eq!(code_point_count(""), 0);
    assert!(to_code_point_array("").is_empty());
    assert!(is_identical_after_uppercase(""));
    assert!(is_identical_after_lowercase(""));
    assert!(is_identical_after_capitalize_each_word("", &separators));
    assert_eq!(capitalize_first_code_point("", &english), "");
    assert_eq!(capitalize_first_and_lowercase_rest("", &english), "");
    assert_eq!(capitalize_each_word("", &separators, &english), "");
    assert!(!looks_like_url(""));
    assert!(!is_inside_double_quote_or_after_digit(""));
}

#[test]
fn test_identity_predicates() {
    assert!(is_identical_after_uppercase("ABC123"));
    assert!(!is_identical_after_uppercase("ABc"));
    assert!(is_identical_after_lowercase("abc123"));
}

#[test]
fn test_transforms() {
    let english = Locale::english();
    assert_eq!(capitalize_first_code_point("hello", &english), "Hello");
    assert_eq!(capitalize_first_code_point("h", &english), "H");
    let separators = SeparatorSet::from_text(" ");
    assert_eq!(
        capitalize_each_word("hello world", &separators, &english),
        "Hello World"
    );
}

#[test]
fn test_url_heuristic() {
    assert!(looks_like_url("check www.example.com"));
    assert!(!looks_like_url("www x"));
    assert!(looks_like_url("see //"));
    assert!(!looks_like_url("plain text"));
}

#[test]
fn test_quote_heuristic() {
    assert!(is_inside_double_quote_or_after_digit("5"));
    assert!(is_inside_double_quote_or_after_digit("say \"hi"));
    assert!(!is_inside_double_quote_or_after_digit("\"hi\" "));
    assert!(!is_inside_double_quote_or_after_digit(""));
}

#[test]
fn test_multibyte_text_is_never_split() {
    let english = Locale::english();
    let separators = SeparatorSet::from_text(" ");
    assert_eq!(
        capitalize_each_word("😀emoji élan", &separators, &english),
        "😀emoji Élan"
    );
    assert_eq!(capitalization_type("😀Élan"), CapitalizationType::FirstOnly);
    assert!(looks_like_url("日本 www."));
    assert!(is_inside_double_quote_or_after_digit("日本 \"語"));
}

#[test]
fn test_supplementary_helpers() {
    assert_eq!(comma_text::join("a", "b"), "a,b");
    assert_eq!(comma_text::remove_if_present("a", "a,b"), "b");
    assert_eq!(hex::bytes_to_hex(&hex::hex_to_bytes("c0ffee").unwrap()), "c0ffee");
    assert_eq!(
        hex::hex_to_bytes("c0f"),
        Err(CoreError::OddHexLength { length: 3 })
    );

    let mut suggestions = vec!["a".to_string(), "b".to_string(), "a".to_string()];
    remove_duplicates(&mut suggestions);
    assert_eq!(DisplayStringizer.join(suggestions.as_slice(), None), "[a, b]");
}
