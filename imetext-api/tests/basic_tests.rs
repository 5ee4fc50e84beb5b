//! Basic tests for imetext-api

use imetext_api::*;

#[test]
fn test_default_processor() {
    let processor = TextProcessor::new().unwrap();
    assert_eq!(processor.locale().language(), "en");
    assert!(processor.separators().contains(' '));
    assert_eq!(processor.config(), &Config::default());
}

#[test]
fn test_with_locale_rejects_garbage() {
    match TextProcessor::with_locale("12345") {
        Err(ApiError::InvalidLocale { tag }) => assert_eq!(tag, "12345"),
        other => panic!("Expected InvalidLocale error, got {other:?}"),
    }
}

#[test]
fn test_capitalization_round_trip() {
    let processor = TextProcessor::default();
    for word in ["hello", "Hello", "HELLO"] {
        let category = processor.capitalization_type(word);
        assert_eq!(processor.capitalize("hello", category), word);
    }
    // Mixed case is left alone
    assert_eq!(
        processor.capitalize("iPhone", processor.capitalization_type("iPhone")),
        "iPhone"
    );
}

#[test]
fn test_turkish_processor() {
    let processor = TextProcessor::with_locale("tr").unwrap();
    assert_eq!(processor.capitalize_first_code_point("istanbul"), "İstanbul");
    assert_eq!(
        processor.capitalize("izmir", CapitalizationType::All),
        "İZMİR"
    );
    assert_eq!(processor.uppercase_code_point('i', true), Some('İ'));
}

#[test]
fn test_capitalize_each_word_uses_configured_separators() {
    let config = Config::builder().word_separators(" ").build().unwrap();
    let spaces_only = TextProcessor::with_config(config).unwrap();
    assert_eq!(spaces_only.capitalize_each_word("jean-luc picard"), "Jean-luc Picard");
    assert!(spaces_only.is_identical_after_capitalize_each_word("Jean-luc Picard"));

    let default = TextProcessor::default();
    assert_eq!(default.capitalize_each_word("jean-luc picard"), "Jean-Luc Picard");
    assert!(!default.is_identical_after_capitalize_each_word("Jean-luc Picard"));
}

#[test]
fn test_describe_word() {
    let described = describe_word("IT'S").unwrap();
    assert_eq!(described.capitalization, CapitalizationType::All);
    assert!(described.identical_after_uppercase);
    assert!(!described.identical_after_lowercase);
    assert!(!described.identical_after_capitalize_each_word);
    assert_eq!(described.code_points, 4);
}

#[test]
fn test_analyze_before_cursor() {
    let processor = TextProcessor::default();

    let context = processor.analyze_before_cursor("go to www.example.com");
    assert!(context.looks_like_url);
    assert!(!context.inside_double_quote_or_after_digit);

    let context = processor.analyze_before_cursor("she said \"rock 'n'");
    assert!(!context.looks_like_url);
    assert!(context.inside_double_quote_or_after_digit);
    assert_eq!(context.trailing_single_quotes, 1);

    assert_eq!(analyze_before_cursor(""), CursorContext::default());
}

#[test]
fn test_dto_serialization() {
    let context = analyze_before_cursor("5");
    let json = context.to_json().unwrap();
    assert_eq!(
        json,
        r#"{"looks_like_url":false,"inside_double_quote_or_after_digit":true,"trailing_single_quotes":0}"#
    );

    let described = TextProcessor::default().describe_word("Hi");
    let json = described.to_json().unwrap();
    assert!(json.contains(r#""capitalization":"first_only""#));
    let parsed: WordCase = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, described);
}
