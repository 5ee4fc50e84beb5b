//! Property-based tests for the code-point primitives and case functions

use imetext_core::{
    capitalization_type, capitalize_each_word, capitalize_first_and_lowercase_rest,
    code_point_count, is_identical_after_capitalize_each_word, is_identical_after_lowercase,
    is_identical_after_uppercase, is_inside_double_quote_or_after_digit, looks_like_url,
    string_from_null_terminated_code_points, to_code_point_array, CapitalizationType, CaseMapper,
    CodePointSequence, Locale, SeparatorSet,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary printable text
fn any_text() -> impl Strategy<Value = String> {
    "\\PC{0,64}"
}

/// Words over letters whose case mappings are one-to-one in both directions
fn simple_word() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'b', 'i', 'z', 'A', 'B', 'I', 'Z', 'é', 'É', 'ø', 'Ø', 'ж', 'Ж', '\'', '-', '1',
            ' ',
        ]),
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Code-point arrays without the terminator
fn code_point_array() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(any::<char>().prop_filter("no terminator", |&ch| ch != '\0'), 0..32)
}

// ============================================================================
// Capitalization cross-check
// ============================================================================

/// Same classification without the early exit
fn capitalization_type_full_scan(text: &str) -> CapitalizationType {
    let letters: Vec<char> = text.chars().filter(|&ch| is_letter(ch)).collect();
    let Some(&first) = letters.first() else {
        return CapitalizationType::None;
    };
    if !first.is_uppercase() {
        return CapitalizationType::None;
    }
    let caps = letters.iter().filter(|ch| ch.is_uppercase()).count();
    if caps == 1 {
        CapitalizationType::FirstOnly
    } else if caps == letters.len() {
        CapitalizationType::All
    } else {
        CapitalizationType::None
    }
}

fn is_letter(ch: char) -> bool {
    // Every letter of the test alphabets is alphabetic and vice versa
    ch.is_alphabetic()
}

#[test]
fn capitalization_matches_full_scan_exhaustively() {
    let alphabet = ['a', 'A', 'é', 'É', '\'', '1'];
    let mut words = vec![String::new()];
    for _ in 0..6 {
        let mut longer = Vec::with_capacity(words.len() * alphabet.len());
        for word in &words {
            for &ch in &alphabet {
                let mut next = word.clone();
                next.push(ch);
                longer.push(next);
            }
        }
        for word in &longer {
            assert_eq!(
                capitalization_type(word),
                capitalization_type_full_scan(word),
                "mismatch for {word:?}"
            );
        }
        words = longer;
    }
}

proptest! {
    #[test]
    fn capitalization_matches_full_scan(word in simple_word()) {
        prop_assert_eq!(capitalization_type(&word), capitalization_type_full_scan(&word));
    }

    /// count is zero exactly for the empty string
    #[test]
    fn count_zero_iff_empty(text in any_text()) {
        prop_assert_eq!(code_point_count(&text) == 0, text.is_empty());
    }

    /// Reading back a null-terminated buffer yields the original code points
    #[test]
    fn null_terminated_round_trip(code_points in code_point_array(), junk in code_point_array()) {
        let text = string_from_null_terminated_code_points(&code_points);
        prop_assert_eq!(&to_code_point_array(&text), &code_points);

        let mut buffer = code_points.clone();
        buffer.push('\0');
        buffer.extend(junk);
        prop_assert_eq!(string_from_null_terminated_code_points(&buffer), text);
    }

    /// Forward and backward stepping visit the same code points
    #[test]
    fn backward_iteration_mirrors_forward(text in any_text()) {
        let sequence = CodePointSequence::new(&text);
        let forward: Vec<_> = sequence.iter().collect();
        let mut backward = Vec::new();
        let mut index = text.len();
        while let Some((start, ch)) = sequence.code_point_before(index) {
            backward.push((start, ch));
            index = start;
        }
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn copy_into_matches_to_array(text in any_text()) {
        let sequence = CodePointSequence::new(&text);
        let mut buffer = vec!['\0'; text.len()];
        let written = sequence.copy_into(&mut buffer, 0..text.len(), false);
        let code_points = sequence.to_array();
        prop_assert_eq!(&buffer[..written], code_points.as_slice());
        prop_assert!(written <= text.len());
    }

    /// Capitalizing twice is the same as capitalizing once
    #[test]
    fn capitalize_first_and_lowercase_rest_is_idempotent(
        word in simple_word(),
        tag in prop::sample::select(vec!["en", "tr", "de", "und"]),
    ) {
        let locale = Locale::parse(tag).unwrap();
        let once = capitalize_first_and_lowercase_rest(&word, &locale);
        let twice = capitalize_first_and_lowercase_rest(&once, &locale);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn capitalize_each_word_output_passes_the_predicate(word in simple_word()) {
        let separators = SeparatorSet::from_text(" -");
        let capitalized = capitalize_each_word(&word, &separators, &Locale::english());
        prop_assert!(is_identical_after_capitalize_each_word(&capitalized, &separators));
    }

    #[test]
    fn case_mapped_text_is_identical_after_mapping(word in simple_word()) {
        let english = Locale::english();
        prop_assert!(is_identical_after_uppercase(&english.uppercase(&word)));
        prop_assert!(is_identical_after_lowercase(&english.lowercase(&word)));
    }

    /// Only the trailing run of URL-like characters is looked at
    #[test]
    fn url_heuristic_only_sees_trailing_run(prefix in any_text(), tail in any_text()) {
        let joined = format!("{prefix} {tail}");
        prop_assert_eq!(looks_like_url(&joined), looks_like_url(&tail));
    }

    #[test]
    fn quote_heuristic_is_true_after_any_digit(text in any_text(), digit in 0u32..10) {
        let mut text = text;
        text.push(char::from_digit(digit, 10).unwrap());
        prop_assert!(is_inside_double_quote_or_after_digit(&text));
    }

    #[test]
    fn heuristics_never_panic(text in any_text()) {
        let _ = looks_like_url(&text);
        let _ = is_inside_double_quote_or_after_digit(&text);
    }
}
