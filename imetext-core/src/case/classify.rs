use crate::separators::SeparatorSet;
use crate::unicode::{is_letter, is_lowercase, is_uppercase};

/// How a word is capitalized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CapitalizationType {
    /// All lowercase, mixed case, or no letters at all
    #[default]
    None,
    /// Only the first letter is uppercase
    FirstOnly,
    /// Every letter is uppercase
    All,
}

/// Classify the capitalization of `text`
///
/// Non-letters such as the apostrophe in "IT'S" or the hyphen in
/// "FULL-TIME" are transparent. A single uppercase letter counts as
/// [`CapitalizationType::FirstOnly`].
pub fn capitalization_type(text: &str) -> CapitalizationType {
    let mut chars = text.chars();
    let Some(first_letter) = chars.by_ref().find(|&ch| is_letter(ch)) else {
        return CapitalizationType::None;
    };
    // Lowercase or camel case either way
    if !is_uppercase(first_letter) {
        return CapitalizationType::None;
    }

    let mut caps_count = 1usize;
    let mut letter_count = 1usize;
    for ch in chars {
        // Both counts only grow, so once caps is past one and behind the
        // letters the answer is settled.
        if caps_count != 1 && letter_count != caps_count {
            break;
        }
        if is_uppercase(ch) {
            caps_count += 1;
            letter_count += 1;
        } else if is_letter(ch) {
            letter_count += 1;
        }
    }

    if caps_count == 1 {
        CapitalizationType::FirstOnly
    } else if letter_count == caps_count {
        CapitalizationType::All
    } else {
        CapitalizationType::None
    }
}

/// Whether uppercasing `text` would leave every letter as it is
pub fn is_identical_after_uppercase(text: &str) -> bool {
    text.chars().all(|ch| !is_letter(ch) || is_uppercase(ch))
}

/// Whether lowercasing `text` would leave every letter as it is
pub fn is_identical_after_lowercase(text: &str) -> bool {
    text.chars().all(|ch| !is_letter(ch) || is_lowercase(ch))
}

/// Whether [`capitalize_each_word`](crate::capitalize_each_word) would leave
/// `text` unchanged
///
/// The first letter and every letter right after a separator must be
/// uppercase, every other letter lowercase.
pub fn is_identical_after_capitalize_each_word(text: &str, separators: &SeparatorSet) -> bool {
    let mut needs_caps_next = true;
    for ch in text.chars() {
        if is_letter(ch) {
            let expected = if needs_caps_next {
                is_uppercase(ch)
            } else {
                is_lowercase(ch)
            };
            if !expected {
                return false;
            }
        }
        needs_caps_next = separators.contains(ch);
    }
    true
}
