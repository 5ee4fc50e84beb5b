//! Small text helpers used around the input pipeline

pub mod comma_text;
mod dedup;
pub mod hex;
mod stringizer;

pub use dedup::remove_duplicates;
pub use stringizer::{DisplayStringizer, NullableStringizer, Stringizer};

use crate::unicode::{is_whitespace, SINGLE_QUOTE};

/// Whether `text` equals one of `array`
pub fn contains_in_array(text: &str, array: &[&str]) -> bool {
    array.iter().any(|element| *element == text)
}

/// Whether `text` is empty or holds only whitespace
pub fn is_empty_or_whitespace(text: &str) -> bool {
    text.chars().all(is_whitespace)
}

/// Number of ASCII apostrophes at the end of `text`
pub fn trailing_single_quote_count(text: &str) -> usize {
    text.chars().rev().take_while(|&ch| ch == SINGLE_QUOTE).count()
}
