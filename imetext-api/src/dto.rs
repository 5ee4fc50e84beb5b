//! Serializable results handed back to the input pipeline

use imetext_core::util::trailing_single_quote_count;
use imetext_core::{is_inside_double_quote_or_after_digit, looks_like_url, CapitalizationType};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the text before the cursor suggests about the next keystroke
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorContext {
    /// The trailing run looks like a URL, so autocorrect should back off
    pub looks_like_url: bool,
    /// A double quote typed now would close a quotation, or follows a digit
    pub inside_double_quote_or_after_digit: bool,
    /// Apostrophes at the very end of the text
    pub trailing_single_quotes: usize,
}

impl CursorContext {
    /// Run every cursor heuristic over `text`
    pub fn analyze(text: &str) -> Self {
        Self {
            looks_like_url: looks_like_url(text),
            inside_double_quote_or_after_digit: is_inside_double_quote_or_after_digit(text),
            trailing_single_quotes: trailing_single_quote_count(text),
        }
    }

    /// Render as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Case profile of a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCase {
    /// Capitalization category
    pub capitalization: CapitalizationType,
    /// Uppercasing would change nothing
    pub identical_after_uppercase: bool,
    /// Lowercasing would change nothing
    pub identical_after_lowercase: bool,
    /// Capitalizing each word would change nothing
    pub identical_after_capitalize_each_word: bool,
    /// Length in code points
    pub code_points: usize,
}

impl WordCase {
    /// Render as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
