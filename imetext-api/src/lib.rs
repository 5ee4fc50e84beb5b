//! Public API for imetext
//!
//! [`TextProcessor`] binds a locale and a word separator set from a
//! [`Config`] and exposes the capitalization and cursor-context operations
//! of `imetext-core` with those settings applied.
//!
//! ```rust
//! use imetext_api::{CapitalizationType, TextProcessor};
//!
//! let processor = TextProcessor::with_locale("en").unwrap();
//! assert_eq!(processor.capitalization_type("Hello"), CapitalizationType::FirstOnly);
//! assert_eq!(processor.capitalize_each_word("new york-based"), "New York-Based");
//! assert!(processor.analyze_before_cursor("visit www.example.com").looks_like_url);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use imetext_core::{
    capitalization_type, capitalize_each_word, capitalize_first_and_lowercase_rest,
    capitalize_first_code_point, code_point_count, is_identical_after_capitalize_each_word,
    is_identical_after_lowercase, is_identical_after_uppercase, uppercase_code_point, CaseMapper,
    Locale, SeparatorSet,
};
use tracing::{debug, trace};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{CursorContext, WordCase};
pub use error::{ApiError, Result};
pub use imetext_core::CapitalizationType;

/// Capitalization and cursor-context operations under one configuration
#[derive(Debug, Clone)]
pub struct TextProcessor {
    config: Config,
    locale: Locale,
    separators: SeparatorSet,
}

impl TextProcessor {
    /// Create a processor from the embedded defaults
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a processor for a locale tag, other settings from the defaults
    pub fn with_locale(tag: &str) -> Result<Self> {
        let config = Config::builder().locale(tag).build()?;
        Self::with_config(config)
    }

    /// Create a processor from a configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let locale = config.parsed_locale()?;
        let separators = SeparatorSet::from_text(config.word_separators());
        debug!(
            locale = %locale,
            separators = separators.len(),
            "created text processor"
        );
        Ok(Self {
            config,
            locale,
            separators,
        })
    }

    /// The configuration this processor was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locale used for case mapping
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Word separators used for per-word capitalization
    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Capitalization category of `word`
    pub fn capitalization_type(&self, word: &str) -> CapitalizationType {
        capitalization_type(word)
    }

    /// Whether uppercasing `text` changes no letter
    pub fn is_identical_after_uppercase(&self, text: &str) -> bool {
        is_identical_after_uppercase(text)
    }

    /// Whether lowercasing `text` changes no letter
    pub fn is_identical_after_lowercase(&self, text: &str) -> bool {
        is_identical_after_lowercase(text)
    }

    /// Whether [`capitalize_each_word`](Self::capitalize_each_word) would
    /// leave `text` unchanged
    pub fn is_identical_after_capitalize_each_word(&self, text: &str) -> bool {
        is_identical_after_capitalize_each_word(text, &self.separators)
    }

    /// Uppercase the first code point only
    pub fn capitalize_first_code_point(&self, text: &str) -> String {
        capitalize_first_code_point(text, &self.locale)
    }

    /// Uppercase the first code point and lowercase the rest
    pub fn capitalize_first_and_lowercase_rest(&self, text: &str) -> String {
        capitalize_first_and_lowercase_rest(text, &self.locale)
    }

    /// Capitalize every word, words ending at the configured separators
    pub fn capitalize_each_word(&self, text: &str) -> String {
        capitalize_each_word(text, &self.separators, &self.locale)
    }

    /// Re-apply a capitalization category to `word`
    ///
    /// [`CapitalizationType::None`] leaves the word as typed.
    pub fn capitalize(&self, word: &str, capitalization: CapitalizationType) -> String {
        match capitalization {
            CapitalizationType::None => word.to_string(),
            CapitalizationType::FirstOnly => self.capitalize_first_and_lowercase_rest(word),
            CapitalizationType::All => self.locale.uppercase(word),
        }
    }

    /// Uppercase one code point when `needs_upper` is set
    ///
    /// `None` when the uppercase form is not a single code point.
    pub fn uppercase_code_point(&self, code_point: char, needs_upper: bool) -> Option<char> {
        uppercase_code_point(code_point, needs_upper, &self.locale)
    }

    /// Case profile of `word`
    pub fn describe_word(&self, word: &str) -> WordCase {
        let described = WordCase {
            capitalization: capitalization_type(word),
            identical_after_uppercase: is_identical_after_uppercase(word),
            identical_after_lowercase: is_identical_after_lowercase(word),
            identical_after_capitalize_each_word: self.is_identical_after_capitalize_each_word(word),
            code_points: code_point_count(word),
        };
        trace!(word, ?described, "described word");
        described
    }

    /// Classify the text just before the cursor
    pub fn analyze_before_cursor(&self, text: &str) -> CursorContext {
        let context = CursorContext::analyze(text);
        trace!(?context, "analyzed text before cursor");
        context
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new().expect("default processor creation should not fail")
    }
}

// Convenience functions

/// Classify the text before the cursor; needs no configuration
pub fn analyze_before_cursor(text: &str) -> CursorContext {
    CursorContext::analyze(text)
}

/// Case profile of `word` under the default configuration
pub fn describe_word(word: &str) -> Result<WordCase> {
    let processor = TextProcessor::new()?;
    Ok(processor.describe_word(word))
}
