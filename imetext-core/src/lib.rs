//! Code-point aware text primitives for an input-method pipeline
//!
//! This crate answers the small questions an input method asks on every
//! keystroke: how is this word capitalized, what does it look like
//! re-capitalized under a locale, and does the text before the cursor look
//! like a URL or an open quotation.
//!
//! Every operation iterates by Unicode code point (`char`), never by byte,
//! so multi-byte letters and emoji are never split.
//!
//! # Example
//!
//! ```rust
//! use imetext_core::{capitalization_type, looks_like_url, CapitalizationType};
//! use imetext_core::{capitalize_each_word, Locale, SeparatorSet};
//!
//! assert_eq!(capitalization_type("IT'S"), CapitalizationType::All);
//! assert!(looks_like_url("check www.example.com"));
//!
//! let separators = SeparatorSet::from_text(" ");
//! let english = Locale::english();
//! assert_eq!(capitalize_each_word("hello world", &separators, &english), "Hello World");
//! ```

#![warn(missing_docs)]

pub mod case;
pub mod code_point;
pub mod context;
pub mod error;
pub mod separators;
pub mod unicode;
pub mod util;

pub use case::{
    capitalization_type, capitalize_each_word, capitalize_first_and_lowercase_rest,
    capitalize_first_code_point, is_identical_after_capitalize_each_word,
    is_identical_after_lowercase, is_identical_after_uppercase, uppercase_code_point,
    uppercase_if, CapitalizationType, CaseMapper, Locale,
};
pub use code_point::{
    code_point_count, single_code_point_string, string_from_null_terminated_code_points,
    to_code_point_array, to_sorted_code_point_array, CodePointSequence,
};
pub use context::{is_inside_double_quote_or_after_digit, looks_like_url};
pub use error::{CoreError, Result};
pub use separators::SeparatorSet;
