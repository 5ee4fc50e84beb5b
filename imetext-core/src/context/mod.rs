//! Heuristics over the text just before the cursor
//!
//! Both classifiers walk backward one code point at a time from the end of
//! the text and stop at the first character that settles the answer. They
//! run on every keystroke, so neither allocates.

mod quote;
mod url;

pub use quote::is_inside_double_quote_or_after_digit;
pub use url::looks_like_url;
