//! Character properties shared by every classifier
//!
//! Letters and digits are decided by general category rather than by the
//! broader `Alphabetic`/`Numeric` properties of `char`: a combining mark is
//! alphabetic but is not a letter, and a superscript two is numeric but is
//! not a decimal digit.

use unicode_general_category::{get_general_category, GeneralCategory};

/// ASCII double quote
pub const DOUBLE_QUOTE: char = '"';
/// ASCII apostrophe
pub const SINGLE_QUOTE: char = '\'';
/// Full stop
pub const PERIOD: char = '.';
/// Solidus
pub const SLASH: char = '/';

/// Letter of any case or script (general category `L*`)
#[inline]
pub fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Unicode `Uppercase` property
#[inline]
pub fn is_uppercase(ch: char) -> bool {
    ch.is_uppercase()
}

/// Unicode `Lowercase` property
#[inline]
pub fn is_lowercase(ch: char) -> bool {
    ch.is_lowercase()
}

/// Decimal digit (general category `Nd`) in any script
#[inline]
pub fn is_digit(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_digit();
    }
    get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Breaking whitespace
///
/// No-break spaces glue words together, so they are not whitespace here.
/// NEL is left out and the information separators U+001C..U+001F are in.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    match ch {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Simple one-to-one lowercase mapping, blind to locale
///
/// Where the full mapping expands (U+0130 becomes `i` plus a combining dot)
/// the leading code point is kept, which is the simple mapping.
#[inline]
pub fn simple_lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}
