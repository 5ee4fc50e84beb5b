use crate::code_point::CodePointSequence;
use crate::unicode::{is_digit, is_whitespace, DOUBLE_QUOTE};

/// Whether the cursor sits inside a double quotation or right after a digit
///
/// Decides which side of an auto-inserted double quote gets the space. The
/// nearest double quote decides: followed by whitespace it was a closing
/// quote, preceded by whitespace it was an opening one. Right after a digit
/// the answer is always `true`, since `5"` is inches far more often than a
/// quotation.
pub fn is_inside_double_quote_or_after_digit(text: &str) -> bool {
    let sequence = CodePointSequence::new(text);
    let Some((_, last)) = sequence.code_point_before(text.len()) else {
        return false;
    };
    if is_digit(last) {
        return true;
    }

    let mut index = text.len();
    // The code point right after the current one
    let mut following: Option<char> = None;
    let mut current = last;
    while let Some((start, ch)) = sequence.code_point_before(index) {
        current = ch;
        if ch == DOUBLE_QUOTE && following.is_some_and(is_whitespace) {
            return false;
        }
        if is_whitespace(ch) && following == Some(DOUBLE_QUOTE) {
            return true;
        }
        following = Some(ch);
        index = start;
    }

    // Start of text: only a leading quote opens a quotation
    current == DOUBLE_QUOTE
}
