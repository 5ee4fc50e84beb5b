use crate::code_point::CodePointSequence;
use crate::unicode::{is_whitespace, PERIOD, SLASH};

/// Whether `ch` can appear in the URL-ish run before the cursor
///
/// Everything from '.' to 'z': digits, both ASCII letter cases, '/', ':',
/// '=', '?', '@' and '_'. Spaces, '!', '"' and all non-ASCII end the run.
#[inline]
fn is_url_like(ch: char) -> bool {
    (PERIOD..='z').contains(&ch)
}

/// Whether the text before the cursor looks like a URL
///
/// Only the trailing run of URL-like characters is examined. It looks like a
/// URL when it contains "//", when it starts with "www" and has a period
/// somewhere, when it starts with a single slash at the start of the text or
/// after whitespace, or when it has both a period and a slash.
///
/// This is approximate: "abc./def" and ".abc/def" both look like URLs.
pub fn looks_like_url(text: &str) -> bool {
    let sequence = CodePointSequence::new(text);
    let mut index = text.len();
    if index == 0 {
        return false;
    }

    let mut w_count = 0usize;
    let mut slash_count = 0usize;
    let mut has_slash = false;
    let mut has_period = false;
    // Last code point looked at; the one that ended the run, if any
    let mut last_seen = None;

    while let Some((start, ch)) = sequence.code_point_before(index) {
        last_seen = Some(ch);
        if !is_url_like(ch) {
            break;
        }
        if ch == PERIOD {
            has_period = true;
        }
        if ch == SLASH {
            has_slash = true;
            slash_count += 1;
            if slash_count == 2 {
                return true;
            }
        } else {
            slash_count = 0;
        }
        if ch == 'w' {
            w_count += 1;
        } else {
            w_count = 0;
        }
        index = start;
    }

    // "www" then a period somewhere after it
    if w_count >= 3 && has_period {
        return true;
    }
    // Run starts with one slash, at the start of text or after whitespace
    if slash_count == 1 && (index == 0 || last_seen.is_some_and(is_whitespace)) {
        return true;
    }
    has_period && has_slash
}
