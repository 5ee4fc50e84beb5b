use std::borrow::Cow;

use super::CaseMapper;
use crate::code_point::{code_point_count, single_code_point_string};
use crate::separators::SeparatorSet;

/// Byte offset just past the first code point, or `None` for text of at
/// most one code point
fn second_code_point_offset(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    chars.next()?;
    chars.next().map(|(offset, _)| offset)
}

/// Uppercase the first code point and keep the rest as is
///
/// Text of zero or one code point is uppercased whole.
pub fn capitalize_first_code_point<M: CaseMapper + ?Sized>(text: &str, mapper: &M) -> String {
    let Some(cutoff) = second_code_point_offset(text) else {
        return mapper.uppercase(text);
    };
    let (head, rest) = text.split_at(cutoff);
    let mut capitalized = mapper.uppercase(head);
    capitalized.push_str(rest);
    capitalized
}

/// Uppercase the first code point and lowercase the rest
///
/// Known limitations, kept on purpose:
/// - Greek gets uppercase rather than title case for the first letter.
/// - Serbian "lj" written as two code points becomes "Lj" where the
///   digraph wants different handling in upper and title case.
/// - Dutch "ij" written as two code points becomes "Ij" rather than "IJ".
///   The single-code-point ligature is handled correctly.
pub fn capitalize_first_and_lowercase_rest<M: CaseMapper + ?Sized>(
    text: &str,
    mapper: &M,
) -> String {
    let Some(cutoff) = second_code_point_offset(text) else {
        return mapper.uppercase(text);
    };
    let (head, rest) = text.split_at(cutoff);
    let mut capitalized = mapper.uppercase(head);
    capitalized.push_str(&mapper.lowercase(rest));
    capitalized
}

/// Uppercase the first code point of every word and lowercase the others
///
/// A word starts at the beginning of the text and after each code point in
/// `separators`. Each code point is mapped on its own, so the Dutch "ij"
/// limitation of [`capitalize_first_and_lowercase_rest`] applies here too.
pub fn capitalize_each_word<M: CaseMapper + ?Sized>(
    text: &str,
    separators: &SeparatorSet,
    mapper: &M,
) -> String {
    let mut capitalized = String::with_capacity(text.len());
    let mut needs_caps_next = true;
    let mut buffer = [0u8; 4];
    for ch in text.chars() {
        let single: &str = ch.encode_utf8(&mut buffer);
        if needs_caps_next {
            capitalized.push_str(&mapper.uppercase(single));
        } else {
            capitalized.push_str(&mapper.lowercase(single));
        }
        needs_caps_next = separators.contains(ch);
    }
    capitalized
}

/// Uppercase `text` only when `needs_upper` is set
pub fn uppercase_if<'a, M: CaseMapper + ?Sized>(
    text: &'a str,
    needs_upper: bool,
    mapper: &M,
) -> Cow<'a, str> {
    if needs_upper {
        Cow::Owned(mapper.uppercase(text))
    } else {
        Cow::Borrowed(text)
    }
}

/// Uppercase a single code point
///
/// Control characters below U+0020 and `needs_upper == false` pass through
/// unchanged. Returns `None` when the mapping does not produce exactly one
/// code point, as for "ß".
pub fn uppercase_code_point<M: CaseMapper + ?Sized>(
    code_point: char,
    needs_upper: bool,
    mapper: &M,
) -> Option<char> {
    if code_point < ' ' || !needs_upper {
        return Some(code_point);
    }
    let upper = mapper.uppercase(&single_code_point_string(code_point));
    if code_point_count(&upper) == 1 {
        upper.chars().next()
    } else {
        None
    }
}
