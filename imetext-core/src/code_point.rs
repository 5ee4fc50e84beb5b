//! Code-point granular access to UTF-8 text
//!
//! Offsets are byte offsets into the underlying `&str` and must sit on char
//! boundaries. Every step moves by exactly one code point, whatever its
//! encoded width.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::unicode::simple_lowercase;

/// Read-only, code-point view over a text span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointSequence<'a> {
    text: &'a str,
}

impl<'a> CodePointSequence<'a> {
    /// Wrap `text`
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The underlying text
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of code points
    pub fn count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of code points in the byte range `range`
    ///
    /// # Panics
    /// If either end of `range` is not a char boundary inside the text.
    pub fn count_in(&self, range: Range<usize>) -> usize {
        self.text[range].chars().count()
    }

    /// Code point starting at byte `index`, or `None` at the end of the text
    ///
    /// # Panics
    /// If `index` is not a char boundary.
    pub fn code_point_at(&self, index: usize) -> Option<char> {
        self.text[index..].chars().next()
    }

    /// Code point ending at byte `index` together with its start offset
    ///
    /// This is the step-back primitive the backward scanners are built on.
    /// Returns `None` at the start of the text.
    ///
    /// # Panics
    /// If `index` is not a char boundary.
    pub fn code_point_before(&self, index: usize) -> Option<(usize, char)> {
        let ch = self.text[..index].chars().next_back()?;
        Some((index - ch.len_utf8(), ch))
    }

    /// Byte offset `delta` code points away from `index`
    ///
    /// Returns `None` when that walks off either end of the text.
    ///
    /// # Panics
    /// If `index` is not a char boundary.
    pub fn offset_by_code_points(&self, index: usize, delta: isize) -> Option<usize> {
        let mut offset = index;
        if delta >= 0 {
            for _ in 0..delta {
                offset += self.code_point_at(offset)?.len_utf8();
            }
        } else {
            for _ in 0..delta.unsigned_abs() {
                offset = self.code_point_before(offset)?.0;
            }
        }
        Some(offset)
    }

    /// Double-ended iterator over `(byte_offset, code_point)`
    pub fn iter(&self) -> CodePoints<'a> {
        CodePoints {
            text: self.text,
            front: 0,
            back: self.text.len(),
        }
    }

    /// All code points as a dense array
    pub fn to_array(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Code points of the byte range `range` as a dense array
    ///
    /// The result holds exactly as many entries as there are code points in
    /// the range, which is never more than the range's byte length.
    ///
    /// # Panics
    /// If either end of `range` is not a char boundary inside the text.
    pub fn to_array_in(&self, range: Range<usize>) -> Vec<char> {
        if self.text.is_empty() {
            return Vec::new();
        }
        let mut code_points = vec!['\0'; self.count_in(range.clone())];
        let written = self.copy_into(&mut code_points, range, false);
        debug_assert_eq!(written, code_points.len());
        code_points
    }

    /// Write the code points of `range` into `dest` and return how many were
    /// written
    ///
    /// With `downcase` each code point goes through the simple lowercase
    /// mapping first. That mapping ignores locale and is wrong for some
    /// languages; callers that care must use a [`CaseMapper`] instead.
    ///
    /// `dest` is never grown. Size it with [`count_in`](Self::count_in).
    ///
    /// # Panics
    /// If `dest` is shorter than the number of code points in `range`, or if
    /// either end of `range` is not a char boundary inside the text.
    ///
    /// [`CaseMapper`]: crate::CaseMapper
    pub fn copy_into(&self, dest: &mut [char], range: Range<usize>, downcase: bool) -> usize {
        let span = &self.text[range];
        let mut written = 0;
        for ch in span.chars() {
            assert!(
                written < dest.len(),
                "destination holds {} code points but the range has more",
                dest.len()
            );
            dest[written] = if downcase { simple_lowercase(ch) } else { ch };
            written += 1;
        }
        written
    }

    /// Code points sorted ascending, duplicates kept
    pub fn sorted(&self) -> Vec<char> {
        let mut code_points = self.to_array();
        code_points.sort_unstable();
        code_points
    }
}

impl<'a> From<&'a str> for CodePointSequence<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> IntoIterator for CodePointSequence<'a> {
    type Item = (usize, char);
    type IntoIter = CodePoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`CodePointSequence::iter`]
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    text: &'a str,
    front: usize,
    back: usize,
}

impl Iterator for CodePoints<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let ch = self.text[self.front..self.back].chars().next()?;
        let offset = self.front;
        self.front += ch.len_utf8();
        Some((offset, ch))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        ((remaining + 3) / 4, Some(remaining))
    }
}

impl DoubleEndedIterator for CodePoints<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let ch = self.text[self.front..self.back].chars().next_back()?;
        self.back -= ch.len_utf8();
        Some((self.back, ch))
    }
}

impl FusedIterator for CodePoints<'_> {}

/// Number of code points in `text`; zero for the empty string
pub fn code_point_count(text: &str) -> usize {
    CodePointSequence::new(text).count()
}

/// All code points of `text`
pub fn to_code_point_array(text: &str) -> Vec<char> {
    CodePointSequence::new(text).to_array()
}

/// Code points of `text` sorted ascending
pub fn to_sorted_code_point_array(text: &str) -> Vec<char> {
    CodePointSequence::new(text).sorted()
}

/// Minimal text holding exactly `code_point`
pub fn single_code_point_string(code_point: char) -> String {
    let mut text = String::with_capacity(code_point.len_utf8());
    text.push(code_point);
    text
}

/// Rebuild text from a buffer whose logical end is marked by `'\0'`
///
/// Without a terminator the whole buffer is used.
pub fn string_from_null_terminated_code_points(code_points: &[char]) -> String {
    let length = code_points
        .iter()
        .position(|&ch| ch == '\0')
        .unwrap_or(code_points.len());
    code_points[..length].iter().collect()
}
