//! Word separator sets for per-word capitalization

use smallvec::SmallVec;

use crate::code_point::to_sorted_code_point_array;

/// Sorted, de-duplicated set of code points that end a word
///
/// Membership is a binary search; sets are small in practice and stay
/// inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SeparatorSet {
    sorted: SmallVec<[char; 16]>,
}

impl SeparatorSet {
    /// Empty set: every word boundary is ignored
    pub fn new() -> Self {
        Self::default()
    }

    /// Take code points that the caller has already sorted and de-duplicated
    ///
    /// Unsorted input breaks membership tests; this is checked in debug
    /// builds only.
    pub fn from_sorted(sorted: impl Into<Vec<char>>) -> Self {
        let sorted = sorted.into();
        debug_assert!(
            sorted.windows(2).all(|pair| pair[0] < pair[1]),
            "separator code points must be strictly ascending"
        );
        Self {
            sorted: SmallVec::from_vec(sorted),
        }
    }

    /// Every code point of `text` becomes a separator
    pub fn from_text(text: &str) -> Self {
        let mut sorted = to_sorted_code_point_array(text);
        sorted.dedup();
        Self::from_sorted(sorted)
    }

    /// Whether `ch` ends a word
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.sorted.binary_search(&ch).is_ok()
    }

    /// Number of separators
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Separators in ascending order
    pub fn as_slice(&self) -> &[char] {
        &self.sorted
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut sorted: Vec<char> = iter.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self::from_sorted(sorted)
    }
}
