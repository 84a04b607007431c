//! Ascending, duplicate-free sets of line numbers.
//!
//! A [`LineSet`] is the posting-list currency of the engine: the index maps
//! each word to one, and every query evaluation step produces one. Sets are
//! backed by a shared sorted slice, so cloning a set (and handing an index
//! posting to a result) copies a reference, not the data. Once built, a set
//! is never mutated; combining sets always produces a new one.

use std::sync::Arc;

use lazy_static::lazy_static;

/// A 0-based line number within a document.
pub type LineNo = usize;

lazy_static! {
    // Storage for the empty set, allocated once and shared by every
    // lookup of an absent word.
    static ref EMPTY: Arc<[LineNo]> = Arc::from(Vec::new());
}

/// An immutable set of line numbers in strictly ascending order.
///
/// Cloning is O(1): the underlying slice is reference-counted and shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    lines: Arc<[LineNo]>,
}

impl LineSet {
    /// The empty set. All empty sets share one allocation.
    pub fn empty() -> Self {
        LineSet {
            lines: EMPTY.clone(),
        }
    }

    /// Build a set from a vector that is already sorted and deduplicated.
    pub(crate) fn from_sorted(lines: Vec<LineNo>) -> Self {
        debug_assert!(
            lines.windows(2).all(|w| w[0] < w[1]),
            "line numbers must be strictly ascending"
        );
        if lines.is_empty() {
            return Self::empty();
        }
        LineSet {
            lines: Arc::from(lines),
        }
    }

    /// Number of lines in the set.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the set contains no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the set contains `line`.
    pub fn contains(&self, line: LineNo) -> bool {
        self.lines.binary_search(&line).is_ok()
    }

    /// Iterate over the lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LineNo> {
        self.lines.iter().copied()
    }

    /// View the set as a sorted slice.
    pub fn as_slice(&self) -> &[LineNo] {
        &self.lines
    }

    /// Copy the set into a plain vector.
    pub fn to_vec(&self) -> Vec<LineNo> {
        self.lines.to_vec()
    }

    /// The union of two sets, by linear merge of the sorted slices.
    pub fn union(&self, other: &LineSet) -> LineSet {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let (a, b) = (self.as_slice(), other.as_slice());
        let mut merged = Vec::with_capacity(a.len().max(b.len()));
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => {
                    merged.push(a[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(b[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    merged.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&a[i..]);
        merged.extend_from_slice(&b[j..]);
        LineSet::from_sorted(merged)
    }

    /// The intersection of two sets, by linear merge of the sorted slices.
    pub fn intersect(&self, other: &LineSet) -> LineSet {
        if self.is_empty() || other.is_empty() {
            return LineSet::empty();
        }

        let (a, b) = (self.as_slice(), other.as_slice());
        let mut merged = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    merged.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        LineSet::from_sorted(merged)
    }

    /// The complement of the set within `[0, line_count)`.
    ///
    /// Members outside that range (there are none when the set came from an
    /// index over a `line_count`-line document) are ignored.
    pub fn complement(&self, line_count: usize) -> LineSet {
        let members = self.as_slice();
        let mut out = Vec::with_capacity(line_count.saturating_sub(members.len()));
        let mut i = 0;
        for line in 0..line_count {
            if i < members.len() && members[i] == line {
                i += 1;
            } else {
                out.push(line);
            }
        }
        LineSet::from_sorted(out)
    }
}

impl Default for LineSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<LineNo>> for LineSet {
    /// Build a set from arbitrary input; sorts and deduplicates.
    fn from(mut lines: Vec<LineNo>) -> Self {
        lines.sort_unstable();
        lines.dedup();
        LineSet::from_sorted(lines)
    }
}

impl FromIterator<LineNo> for LineSet {
    fn from_iter<I: IntoIterator<Item = LineNo>>(iter: I) -> Self {
        LineSet::from(iter.into_iter().collect::<Vec<_>>())
    }
}
