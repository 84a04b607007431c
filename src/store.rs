//! The document store: an ordered sequence of lines and the inverted index
//! over their words.
//!
//! A [`DocumentStore`] is built once from the lines handed over by whatever
//! loaded the document, and is read-only from then on. It is the only
//! component that sees raw text; queries go through [`lines_for`] and
//! results fetch text back through a shared reference to the line storage.
//!
//! [`lines_for`]: DocumentStore::lines_for

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::error::{LinariaError, Result};
use crate::line_set::{LineNo, LineSet};

/// Statistics about a built index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of lines in the document (empty lines included).
    pub line_count: usize,
    /// Total number of tokens seen while indexing, duplicates included.
    pub token_count: usize,
    /// Number of distinct words in the index.
    pub distinct_words: usize,
}

/// An immutable document plus the inverted index over its words.
///
/// The index maps each distinct word to the ascending set of line numbers
/// it occurs on. Indexing splits lines on whitespace and records each word
/// exactly as written: no stemming and no case folding, so `"Dog"` and
/// `"dog"` are different words. Line numbers are 0-based.
///
/// Construction is the only write; afterwards the store can be shared
/// freely across threads and evaluated against concurrently.
///
/// # Examples
///
/// ```
/// use linaria::DocumentStore;
///
/// let store = DocumentStore::new(["the quick fox", "the lazy dog"]);
/// assert_eq!(store.line_count(), 2);
/// assert_eq!(store.lines_for("the").to_vec(), vec![0, 1]);
/// assert!(store.lines_for("cat").is_empty());
/// ```
pub struct DocumentStore {
    /// The document text, shared with every result produced from this store.
    lines: Arc<[String]>,
    /// Word -> ascending set of line numbers.
    index: AHashMap<String, LineSet>,
    /// Counters collected while building.
    stats: IndexStats,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("stats", &self.stats)
            .finish()
    }
}

impl DocumentStore {
    /// Build a store from an ordered sequence of lines.
    ///
    /// Runs in time linear in the total number of tokens. Empty lines are
    /// kept (they occupy a line number) but contribute no index entries.
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();

        let mut postings: AHashMap<String, Vec<LineNo>> = AHashMap::new();
        let mut token_count = 0;
        for (line_no, line) in lines.iter().enumerate() {
            for token in analysis::tokenize(line) {
                token_count += 1;
                match postings.get_mut(token) {
                    Some(posting) => {
                        // Lines arrive in order, so a repeated word on the
                        // same line is always at the tail.
                        if posting.last() != Some(&line_no) {
                            posting.push(line_no);
                        }
                    }
                    None => {
                        postings.insert(token.to_string(), vec![line_no]);
                    }
                }
            }
        }

        let index: AHashMap<String, LineSet> = postings
            .into_iter()
            .map(|(word, posting)| (word, LineSet::from_sorted(posting)))
            .collect();

        let stats = IndexStats {
            line_count: lines.len(),
            token_count,
            distinct_words: index.len(),
        };
        debug!(
            "indexed {} line(s): {} token(s), {} distinct word(s)",
            stats.line_count, stats.token_count, stats.distinct_words
        );

        DocumentStore {
            lines: Arc::from(lines),
            index,
            stats,
        }
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The document lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The text of the given 0-based line.
    ///
    /// Fails with [`LinariaError::OutOfRange`] when `line` is not a valid
    /// line number.
    pub fn text_of(&self, line: LineNo) -> Result<&str> {
        self.lines
            .get(line)
            .map(String::as_str)
            .ok_or_else(|| LinariaError::out_of_range(line, self.lines.len()))
    }

    /// The set of lines the given word occurs on.
    ///
    /// Absence is not an error: a word that never occurs yields the empty
    /// set. The returned set shares the index posting, so this is O(1).
    pub fn lines_for(&self, word: &str) -> LineSet {
        self.index.get(word).cloned().unwrap_or_else(LineSet::empty)
    }

    /// Whether the word occurs anywhere in the document.
    pub fn contains_word(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words in the index.
    pub fn distinct_words(&self) -> usize {
        self.index.len()
    }

    /// Counters collected while the index was built.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// A shared handle on the line storage, for results to render from.
    pub(crate) fn shared_lines(&self) -> Arc<[String]> {
        Arc::clone(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> DocumentStore {
        DocumentStore::new(["the quick fox", "the lazy dog", "quick dog"])
    }

    #[test]
    fn test_index_build() {
        let store = sample_store();
        assert_eq!(store.line_count(), 3);
        assert_eq!(store.lines_for("the").to_vec(), vec![0, 1]);
        assert_eq!(store.lines_for("quick").to_vec(), vec![0, 2]);
        assert_eq!(store.lines_for("dog").to_vec(), vec![1, 2]);
        assert_eq!(store.lines_for("fox").to_vec(), vec![0]);
    }

    #[test]
    fn test_absent_word_is_empty_not_an_error() {
        let store = sample_store();
        assert!(store.lines_for("cat").is_empty());
        assert!(!store.contains_word("cat"));
        assert!(store.contains_word("lazy"));
    }

    #[test]
    fn test_repeated_word_on_one_line_recorded_once() {
        let store = DocumentStore::new(["rose is a rose is a rose"]);
        assert_eq!(store.lines_for("rose").to_vec(), vec![0]);
        assert_eq!(store.stats().token_count, 7);
        assert_eq!(store.stats().distinct_words, 3);
    }

    #[test]
    fn test_empty_lines_are_kept_but_not_indexed() {
        let store = DocumentStore::new(["alpha", "", "  ", "alpha beta"]);
        assert_eq!(store.line_count(), 4);
        assert_eq!(store.text_of(1), Ok(""));
        assert_eq!(store.lines_for("alpha").to_vec(), vec![0, 3]);
        assert_eq!(store.stats().token_count, 3);
    }

    #[test]
    fn test_text_of() {
        let store = sample_store();
        assert_eq!(store.text_of(0), Ok("the quick fox"));
        assert_eq!(store.text_of(2), Ok("quick dog"));
        assert_eq!(
            store.text_of(5),
            Err(LinariaError::OutOfRange {
                line: 5,
                line_count: 3
            })
        );
    }

    #[test]
    fn test_empty_store() {
        let store = DocumentStore::new(Vec::<String>::new());
        assert_eq!(store.line_count(), 0);
        assert!(store.lines_for("anything").is_empty());
        assert_eq!(store.stats(), &IndexStats::default());
        assert!(store.text_of(0).is_err());
    }

    #[test]
    fn test_case_and_punctuation_are_significant() {
        let store = DocumentStore::new(["Dog dog", "dog."]);
        assert_eq!(store.lines_for("Dog").to_vec(), vec![0]);
        assert_eq!(store.lines_for("dog").to_vec(), vec![0]);
        assert_eq!(store.lines_for("dog.").to_vec(), vec![1]);
    }

    #[test]
    fn test_stats() {
        let store = sample_store();
        let stats = store.stats();
        assert_eq!(stats.line_count, 3);
        assert_eq!(stats.token_count, 8);
        assert_eq!(stats.distinct_words, 5);
        assert_eq!(store.distinct_words(), 5);
    }
}
