//! Query results and their rendering.
//!
//! A [`QueryResult`] is the immutable output of evaluating a query against
//! a document store: the ascending set of matching line numbers, the label
//! of the expression that produced them, and a shared handle on the
//! document text so matched lines can be fetched back for display. The
//! provided [`Display`] impl renders the classic report shape; callers
//! that want a different presentation iterate the result or take
//! [`Match`] records instead.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{LinariaError, Result};
use crate::line_set::{LineNo, LineSet};

/// One matched line of a result: the 0-based line number and its text.
///
/// The flattened record handed to presentation layers that want owned,
/// serializable data rather than a borrow into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// 0-based line number.
    pub line: LineNo,
    /// The full text of that line.
    pub text: String,
}

/// The evaluated output of a query against a document store.
///
/// Immutable once constructed. The result keeps a shared reference to the
/// store's line text, so it stays renderable after the caller has moved on
/// from the store handle it evaluated against, and many results can share
/// one document without copying it.
#[derive(Debug, Clone)]
pub struct QueryResult {
    label: String,
    lines: LineSet,
    text: Arc<[String]>,
}

impl QueryResult {
    pub(crate) fn new(label: String, lines: LineSet, text: Arc<[String]>) -> Self {
        debug_assert!(
            lines.iter().all(|line| line < text.len()),
            "result lines must be valid indices into the document"
        );
        QueryResult { label, lines, text }
    }

    /// The textual form of the expression that produced this result.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The matching line numbers, ascending and duplicate-free.
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    /// Number of matching lines.
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line matched.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The text of the given 0-based line of the underlying document.
    ///
    /// The line does not have to be a match. Fails with
    /// [`LinariaError::OutOfRange`] when it is not a valid line number.
    pub fn text_of(&self, line: LineNo) -> Result<&str> {
        self.text
            .get(line)
            .map(String::as_str)
            .ok_or_else(|| LinariaError::out_of_range(line, self.text.len()))
    }

    /// Iterate over the matched lines with their text, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (LineNo, &str)> {
        self.lines.iter().map(|line| (line, self.text[line].as_str()))
    }

    /// The matched lines as owned, serializable [`Match`] records.
    pub fn matches(&self) -> Vec<Match> {
        self.iter()
            .map(|(line, text)| Match {
                line,
                text: text.to_string(),
            })
            .collect()
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "time" } else { "times" }
}

impl fmt::Display for QueryResult {
    /// The classic occurrence report, one indented line per match.
    ///
    /// Line numbers are printed 1-based for human readers; every other
    /// surface of the API is 0-based.
    ///
    /// ```text
    /// (quick & dog) occurs 1 time
    ///     (line 3) quick dog
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} occurs {} {}", self.label, self.count(), plural(self.count()))?;
        for (line, text) in self.iter() {
            write!(f, "\n\t(line {}) {}", line + 1, text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Query;
    use crate::store::DocumentStore;

    fn sample_store() -> DocumentStore {
        DocumentStore::new(["the quick fox", "the lazy dog", "quick dog"])
    }

    #[test]
    fn test_accessors() {
        let store = sample_store();
        let result = Query::word("quick").unwrap().eval(&store);
        assert_eq!(result.label(), "quick");
        assert_eq!(result.count(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.lines().to_vec(), vec![0, 2]);
    }

    #[test]
    fn test_text_of_matches_store() {
        let store = sample_store();
        let result = Query::word("dog").unwrap().eval(&store);
        assert_eq!(result.text_of(1), Ok("the lazy dog"));
        // Non-matching lines are still addressable.
        assert_eq!(result.text_of(0), Ok("the quick fox"));
        assert_eq!(
            result.text_of(5),
            Err(LinariaError::OutOfRange {
                line: 5,
                line_count: 3
            })
        );
    }

    #[test]
    fn test_result_outlives_the_store() {
        let result = {
            let store = sample_store();
            Query::word("dog").unwrap().eval(&store)
        };
        // The shared text keeps rendering working after the store is gone.
        assert_eq!(result.text_of(2), Ok("quick dog"));
    }

    #[test]
    fn test_iter_pairs_lines_with_text() {
        let store = sample_store();
        let result = Query::word("the").unwrap().eval(&store);
        let pairs: Vec<(usize, &str)> = result.iter().collect();
        assert_eq!(pairs, vec![(0, "the quick fox"), (1, "the lazy dog")]);
    }

    #[test]
    fn test_matches_are_owned_records() {
        let store = sample_store();
        let matches = Query::word("lazy").unwrap().eval(&store).matches();
        assert_eq!(
            matches,
            vec![Match {
                line: 1,
                text: "the lazy dog".to_string()
            }]
        );
    }

    #[test]
    fn test_display_single_match() {
        let store = sample_store();
        let query = Query::word("quick").unwrap() & Query::word("dog").unwrap();
        let rendered = query.eval(&store).to_string();
        assert_eq!(rendered, "(quick & dog) occurs 1 time\n\t(line 3) quick dog");
    }

    #[test]
    fn test_display_multiple_matches_pluralizes() {
        let store = sample_store();
        let rendered = Query::word("quick").unwrap().eval(&store).to_string();
        assert_eq!(
            rendered,
            "quick occurs 2 times\n\t(line 1) the quick fox\n\t(line 3) quick dog"
        );
    }

    #[test]
    fn test_display_no_matches() {
        let store = sample_store();
        let rendered = Query::word("unicorn").unwrap().eval(&store).to_string();
        assert_eq!(rendered, "unicorn occurs 0 times");
    }
}
