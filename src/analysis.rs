//! Text analysis for linaria.
//!
//! The engine uses a single, deliberately simple analysis rule: a token is a
//! maximal run of non-whitespace characters. There is no stemming, no case
//! folding and no length filtering, so a word matches exactly the strings
//! that appear between whitespace in the document. The same rule is applied
//! when the index is built and when literal word queries are written, which
//! keeps indexing and querying consistent.
//!
//! Tokenization borrows from the input and never allocates.

/// Split a line of text into tokens.
///
/// Tokens are yielded in order of appearance. Whitespace is recognized with
/// Unicode `White_Space` semantics, so tabs, non-breaking spaces and other
/// exotic separators all delimit tokens. An empty or all-whitespace line
/// yields no tokens.
///
/// # Examples
///
/// ```
/// let tokens: Vec<&str> = linaria::analysis::tokenize("the quick   fox").collect();
/// assert_eq!(tokens, vec!["the", "quick", "fox"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
