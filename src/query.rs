//! Boolean query expressions over a document store.
//!
//! A query is a tree (in general a DAG) of [`QueryNode`]s: word leaves
//! combined with NOT, AND and OR. User code works with the [`Query`]
//! handle, which wraps a shared node and composes through the standard
//! operator traits: `!q` complements a query, `a & b` intersects and
//! `a | b` unions. Composition never consumes or mutates the operand
//! expressions; it only takes new references to them, so any subquery can
//! keep being reused and combined after it has been embedded in a larger
//! one.
//!
//! Evaluation is a pure function of the expression and the store: it
//! mutates neither, and evaluating the same handle against the same store
//! any number of times, from any number of threads, yields the same result.

use std::fmt;
use std::ops;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{LinariaError, Result};
use crate::result::QueryResult;
use crate::store::DocumentStore;

/// One node of a query expression.
///
/// The variant set is closed: every operation on queries matches
/// exhaustively over these four cases, so a new operator kind is a
/// compile-time-checked change. Composite nodes hold their operands behind
/// `Arc`, which is what lets expressions share subtrees.
#[derive(Debug)]
pub enum QueryNode {
    /// Matches the lines a single word occurs on.
    Word(String),
    /// Matches the lines its operand does not match.
    Not(Arc<QueryNode>),
    /// Matches the lines both operands match.
    And(Arc<QueryNode>, Arc<QueryNode>),
    /// Matches the lines either operand matches.
    Or(Arc<QueryNode>, Arc<QueryNode>),
}

impl QueryNode {
    /// Evaluate this expression against a store.
    ///
    /// `Word` looks its word up in the index (sharing the posting, not
    /// copying it); `And`/`Or` merge the operand results; `Not` complements
    /// its operand's result within `[0, line_count)`.
    pub fn eval(&self, store: &DocumentStore) -> QueryResult {
        match self {
            QueryNode::Word(word) => {
                QueryResult::new(word.clone(), store.lines_for(word), store.shared_lines())
            }
            QueryNode::Not(operand) => {
                let operand = operand.eval(store);
                let lines = operand.lines().complement(store.line_count());
                QueryResult::new(self.rep(), lines, store.shared_lines())
            }
            QueryNode::And(left, right) => {
                let left = left.eval(store);
                let right = right.eval(store);
                let lines = left.lines().intersect(right.lines());
                QueryResult::new(self.rep(), lines, store.shared_lines())
            }
            QueryNode::Or(left, right) => {
                let left = left.eval(store);
                let right = right.eval(store);
                let lines = left.lines().union(right.lines());
                QueryResult::new(self.rep(), lines, store.shared_lines())
            }
        }
    }

    /// The textual form of this expression.
    ///
    /// Composites are always fully parenthesized (`~(q)`, `(l & r)`,
    /// `(l | r)`), which keeps the rendering unambiguous without
    /// precedence rules.
    pub fn rep(&self) -> String {
        match self {
            QueryNode::Word(word) => word.clone(),
            QueryNode::Not(operand) => format!("~({})", operand.rep()),
            QueryNode::And(left, right) => format!("({} & {})", left.rep(), right.rep()),
            QueryNode::Or(left, right) => format!("({} | {})", left.rep(), right.rep()),
        }
    }
}

/// A shareable handle on an immutable query expression.
///
/// `Query` is a thin value type: cloning one copies a reference count, not
/// the expression, so handles are cheap to pass around and store. Handles
/// are built from literal words with [`Query::word`] and composed with the
/// `!`, `&` and `|` operators, which are implemented for both owned and
/// borrowed operands:
///
/// ```
/// use linaria::{DocumentStore, Query};
///
/// let store = DocumentStore::new(["the quick fox", "the lazy dog", "quick dog"]);
/// let quick = Query::word("quick")?;
/// let dog = Query::word("dog")?;
///
/// // Composing through references leaves the operands usable.
/// let both = &quick & &dog;
/// let either = &quick | &dog;
///
/// assert_eq!(both.eval(&store).lines().to_vec(), vec![2]);
/// assert_eq!(either.eval(&store).lines().to_vec(), vec![0, 1, 2]);
/// assert_eq!(both.rep(), "(quick & dog)");
/// assert_eq!((!&quick).rep(), "~(quick)");
/// # Ok::<(), linaria::LinariaError>(())
/// ```
///
/// There is no query mutation: once built, an expression never changes,
/// which is what makes sharing it across parent expressions and threads
/// sound.
#[derive(Debug, Clone)]
pub struct Query {
    node: Arc<QueryNode>,
}

impl Query {
    /// Build a query matching the lines `word` occurs on.
    ///
    /// The word is taken exactly as given: no trimming, no case folding.
    /// The empty string is rejected with [`LinariaError::EmptyWord`]. A
    /// word containing whitespace is accepted but can never match, since
    /// indexed tokens never contain whitespace; like any other absent
    /// word it evaluates to the empty set.
    pub fn word(word: impl Into<String>) -> Result<Self> {
        let word = word.into();
        if word.is_empty() {
            return Err(LinariaError::EmptyWord);
        }
        Ok(Query::wrap(QueryNode::Word(word)))
    }

    fn wrap(node: QueryNode) -> Self {
        Query {
            node: Arc::new(node),
        }
    }

    /// Evaluate this query against a store.
    pub fn eval(&self, store: &DocumentStore) -> QueryResult {
        self.node.eval(store)
    }

    /// The textual form of this query.
    pub fn rep(&self) -> String {
        self.node.rep()
    }

    /// The underlying expression node.
    pub fn node(&self) -> &Arc<QueryNode> {
        &self.node
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rep())
    }
}

impl FromStr for Query {
    type Err = LinariaError;

    /// Parse a literal word into a query; see [`Query::word`].
    fn from_str(s: &str) -> Result<Self> {
        Query::word(s)
    }
}

impl ops::Not for Query {
    type Output = Query;

    /// The complement of this query.
    fn not(self) -> Query {
        Query::wrap(QueryNode::Not(self.node))
    }
}

impl ops::Not for &Query {
    type Output = Query;

    fn not(self) -> Query {
        Query::wrap(QueryNode::Not(Arc::clone(&self.node)))
    }
}

impl ops::BitAnd for Query {
    type Output = Query;

    /// The intersection of two queries.
    fn bitand(self, rhs: Query) -> Query {
        Query::wrap(QueryNode::And(self.node, rhs.node))
    }
}

impl ops::BitAnd for &Query {
    type Output = Query;

    fn bitand(self, rhs: &Query) -> Query {
        Query::wrap(QueryNode::And(Arc::clone(&self.node), Arc::clone(&rhs.node)))
    }
}

impl ops::BitAnd<&Query> for Query {
    type Output = Query;

    fn bitand(self, rhs: &Query) -> Query {
        Query::wrap(QueryNode::And(self.node, Arc::clone(&rhs.node)))
    }
}

impl ops::BitOr for Query {
    type Output = Query;

    /// The union of two queries.
    fn bitor(self, rhs: Query) -> Query {
        Query::wrap(QueryNode::Or(self.node, rhs.node))
    }
}

impl ops::BitOr<&Query> for Query {
    type Output = Query;

    fn bitor(self, rhs: &Query) -> Query {
        Query::wrap(QueryNode::Or(self.node, Arc::clone(&rhs.node)))
    }
}

impl ops::BitOr for &Query {
    type Output = Query;

    fn bitor(self, rhs: &Query) -> Query {
        Query::wrap(QueryNode::Or(Arc::clone(&self.node), Arc::clone(&rhs.node)))
    }
}
