//! # Linaria
//!
//! A small, composable boolean text query engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Whitespace-word inverted index built in one pass
//! - Boolean queries composed with the `!`, `&` and `|` operators
//! - Immutable, `Arc`-shared expressions that can be reused and recombined
//! - Lock-free concurrent evaluation against a shared document store
//! - Results that render the classic "word occurs on line N" report
//!
//! ## Quickstart
//!
//! ```
//! use linaria::{DocumentStore, Query};
//!
//! let store = DocumentStore::new(["the quick fox", "the lazy dog", "quick dog"]);
//! let query = Query::word("quick")? & Query::word("dog")?;
//!
//! let result = query.eval(&store);
//! assert_eq!(result.lines().to_vec(), vec![2]);
//! assert_eq!(result.label(), "(quick & dog)");
//! # Ok::<(), linaria::LinariaError>(())
//! ```

// Core modules
pub mod analysis;
mod error;
mod line_set;
mod query;
mod result;
mod store;

// Re-exports for the public API
pub use error::{LinariaError, Result};
pub use line_set::{LineNo, LineSet};
pub use query::{Query, QueryNode};
pub use result::{Match, QueryResult};
pub use store::{DocumentStore, IndexStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
