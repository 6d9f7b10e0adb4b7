//! Query engine for the symbol index.
//!
//! This module parses raw queries into terms, resolves each term against the
//! index, and combines the per-term sets under ALL/ANY semantics.

// Module declarations
pub(crate) mod engine;
pub(crate) mod merge;
pub(crate) mod query;
pub(crate) mod session;

// Public re-exports (used via lib.rs)
pub use engine::{QueryResults, SearchOutput, SearchResult, run_query, term_results};
pub use merge::MatchMode;
pub use query::{QUERY_PARAM, Query, TERM_SEPARATOR};
pub use session::SearchSession;
