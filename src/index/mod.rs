//! Search index data model and loading.
//!
//! This module defines the symbol records produced by the documentation generator,
//! the immutable [`SearchIndex`] snapshot, and the one-shot loader that fetches it.

pub mod loader;
pub mod snapshot;
pub mod symbol;

pub use loader::{
    DEFAULT_INDEX_LOCATION, FetchedPayload, HttpFetcher, IndexFetcher, IndexLocation, load,
};
pub use snapshot::{SearchIndex, SymbolId};
pub use symbol::{SymbolIdentity, SymbolKind, SymbolRecord, UnsupportedKind};
