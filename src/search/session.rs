//! Search session: one index location, loaded at most once.

use super::engine::{QueryResults, run_query};
use super::query::Query;
use crate::index::{IndexFetcher, IndexLocation, SearchIndex, load};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Owns the index of one documentation site.
///
/// The first call to [`SearchSession::ensure_loaded`] issues the only load this
/// session will ever make; concurrent callers await that same attempt. A failed
/// load leaves the session inert: searches return `None` and never raise.
#[derive(Debug)]
pub struct SearchSession {
    location: IndexLocation,
    index: OnceCell<Option<Arc<SearchIndex>>>,
}

impl SearchSession {
    pub fn new(location: IndexLocation) -> Self {
        Self {
            location,
            index: OnceCell::new(),
        }
    }

    /// Load the index if no attempt has been made yet, and return it.
    pub async fn ensure_loaded<F: IndexFetcher>(&self, fetcher: &F) -> Option<Arc<SearchIndex>> {
        self.index
            .get_or_init(|| async {
                match load(fetcher, &self.location).await {
                    Ok(index) => Some(Arc::new(index)),
                    Err(e) => {
                        tracing::debug!("Search disabled for {}: {}", self.location, e);
                        None
                    }
                }
            })
            .await
            .clone()
    }

    /// The resident index, if loading finished successfully.
    pub fn index(&self) -> Option<&Arc<SearchIndex>> {
        self.index.get().and_then(Option::as_ref)
    }

    /// Whether a load attempt has completed, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.index.initialized()
    }

    /// Run a query against the resident index.
    ///
    /// Returns `None` while no index is resident or when the query has no terms.
    pub fn search(&self, query: &Query) -> Option<QueryResults> {
        run_query(self.index()?, query)
    }
}
