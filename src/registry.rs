//! Shared registry of search sessions for long-running processes.
//!
//! Each index location gets one [`SearchSession`], so an index is fetched at most
//! once while its session stays cached. Callers racing on the same location
//! await the same in-flight load.

use crate::config::DEFAULT_CACHE_SIZE;
use crate::index::{HttpFetcher, IndexFetcher, IndexLocation, SearchIndex};
use crate::search::SearchSession;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Sessions keyed by index location, with LRU eviction.
pub struct IndexRegistry<F = HttpFetcher> {
    fetcher: F,
    sessions: Mutex<LruCache<IndexLocation, Arc<SearchSession>>>,
}

impl<F> std::fmt::Debug for IndexRegistry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexRegistry")
            .field("sessions", &self.sessions.try_lock().map(|s| s.len()).ok())
            .finish_non_exhaustive()
    }
}

impl IndexRegistry<HttpFetcher> {
    pub fn new(capacity: usize) -> Self {
        Self::with_fetcher(HttpFetcher::default(), capacity)
    }
}

impl<F: IndexFetcher> IndexRegistry<F> {
    pub fn with_fetcher(fetcher: F, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or_else(|| {
            tracing::warn!("Cache size 0 is not usable, falling back to {}", DEFAULT_CACHE_SIZE);
            NonZeroUsize::new(DEFAULT_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN)
        });
        Self {
            fetcher,
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Session for a location, created on first use.
    pub async fn session(&self, location: &IndexLocation) -> Arc<SearchSession> {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get(location) {
            tracing::debug!("Session cache hit for {}", location);
            return session.clone();
        }

        let session = Arc::new(SearchSession::new(location.clone()));
        if let Some((evicted, _)) = sessions.push(location.clone(), session.clone())
            && evicted != *location
        {
            tracing::debug!("Evicted session for {}", evicted);
        }
        session
    }

    /// Resident index for a location, loading it on first use.
    ///
    /// Returns `None` when the one load attempt for this session failed.
    pub async fn index(&self, location: &IndexLocation) -> Option<Arc<SearchIndex>> {
        // The registry lock is released before loading so other locations proceed
        let session = self.session(location).await;
        session.ensure_loaded(&self.fetcher).await
    }

    /// Forget a location so the next request loads it afresh.
    pub async fn forget(&self, location: &IndexLocation) -> bool {
        self.sessions.lock().await.pop(location).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::index::FetchedPayload;
    use assert2::check;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingFetcher {
        calls: AtomicUsize,
    }

    impl IndexFetcher for CountingFetcher {
        async fn fetch(&self, _location: &IndexLocation) -> Result<FetchedPayload, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(FetchedPayload {
                status: 200,
                body: r#"{"symbols": [], "terms": {}}"#.to_string(),
            })
        }
    }

    fn location(name: &str) -> IndexLocation {
        IndexLocation::Local(format!("{}/index.json", name).into())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_requests_share_one_load() {
        let registry = Arc::new(IndexRegistry::with_fetcher(CountingFetcher::default(), 4));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.index(&location("gtk4")).await.is_some() })
            })
            .collect();
        for task in tasks {
            check!(task.await.unwrap());
        }

        check!(registry.fetcher.calls.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test]
    async fn test_eviction_allows_reload() {
        let registry = IndexRegistry::with_fetcher(CountingFetcher::default(), 1);

        registry.index(&location("gtk4")).await;
        registry.index(&location("glib")).await;
        registry.index(&location("gtk4")).await;

        check!(registry.len().await == 1);
        check!(registry.fetcher.calls.load(Ordering::SeqCst) == 3);
    }

    #[tokio::test]
    async fn test_forget() {
        let registry = IndexRegistry::with_fetcher(CountingFetcher::default(), 2);
        registry.index(&location("gtk4")).await;
        check!(registry.forget(&location("gtk4")).await);
        check!(registry.is_empty().await);
    }
}
