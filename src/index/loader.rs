//! One-shot retrieval of the index document.
//!
//! A location is either an `http(s)` URL or a local path (`file://` URLs included).
//! Local reads report status 0, the same way a browser reports `file://` loads,
//! so both paths go through the same success check.

use super::snapshot::SearchIndex;
use crate::error::LoadError;
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;
use url::Url;

/// Conventional name of the index document next to the generated pages.
pub const DEFAULT_INDEX_LOCATION: &str = "index.json";

/// Where an index document lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndexLocation {
    Remote(Url),
    Local(PathBuf),
}

impl FromStr for IndexLocation {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LoadError::InvalidLocation(s.to_string()));
        }

        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Remote(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Self::Local)
                .map_err(|()| LoadError::InvalidLocation(s.to_string())),
            // Single-letter schemes are drive letters (`C:\docs\index.json`)
            Ok(url) if url.scheme().len() == 1 => Ok(Self::Local(PathBuf::from(s))),
            Ok(_) => Err(LoadError::InvalidLocation(s.to_string())),
            Err(_) => Ok(Self::Local(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for IndexLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{}", url),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Raw response to an index request.
#[derive(Debug, Clone)]
pub struct FetchedPayload {
    /// HTTP status, or 0 for local reads.
    pub status: u16,
    pub body: String,
}

/// Retrieves index documents.
///
/// The production implementation is [`HttpFetcher`]; tests substitute canned
/// responses to exercise failure paths.
pub trait IndexFetcher: Send + Sync {
    fn fetch(
        &self,
        location: &IndexLocation,
    ) -> impl Future<Output = Result<FetchedPayload, LoadError>> + Send;
}

/// Fetches remote indices with `reqwest` and local ones with `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl IndexFetcher for HttpFetcher {
    async fn fetch(&self, location: &IndexLocation) -> Result<FetchedPayload, LoadError> {
        match location {
            IndexLocation::Remote(url) => {
                let transport = |source| LoadError::Transport {
                    location: url.to_string(),
                    source,
                };
                let response = self.client.get(url.clone()).send().await.map_err(transport)?;
                let status = response.status().as_u16();
                let body = response.text().await.map_err(transport)?;
                Ok(FetchedPayload { status, body })
            }
            IndexLocation::Local(path) => {
                let body = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LoadError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Ok(FetchedPayload { status: 0, body })
            }
        }
    }
}

/// Whether a response status counts as a successful index load.
pub fn is_success_status(status: u16) -> bool {
    status == 0 || (200..400).contains(&status)
}

/// Fetch and parse the index at `location`.
pub async fn load<F: IndexFetcher>(
    fetcher: &F,
    location: &IndexLocation,
) -> Result<SearchIndex, LoadError> {
    let start = Instant::now();
    let payload = fetcher.fetch(location).await?;

    if !is_success_status(payload.status) {
        return Err(LoadError::Status {
            location: location.to_string(),
            status: payload.status,
        });
    }

    // Parse in spawn_blocking since large indices are CPU intensive
    let body = payload.body;
    let index = tokio::task::spawn_blocking(move || SearchIndex::from_json(&body))
        .await
        .map_err(|e| LoadError::Malformed(format!("index parsing task failed: {}", e)))??;

    tracing::info!(
        "Loaded search index from {} ({} symbols, {} terms) in {:?}",
        location,
        index.symbol_count(),
        index.term_count(),
        start.elapsed()
    );
    Ok(index)
}
