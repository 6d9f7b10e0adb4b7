//! Error handling types and utilities.

use std::path::PathBuf;

/// Error returned when retrieving or parsing a search index fails.
///
/// The session layer never surfaces this to the person searching; it is kept
/// typed so callers that care (the CLI, tests) can report why search is inert.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The server answered with a status outside `[200, 400)`.
    #[error("index request to {location} returned status {status}")]
    Status { location: String, status: u16 },
    /// The request never produced a response.
    #[error("failed to fetch index from {location}: {source}")]
    Transport {
        location: String,
        #[source]
        source: reqwest::Error,
    },
    /// Reading a local index file failed.
    #[error("failed to read index at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The payload is not JSON, or lacks `symbols`/`terms`.
    #[error("index payload could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The payload parsed but its contents are inconsistent.
    #[error("index payload is malformed: {0}")]
    Malformed(String),
    /// The location is neither a usable URL nor a path.
    #[error("invalid index location '{0}'")]
    InvalidLocation(String),
}

/// Error returned when the configuration file cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
