//! Configuration loading.
//!
//! Settings come from an optional TOML file; command-line flags override them.

use crate::error::ConfigError;
use crate::index::DEFAULT_INDEX_LOCATION;
use crate::links::NamespaceLinks;
use crate::search::MatchMode;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default number of index sessions kept by the server.
pub const DEFAULT_CACHE_SIZE: usize = 8;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Location of the index document (path or URL)
    pub index: String,
    /// Which combined view to render
    pub mode: MatchMode,
    /// Maximum number of loaded indices kept in memory
    pub cache_size: usize,
    /// Namespace → documentation base URL
    pub namespaces: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX_LOCATION.to_string(),
            mode: MatchMode::default(),
            cache_size: DEFAULT_CACHE_SIZE,
            namespaces: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Default config file location (`$XDG_CONFIG_HOME/apidoc-search/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("apidoc-search").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used when
    /// present, and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn namespace_links(&self) -> NamespaceLinks {
        NamespaceLinks::new(self.namespaces.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let_assert!(Ok(config) = Config::from_toml(""));
        check!(config == Config::default());
        check!(config.index == "index.json");
        check!(config.mode == MatchMode::All);
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            index = "https://docs.gtk.org/gtk4/index.json"
            mode = "any"
            cache_size = 2

            [namespaces]
            GLib = "https://docs.gtk.org/glib/"
        "#;
        let_assert!(Ok(config) = Config::from_toml(text));
        check!(config.mode == MatchMode::Any);
        check!(config.cache_size == 2);
        check!(config.namespace_links().base_url("GLib") == Some("https://docs.gtk.org/glib/"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        check!(Config::from_toml("idx = \"index.json\"").is_err());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let_assert!(Err(ConfigError::Read { .. }) = Config::load(Some(missing.as_path())));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "index = \"site/index.json\"").unwrap();
        let_assert!(Ok(config) = Config::load(Some(file.path())));
        check!(config.index == "site/index.json");
    }
}
