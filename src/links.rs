//! Cross-library link resolution.
//!
//! Generated pages mark links into other libraries with a namespace and a
//! page-relative link; the namespace table maps each namespace to the base URL
//! of that library's documentation.

use std::collections::BTreeMap;

/// Outcome of resolving an external reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalLink {
    /// Full URL of the referenced page.
    Resolved(String),
    /// No base URL is known; `title` explains why the link goes nowhere.
    Unresolved { title: String },
}

/// Namespace → documentation base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceLinks {
    base_urls: BTreeMap<String, String>,
}

impl NamespaceLinks {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            base_urls: pairs.into_iter().collect(),
        }
    }

    /// Base URL for a namespace, if one is configured.
    pub fn base_url(&self, namespace: &str) -> Option<&str> {
        self.base_urls
            .get(namespace)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    pub fn resolve(&self, namespace: &str, link: &str) -> ExternalLink {
        match self.base_url(namespace) {
            Some(base) => ExternalLink::Resolved(format!("{}{}", base, link)),
            None => ExternalLink::Unresolved {
                title: format!("No reference to the {} namespace", namespace),
            },
        }
    }
}
