//! External reference resolution handler.

use crate::links::{ExternalLink, NamespaceLinks};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResolveLinkRequest {
    /// Namespace of the referenced library (e.g. `GLib`)
    pub namespace: String,
    /// Page link relative to that library's documentation (e.g. `struct.List.html`)
    pub link: String,
}

pub fn handle_resolve_link(links: &NamespaceLinks, request: &ResolveLinkRequest) -> String {
    match links.resolve(&request.namespace, &request.link) {
        ExternalLink::Resolved(url) => url,
        ExternalLink::Unresolved { title } => title,
    }
}
