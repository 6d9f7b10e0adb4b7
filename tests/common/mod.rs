//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `site`: a temporary documentation site holding the fixture `index.json`
//! - `fixture_index`: the same index parsed in memory
//!
//! The fixture models a small GTK-like library: a `Widget` class with members,
//! a `Window` class, a free function, a signal (which has no page of its own)
//! and a postings list that points at a symbol missing from the table.

use apidoc_search::{IndexLocation, SearchIndex};
use rstest::fixture;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// The fixture index document.
pub(crate) fn fixture_payload() -> Value {
    json!({
        "symbols": [
            {"type": "class", "name": "Widget", "ctype": "GtkWidget"},
            {"type": "method", "name": "show", "type_name": "Widget", "ident": "gtk_widget_show"},
            {"type": "method", "name": "hide", "type_name": "Widget", "ident": "gtk_widget_hide"},
            {"type": "signal", "name": "show", "type_name": "Widget"},
            {"type": "property", "name": "visible", "type_name": "Widget"},
            {"type": "function", "name": "g_malloc", "ident": "g_malloc"},
            {"type": "method", "name": "present", "type_name": "Window", "ident": "gtk_window_present"},
            {"type": "class", "name": "Window", "ctype": "GtkWindow"},
            {"type": "vfunc", "name": "show", "type_name": "Widget"},
            {"type": "namespace", "name": "Gtk"},
        ],
        "terms": {
            "widget": [0, 1, 2, 3, 4, 8],
            "show": [1, 3, 8],
            "hide": [2],
            "window": [7, 6],
            "malloc": [5],
            "gtk": [0, 7, 1, 6, 0, 9],
            "present": [6, 42],
        },
    })
}

#[allow(dead_code)] // Used by the search tests only
pub(crate) fn fixture_index() -> SearchIndex {
    SearchIndex::from_json(&fixture_payload().to_string()).expect("fixture index must parse")
}

/// A temporary documentation site directory.
///
/// Cleaned up when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub(crate) struct TempSite {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempSite {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a file within the site.
    ///
    /// # Panics
    /// Panics if the write fails.
    pub(crate) fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Location of a file within the site.
    pub(crate) fn location(&self, path: &str) -> IndexLocation {
        IndexLocation::Local(self.root.join(path))
    }
}

impl Default for TempSite {
    fn default() -> Self {
        Self::new()
    }
}

/// A site with the fixture index at `index.json`.
#[fixture]
pub(crate) fn site() -> TempSite {
    let site = TempSite::new();
    site.create_file("index.json", &fixture_payload().to_string());
    site
}

/// Serves exactly one HTTP response on a local port.
#[allow(dead_code)] // Used by the loader tests only
pub(crate) async fn serve_once(status_line: &'static str, body: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    addr
}
