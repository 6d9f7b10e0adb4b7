//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Output goes to stderr; stdout is reserved for search results and the MCP
/// protocol. `verbose` raises the default level from INFO to DEBUG, `json`
/// switches to one JSON object per event.
pub fn init(verbose: bool, json: bool) {
    INIT.call_once(|| {
        let is_test = cfg!(test)
            || std::env::var("NEXTEST").is_ok()
            || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test || verbose {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE);

        let result = if is_test {
            builder.compact().with_test_writer().try_init()
        } else if json {
            builder.json().with_writer(std::io::stderr).try_init()
        } else {
            builder.compact().with_writer(std::io::stderr).try_init()
        };

        // Under test another binary may have installed a global subscriber already
        if let Err(e) = result
            && !is_test
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
