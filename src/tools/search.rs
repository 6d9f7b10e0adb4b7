//! Symbol search handler.

use crate::{
    index::{IndexFetcher, IndexLocation},
    registry::IndexRegistry,
    render::render_text,
    search::{MatchMode, Query, SearchOutput, run_query},
};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Search query; separate terms with `+` (e.g. `widget+show`)
    pub query: String,
    /// Index location, a path or URL (default: the configured index)
    #[serde(default)]
    pub index: Option<String>,
    /// `all` requires every term to match, `any` at least one (default: configured mode)
    #[serde(default)]
    pub mode: Option<MatchMode>,
}

/// Execute a search against the requested (or default) index.
pub async fn handle_search<F: IndexFetcher>(
    registry: &IndexRegistry<F>,
    default_index: &str,
    default_mode: MatchMode,
    request: SearchRequest,
) -> Result<String, String> {
    let raw_location = request.index.as_deref().unwrap_or(default_index);
    let location: IndexLocation = raw_location
        .parse()
        .map_err(|e| format!("Cannot search '{}': {}", raw_location, e))?;

    let query = Query::parse(&request.query);
    if query.is_empty() {
        return Ok("No search performed: the query has no terms. Separate terms with '+'.".to_string());
    }

    let Some(index) = registry.index(&location).await else {
        return Ok(format!(
            "Search is unavailable: the index at {} could not be loaded.",
            location
        ));
    };

    let Some(results) = run_query(&index, &query) else {
        return Ok(String::new());
    };
    let mode = request.mode.unwrap_or(default_mode);

    Ok(render_text(&SearchOutput::new(&query, &results, mode)))
}
