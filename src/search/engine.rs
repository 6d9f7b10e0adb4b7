//! Term lookup, projection of symbols into results, and query execution.

use super::merge::{MatchMode, dedup, merge_all, merge_any};
use super::query::Query;
use crate::index::{SearchIndex, SymbolIdentity, SymbolKind, SymbolRecord};
use serde::Serialize;

/// A matching symbol, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    /// Owning type for member kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub text: String,
    pub href: String,
}

impl SearchResult {
    /// Project a record into a result.
    ///
    /// Returns `None` when the record has no display text or no page to link to.
    pub fn from_record(record: &SymbolRecord) -> Option<Self> {
        let (Some(text), Some(href)) = (record.display_text(), record.link()) else {
            tracing::debug!(
                "Skipping {} '{}': no display text or link for this record",
                record.kind,
                record.name
            );
            return None;
        };

        Some(Self {
            name: record.name.clone(),
            kind: record.kind,
            type_name: record.type_name.clone().filter(|_| record.kind.is_member()),
            text,
            href,
        })
    }

    pub fn identity(&self) -> SymbolIdentity {
        SymbolIdentity::new(self.kind, self.type_name.as_deref(), &self.name)
    }
}

/// Both combined views of a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResults {
    pub all: Vec<SearchResult>,
    pub any: Vec<SearchResult>,
}

impl QueryResults {
    pub fn view(&self, mode: MatchMode) -> &[SearchResult] {
        match mode {
            MatchMode::All => &self.all,
            MatchMode::Any => &self.any,
        }
    }
}

/// What the rendering layer receives for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutput {
    pub query_text: String,
    pub all_count: usize,
    pub results: Vec<SearchResult>,
}

impl SearchOutput {
    pub fn new(query: &Query, results: &QueryResults, mode: MatchMode) -> Self {
        Self {
            query_text: query.text().to_string(),
            all_count: results.all.len(),
            results: results.view(mode).to_vec(),
        }
    }
}

/// Results for a single term, without duplicates.
///
/// Unknown terms yield an empty set. Identifiers missing from the symbol table
/// are skipped.
pub fn term_results(index: &SearchIndex, term: &str) -> Vec<SearchResult> {
    let Some(postings) = index.postings(term) else {
        tracing::debug!("Term '{}' not in index", term);
        return vec![];
    };

    dedup(postings.iter().filter_map(|&id| {
        let record = index.symbol(id);
        if record.is_none() {
            tracing::debug!("Term '{}' references missing symbol {}", term, id);
        }
        record.and_then(SearchResult::from_record)
    }))
}

/// Run a query against an index.
///
/// Returns `None` for a query without terms: no search is performed.
pub fn run_query(index: &SearchIndex, query: &Query) -> Option<QueryResults> {
    if query.is_empty() {
        return None;
    }

    let sets: Vec<Vec<SearchResult>> = query
        .terms()
        .iter()
        .map(|term| term_results(index, term))
        .collect();

    let results = if let [only] = sets.as_slice() {
        QueryResults {
            all: only.clone(),
            any: only.clone(),
        }
    } else {
        QueryResults {
            all: merge_all(&sets),
            any: merge_any(&sets),
        }
    };

    tracing::debug!(
        "Query '{}': {} terms, {} all / {} any",
        query,
        sets.len(),
        results.all.len(),
        results.any.len()
    );
    Some(results)
}
