//! ALL / ANY combination of per-term result sets.

use super::engine::SearchResult;
use crate::index::SymbolIdentity;
use ahash::AHashSet;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How per-term result sets are combined: `All` keeps symbols matched by every
/// term, `Any` keeps symbols matched by at least one.
///
/// Variants carry no doc comments so the MCP schema stays a plain string enum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    All,
    Any,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Any => "any",
        })
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "any" => Ok(Self::Any),
            other => Err(format!("unknown match mode '{}' (expected 'all' or 'any')", other)),
        }
    }
}

/// Remove repeated identities, keeping the first occurrence in order.
pub(crate) fn dedup(results: impl IntoIterator<Item = SearchResult>) -> Vec<SearchResult> {
    let mut seen = AHashSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert(result.identity()))
        .collect()
}

/// Union of all sets, first occurrence wins.
pub(crate) fn merge_any(sets: &[Vec<SearchResult>]) -> Vec<SearchResult> {
    dedup(sets.iter().flatten().cloned())
}

/// Intersection of all sets, in the order of the smallest set.
///
/// The smallest set is the pivot; ties go to the earliest set. Each pivot item is
/// kept only when every other set holds an item with the same identity.
pub(crate) fn merge_all(sets: &[Vec<SearchResult>]) -> Vec<SearchResult> {
    let Some((pivot_index, pivot)) = sets
        .iter()
        .enumerate()
        .min_by_key(|(_, set)| set.len())
    else {
        return vec![];
    };

    let others: Vec<AHashSet<SymbolIdentity>> = sets
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != pivot_index)
        .map(|(_, set)| set.iter().map(SearchResult::identity).collect())
        .collect();

    dedup(
        pivot
            .iter()
            .filter(|result| {
                let identity = result.identity();
                others.iter().all(|set| set.contains(&identity))
            })
            .cloned(),
    )
}
