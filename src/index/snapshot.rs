//! Immutable in-memory index snapshot built from the JSON payload.

use super::symbol::{SymbolKind, SymbolRecord};
use crate::error::LoadError;
use serde::Deserialize;
use std::collections::HashMap;

/// Opaque numeric key into the symbol table.
pub type SymbolId = u64;

/// Wire shape of the index document.
#[derive(Debug, Deserialize)]
struct IndexPayload {
    symbols: SymbolTablePayload,
    terms: HashMap<String, Vec<RawPosting>>,
}

/// The generator emits the symbol table as an array (identifier = position);
/// hand-written indices may key it by identifier instead.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SymbolTablePayload {
    List(Vec<RawSymbol>),
    Keyed(HashMap<String, RawSymbol>),
}

#[derive(Debug, Deserialize)]
struct RawSymbol {
    #[serde(rename = "type", alias = "kind")]
    kind: String,
    name: String,
    #[serde(default)]
    type_name: Option<String>,
    #[serde(default)]
    ctype: Option<String>,
    #[serde(default)]
    ident: Option<String>,
}

/// Postings entries that are not numbers can never resolve to a symbol.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPosting {
    Id(SymbolId),
    Other(serde_json::Value),
}

/// A loaded search index: symbol table plus term index.
///
/// Constructed once per load and shared read-only behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    symbols: HashMap<SymbolId, SymbolRecord>,
    terms: HashMap<String, Vec<SymbolId>>,
}

impl SearchIndex {
    /// Create an index from already-typed parts.
    pub fn new(
        symbols: impl IntoIterator<Item = (SymbolId, SymbolRecord)>,
        terms: impl IntoIterator<Item = (String, Vec<SymbolId>)>,
    ) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
            terms: terms.into_iter().collect(),
        }
    }

    /// Parse an index document.
    ///
    /// Records with a kind outside [`SymbolKind`] are dropped with a warning, so
    /// postings pointing at them behave like dangling references.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let payload: IndexPayload = serde_json::from_str(text)?;

        let raw_symbols: Vec<(SymbolId, RawSymbol)> = match payload.symbols {
            SymbolTablePayload::List(list) => (0..).zip(list).collect(),
            SymbolTablePayload::Keyed(map) => map
                .into_iter()
                .map(|(key, raw)| {
                    key.parse::<SymbolId>()
                        .map(|id| (id, raw))
                        .map_err(|_| {
                            LoadError::Malformed(format!("symbol identifier '{}' is not numeric", key))
                        })
                })
                .collect::<Result<_, _>>()?,
        };

        let mut symbols = HashMap::with_capacity(raw_symbols.len());
        let mut unsupported = 0usize;
        for (id, raw) in raw_symbols {
            match raw.kind.parse::<SymbolKind>() {
                Ok(kind) => {
                    symbols.insert(
                        id,
                        SymbolRecord {
                            kind,
                            name: raw.name,
                            type_name: raw.type_name,
                            ctype: raw.ctype,
                            ident: raw.ident,
                        },
                    );
                }
                Err(e) => {
                    unsupported += 1;
                    tracing::warn!("Dropping symbol {} '{}': {}", id, raw.name, e);
                }
            }
        }

        let mut skipped_postings = 0usize;
        let terms = payload
            .terms
            .into_iter()
            .map(|(term, postings)| {
                let ids = postings
                    .into_iter()
                    .filter_map(|posting| match posting {
                        RawPosting::Id(id) => Some(id),
                        RawPosting::Other(_) => {
                            skipped_postings += 1;
                            None
                        }
                    })
                    .collect();
                (term, ids)
            })
            .collect();

        let index = Self { symbols, terms };
        tracing::debug!(
            "Parsed search index: {} symbols, {} terms ({} unsupported symbols, {} non-numeric postings)",
            index.symbol_count(),
            index.term_count(),
            unsupported,
            skipped_postings
        );
        Ok(index)
    }

    /// Postings list for an exact (already lower-cased) term.
    pub fn postings(&self, term: &str) -> Option<&[SymbolId]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolRecord> {
        self.symbols.get(&id)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
