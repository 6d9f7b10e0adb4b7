pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod links;
pub mod registry;
pub mod render;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;

pub use config::Config;
pub use error::{ConfigError, LoadError};
pub use index::{IndexLocation, SearchIndex, SymbolKind, SymbolRecord};
pub use registry::IndexRegistry;
pub use search::{MatchMode, Query, QueryResults, SearchOutput, SearchResult, SearchSession};
