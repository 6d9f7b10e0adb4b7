use crate::search::MatchMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apidoc-search", version)]
#[command(about = "Search generated API reference indices", long_about = None)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/apidoc-search/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query; QUERY may also be a page URL carrying `?q=`
    Search {
        query: String,
        #[arg(short, long, env = "APIDOC_SEARCH_INDEX")]
        index: Option<String>,
        #[arg(short, long)]
        mode: Option<MatchMode>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Resolve a cross-library link through the namespace table
    Link { namespace: String, link: String },
    /// Serve search over MCP on stdio
    Serve {
        #[arg(short, long, env = "APIDOC_SEARCH_INDEX")]
        index: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}
