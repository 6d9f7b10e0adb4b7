use anyhow::Context;
use apidoc_search::cli::{Cli, Commands, OutputFormat};
use apidoc_search::index::{HttpFetcher, IndexLocation, load};
use apidoc_search::links::ExternalLink;
use apidoc_search::render::{render_html, render_text};
use apidoc_search::search::{MatchMode, Query, SearchOutput, run_query};
use apidoc_search::server::SearchServer;
use apidoc_search::Config;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    apidoc_search::tracing::init(cli.verbose, cli.json_logs);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Search {
            query,
            index,
            mode,
            format,
        } => {
            let location = index.unwrap_or_else(|| config.index.clone());
            run_search(&query, &location, mode.unwrap_or(config.mode), format).await
        }
        Commands::Link { namespace, link } => {
            match config.namespace_links().resolve(&namespace, &link) {
                ExternalLink::Resolved(url) => println!("{}", url),
                ExternalLink::Unresolved { title } => anyhow::bail!("{}", title),
            }
            Ok(())
        }
        Commands::Serve { index } => {
            let mut config = config;
            if let Some(index) = index {
                config.index = index;
            }
            serve(config).await
        }
    }
}

/// Interpret the QUERY argument: a page URL contributes its `q` parameter.
fn parse_query_arg(arg: &str) -> Option<Query> {
    match Url::parse(arg) {
        Ok(url) if matches!(url.scheme(), "http" | "https" | "file") => Query::from_url(&url),
        _ => Some(Query::parse(arg)),
    }
}

async fn run_search(
    raw_query: &str,
    location: &str,
    mode: MatchMode,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let Some(query) = parse_query_arg(raw_query).filter(|query| !query.is_empty()) else {
        tracing::info!("Query has no terms, nothing to search");
        return Ok(());
    };

    let location: IndexLocation = location.parse()?;
    let index = load(&HttpFetcher::default(), &location)
        .await
        .with_context(|| format!("Search index unavailable at {}", location))?;

    let Some(results) = run_query(&index, &query) else {
        return Ok(());
    };
    let output = SearchOutput::new(&query, &results, mode);

    match format {
        OutputFormat::Text => print!("{}", render_text(&output)),
        OutputFormat::Html => println!("{}", render_html(&output)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting apidoc-search MCP server (default index: {})", config.index);

    // Create and serve the MCP server over stdio
    let server = SearchServer::new(config);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    // Wait for the service to complete
    service.waiting().await?;

    Ok(())
}
