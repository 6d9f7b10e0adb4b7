//! MCP server exposing symbol search over stdio.

use crate::config::Config;
use crate::links::NamespaceLinks;
use crate::registry::IndexRegistry;
use crate::tools::resolve_link::{ResolveLinkRequest, handle_resolve_link};
use crate::tools::search::{SearchRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// State shared by all tool calls.
#[derive(Debug)]
pub struct ServerState {
    pub config: Config,
    pub registry: IndexRegistry,
    pub links: NamespaceLinks,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        Self {
            registry: IndexRegistry::new(config.cache_size),
            links: config.namespace_links(),
            config,
        }
    }
}

/// MCP Server for API reference symbol search
#[derive(Clone)]
pub struct SearchServer {
    /// Shared state (configuration, loaded indices, namespace links)
    state: Arc<ServerState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for SearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl SearchServer {
    pub fn new(config: Config) -> Self {
        Self {
            state: Arc::new(ServerState::new(config)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search the API reference index for symbols (functions, types, methods, properties, constants, ...). Terms are separated by '+'; mode 'all' (default) keeps symbols matching every term, 'any' keeps symbols matching at least one. Returns each match with its kind, display name and page link."
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(
            &self.state.registry,
            &self.state.config.index,
            self.state.config.mode,
            request,
        )
        .await
    }

    #[tool(
        description = "Resolve a cross-library documentation link from its namespace (e.g. 'GLib') and page link (e.g. 'struct.List.html') using the configured namespace base URLs."
    )]
    async fn resolve_link(
        &self,
        Parameters(request): Parameters<ResolveLinkRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_resolve_link(&self.state.links, &request))
    }
}

#[tool_handler]
impl ServerHandler for SearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "apidoc-search: symbol search over generated API reference indices. \
                 Use search with '+'-separated terms; the configured index is used unless \
                 another path or URL is given.",
            )
    }
}
