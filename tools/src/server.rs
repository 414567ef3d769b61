//! The MCP server: handler implementation and transport plumbing.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData, RoleServer, ServerHandler, ServiceExt,
    handler::server::router::tool::ToolRouter,
    handler::server::tool::ToolCallContext,
    model::{
        CallToolRequestParams, CallToolResult, GetPromptRequestParams, GetPromptResult,
        Implementation, ListPromptsResult, ListResourcesResult, ListToolsResult,
        PaginatedRequestParams, ReadResourceRequestParams, ReadResourceResult,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    },
};
use tokio_util::sync::CancellationToken;

use league_mcp_riot_api::ApiClient;

use crate::error::{Result, ServerError};
use crate::registry;
use crate::resources::DataDragon;
use crate::prompts;

/// Transport the server is exposed over.
#[derive(Debug, Clone)]
pub enum ServerTransport {
    /// Standard input/output, for hosts that spawn the server as a child.
    Stdio,
    /// Streamable HTTP bound to the given address, mounted at `/mcp`.
    Http(String),
}

/// MCP server exposing the Riot API tool registry, the Data Dragon resources
/// and the workflow prompts.
#[derive(Clone)]
pub struct LeagueMcpServer {
    ddragon: Arc<DataDragon>,
    tool_router: ToolRouter<Self>,
}

impl LeagueMcpServer {
    pub fn new(api: Arc<ApiClient>, ddragon: DataDragon) -> Self {
        Self {
            ddragon: Arc::new(ddragon),
            tool_router: registry::build_router(&api),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    pub async fn serve(self, transport: ServerTransport) -> Result<()> {
        match transport {
            ServerTransport::Stdio => self.serve_stdio().await,
            ServerTransport::Http(addr) => self.serve_http(&addr).await,
        }
    }

    async fn serve_stdio(self) -> Result<()> {
        tracing::info!(tools = self.tool_count(), "serving MCP over stdio");
        let service = ServiceExt::<RoleServer>::serve(self, rmcp::transport::stdio())
            .await
            .map_err(|e| ServerError::ServerInit(format!("failed to start stdio server: {e}")))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Transport(format!("stdio server error: {e}")))?;
        Ok(())
    }

    async fn serve_http(self, addr: &str) -> Result<()> {
        tracing::info!(tools = self.tool_count(), %addr, "serving MCP over streamable HTTP");
        let ct = CancellationToken::new();
        let ct_clone = ct.clone();

        let http_service = StreamableHttpService::new(
            move || Ok(self.clone()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig {
                cancellation_token: ct.child_token(),
                stateful_mode: true,
                ..Default::default()
            },
        );

        let router = axum::Router::new().nest_service("/mcp", http_service);
        let tcp_listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Transport(format!("failed to bind to {addr}: {e}")))?;

        axum::serve(tcp_listener, router)
            .with_graceful_shutdown(async move {
                tokio::signal::ctrl_c().await.ok();
                ct_clone.cancel();
            })
            .await
            .map_err(|e| ServerError::Transport(format!("HTTP server error: {e}")))?;

        Ok(())
    }
}

impl ServerHandler for LeagueMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "league-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "Riot Games API tools: accounts, summoners, ranked leagues, matches, \
                     live games, Clash, challenges and tournament codes."
                        .to_string(),
                ),
                title: Some("League of Legends MCP server".to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Look up players with get_account_by_riot_id first to obtain a PUUID, then \
                 use the puuid-based tools. Region parameters default to na1 (platform) or \
                 americas (routing)."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListToolsResult, ErrorData>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: self.tool_router.list_all(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<CallToolResult, ErrorData>> + Send + '_ {
        async move {
            tracing::debug!(tool = %request.name, "tool call");
            let tcc = ToolCallContext::new(self, request, context);
            self.tool_router.call(tcc).await
        }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListResourcesResult, ErrorData>> + Send + '_ {
        async move {
            Ok(ListResourcesResult {
                resources: self.ddragon.list(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ReadResourceResult, ErrorData>> + Send + '_ {
        async move {
            match self.ddragon.read(&request.uri).await {
                Ok(Some(result)) => Ok(result),
                Ok(None) => Err(ErrorData::resource_not_found(
                    format!("Resource not found: {}", request.uri),
                    None,
                )),
                Err(e) => Err(ErrorData::internal_error(e.to_string(), None)),
            }
        }
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListPromptsResult, ErrorData>> + Send + '_ {
        async move {
            Ok(ListPromptsResult {
                prompts: prompts::list(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<GetPromptResult, ErrorData>> + Send + '_ {
        async move {
            prompts::get(&request.name, request.arguments.as_ref()).ok_or_else(|| {
                ErrorData::invalid_params(format!("Unknown prompt: {}", request.name), None)
            })
        }
    }
}

impl std::fmt::Debug for LeagueMcpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeagueMcpServer")
            .field("tools", &self.tool_count())
            .finish()
    }
}
