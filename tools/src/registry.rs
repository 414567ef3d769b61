//! Tool registration plumbing shared by every endpoint family.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData,
    handler::server::router::tool::{ToolRoute, ToolRouter},
    handler::server::tool::ToolCallContext,
    model::{CallToolResult, Tool},
};
use serde_json::Value;

use league_mcp_riot_api::ApiClient;

use crate::server::LeagueMcpServer;
use crate::tools::{self, ToolArgs};

/// Build the full tool router over a shared API client.
pub fn build_router(api: &Arc<ApiClient>) -> ToolRouter<LeagueMcpServer> {
    let mut router = ToolRouter::new();
    tools::account::register(&mut router, api);
    tools::summoner::register(&mut router, api);
    tools::spectator::register(&mut router, api);
    tools::champion::register(&mut router, api);
    tools::clash::register(&mut router, api);
    tools::league::register(&mut router, api);
    tools::challenges::register(&mut router, api);
    tools::status::register(&mut router, api);
    tools::match_v5::register(&mut router, api);
    tools::tournament::register(&mut router, api);
    router
}

/// Register one tool: name, description, JSON schema and its handler.
///
/// The handler receives a clone of the shared [`ApiClient`] and the parsed
/// call arguments; everything else about the MCP call context is hidden here.
pub(crate) fn add_tool<F, Fut>(
    router: &mut ToolRouter<LeagueMcpServer>,
    api: &Arc<ApiClient>,
    name: &str,
    description: &str,
    schema: Value,
    handler: F,
) where
    F: Fn(Arc<ApiClient>, ToolArgs) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CallToolResult, ErrorData>> + Send + 'static,
{
    let input_schema: Arc<serde_json::Map<String, Value>> = match schema.as_object() {
        Some(obj) => Arc::new(obj.clone()),
        None => Arc::new(serde_json::Map::new()),
    };
    let tool = Tool::new(name.to_string(), description.to_string(), input_schema);

    let api = api.clone();
    let handler = Arc::new(handler);
    let route = ToolRoute::new_dyn(tool, move |tcc: ToolCallContext<'_, LeagueMcpServer>| {
        let args = ToolArgs::new(tcc.arguments.clone());
        let api = api.clone();
        let handler = handler.clone();
        Box::pin(async move { handler(api, args).await })
    });
    router.add_route(route);
}
