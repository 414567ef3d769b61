//! Lol-status-v4 tool.

use std::sync::Arc;

use rmcp::{ErrorData, handler::server::router::tool::ToolRouter, model::CallToolResult};
use serde_json::json;

use league_mcp_riot_api::ApiClient;
use league_mcp_shared::Platform;

use crate::format;
use crate::registry::add_tool;
use crate::server::LeagueMcpServer;

use super::{ToolArgs, platform_property, reject, text_result, upstream_error};

pub(crate) fn register(router: &mut ToolRouter<LeagueMcpServer>, api: &Arc<ApiClient>) {
    add_tool(
        router,
        api,
        "get_platform_status",
        "Get current maintenances and incidents for a platform.",
        json!({
            "type": "object",
            "properties": {
                "region": platform_property()
            }
        }),
        get_platform_status,
    );
}

async fn get_platform_status(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let platform = match Platform::parse(args.str_or("region", "na1")) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_platform_status(platform).await {
        Ok(status) => Ok(text_result(format::status::platform_status(&status))),
        Err(err) => Ok(upstream_error("Platform status", err)),
    }
}
