//! Champion-v3 tool.

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
        "get_champion_rotation",
        "Get the current free-to-play champion rotation.",
        json!({
            "type": "object",
            "properties": {
                "region": platform_property()
            }
        }),
        get_champion_rotation,
    );
}

async fn get_champion_rotation(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let platform = match Platform::parse(args.str_or("region", "na1")) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_champion_rotation(platform).await {
        Ok(rotation) => Ok(text_result(format::champion::rotation(&rotation))),
        Err(err) => Ok(upstream_error("Champion rotation", err)),
    }
}
