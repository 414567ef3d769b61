//! Spectator-v5 tools.

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
        "get_active_game",
        "Get the game a player is currently in, with both teams and bans.",
        json!({
            "type": "object",
            "properties": {
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "region": platform_property()
            },
            "required": ["puuid"]
        }),
        get_active_game,
    );
    add_tool(
        router,
        api,
        "get_featured_games",
        "Get the list of currently featured live games.",
        json!({
            "type": "object",
            "properties": {
                "region": platform_property()
            }
        }),
        get_featured_games,
    );
}

async fn get_active_game(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let platform = match Platform::parse(args.str_or("region", "na1")) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_active_game(platform, puuid).await {
        Ok(game) => Ok(text_result(format::spectator::active_game(&game))),
        // A 404 here just means the player is not in game right now.
        Err(err) => Ok(upstream_error("Active game", err)),
    }
}

async fn get_featured_games(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let platform = match Platform::parse(args.str_or("region", "na1")) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_featured_games(platform).await {
        Ok(games) => Ok(text_result(format::spectator::featured_games(&games))),
        Err(err) => Ok(upstream_error("Featured games", err)),
    }
}
