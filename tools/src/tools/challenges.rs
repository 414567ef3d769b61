//! Challenges-v1 tools.

use std::sync::Arc;

use rmcp::{ErrorData, handler::server::router::tool::ToolRouter, model::CallToolResult};
use serde_json::json;

use league_mcp_riot_api::ApiClient;
use league_mcp_shared::{ApexLevel, Platform};

use crate::format;
use crate::registry::add_tool;
use crate::server::LeagueMcpServer;

use super::{ToolArgs, platform_property, reject, text_result, upstream_error};

pub(crate) fn register(router: &mut ToolRouter<LeagueMcpServer>, api: &Arc<ApiClient>) {
    add_tool(
        router,
        api,
        "get_challenge_configs",
        "List all challenge configurations, grouped by state.",
        json!({
            "type": "object",
            "properties": {
                "region": platform_property()
            }
        }),
        get_challenge_configs,
    );
    add_tool(
        router,
        api,
        "get_challenge_config",
        "Get one challenge configuration (name, thresholds, timings) by ID.",
        json!({
            "type": "object",
            "properties": {
                "challenge_id": {"type": "integer", "description": "Challenge ID"},
                "region": platform_property()
            },
            "required": ["challenge_id"]
        }),
        get_challenge_config,
    );
    add_tool(
        router,
        api,
        "get_challenge_leaderboard",
        "Get the apex leaderboard of a challenge at MASTER, GRANDMASTER or CHALLENGER level.",
        json!({
            "type": "object",
            "properties": {
                "challenge_id": {"type": "integer", "description": "Challenge ID"},
                "level": {
                    "type": "string",
                    "description": "Apex level: MASTER, GRANDMASTER or CHALLENGER"
                },
                "limit": {"type": "integer", "description": "Maximum rows returned", "default": 25},
                "region": platform_property()
            },
            "required": ["challenge_id", "level"]
        }),
        get_challenge_leaderboard,
    );
    add_tool(
        router,
        api,
        "get_player_challenges",
        "Get a player's challenge progress and category points by encrypted PUUID.",
        json!({
            "type": "object",
            "properties": {
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "region": platform_property()
            },
            "required": ["puuid"]
        }),
        get_player_challenges,
    );
}

fn platform(args: &ToolArgs) -> Result<Platform, String> {
    Platform::parse(args.str_or("region", "na1"))
}

async fn get_challenge_configs(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_challenge_configs(platform).await {
        Ok(configs) => Ok(text_result(format::challenges::configs(&configs))),
        Err(err) => Ok(upstream_error("Challenge configurations", err)),
    }
}

async fn get_challenge_config(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let challenge_id = args.required_i64("challenge_id")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_challenge_config(platform, challenge_id).await {
        Ok(config) => Ok(text_result(format::challenges::config(&config))),
        Err(err) => Ok(upstream_error("Challenge", err)),
    }
}

async fn get_challenge_leaderboard(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let challenge_id = args.required_i64("challenge_id")?;
    let level = match ApexLevel::parse(args.required_str("level")?) {
        Ok(l) => l,
        Err(msg) => return Ok(reject(msg)),
    };
    let limit = args.u32_or("limit", 25)?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api
        .get_challenge_leaderboard(platform, challenge_id, level, limit)
        .await
    {
        Ok(rows) => Ok(text_result(format::challenges::leaderboard(
            &rows,
            level.as_str(),
        ))),
        Err(err) => Ok(upstream_error("Challenge leaderboard", err)),
    }
}

async fn get_player_challenges(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_player_challenges(platform, puuid).await {
        Ok(player) => Ok(text_result(format::challenges::player(&player))),
        Err(err) => Ok(upstream_error("Player challenges", err)),
    }
}
