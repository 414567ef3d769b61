//! Clash-v1 tools.

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
        "get_clash_players_by_puuid",
        "Get a player's active Clash registrations.",
        json!({
            "type": "object",
            "properties": {
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "region": platform_property()
            },
            "required": ["puuid"]
        }),
        get_clash_players_by_puuid,
    );
    add_tool(
        router,
        api,
        "get_clash_team",
        "Get a Clash team with its roster.",
        json!({
            "type": "object",
            "properties": {
                "team_id": {"type": "string", "description": "Clash team ID"},
                "region": platform_property()
            },
            "required": ["team_id"]
        }),
        get_clash_team,
    );
    add_tool(
        router,
        api,
        "get_clash_tournaments",
        "Get all active or upcoming Clash tournaments.",
        json!({
            "type": "object",
            "properties": {
                "region": platform_property()
            }
        }),
        get_clash_tournaments,
    );
    add_tool(
        router,
        api,
        "get_clash_tournament_by_team",
        "Get the Clash tournament a team is registered for.",
        json!({
            "type": "object",
            "properties": {
                "team_id": {"type": "string", "description": "Clash team ID"},
                "region": platform_property()
            },
            "required": ["team_id"]
        }),
        get_clash_tournament_by_team,
    );
    add_tool(
        router,
        api,
        "get_clash_tournament_by_id",
        "Get a Clash tournament by its numeric ID.",
        json!({
            "type": "object",
            "properties": {
                "tournament_id": {"type": "integer", "description": "Clash tournament ID"},
                "region": platform_property()
            },
            "required": ["tournament_id"]
        }),
        get_clash_tournament_by_id,
    );
}

fn platform(args: &ToolArgs) -> Result<Platform, String> {
    Platform::parse(args.str_or("region", "na1"))
}

async fn get_clash_players_by_puuid(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_clash_players_by_puuid(platform, puuid).await {
        Ok(players) => Ok(text_result(format::clash::players(&players))),
        Err(err) => Ok(upstream_error("Clash registrations", err)),
    }
}

async fn get_clash_team(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let team_id = args.required_str("team_id")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_clash_team(platform, team_id).await {
        Ok(team) => Ok(text_result(format::clash::team(&team))),
        Err(err) => Ok(upstream_error("Clash team", err)),
    }
}

async fn get_clash_tournaments(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_clash_tournaments(platform).await {
        Ok(tournaments) => Ok(text_result(format::clash::tournaments(&tournaments))),
        Err(err) => Ok(upstream_error("Clash tournaments", err)),
    }
}

async fn get_clash_tournament_by_team(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let team_id = args.required_str("team_id")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_clash_tournament_by_team(platform, team_id).await {
        Ok(tournament) => Ok(text_result(format::clash::tournament(&tournament))),
        Err(err) => Ok(upstream_error("Clash tournament", err)),
    }
}

async fn get_clash_tournament_by_id(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let tournament_id = args.required_i64("tournament_id")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_clash_tournament_by_id(platform, tournament_id).await {
        Ok(tournament) => Ok(text_result(format::clash::tournament(&tournament))),
        Err(err) => Ok(upstream_error("Clash tournament", err)),
    }
}
