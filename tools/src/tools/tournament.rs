//! Tournament-stub-v5 tools, the only POST operations in the registry.

use std::sync::Arc;

use rmcp::{ErrorData, handler::server::router::tool::ToolRouter, model::CallToolResult};
use serde_json::json;

use league_mcp_riot_api::ApiClient;
use league_mcp_riot_api::api::tournament::TournamentCodeParams;
use league_mcp_shared::Platform;

use crate::format;
use crate::registry::add_tool;
use crate::server::LeagueMcpServer;

use super::{ToolArgs, platform_property, reject, text_result, upstream_error};

pub(crate) fn register(router: &mut ToolRouter<LeagueMcpServer>, api: &Arc<ApiClient>) {
    add_tool(
        router,
        api,
        "create_tournament_provider",
        "Register a tournament provider with a callback URL for match results.",
        json!({
            "type": "object",
            "properties": {
                "callback_url": {
                    "type": "string",
                    "description": "HTTPS URL that will receive match result callbacks"
                },
                "region": platform_property()
            },
            "required": ["callback_url"]
        }),
        create_tournament_provider,
    );
    add_tool(
        router,
        api,
        "create_tournament",
        "Create a tournament under an existing provider.",
        json!({
            "type": "object",
            "properties": {
                "provider_id": {"type": "integer", "description": "Provider ID from create_tournament_provider"},
                "name": {"type": "string", "description": "Tournament display name"},
                "region": platform_property()
            },
            "required": ["provider_id", "name"]
        }),
        create_tournament,
    );
    add_tool(
        router,
        api,
        "generate_tournament_codes",
        "Generate tournament codes for lobbies of a tournament.",
        json!({
            "type": "object",
            "properties": {
                "tournament_id": {"type": "integer", "description": "Tournament ID from create_tournament"},
                "count": {"type": "integer", "description": "Number of codes to generate", "default": 1},
                "team_size": {"type": "integer", "description": "Players per team", "default": 5},
                "spectator_type": {"type": "string", "description": "NONE, LOBBYONLY or ALL", "default": "ALL"},
                "pick_type": {"type": "string", "description": "BLIND_PICK, DRAFT_MODE, ALL_RANDOM or TOURNAMENT_DRAFT", "default": "TOURNAMENT_DRAFT"},
                "map_type": {"type": "string", "description": "SUMMONERS_RIFT or HOWLING_ABYSS", "default": "SUMMONERS_RIFT"},
                "region": platform_property()
            },
            "required": ["tournament_id"]
        }),
        generate_tournament_codes,
    );
    add_tool(
        router,
        api,
        "get_tournament_lobby_events",
        "Get the lobby events recorded for a tournament code.",
        json!({
            "type": "object",
            "properties": {
                "tournament_code": {"type": "string", "description": "Tournament code"},
                "region": platform_property()
            },
            "required": ["tournament_code"]
        }),
        get_tournament_lobby_events,
    );
}

async fn create_tournament_provider(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let callback_url = args.required_str("callback_url")?;
    let platform = match Platform::parse(args.str_or("region", "na1")) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.create_tournament_provider(platform, callback_url).await {
        Ok(provider_id) => Ok(text_result(format::tournament::provider_created(provider_id))),
        Err(err) => Ok(upstream_error("Tournament provider", err)),
    }
}

async fn create_tournament(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let provider_id = args.required_i64("provider_id")?;
    let name = args.required_str("name")?;
    match api.create_tournament(provider_id, name).await {
        Ok(tournament_id) => Ok(text_result(format::tournament::tournament_created(
            tournament_id,
            name,
        ))),
        Err(err) => Ok(upstream_error("Tournament", err)),
    }
}

async fn generate_tournament_codes(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let tournament_id = args.required_i64("tournament_id")?;
    let count = args.u32_or("count", 1)?;
    let defaults = TournamentCodeParams::default();
    let params = TournamentCodeParams {
        team_size: args.u32_or("team_size", defaults.team_size)?,
        spectator_type: args
            .str_or("spectator_type", &defaults.spectator_type)
            .to_uppercase(),
        pick_type: args.str_or("pick_type", &defaults.pick_type).to_uppercase(),
        map_type: args.str_or("map_type", &defaults.map_type).to_uppercase(),
    };
    match api
        .generate_tournament_codes(tournament_id, count, &params)
        .await
    {
        Ok(codes) => Ok(text_result(format::tournament::codes(&codes))),
        Err(err) => Ok(upstream_error("Tournament codes", err)),
    }
}

async fn get_tournament_lobby_events(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let code = args.required_str("tournament_code")?;
    match api.get_tournament_lobby_events(code).await {
        Ok(events) => Ok(text_result(format::tournament::lobby_events(code, &events))),
        Err(err) => Ok(upstream_error("Lobby events", err)),
    }
}
