//! Match-v5 tools.
//!
//! These take a platform region like the rest of the tools and convert it to
//! the regional routing host internally.

use std::sync::Arc;

use rmcp::{ErrorData, handler::server::router::tool::ToolRouter, model::CallToolResult};
use serde_json::json;

use league_mcp_riot_api::ApiClient;
use league_mcp_riot_api::api::match_v5::MatchIdsFilter;
use league_mcp_shared::{Platform, Routing};

use crate::format;
use crate::registry::add_tool;
use crate::server::LeagueMcpServer;

use super::{ToolArgs, platform_property, reject, text_result, upstream_error};

pub(crate) fn register(router: &mut ToolRouter<LeagueMcpServer>, api: &Arc<ApiClient>) {
    add_tool(
        router,
        api,
        "get_match_ids_by_puuid",
        "Get a player's recent match IDs, optionally filtered by time window, queue or type.",
        json!({
            "type": "object",
            "properties": {
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "start_time": {"type": "integer", "description": "Epoch seconds; only matches after this"},
                "end_time": {"type": "integer", "description": "Epoch seconds; only matches before this"},
                "queue": {"type": "integer", "description": "Queue ID filter (e.g. 420 for ranked solo)"},
                "match_type": {"type": "string", "description": "Match type filter (ranked, normal, tourney, tutorial)"},
                "start": {"type": "integer", "description": "Start index", "default": 0},
                "count": {"type": "integer", "description": "Number of match IDs (max 100)", "default": 20},
                "region": platform_property()
            },
            "required": ["puuid"]
        }),
        get_match_ids_by_puuid,
    );
    add_tool(
        router,
        api,
        "get_match_details",
        "Get full details of a match: teams, scorelines and objectives.",
        json!({
            "type": "object",
            "properties": {
                "match_id": {"type": "string", "description": "Match ID, e.g. NA1_1234567890"},
                "region": platform_property()
            },
            "required": ["match_id"]
        }),
        get_match_details,
    );
    add_tool(
        router,
        api,
        "get_match_timeline",
        "Get the timeline of key events (kills, objectives, buildings) for a match.",
        json!({
            "type": "object",
            "properties": {
                "match_id": {"type": "string", "description": "Match ID, e.g. NA1_1234567890"},
                "region": platform_property()
            },
            "required": ["match_id"]
        }),
        get_match_timeline,
    );
}

fn routing(args: &ToolArgs) -> Result<Routing, String> {
    Platform::parse(args.str_or("region", "na1")).map(|p| p.routing())
}

async fn get_match_ids_by_puuid(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let filter = MatchIdsFilter {
        start_time: args.optional_i64("start_time")?,
        end_time: args.optional_i64("end_time")?,
        queue: args.optional_i64("queue")?,
        match_type: args.optional_str("match_type").map(str::to_string),
        start: Some(args.u32_or("start", 0)?),
        count: Some(args.u32_or("count", 20)?),
    };
    let routing = match routing(&args) {
        Ok(r) => r,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_match_ids_by_puuid(routing, puuid, &filter).await {
        Ok(ids) => Ok(text_result(format::match_v5::match_ids(&ids, puuid))),
        Err(err) => Ok(upstream_error("Match history", err)),
    }
}

async fn get_match_details(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let match_id = args.required_str("match_id")?;
    let routing = match routing(&args) {
        Ok(r) => r,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_match(routing, match_id).await {
        Ok(match_data) => Ok(text_result(format::match_v5::match_detail(&match_data))),
        Err(err) => Ok(upstream_error("Match", err)),
    }
}

async fn get_match_timeline(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let match_id = args.required_str("match_id")?;
    let routing = match routing(&args) {
        Ok(r) => r,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_match_timeline(routing, match_id).await {
        Ok(timeline) => Ok(text_result(format::match_v5::match_timeline(&timeline))),
        Err(err) => Ok(upstream_error("Match timeline", err)),
    }
}
