//! Summoner-v4 tools.

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
        "get_summoner_by_puuid",
        "Get summoner information (level, profile icon, ids) by encrypted PUUID.",
        json!({
            "type": "object",
            "properties": {
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "region": platform_property()
            },
            "required": ["puuid"]
        }),
        get_summoner_by_puuid,
    );
    add_tool(
        router,
        api,
        "get_summoner_by_account_id",
        "Get summoner information by encrypted account ID.",
        json!({
            "type": "object",
            "properties": {
                "account_id": {"type": "string", "description": "Encrypted account ID"},
                "region": platform_property()
            },
            "required": ["account_id"]
        }),
        get_summoner_by_account_id,
    );
    add_tool(
        router,
        api,
        "get_summoner_by_summoner_id",
        "Get summoner information by encrypted summoner ID.",
        json!({
            "type": "object",
            "properties": {
                "summoner_id": {"type": "string", "description": "Encrypted summoner ID"},
                "region": platform_property()
            },
            "required": ["summoner_id"]
        }),
        get_summoner_by_summoner_id,
    );
    add_tool(
        router,
        api,
        "get_summoner_by_rso_puuid",
        "Get summoner information by RSO-encrypted PUUID (fulfillment endpoint).",
        json!({
            "type": "object",
            "properties": {
                "rso_puuid": {"type": "string", "description": "RSO-encrypted PUUID"},
                "region": platform_property()
            },
            "required": ["rso_puuid"]
        }),
        get_summoner_by_rso_puuid,
    );
}

fn platform(args: &ToolArgs) -> Result<Platform, String> {
    Platform::parse(args.str_or("region", "na1"))
}

async fn get_summoner_by_puuid(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_summoner_by_puuid(platform, puuid).await {
        Ok(summoner) => Ok(text_result(format::summoner::summoner(&summoner))),
        Err(err) => Ok(upstream_error("Summoner", err)),
    }
}

async fn get_summoner_by_account_id(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let account_id = args.required_str("account_id")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_summoner_by_account_id(platform, account_id).await {
        Ok(summoner) => Ok(text_result(format::summoner::summoner(&summoner))),
        Err(err) => Ok(upstream_error("Summoner", err)),
    }
}

async fn get_summoner_by_summoner_id(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let summoner_id = args.required_str("summoner_id")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_summoner_by_summoner_id(platform, summoner_id).await {
        Ok(summoner) => Ok(text_result(format::summoner::summoner(&summoner))),
        Err(err) => Ok(upstream_error("Summoner", err)),
    }
}

async fn get_summoner_by_rso_puuid(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let rso_puuid = args.required_str("rso_puuid")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_summoner_by_rso_puuid(platform, rso_puuid).await {
        Ok(summoner) => Ok(text_result(format::summoner::summoner(&summoner))),
        Err(err) => Ok(upstream_error("Summoner", err)),
    }
}
