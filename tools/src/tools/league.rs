//! League-v4 tools.

use std::sync::Arc;

use rmcp::{ErrorData, handler::server::router::tool::ToolRouter, model::CallToolResult};
use serde_json::json;

use league_mcp_riot_api::ApiClient;
use league_mcp_shared::{Division, Platform, RankedQueue, Tier};

use crate::format;
use crate::registry::add_tool;
use crate::server::LeagueMcpServer;

use super::{ToolArgs, platform_property, reject, text_result, upstream_error};

fn queue_property() -> serde_json::Value {
    json!({
        "type": "string",
        "description": "Ranked queue: RANKED_SOLO_5x5 or RANKED_FLEX_SR"
    })
}

pub(crate) fn register(router: &mut ToolRouter<LeagueMcpServer>, api: &Arc<ApiClient>) {
    add_tool(
        router,
        api,
        "get_challenger_league",
        "Get the challenger league ladder for a ranked queue.",
        json!({
            "type": "object",
            "properties": {
                "queue": queue_property(),
                "region": platform_property()
            },
            "required": ["queue"]
        }),
        get_challenger_league,
    );
    add_tool(
        router,
        api,
        "get_grandmaster_league",
        "Get the grandmaster league ladder for a ranked queue.",
        json!({
            "type": "object",
            "properties": {
                "queue": queue_property(),
                "region": platform_property()
            },
            "required": ["queue"]
        }),
        get_grandmaster_league,
    );
    add_tool(
        router,
        api,
        "get_master_league",
        "Get the master league ladder for a ranked queue.",
        json!({
            "type": "object",
            "properties": {
                "queue": queue_property(),
                "region": platform_property()
            },
            "required": ["queue"]
        }),
        get_master_league,
    );
    add_tool(
        router,
        api,
        "get_league_entries_by_puuid",
        "Get a player's ranked entries (tier, LP, win/loss) by encrypted PUUID.",
        json!({
            "type": "object",
            "properties": {
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "region": platform_property()
            },
            "required": ["puuid"]
        }),
        get_league_entries_by_puuid,
    );
    add_tool(
        router,
        api,
        "get_league_entries_by_summoner_id",
        "Get a player's ranked entries by encrypted summoner ID.",
        json!({
            "type": "object",
            "properties": {
                "summoner_id": {"type": "string", "description": "Encrypted summoner ID"},
                "region": platform_property()
            },
            "required": ["summoner_id"]
        }),
        get_league_entries_by_summoner_id,
    );
    add_tool(
        router,
        api,
        "get_league_by_id",
        "Get a whole league (with all its entries) by league UUID.",
        json!({
            "type": "object",
            "properties": {
                "league_id": {"type": "string", "description": "League UUID"},
                "region": platform_property()
            },
            "required": ["league_id"]
        }),
        get_league_by_id,
    );
    add_tool(
        router,
        api,
        "get_league_entries_by_division",
        "Page through all ranked entries of a queue/tier/division.",
        json!({
            "type": "object",
            "properties": {
                "queue": queue_property(),
                "tier": {
                    "type": "string",
                    "description": "Tier: IRON, BRONZE, SILVER, GOLD, PLATINUM, EMERALD or DIAMOND"
                },
                "division": {"type": "string", "description": "Division: I, II, III or IV"},
                "page": {"type": "integer", "description": "Page number, starting at 1", "default": 1},
                "region": platform_property()
            },
            "required": ["queue", "tier", "division"]
        }),
        get_league_entries_by_division,
    );
}

fn platform(args: &ToolArgs) -> Result<Platform, String> {
    Platform::parse(args.str_or("region", "na1"))
}

fn queue(args: &ToolArgs) -> Result<Result<RankedQueue, String>, ErrorData> {
    Ok(RankedQueue::parse(args.required_str("queue")?))
}

async fn get_challenger_league(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let queue = match queue(&args)? {
        Ok(q) => q,
        Err(msg) => return Ok(reject(msg)),
    };
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_challenger_league(platform, queue).await {
        Ok(league) => Ok(text_result(format::league::league_list(&league))),
        Err(err) => Ok(upstream_error("Challenger league", err)),
    }
}

async fn get_grandmaster_league(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let queue = match queue(&args)? {
        Ok(q) => q,
        Err(msg) => return Ok(reject(msg)),
    };
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_grandmaster_league(platform, queue).await {
        Ok(league) => Ok(text_result(format::league::league_list(&league))),
        Err(err) => Ok(upstream_error("Grandmaster league", err)),
    }
}

async fn get_master_league(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let queue = match queue(&args)? {
        Ok(q) => q,
        Err(msg) => return Ok(reject(msg)),
    };
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_master_league(platform, queue).await {
        Ok(league) => Ok(text_result(format::league::league_list(&league))),
        Err(err) => Ok(upstream_error("Master league", err)),
    }
}

async fn get_league_entries_by_puuid(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_league_entries_by_puuid(platform, puuid).await {
        Ok(entries) => Ok(text_result(format::league::league_entries(&entries))),
        Err(err) => Ok(upstream_error("Ranked entries", err)),
    }
}

async fn get_league_entries_by_summoner_id(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let summoner_id = args.required_str("summoner_id")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api
        .get_league_entries_by_summoner_id(platform, summoner_id)
        .await
    {
        Ok(entries) => Ok(text_result(format::league::league_entries(&entries))),
        Err(err) => Ok(upstream_error("Ranked entries", err)),
    }
}

async fn get_league_by_id(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let league_id = args.required_str("league_id")?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_league_by_id(platform, league_id).await {
        Ok(league) => Ok(text_result(format::league::league_list(&league))),
        Err(err) => Ok(upstream_error("League", err)),
    }
}

async fn get_league_entries_by_division(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let queue = match queue(&args)? {
        Ok(q) => q,
        Err(msg) => return Ok(reject(msg)),
    };
    let tier = match Tier::parse(args.required_str("tier")?) {
        Ok(t) => t,
        Err(msg) => return Ok(reject(msg)),
    };
    let division = match Division::parse(args.required_str("division")?) {
        Ok(d) => d,
        Err(msg) => return Ok(reject(msg)),
    };
    let page = args.u32_or("page", 1)?;
    let platform = match platform(&args) {
        Ok(p) => p,
        Err(msg) => return Ok(reject(msg)),
    };
    match api
        .get_league_entries_by_division(platform, queue, tier, division, page)
        .await
    {
        Ok(entries) => Ok(text_result(format::league::league_entries(&entries))),
        Err(err) => Ok(upstream_error("Ranked entries", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: serde_json::Value) -> ToolArgs {
        ToolArgs::new(value.as_object().cloned())
    }

    fn text_of(result: &CallToolResult) -> &str {
        result
            .content
            .first()
            .and_then(|c| c.as_text())
            .map(|t| t.text.as_str())
            .unwrap()
    }

    #[tokio::test]
    async fn apex_tier_is_rejected_for_division_paging() {
        let server = httpmock::MockServer::start_async().await;
        let api =
            Arc::new(ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap());

        let result = get_league_entries_by_division(
            api,
            args(json!({
                "queue": "RANKED_SOLO_5x5",
                "tier": "CHALLENGER",
                "division": "I"
            })),
        )
        .await
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Invalid tier 'CHALLENGER'"));
    }

    #[tokio::test]
    async fn invalid_queue_is_rejected_before_any_request() {
        let server = httpmock::MockServer::start_async().await;
        let api =
            Arc::new(ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap());

        let result = get_challenger_league(api, args(json!({"queue": "RANKED_ARAM"})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Invalid queue 'RANKED_ARAM'"));
    }
}
