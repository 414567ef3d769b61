//! Account-v1 tools.

use std::sync::Arc;

use rmcp::{ErrorData, handler::server::router::tool::ToolRouter, model::CallToolResult};
use serde_json::json;

use league_mcp_riot_api::ApiClient;
use league_mcp_shared::{Game, Routing};

use crate::format;
use crate::registry::add_tool;
use crate::server::LeagueMcpServer;

use super::{ToolArgs, reject, routing_property, text_result, upstream_error};

pub(crate) fn register(router: &mut ToolRouter<LeagueMcpServer>, api: &Arc<ApiClient>) {
    add_tool(
        router,
        api,
        "get_account_by_puuid",
        "Get Riot account information (game name and tag line) by encrypted PUUID.",
        json!({
            "type": "object",
            "properties": {
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "region": routing_property()
            },
            "required": ["puuid"]
        }),
        get_account_by_puuid,
    );
    add_tool(
        router,
        api,
        "get_account_by_riot_id",
        "Get Riot account information by Riot ID (game name + tag line).",
        json!({
            "type": "object",
            "properties": {
                "game_name": {"type": "string", "description": "Game name part of the Riot ID"},
                "tag_line": {"type": "string", "description": "Tag line part of the Riot ID"},
                "region": routing_property()
            },
            "required": ["game_name", "tag_line"]
        }),
        get_account_by_riot_id,
    );
    add_tool(
        router,
        api,
        "get_active_shard",
        "Get the active shard for a VALORANT or Legends of Runeterra player.",
        json!({
            "type": "object",
            "properties": {
                "game": {"type": "string", "description": "Game identifier: val or lor"},
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "region": routing_property()
            },
            "required": ["game", "puuid"]
        }),
        get_active_shard,
    );
    add_tool(
        router,
        api,
        "get_active_region",
        "Get the active region for a League of Legends or Teamfight Tactics player.",
        json!({
            "type": "object",
            "properties": {
                "game": {"type": "string", "description": "Game identifier: lol or tft"},
                "puuid": {"type": "string", "description": "Encrypted PUUID (78 characters)"},
                "region": routing_property()
            },
            "required": ["game", "puuid"]
        }),
        get_active_region,
    );
}

fn routing(args: &ToolArgs) -> Result<Routing, String> {
    Routing::parse(args.str_or("region", "americas"))
}

async fn get_account_by_puuid(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let routing = match routing(&args) {
        Ok(r) => r,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_account_by_puuid(routing, puuid).await {
        Ok(account) => Ok(text_result(format::account::account(&account))),
        Err(err) => Ok(upstream_error("Account", err)),
    }
}

async fn get_account_by_riot_id(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let game_name = args.required_str("game_name")?;
    let tag_line = args.required_str("tag_line")?;
    let routing = match routing(&args) {
        Ok(r) => r,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_account_by_riot_id(routing, game_name, tag_line).await {
        Ok(account) => Ok(text_result(format::account::account(&account))),
        Err(err) => Ok(upstream_error("Account", err)),
    }
}

async fn get_active_shard(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let game = match Game::parse(args.required_str("game")?) {
        Ok(g) => g,
        Err(msg) => return Ok(reject(msg)),
    };
    if !game.has_shards() {
        return Ok(reject(format!(
            "Active shards are only available for val and lor, not '{}'.",
            game.as_str()
        )));
    }
    let routing = match routing(&args) {
        Ok(r) => r,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_active_shard(routing, game, puuid).await {
        Ok(shard) => Ok(text_result(format::account::active_shard(&shard))),
        Err(err) => Ok(upstream_error("Active shard", err)),
    }
}

async fn get_active_region(
    api: Arc<ApiClient>,
    args: ToolArgs,
) -> Result<CallToolResult, ErrorData> {
    let puuid = args.required_str("puuid")?;
    let game = match Game::parse(args.required_str("game")?) {
        Ok(g) => g,
        Err(msg) => return Ok(reject(msg)),
    };
    if !game.has_account_region() {
        return Ok(reject(format!(
            "Active region lookups are only available for lol and tft, not '{}'.",
            game.as_str()
        )));
    }
    let routing = match routing(&args) {
        Ok(r) => r,
        Err(msg) => return Ok(reject(msg)),
    };
    match api.get_active_region(routing, game, puuid).await {
        Ok(region) => Ok(text_result(format::account::active_region(&region))),
        Err(err) => Ok(upstream_error("Active region", err)),
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
    async fn invalid_region_is_rejected_before_any_request() {
        // No mocks registered: a request would 404 and surface as an HTTP
        // error instead of the validation message.
        let server = httpmock::MockServer::start_async().await;
        let api =
            Arc::new(ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap());

        let result = get_account_by_puuid(api, args(json!({"puuid": "abc", "region": "narnia"})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Invalid routing region 'narnia'"));
    }

    #[tokio::test]
    async fn shard_lookup_rejects_games_without_shards() {
        let server = httpmock::MockServer::start_async().await;
        let api =
            Arc::new(ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap());

        let result = get_active_shard(api, args(json!({"game": "lol", "puuid": "abc"})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("only available for val and lor"));
    }

    #[tokio::test]
    async fn missing_required_argument_is_a_protocol_error() {
        let server = httpmock::MockServer::start_async().await;
        let api =
            Arc::new(ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap());

        assert!(get_account_by_riot_id(api, args(json!({"game_name": "Foo"})))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn upstream_404_becomes_a_short_error_message() {
        let server = httpmock::MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/riot/account/v1/accounts/by-riot-id/Nobody/0000");
                then.status(404);
            })
            .await;
        let api =
            Arc::new(ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap());

        let result = get_account_by_riot_id(
            api,
            args(json!({"game_name": "Nobody", "tag_line": "0000"})),
        )
        .await
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Account not found.");
    }

    #[tokio::test]
    async fn identifiers_pass_through_to_the_text_block() {
        let server = httpmock::MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/riot/account/v1/accounts/by-puuid/abc123");
                then.status(200).json_body(json!({
                    "puuid": "abc123",
                    "gameName": "Le Conservateur",
                    "tagLine": "3012"
                }));
            })
            .await;
        let api =
            Arc::new(ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap());

        let result = get_account_by_puuid(api, args(json!({"puuid": "abc123"})))
            .await
            .unwrap();

        assert_eq!(result.is_error, None);
        let text = text_of(&result);
        assert!(text.contains("PUUID: abc123"));
        assert!(text.contains("Riot ID: Le Conservateur#3012"));
    }
}
