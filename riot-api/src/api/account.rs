//! Account-v1 endpoints, served from the regional routing hosts.

use league_mcp_shared::{Game, Routing};
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    pub async fn get_account_by_puuid(
        &self,
        routing: Routing,
        puuid: &str,
    ) -> RiotApiResponse<AccountDto> {
        tracing::trace!(%puuid, region = routing.as_str(), "get_account_by_puuid");
        let path = format!(
            "/riot/account/v1/accounts/by-puuid/{}",
            urlencoding::encode(puuid)
        );
        self.get(&routing.host(), &path).await
    }

    pub async fn get_account_by_riot_id(
        &self,
        routing: Routing,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResponse<AccountDto> {
        tracing::trace!(%game_name, %tag_line, region = routing.as_str(), "get_account_by_riot_id");
        let path = format!(
            "/riot/account/v1/accounts/by-riot-id/{}/{}",
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );
        self.get(&routing.host(), &path).await
    }

    pub async fn get_active_shard(
        &self,
        routing: Routing,
        game: Game,
        puuid: &str,
    ) -> RiotApiResponse<ActiveShardDto> {
        tracing::trace!(game = game.as_str(), %puuid, "get_active_shard");
        let path = format!(
            "/riot/account/v1/active-shards/by-game/{}/by-puuid/{}",
            game.as_str(),
            urlencoding::encode(puuid)
        );
        self.get(&routing.host(), &path).await
    }

    pub async fn get_active_region(
        &self,
        routing: Routing,
        game: Game,
        puuid: &str,
    ) -> RiotApiResponse<AccountRegionDto> {
        tracing::trace!(game = game.as_str(), %puuid, "get_active_region");
        let path = format!(
            "/riot/account/v1/region/by-game/{}/by-puuid/{}",
            game.as_str(),
            urlencoding::encode(puuid)
        );
        self.get(&routing.host(), &path).await
    }
}

/// Representation of the account data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

/// Representation of the active shard response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActiveShardDto {
    pub puuid: String,
    pub game: String,
    pub active_shard: String,
}

/// Representation of the account region response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountRegionDto {
    pub puuid: String,
    pub game: String,
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn riot_id_path_segments_are_encoded() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/riot/account/v1/accounts/by-riot-id/Le%20Conservateur/3012");
                then.status(200).json_body(serde_json::json!({
                    "puuid": "abc",
                    "gameName": "Le Conservateur",
                    "tagLine": "3012"
                }));
            })
            .await;

        let client = ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap();
        let account = client
            .get_account_by_riot_id(Routing::Europe, "Le Conservateur", "3012")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(account.puuid, "abc");
        assert_eq!(account.game_name.as_deref(), Some("Le Conservateur"));
    }
}
