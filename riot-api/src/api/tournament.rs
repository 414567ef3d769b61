//! Tournament-stub-v5 endpoints.
//!
//! These are the only POST operations in the API surface. The stub variant is
//! used so a development key works; all tournament traffic is routed through
//! the americas host regardless of the target platform.

use league_mcp_shared::{Platform, Routing};
use serde::{Deserialize, Serialize};

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    /// Register a tournament provider; returns the provider id.
    pub async fn create_tournament_provider(
        &self,
        platform: Platform,
        callback_url: &str,
    ) -> RiotApiResponse<i64> {
        tracing::trace!(region = platform.as_str(), "create_tournament_provider");
        let body = ProviderRegistrationBody {
            region: platform.tournament_region(),
            url: callback_url,
        };
        self.post(
            &Routing::Americas.host(),
            "/lol/tournament-stub/v5/providers",
            &body,
        )
        .await
    }

    /// Create a tournament under a provider; returns the tournament id.
    pub async fn create_tournament(
        &self,
        provider_id: i64,
        name: &str,
    ) -> RiotApiResponse<i64> {
        tracing::trace!(provider_id, %name, "create_tournament");
        let body = TournamentRegistrationBody {
            provider_id,
            name,
        };
        self.post(
            &Routing::Americas.host(),
            "/lol/tournament-stub/v5/tournaments",
            &body,
        )
        .await
    }

    /// Generate tournament codes for lobbies of the given tournament.
    pub async fn generate_tournament_codes(
        &self,
        tournament_id: i64,
        count: u32,
        params: &TournamentCodeParams,
    ) -> RiotApiResponse<Vec<String>> {
        tracing::trace!(tournament_id, count, "generate_tournament_codes");
        let path = format!(
            "/lol/tournament-stub/v5/codes?tournamentId={}&count={}",
            tournament_id, count
        );
        self.post(&Routing::Americas.host(), &path, params).await
    }

    pub async fn get_tournament_lobby_events(
        &self,
        tournament_code: &str,
    ) -> RiotApiResponse<LobbyEventsDto> {
        tracing::trace!(%tournament_code, "get_tournament_lobby_events");
        let path = format!(
            "/lol/tournament-stub/v5/lobby-events/by-code/{}",
            urlencoding::encode(tournament_code)
        );
        self.get(&Routing::Americas.host(), &path).await
    }
}

#[derive(Serialize, Debug)]
struct ProviderRegistrationBody<'a> {
    region: &'a str,
    url: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TournamentRegistrationBody<'a> {
    provider_id: i64,
    name: &'a str,
}

/// Code generation parameters shared by every lobby of a batch.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeParams {
    pub team_size: u32,
    pub spectator_type: String,
    pub pick_type: String,
    pub map_type: String,
}

impl Default for TournamentCodeParams {
    fn default() -> Self {
        Self {
            team_size: 5,
            spectator_type: "ALL".into(),
            pick_type: "TOURNAMENT_DRAFT".into(),
            map_type: "SUMMONERS_RIFT".into(),
        }
    }
}

/// Representation of the lobby events response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LobbyEventsDto {
    #[serde(default)]
    pub event_list: Vec<LobbyEventDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LobbyEventDto {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub event_type: String,
    #[serde(default)]
    pub puuid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provider_registration_posts_region_code() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST)
                    .path("/lol/tournament-stub/v5/providers")
                    .json_body(serde_json::json!({
                        "region": "EUW",
                        "url": "https://example.com/callback"
                    }));
                then.status(200).json_body(serde_json::json!(42));
            })
            .await;

        let client = ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap();
        let provider_id = client
            .create_tournament_provider(Platform::Euw1, "https://example.com/callback")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(provider_id, 42);
    }
}
