//! Spectator-v5 endpoints: live game lookups and featured games.

use league_mcp_shared::Platform;
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    pub async fn get_active_game(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<CurrentGameInfoDto> {
        tracing::trace!(%puuid, region = platform.as_str(), "get_active_game");
        let path = format!(
            "/lol/spectator/v5/active-games/by-summoner/{}",
            urlencoding::encode(puuid)
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_featured_games(
        &self,
        platform: Platform,
    ) -> RiotApiResponse<FeaturedGamesDto> {
        tracing::trace!(region = platform.as_str(), "get_featured_games");
        self.get(&platform.host(), "/lol/spectator/v5/featured-games")
            .await
    }
}

/// Representation of a live game response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfoDto {
    pub game_id: i64,
    pub game_type: String,
    pub game_mode: String,
    #[serde(default)]
    pub game_length: i64,
    pub map_id: i64,
    #[serde(default)]
    pub game_queue_config_id: Option<i64>,
    #[serde(default)]
    pub participants: Vec<CurrentGameParticipantDto>,
    #[serde(default)]
    pub banned_champions: Vec<BannedChampionDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipantDto {
    pub team_id: i64,
    pub champion_id: i64,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub riot_id: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BannedChampionDto {
    pub champion_id: i64,
    pub team_id: i64,
    #[serde(default)]
    pub pick_turn: i32,
}

/// Representation of the featured games response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGamesDto {
    #[serde(default)]
    pub game_list: Vec<CurrentGameInfoDto>,
    #[serde(default)]
    pub client_refresh_interval: Option<i64>,
}
