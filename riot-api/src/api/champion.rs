//! Champion-v3 endpoint: the free-to-play rotation.

use league_mcp_shared::Platform;
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    pub async fn get_champion_rotation(
        &self,
        platform: Platform,
    ) -> RiotApiResponse<ChampionRotationDto> {
        tracing::trace!(region = platform.as_str(), "get_champion_rotation");
        self.get(&platform.host(), "/lol/platform/v3/champion-rotations")
            .await
    }
}

/// Representation of the champion rotation response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChampionRotationDto {
    #[serde(default)]
    pub free_champion_ids: Vec<i64>,
    #[serde(default)]
    pub free_champion_ids_for_new_players: Vec<i64>,
    #[serde(default)]
    pub max_new_player_level: i32,
}
