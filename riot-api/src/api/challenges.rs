//! Challenges-v1 endpoints: challenge configs, leaderboards and player progress.

use std::collections::HashMap;

use league_mcp_shared::{ApexLevel, Platform};
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    pub async fn get_challenge_configs(
        &self,
        platform: Platform,
    ) -> RiotApiResponse<Vec<ChallengeConfigDto>> {
        tracing::trace!(region = platform.as_str(), "get_challenge_configs");
        self.get(&platform.host(), "/lol/challenges/v1/challenges/config")
            .await
    }

    pub async fn get_challenge_config(
        &self,
        platform: Platform,
        challenge_id: i64,
    ) -> RiotApiResponse<ChallengeConfigDto> {
        tracing::trace!(challenge_id, region = platform.as_str(), "get_challenge_config");
        let path = format!("/lol/challenges/v1/challenges/{}/config", challenge_id);
        self.get(&platform.host(), &path).await
    }

    pub async fn get_challenge_leaderboard(
        &self,
        platform: Platform,
        challenge_id: i64,
        level: ApexLevel,
        limit: u32,
    ) -> RiotApiResponse<Vec<ApexPlayerInfoDto>> {
        tracing::trace!(
            challenge_id,
            level = level.as_str(),
            limit,
            region = platform.as_str(),
            "get_challenge_leaderboard"
        );
        let path = format!(
            "/lol/challenges/v1/challenges/{}/leaderboards/by-level/{}?limit={}",
            challenge_id,
            level.as_str(),
            limit
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_player_challenges(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<PlayerChallengesDto> {
        tracing::trace!(%puuid, region = platform.as_str(), "get_player_challenges");
        let path = format!(
            "/lol/challenges/v1/player-data/{}",
            urlencoding::encode(puuid)
        );
        self.get(&platform.host(), &path).await
    }
}

/// Representation of a challenge configuration.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeConfigDto {
    pub id: i64,
    /// Locale → { "name": ..., "description": ... }
    #[serde(default)]
    pub localized_names: HashMap<String, HashMap<String, String>>,
    pub state: String,
    #[serde(default)]
    pub tracking: Option<String>,
    #[serde(default)]
    pub start_timestamp: Option<i64>,
    #[serde(default)]
    pub end_timestamp: Option<i64>,
    #[serde(default)]
    pub leaderboard: bool,
    #[serde(default)]
    pub thresholds: HashMap<String, f64>,
}

impl ChallengeConfigDto {
    /// English display name, falling back to the numeric id.
    pub fn display_name(&self) -> String {
        self.localized_names
            .get("en_US")
            .and_then(|names| names.get("name"))
            .cloned()
            .unwrap_or_else(|| format!("Challenge {}", self.id))
    }

    pub fn description(&self) -> Option<&str> {
        self.localized_names
            .get("en_US")
            .and_then(|names| names.get("description"))
            .map(String::as_str)
    }
}

/// One row of an apex challenge leaderboard.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApexPlayerInfoDto {
    pub puuid: String,
    pub value: f64,
    pub position: i32,
}

/// Representation of the per-player challenge progress response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerChallengesDto {
    #[serde(default)]
    pub total_points: Option<ChallengePointsDto>,
    #[serde(default)]
    pub category_points: HashMap<String, ChallengePointsDto>,
    #[serde(default)]
    pub challenges: Vec<ChallengeInfoDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePointsDto {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub percentile: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeInfoDto {
    pub challenge_id: i64,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub percentile: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_id() {
        let config: ChallengeConfigDto = serde_json::from_value(serde_json::json!({
            "id": 101_000,
            "state": "ENABLED"
        }))
        .unwrap();

        assert_eq!(config.display_name(), "Challenge 101000");
        assert!(config.description().is_none());
    }

    #[test]
    fn display_name_prefers_english_locale() {
        let config: ChallengeConfigDto = serde_json::from_value(serde_json::json!({
            "id": 1,
            "state": "ENABLED",
            "localizedNames": {
                "en_US": {"name": "ARAM Authority", "description": "Win ARAM games"}
            }
        }))
        .unwrap();

        assert_eq!(config.display_name(), "ARAM Authority");
        assert_eq!(config.description(), Some("Win ARAM games"));
    }
}
