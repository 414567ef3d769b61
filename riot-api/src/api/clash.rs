//! Clash-v1 endpoints: registrations, teams and tournaments.

use league_mcp_shared::Platform;
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    pub async fn get_clash_players_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<Vec<ClashPlayerDto>> {
        tracing::trace!(%puuid, region = platform.as_str(), "get_clash_players_by_puuid");
        let path = format!(
            "/lol/clash/v1/players/by-puuid/{}",
            urlencoding::encode(puuid)
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_clash_team(
        &self,
        platform: Platform,
        team_id: &str,
    ) -> RiotApiResponse<ClashTeamDto> {
        tracing::trace!(%team_id, region = platform.as_str(), "get_clash_team");
        let path = format!("/lol/clash/v1/teams/{}", urlencoding::encode(team_id));
        self.get(&platform.host(), &path).await
    }

    pub async fn get_clash_tournaments(
        &self,
        platform: Platform,
    ) -> RiotApiResponse<Vec<ClashTournamentDto>> {
        tracing::trace!(region = platform.as_str(), "get_clash_tournaments");
        self.get(&platform.host(), "/lol/clash/v1/tournaments").await
    }

    pub async fn get_clash_tournament_by_team(
        &self,
        platform: Platform,
        team_id: &str,
    ) -> RiotApiResponse<ClashTournamentDto> {
        tracing::trace!(%team_id, region = platform.as_str(), "get_clash_tournament_by_team");
        let path = format!(
            "/lol/clash/v1/tournaments/by-team/{}",
            urlencoding::encode(team_id)
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_clash_tournament_by_id(
        &self,
        platform: Platform,
        tournament_id: i64,
    ) -> RiotApiResponse<ClashTournamentDto> {
        tracing::trace!(tournament_id, region = platform.as_str(), "get_clash_tournament_by_id");
        let path = format!("/lol/clash/v1/tournaments/{}", tournament_id);
        self.get(&platform.host(), &path).await
    }
}

/// One active Clash registration for a player.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClashPlayerDto {
    #[serde(default)]
    pub summoner_id: Option<String>,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Representation of a Clash team response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClashTeamDto {
    pub id: String,
    pub tournament_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_id: Option<i64>,
    #[serde(default)]
    pub tier: Option<i32>,
    #[serde(default)]
    pub captain: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub players: Vec<ClashPlayerDto>,
}

/// Representation of a Clash tournament response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClashTournamentDto {
    pub id: i64,
    #[serde(default)]
    pub theme_id: Option<i64>,
    #[serde(default)]
    pub name_key: Option<String>,
    #[serde(default)]
    pub name_key_secondary: Option<String>,
    #[serde(default)]
    pub schedule: Vec<ClashTournamentPhaseDto>,
}

/// One phase of a Clash tournament schedule.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClashTournamentPhaseDto {
    pub id: i64,
    #[serde(default)]
    pub registration_time: i64,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub cancelled: bool,
}
