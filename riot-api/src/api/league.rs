//! League-v4 endpoints: apex ladders and per-player ranked entries.

use league_mcp_shared::{Division, Platform, RankedQueue, Tier};
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    pub async fn get_challenger_league(
        &self,
        platform: Platform,
        queue: RankedQueue,
    ) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!(queue = queue.as_str(), region = platform.as_str(), "get_challenger_league");
        let path = format!("/lol/league/v4/challengerleagues/by-queue/{}", queue.as_str());
        self.get(&platform.host(), &path).await
    }

    pub async fn get_grandmaster_league(
        &self,
        platform: Platform,
        queue: RankedQueue,
    ) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!(queue = queue.as_str(), region = platform.as_str(), "get_grandmaster_league");
        let path = format!(
            "/lol/league/v4/grandmasterleagues/by-queue/{}",
            queue.as_str()
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_master_league(
        &self,
        platform: Platform,
        queue: RankedQueue,
    ) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!(queue = queue.as_str(), region = platform.as_str(), "get_master_league");
        let path = format!("/lol/league/v4/masterleagues/by-queue/{}", queue.as_str());
        self.get(&platform.host(), &path).await
    }

    pub async fn get_league_by_id(
        &self,
        platform: Platform,
        league_id: &str,
    ) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!(%league_id, region = platform.as_str(), "get_league_by_id");
        let path = format!("/lol/league/v4/leagues/{}", urlencoding::encode(league_id));
        self.get(&platform.host(), &path).await
    }

    pub async fn get_league_entries_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!(%puuid, region = platform.as_str(), "get_league_entries_by_puuid");
        let path = format!(
            "/lol/league/v4/entries/by-puuid/{}",
            urlencoding::encode(puuid)
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_league_entries_by_summoner_id(
        &self,
        platform: Platform,
        summoner_id: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!(%summoner_id, region = platform.as_str(), "get_league_entries_by_summoner_id");
        let path = format!(
            "/lol/league/v4/entries/by-summoner/{}",
            urlencoding::encode(summoner_id)
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_league_entries_by_division(
        &self,
        platform: Platform,
        queue: RankedQueue,
        tier: Tier,
        division: Division,
        page: u32,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!(
            queue = queue.as_str(),
            tier = tier.as_str(),
            division = division.as_str(),
            page,
            "get_league_entries_by_division"
        );
        let path = format!(
            "/lol/league/v4/entries/{}/{}/{}?page={}",
            queue.as_str(),
            tier.as_str(),
            division.as_str(),
            page
        );
        self.get(&platform.host(), &path).await
    }
}

/// Representation of an apex league ladder response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueListDto {
    pub league_id: String,
    pub tier: String,
    #[serde(default)]
    pub name: Option<String>,
    pub queue: String,
    pub entries: Vec<LeagueItemDto>,
}

/// A single ladder row inside a [`LeagueListDto`].
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueItemDto {
    #[serde(default)]
    pub summoner_id: Option<String>,
    #[serde(default)]
    pub puuid: Option<String>,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub inactive: bool,
}

/// Representation of a per-player ranked entry.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default)]
    pub summoner_id: Option<String>,
    #[serde(default)]
    pub puuid: Option<String>,
    pub queue_type: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub mini_series: Option<MiniSeriesDto>,
}

/// Promotion series state attached to an entry at 100 LP.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MiniSeriesDto {
    pub target: i32,
    pub progress: String,
    pub wins: i32,
    pub losses: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn entries_by_division_builds_paged_path() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/lol/league/v4/entries/RANKED_SOLO_5x5/GOLD/II")
                    .query_param("page", "3");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;

        let client = ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap();
        let entries = client
            .get_league_entries_by_division(
                Platform::Na1,
                RankedQueue::SoloDuo,
                Tier::Gold,
                Division::II,
                3,
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(entries.is_empty());
    }
}
