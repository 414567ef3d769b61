//! Summoner-v4 endpoints, served from the platform hosts.

use league_mcp_shared::Platform;
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    pub async fn get_summoner_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> RiotApiResponse<SummonerDto> {
        tracing::trace!(%puuid, region = platform.as_str(), "get_summoner_by_puuid");
        let path = format!(
            "/lol/summoner/v4/summoners/by-puuid/{}",
            urlencoding::encode(puuid)
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_summoner_by_account_id(
        &self,
        platform: Platform,
        account_id: &str,
    ) -> RiotApiResponse<SummonerDto> {
        tracing::trace!(%account_id, region = platform.as_str(), "get_summoner_by_account_id");
        let path = format!(
            "/lol/summoner/v4/summoners/by-account/{}",
            urlencoding::encode(account_id)
        );
        self.get(&platform.host(), &path).await
    }

    pub async fn get_summoner_by_summoner_id(
        &self,
        platform: Platform,
        summoner_id: &str,
    ) -> RiotApiResponse<SummonerDto> {
        tracing::trace!(%summoner_id, region = platform.as_str(), "get_summoner_by_summoner_id");
        let path = format!(
            "/lol/summoner/v4/summoners/{}",
            urlencoding::encode(summoner_id)
        );
        self.get(&platform.host(), &path).await
    }

    /// Fulfillment lookup for RSO-encrypted PUUIDs.
    pub async fn get_summoner_by_rso_puuid(
        &self,
        platform: Platform,
        rso_puuid: &str,
    ) -> RiotApiResponse<SummonerDto> {
        tracing::trace!(region = platform.as_str(), "get_summoner_by_rso_puuid");
        let path = format!(
            "/fulfillment/v1/summoners/by-puuid/{}",
            urlencoding::encode(rso_puuid)
        );
        self.get(&platform.host(), &path).await
    }
}

/// Representation of the summoner data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub puuid: String,
    pub profile_icon_id: i32,
    pub revision_date: i64,
    pub summoner_level: i64,
}
