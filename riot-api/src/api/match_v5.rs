//! Match-v5 endpoints, served from the regional routing hosts.

use std::collections::HashMap;

use league_mcp_shared::Routing;
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

/// Optional filters for the match id listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct MatchIdsFilter {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub queue: Option<i64>,
    pub match_type: Option<String>,
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl MatchIdsFilter {
    /// Render the non-empty filters as a query string, `?`-prefixed.
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(v) = self.start_time {
            params.push(format!("startTime={v}"));
        }
        if let Some(v) = self.end_time {
            params.push(format!("endTime={v}"));
        }
        if let Some(v) = self.queue {
            params.push(format!("queue={v}"));
        }
        if let Some(v) = &self.match_type {
            params.push(format!("type={}", urlencoding::encode(v)));
        }
        if let Some(v) = self.start {
            params.push(format!("start={v}"));
        }
        if let Some(v) = self.count {
            params.push(format!("count={v}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl ApiClient {
    pub async fn get_match_ids_by_puuid(
        &self,
        routing: Routing,
        puuid: &str,
        filter: &MatchIdsFilter,
    ) -> RiotApiResponse<Vec<String>> {
        tracing::trace!(%puuid, region = routing.as_str(), "get_match_ids_by_puuid");
        let path = format!(
            "/lol/match/v5/matches/by-puuid/{}/ids{}",
            urlencoding::encode(puuid),
            filter.to_query()
        );
        self.get(&routing.host(), &path).await
    }

    pub async fn get_match(&self, routing: Routing, match_id: &str) -> RiotApiResponse<MatchDto> {
        tracing::trace!(%match_id, region = routing.as_str(), "get_match");
        let path = format!("/lol/match/v5/matches/{}", urlencoding::encode(match_id));
        self.get(&routing.host(), &path).await
    }

    pub async fn get_match_timeline(
        &self,
        routing: Routing,
        match_id: &str,
    ) -> RiotApiResponse<TimelineDto> {
        tracing::trace!(%match_id, region = routing.as_str(), "get_match_timeline");
        let path = format!(
            "/lol/match/v5/matches/{}/timeline",
            urlencoding::encode(match_id)
        );
        self.get(&routing.host(), &path).await
    }
}

/// Representation of the match data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: MatchMetadataDto,
    pub info: MatchInfoDto,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadataDto {
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    #[serde(default)]
    pub game_creation: i64,
    #[serde(default)]
    pub game_duration: i64,
    /// Present since patch 11.20; its absence changes how `game_duration` is read.
    #[serde(default)]
    pub game_end_timestamp: Option<i64>,
    pub game_mode: String,
    pub game_type: String,
    #[serde(default)]
    pub game_version: Option<String>,
    #[serde(default)]
    pub map_id: i64,
    #[serde(default)]
    pub queue_id: i64,
    #[serde(default)]
    pub platform_id: Option<String>,
    #[serde(default)]
    pub participants: Vec<MatchParticipantDto>,
    #[serde(default)]
    pub teams: Vec<MatchTeamDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipantDto {
    #[serde(default)]
    pub puuid: Option<String>,
    pub champion_name: String,
    pub team_id: i64,
    #[serde(default)]
    pub team_position: Option<String>,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    #[serde(default)]
    pub total_minions_killed: i32,
    #[serde(default)]
    pub neutral_minions_killed: i32,
    #[serde(default)]
    pub gold_earned: i64,
    #[serde(default)]
    pub total_damage_dealt_to_champions: i64,
    #[serde(default)]
    pub riot_id_game_name: Option<String>,
    #[serde(default)]
    pub riot_id_tagline: Option<String>,
}

impl MatchParticipantDto {
    /// Creep score: lane plus jungle minions.
    pub fn cs(&self) -> i32 {
        self.total_minions_killed + self.neutral_minions_killed
    }

    /// `GameName#TagLine` when known.
    pub fn riot_id(&self) -> String {
        format!(
            "{}#{}",
            self.riot_id_game_name.as_deref().unwrap_or("N/A"),
            self.riot_id_tagline.as_deref().unwrap_or("N/A")
        )
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeamDto {
    pub team_id: i64,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub objectives: HashMap<String, ObjectiveDto>,
}

impl MatchTeamDto {
    pub fn objective_kills(&self, name: &str) -> i32 {
        self.objectives.get(name).map(|o| o.kills).unwrap_or(0)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveDto {
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub kills: i32,
}

/// Representation of the match timeline response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDto {
    pub metadata: MatchMetadataDto,
    pub info: TimelineInfoDto,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfoDto {
    #[serde(default)]
    pub frame_interval: i64,
    #[serde(default)]
    pub frames: Vec<TimelineFrameDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrameDto {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub events: Vec<TimelineEventDto>,
}

/// Timeline events are heterogeneous; only the fields the formatter needs are kept.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventDto {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub killer_id: Option<i64>,
    #[serde(default)]
    pub victim_id: Option<i64>,
    #[serde(default)]
    pub assisting_participant_ids: Vec<i64>,
    #[serde(default)]
    pub monster_type: Option<String>,
    #[serde(default)]
    pub building_type: Option<String>,
    #[serde(default)]
    pub lane_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_only_includes_set_fields() {
        let empty = MatchIdsFilter::default();
        assert_eq!(empty.to_query(), "");

        let filter = MatchIdsFilter {
            queue: Some(420),
            count: Some(5),
            match_type: Some("ranked".into()),
            ..Default::default()
        };
        assert_eq!(filter.to_query(), "?queue=420&type=ranked&count=5");
    }

    #[tokio::test]
    async fn match_ids_request_carries_filters() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/lol/match/v5/matches/by-puuid/abc/ids")
                    .query_param("queue", "420")
                    .query_param("count", "2");
                then.status(200)
                    .json_body(serde_json::json!(["NA1_1", "NA1_2"]));
            })
            .await;

        let client = ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap();
        let filter = MatchIdsFilter {
            queue: Some(420),
            count: Some(2),
            ..Default::default()
        };
        let ids = client
            .get_match_ids_by_puuid(Routing::Americas, "abc", &filter)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(ids, vec!["NA1_1".to_string(), "NA1_2".to_string()]);
    }
}
