//! Lol-status-v4 endpoint: platform maintenances and incidents.

use league_mcp_shared::Platform;
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::client::ApiClient;

impl ApiClient {
    pub async fn get_platform_status(
        &self,
        platform: Platform,
    ) -> RiotApiResponse<PlatformDataDto> {
        tracing::trace!(region = platform.as_str(), "get_platform_status");
        self.get(&platform.host(), "/lol/status/v4/platform-data")
            .await
    }
}

/// Representation of the platform status response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDataDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub maintenances: Vec<StatusDto>,
    #[serde(default)]
    pub incidents: Vec<StatusDto>,
}

/// A maintenance or incident entry.
///
/// This DTO keeps the API's snake_case keys, unlike the rest of the Riot API.
#[derive(Deserialize, Debug, Clone)]
pub struct StatusDto {
    pub id: i64,
    #[serde(default)]
    pub maintenance_status: Option<String>,
    #[serde(default)]
    pub incident_severity: Option<String>,
    #[serde(default)]
    pub titles: Vec<StatusContentDto>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatusContentDto {
    pub locale: String,
    pub content: String,
}

impl StatusDto {
    /// English title, falling back to the first available locale.
    pub fn title(&self) -> &str {
        self.titles
            .iter()
            .find(|t| t.locale == "en_US")
            .or_else(|| self.titles.first())
            .map(|t| t.content.as_str())
            .unwrap_or("No title")
    }
}
