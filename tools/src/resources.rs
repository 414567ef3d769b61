//! Static reference data served as MCP resources.
//!
//! Champion, item and version data come from the public Data Dragon mirror
//! and are fetched once per process; queue and tier tables are embedded since
//! they change at most a couple of times a year.

use std::time::Duration;

use rmcp::model::{Annotated, RawResource, ReadResourceResult, Resource, ResourceContents};
use tokio::sync::OnceCell;

use crate::error::{Result, ServerError};

const DDRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";
const MIME_JSON: &str = "application/json";

/// Queue-id reference table, distilled from Riot's static queues.json.
const QUEUES_JSON: &str = r#"{
  "400": "5v5 Draft Pick",
  "420": "5v5 Ranked Solo",
  "430": "5v5 Blind Pick",
  "440": "5v5 Ranked Flex",
  "450": "ARAM",
  "490": "Quickplay",
  "700": "Clash",
  "720": "ARAM Clash",
  "900": "ARURF",
  "1700": "Arena"
}"#;

/// Ranked ladder reference: tier order and which tiers use divisions.
const TIERS_JSON: &str = r#"{
  "tiers": ["IRON", "BRONZE", "SILVER", "GOLD", "PLATINUM", "EMERALD", "DIAMOND",
            "MASTER", "GRANDMASTER", "CHALLENGER"],
  "divisions": ["IV", "III", "II", "I"],
  "apex": ["MASTER", "GRANDMASTER", "CHALLENGER"]
}"#;

/// Data Dragon fetcher with per-process caches.
#[derive(Debug)]
pub struct DataDragon {
    http: reqwest::Client,
    base: String,
    pinned_version: Option<String>,
    version: OnceCell<String>,
    champions: OnceCell<String>,
    items: OnceCell<String>,
    versions: OnceCell<String>,
}

impl DataDragon {
    pub fn new(pinned_version: Option<String>) -> Result<Self> {
        Self::with_base_url(DDRAGON_BASE.to_string(), pinned_version)
    }

    /// Point the fetcher at another base URL. Used by tests.
    pub fn with_base_url(base: String, pinned_version: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ServerError::DataDragon)?;
        Ok(Self {
            http,
            base,
            pinned_version,
            version: OnceCell::new(),
            champions: OnceCell::new(),
            items: OnceCell::new(),
            versions: OnceCell::new(),
        })
    }

    async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base, path);
        tracing::debug!(%url, "fetching data dragon resource");
        let res = self.http.get(&url).send().await?.error_for_status()?;
        Ok(res.text().await?)
    }

    async fn versions_json(&self) -> Result<&str> {
        self.versions
            .get_or_try_init(|| self.fetch("/api/versions.json"))
            .await
            .map(String::as_str)
    }

    /// Resolved game data version: the pin wins, otherwise the newest entry
    /// of versions.json, fetched once.
    pub async fn version(&self) -> Result<&str> {
        if let Some(pinned) = &self.pinned_version {
            return Ok(pinned);
        }
        self.version
            .get_or_try_init(|| async {
                let raw = self.versions_json().await?;
                let versions: Vec<String> = serde_json::from_str(raw).map_err(|e| {
                    ServerError::Transport(format!("unexpected versions.json payload: {e}"))
                })?;
                versions.into_iter().next().ok_or_else(|| {
                    ServerError::Transport("versions.json is empty".to_string())
                })
            })
            .await
            .map(String::as_str)
    }

    async fn champions_json(&self) -> Result<&str> {
        self.champions
            .get_or_try_init(|| async {
                let version = self.version().await?;
                self.fetch(&format!("/cdn/{version}/data/en_US/champion.json"))
                    .await
            })
            .await
            .map(String::as_str)
    }

    async fn items_json(&self) -> Result<&str> {
        self.items
            .get_or_try_init(|| async {
                let version = self.version().await?;
                self.fetch(&format!("/cdn/{version}/data/en_US/item.json")).await
            })
            .await
            .map(String::as_str)
    }

    /// The resource catalog for `resources/list`.
    pub fn list(&self) -> Vec<Resource> {
        [
            ("ddragon://versions", "versions", "Available game data versions"),
            ("ddragon://champions", "champions", "Champion summary data"),
            ("ddragon://items", "items", "Item data"),
            ("ddragon://queues", "queues", "Queue-id reference table"),
            ("ddragon://tiers", "tiers", "Ranked tier and division reference"),
        ]
        .into_iter()
        .map(|(uri, name, description)| Annotated {
            raw: RawResource {
                uri: uri.to_string(),
                name: name.to_string(),
                title: None,
                description: Some(description.to_string()),
                mime_type: Some(MIME_JSON.to_string()),
                size: None,
                icons: None,
                meta: None,
            },
            annotations: None,
        })
        .collect()
    }

    /// Serve one resource for `resources/read`; `None` for unknown URIs.
    pub async fn read(&self, uri: &str) -> Result<Option<ReadResourceResult>> {
        let text = match uri {
            "ddragon://versions" => self.versions_json().await?.to_string(),
            "ddragon://champions" => self.champions_json().await?.to_string(),
            "ddragon://items" => self.items_json().await?.to_string(),
            "ddragon://queues" => QUEUES_JSON.to_string(),
            "ddragon://tiers" => TIERS_JSON.to_string(),
            _ => return Ok(None),
        };
        Ok(Some(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(MIME_JSON.to_string()),
                text,
                meta: None,
            }],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_are_valid_json() {
        let queues: serde_json::Value = serde_json::from_str(QUEUES_JSON).unwrap();
        assert_eq!(queues["420"], "5v5 Ranked Solo");

        let tiers: serde_json::Value = serde_json::from_str(TIERS_JSON).unwrap();
        assert_eq!(tiers["divisions"][0], "IV");
    }

    #[test]
    fn catalog_lists_five_resources() {
        let ddragon = DataDragon::with_base_url("http://unused".into(), None).unwrap();
        let resources = ddragon.list();
        assert_eq!(resources.len(), 5);
        assert!(resources.iter().any(|r| r.raw.uri == "ddragon://champions"));
    }

    #[tokio::test]
    async fn pinned_version_needs_no_network() {
        let server = httpmock::MockServer::start_async().await;
        let ddragon =
            DataDragon::with_base_url(server.base_url(), Some("14.1.1".into())).unwrap();

        assert_eq!(ddragon.version().await.unwrap(), "14.1.1");
        // No mock was registered: any request would have returned 404 and failed.
    }

    #[tokio::test]
    async fn latest_version_is_first_entry_and_cached() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/api/versions.json");
                then.status(200).body(r#"["14.2.1", "14.1.1"]"#);
            })
            .await;

        let ddragon = DataDragon::with_base_url(server.base_url(), None).unwrap();
        assert_eq!(ddragon.version().await.unwrap(), "14.2.1");
        assert_eq!(ddragon.version().await.unwrap(), "14.2.1");
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn embedded_resources_are_served_without_network() {
        let server = httpmock::MockServer::start_async().await;
        let ddragon = DataDragon::with_base_url(server.base_url(), None).unwrap();

        let result = ddragon.read("ddragon://queues").await.unwrap().unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.contains("ARAM"));
            }
            other => panic!("expected text contents, got {other:?}"),
        }

        assert!(ddragon.read("ddragon://nope").await.unwrap().is_none());
    }
}
