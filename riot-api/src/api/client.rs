use std::{fmt::Debug, num::NonZeroU32, sync::Arc, time::Duration};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

use crate::types::{RiotApiError, RiotApiResponse};

use super::metrics::RequestMetrics;

const USER_AGENT: &str = concat!("league-mcp/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by every endpoint module.
///
/// Holds the API key, the governor rate limiter awaited before each request
/// and a request counter. URLs are built from a host name unless a base
/// override is set, which lets tests point the client at a local mock server.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    key: String,
    base_override: Option<String>,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    /// Create a client using the provided key, rate limit and request timeout.
    pub fn new(
        api_key: String,
        rate_limit_per_second: NonZeroU32,
        timeout: Duration,
    ) -> RiotApiResponse<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(RiotApiError::Reqwest)?;

        let quota = Quota::per_second(rate_limit_per_second);

        Ok(Self {
            http,
            limiter: RateLimiter::direct(quota),
            key: api_key,
            base_override: None,
            metrics: RequestMetrics::new("riot"),
        })
    }

    /// Create a client whose requests all target `base` instead of the real
    /// Riot hosts. Used by tests to talk to a mock HTTP server.
    pub fn with_base_url(api_key: String, base: String) -> RiotApiResponse<Self> {
        let mut client = Self::new(api_key, nonzero!(100_u32), Duration::from_secs(5))?;
        client.base_override = Some(base);
        Ok(client)
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    fn url(&self, host: &str, path_and_query: &str) -> String {
        match &self.base_override {
            Some(base) => format!("{base}{path_and_query}"),
            None => format!("https://{host}{path_and_query}"),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned + Debug>(
        &self,
        host: &str,
        path_and_query: &str,
    ) -> RiotApiResponse<T> {
        // Stay inside the Riot API rate limits before doing any request.
        self.limiter.until_ready().await;
        self.metrics.inc();

        let url = self.url(host, path_and_query);
        tracing::trace!(%url, "GET");

        let res = self
            .http
            .get(url)
            .header("X-Riot-Token", &self.key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(RiotApiError::Reqwest)?;
        match res.status() {
            StatusCode::OK => res.json().await.map_err(RiotApiError::Reqwest),
            status => Err(RiotApiError::Status(status)),
        }
    }

    pub(crate) async fn post<T: DeserializeOwned + Debug, B: Serialize + ?Sized>(
        &self,
        host: &str,
        path_and_query: &str,
        body: &B,
    ) -> RiotApiResponse<T> {
        self.limiter.until_ready().await;
        self.metrics.inc();

        let url = self.url(host, path_and_query);
        tracing::trace!(%url, "POST");

        let res = self
            .http
            .post(url)
            .header("X-Riot-Token", &self.key)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(RiotApiError::Reqwest)?;
        if res.status().is_success() {
            res.json().await.map_err(RiotApiError::Reqwest)
        } else {
            Err(RiotApiError::Status(res.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_propagates_reqwest_error() {
        let client = ApiClient::with_base_url("TEST_KEY".into(), "ht!tp://invalid".into()).unwrap();

        let res: RiotApiResponse<()> = client.get("unused", "/whatever").await;

        assert!(matches!(res, Err(RiotApiError::Reqwest(_))));
    }

    #[tokio::test]
    async fn non_ok_status_maps_to_status_error() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/missing");
                then.status(404);
            })
            .await;

        let client = ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap();
        let res: RiotApiResponse<()> = client.get("unused", "/missing").await;

        mock.assert_async().await;
        match res {
            Err(RiotApiError::Status(status)) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn api_key_header_is_sent() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/ok")
                    .header("X-Riot-Token", "TEST_KEY");
                then.status(200).json_body(serde_json::json!({"ok": true}));
            })
            .await;

        let client = ApiClient::with_base_url("TEST_KEY".into(), server.base_url()).unwrap();
        let res: RiotApiResponse<serde_json::Value> = client.get("unused", "/ok").await;

        mock.assert_async().await;
        assert_eq!(res.unwrap()["ok"], true);
    }
}
