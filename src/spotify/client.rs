//! Chart provider HTTP client
//!
//! Handles communication with the toplist web service. The service is a
//! plain JSON-over-GET API with no authentication; the two endpoints we use
//! are the catalog (`toplist/charts`) and individual toplists
//! (`toplist/{chart_id}/`).
//!
//! Note: the chart id is a composite `typeId/geoId` containing a literal
//! `/`. It goes into the URL path verbatim - percent-encoding the slash
//! would break the endpoint.

use super::dto;
use crate::config::ChartsConfig;
use crate::error::ChartError;

/// Default provider endpoint.
pub const DEFAULT_API_URL: &str = "http://spotikea.tomahawk-player.org:10380/";

/// Chart provider API client
pub struct SpotifyChartsClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SpotifyChartsClient {
    /// Create a new client against the default provider endpoint
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses (reduces bandwidth)
    /// - Send a User-Agent header identifying the plugin
    pub fn new() -> Self {
        Self::with_base(DEFAULT_API_URL)
    }

    /// Create a client from configuration
    pub fn from_config(config: &ChartsConfig) -> Self {
        Self::with_base(&config.api_base_url)
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_base(&base_url.into())
    }

    fn with_base(base_url: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true) // Accept gzip-compressed responses
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The full URL of the catalog endpoint
    pub fn charts_url(&self) -> String {
        format!("{}/toplist/charts", self.base_url)
    }

    /// The full URL of one toplist endpoint
    ///
    /// `chart_id` is inserted verbatim; its internal `/` is part of the path.
    pub fn toplist_url(&self, chart_id: &str) -> String {
        format!("{}/toplist/{}/", self.base_url, chart_id)
    }

    /// Fetch the catalog of available charts
    pub async fn fetch_chart_index(&self) -> Result<dto::ChartsIndex, ChartError> {
        self.get_json(&self.charts_url()).await
    }

    /// Fetch one ranked toplist by its composite chart id
    pub async fn fetch_toplist(&self, chart_id: &str) -> Result<dto::ToplistResponse, ChartError> {
        self.get_json(&self.toplist_url(chart_id)).await
    }

    /// Send the HTTP request and parse the JSON response
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ChartError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ChartError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ChartError::Parse(e.to_string()))
    }
}

impl Default for SpotifyChartsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SpotifyChartsClient::new();
        assert_eq!(
            client.charts_url(),
            "http://spotikea.tomahawk-player.org:10380/toplist/charts"
        );
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = SpotifyChartsClient::with_base_url("http://localhost:8080");
        assert_eq!(client.charts_url(), "http://localhost:8080/toplist/charts");
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let with = SpotifyChartsClient::with_base_url("http://localhost:8080/");
        let without = SpotifyChartsClient::with_base_url("http://localhost:8080");
        assert_eq!(with.charts_url(), without.charts_url());
    }

    #[test]
    fn test_toplist_url_keeps_composite_id_verbatim() {
        let client = SpotifyChartsClient::with_base_url("http://localhost:8080");
        assert_eq!(
            client.toplist_url("tracks/us"),
            "http://localhost:8080/toplist/tracks/us/"
        );
    }

    #[tokio::test]
    async fn test_fetch_from_unreachable_host_is_network_error() {
        let client = SpotifyChartsClient::with_base_url("http://invalid.invalid.invalid");
        let result = client.fetch_chart_index().await;
        assert!(matches!(result, Err(ChartError::Network(_))));
    }

    // ---- Integration tests (require network, marked #[ignore]) ----

    #[tokio::test]
    #[ignore]
    async fn test_integration_fetch_chart_index() {
        let client = SpotifyChartsClient::new();
        let index = client.fetch_chart_index().await.unwrap();
        assert!(!index.charts.is_empty());
    }
}
