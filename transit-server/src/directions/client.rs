//! Directions API HTTP client.
//!
//! Fetches routes between two points from a Google-style Directions API.
//! Responses are returned as wire types; see `convert` for the mapping to
//! domain routes.

use crate::domain::{GeoPoint, TravelMode};

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Base URL for the API (defaults to the Google Directions endpoint).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch routes from `origin` to `destination` for the given mode.
    ///
    /// Returns the raw wire response; an empty route list is not an error
    /// at this layer (conversion decides what to do with it).
    pub async fn fetch_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let url = format!("{}/json", self.base_url);
        let origin_param = format!("{},{}", origin.latitude, origin.longitude);
        let destination_param = format!("{},{}", destination.latitude, destination.longitude);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("origin", origin_param.as_str()),
                ("destination", destination_param.as_str()),
                ("mode", mode.as_api_param()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<DirectionsResponse>()
            .await
            .map_err(|e| DirectionsError::Json {
                message: e.to_string(),
            })
    }
}
