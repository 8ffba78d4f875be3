//! Mock directions client for testing without API access.
//!
//! Loads canned directions responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{GeoPoint, TravelMode};

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Mock directions client that serves data from JSON files.
///
/// Useful for development and testing without a real API key.
#[derive(Debug, Clone)]
pub struct MockDirectionsClient {
    /// Pre-loaded responses, keyed by travel mode.
    responses: HashMap<TravelMode, DirectionsResponse>,
}

impl MockDirectionsClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{mode}.json` (e.g., `driving.json`,
    /// `walking.json`); files whose stem is not a travel mode are ignored.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| DirectionsError::Api {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| DirectionsError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(mode) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(TravelMode::parse)
            else {
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| DirectionsError::Api {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let response: DirectionsResponse =
                serde_json::from_str(&json).map_err(|e| DirectionsError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                })?;

            responses.insert(mode, response);
        }

        if responses.is_empty() {
            return Err(DirectionsError::Api {
                status: 0,
                message: format!("No mock route files found in {:?}", data_dir),
            });
        }

        Ok(Self { responses })
    }

    /// Fetch a canned route.
    ///
    /// Mimics the real `DirectionsClient::fetch_route` interface. The
    /// origin and destination are ignored - mock data is static.
    pub async fn fetch_route(
        &self,
        _origin: GeoPoint,
        _destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        self.responses.get(&mode).cloned().ok_or_else(|| {
            let available: Vec<_> = self.responses.keys().map(|m| m.as_api_param()).collect();
            DirectionsError::Api {
                status: 404,
                message: format!("No mock data for mode {mode}. Available: {available:?}"),
            }
        })
    }

    /// List travel modes present in the mock data.
    pub fn available_modes(&self) -> Vec<TravelMode> {
        self.responses.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> GeoPoint {
        GeoPoint::new(40.6186, 20.7808)
    }

    fn destination() -> GeoPoint {
        GeoPoint::new(41.3275, 19.8187)
    }

    #[tokio::test]
    async fn load_mock_data() {
        let client = MockDirectionsClient::new("data/mock_routes").unwrap();
        let modes = client.available_modes();

        assert!(modes.contains(&TravelMode::Driving));
        assert!(modes.contains(&TravelMode::Bicycling));
        assert!(modes.contains(&TravelMode::Walking));
    }

    #[tokio::test]
    async fn fetch_canned_route() {
        let client = MockDirectionsClient::new("data/mock_routes").unwrap();

        let response = client
            .fetch_route(origin(), destination(), TravelMode::Driving)
            .await
            .unwrap();

        assert_eq!(response.status.as_deref(), Some("OK"));
        assert!(!response.routes.is_empty());
        assert!(!response.routes[0].overview_polyline.points.is_empty());
    }

    #[tokio::test]
    async fn canned_route_converts_to_domain() {
        use super::super::convert::convert_directions;

        let client = MockDirectionsClient::new("data/mock_routes").unwrap();
        let response = client
            .fetch_route(origin(), destination(), TravelMode::Driving)
            .await
            .unwrap();

        let route = convert_directions(&response, TravelMode::Driving).unwrap();

        assert!(route.points.len() >= 2);
        assert!(!route.distance_text.is_empty());
        assert!(route.steps.iter().all(|s| !s.instruction.contains('<')));
    }

    #[tokio::test]
    async fn unknown_mode_returns_error() {
        let client = MockDirectionsClient::new("data/mock_routes").unwrap();

        let result = client
            .fetch_route(origin(), destination(), TravelMode::Transit)
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(MockDirectionsClient::new("data/does_not_exist").is_err());
    }
}
