//! Wire types for the directions API.
//!
//! These mirror the JSON shape of a Google-style Directions response,
//! restricted to the fields the app consumes. Fields the API sometimes
//! omits default to empty rather than failing the whole response.

use serde::Deserialize;

/// Top-level directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<RouteDto>,

    /// API status string ("OK", "ZERO_RESULTS", ...).
    #[serde(default)]
    pub status: Option<String>,
}

/// One route in the response; the first is the recommended one.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    pub overview_polyline: PolylineDto,

    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// An encoded polyline wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct PolylineDto {
    pub points: String,
}

/// One leg of a route. Requests here are single-leg (origin to
/// destination, no waypoints), so the first leg carries the totals.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    pub distance: TextValueDto,
    pub duration: TextValueDto,

    #[serde(default)]
    pub steps: Vec<StepDto>,
}

/// A human-readable text with its underlying numeric value.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValueDto {
    pub text: String,

    /// Metres for distances, seconds for durations.
    #[serde(default)]
    pub value: Option<i64>,
}

/// One navigation step.
#[derive(Debug, Clone, Deserialize)]
pub struct StepDto {
    /// Instruction markup; tags are stripped during conversion.
    #[serde(default)]
    pub html_instructions: String,

    pub distance: TextValueDto,
    pub duration: TextValueDto,

    #[serde(default)]
    pub polyline: Option<PolylineDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_response() {
        let json = r#"{
            "status": "OK",
            "routes": [{
                "overview_polyline": { "points": "_p~iF~ps|U" },
                "legs": [{
                    "distance": { "text": "1.2 km", "value": 1234 },
                    "duration": { "text": "5 mins", "value": 300 },
                    "steps": [{
                        "html_instructions": "Head <b>north</b>",
                        "distance": { "text": "100 m", "value": 100 },
                        "duration": { "text": "1 min", "value": 60 },
                        "polyline": { "points": "_p~iF~ps|U" }
                    }]
                }]
            }]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status.as_deref(), Some("OK"));
        assert_eq!(response.routes.len(), 1);

        let leg = &response.routes[0].legs[0];
        assert_eq!(leg.distance.text, "1.2 km");
        assert_eq!(leg.distance.value, Some(1234));
        assert_eq!(leg.steps.len(), 1);
        assert_eq!(leg.steps[0].html_instructions, "Head <b>north</b>");
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "routes": [{
                "overview_polyline": { "points": "" }
            }]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert!(response.status.is_none());
        assert!(response.routes[0].legs.is_empty());
    }

    #[test]
    fn zero_results_response() {
        let json = r#"{ "status": "ZERO_RESULTS", "routes": [] }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status.as_deref(), Some("ZERO_RESULTS"));
        assert!(response.routes.is_empty());
    }
}
