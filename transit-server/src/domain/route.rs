//! Routes fetched from the directions service.

use std::fmt;

use super::GeoPoint;

/// Travel mode for a route request.
///
/// The app exposes car, bike, scooter, walk and bus; scooters share the
/// cycling profile and buses use transit routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Driving,
    Bicycling,
    Walking,
    Transit,
}

impl TravelMode {
    /// All supported modes.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Driving,
        TravelMode::Bicycling,
        TravelMode::Walking,
        TravelMode::Transit,
    ];

    /// Parse a mode from an app or API name.
    ///
    /// Accepts both the app's vocabulary ("car", "bike", "scooter", "walk",
    /// "bus") and the API's ("driving", "bicycling", "walking", "transit").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "car" | "driving" => Some(TravelMode::Driving),
            "bike" | "scooter" | "bicycling" => Some(TravelMode::Bicycling),
            "walk" | "walking" => Some(TravelMode::Walking),
            "bus" | "transit" => Some(TravelMode::Transit),
            _ => None,
        }
    }

    /// The value this mode takes in the directions API query string.
    pub fn as_api_param(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_param())
    }
}

/// One navigation step of a route, with HTML already stripped from the
/// instruction text.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    pub instruction: String,
    pub distance_text: String,
    pub duration_text: String,
}

/// An alternative route, summarised by its overview geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteAlternative {
    pub distance_text: String,
    pub duration_text: String,
    pub points: Vec<GeoPoint>,
}

/// A route between two points, ready for rendering.
///
/// `points` is the decoded overview polyline, in path order.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub mode: TravelMode,
    pub distance_text: String,
    pub duration_text: String,
    pub points: Vec<GeoPoint>,
    pub steps: Vec<RouteStep>,
    pub alternatives: Vec<RouteAlternative>,
}
