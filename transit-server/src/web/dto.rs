//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Departure, GeoPoint, Route, RouteAlternative, RouteStep};
use crate::intercity::{CountryGroup, RankedDestination};
use crate::stops::NearbyStop;

/// Request for the intercity departure board.
#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    /// Rider latitude; the board falls back to the full catalog when the
    /// coordinates are missing or partial.
    pub lat: Option<f64>,

    /// Rider longitude
    pub lng: Option<f64>,

    /// Search query matched against city and country names
    pub q: Option<String>,

    /// Override for the search radius in kilometres
    pub radius_km: Option<f64>,
}

/// Request for the local stop directory.
#[derive(Debug, Deserialize)]
pub struct StopsRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,

    /// Travel mode; accepts the app names (car, bike, scooter, walk, bus)
    /// and defaults to driving.
    pub mode: Option<String>,
}

/// Request to compare travel modes for one trip.
#[derive(Debug, Deserialize)]
pub struct CompareRoutesRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,

    /// Modes to compare; defaults to car, bike and walk.
    pub modes: Option<Vec<String>>,
}

/// Request to award or redeem reward points.
#[derive(Debug, Deserialize)]
pub struct RewardPointsRequest {
    pub points: u32,
}

/// One departure slot in a board response.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Departure time, "HH:MM"
    pub time: String,

    /// Display price, "€22"
    pub price: String,

    /// Display duration, "3h 15m"
    pub duration: String,

    pub available_seats: u8,
}

impl DepartureResult {
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            time: departure.time.to_string(),
            price: departure.price_label(),
            duration: departure.duration_label(),
            available_seats: departure.available_seats,
        }
    }
}

/// One destination in a board response.
#[derive(Debug, Serialize)]
pub struct DestinationResult {
    pub id: String,
    pub name: String,
    pub country: String,

    /// Great-circle distance from the rider; zero on the fallback board.
    pub distance_km: f64,

    pub departures: Vec<DepartureResult>,
}

impl DestinationResult {
    pub fn from_ranked(ranked: &RankedDestination) -> Self {
        Self {
            id: ranked.destination.id.to_string(),
            name: ranked.destination.name.clone(),
            country: ranked.destination.country.clone(),
            distance_km: ranked.distance_km,
            departures: ranked
                .departures
                .iter()
                .map(DepartureResult::from_departure)
                .collect(),
        }
    }
}

/// One country section of the board.
#[derive(Debug, Serialize)]
pub struct CountryGroupResult {
    pub country: String,
    pub destinations: Vec<DestinationResult>,
}

impl CountryGroupResult {
    pub fn from_group(group: &CountryGroup) -> Self {
        Self {
            country: group.country.clone(),
            destinations: group
                .destinations
                .iter()
                .map(DestinationResult::from_ranked)
                .collect(),
        }
    }
}

/// The grouped intercity board.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub groups: Vec<CountryGroupResult>,
}

/// One route serving a stop.
#[derive(Debug, Serialize)]
pub struct StopRouteResult {
    pub number: String,
    pub destinations: Vec<String>,

    /// Departure times, "HH:MM"
    pub schedule: Vec<String>,
}

/// One stop in the directory response.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub id: String,
    pub name: String,

    /// Distance from the rider; absent when no location was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    pub routes: Vec<StopRouteResult>,
}

impl StopResult {
    pub fn from_nearby(nearby: &NearbyStop) -> Self {
        Self {
            id: nearby.stop.id.clone(),
            name: nearby.stop.name.clone(),
            distance_km: nearby.distance_km,
            routes: nearby
                .stop
                .routes
                .iter()
                .map(|route| StopRouteResult {
                    number: route.number.clone(),
                    destinations: route.destinations.clone(),
                    schedule: route.schedule.iter().map(|t| t.to_string()).collect(),
                })
                .collect(),
        }
    }
}

/// The local stop directory.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<StopResult>,
}

/// One navigation step of a planned route.
#[derive(Debug, Serialize)]
pub struct StepResult {
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}

/// An alternative route in a plan response.
#[derive(Debug, Serialize)]
pub struct AlternativeResult {
    pub distance: String,
    pub duration: String,
    pub points: Vec<GeoPoint>,
}

/// A planned route with its decoded geometry.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub mode: String,
    pub distance: String,
    pub duration: String,

    /// Overview path, in order, ready to draw
    pub points: Vec<GeoPoint>,

    pub steps: Vec<StepResult>,
    pub alternatives: Vec<AlternativeResult>,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            mode: route.mode.to_string(),
            distance: route.distance_text.clone(),
            duration: route.duration_text.clone(),
            points: route.points.clone(),
            steps: route.steps.iter().map(StepResult::from_step).collect(),
            alternatives: route
                .alternatives
                .iter()
                .map(AlternativeResult::from_alternative)
                .collect(),
        }
    }
}

impl StepResult {
    pub fn from_step(step: &RouteStep) -> Self {
        Self {
            instruction: step.instruction.clone(),
            distance: step.distance_text.clone(),
            duration: step.duration_text.clone(),
        }
    }
}

impl AlternativeResult {
    pub fn from_alternative(alt: &RouteAlternative) -> Self {
        Self {
            distance: alt.distance_text.clone(),
            duration: alt.duration_text.clone(),
            points: alt.points.clone(),
        }
    }
}

/// Response to a route plan request.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub route: RouteResult,
}

/// Per-mode summary in a comparison response.
#[derive(Debug, Serialize)]
pub struct ModeSummaryResult {
    pub mode: String,
    pub distance: String,
    pub duration: String,
}

/// Response to a mode comparison request. Modes whose fetch failed are
/// omitted.
#[derive(Debug, Serialize)]
pub struct CompareRoutesResponse {
    pub routes: Vec<ModeSummaryResult>,
}

/// The rider's points balance.
#[derive(Debug, Serialize)]
pub struct RewardsResponse {
    pub points: u32,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Destination, DestinationId, TimeOfDay, TravelMode};

    fn ranked() -> RankedDestination {
        RankedDestination {
            destination: Destination::new(
                DestinationId::parse("tirana").unwrap(),
                "Tirana",
                "Albania",
                GeoPoint::new(41.3275, 19.8187),
                180,
            ),
            distance_km: 112.86,
            departures: vec![Departure {
                time: TimeOfDay::from_hm(6, 0).unwrap(),
                price_eur: 14,
                duration_mins: 195,
                available_seats: 23,
            }],
        }
    }

    #[test]
    fn departure_result_formats_labels() {
        let result = DestinationResult::from_ranked(&ranked());

        assert_eq!(result.id, "tirana");
        assert_eq!(result.departures.len(), 1);
        assert_eq!(result.departures[0].time, "06:00");
        assert_eq!(result.departures[0].price, "€14");
        assert_eq!(result.departures[0].duration, "3h 15m");
        assert_eq!(result.departures[0].available_seats, 23);
    }

    #[test]
    fn route_result_carries_geometry() {
        let route = Route {
            mode: TravelMode::Driving,
            distance_text: "181 km".to_string(),
            duration_text: "3 hours 5 mins".to_string(),
            points: vec![GeoPoint::new(40.6186, 20.7808), GeoPoint::new(41.3275, 19.8187)],
            steps: vec![RouteStep {
                instruction: "Head north".to_string(),
                distance_text: "500 m".to_string(),
                duration_text: "1 min".to_string(),
            }],
            alternatives: vec![],
        };

        let result = RouteResult::from_route(&route);

        assert_eq!(result.mode, "driving");
        assert_eq!(result.points.len(), 2);
        assert_eq!(result.steps[0].instruction, "Head north");

        // Points serialize in the client's coordinate shape.
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["points"][0]["latitude"], 40.6186);
        assert_eq!(json["points"][0]["longitude"], 20.7808);
    }

    #[test]
    fn stop_result_omits_absent_distance() {
        let nearby = NearbyStop {
            stop: crate::stops::LocalStop {
                id: "stop1".to_string(),
                name: "Korçë Central Station".to_string(),
                location: None,
                routes: vec![],
            },
            distance_km: None,
        };

        let json = serde_json::to_value(StopResult::from_nearby(&nearby)).unwrap();
        assert!(json.get("distance_km").is_none());
    }
}
