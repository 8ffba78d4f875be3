//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::directions::{DirectionsError, convert_directions};
use crate::domain::{GeoPoint, TravelMode};
use crate::intercity::{ScheduleConfig, filter_by_query, group_by_country, rank_destinations};
use crate::rewards::RewardsError;
use crate::stops::nearest_stops;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/intercity/board", get(intercity_board))
        .route("/api/stops", get(local_stops))
        .route("/api/route/plan", post(plan_route))
        .route("/api/route/compare", post(compare_routes))
        .route("/api/rewards", get(rewards_balance))
        .route("/api/rewards/award", post(award_points))
        .route("/api/rewards/redeem", post(redeem_points))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Build an optional reference point from query coordinates.
/// Partial coordinates count as missing.
fn reference_point(lat: Option<f64>, lng: Option<f64>) -> Option<GeoPoint> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
        _ => None,
    }
}

/// The intercity departure board: ranked, searchable, grouped by country.
///
/// Never fails for a missing location; the fallback board covers that.
async fn intercity_board(
    State(state): State<AppState>,
    Query(req): Query<BoardRequest>,
) -> Json<BoardResponse> {
    let reference = reference_point(req.lat, req.lng);

    let config: ScheduleConfig = match req.radius_km {
        Some(radius_km) => ScheduleConfig {
            radius_km,
            ..(*state.schedule).clone()
        },
        None => (*state.schedule).clone(),
    };

    let mut rng = SmallRng::from_os_rng();
    let ranked = rank_destinations(reference, &state.catalog, &config, &mut rng);
    let filtered = filter_by_query(ranked, req.q.as_deref().unwrap_or(""));
    let groups = group_by_country(filtered, &config.home_country);

    Json(BoardResponse {
        groups: groups.iter().map(CountryGroupResult::from_group).collect(),
    })
}

/// The local stop directory, nearest first when a location is given.
async fn local_stops(
    State(state): State<AppState>,
    Query(req): Query<StopsRequest>,
) -> Json<StopsResponse> {
    let reference = reference_point(req.lat, req.lng);
    let nearby = nearest_stops(reference, &state.stops);

    Json(StopsResponse {
        stops: nearby.iter().map(StopResult::from_nearby).collect(),
    })
}

/// Parse a requested mode, defaulting to driving.
fn parse_mode(mode: Option<&str>) -> Result<TravelMode, AppError> {
    match mode {
        None => Ok(TravelMode::Driving),
        Some(m) => TravelMode::parse(m).ok_or_else(|| AppError::BadRequest {
            message: format!("Unknown travel mode: {m}"),
        }),
    }
}

/// Plan a route between two points.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let mode = parse_mode(req.mode.as_deref())?;

    let response = state
        .directions
        .fetch_route(req.origin, req.destination, mode)
        .await?;
    let route = convert_directions(&response, mode)?;

    Ok(Json(PlanRouteResponse {
        route: RouteResult::from_route(&route),
    }))
}

/// Default comparison set: the modes a rider actually weighs against each
/// other in the app (bus routing needs a transit feed the API key rarely
/// has, so it is opt-in).
const DEFAULT_COMPARE_MODES: [TravelMode; 3] =
    [TravelMode::Driving, TravelMode::Bicycling, TravelMode::Walking];

/// Compare travel modes for one trip, fetching them concurrently.
///
/// Modes whose fetch or conversion fails are omitted rather than failing
/// the whole comparison.
async fn compare_routes(
    State(state): State<AppState>,
    Json(req): Json<CompareRoutesRequest>,
) -> Result<Json<CompareRoutesResponse>, AppError> {
    let modes: Vec<TravelMode> = match &req.modes {
        Some(names) => names
            .iter()
            .map(|name| parse_mode(Some(name.as_str())))
            .collect::<Result<_, _>>()?,
        None => DEFAULT_COMPARE_MODES.to_vec(),
    };

    let fetches = modes.into_iter().map(|mode| {
        let directions = state.directions.clone();
        async move {
            let response = directions
                .fetch_route(req.origin, req.destination, mode)
                .await
                .ok()?;
            convert_directions(&response, mode).ok()
        }
    });

    let routes = futures::future::join_all(fetches)
        .await
        .into_iter()
        .flatten()
        .map(|route| ModeSummaryResult {
            mode: route.mode.to_string(),
            distance: route.distance_text,
            duration: route.duration_text,
        })
        .collect();

    Ok(Json(CompareRoutesResponse { routes }))
}

/// Current points balance.
async fn rewards_balance(State(state): State<AppState>) -> Json<RewardsResponse> {
    Json(RewardsResponse {
        points: state.rewards.points().await,
    })
}

/// Award points for a sustainable trip.
async fn award_points(
    State(state): State<AppState>,
    Json(req): Json<RewardPointsRequest>,
) -> Result<Json<RewardsResponse>, AppError> {
    let points = state.rewards.award(req.points).await?;
    Ok(Json(RewardsResponse { points }))
}

/// Redeem points against a reward.
async fn redeem_points(
    State(state): State<AppState>,
    Json(req): Json<RewardPointsRequest>,
) -> Result<Json<RewardsResponse>, AppError> {
    match state.rewards.try_spend(req.points).await? {
        Some(points) => Ok(Json(RewardsResponse { points })),
        None => Err(AppError::Conflict {
            message: format!("Insufficient balance to redeem {} points", req.points),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<DirectionsError> for AppError {
    fn from(e: DirectionsError) -> Self {
        match e {
            DirectionsError::NoRoute => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<RewardsError> for AppError {
    fn from(e: RewardsError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_point_requires_both_coordinates() {
        assert!(reference_point(Some(40.6), Some(20.8)).is_some());
        assert!(reference_point(Some(40.6), None).is_none());
        assert!(reference_point(None, Some(20.8)).is_none());
        assert!(reference_point(None, None).is_none());
    }

    #[test]
    fn parse_mode_defaults_to_driving() {
        assert_eq!(parse_mode(None).unwrap(), TravelMode::Driving);
        assert_eq!(parse_mode(Some("bike")).unwrap(), TravelMode::Bicycling);
        assert!(parse_mode(Some("teleport")).is_err());
    }

    #[test]
    fn no_route_maps_to_not_found() {
        let err = AppError::from(DirectionsError::NoRoute);
        assert!(matches!(err, AppError::NotFound { .. }));

        let err = AppError::from(DirectionsError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
