//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirectionsClient;
use crate::domain::Destination;
use crate::intercity::ScheduleConfig;
use crate::rewards::RewardsStore;
use crate::stops::LocalStop;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached directions API client
    pub directions: Arc<CachedDirectionsClient>,

    /// Intercity destination catalog
    pub catalog: Arc<Vec<Destination>>,

    /// Local stop directory
    pub stops: Arc<Vec<LocalStop>>,

    /// Departure board configuration
    pub schedule: Arc<ScheduleConfig>,

    /// Rider points balance
    pub rewards: RewardsStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directions: CachedDirectionsClient,
        catalog: Vec<Destination>,
        stops: Vec<LocalStop>,
        schedule: ScheduleConfig,
        rewards: RewardsStore,
    ) -> Self {
        Self {
            directions: Arc::new(directions),
            catalog: Arc::new(catalog),
            stops: Arc::new(stops),
            schedule: Arc::new(schedule),
            rewards,
        }
    }
}
