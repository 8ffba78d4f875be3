//! Caching layer for directions API responses.
//!
//! Route requests repeat heavily while a rider pans the map or toggles
//! modes, and the upstream API bills per call. We cache whole responses
//! keyed by quantized coordinates: rounding each coordinate to a ~11 m
//! grid bounds cache cardinality while keeping hits frequent.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::directions::{DirectionsClient, DirectionsError, DirectionsResponse};
use crate::domain::{GeoPoint, TravelMode};

/// Cache key for routes: (origin grid cell, destination grid cell, mode).
type RouteKey = ((i64, i64), (i64, i64), TravelMode);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Coordinate quantization factor: cells are 1/grid_scale degrees,
    /// ~11 m at the default of 1e4.
    pub grid_scale: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(120),
            max_capacity: 500,
            grid_scale: 1e4,
        }
    }
}

/// Cache for directions responses.
pub struct DirectionsCache {
    routes: MokaCache<RouteKey, Arc<DirectionsResponse>>,
    grid_scale: f64,
}

impl DirectionsCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            routes,
            grid_scale: config.grid_scale,
        }
    }

    /// Snap a point to its grid cell.
    fn grid_cell(&self, point: GeoPoint) -> (i64, i64) {
        (
            (point.latitude * self.grid_scale).round() as i64,
            (point.longitude * self.grid_scale).round() as i64,
        )
    }

    /// Build the cache key for a request.
    fn key(&self, origin: GeoPoint, destination: GeoPoint, mode: TravelMode) -> RouteKey {
        (self.grid_cell(origin), self.grid_cell(destination), mode)
    }

    /// Get a cached response.
    pub async fn get(&self, key: &RouteKey) -> Option<Arc<DirectionsResponse>> {
        self.routes.get(key).await
    }

    /// Insert a response into the cache.
    pub async fn insert(&self, key: RouteKey, entry: Arc<DirectionsResponse>) {
        self.routes.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Directions client with caching.
///
/// Wraps a `DirectionsClient` and caches route responses.
pub struct CachedDirectionsClient {
    client: DirectionsClient,
    cache: DirectionsCache,
}

impl CachedDirectionsClient {
    /// Create a new cached client.
    pub fn new(client: DirectionsClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: DirectionsCache::new(cache_config),
        }
    }

    /// Fetch a route, using the cache if a request from (near enough) the
    /// same points is still fresh.
    pub async fn fetch_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<Arc<DirectionsResponse>, DirectionsError> {
        let key = self.cache.key(origin, destination, mode);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        debug!(%mode, "route cache miss, fetching upstream");
        let response = self.client.fetch_route(origin, destination, mode).await?;
        let entry = Arc::new(response);

        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &DirectionsClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cell_quantization() {
        let cache = DirectionsCache::new(&CacheConfig::default());

        // Points within the same ~11 m cell share a key.
        let a = GeoPoint::new(40.61861, 20.78081);
        let b = GeoPoint::new(40.61863, 20.78079);
        assert_eq!(cache.grid_cell(a), cache.grid_cell(b));

        // Points a few hundred metres apart do not.
        let c = GeoPoint::new(40.6223, 20.7776);
        assert_ne!(cache.grid_cell(a), cache.grid_cell(c));

        // Negative coordinates round toward their own cell.
        let d = GeoPoint::new(-38.5, -120.2);
        assert_eq!(cache.grid_cell(d), (-385000, -1202000));
    }

    #[test]
    fn key_includes_mode() {
        let cache = DirectionsCache::new(&CacheConfig::default());
        let origin = GeoPoint::new(40.6186, 20.7808);
        let destination = GeoPoint::new(41.3275, 19.8187);

        let driving = cache.key(origin, destination, TravelMode::Driving);
        let walking = cache.key(origin, destination, TravelMode::Walking);
        assert_ne!(driving, walking);
    }

    #[test]
    fn key_is_direction_sensitive() {
        let cache = DirectionsCache::new(&CacheConfig::default());
        let a = GeoPoint::new(40.6186, 20.7808);
        let b = GeoPoint::new(41.3275, 19.8187);

        // A->B and B->A are distinct requests.
        assert_ne!(
            cache.key(a, b, TravelMode::Driving),
            cache.key(b, a, TravelMode::Driving)
        );
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(120));
        assert_eq!(config.max_capacity, 500);
        assert_eq!(config.grid_scale, 1e4);
    }

    #[test]
    fn cache_creation() {
        let cache = DirectionsCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
    }
}
