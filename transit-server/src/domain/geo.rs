//! Geographic coordinates and distance computation.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres, as used by the distance formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
///
/// Coordinates are not range-checked: callers are expected to supply
/// latitudes in [-90, 90] and longitudes in [-180, 180]. Behaviour for
/// out-of-range values is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points in kilometres.
///
/// Uses the haversine formula on a sphere of radius 6371 km. Symmetric,
/// and zero when both points coincide.
///
/// # Examples
///
/// ```
/// use transit_server::domain::{GeoPoint, haversine_km};
///
/// let korce = GeoPoint::new(40.6186, 20.7808);
/// let tirana = GeoPoint::new(41.3275, 19.8187);
///
/// let d = haversine_km(korce, tirana);
/// assert!((d - 112.86).abs() < 0.5);
/// ```
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Format a distance in metres for display: `"950m"` below one kilometre,
/// `"1.2km"` above.
pub fn format_distance_m(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// Format a duration in seconds for display: `"1h 5m"`, or `"45m"` when
/// under an hour.
pub fn format_duration_secs(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn korce() -> GeoPoint {
        GeoPoint::new(40.6186, 20.7808)
    }

    #[test]
    fn known_distances() {
        let tirana = GeoPoint::new(41.3275, 19.8187);
        let athens = GeoPoint::new(37.9838, 23.7275);
        let pogradec = GeoPoint::new(40.9022, 20.6525);

        assert!((haversine_km(korce(), tirana) - 112.86).abs() < 0.5);
        assert!((haversine_km(korce(), athens) - 387.41).abs() < 0.5);
        assert!((haversine_km(korce(), pogradec) - 33.34).abs() < 0.2);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 1 degree of latitude is ~111.19 km on a 6371 km sphere.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        assert!((haversine_km(a, b) - 111.19).abs() < 0.1);
    }

    #[test]
    fn zero_distance_at_same_point() {
        assert_eq!(haversine_km(korce(), korce()), 0.0);
    }

    #[test]
    fn symmetric() {
        let paris = GeoPoint::new(48.8566, 2.3522);
        let london = GeoPoint::new(51.5074, -0.1278);
        assert_eq!(haversine_km(paris, london), haversine_km(london, paris));
        assert!((haversine_km(paris, london) - 343.56).abs() < 0.5);
    }

    #[test]
    fn format_distance() {
        assert_eq!(format_distance_m(0.0), "0m");
        assert_eq!(format_distance_m(950.4), "950m");
        assert_eq!(format_distance_m(999.4), "999m");
        assert_eq!(format_distance_m(1000.0), "1.0km");
        assert_eq!(format_distance_m(1234.0), "1.2km");
    }

    #[test]
    fn format_duration() {
        assert_eq!(format_duration_secs(0), "0m");
        assert_eq!(format_duration_secs(45 * 60), "45m");
        assert_eq!(format_duration_secs(3600), "1h 0m");
        assert_eq!(format_duration_secs(3900), "1h 5m");
        assert_eq!(format_duration_secs(2 * 3600 + 30 * 60), "2h 30m");
    }
}
