//! Local stop directory for city routes.
//!
//! Korçë's city network is a fixed directory of stops, each with its routes
//! and daily timetables. The only computation is ordering stops by distance
//! from the rider.

use crate::domain::{GeoPoint, TimeOfDay, haversine_km};

/// Korçë city centre, used for stops without their own coordinates.
pub const KORCE_CENTRE: GeoPoint = GeoPoint {
    latitude: 40.6186,
    longitude: 20.7808,
};

/// One route serving a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalRoute {
    /// Route number as printed on the vehicle ("K1").
    pub number: String,

    /// Key destinations along the route, in travel order.
    pub destinations: Vec<String>,

    /// Daily departure times from this stop.
    pub schedule: Vec<TimeOfDay>,
}

/// A stop in the city network.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStop {
    pub id: String,
    pub name: String,

    /// Stop coordinates; stops without a surveyed position fall back to
    /// the city centre for distance ordering.
    pub location: Option<GeoPoint>,

    pub routes: Vec<LocalRoute>,
}

/// A stop annotated with its distance from the reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStop {
    pub stop: LocalStop,

    /// Distance in kilometres; `None` when no reference point was given.
    pub distance_km: Option<f64>,
}

/// Order stops by distance from the reference point, nearest first.
///
/// Without a reference point, the stops are returned in directory order
/// with no distances (the rider sees the plain directory). The sort is
/// stable, so equidistant stops keep directory order.
pub fn nearest_stops(reference: Option<GeoPoint>, stops: &[LocalStop]) -> Vec<NearbyStop> {
    let Some(origin) = reference else {
        return stops
            .iter()
            .map(|stop| NearbyStop {
                stop: stop.clone(),
                distance_km: None,
            })
            .collect();
    };

    let mut nearby: Vec<NearbyStop> = stops
        .iter()
        .map(|stop| {
            let location = stop.location.unwrap_or(KORCE_CENTRE);
            NearbyStop {
                stop: stop.clone(),
                distance_km: Some(haversine_km(origin, location)),
            }
        })
        .collect();

    nearby.sort_by(|a, b| {
        a.distance_km
            .unwrap_or(0.0)
            .total_cmp(&b.distance_km.unwrap_or(0.0))
    });

    nearby
}

/// Build a route from its number, destinations and "HH:MM" times.
/// Unparseable times are skipped.
fn route(number: &str, destinations: &[&str], times: &[&str]) -> LocalRoute {
    LocalRoute {
        number: number.to_string(),
        destinations: destinations.iter().map(|d| d.to_string()).collect(),
        schedule: times.iter().filter_map(|t| TimeOfDay::parse(t).ok()).collect(),
    }
}

fn stop(id: &str, name: &str, location: Option<GeoPoint>, routes: Vec<LocalRoute>) -> LocalStop {
    LocalStop {
        id: id.to_string(),
        name: name.to_string(),
        location,
        routes,
    }
}

/// The default stop directory for Korçë.
pub fn korce_stops() -> Vec<LocalStop> {
    vec![
        stop(
            "stop1",
            "Korçë Central Station",
            Some(GeoPoint::new(40.6186, 20.7808)),
            vec![
                route(
                    "K1",
                    &["City Center", "Old Bazaar", "Cathedral of Resurrection"],
                    &["07:00", "07:30", "08:00", "08:30", "09:00", "09:30", "10:00"],
                ),
                route(
                    "K2",
                    &["University Fan Noli", "Regional Hospital", "Sports Complex"],
                    &["07:15", "07:45", "08:15", "08:45", "09:15", "09:45", "10:15"],
                ),
                route(
                    "K3",
                    &["Archaeological Museum", "Education Museum", "National Lyceum"],
                    &["07:20", "08:00", "08:40", "09:20", "10:00", "10:40"],
                ),
            ],
        ),
        stop(
            "stop2",
            "Old Bazaar Station",
            Some(GeoPoint::new(40.6223, 20.7776)),
            vec![
                route(
                    "K4",
                    &["Korçë Cathedral", "Illyrian Tombs", "Medieval Museum"],
                    &["07:10", "07:40", "08:10", "08:40", "09:10", "09:40", "10:10"],
                ),
                route(
                    "K5",
                    &["Fan Noli Square", "Cultural Center", "City Theater"],
                    &["07:25", "07:55", "08:25", "08:55", "09:25", "09:55", "10:25"],
                ),
            ],
        ),
        stop(
            "stop3",
            "University District",
            Some(GeoPoint::new(40.6144, 20.7723)),
            vec![
                route(
                    "K6",
                    &["University Campus", "Student Housing", "City Library"],
                    &["07:05", "07:35", "08:05", "08:35", "09:05", "09:35", "10:05"],
                ),
                route(
                    "K7",
                    &["Sports Center", "Public Park", "Shopping Center"],
                    &["07:20", "07:50", "08:20", "08:50", "09:20", "09:50", "10:20"],
                ),
            ],
        ),
        stop(
            "stop4",
            "Hospital Complex",
            None,
            vec![
                route(
                    "K8",
                    &["Regional Hospital", "Medical Center", "Pharmacy District"],
                    &["07:00", "07:30", "08:00", "08:30", "09:00", "09:30", "10:00"],
                ),
                route(
                    "K9",
                    &["Emergency Center", "Clinic Zone", "Health Institute"],
                    &["07:15", "07:45", "08:15", "08:45", "09:15", "09:45", "10:15"],
                ),
            ],
        ),
        stop(
            "stop5",
            "Cultural District",
            None,
            vec![
                route(
                    "K10",
                    &["National Museum", "Art Gallery", "Concert Hall"],
                    &["07:10", "07:40", "08:10", "08:40", "09:10", "09:40", "10:10"],
                ),
                route(
                    "K11",
                    &["Historical Center", "Traditional Market", "Craft Shops"],
                    &["07:25", "07:55", "08:25", "08:55", "09:25", "09:55", "10:25"],
                ),
            ],
        ),
    ]
}
