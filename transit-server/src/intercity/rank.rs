//! Destination ranking, grouping and search for the intercity board.

use rand::rngs::SmallRng;

use crate::domain::{Departure, Destination, GeoPoint, haversine_km};

use super::config::ScheduleConfig;
use super::departures::generate_departures;

/// A catalog destination annotated for display: distance from the
/// reference point and the day's synthesised departures.
///
/// Ephemeral: built fresh on every board request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDestination {
    pub destination: Destination,
    pub distance_km: f64,
    pub departures: Vec<Departure>,
}

/// One country's section of the grouped board.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryGroup {
    pub country: String,
    pub destinations: Vec<RankedDestination>,
}

/// Rank catalog destinations by distance from the reference point.
///
/// With a reference point: destinations beyond `radius_km` are dropped and
/// the rest are sorted ascending by distance, ties keeping catalog order.
///
/// Without one (location permission denied, fix not yet acquired) every
/// destination is returned with a distance of zero and a timetable priced
/// at the fallback distance, so the board never renders empty just because
/// the location is missing.
pub fn rank_destinations(
    reference: Option<GeoPoint>,
    catalog: &[Destination],
    config: &ScheduleConfig,
    rng: &mut SmallRng,
) -> Vec<RankedDestination> {
    let Some(origin) = reference else {
        return catalog
            .iter()
            .map(|dest| RankedDestination {
                destination: dest.clone(),
                distance_km: 0.0,
                departures: generate_departures(dest, config.fallback_distance_km, config, rng),
            })
            .collect();
    };

    let mut ranked: Vec<RankedDestination> = catalog
        .iter()
        .filter_map(|dest| {
            let distance_km = haversine_km(origin, dest.coordinates);
            if distance_km > config.radius_km {
                return None;
            }

            Some(RankedDestination {
                destination: dest.clone(),
                distance_km,
                departures: generate_departures(dest, distance_km, config, rng),
            })
        })
        .collect();

    // Stable: equidistant destinations keep their catalog order.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    ranked
}

/// Group ranked destinations by country for the sectioned board.
///
/// The home country's group comes first and is always present, even when
/// empty; the other countries follow in order of first appearance. Within
/// each group the input order (already distance-sorted) is kept.
pub fn group_by_country(ranked: Vec<RankedDestination>, home_country: &str) -> Vec<CountryGroup> {
    let mut groups = vec![CountryGroup {
        country: home_country.to_string(),
        destinations: Vec::new(),
    }];

    for dest in ranked {
        match groups.iter_mut().find(|g| g.country == dest.destination.country) {
            Some(group) => group.destinations.push(dest),
            None => groups.push(CountryGroup {
                country: dest.destination.country.clone(),
                destinations: vec![dest],
            }),
        }
    }

    groups
}

/// Filter ranked destinations by a search query.
///
/// Case-insensitive substring match against the destination name or its
/// country; an empty query returns the input unchanged.
pub fn filter_by_query(ranked: Vec<RankedDestination>, query: &str) -> Vec<RankedDestination> {
    if query.is_empty() {
        return ranked;
    }

    let needle = query.to_lowercase();

    ranked
        .into_iter()
        .filter(|d| {
            d.destination.name.to_lowercase().contains(&needle)
                || d.destination.country.to_lowercase().contains(&needle)
        })
        .collect()
}
