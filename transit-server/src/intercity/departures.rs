//! Timetable synthesis for intercity destinations.
//!
//! There is no live transit feed: departures are synthesised from the
//! destination's catalog entry and its distance from the reference point.
//! Everything is deterministic except the seat counts, which come from the
//! caller-supplied RNG so tests can pin a seed.

use rand::Rng;
use rand::rngs::SmallRng;

use crate::domain::{Departure, Destination, TimeOfDay};

use super::config::ScheduleConfig;

/// Seats offered per slot: uniform in this range.
const SEAT_RANGE: std::ops::RangeInclusive<u8> = 10..=39;

/// Hours between departure slots for a route of the given length.
///
/// Short hops run frequently; long hauls a few times a day.
pub fn departure_frequency_hours(distance_km: f64) -> u32 {
    if distance_km < 100.0 {
        2
    } else if distance_km < 200.0 {
        3
    } else if distance_km < 400.0 {
        4
    } else {
        6
    }
}

/// Ticket price in whole euros: linear in distance with a floor.
pub fn ticket_price_eur(distance_km: f64, config: &ScheduleConfig) -> u32 {
    let linear = (distance_km * config.price_per_km_eur).round() as u32;
    linear.max(config.min_price_eur)
}

/// Total journey minutes for a destination: scheduled travel time, plus a
/// rest break for every full break interval, plus the border allowance for
/// destinations outside the home country.
pub fn journey_minutes(destination: &Destination, config: &ScheduleConfig) -> u32 {
    let base = destination.base_travel_minutes;
    let breaks = (base / config.break_interval_mins) * config.break_mins;
    let border = if destination.is_domestic(&config.home_country) {
        0
    } else {
        config.border_crossing_mins
    };

    base + breaks + border
}

/// Synthesise the day's departures to a destination.
///
/// One slot on the hour from the first to the last departure hour
/// inclusive, stepping by the distance-dependent frequency; the first slot
/// is always emitted, so the result is non-empty for any sane config.
/// `distance_km` drives pricing and frequency only; travel time comes from
/// the destination itself.
pub fn generate_departures(
    destination: &Destination,
    distance_km: f64,
    config: &ScheduleConfig,
    rng: &mut SmallRng,
) -> Vec<Departure> {
    let price_eur = ticket_price_eur(distance_km, config);
    let duration_mins = journey_minutes(destination, config);
    let step = departure_frequency_hours(distance_km);

    let mut departures = Vec::new();
    let mut hour = config.first_departure_hour;

    while hour <= config.last_departure_hour {
        let Ok(time) = TimeOfDay::from_hm(hour, 0) else {
            break;
        };

        departures.push(Departure {
            time,
            price_eur,
            duration_mins,
            available_seats: rng.random_range(SEAT_RANGE),
        });

        hour += step;
    }

    departures
}
