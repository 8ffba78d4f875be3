//! The intercity departure board.
//!
//! Ranks the destination catalog by distance from the user, synthesises a
//! day's departures per destination, and shapes the result for display:
//! grouped by country, searchable by name or country.

pub mod catalog;
mod config;
mod departures;
mod rank;

pub use catalog::balkan_catalog;
pub use config::ScheduleConfig;
pub use departures::{departure_frequency_hours, generate_departures, journey_minutes, ticket_price_eur};
pub use rank::{CountryGroup, RankedDestination, filter_by_query, group_by_country, rank_destinations};
