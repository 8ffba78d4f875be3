//! Domain types for the transit server.
//!
//! This module contains the core domain model: coordinates and distance
//! computation, timetable times, the destination catalog entry, departure
//! slots, and converted routes. Validated types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod departure;
mod destination;
mod geo;
mod route;
mod time;

pub use departure::{Departure, format_journey_minutes};
pub use destination::{Destination, DestinationId, InvalidDestinationId};
pub use geo::{GeoPoint, format_distance_m, format_duration_secs, haversine_km};
pub use route::{Route, RouteAlternative, RouteStep, TravelMode};
pub use time::{TimeError, TimeOfDay};
