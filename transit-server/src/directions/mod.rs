//! Directions API client and conversion to domain routes.
//!
//! Routes come from a remote Google-style Directions API, consumed as
//! opaque JSON and converted in-process: overview and step polylines are
//! decoded, instruction markup is stripped, alternatives summarised.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::{convert_directions, strip_html_tags};
pub use error::DirectionsError;
pub use mock::MockDirectionsClient;
pub use types::{DirectionsResponse, LegDto, PolylineDto, RouteDto, StepDto, TextValueDto};
