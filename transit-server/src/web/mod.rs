//! Web layer for the transit server.
//!
//! JSON endpoints for the mobile client: the intercity departure board,
//! the local stop directory, route planning and comparison, and the
//! rewards balance.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
