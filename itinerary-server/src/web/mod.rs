//! Web layer for the itinerary resolver.
//!
//! Provides the HTTP endpoint that decodes flight lists and returns the
//! resolved itinerary.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, calculate_itinerary, create_router};
pub use state::AppState;
