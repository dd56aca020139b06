//! Web layer for the fuel station finder.
//!
//! Provides the HTTP endpoint that searches for a station.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
