//! Web layer for the station map.
//!
//! Serves the map page and the JSON it draws from: view and theme at
//! `/api/map`, station markers at `/api/stations`.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
