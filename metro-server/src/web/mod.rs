//! Web layer for the metro route planner.
//!
//! Serves the route form and the JSON endpoints behind it.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
