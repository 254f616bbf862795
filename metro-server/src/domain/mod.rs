//! Domain types for the metro route planner.
//!
//! Coordinates validate their range at construction time, so code that
//! receives one can compute distances without further checks.

mod coord;
mod state;

pub use coord::{Coordinate, EARTH_RADIUS_KM, InvalidCoordinate, distance_km};
pub use state::SearchState;
