//! Route planner using A* search.
//!
//! This module implements the core route search that answers:
//! "What is the cheapest way from this station to that one?"
//!
//! Cost is distance travelled, with line changes made more expensive so
//! routes only transfer when it pays off. Changes are restricted to the
//! transfers the network explicitly authorises.

mod config;
mod frontier;
mod itinerary;
mod search;

#[cfg(test)]
mod search_tests;

pub use config::{SearchConfig, TRANSFER_COST_FACTOR, TRANSFER_PENALTY_KM};
pub use frontier::Frontier;
pub use itinerary::{ItineraryStep, build_itinerary};
pub use search::{NoRoute, Planner, Route, SearchOutcome};
