//! Metro route planner server.
//!
//! Loads a metro network from GeoJSON station data plus interchange
//! rules, and answers "how do I get from this station to that one with
//! the fewest kilometres and changes?" using A* over (station, line)
//! states.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod network;
pub mod planner;
pub mod stations;
pub mod web;
