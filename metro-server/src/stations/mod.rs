//! Free-text station lookup.
//!
//! Backs the station autocomplete: given part of a name, list the
//! matching stations together with the lines that serve them.

mod names;

pub use names::{MIN_QUERY_CHARS, StationMatch, StationNames};
