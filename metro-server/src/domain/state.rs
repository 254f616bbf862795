//! The (station, line) search state.

use std::fmt;

/// A traveller's position: a station together with the line they occupy.
///
/// This is the node type the route search operates over. Two states at the
/// same station on different lines are distinct, because the cost and
/// legality of the next move depend on the current line.
///
/// Graph edges are represented by the state they lead into: the neighbour
/// station and the line being entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchState {
    /// Station name.
    pub station: String,
    /// Line name.
    pub line: String,
}

impl SearchState {
    /// Create a new state.
    pub fn new(station: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            line: line.into(),
        }
    }

    /// Returns true if both states are on the same line.
    pub fn same_line(&self, other: &SearchState) -> bool {
        self.line == other.line
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.station, self.line)
    }
}
