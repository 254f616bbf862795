//! Human-readable itinerary for a found route.

use std::fmt;

use crate::domain::SearchState;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItineraryStep {
    /// Board at the origin.
    Start { station: String, line: String },
    /// Change lines at a station.
    Transfer {
        station: String,
        from_line: String,
        to_line: String,
    },
    /// Arrive at the destination.
    Destination { station: String, line: String },
}

impl fmt::Display for ItineraryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItineraryStep::Start { station, line } => write!(f, "Start: {station} ({line})"),
            ItineraryStep::Transfer {
                station,
                from_line,
                to_line,
            } => write!(f, "Transfer at {station}: {from_line} → {to_line}"),
            ItineraryStep::Destination { station, line } => {
                write!(f, "Destination: {station} ({line})")
            }
        }
    }
}

/// Build the itinerary for a reconstructed path.
///
/// A transfer step is emitted at each state whose line differs from the
/// previous one. An empty path yields no steps.
pub fn build_itinerary(path: &[SearchState]) -> Vec<ItineraryStep> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Vec::new();
    };

    let mut steps = vec![ItineraryStep::Start {
        station: first.station.clone(),
        line: first.line.clone(),
    }];

    for pair in path.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);
        if !prev.same_line(current) {
            steps.push(ItineraryStep::Transfer {
                station: current.station.clone(),
                from_line: prev.line.clone(),
                to_line: current.line.clone(),
            });
        }
    }

    steps.push(ItineraryStep::Destination {
        station: last.station.clone(),
        line: last.line.clone(),
    });

    steps
}
