//! Raw input records consumed by the graph builder.

use crate::domain::Coordinate;

/// One station-on-a-line record.
///
/// A station served by several lines appears once per line.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    /// Station name (identity key).
    pub station: String,
    /// Line serving the station.
    pub line: String,
    /// Station location.
    pub coord: Coordinate,
    /// Position of the station along the line, if known.
    pub order: Option<i64>,
}

impl StationRecord {
    /// Create a record with an explicit order hint.
    pub fn new(
        station: impl Into<String>,
        line: impl Into<String>,
        coord: Coordinate,
        order: Option<i64>,
    ) -> Self {
        Self {
            station: station.into(),
            line: line.into(),
            coord,
            order,
        }
    }
}

/// An authorised line change between two (station, line) endpoints.
///
/// Rules are unordered: `A ↔ B` permits travel in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRule {
    pub station_a: String,
    pub line_a: String,
    pub station_b: String,
    pub line_b: String,
}

impl TransferRule {
    /// Create a new transfer rule.
    pub fn new(
        station_a: impl Into<String>,
        line_a: impl Into<String>,
        station_b: impl Into<String>,
        line_b: impl Into<String>,
    ) -> Self {
        Self {
            station_a: station_a.into(),
            line_a: line_a.into(),
            station_b: station_b.into(),
            line_b: line_b.into(),
        }
    }

    /// Create a rule for changing lines within a single station.
    pub fn interchange(
        station: impl Into<String>,
        line_a: impl Into<String>,
        line_b: impl Into<String>,
    ) -> Self {
        let station = station.into();
        Self::new(station.clone(), line_a, station, line_b)
    }
}
