//! Station name search.

use serde::Serialize;

use crate::network::StationRecord;

/// Queries shorter than this (in characters) match nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// A search hit: a station and one line serving it.
///
/// Serialises as a `[station, line]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationMatch(pub String, pub String);

impl StationMatch {
    /// Station name.
    pub fn station(&self) -> &str {
        &self.0
    }

    /// Line name.
    pub fn line(&self) -> &str {
        &self.1
    }
}

/// Case-insensitive substring lookup over station names.
///
/// One entry per station record, so a station served by several lines
/// yields one match per line.
#[derive(Debug, Clone, Default)]
pub struct StationNames {
    /// (lower-cased name, display name, line), in record order.
    entries: Vec<(String, String, String)>,
}

impl StationNames {
    /// Build the lookup from station records.
    pub fn from_records(records: &[StationRecord]) -> Self {
        let entries = records
            .iter()
            .map(|r| (r.station.to_lowercase(), r.station.clone(), r.line.clone()))
            .collect();
        Self { entries }
    }

    /// Find stations whose name contains `query`, ignoring case.
    ///
    /// Returns at most `limit` matches in record order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<StationMatch> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|(lower, _, _)| lower.contains(&query))
            .take(limit)
            .map(|(_, name, line)| StationMatch(name.clone(), line.clone()))
            .collect()
    }

    /// Number of (station, line) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
