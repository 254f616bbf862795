//! Station graph construction.
//!
//! Stations are nodes; each carries directed edges tagged with the line the
//! edge travels on. Same-line edges link stations adjacent in their line's
//! order, and cross-line edges exist only where a transfer rule allows them.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::domain::{Coordinate, SearchState};

use super::records::{StationRecord, TransferRule};

/// Order assigned to records without an explicit position on their line.
///
/// Large enough that unordered records sort after all ordered ones.
pub const DEFAULT_LINE_ORDER: i64 = 9999;

/// A station in the graph.
#[derive(Debug, Clone)]
pub struct Station {
    /// Station name.
    pub name: String,
    /// Station location (first record seen wins).
    pub coord: Coordinate,
    /// Lines serving this station.
    pub lines: BTreeSet<String>,
    /// Outgoing edges, each given as the state it leads into.
    pub edges: Vec<SearchState>,
}

impl Station {
    fn new(name: &str, coord: Coordinate) -> Self {
        Self {
            name: name.to_string(),
            coord,
            lines: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    /// Whether the given line serves this station.
    pub fn serves(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    fn add_edge(&mut self, to: &str, line: &str) {
        let exists = self
            .edges
            .iter()
            .any(|e| e.station == to && e.line == line);
        if !exists {
            self.edges.push(SearchState::new(to, line));
        }
    }
}

/// Read-only station graph keyed by station name.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    stations: HashMap<String, Station>,
}

impl StationGraph {
    /// Build a graph using the default line-order sentinel.
    pub fn build(records: &[StationRecord], rules: &[TransferRule]) -> Self {
        GraphBuilder::new().build(records, rules)
    }

    /// Look up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Whether a station with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// Iterate over all stations in arbitrary order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Distinct line names across all stations.
    pub fn lines(&self) -> BTreeSet<&str> {
        self.stations
            .values()
            .flat_map(|s| s.lines.iter().map(String::as_str))
            .collect()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.stations.values().map(|s| s.edges.len()).sum()
    }
}

/// Builder for [`StationGraph`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    default_order: i64,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            default_order: DEFAULT_LINE_ORDER,
        }
    }
}

impl GraphBuilder {
    /// Create a builder with the default line-order sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the order assigned to records without an order hint.
    pub fn with_default_order(mut self, order: i64) -> Self {
        self.default_order = order;
        self
    }

    /// Build the graph from station records and transfer rules.
    ///
    /// Transfer rules whose endpoints are not in the graph, or whose station
    /// is not served by the named line, are skipped.
    pub fn build(&self, records: &[StationRecord], rules: &[TransferRule]) -> StationGraph {
        let mut stations: HashMap<String, Station> = HashMap::new();

        for record in records {
            stations
                .entry(record.station.clone())
                .or_insert_with(|| Station::new(&record.station, record.coord))
                .lines
                .insert(record.line.clone());
        }

        // Group by line, keeping lines in first-seen order so builds are
        // reproducible.
        let mut line_order: Vec<&str> = Vec::new();
        let mut by_line: HashMap<&str, Vec<(&str, i64)>> = HashMap::new();
        for record in records {
            let members = by_line.entry(record.line.as_str()).or_insert_with(|| {
                line_order.push(record.line.as_str());
                Vec::new()
            });
            members.push((
                record.station.as_str(),
                record.order.unwrap_or(self.default_order),
            ));
        }

        for line in &line_order {
            let Some(members) = by_line.get_mut(line) else {
                continue;
            };
            // Stable: equal orders keep their input order
            members.sort_by_key(|&(_, order)| order);

            for pair in members.windows(2) {
                let (a, b) = (pair[0].0, pair[1].0);
                if let Some(station) = stations.get_mut(a) {
                    station.add_edge(b, line);
                }
                if let Some(station) = stations.get_mut(b) {
                    station.add_edge(a, line);
                }
            }
        }

        let mut skipped = 0;
        for rule in rules {
            let endpoints_exist = stations
                .get(&rule.station_a)
                .is_some_and(|s| s.serves(&rule.line_a))
                && stations
                    .get(&rule.station_b)
                    .is_some_and(|s| s.serves(&rule.line_b));
            if !endpoints_exist {
                warn!(
                    station_a = %rule.station_a,
                    line_a = %rule.line_a,
                    station_b = %rule.station_b,
                    line_b = %rule.line_b,
                    "Skipping transfer rule with unknown endpoint"
                );
                skipped += 1;
                continue;
            }

            // The edge is tagged with the line being entered
            if let Some(station) = stations.get_mut(&rule.station_a) {
                station.add_edge(&rule.station_b, &rule.line_b);
            }
            if let Some(station) = stations.get_mut(&rule.station_b) {
                station.add_edge(&rule.station_a, &rule.line_a);
            }
        }

        debug!(
            stations = stations.len(),
            lines = line_order.len(),
            rules = rules.len(),
            skipped,
            "Built station graph"
        );

        StationGraph { stations }
    }
}
