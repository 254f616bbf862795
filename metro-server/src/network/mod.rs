//! The metro network: station graph plus transfer rules.
//!
//! Both halves are built once from static records and are read-only
//! afterwards, so a [`Network`] can be shared across concurrent searches.

mod graph;
mod records;
mod transfers;

pub use graph::{DEFAULT_LINE_ORDER, GraphBuilder, Station, StationGraph};
pub use records::{StationRecord, TransferRule};
pub use transfers::TransferValidator;

/// Immutable network used by the planner.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub graph: StationGraph,
    pub transfers: TransferValidator,
}

impl Network {
    /// Build the graph and the transfer index from raw records.
    pub fn build(records: &[StationRecord], rules: &[TransferRule]) -> Self {
        Self::build_with(&GraphBuilder::new(), records, rules)
    }

    /// Build using a configured graph builder.
    pub fn build_with(
        builder: &GraphBuilder,
        records: &[StationRecord],
        rules: &[TransferRule],
    ) -> Self {
        Self {
            graph: builder.build(records, rules),
            transfers: TransferValidator::from_rules(rules),
        }
    }
}
