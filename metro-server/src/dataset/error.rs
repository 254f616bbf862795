//! Dataset loading error types.

use std::path::PathBuf;

use crate::domain::InvalidCoordinate;

/// Errors that can occur while loading network data.
///
/// Loading never falls back to partial data: any malformed record fails
/// the whole load.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A data file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON or is missing required fields
    #[error("malformed {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A station feature's point has fewer than two coordinates
    #[error("station feature {index} ({station}): point needs [lon, lat]")]
    BadGeometry { index: usize, station: String },

    /// A station feature has an unusable coordinate
    #[error("station feature {index} ({station}): {source}")]
    InvalidCoordinate {
        index: usize,
        station: String,
        #[source]
        source: InvalidCoordinate,
    },

    /// A record has an empty required field
    #[error("{file} record {index}: {field} must not be empty")]
    EmptyField {
        file: String,
        index: usize,
        field: &'static str,
    },
}
