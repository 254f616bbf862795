//! Loading the static network data set.
//!
//! Reads the station GeoJSON and the transfer-rule file from a data
//! directory and converts them into builder records.

mod error;
mod geojson;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::Coordinate;
use crate::network::{Network, StationRecord, TransferRule};

pub use error::DatasetError;

use geojson::{StationCollection, TransferRuleFile};

/// File name of the station GeoJSON inside the data directory.
pub const STATIONS_FILE: &str = "stations.json";

/// File name of the transfer rules inside the data directory.
pub const TRANSFER_RULES_FILE: &str = "transfer_rules.json";

/// Raw records for a whole network.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub stations: Vec<StationRecord>,
    pub transfers: Vec<TransferRule>,
}

impl Dataset {
    /// Load both data files from a directory.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        let stations = parse_stations(&read(&dir.join(STATIONS_FILE))?)?;
        let transfers = parse_transfer_rules(&read(&dir.join(TRANSFER_RULES_FILE))?)?;

        info!(
            dir = %dir.display(),
            stations = stations.len(),
            transfers = transfers.len(),
            "Loaded dataset"
        );

        Ok(Self {
            stations,
            transfers,
        })
    }

    /// Path of the station file within a data directory.
    pub fn stations_path(dir: &Path) -> PathBuf {
        dir.join(STATIONS_FILE)
    }

    /// Build the searchable network from these records.
    pub fn to_network(&self) -> Network {
        Network::build(&self.stations, &self.transfers)
    }
}

fn read(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the station GeoJSON into one record per feature.
pub fn parse_stations(json: &str) -> Result<Vec<StationRecord>, DatasetError> {
    let collection: StationCollection =
        serde_json::from_str(json).map_err(|source| DatasetError::Json {
            file: STATIONS_FILE.to_string(),
            source,
        })?;

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let props = feature.properties;
            require(STATIONS_FILE, index, "ISTASYON", &props.station)?;
            require(STATIONS_FILE, index, "PROJE_ADI", &props.line)?;

            let &[lon, lat, ..] = feature.geometry.coordinates.as_slice() else {
                return Err(DatasetError::BadGeometry {
                    index,
                    station: props.station,
                });
            };
            let coord = Coordinate::new(lon, lat).map_err(|source| {
                DatasetError::InvalidCoordinate {
                    index,
                    station: props.station.clone(),
                    source,
                }
            })?;

            Ok(StationRecord::new(props.station, props.line, coord, props.order))
        })
        .collect()
}

/// Parse the transfer-rule file.
pub fn parse_transfer_rules(json: &str) -> Result<Vec<TransferRule>, DatasetError> {
    let file: TransferRuleFile =
        serde_json::from_str(json).map_err(|source| DatasetError::Json {
            file: TRANSFER_RULES_FILE.to_string(),
            source,
        })?;

    file.transfers
        .into_iter()
        .enumerate()
        .map(|(index, rule)| {
            require(TRANSFER_RULES_FILE, index, "stationA", &rule.station_a)?;
            require(TRANSFER_RULES_FILE, index, "lineA", &rule.line_a)?;
            require(TRANSFER_RULES_FILE, index, "stationB", &rule.station_b)?;
            require(TRANSFER_RULES_FILE, index, "lineB", &rule.line_b)?;
            Ok(TransferRule::new(
                rule.station_a,
                rule.line_a,
                rule.station_b,
                rule.line_b,
            ))
        })
        .collect()
}

fn require(
    file: &str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), DatasetError> {
    if value.trim().is_empty() {
        return Err(DatasetError::EmptyField {
            file: file.to_string(),
            index,
            field,
        });
    }
    Ok(())
}
