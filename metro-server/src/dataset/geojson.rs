//! Wire formats of the station and transfer-rule files.

use serde::Deserialize;

/// `stations.json`: a GeoJSON feature collection of station points.
#[derive(Debug, Deserialize)]
pub struct StationCollection {
    pub features: Vec<StationFeature>,
}

/// One station-on-a-line point.
#[derive(Debug, Deserialize)]
pub struct StationFeature {
    pub properties: StationProperties,
    pub geometry: PointGeometry,
}

/// Feature properties. Field names follow the source data set.
#[derive(Debug, Deserialize)]
pub struct StationProperties {
    #[serde(rename = "ISTASYON")]
    pub station: String,

    #[serde(rename = "PROJE_ADI")]
    pub line: String,

    /// Position along the line, if the data set provides one.
    #[serde(default)]
    pub order: Option<i64>,
}

/// A GeoJSON point; `coordinates` is `[lon, lat]` with an optional
/// altitude, which is ignored.
#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    pub coordinates: Vec<f64>,
}

/// `transfer_rules.json`.
#[derive(Debug, Deserialize)]
pub struct TransferRuleFile {
    pub transfers: Vec<TransferRuleDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRuleDto {
    pub station_a: String,
    pub line_a: String,
    pub station_b: String,
    pub line_b: String,
}
