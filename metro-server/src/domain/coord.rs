//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean Earth radius used for all distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when constructing an out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lon}, {lat}): {reason}")]
pub struct InvalidCoordinate {
    lon: f64,
    lat: f64,
    reason: &'static str,
}

/// A (longitude, latitude) pair in degrees.
///
/// Coordinates are finite and within range by construction, so distance
/// calculations never see NaN.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Coordinate;
///
/// let c = Coordinate::new(28.95, 41.00).unwrap();
/// assert_eq!(c.lon(), 28.95);
///
/// assert!(Coordinate::new(200.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both components.
    pub fn new(lon: f64, lat: f64) -> Result<Self, InvalidCoordinate> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(InvalidCoordinate {
                lon,
                lat,
                reason: "components must be finite",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinate {
                lon,
                lat,
                reason: "longitude must be within [-180, 180]",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                lon,
                lat,
                reason: "latitude must be within [-90, 90]",
            });
        }
        Ok(Self { lon, lat })
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Great-circle distance to another coordinate in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_km(self, other)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lon, self.lat)
    }
}

/// Haversine great-circle distance between two coordinates, in kilometres.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
