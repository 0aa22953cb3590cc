//! Geographic point and geodesic solution types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid latitude range (degrees)
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range (degrees)
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A point on the WGS84 ellipsoid.
///
/// Latitude and longitude are in decimal degrees. The value is immutable once
/// built; use [`GeoPoint::new`] to validate untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, degrees north (-90 to 90)
    pub lat: f64,
    /// Longitude, degrees east (-180 to 180)
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point after checking both coordinates are finite and in range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Creates a point from a GeoJSON-ordered `[lon, lat]` position.
    pub fn from_lon_lat(position: [f64; 2]) -> Result<Self, CoordError> {
        Self::new(position[1], position[0])
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Result of an inverse geodesic computation between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// Geodesic distance in meters
    pub distance: f64,
    /// Azimuth at the first point, degrees clockwise from north
    pub initial_azimuth: f64,
    /// Arc length on the auxiliary sphere, degrees
    pub arc_length: f64,
}

/// Errors that can occur when validating coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is not finite or outside -90..=90
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),
    /// Longitude is not finite or outside -180..=180
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),
}
