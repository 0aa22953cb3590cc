//! Geodesic computations on the WGS84 ellipsoid.
//!
//! The rest of the crate talks to the ellipsoid only through the
//! [`GeodesicProvider`] trait. [`Wgs84Geodesic`] is the production
//! implementation, backed by Karney's algorithm from `geographiclib-rs`,
//! which is accurate to a few nanometers.

mod types;


pub use types::{CoordError, GeoPoint, InverseSolution, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

/// Solver for the two classical geodesic problems.
///
/// Implementations must be pure: the same inputs always give the same output,
/// and no call may block or perform I/O.
pub trait GeodesicProvider: Send + Sync {
    /// Solves the inverse problem from `from` to `to`.
    fn inverse(&self, from: GeoPoint, to: GeoPoint) -> InverseSolution;

    /// Solves the direct problem: walks `distance` meters from `from` along
    /// the geodesic leaving it at `azimuth` degrees.
    fn direct(&self, from: GeoPoint, azimuth: f64, distance: f64) -> GeoPoint;

    /// Geodesic distance in meters between two points.
    fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        self.inverse(from, to).distance
    }
}

/// WGS84 geodesic provider.
///
/// All state is the ellipsoid's precomputed series coefficients, built once
/// in [`Wgs84Geodesic::new`]; share one instance rather than rebuilding it.
pub struct Wgs84Geodesic {
    geod: Geodesic,
}

impl Wgs84Geodesic {
    /// Creates a provider for the WGS84 ellipsoid.
    pub fn new() -> Self {
        Self {
            geod: Geodesic::wgs84(),
        }
    }
}

impl Default for Wgs84Geodesic {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Wgs84Geodesic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Wgs84Geodesic")
    }
}

impl GeodesicProvider for Wgs84Geodesic {
    fn inverse(&self, from: GeoPoint, to: GeoPoint) -> InverseSolution {
        let (distance, initial_azimuth, _final_azimuth, arc_length): (f64, f64, f64, f64) =
            self.geod.inverse(from.lat, from.lon, to.lat, to.lon);
        InverseSolution {
            distance,
            initial_azimuth,
            arc_length,
        }
    }

    fn direct(&self, from: GeoPoint, azimuth: f64, distance: f64) -> GeoPoint {
        let (lat, lon): (f64, f64) = self.geod.direct(from.lat, from.lon, azimuth, distance);
        GeoPoint { lat, lon }
    }

    fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        self.geod.inverse(from.lat, from.lon, to.lat, to.lon)
    }
}
