//! borderdist - Distance from a point to a polygon border on the WGS84 ellipsoid
//!
//! A border is a set of closed rings, flattened into geodesic segments once
//! at load time. Queries find the closest point on any segment, minimizing
//! the geodesic distance along each segment with Newton's method and skipping
//! segments that a triangle-inequality lower bound rules out.
//!
//! # High-Level API
//!
//! [`BorderIndex`] bundles a border with its solver:
//!
//! ```
//! use borderdist::border::Border;
//! use borderdist::config::MinimizerConfig;
//! use borderdist::geodesic::{GeoPoint, Wgs84Geodesic};
//! use borderdist::BorderIndex;
//!
//! let ring = vec![[-64.0, 46.0], [-63.0, 46.0], [-63.0, 47.0], [-64.0, 46.0]];
//! let border = Border::from_rings(&Wgs84Geodesic::new(), &[ring]).unwrap();
//! let index = BorderIndex::new(border, MinimizerConfig::default());
//!
//! let nearest = index.nearest(GeoPoint::new(46.5, -62.0).unwrap()).unwrap();
//! assert!(nearest.distance() > 0.0);
//! ```

pub mod border;
pub mod config;
pub mod geodesic;
pub mod index;
pub mod logging;
pub mod minimize;
pub mod nearest;

pub use index::BorderIndex;
pub use nearest::{BorderNearest, NearestResult, ScanStats};

/// Version of the borderdist library and CLI.
///
/// Synchronized across the workspace and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.split('.').count() >= 3);
    }
}
