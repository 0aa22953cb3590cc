//! Border geometry: segments, the shared border list, and how they are built.
//!
//! A border is preprocessed once, either from GeoJSON rings (paying one
//! inverse geodesic per segment) or from a prebuilt segment list, and is
//! read-only from then on.
//!
//! ```
//! use borderdist::border::Border;
//! use borderdist::geodesic::Wgs84Geodesic;
//!
//! let geodesic = Wgs84Geodesic::new();
//! let ring = vec![[-64.0, 46.0], [-63.0, 46.0], [-63.0, 47.0], [-64.0, 46.0]];
//! let border = Border::from_rings(&geodesic, &[ring]).unwrap();
//! assert_eq!(border.len(), 3);
//! ```

mod builder;
pub mod ingest;
mod segment;

pub use builder::build_segments;
pub use ingest::{load_border, save_segments, IngestError, Ring};
pub use segment::{Border, Segment};

use crate::geodesic::CoordError;

/// Errors raised while building or querying a border.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BorderError {
    /// A ring is too short or not closed
    #[error("Invalid geometry in ring {ring}: {reason}")]
    InvalidGeometry { ring: usize, reason: String },

    /// A ring position is outside the valid coordinate range
    #[error("Invalid coordinate at ring {ring}, position {position}: {source}")]
    InvalidCoordinate {
        ring: usize,
        position: usize,
        source: CoordError,
    },

    /// A prebuilt segment failed validation
    #[error("Invalid segment {index}: {reason}")]
    InvalidSegment { index: usize, reason: String },

    /// A nearest-point query was made against a border with no segments
    #[error("Border has no segments")]
    EmptyBorder,
}
