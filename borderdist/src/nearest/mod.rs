//! Nearest-point queries against segments and borders.
//!
//! - [`closest_on_segment`]: one segment, via Newton's method with an
//!   endpoint fallback
//! - [`distance_to_border`]: a whole border, pruning segments whose lower
//!   bound cannot beat the best result so far
//!
//! Everything here is a pure function of its inputs. Per-query state lives on
//! the stack of the call, so any number of queries may run concurrently
//! against the same segments.

mod aggregate;
mod segment;


pub use aggregate::{
    distance_to_border, distance_to_border_exhaustive, distance_to_border_with_stats,
};
pub use segment::closest_on_segment;

use serde::Serialize;

use crate::geodesic::GeoPoint;

/// Closest point on a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestResult {
    /// The closest point found
    pub point: GeoPoint,
    /// Geodesic distance from the query to `point`, meters
    pub distance: f64,
    /// Position of `point` along the segment: 0 at the start, 1 at the end
    pub fraction: f64,
}

/// Closest point on a border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderNearest {
    /// Index of the winning segment in the border
    pub segment_index: usize,
    /// The winning segment's result
    #[serde(flatten)]
    pub nearest: NearestResult,
}

impl BorderNearest {
    /// Closest border point.
    pub fn point(&self) -> GeoPoint {
        self.nearest.point
    }

    /// Distance to the border in meters.
    pub fn distance(&self) -> f64 {
        self.nearest.distance
    }
}

/// Work done by one pruned border query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    /// Segments in the border
    pub segments: usize,
    /// Segments the solver actually ran on
    pub evaluated: usize,
}

impl ScanStats {
    /// Segments skipped by the lower-bound test.
    pub fn pruned(&self) -> usize {
        self.segments - self.evaluated
    }
}
