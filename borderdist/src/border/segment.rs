//! Segment and border types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::BorderError;
use crate::geodesic::{GeoPoint, GeodesicProvider};

/// A directed geodesic segment with its length cached.
///
/// `distance` is computed once when the segment is built and never
/// recomputed. Direction only matters for construction; nearest-point
/// queries treat a segment symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: GeoPoint,
    end: GeoPoint,
    distance: f64,
}

impl Segment {
    /// Builds a segment, asking `geodesic` for its length.
    pub fn new<G: GeodesicProvider + ?Sized>(geodesic: &G, start: GeoPoint, end: GeoPoint) -> Self {
        Self {
            start,
            end,
            distance: geodesic.distance(start, end),
        }
    }

    /// Builds segment `index` of a list from a previously computed length.
    ///
    /// Used when loading prebuilt segment lists; the length is trusted as-is
    /// apart from being finite and non-negative. `index` only labels the
    /// error.
    pub fn with_distance(
        index: usize,
        start: GeoPoint,
        end: GeoPoint,
        distance: f64,
    ) -> Result<Self, BorderError> {
        let segment = Self {
            start,
            end,
            distance,
        };
        segment
            .validate()
            .map_err(|reason| BorderError::InvalidSegment { index, reason })?;
        Ok(segment)
    }

    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    #[inline]
    pub fn end(&self) -> GeoPoint {
        self.end
    }

    /// Cached geodesic length in meters.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Checks a deserialized segment, returning a human-readable reason on failure.
    fn validate(&self) -> Result<(), String> {
        for (name, point) in [("start", self.start), ("end", self.end)] {
            GeoPoint::new(point.lat, point.lon).map_err(|e| format!("{}: {}", name, e))?;
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(format!(
                "distance must be finite and non-negative, got {}",
                self.distance
            ));
        }
        Ok(())
    }
}

/// An immutable, shared list of segments.
///
/// Built once (from rings or a prebuilt list) and then only read. Cloning a
/// `Border` clones a reference, so one border can back any number of
/// concurrent queries.
#[derive(Debug, Clone)]
pub struct Border {
    segments: Arc<[Segment]>,
}

impl Border {
    /// Builds a border from closed `[lon, lat]` rings.
    ///
    /// See [`super::build_segments`] for the ring rules.
    pub fn from_rings<G, R>(geodesic: &G, rings: &[R]) -> Result<Self, BorderError>
    where
        G: GeodesicProvider + ?Sized,
        R: AsRef<[[f64; 2]]>,
    {
        let segments = super::build_segments(geodesic, rings)?;
        Ok(Self {
            segments: segments.into(),
        })
    }

    /// Wraps a prebuilt segment list after validating every segment.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, BorderError> {
        for (index, segment) in segments.iter().enumerate() {
            segment
                .validate()
                .map_err(|reason| BorderError::InvalidSegment { index, reason })?;
        }
        Ok(Self {
            segments: segments.into(),
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of all segment lengths in meters.
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(Segment::distance).sum()
    }
}
