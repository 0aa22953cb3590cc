//! Closest point on a whole border, with lower-bound pruning.
//!
//! Running the segment solver costs dozens of geodesic evaluations, so the
//! aggregator first computes a cheap lower bound for every segment:
//!
//! ```text
//! bound = distance(query, segment.end) - segment.distance
//! ```
//!
//! For any point P on the segment, the triangle inequality gives
//! `distance(query, end) <= distance(query, P) + distance(P, end)` and
//! `distance(P, end) <= segment.distance`, so no point on the segment is
//! closer than `bound`. Segments are visited in ascending bound order and the
//! scan stops at the first bound above the best distance found so far.

use super::segment::closest_on_segment;
use super::{BorderNearest, ScanStats};
use crate::border::{BorderError, Segment};
use crate::geodesic::{GeoPoint, GeodesicProvider};
use crate::minimize::NewtonMinimizer;

/// Finds the point on `segments` closest to `query`.
///
/// # Errors
///
/// [`BorderError::EmptyBorder`] if `segments` is empty.
pub fn distance_to_border<G: GeodesicProvider + ?Sized>(
    geodesic: &G,
    minimizer: &NewtonMinimizer,
    segments: &[Segment],
    query: GeoPoint,
) -> Result<BorderNearest, BorderError> {
    distance_to_border_with_stats(geodesic, minimizer, segments, query).map(|(nearest, _)| nearest)
}

/// Same as [`distance_to_border`], also reporting how much work was pruned.
pub fn distance_to_border_with_stats<G: GeodesicProvider + ?Sized>(
    geodesic: &G,
    minimizer: &NewtonMinimizer,
    segments: &[Segment],
    query: GeoPoint,
) -> Result<(BorderNearest, ScanStats), BorderError> {
    // Per-query bounds; segments themselves are never annotated
    let mut bounds: Vec<(usize, f64)> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            (
                index,
                geodesic.distance(segment.end(), query) - segment.distance(),
            )
        })
        .collect();

    // Stable, so equal bounds keep their border order
    bounds.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ordered = bounds.into_iter();
    let Some((first, _)) = ordered.next() else {
        return Err(BorderError::EmptyBorder);
    };

    let mut best = BorderNearest {
        segment_index: first,
        nearest: closest_on_segment(geodesic, minimizer, query, &segments[first]),
    };
    let mut evaluated = 1;

    for (index, bound) in ordered {
        if bound > best.nearest.distance {
            break;
        }
        let candidate = closest_on_segment(geodesic, minimizer, query, &segments[index]);
        evaluated += 1;
        if candidate.distance < best.nearest.distance {
            best = BorderNearest {
                segment_index: index,
                nearest: candidate,
            };
        }
    }

    let stats = ScanStats {
        segments: segments.len(),
        evaluated,
    };

    tracing::trace!(
        query = %query,
        segments = stats.segments,
        evaluated = stats.evaluated,
        distance = best.nearest.distance,
        "Border query"
    );

    Ok((best, stats))
}

/// Runs the segment solver on every segment, without pruning.
///
/// The first strictly smallest result wins. This is the reference the pruned
/// scan must agree with; it is also useful for spot-checking a border.
pub fn distance_to_border_exhaustive<G: GeodesicProvider + ?Sized>(
    geodesic: &G,
    minimizer: &NewtonMinimizer,
    segments: &[Segment],
    query: GeoPoint,
) -> Result<BorderNearest, BorderError> {
    let mut best: Option<BorderNearest> = None;

    for (index, segment) in segments.iter().enumerate() {
        let candidate = closest_on_segment(geodesic, minimizer, query, segment);
        if best
            .as_ref()
            .map_or(true, |b| candidate.distance < b.nearest.distance)
        {
            best = Some(BorderNearest {
                segment_index: index,
                nearest: candidate,
            });
        }
    }

    best.ok_or(BorderError::EmptyBorder)
}
