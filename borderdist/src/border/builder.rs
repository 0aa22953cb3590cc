//! Turns closed coordinate rings into a flat segment list.

use super::{BorderError, Segment};
use crate::geodesic::{GeoPoint, GeodesicProvider};

/// Builds one segment per consecutive coordinate pair of every ring.
///
/// Rings are `[lon, lat]` sequences in GeoJSON order and must be closed
/// (first position equal to the last). A ring of `n` positions yields `n - 1`
/// segments, the last of which closes the ring. Segments come out ring by
/// ring, in ring order; holes are flattened in with the outer rings.
///
/// # Errors
///
/// - [`BorderError::InvalidGeometry`] for a ring with fewer than two positions
///   or one that is not closed
/// - [`BorderError::InvalidCoordinate`] for a position outside the valid
///   latitude/longitude range
pub fn build_segments<G, R>(geodesic: &G, rings: &[R]) -> Result<Vec<Segment>, BorderError>
where
    G: GeodesicProvider + ?Sized,
    R: AsRef<[[f64; 2]]>,
{
    let mut segments = Vec::with_capacity(
        rings
            .iter()
            .map(|r| r.as_ref().len().saturating_sub(1))
            .sum(),
    );

    for (ring_index, ring) in rings.iter().enumerate() {
        let points = ring_points(ring_index, ring.as_ref())?;
        segments.extend(
            points
                .windows(2)
                .map(|pair| Segment::new(geodesic, pair[0], pair[1])),
        );
    }

    tracing::debug!(
        rings = rings.len(),
        segments = segments.len(),
        "Built border segments"
    );

    Ok(segments)
}

/// Validates one ring and converts it to points.
fn ring_points(ring: usize, positions: &[[f64; 2]]) -> Result<Vec<GeoPoint>, BorderError> {
    if positions.len() < 2 {
        return Err(BorderError::InvalidGeometry {
            ring,
            reason: format!("ring has {} position(s), need at least 2", positions.len()),
        });
    }

    let first = positions[0];
    let last = positions[positions.len() - 1];
    if first != last {
        return Err(BorderError::InvalidGeometry {
            ring,
            reason: format!(
                "ring is not closed: first position {:?} differs from last {:?}",
                first, last
            ),
        });
    }

    positions
        .iter()
        .enumerate()
        .map(|(position, &lon_lat)| {
            GeoPoint::from_lon_lat(lon_lat).map_err(|source| BorderError::InvalidCoordinate {
                ring,
                position,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::Wgs84Geodesic;

    fn square(lon: f64, lat: f64, size: f64) -> Vec<[f64; 2]> {
        vec![
            [lon, lat],
            [lon + size, lat],
            [lon + size, lat + size],
            [lon, lat + size],
            [lon, lat],
        ]
    }

    #[test]
    fn test_segment_count_is_points_minus_rings() {
        let geod = Wgs84Geodesic::new();
        let outer = square(-64.0, 46.0, 1.0);
        let hole = square(-63.7, 46.3, 0.2);
        let triangle = vec![[10.0, 10.0], [11.0, 10.0], [10.5, 11.0], [10.0, 10.0]];
        let rings = vec![outer, hole, triangle];

        let total_points: usize = rings.iter().map(Vec::len).sum();
        let segments = build_segments(&geod, &rings).unwrap();

        assert_eq!(segments.len(), total_points - rings.len());
    }

    #[test]
    fn test_distances_match_provider() {
        let geod = Wgs84Geodesic::new();
        let ring = vec![
            [-63.6645, 46.55001],
            [-62.9393, 46.41587],
            [-62.5, 46.0],
            [-63.6645, 46.55001],
        ];
        let segments = build_segments(&geod, &[ring]).unwrap();

        for segment in &segments {
            let direct = geod.distance(segment.start(), segment.end());
            assert!(
                ((segment.distance() - direct) / direct).abs() < 1e-6,
                "cached {} vs direct {}",
                segment.distance(),
                direct
            );
        }
    }

    #[test]
    fn test_segments_follow_ring_order() {
        let geod = Wgs84Geodesic::new();
        let ring = square(0.0, 0.0, 1.0);
        let segments = build_segments(&geod, &[ring.clone()]).unwrap();

        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.start().lon, ring[i][0]);
            assert_eq!(segment.start().lat, ring[i][1]);
            assert_eq!(segment.end().lon, ring[i + 1][0]);
            assert_eq!(segment.end().lat, ring[i + 1][1]);
        }
        // Closing segment returns to the start
        assert_eq!(segments.last().unwrap().end(), segments[0].start());
    }

    #[test]
    fn test_two_point_ring_is_one_degenerate_segment() {
        let geod = Wgs84Geodesic::new();
        let segments = build_segments(&geod, &[vec![[5.0, 5.0], [5.0, 5.0]]]).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].distance(), 0.0);
    }

    #[test]
    fn test_short_ring_rejected_with_index() {
        let geod = Wgs84Geodesic::new();
        let rings = vec![square(0.0, 0.0, 1.0), vec![[1.0, 1.0]]];

        match build_segments(&geod, &rings) {
            Err(BorderError::InvalidGeometry { ring, reason }) => {
                assert_eq!(ring, 1);
                assert!(reason.contains("at least 2"));
            }
            other => panic!("expected InvalidGeometry, got {:?}", other),
        }
    }

    #[test]
    fn test_open_ring_rejected() {
        let geod = Wgs84Geodesic::new();
        let open = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];

        assert!(matches!(
            build_segments(&geod, &[open]),
            Err(BorderError::InvalidGeometry { ring: 0, .. })
        ));
    }

    #[test]
    fn test_out_of_range_coordinate_rejected() {
        let geod = Wgs84Geodesic::new();
        let ring = vec![[0.0, 0.0], [0.0, 95.0], [0.0, 0.0]];

        assert!(matches!(
            build_segments(&geod, &[ring]),
            Err(BorderError::InvalidCoordinate {
                ring: 0,
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_no_rings_builds_nothing() {
        let geod = Wgs84Geodesic::new();
        let rings: Vec<Vec<[f64; 2]>> = Vec::new();
        assert!(build_segments(&geod, &rings).unwrap().is_empty());
    }
}
