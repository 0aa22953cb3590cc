//! Closest point on a single geodesic segment.

use super::NearestResult;
use crate::border::Segment;
use crate::geodesic::{GeoPoint, GeodesicProvider};
use crate::minimize::NewtonMinimizer;

/// Newton starts from the middle of the segment.
const INITIAL_FRACTION: f64 = 0.5;

/// Finds the point on `segment` closest to `query`.
///
/// Points along the segment are addressed by fraction `alpha`: the point
/// reached by walking `alpha * segment.distance()` meters from the start
/// along the start→end geodesic. Newton's method minimizes the geodesic
/// distance from that point to `query`, starting at `alpha = 0.5`.
///
/// The endpoints are always candidates. The Newton point joins them only if
/// it converged strictly inside the segment, since the method can diverge,
/// stop on a maximum, or converge past either end. The nearest candidate
/// wins, so the result is never farther than the nearer endpoint.
///
/// # Limits
///
/// Newton only refines from the middle, so the interior minimum can be missed
/// and the answer is then the nearer endpoint, not the true nearest point.
/// This happens when the query lies on or very close to the segment's
/// geodesic away from its middle: the distance is close to `|alpha - foot|`
/// times the length, a V with no curvature around `alpha = 0.5`, so the
/// curvature is reported flat or the step overshoots past an end. On a
/// 10 km segment from (10.0, 20.0) to (10.09, 20.0), the query (10.018, 20.0)
/// lies on the segment yet comes back as the start vertex, about 1991 m away.
/// Queries well off the geodesic see a smooth bowl and are unaffected.
pub fn closest_on_segment<G: GeodesicProvider + ?Sized>(
    geodesic: &G,
    minimizer: &NewtonMinimizer,
    query: GeoPoint,
    segment: &Segment,
) -> NearestResult {
    let start = NearestResult {
        point: segment.start(),
        distance: geodesic.distance(segment.start(), query),
        fraction: 0.0,
    };
    if segment.distance() == 0.0 {
        return start;
    }

    let end = NearestResult {
        point: segment.end(),
        distance: geodesic.distance(segment.end(), query),
        fraction: 1.0,
    };
    let mut best = if end.distance < start.distance {
        end
    } else {
        start
    };

    let azimuth = geodesic
        .inverse(segment.start(), segment.end())
        .initial_azimuth;
    let position =
        |alpha: f64| geodesic.direct(segment.start(), azimuth, alpha * segment.distance());

    match minimizer.minimize(|alpha| geodesic.distance(position(alpha), query), INITIAL_FRACTION)
    {
        Ok(alpha) if alpha > 0.0 && alpha < 1.0 => {
            let point = position(alpha);
            let distance = geodesic.distance(point, query);
            if distance < best.distance {
                best = NearestResult {
                    point,
                    distance,
                    fraction: alpha,
                };
            }
        }
        Ok(alpha) => {
            tracing::trace!(alpha, "Stationary point outside segment, using endpoint");
        }
        Err(reason) => {
            tracing::trace!(%reason, "Newton did not converge, using endpoint");
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::Wgs84Geodesic;
    use proptest::prelude::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn pei_segment(geod: &Wgs84Geodesic) -> Segment {
        Segment::new(geod, point(46.55001, -63.6645), point(46.41587, -62.9393))
    }

    #[test]
    fn test_far_west_query_lands_on_endpoint() {
        let geod = Wgs84Geodesic::new();
        let minimizer = NewtonMinimizer::default();
        let segment = pei_segment(&geod);
        assert!((segment.distance() - 57_647.24).abs() < 1.0);

        let query = point(45.4647, -98.4865);
        let result = closest_on_segment(&geod, &minimizer, query, &segment);

        assert!(result.fraction == 0.0 || result.fraction == 1.0);
        let nearer_endpoint = geod
            .distance(segment.start(), query)
            .min(geod.distance(segment.end(), query));
        assert!(((result.distance - nearer_endpoint) / nearer_endpoint).abs() < 1e-9);
        // The western end is the nearer one
        assert_eq!(result.point, segment.start());
    }

    #[test]
    fn test_query_at_midpoint() {
        let geod = Wgs84Geodesic::new();
        let minimizer = NewtonMinimizer::default();
        let segment = pei_segment(&geod);

        let azimuth = geod.inverse(segment.start(), segment.end()).initial_azimuth;
        let midpoint = geod.direct(segment.start(), azimuth, segment.distance() / 2.0);

        let result = closest_on_segment(&geod, &minimizer, midpoint, &segment);
        assert!(result.distance < 1e-3, "distance {}", result.distance);
        assert!((result.fraction - 0.5).abs() < 1e-6);
        assert!(geod.distance(result.point, midpoint) < 1e-3);
    }

    #[test]
    fn test_query_beside_segment_finds_interior_point() {
        // A ~1.1km north-south segment and a query 0.1 degrees east of a point
        // 40% of the way along it
        let geod = Wgs84Geodesic::new();
        let minimizer = NewtonMinimizer::default();
        let segment = Segment::new(&geod, point(10.0, 20.0), point(10.01, 20.0));
        let query = point(10.004, 20.1);

        let result = closest_on_segment(&geod, &minimizer, query, &segment);

        assert!(result.fraction > 0.0 && result.fraction < 1.0);
        assert!((result.fraction - 0.4).abs() < 0.01, "fraction {}", result.fraction);
        assert!((result.point.lat - 10.004).abs() < 1e-4, "lat {}", result.point.lat);
        assert!((result.point.lon - 20.0).abs() < 1e-9);
        // Radius of the 10N parallel times 0.1 degrees
        assert!((result.distance - 10_963.0).abs() < 50.0, "got {}", result.distance);
        assert!(result.distance < geod.distance(segment.start(), query));
        assert!(result.distance < geod.distance(segment.end(), query));
    }

    #[test]
    fn test_zero_length_segment() {
        let geod = Wgs84Geodesic::new();
        let minimizer = NewtonMinimizer::default();
        let p = point(5.0, 5.0);
        let segment = Segment::new(&geod, p, p);
        let query = point(6.0, 5.0);

        let result = closest_on_segment(&geod, &minimizer, query, &segment);
        assert_eq!(result.point, p);
        assert_eq!(result.fraction, 0.0);
        assert_eq!(result.distance, geod.distance(p, query));
    }

    #[test]
    fn test_direction_does_not_change_distance() {
        let geod = Wgs84Geodesic::new();
        let minimizer = NewtonMinimizer::default();
        let a = point(10.0, 20.0);
        let b = point(10.02, 20.01);
        let query = point(10.01, 20.2);

        let forward = closest_on_segment(&geod, &minimizer, query, &Segment::new(&geod, a, b));
        let backward = closest_on_segment(&geod, &minimizer, query, &Segment::new(&geod, b, a));

        assert!((forward.distance - backward.distance).abs() < 0.01);
    }

    #[test]
    fn test_query_on_long_segment_off_center_falls_back_to_endpoint() {
        // The query sits on the segment 20% of the way along; Newton from the
        // middle cannot see the kink there, so only the endpoint bound holds
        let geod = Wgs84Geodesic::new();
        let minimizer = NewtonMinimizer::default();
        let segment = Segment::new(&geod, point(10.0, 20.0), point(10.09, 20.0));
        let query = point(10.018, 20.0);

        let result = closest_on_segment(&geod, &minimizer, query, &segment);

        let to_start = geod.distance(segment.start(), query);
        let to_end = geod.distance(segment.end(), query);
        assert!((to_start - 1_991.0).abs() < 5.0, "got {}", to_start);
        assert!(result.distance <= to_start.min(to_end));
        assert!((0.0..=1.0).contains(&result.fraction));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 48, .. ProptestConfig::default()
        })]

        /// The result is never farther than the nearer endpoint.
        #[test]
        fn never_worse_than_endpoints(
            lat1 in -60.0f64..60.0, lon1 in -170.0f64..170.0,
            dlat in -2.0f64..2.0, dlon in -2.0f64..2.0,
            qlat in -3.0f64..3.0, qlon in -3.0f64..3.0,
        ) {
            let geod = Wgs84Geodesic::new();
            let minimizer = NewtonMinimizer::default();
            let start = point(lat1, lon1);
            let end = point(lat1 + dlat, lon1 + dlon);
            let query = point(lat1 + qlat, lon1 + qlon);
            let segment = Segment::new(&geod, start, end);

            let result = closest_on_segment(&geod, &minimizer, query, &segment);
            let endpoints = geod.distance(start, query).min(geod.distance(end, query));

            prop_assert!(result.distance <= endpoints);
            prop_assert!((0.0..=1.0).contains(&result.fraction));
            prop_assert!((geod.distance(result.point, query) - result.distance).abs() < 1e-6);
        }
    }
}
