use bevy::math::Vec3;

use crate::traits::UsizeExt;

/// Endpoints closer than this are treated as the same point.
const DEGENERATE_EPSILON: f32 = 1e-5;

/// Quadratic curve between two points on a sphere that bows away from the
/// sphere's centre.
///
/// The curve passes through the raised midpoint `normalize(start + end) *
/// arc_height` at `t = 0.5`, so with `arc_height` above the sphere radius the
/// middle of every arc clears the surface regardless of how far apart the
/// endpoints are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCurve {
    start:   Vec3,
    control: Vec3,
    end:     Vec3,
}

impl ArcCurve {
    pub fn new(start: Vec3, end: Vec3, arc_height: f32) -> Self {
        if start.distance(end) < DEGENERATE_EPSILON {
            return Self {
                start,
                control: start,
                end: start,
            };
        }

        let chord_midpoint = (start + end) * 0.5;
        let midpoint = bisecting_direction(start, end) * arc_height;

        // B(0.5) = 0.25 * start + 0.5 * control + 0.25 * end = midpoint
        let control = 2.0 * midpoint - chord_midpoint;

        Self {
            start,
            control,
            end,
        }
    }

    pub fn is_degenerate(&self) -> bool { self.start == self.end }

    pub fn point_at(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        u * u * self.start + 2.0 * u * t * self.control + t * t * self.end
    }

    /// Polyline of `segments + 1` points from start to end.
    pub fn sample(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|step| self.point_at(step.to_f32() / segments.to_f32()))
            .collect()
    }
}

/// Direction halfway between `start` and `end`. When the two are (nearly)
/// antipodal their sum vanishes, so fall back to a fixed direction
/// perpendicular to `start`.
fn bisecting_direction(start: Vec3, end: Vec3) -> Vec3 {
    (start + end).try_normalize().unwrap_or_else(|| {
        start
            .try_normalize()
            .map_or(Vec3::Y, |direction| direction.any_orthonormal_vector())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::project;
    use crate::globe::GlobeVariant;

    const SPHERE_RADIUS: f32 = 1.0;
    const MARKER_RADIUS: f32 = 1.01;
    const ARC_HEIGHT: f32 = 1.12;

    #[test]
    fn test_sample_count_and_endpoints() {
        let start = project(56.95, 24.1, MARKER_RADIUS);
        let end = project(40.71, -74.0, MARKER_RADIUS);
        let points = ArcCurve::new(start, end, ARC_HEIGHT).sample(60);

        assert_eq!(points.len(), 61);
        assert_eq!(points[0], start);
        assert!((points[60] - end).length() < 1e-6);
    }

    #[test]
    fn test_midpoint_sits_at_arc_height() {
        let start = project(10.0, 10.0, MARKER_RADIUS);
        let end = project(-20.0, 80.0, MARKER_RADIUS);
        let arc = ArcCurve::new(start, end, ARC_HEIGHT);

        assert!((arc.point_at(0.5).length() - ARC_HEIGHT).abs() < 1e-5);
    }

    #[test]
    fn test_midpoint_clears_both_endpoints_for_every_preset_pair() {
        for variant in [GlobeVariant::Classic, GlobeVariant::Minimal] {
            let points: Vec<Vec3> = variant
                .locations()
                .iter()
                .map(|location| project(location.latitude, location.longitude, MARKER_RADIUS))
                .collect();

            for (i, start) in points.iter().enumerate() {
                for end in &points[i + 1..] {
                    let samples = ArcCurve::new(*start, *end, ARC_HEIGHT).sample(60);
                    let middle = samples[30].length();
                    assert!(middle > SPHERE_RADIUS);
                    assert!(middle > start.length());
                    assert!(middle > end.length());
                }
            }
        }
    }

    #[test]
    fn test_identical_endpoints_do_not_spike() {
        let point = project(51.5, -0.12, MARKER_RADIUS);
        let arc = ArcCurve::new(point, point, ARC_HEIGHT);

        assert!(arc.is_degenerate());
        for sample in arc.sample(60) {
            assert_eq!(sample, point);
        }
    }

    #[test]
    fn test_antipodal_endpoints_stay_finite_and_deterministic() {
        let start = project(0.0, 0.0, MARKER_RADIUS);
        let end = -start;

        let first = ArcCurve::new(start, end, ARC_HEIGHT);
        let second = ArcCurve::new(start, end, ARC_HEIGHT);
        assert_eq!(first, second);

        let samples = first.sample(60);
        assert!(samples.iter().all(|point| point.is_finite()));
        assert!((samples[30].length() - ARC_HEIGHT).abs() < 1e-5);
        // the bulge is perpendicular to the start point
        assert!(samples[30].dot(start).abs() < 1e-4);
    }

    #[test]
    fn test_zero_segments_still_yields_a_line() {
        let arc = ArcCurve::new(Vec3::X, Vec3::Z, ARC_HEIGHT);
        assert_eq!(arc.sample(0).len(), 2);
    }
}
