use super::Point2;

/// Evaluates a cubic Bézier curve at parameter `t` by repeated linear
/// interpolation (De Casteljau), applied to x and y independently.
///
/// Exact at the endpoints: `t = 0` returns `a` and `t = 1` returns `d`.
#[must_use]
pub fn cubic_point(a: Point2, b: Point2, c: Point2, d: Point2, t: f64) -> Point2 {
    let ab = lerp(a, b, t);
    let bc = lerp(b, c, t);
    let cd = lerp(c, d, t);

    let abc = lerp(ab, bc, t);
    let bcd = lerp(bc, cd, t);

    lerp(abc, bcd, t)
}

/// Linear interpolation between two points.
#[must_use]
fn lerp(p: Point2, q: Point2, t: f64) -> Point2 {
    Point2::new(p.x + (q.x - p.x) * t, p.y + (q.y - p.y) * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn constant_curve_is_fixed_point() {
        let p = Point2::new(3.5, -1.25);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let q = cubic_point(p, p, p, p, t);
            assert!((q.x - p.x).abs() < f64::EPSILON);
            assert!((q.y - p.y).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let a = Point2::new(0.3, 7.1);
        let b = Point2::new(-2.0, 4.0);
        let c = Point2::new(5.5, -3.0);
        let d = Point2::new(9.0, 2.5);

        let start = cubic_point(a, b, c, d, 0.0);
        assert!((start.x - a.x).abs() < f64::EPSILON);
        assert!((start.y - a.y).abs() < f64::EPSILON);

        let end = cubic_point(a, b, c, d, 1.0);
        assert!((end.x - d.x).abs() < f64::EPSILON);
        assert!((end.y - d.y).abs() < f64::EPSILON);
    }

    #[test]
    fn straight_segment_midpoint() {
        // Collinear, evenly spaced control points trace the chord at
        // uniform speed.
        let p = cubic_point(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
            0.5,
        );
        assert!((p.x - 1.5).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }
}
