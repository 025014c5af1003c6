use crate::math::{bezier, Point2};

/// One cubic Bézier segment of a control path.
///
/// `a` and `d` are the anchors shared with neighbouring segments; `b` and
/// `c` are the interior control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
    pub d: Point2,
}

impl CubicSegment {
    /// Creates a segment from its four control points in path order.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2, d: Point2) -> Self {
        Self { a, b, c, d }
    }

    /// Evaluates the segment at parameter `t ∈ [0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        bezier::cubic_point(self.a, self.b, self.c, self.d, t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn point_at_reproduces_anchors() {
        let seg = CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, -1.0),
            Point2::new(3.0, 0.5),
        );
        let start = seg.point_at(0.0);
        let end = seg.point_at(1.0);
        assert!((start.x - seg.a.x).abs() < f64::EPSILON);
        assert!((start.y - seg.a.y).abs() < f64::EPSILON);
        assert!((end.x - seg.d.x).abs() < f64::EPSILON);
        assert!((end.y - seg.d.y).abs() < f64::EPSILON);
    }
}
