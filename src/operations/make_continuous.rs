use crate::geometry::ControlPath;

/// Adjusts a control path in place so that chained segments approximate
/// tangent continuity at their shared anchors.
///
/// For every interior join (path indices 4, 7, 10, …, the first control
/// point of each segment after the first), the Y coordinate is recomputed
/// as the reflection of point `i-2` through point `i-1`:
/// `y[i] = y[i-2] + 2 * (y[i-1] - y[i-2])`. X coordinates are left
/// untouched, so this is a one-axis approximation of full tangent
/// continuity, not a vector reflection.
///
/// The operation is idempotent: the points it reads (`i-2`, `i-1`) are
/// never themselves rewritten, so a second pass is a no-op.
#[derive(Debug, Default)]
pub struct MakeContinuous;

impl MakeContinuous {
    /// Creates a new `MakeContinuous` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the adjustment, mutating the path in place.
    pub fn execute(&self, path: &mut ControlPath) {
        let points = path.points_mut();
        let mut i = 4;
        while i < points.len() {
            let prev = points[i - 2].y;
            let anchor = points[i - 1].y;
            points[i].y = prev + 2.0 * (anchor - prev);
            i += 3;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn two_segment_path() -> ControlPath {
        ControlPath::new(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 3.0),
            Point2::new(3.0, 1.0),
            Point2::new(4.0, 5.0),
            Point2::new(5.0, 0.0),
            Point2::new(6.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn reflects_join_control_y() {
        let mut path = two_segment_path();
        MakeContinuous::new().execute(&mut path);

        // y[4] = y[2] + 2 * (y[3] - y[2]) = 3 + 2 * (1 - 3) = -1
        assert!((path.points()[4].y + 1.0).abs() < 1e-12);
        // x[4] untouched
        assert!((path.points()[4].x - 4.0).abs() < 1e-12);
    }

    #[test]
    fn leaves_single_segment_path_alone() {
        let original = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 3.0),
            Point2::new(3.0, 1.0),
        ];
        let mut path = ControlPath::new(&original).unwrap();
        MakeContinuous::new().execute(&mut path);
        assert_eq!(path.points(), original.as_slice());
    }

    #[test]
    fn is_idempotent() {
        let mut path = two_segment_path();
        let op = MakeContinuous::new();
        op.execute(&mut path);
        let after_first = path.points().to_vec();
        op.execute(&mut path);
        assert_eq!(path.points(), after_first.as_slice());
    }

    #[test]
    fn adjusts_every_interior_join() {
        #[allow(clippy::cast_precision_loss)]
        let points: Vec<Point2> = (0..10)
            .map(|i| Point2::new(i as f64, (i * i) as f64))
            .collect();
        let mut path = ControlPath::new(&points).unwrap();
        MakeContinuous::new().execute(&mut path);

        for i in [4, 7] {
            let expected = points[i - 2].y + 2.0 * (points[i - 1].y - points[i - 2].y);
            assert!((path.points()[i].y - expected).abs() < 1e-12);
        }
    }
}
