use crate::geometry::{CubicSegment, ThicknessProfile};
use crate::math::direction::{angle_between, bisect, perp_offset};

/// Derives the inner curve of a segment: each control point displaced by
/// the tile height, perpendicular to a locally chosen tangent angle.
///
/// With anchors A, D and controls B, C, the tangent angle is taken from
/// the chord A→B at A and C→D at D; at the interior controls it is the
/// bisector of the two adjacent chord angles. All four displacements lie
/// on the same side of the curve, so the tile has a well-defined near and
/// far edge.
///
/// This is a single-point perpendicular projection, not a true parallel
/// curve; it is exact only where the local curvature is zero, and sharp
/// turns may show slight edge overlap or gaps.
#[derive(Debug)]
pub struct SegmentOffset2D {
    segment: CubicSegment,
    thickness: ThicknessProfile,
}

impl SegmentOffset2D {
    /// Creates a new `SegmentOffset2D` operation.
    #[must_use]
    pub fn new(segment: CubicSegment, thickness: ThicknessProfile) -> Self {
        Self { segment, thickness }
    }

    /// Executes the offset, returning the inner curve.
    #[must_use]
    pub fn execute(&self) -> CubicSegment {
        let CubicSegment { a, b, c, d } = self.segment;
        let height = self.thickness.height();

        let theta_ab = angle_between(a, b);
        let theta_bc = angle_between(b, c);
        let theta_cd = angle_between(c, d);

        CubicSegment::new(
            a + perp_offset(theta_ab, height),
            b + perp_offset(bisect(theta_ab, theta_bc), height),
            c + perp_offset(bisect(theta_bc, theta_cd), height),
            d + perp_offset(theta_cd, height),
        )
    }
}
