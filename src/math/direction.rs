use super::{Point2, Vector2};

/// Returns the direction angle of the chord from `from` to `to`, in radians.
///
/// Coincident points yield an angle of 0 (`atan2(0, 0)` convention).
#[must_use]
pub fn angle_between(from: Point2, to: Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Returns the bisector of two direction angles.
#[must_use]
pub fn bisect(a: f64, b: f64) -> f64 {
    f64::midpoint(a, b)
}

/// Returns a displacement of length `dist` perpendicular to the direction
/// angle `theta` (the tangent rotated +90°).
///
/// The side is fixed: for a tangent pointing along +x the displacement
/// points along +y. Scaling by a negative `dist` flips the side.
#[must_use]
pub fn perp_offset(theta: f64, dist: f64) -> Vector2 {
    Vector2::new(-theta.sin() * dist, theta.cos() * dist)
}
