/// Thickness of the generated tile, constant along the whole path.
///
/// `height` is the perpendicular distance between the outer curve (traced
/// through the control points) and the derived inner curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessProfile {
    height: f64,
}

impl ThicknessProfile {
    /// Creates a new thickness profile.
    ///
    /// Non-positive heights are accepted and produce degenerate or
    /// self-overlapping offset geometry; clamping them is the caller's
    /// responsibility.
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Returns the tile height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn stores_height() {
        let profile = ThicknessProfile::new(0.5);
        assert!((profile.height() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_height_is_accepted() {
        let profile = ThicknessProfile::new(-1.0);
        assert!((profile.height() + 1.0).abs() < f64::EPSILON);
    }
}
