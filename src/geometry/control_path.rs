use crate::error::{PathError, Result};
use crate::math::Point2;

use super::CubicSegment;

/// An ordered sequence of control points defining chained cubic Bézier
/// segments.
///
/// A valid path holds `3k + 1` points for some `k >= 1`. Segment `i` uses
/// the points at indices `[3i, 3i+1, 3i+2, 3i+3]` as (anchor, control,
/// control, anchor); consecutive segments share their boundary anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPath {
    points: Vec<Point2>,
}

impl ControlPath {
    /// Creates a path from the given control points.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidLength`] if the point count is not of
    /// the form `3k + 1` with `k >= 1`.
    pub fn new(points: &[Point2]) -> Result<Self> {
        validate_len(points.len())?;
        Ok(Self {
            points: points.to_vec(),
        })
    }

    /// Replaces the entire path with new control points.
    ///
    /// The length is validated before any existing point is touched, so a
    /// rejected call leaves the path unchanged. The owned buffer is reused
    /// across replacements.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidLength`] if the point count is not of
    /// the form `3k + 1` with `k >= 1`.
    pub fn set_points(&mut self, points: &[Point2]) -> Result<()> {
        validate_len(points.len())?;
        self.points.clear();
        self.points.extend_from_slice(points);
        Ok(())
    }

    /// Returns the number of cubic segments (`k`).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Returns the four control points of segment `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::SegmentOutOfRange`] if `index >= segment_count()`.
    pub fn segment(&self, index: usize) -> Result<CubicSegment> {
        let count = self.segment_count();
        if index >= count {
            return Err(PathError::SegmentOutOfRange { index, count }.into());
        }
        let base = 3 * index;
        Ok(CubicSegment::new(
            self.points[base],
            self.points[base + 1],
            self.points[base + 2],
            self.points[base + 3],
        ))
    }

    /// Returns the raw control points in path order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns parallel X and Y coordinate arrays of the control points,
    /// in the layout the GPU-side analytic evaluator consumes.
    ///
    /// The arrays are fresh copies; the path keeps sole ownership of its
    /// own buffer.
    #[must_use]
    pub fn guide_arrays(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = self.points.iter().map(|p| p.x).collect();
        let ys = self.points.iter().map(|p| p.y).collect();
        (xs, ys)
    }

    /// Mutable access for in-place continuity adjustment.
    pub(crate) fn points_mut(&mut self) -> &mut [Point2] {
        &mut self.points
    }
}

/// Checks the `3k + 1, k >= 1` length invariant.
fn validate_len(len: usize) -> std::result::Result<(), PathError> {
    if len < 4 || len % 3 != 1 {
        return Err(PathError::InvalidLength { len });
    }
    Ok(())
}
