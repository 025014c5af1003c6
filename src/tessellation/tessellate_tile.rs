use crate::error::Result;
use crate::geometry::{ControlPath, CubicSegment, ThicknessProfile};
use crate::operations::SegmentOffset2D;

use super::{Mesh, Quad, TessellationStrategy};

/// Subdivision count used by [`TessellationStrategy::SingleSegment`] when
/// no explicit resolution is supplied.
const FIXED_RESOLUTION: usize = 16;

/// Generates the ribbon mesh for a control path at a given thickness.
///
/// The tessellator is a pure function of its inputs: it owns no state and
/// recomputes the mesh on every call, at a cost of
/// `O(resolution × segment count)`. Callers that re-tessellate unchanged
/// inputs every frame can wrap it in a [`super::MeshCache`].
#[derive(Debug, Clone, Copy)]
pub struct TessellateTile {
    thickness: ThicknessProfile,
    resolution: Option<usize>,
    strategy: TessellationStrategy,
}

impl TessellateTile {
    /// Creates a new `TessellateTile` operation with an adaptively chosen
    /// resolution and the multi-segment strategy.
    #[must_use]
    pub fn new(thickness: ThicknessProfile) -> Self {
        Self {
            thickness,
            resolution: None,
            strategy: TessellationStrategy::default(),
        }
    }

    /// Overrides the estimated resolution with an explicit quad count per
    /// segment. Zero is valid and yields an empty mesh.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Selects a tessellation strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: TessellationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the thickness profile.
    #[must_use]
    pub fn thickness(&self) -> ThicknessProfile {
        self.thickness
    }

    /// Returns the explicit resolution override, if any.
    #[must_use]
    pub fn resolution(&self) -> Option<usize> {
        self.resolution
    }

    /// Returns the selected strategy.
    #[must_use]
    pub fn strategy(&self) -> TessellationStrategy {
        self.strategy
    }

    /// Estimates a tessellation resolution from the path and thickness:
    /// `floor(2 * (|P0 P1| + |P1 P2|) / height)`.
    ///
    /// Only the first three control points of the whole path are
    /// consulted, regardless of segment count, and the result is shared
    /// by every segment. Degenerate inputs (non-positive height, path
    /// shorter than the thickness) yield 0, which tessellates to an empty
    /// mesh.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn estimate_resolution(&self, path: &ControlPath) -> usize {
        let points = path.points();
        let chords = (points[1] - points[0]).norm() + (points[2] - points[1]).norm();
        let estimate = (2.0 * chords / self.thickness.height()).floor();
        if !estimate.is_finite() || estimate <= 0.0 {
            return 0;
        }
        estimate as usize
    }

    /// Executes the tessellation, returning the ribbon mesh.
    ///
    /// Emits `resolution` quads per tessellated segment, in segment order.
    ///
    /// # Errors
    ///
    /// Returns an error if segment access fails; unreachable for a
    /// validated path.
    pub fn execute(&self, path: &ControlPath) -> Result<Mesh> {
        let resolution = match self.resolution {
            Some(r) => r,
            None => match self.strategy {
                TessellationStrategy::SingleSegment => FIXED_RESOLUTION,
                _ => self.estimate_resolution(path),
            },
        };

        let segment_count = match self.strategy {
            TessellationStrategy::MultiSegmentChain => path.segment_count(),
            _ => 1,
        };

        let mut mesh = Mesh {
            quads: Vec::with_capacity(resolution * segment_count),
        };
        for index in 0..segment_count {
            let outer = path.segment(index)?;
            let inner = SegmentOffset2D::new(outer, self.thickness).execute();
            tessellate_segment(&outer, &inner, resolution, &mut mesh.quads);
        }
        Ok(mesh)
    }
}

/// Emits `resolution` quads spanning the inner and outer curves of one
/// segment.
///
/// Quad `i` covers the parameter band `[i/r, (i+1)/r]`: the inner curve is
/// evaluated at `(f, f1)` and the outer curve at `(f1, f)`, so the winding
/// stays consistent and edges connect without self-crossing.
fn tessellate_segment(
    outer: &CubicSegment,
    inner: &CubicSegment,
    resolution: usize,
    quads: &mut Vec<Quad>,
) {
    #[allow(clippy::cast_precision_loss)]
    for i in 0..resolution {
        let f = i as f64 / resolution as f64;
        let f1 = (i + 1) as f64 / resolution as f64;
        quads.push(Quad {
            vertices: [
                inner.point_at(f),
                inner.point_at(f1),
                outer.point_at(f1),
                outer.point_at(f),
            ],
        });
    }
}
