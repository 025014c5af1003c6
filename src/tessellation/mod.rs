mod cache;
mod tessellate_tile;

pub use cache::MeshCache;
pub use tessellate_tile::TessellateTile;

use crate::math::Point2;

/// Selects which of the historical tessellation behaviours to run.
///
/// The engine grew in three steps; the unified tessellator keeps all three
/// behind one selector instead of separate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TessellationStrategy {
    /// First segment only, fixed subdivision count (no adaptive estimate).
    SingleSegment,
    /// First segment only, resolution estimated from thickness and the
    /// leading control points.
    FixedThreeOffset,
    /// Every chained segment, one shared estimated resolution.
    #[default]
    MultiSegmentChain,
}

/// One cell of the generated ribbon strip.
///
/// Vertices are stored in fixed winding order: inner edge start, inner
/// edge end, outer edge end, outer edge start. The first edge lies on the
/// inner curve and the opposite edge on the outer curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// The four corners, in winding order.
    pub vertices: [Point2; 4],
}

/// The generated ribbon mesh: an ordered, flat sequence of quads.
///
/// Quads are grouped by segment and ordered along the path, so the
/// sequence can be consumed left-to-right as a strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// The quads, in path order.
    pub quads: Vec<Quad>,
}

impl Mesh {
    /// Returns the number of quads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Returns whether the mesh holds no quads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Splits every quad into two triangles, preserving winding and order,
    /// for consumers that only accept triangle lists.
    #[must_use]
    pub fn triangles(&self) -> Vec<[Point2; 3]> {
        let mut tris = Vec::with_capacity(self.quads.len() * 2);
        for quad in &self.quads {
            let [v0, v1, v2, v3] = quad.vertices;
            tris.push([v0, v1, v2]);
            tris.push([v0, v2, v3]);
        }
        tris
    }
}
