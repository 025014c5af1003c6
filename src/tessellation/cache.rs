use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::geometry::ControlPath;

use super::{Mesh, TessellateTile};

/// Memoizes the tessellated mesh across frames.
///
/// The cached mesh is keyed on a content hash of the control points,
/// thickness, resolution override, and strategy; `get_or_build` only
/// re-runs the tessellator when that key changes.
#[derive(Debug, Default)]
pub struct MeshCache {
    key: Option<u64>,
    mesh: Mesh,
}

impl MeshCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mesh for the given path and tessellation parameters,
    /// rebuilding it only when the inputs changed since the last call.
    ///
    /// # Errors
    ///
    /// Propagates tessellation errors; a failed rebuild leaves the cache
    /// invalidated.
    pub fn get_or_build(&mut self, path: &ControlPath, op: &TessellateTile) -> Result<&Mesh> {
        let key = content_key(path, op);
        if self.key != Some(key) {
            self.key = None;
            self.mesh = op.execute(path)?;
            self.key = Some(key);
        }
        Ok(&self.mesh)
    }

    /// Drops the cached mesh, forcing a rebuild on the next call.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.mesh = Mesh::default();
    }
}

/// Hashes everything the mesh depends on. Coordinates are hashed by bit
/// pattern.
fn content_key(path: &ControlPath, op: &TessellateTile) -> u64 {
    let mut hasher = DefaultHasher::new();
    for point in path.points() {
        point.x.to_bits().hash(&mut hasher);
        point.y.to_bits().hash(&mut hasher);
    }
    op.thickness().height().to_bits().hash(&mut hasher);
    op.resolution().hash(&mut hasher);
    op.strategy().hash(&mut hasher);
    hasher.finish()
}
