use crate::geometry::{ControlPath, ThicknessProfile};
use crate::math::{Point2, Vector2};

/// Texture band boundaries in `[0, 1]` splitting the tile texture into
/// lead-in, repeating middle, and lead-out parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitBand {
    pub start: f64,
    pub end: f64,
}

impl Default for SplitBand {
    fn default() -> Self {
        Self {
            start: 0.35,
            end: 0.65,
        }
    }
}

/// The world-space framing the renderer draws in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldView {
    /// World width and height covered by the viewport.
    pub resolution: Vector2,
    /// World-space camera position.
    pub camera: Point2,
    /// Screen-to-world scale factor.
    pub scale: f64,
}

/// The raw parameter set handed to the GPU-side analytic curve evaluator.
///
/// This is the second output form next to the mesh: a fragment shader
/// re-derives the curve per pixel from the guide-point arrays. Both forms
/// are built from the same [`ControlPath`] and [`ThicknessProfile`], so
/// the analytic geometry stays consistent with the tessellated one.
///
/// Guide coordinates are pre-scaled by `2 / world_width`, the coordinate
/// convention the shader expects; everything else stays in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct TileUniforms {
    pub guide_x: Vec<f64>,
    pub guide_y: Vec<f64>,
    pub split_start: f64,
    pub split_end: f64,
    pub height_of_tile: f64,
    pub world_resolution: Vector2,
    pub camera_position: Point2,
    pub world_scale: f64,
    /// How often the middle texture band repeats along the tile.
    pub repeats: u32,
}

impl TileUniforms {
    /// Default repeat count for the middle texture band.
    pub const DEFAULT_REPEATS: u32 = 6;

    /// Builds the uniform set from the path and tile parameters.
    #[must_use]
    pub fn new(
        path: &ControlPath,
        thickness: ThicknessProfile,
        split: SplitBand,
        view: WorldView,
    ) -> Self {
        let reciprocal = 2.0 / view.resolution.x;
        let (mut guide_x, mut guide_y) = path.guide_arrays();
        for x in &mut guide_x {
            *x *= reciprocal;
        }
        for y in &mut guide_y {
            *y *= reciprocal;
        }

        Self {
            guide_x,
            guide_y,
            split_start: split.start,
            split_end: split.end,
            height_of_tile: thickness.height(),
            world_resolution: view.resolution,
            camera_position: view.camera,
            world_scale: view.scale,
            repeats: Self::DEFAULT_REPEATS,
        }
    }

    /// Overrides the texture repeat count.
    #[must_use]
    pub fn with_repeats(mut self, repeats: u32) -> Self {
        self.repeats = repeats;
        self
    }
}
