//! Parameters of a single terrain build.

use crate::combine::FieldWeights;

/// Everything one build reads. Not validated: see the field docs for how
/// degenerate values behave.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainParameters {
    /// Vertex count along X. Fewer than two gives no triangles.
    pub width: usize,
    /// Vertex count along Y. Fewer than two gives no triangles.
    pub height: usize,
    /// Vertical multiplier applied to combined heights.
    pub depth: f32,
    /// Vertex spacing, and the divisor of noise sample coordinates. Zero
    /// produces `NaN` noise samples.
    pub scale: f32,
    /// Seed for the noise primitive and the cellular sites.
    pub seed: u64,
    /// Fractal octave count.
    pub fbm_octaves: u32,
    /// Fractal amplitude falloff per octave.
    pub fbm_persistence: f32,
    /// Cellular site count; zero is treated as one.
    pub voronoi_num_sites: usize,
    /// Blend weights.
    pub weights: FieldWeights,
    /// Smoothing passes applied to each field before blending.
    pub smoothing_iterations: u32,
    /// Material bound to mesh section 0, if any.
    pub material: Option<String>,
}

impl TerrainParameters {
    /// Returns `true` if the grid has at least one cell to triangulate.
    pub fn has_cells(&self) -> bool {
        self.width >= 2 && self.height >= 2
    }
}

impl Default for TerrainParameters {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            depth: 100.0,
            scale: 100.0,
            seed: 12345,
            fbm_octaves: 6,
            fbm_persistence: 0.5,
            voronoi_num_sites: 20,
            weights: FieldWeights::default(),
            smoothing_iterations: 3,
            material: None,
        }
    }
}
