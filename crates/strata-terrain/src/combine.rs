//! Weighted blending of the three source fields.

use crate::grid::ScalarGrid;

/// Linear blend coefficients. Applied as-is: they need not sum to one and the
/// result is never clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldWeights {
    /// Weight of the value-noise field.
    pub perlin: f32,
    /// Weight of the fractal field.
    pub fbm: f32,
    /// Weight of the cellular field.
    pub voronoi: f32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            perlin: 0.4,
            fbm: 0.4,
            voronoi: 0.2,
        }
    }
}

/// `combined[x][y] = perlin[x][y]*w.perlin + fbm[x][y]*w.fbm + voronoi[x][y]*w.voronoi`.
///
/// # Panics
///
/// Panics if the three grids differ in shape.
pub fn combine(
    perlin: &ScalarGrid,
    fbm: &ScalarGrid,
    voronoi: &ScalarGrid,
    weights: FieldWeights,
) -> ScalarGrid {
    assert!(
        perlin.same_shape(fbm) && perlin.same_shape(voronoi),
        "field shapes differ: {:?} {:?} {:?}",
        perlin.dimensions(),
        fbm.dimensions(),
        voronoi.dimensions()
    );

    let (width, height) = perlin.dimensions();
    ScalarGrid::from_fn(width, height, |x, y| {
        perlin.get(x, y) * weights.perlin
            + fbm.get(x, y) * weights.fbm
            + voronoi.get(x, y) * weights.voronoi
    })
}
