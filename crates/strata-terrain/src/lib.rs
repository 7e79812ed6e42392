//! Procedural heightfield terrain: value, fractal and cellular noise fields,
//! smoothing, weighted blending, and the pipeline that turns the blend into a mesh.

mod combine;
mod grid;
mod noise_field;
mod params;
mod pipeline;
mod smoothing;

pub mod debug_viz;
pub mod seed;

pub use combine::{FieldWeights, combine};
pub use grid::ScalarGrid;
pub use noise_field::{
    cellular_noise, cellular_noise_from_sites, fbm_noise, generate_sites, value_noise,
};
pub use params::TerrainParameters;
pub use pipeline::{
    BuildStats, NoiseFields, TERRAIN_SECTION, TerrainBuild, TerrainPipeline, generate_fields,
};
pub use smoothing::{smooth, smooth_once};
