//! The terrain build: three noise fields, smoothing, blending, meshing, and
//! the hand-off to a mesh-section consumer.

use std::thread::{self, Scope, ScopedJoinHandle};
use std::time::Instant;

use strata_mesh::{MeshBuffers, MeshSection, MeshSectionSink, build_mesh};

use crate::combine::combine;
use crate::grid::ScalarGrid;
use crate::noise_field::{cellular_noise, fbm_noise, value_noise};
use crate::params::TerrainParameters;
use crate::seed::{NoiseStage, smooth_noise, stage_rng};
use crate::smoothing::smooth;

/// Mesh section the terrain is registered under.
pub const TERRAIN_SECTION: u32 = 0;

/// The three raw source fields of one build.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseFields {
    /// Value-noise field.
    pub perlin: ScalarGrid,
    /// Fractal field.
    pub fbm: ScalarGrid,
    /// Cellular field.
    pub voronoi: ScalarGrid,
}

/// Summary of a finished build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildStats {
    /// Vertices in the mesh.
    pub vertex_count: usize,
    /// Triangles in the mesh.
    pub triangle_count: usize,
    /// Lowest and highest combined height (before `depth`), ignoring NaN.
    pub height_range: Option<(f32, f32)>,
    /// Wall-clock build time in microseconds.
    pub elapsed_us: u64,
}

/// Output of [`TerrainPipeline::build`].
#[derive(Clone, Debug)]
pub struct TerrainBuild {
    /// The blended heightmap the mesh was built from.
    pub heightmap: ScalarGrid,
    /// The mesh.
    pub mesh: MeshBuffers,
    /// Counts and timing.
    pub stats: BuildStats,
}

fn spawn_field<'scope, 'env, F>(
    scope: &'scope Scope<'scope, 'env>,
    name: &str,
    job: F,
) -> ScopedJoinHandle<'scope, ScalarGrid>
where
    F: FnOnce() -> ScalarGrid + Send + 'scope,
{
    thread::Builder::new()
        .name(name.into())
        .spawn_scoped(scope, job)
        .expect("Failed to spawn noise field worker thread")
}

fn join_field(handle: ScopedJoinHandle<'_, ScalarGrid>) -> ScalarGrid {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}

/// Generate the three source fields, one worker thread each.
///
/// Each worker owns the grid it writes; all three are complete before this
/// returns.
pub fn generate_fields(params: &TerrainParameters) -> NoiseFields {
    let noise = smooth_noise(params.seed);
    let (width, height) = (params.width, params.height);

    thread::scope(|s| {
        let perlin = spawn_field(s, "noise-perlin", || {
            value_noise(&noise, width, height, params.scale)
        });
        let fbm = spawn_field(s, "noise-fbm", || {
            fbm_noise(
                &noise,
                width,
                height,
                params.scale,
                params.fbm_octaves,
                params.fbm_persistence,
            )
        });
        let voronoi = spawn_field(s, "noise-voronoi", || {
            let mut rng = stage_rng(params.seed, NoiseStage::Cellular);
            cellular_noise(&mut rng, width, height, params.voronoi_num_sites)
        });

        NoiseFields {
            perlin: join_field(perlin),
            fbm: join_field(fbm),
            voronoi: join_field(voronoi),
        }
    })
}

/// Runs terrain builds for one parameter set.
#[derive(Clone, Debug)]
pub struct TerrainPipeline {
    params: TerrainParameters,
}

impl TerrainPipeline {
    /// Create a pipeline. Parameters are taken as-is.
    pub fn new(params: TerrainParameters) -> Self {
        Self { params }
    }

    /// The parameters every build of this pipeline uses.
    pub fn params(&self) -> &TerrainParameters {
        &self.params
    }

    fn warn_degenerate(&self) {
        let p = &self.params;
        if !(p.scale.is_finite() && p.scale > 0.0) {
            tracing::warn!("Terrain scale {} is not positive; noise samples degrade", p.scale);
        }
        if !p.has_cells() {
            tracing::warn!("Terrain grid {}x{} has no cells to triangulate", p.width, p.height);
        }
    }

    /// Blend the smoothed source fields into a heightmap.
    pub fn heightmap(&self) -> ScalarGrid {
        let p = &self.params;
        let fields = generate_fields(p);
        tracing::debug!("Generated noise fields for seed {}", p.seed);

        let perlin = smooth(fields.perlin, p.smoothing_iterations);
        let fbm = smooth(fields.fbm, p.smoothing_iterations);
        let voronoi = smooth(fields.voronoi, p.smoothing_iterations);
        tracing::debug!("Smoothed fields with {} passes", p.smoothing_iterations);

        combine(&perlin, &fbm, &voronoi, p.weights)
    }

    /// Run the whole pipeline and return the heightmap and mesh.
    pub fn build(&self) -> TerrainBuild {
        let start = Instant::now();
        self.warn_degenerate();

        let heightmap = self.heightmap();
        let mesh = build_mesh(&heightmap, self.params.scale, self.params.depth);

        let stats = BuildStats {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            height_range: heightmap.min_max(),
            elapsed_us: start.elapsed().as_micros() as u64,
        };
        tracing::info!(
            "Built {}x{} terrain: {} vertices, {} triangles in {} us",
            self.params.width,
            self.params.height,
            stats.vertex_count,
            stats.triangle_count,
            stats.elapsed_us
        );

        TerrainBuild {
            heightmap,
            mesh,
            stats,
        }
    }

    /// Hand a finished mesh to `sink` as section 0, with collision enabled,
    /// and bind the configured material if there is one.
    pub fn submit(&self, mesh: MeshBuffers, sink: &mut impl MeshSectionSink) {
        sink.create_mesh_section(TERRAIN_SECTION, MeshSection::from_buffers(mesh));
        if let Some(material) = &self.params.material {
            sink.set_material(TERRAIN_SECTION, material);
        }
    }

    /// Build the terrain and register it with `sink`.
    pub fn create_terrain(&self, sink: &mut impl MeshSectionSink) -> BuildStats {
        let TerrainBuild { mesh, stats, .. } = self.build();
        self.submit(mesh, sink);
        stats
    }
}
