//! Command-line argument parsing for Strata.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Strata command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Procedural heightfield terrain generator")]
pub struct CliArgs {
    /// Vertex count along X.
    #[arg(long)]
    pub width: Option<u32>,

    /// Vertex count along Y.
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical height multiplier.
    #[arg(long)]
    pub depth: Option<f32>,

    /// Horizontal vertex spacing.
    #[arg(long)]
    pub scale: Option<f32>,

    /// Generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fractal noise octave count.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Fractal noise persistence.
    #[arg(long)]
    pub persistence: Option<f32>,

    /// Cellular noise site count.
    #[arg(long)]
    pub sites: Option<u32>,

    /// Value-noise blend weight.
    #[arg(long)]
    pub perlin_weight: Option<f32>,

    /// Fractal noise blend weight.
    #[arg(long)]
    pub fbm_weight: Option<f32>,

    /// Cellular noise blend weight.
    #[arg(long)]
    pub voronoi_weight: Option<f32>,

    /// Smoothing passes per field.
    #[arg(long)]
    pub smoothing: Option<u32>,

    /// Material bound to the mesh section.
    #[arg(long)]
    pub material: Option<String>,

    /// Write the mesh as Wavefront OBJ to this path.
    #[arg(long)]
    pub obj: Option<PathBuf>,

    /// Write a heightmap preview PNG to this path.
    #[arg(long)]
    pub heightmap_png: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let terrain = &mut self.terrain;
        if let Some(w) = args.width {
            terrain.width = w;
        }
        if let Some(h) = args.height {
            terrain.height = h;
        }
        if let Some(d) = args.depth {
            terrain.depth = d;
        }
        if let Some(s) = args.scale {
            terrain.scale = s;
        }
        if let Some(seed) = args.seed {
            terrain.seed = seed;
        }
        if let Some(o) = args.octaves {
            terrain.fbm_octaves = o;
        }
        if let Some(p) = args.persistence {
            terrain.fbm_persistence = p;
        }
        if let Some(n) = args.sites {
            terrain.voronoi_num_sites = n;
        }
        if let Some(w) = args.perlin_weight {
            terrain.perlin_weight = w;
        }
        if let Some(w) = args.fbm_weight {
            terrain.fbm_weight = w;
        }
        if let Some(w) = args.voronoi_weight {
            terrain.voronoi_weight = w;
        }
        if let Some(i) = args.smoothing {
            terrain.smoothing_iterations = i;
        }
        if let Some(ref material) = args.material {
            terrain.material = Some(material.clone());
        }
        if let Some(ref path) = args.obj {
            self.output.obj_path = Some(path.clone());
        }
        if let Some(ref path) = args.heightmap_png {
            self.output.heightmap_png = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
