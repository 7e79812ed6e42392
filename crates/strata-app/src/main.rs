//! `strata`: generate a heightfield terrain mesh from `config.ron` and CLI
//! overrides, then write it out as OBJ and/or a heightmap preview PNG.
//!
//! Run with `cargo run -p strata-app -- --seed 7 --obj terrain.obj`.

mod export;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use strata_config::{CliArgs, Config, TerrainConfig, default_config_dir};
use strata_mesh::MeshSectionStore;
use strata_terrain::debug_viz::render_heightmap_debug;
use strata_terrain::{
    FieldWeights, TERRAIN_SECTION, TerrainBuild, TerrainParameters, TerrainPipeline,
};

use crate::export::{ExportError, export_obj};

/// Build parameters from the terrain section of the config.
fn terrain_params(terrain: &TerrainConfig) -> TerrainParameters {
    TerrainParameters {
        width: terrain.width as usize,
        height: terrain.height as usize,
        depth: terrain.depth,
        scale: terrain.scale,
        seed: terrain.seed,
        fbm_octaves: terrain.fbm_octaves,
        fbm_persistence: terrain.fbm_persistence,
        voronoi_num_sites: terrain.voronoi_num_sites as usize,
        weights: FieldWeights {
            perlin: terrain.perlin_weight,
            fbm: terrain.fbm_weight,
            voronoi: terrain.voronoi_weight,
        },
        smoothing_iterations: terrain.smoothing_iterations,
        material: terrain.material.clone(),
    }
}

fn run(config: &Config) -> Result<(), ExportError> {
    let pipeline = TerrainPipeline::new(terrain_params(&config.terrain));
    let TerrainBuild {
        heightmap,
        mesh,
        stats,
    } = pipeline.build();

    if let Some((lo, hi)) = stats.height_range {
        tracing::info!("Height range {lo:.3} .. {hi:.3}");
    }

    if let Some(path) = &config.output.heightmap_png {
        render_heightmap_debug(&heightmap).write_png(path)?;
        tracing::info!("Wrote heightmap preview to {}", path.display());
    }

    let mut store = MeshSectionStore::new();
    pipeline.submit(mesh, &mut store);
    let section = store
        .section(TERRAIN_SECTION)
        .ok_or(ExportError::MissingSection(TERRAIN_SECTION))?;

    if let Some(material) = store.material(TERRAIN_SECTION) {
        tracing::info!("Section {TERRAIN_SECTION} uses material {material}");
    }

    match &config.output.obj_path {
        Some(path) => export_obj(section, path)?,
        None => tracing::info!("No OBJ path configured, mesh not exported"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir: PathBuf = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    strata_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Terrain generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.terrain.width = 12;
        config.terrain.height = 9;
        config.terrain.voronoi_num_sites = 4;
        config.output.obj_path = Some(dir.join("terrain.obj"));
        config.output.heightmap_png = Some(dir.join("heightmap.png"));
        config
    }

    #[test]
    fn test_terrain_params_from_default_config() {
        let params = terrain_params(&TerrainConfig::default());
        assert_eq!(params, TerrainParameters::default());
    }

    #[test]
    fn test_terrain_params_carries_overrides() {
        let mut terrain = TerrainConfig::default();
        terrain.voronoi_num_sites = 3;
        terrain.fbm_weight = 0.9;
        terrain.material = Some("materials/rock".to_string());
        let params = terrain_params(&terrain);
        assert_eq!(params.voronoi_num_sites, 3);
        assert_eq!(params.weights.fbm, 0.9);
        assert_eq!(params.material.as_deref(), Some("materials/rock"));
    }

    #[test]
    fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        run(&config).unwrap();

        let obj = std::fs::read_to_string(dir.path().join("terrain.obj")).unwrap();
        let faces = obj.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(faces, 2 * 11 * 8);

        let png = std::fs::read(dir.path().join("heightmap.png")).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }

    #[test]
    fn test_run_reports_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.output.heightmap_png = None;
        config.output.obj_path = Some(dir.path().join("missing").join("terrain.obj"));
        assert!(matches!(run(&config), Err(ExportError::Io(_))));
    }
}
