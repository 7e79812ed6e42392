//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";
const APP_NAME: &str = "strata";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation parameters.
    pub terrain: TerrainConfig,
    /// Where generated artifacts are written.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain generation parameters, one build's worth.
///
/// Nothing here is validated: degenerate values (zero scale, a single row of
/// vertices, zero Voronoi sites) produce degenerate terrain, not errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Vertex count along X.
    pub width: u32,
    /// Vertex count along Y.
    pub height: u32,
    /// Vertical multiplier applied to combined heights.
    pub depth: f32,
    /// Distance between adjacent vertices; also divides noise coordinates.
    pub scale: f32,
    /// Seed for every random and noise source in a build.
    pub seed: u64,
    /// Octave count of the fractal field.
    pub fbm_octaves: u32,
    /// Amplitude falloff between fractal octaves.
    pub fbm_persistence: f32,
    /// Number of cellular noise sites.
    pub voronoi_num_sites: u32,
    /// Blend weight of the value-noise field.
    pub perlin_weight: f32,
    /// Blend weight of the fractal field.
    pub fbm_weight: f32,
    /// Blend weight of the cellular field.
    pub voronoi_weight: f32,
    /// Smoothing passes applied to each field before blending.
    pub smoothing_iterations: u32,
    /// Material bound to the terrain mesh section, if any.
    pub material: Option<String>,
}

/// Export destinations. `None` disables the export.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Wavefront OBJ file for the generated mesh.
    pub obj_path: Option<PathBuf>,
    /// PNG preview of the combined heightmap.
    pub heightmap_png: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files (debug builds only).
    pub log_dir: Option<PathBuf>,
}

impl Default for TerrainConfig {
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
            perlin_weight: 0.4,
            fbm_weight: 0.4,
            voronoi_weight: 0.2,
            smoothing_iterations: 3,
            material: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Platform config directory for Strata, e.g. `~/.config/strata` on Linux.
///
/// Falls back to the working directory when the OS exposes no config dir.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("width: 200"));
        assert!(ron_str.contains("voronoi_num_sites: 20"));
    }

    #[test]
    fn test_default_terrain_values() {
        let terrain = TerrainConfig::default();
        assert_eq!((terrain.width, terrain.height), (200, 200));
        assert_eq!(terrain.seed, 12345);
        assert_eq!(terrain.fbm_octaves, 6);
        assert_eq!(terrain.smoothing_iterations, 3);
        let weight_sum = terrain.perlin_weight + terrain.fbm_weight + terrain.voronoi_weight;
        assert!((weight_sum - 1.0).abs() < 1e-6, "weights sum to {weight_sum}");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.terrain.material = Some("materials/grass".to_string());
        config.output.obj_path = Some(PathBuf::from("terrain.obj"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(terrain: (width: 64))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.terrain.width, 64);
        assert_eq!(config.terrain.height, 200);
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.width = 32;
        config.terrain.seed = 7;
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        match result {
            Err(ConfigError::Parse { path, .. }) => {
                assert_eq!(path, dir.path().join(CONFIG_FILE))
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be exists but cannot be read as text.
        std::fs::create_dir(dir.path().join(CONFIG_FILE)).unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }), "got {err:?}");
        assert!(err.to_string().contains(CONFIG_FILE), "message: {err}");
    }

    #[test]
    fn test_save_into_file_path_reports_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("occupied");
        std::fs::write(&not_a_dir, "").unwrap();
        match Config::default().save(&not_a_dir) {
            Err(ConfigError::Write { path, .. }) => assert_eq!(path, not_a_dir),
            other => panic!("expected write error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_dir_ends_with_app_name() {
        assert!(default_config_dir().ends_with(APP_NAME));
    }
}
