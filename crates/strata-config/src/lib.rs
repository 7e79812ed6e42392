//! Configuration system for Strata.
//!
//! Terrain parameters, export destinations and logging settings persist to disk
//! as RON files. Any field can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, OutputConfig, TerrainConfig, default_config_dir};
pub use error::ConfigError;
