//! Errors from reading and writing `config.ron`.

use std::path::PathBuf;

/// A config file or directory that could not be used, with the path involved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be rendered as RON.
    #[error("cannot serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
