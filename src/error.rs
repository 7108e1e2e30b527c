//! Error types for sniffdef.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for sniffdef operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Registry, binder or emitter failure
    #[error(transparent)]
    Core(#[from] sniffdef_core::Error),

    /// Run configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Layout file could not be read
    #[error("Failed to read layout file {}: {source}", path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the TOML run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`GenerationConfig`](crate::config::GenerationConfig)
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
