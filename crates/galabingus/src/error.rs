//! # Game Error Types
//!
//! Everything that can fail outside the store itself.

use std::path::PathBuf;

use galabingus_core::StoreError;
use thiserror::Error;

/// Errors raised while resolving asset names and sprites.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The name does not follow the `<file>_strip<frames>` convention.
    #[error("malformed asset name {name:?}: {reason}")]
    MalformedName {
        /// The offending name.
        name: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// No sprite is loaded under this name.
    #[error("missing sprite: {0}")]
    MissingSprite(String),
}

/// Errors raised while loading the game configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for [`crate::config::GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Any game-side failure.
#[derive(Error, Debug)]
pub enum GameError {
    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Asset failure.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
