//! # Bake Error Types
//!
//! Top-level errors of a bake run. Lower-layer errors are wrapped whole so
//! the failing identity, record or path is never lost.

use std::path::PathBuf;

use tfbake_assets::AssetError;
use tfbake_save::SaveError;
use thiserror::Error;

/// Errors that can abort a bake run.
#[derive(Error, Debug)]
pub enum BakeError {
    /// The configuration file is malformed.
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: toml::de::Error,
    },

    /// A scenario failed while writing records.
    #[error("scenario {scenario:?} failed: {source}")]
    Scenario {
        /// Scenario name.
        scenario: String,
        /// Underlying failure.
        #[source]
        source: SaveError,
    },

    /// Writing a save file failed.
    #[error(transparent)]
    Save(#[from] SaveError),

    /// Generating or flushing assets failed.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// The configuration selects a scenario that does not exist.
    #[error("unknown scenario {name:?}")]
    UnknownScenario {
        /// The requested name.
        name: String,
    },

    /// Reading the configuration or preparing the output directory failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for bake operations.
pub type BakeResult<T> = Result<T, BakeError>;
