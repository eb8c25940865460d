//! # Save Error Types
//!
//! All errors that can occur while building or writing a save document.

use std::path::PathBuf;

use tfbake_assets::AssetError;
use thiserror::Error;

use crate::handle::RecordKind;

/// Errors that can occur in the scene-graph writer.
#[derive(Error, Debug)]
pub enum SaveError {
    /// A record embeds a handle whose referent has not been written.
    #[error("{referrer} record references {target} #{index}, but only {len} exist")]
    DanglingHandle {
        /// Kind of the record being written.
        referrer: RecordKind,
        /// Kind of the referenced record.
        target: RecordKind,
        /// Referenced index.
        index: u32,
        /// Number of records of `target` written so far.
        len: usize,
    },

    /// A kind table ran out of 32-bit handle indices.
    #[error("{kind} table is full")]
    TableFull {
        /// The full table.
        kind: RecordKind,
    },

    /// A record could not be converted to JSON.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Registering an asset failed.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Writing the save file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The file being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for save operations.
pub type SaveResult<T> = Result<T, SaveError>;
