//! # Asset Error Types
//!
//! All errors that can occur while generating, pooling or flushing assets.

use std::path::PathBuf;

use tfbake_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur in the asset pipeline.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Shape parameters were rejected by the generator.
    #[error("geometry generation failed: {0}")]
    Geometry(#[from] GeometryError),

    /// A mesh with no vertices or no faces cannot carry accessor bounds.
    #[error("mesh has no vertices or no faces")]
    EmptyMesh,

    /// Mesh indices are stored as 16-bit unsigned integers.
    #[error("mesh has {vertices} vertices, 16-bit indices address at most 65536")]
    IndexOverflow {
        /// Vertex count of the rejected mesh.
        vertices: usize,
    },

    /// Two different parameter sets claimed the same identity string.
    #[error("identity {identity:?} was registered with different parameters")]
    IdentityConflict {
        /// The conflicting identity.
        identity: String,
    },

    /// The generator for an identity failed.
    #[error("failed to generate asset {identity:?}")]
    Generation {
        /// Identity of the asset being generated.
        identity: String,
        /// Underlying failure.
        #[source]
        source: Box<AssetError>,
    },

    /// glTF metadata could not be serialized.
    #[error("failed to encode glTF metadata: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing an asset file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The file or directory being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
