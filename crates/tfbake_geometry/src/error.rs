//! # Geometry Error Types
//!
//! Rejections for shape parameters that would produce degenerate or runaway meshes.

use thiserror::Error;

/// Errors that can occur while generating a mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A cylinder needs at least a triangular cross-section.
    #[error("cylinder needs at least 3 sides, got {sides}")]
    TooFewSides {
        /// The requested side count.
        sides: u32,
    },

    /// Subdivision depth would allocate an unreasonable number of faces.
    #[error("icosphere depth {depth} exceeds the maximum of {max}")]
    IcosphereTooDeep {
        /// The requested depth.
        depth: u32,
        /// The largest accepted depth.
        max: u32,
    },
}

/// Result type for geometry generation.
pub type GeometryResult<T> = Result<T, GeometryError>;
