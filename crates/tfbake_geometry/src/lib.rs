//! # TFBAKE Geometry
//!
//! Deterministic procedural meshes for baked building assets.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Every generator is a function of its shape parameters only
//! 2. **Watertight**: Shared edges are welded, never duplicated
//! 3. **Consistent winding**: Every face is counter-clockwise seen from outside
//!
//! ## Core Components
//!
//! - `icosphere`: Recursive subdivision of a tetrahedron projected onto the unit sphere
//! - `cylinder`: Two n-gon caps joined by a staggered side wall
//! - `MeshData`: Vertex/normal/uv/face arrays plus topology queries
//!
//! ## Example
//!
//! ```rust,ignore
//! use tfbake_geometry::{cylinder, icosphere};
//!
//! let sphere = icosphere(4)?;
//! assert_eq!(sphere.face_count(), 4 * 4usize.pow(4));
//!
//! let prism = cylinder(16)?;
//! assert!(prism.uvs.is_some());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cylinder;
pub mod error;
pub mod icosphere;
pub mod mesh;
pub mod spherical;

pub use cylinder::{cylinder, DEFAULT_CYLINDER_SIDES, UV_WIDTH};
pub use error::{GeometryError, GeometryResult};
pub use icosphere::{icosphere, DEFAULT_ICOSPHERE_DEPTH, MAX_ICOSPHERE_DEPTH};
pub use mesh::MeshData;
pub use spherical::SphericalCoord;
