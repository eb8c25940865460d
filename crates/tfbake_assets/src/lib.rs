//! # TFBAKE Assets
//!
//! Content-addressed pool of generated glTF assets.
//!
//! ## Design Principles
//!
//! 1. **Lazy**: Assets are generated on first registration, never before
//! 2. **Memoized by identity**: A caller-declared identity string keys the pool
//! 3. **Named by content**: Files and record references use the SHA-1 of the bytes
//!
//! ## Core Components
//!
//! - `AssetPool`: identity-keyed memoization plus the final flush to disk
//! - `ContentHash`: SHA-1 digest rendered as hex
//! - `glb`: minimal binary glTF writer
//! - `MeshAsset` / `MaterialAsset`: the built-in asset variants
//!
//! ## Example
//!
//! ```rust,ignore
//! use tfbake_assets::{AssetPool, MaterialAsset, MeshAsset};
//!
//! let pool = AssetPool::new();
//! let mesh = MeshAsset::sphere().use_in(&pool)?;
//! let glass = MaterialAsset::Glass.use_in(&pool)?;
//! pool.flush_to_dir("assets".as_ref())?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod asset;
pub mod error;
pub mod glb;
pub mod hash;
pub mod material;
pub mod mesh;
pub mod pool;

pub use asset::Asset;
pub use error::{AssetError, AssetResult};
pub use hash::{ContentHash, HASH_LEN};
pub use material::{MaterialAsset, MaterialRef};
pub use mesh::{encode_mesh, MeshAsset, MeshRef, MAX_MESH_VERTICES};
pub use pool::{AssetPool, PoolStats, PooledAsset, ASSET_EXTENSION};
