//! # AssetPool - Identity-Keyed Asset Memoization
//!
//! Generated assets are memoized by a caller-declared identity string and
//! named by the content hash of their bytes.
//!
//! ## Guarantees
//!
//! - The generator for an identity runs at most once per pool.
//! - Registering the same identity again returns the stored hash.
//! - Entries are flushed in first-registration order.
//!
//! The pool is shared by reference. Registration holds one `parking_lot`
//! mutex across the generator call, so concurrent callers racing on the
//! same identity still observe a single generation.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::asset::Asset;
use crate::error::{AssetError, AssetResult};
use crate::hash::ContentHash;

/// File extension of flushed asset files.
pub const ASSET_EXTENSION: &str = "glb";

/// One generated asset.
#[derive(Debug, Clone)]
pub struct PooledAsset {
    /// Identity the asset was registered under.
    pub identity: String,
    /// Content hash of `bytes`.
    pub hash: ContentHash,
    /// Generated GLB bytes.
    pub bytes: Arc<[u8]>,
    /// Parameters the identity was derived from, if registered as an [`Asset`].
    source: Option<Asset>,
}

impl PooledAsset {
    /// Output filename (`<sha>.glb`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{ASSET_EXTENSION}", self.hash)
    }
}

/// Pool hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Registrations answered from the pool.
    pub hits: u64,
    /// Registrations that ran a generator.
    pub misses: u64,
}

#[derive(Debug, Default)]
struct PoolState {
    entries: Vec<PooledAsset>,
    by_identity: HashMap<String, usize>,
    stats: PoolStats,
}

/// Content-addressed store of generated assets.
#[derive(Debug, Default)]
pub struct AssetPool {
    state: Mutex<PoolState>,
}

impl AssetPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a built-in asset, generating it on first use.
    ///
    /// # Errors
    ///
    /// - `AssetError::IdentityConflict` if the identity is already bound to
    ///   different parameters
    /// - `AssetError::Generation` if the generator fails
    pub fn register(&self, asset: &Asset) -> AssetResult<ContentHash> {
        self.register_inner(asset.identity(), Some(*asset), || asset.generate())
    }

    /// Registers an asset produced by an arbitrary generator.
    ///
    /// `generate` runs only if `identity` has not been seen before.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Generation` wrapping the generator's failure.
    pub fn register_with<F>(&self, identity: &str, generate: F) -> AssetResult<ContentHash>
    where
        F: FnOnce() -> AssetResult<Vec<u8>>,
    {
        self.register_inner(identity.to_string(), None, generate)
    }

    fn register_inner<F>(
        &self,
        identity: String,
        source: Option<Asset>,
        generate: F,
    ) -> AssetResult<ContentHash>
    where
        F: FnOnce() -> AssetResult<Vec<u8>>,
    {
        let mut state = self.state.lock();

        if let Some(&index) = state.by_identity.get(&identity) {
            let entry = &state.entries[index];
            if let (Some(existing), Some(incoming)) = (entry.source, source) {
                if existing != incoming {
                    return Err(AssetError::IdentityConflict { identity });
                }
            }
            let hash = entry.hash;
            state.stats.hits += 1;
            debug!(%identity, %hash, "asset pool hit");
            return Ok(hash);
        }

        let bytes = generate().map_err(|source| AssetError::Generation {
            identity: identity.clone(),
            source: Box::new(source),
        })?;
        let hash = ContentHash::from_content(&bytes);
        debug!(%identity, %hash, size = bytes.len(), "asset pool miss");

        let index = state.entries.len();
        state.entries.push(PooledAsset {
            identity: identity.clone(),
            hash,
            bytes: bytes.into(),
            source,
        });
        state.by_identity.insert(identity, index);
        state.stats.misses += 1;
        Ok(hash)
    }

    /// Hash previously computed for `identity`.
    #[must_use]
    pub fn hash_of(&self, identity: &str) -> Option<ContentHash> {
        let state = self.state.lock();
        state
            .by_identity
            .get(identity)
            .map(|&index| state.entries[index].hash)
    }

    /// Number of registered identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    /// Hit/miss counters.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.state.lock().stats
    }

    /// Copy of every entry in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PooledAsset> {
        self.state.lock().entries.clone()
    }

    /// Writes every entry to `dir` as `<sha>.glb`.
    ///
    /// Identities whose bytes coincide share one file. Returns the written
    /// paths in registration order.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Io` if the directory or a file cannot be written.
    pub fn flush_to_dir(&self, dir: &Path) -> AssetResult<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|source| AssetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let entries = self.snapshot();
        let mut written = BTreeSet::new();
        let mut paths = Vec::with_capacity(entries.len());
        for entry in &entries {
            if !written.insert(entry.hash) {
                continue;
            }
            let path = dir.join(entry.file_name());
            fs::write(&path, &entry.bytes).map_err(|source| AssetError::Io {
                path: path.clone(),
                source,
            })?;
            info!(identity = %entry.identity, path = %path.display(), "wrote asset");
            paths.push(path);
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialAsset;
    use crate::mesh::MeshAsset;
    use std::cell::Cell;

    #[test]
    fn test_generator_runs_once_per_identity() {
        let pool = AssetPool::new();
        let calls = Cell::new(0);
        let generate = || {
            calls.set(calls.get() + 1);
            Ok(vec![1, 2, 3])
        };

        let a = pool.register_with("thing", generate).unwrap();
        let b = pool.register_with("thing", generate).unwrap();

        assert_eq!(a, b);
        assert_eq!(calls.get(), 1);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.stats(), PoolStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_hit_ignores_new_generator_output() {
        let pool = AssetPool::new();
        let first = pool.register_with("thing", || Ok(vec![1])).unwrap();
        let second = pool.register_with("thing", || Ok(vec![2])).unwrap();
        assert_eq!(first, second);
        assert_eq!(pool.hash_of("thing"), Some(ContentHash::from_content(&[1])));
    }

    #[test]
    fn test_generation_failure_carries_identity() {
        let pool = AssetPool::new();
        let err = pool
            .register_with("broken", || Err(AssetError::EmptyMesh))
            .unwrap_err();
        match err {
            AssetError::Generation { identity, source } => {
                assert_eq!(identity, "broken");
                assert!(matches!(*source, AssetError::EmptyMesh));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn test_identity_conflict_detected() {
        let pool = AssetPool::new();
        let unstable = Asset::Material(MaterialAsset::rough_monotone(f32::NAN, 0.0, 0.0));
        pool.register(&unstable).unwrap();
        let err = pool.register(&unstable).unwrap_err();
        assert!(matches!(err, AssetError::IdentityConflict { .. }));
    }

    #[test]
    fn test_equal_parameters_hit() {
        let pool = AssetPool::new();
        let sphere = Asset::Mesh(MeshAsset::sphere_with_depth(1));
        let a = pool.register(&sphere).unwrap();
        let b = pool.register(&sphere).unwrap();
        assert_eq!(a, b);
        assert_eq!(pool.hash_of("icosphere(depth=1)"), Some(a));
    }

    #[test]
    fn test_flush_deduplicates_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let pool = AssetPool::new();
        pool.register_with("a", || Ok(b"same".to_vec())).unwrap();
        pool.register_with("b", || Ok(b"same".to_vec())).unwrap();
        pool.register_with("c", || Ok(b"other".to_vec())).unwrap();

        let paths = pool.flush_to_dir(dir.path()).unwrap();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            let bytes = fs::read(path).unwrap();
            let stem = path.file_stem().unwrap().to_str().unwrap();
            assert_eq!(ContentHash::from_content(&bytes).to_hex(), stem);
            assert_eq!(path.extension().unwrap(), "glb");
        }
    }
}
