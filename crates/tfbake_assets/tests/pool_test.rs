//! Integration tests for the asset pool.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use tfbake_assets::{AssetPool, ContentHash, MaterialAsset, MeshAsset, MeshRef};

#[test]
fn test_shared_material_emits_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let pool = AssetPool::new();

    let sphere = MeshAsset::sphere_with_depth(2).use_in(&pool).unwrap();
    let cylinder = MeshAsset::cylinder().use_in(&pool).unwrap();
    let glass_for_sphere = MaterialAsset::Glass.use_in(&pool).unwrap();
    let glass_for_cylinder = MaterialAsset::Glass.use_in(&pool).unwrap();

    assert_ne!(sphere.sha, cylinder.sha);
    assert_eq!(glass_for_sphere, glass_for_cylinder);
    assert_eq!(pool.len(), 3);

    let paths = pool.flush_to_dir(dir.path()).unwrap();
    assert_eq!(paths.len(), 3);
    let glass_file = dir.path().join(format!("{}.glb", glass_for_sphere.sha));
    assert!(glass_file.exists());
}

#[test]
fn test_flushed_files_match_their_names() {
    let dir = tempfile::tempdir().unwrap();
    let pool = AssetPool::new();
    MeshAsset::sphere_with_depth(1).use_in(&pool).unwrap();
    MaterialAsset::rough_monotone(0.39, 0.85, 0.34)
        .use_in(&pool)
        .unwrap();

    for path in pool.flush_to_dir(dir.path()).unwrap() {
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"glTF");
        let stem = path.file_stem().unwrap().to_str().unwrap();
        let expected = ContentHash::from_hex(stem).unwrap();
        assert!(expected.verify(&bytes));
    }
}

#[test]
fn test_mesh_reference_serializes_with_indices() {
    let pool = AssetPool::new();
    let mesh: MeshRef = MeshAsset::sphere_with_depth(0).use_in(&pool).unwrap();
    let json = serde_json::to_value(mesh).unwrap();
    assert_eq!(json["sha"], mesh.sha.to_hex());
    assert_eq!(json["mesh"], 0);
    assert_eq!(json["primitive"], 0);
}

#[test]
fn test_concurrent_registration_generates_once() {
    let pool = AssetPool::new();
    let calls = AtomicUsize::new(0);

    let hashes: Vec<ContentHash> = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    pool.register_with("shared", || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(b"payload".to_vec())
                    })
                    .unwrap()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(hashes.iter().all(|h| *h == hashes[0]));
    assert_eq!(pool.stats().misses, 1);
    assert_eq!(pool.stats().hits, 7);
}
