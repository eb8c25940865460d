//! # Mesh Topology Tests
//!
//! Verifies that generated meshes are closed, welded and outward-facing.

use tfbake_geometry::{cylinder, icosphere, MeshData};

fn assert_outward(mesh: &MeshData) {
    for face in 0..mesh.face_count() {
        let n = mesh.face_normal(face);
        let c = mesh.face_centroid(face);
        let dot = n[0] * c[0] + n[1] * c[1] + n[2] * c[2];
        assert!(dot > 0.0, "face {face} points inward");
    }
}

/// Test: Every icosphere edge is shared by exactly two faces.
#[test]
fn test_icosphere_is_watertight_at_every_depth() {
    for depth in 0..=5 {
        let mesh = icosphere(depth).unwrap();
        assert!(mesh.is_watertight(), "depth {depth} has open or shared-thrice edges");
        assert!(mesh.is_consistently_wound(), "depth {depth} has flipped faces");
    }
}

/// Test: Subdivision never creates duplicate vertices.
#[test]
fn test_icosphere_has_no_coincident_vertices() {
    let mesh = icosphere(4).unwrap();
    let mut keys: Vec<[i64; 3]> = mesh
        .positions
        .iter()
        .map(|p| p.map(|c| (c * 1e6).round() as i64))
        .collect();
    keys.sort_unstable();
    let before = keys.len();
    keys.dedup();
    assert_eq!(keys.len(), before, "duplicate vertices found");
}

/// Test: All icosphere vertices lie on the unit sphere.
#[test]
fn test_icosphere_vertices_on_unit_sphere() {
    let mesh = icosphere(3).unwrap();
    for p in &mesh.positions {
        let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-9);
    }
}

/// Test: Icosphere faces wind counter-clockwise from outside.
#[test]
fn test_icosphere_faces_point_outward() {
    assert_outward(&icosphere(3).unwrap());
}

/// Test: Cylinder faces wind counter-clockwise from outside.
#[test]
fn test_cylinder_faces_point_outward() {
    assert_outward(&cylinder(3).unwrap());
    assert_outward(&cylinder(16).unwrap());
}

/// Test: Cylinder faces only reference existing vertices.
#[test]
fn test_cylinder_indices_in_range() {
    let mesh = cylinder(16).unwrap();
    let max = mesh.max_index().unwrap() as usize;
    assert_eq!(max, mesh.vertex_count() - 1);
}

/// Test: Side-wall normals are horizontal unit vectors.
#[test]
fn test_cylinder_side_normals_horizontal() {
    let n = 12usize;
    let mesh = cylinder(n as u32).unwrap();
    for normal in &mesh.normals[2 * (n + 1)..] {
        assert_eq!(normal[2], 0.0);
        let len = (normal[0] * normal[0] + normal[1] * normal[1]).sqrt();
        assert!((len - 1.0).abs() < 1e-12);
    }
}
