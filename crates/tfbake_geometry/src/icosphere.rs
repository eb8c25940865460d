//! # Icosphere
//!
//! Unit sphere built by recursively subdividing a tetrahedron.
//!
//! ## Subdivision Step
//!
//! ```text
//!          v0                      v0
//!         /  \                    /  \
//!        /    \                 m20--m01
//!       /      \       =>       / \  / \
//!      /        \              /   \/   \
//!    v2 -------- v1          v2---m12---v1
//! ```
//!
//! Every edge midpoint is computed once per level and shared by the two
//! faces on either side of the edge, so the mesh stays welded.
//!
//! ## Counts
//!
//! At depth `d`: `4 * 4^d` faces, `6 * 4^d` edges and `2 + 2 * 4^d` vertices.

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::MeshData;
use crate::spherical::SphericalCoord;

/// Subdivision depth used when a scenario does not ask for one.
pub const DEFAULT_ICOSPHERE_DEPTH: u32 = 4;

/// Deepest accepted subdivision (about four million faces).
pub const MAX_ICOSPHERE_DEPTH: u32 = 10;

/// Seed faces, counter-clockwise seen from outside.
const SEED_FACES: [[u32; 3]; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];

/// Generates a unit icosphere subdivided `depth` times.
///
/// Normals equal positions because every vertex lies on the unit sphere.
///
/// # Errors
///
/// Returns `GeometryError::IcosphereTooDeep` if `depth` exceeds
/// [`MAX_ICOSPHERE_DEPTH`].
pub fn icosphere(depth: u32) -> GeometryResult<MeshData> {
    if depth > MAX_ICOSPHERE_DEPTH {
        return Err(GeometryError::IcosphereTooDeep {
            depth,
            max: MAX_ICOSPHERE_DEPTH,
        });
    }

    let mut verts = seed_vertices();
    let mut faces = SEED_FACES.to_vec();

    for _ in 0..depth {
        (verts, faces) = subdivide(&verts, &faces);
    }

    let positions: Vec<[f64; 3]> = verts.iter().map(|v| v.to_cartesian()).collect();
    Ok(MeshData {
        normals: positions.clone(),
        positions,
        uvs: None,
        faces,
    })
}

/// One pole on the +Z axis and three vertices spread 120 degrees apart
/// below it, all at the tetrahedral angle `acos(-1/3)` from the pole.
fn seed_vertices() -> Vec<SphericalCoord> {
    let lower = FRAC_PI_2 - (-1.0_f64 / 3.0).acos();
    vec![
        SphericalCoord::new(0.0, FRAC_PI_2),
        SphericalCoord::new(0.0, lower),
        SphericalCoord::new(PI * 2.0 / 3.0, lower),
        SphericalCoord::new(PI * 4.0 / 3.0, lower),
    ]
}

/// Splits every face into four.
///
/// The midpoint cache lives for exactly one level: indices from the
/// previous level must not leak into the next one.
fn subdivide(
    verts: &[SphericalCoord],
    faces: &[[u32; 3]],
) -> (Vec<SphericalCoord>, Vec<[u32; 3]>) {
    // Each face has 3 edges, each edge is shared by 2 faces.
    let mut new_verts = Vec::with_capacity(verts.len() + faces.len() * 3 / 2);
    new_verts.extend_from_slice(verts);
    let mut new_faces = Vec::with_capacity(faces.len() * 4);
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3);

    let mut midpoint = |a: u32, b: u32, new_verts: &mut Vec<SphericalCoord>| -> u32 {
        if let Some(&index) = midpoints.get(&(a, b)) {
            return index;
        }
        let index = new_verts.len() as u32;
        new_verts.push(verts[a as usize].midpoint(verts[b as usize]));
        midpoints.insert((a, b), index);
        midpoints.insert((b, a), index);
        index
    };

    for &[f0, f1, f2] in faces {
        let m01 = midpoint(f0, f1, &mut new_verts);
        let m12 = midpoint(f1, f2, &mut new_verts);
        let m20 = midpoint(f2, f0, &mut new_verts);

        new_faces.push([m01, m12, m20]);
        new_faces.push([f0, m01, m20]);
        new_faces.push([f1, m12, m01]);
        new_faces.push([f2, m20, m12]);
    }

    (new_verts, new_faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_tetrahedron() {
        let mesh = icosphere(0).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
    }

    #[test]
    fn test_depth_one_welds_shared_midpoints() {
        let mesh = icosphere(1).unwrap();
        // 4 original + 6 edge midpoints
        assert_eq!(mesh.vertex_count(), 10);
        assert_eq!(mesh.face_count(), 16);
    }

    #[test]
    fn test_vertex_growth_formula() {
        for depth in 0..=5 {
            let mesh = icosphere(depth).unwrap();
            let quads = 4usize.pow(depth);
            assert_eq!(mesh.face_count(), 4 * quads, "depth {depth}");
            assert_eq!(mesh.vertex_count(), 2 + 2 * quads, "depth {depth}");
        }
    }

    #[test]
    fn test_normals_equal_positions() {
        let mesh = icosphere(2).unwrap();
        assert_eq!(mesh.normals, mesh.positions);
    }

    #[test]
    fn test_rejects_excessive_depth() {
        assert_eq!(
            icosphere(MAX_ICOSPHERE_DEPTH + 1),
            Err(GeometryError::IcosphereTooDeep {
                depth: MAX_ICOSPHERE_DEPTH + 1,
                max: MAX_ICOSPHERE_DEPTH,
            })
        );
    }
}
