//! # Cylinder
//!
//! Radius-1 prism between `z = +1` and `z = -1` with n-gon caps.
//!
//! The bottom ring is rotated by `PI / n` relative to the top ring, so the
//! side wall is a strip of `2n` triangles alternating between the rings.
//!
//! ## UV Layout
//!
//! ```text
//! u: -1      1      2                         2 + 2PI
//!    ( TOP  )( BOTTOM )[          SIDE           ]
//! ```
//!
//! - Top cap: vertex `(x, y)` maps to `(x, y)`.
//! - Bottom cap: vertex `(x, y)` maps to `(x + 1, y)`.
//! - Side wall: ring angle `a` maps to `u = a + 2`, with `v = 0` on the top
//!   ring and `v = 1` on the bottom ring.
//!
//! Finally every `u` is divided by [`UV_WIDTH`]. Shaders sample with this
//! exact layout, so the proportions must not change.

use std::f64::consts::PI;

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::MeshData;

/// Side count used when a scenario does not ask for one.
pub const DEFAULT_CYLINDER_SIDES: u32 = 16;

/// Horizontal extent of the UV atlas before normalization: `2PI + 2`.
pub const UV_WIDTH: f64 = PI * 2.0 + 2.0;

/// Generates a cylinder with `sides`-gon caps.
///
/// Vertex layout (`n = sides`):
///
/// | Range | Content |
/// |---|---|
/// | `0..n` | top cap corners |
/// | `n` | top cap center |
/// | `n+1..2n+1` | bottom cap corners |
/// | `2n+1` | bottom cap center |
/// | `2n+2..3n+2` | side wall, top ring |
/// | `3n+2..4n+2` | side wall, bottom ring |
///
/// Faces: `n` top fan triangles, `n` bottom fan triangles, `2n` side triangles.
///
/// # Errors
///
/// Returns `GeometryError::TooFewSides` if `sides < 3`.
pub fn cylinder(sides: u32) -> GeometryResult<MeshData> {
    if sides < 3 {
        return Err(GeometryError::TooFewSides { sides });
    }

    let n = sides as usize;
    let step = PI * 2.0 / f64::from(sides);
    let top_angles: Vec<f64> = (0..n).map(|k| step * k as f64).collect();
    let bottom_angles: Vec<f64> = top_angles.iter().map(|a| a + PI / f64::from(sides)).collect();

    let vertex_total = 4 * n + 2;
    let mut positions = Vec::with_capacity(vertex_total);
    let mut normals = Vec::with_capacity(vertex_total);
    let mut uvs = Vec::with_capacity(vertex_total);
    let mut faces = Vec::with_capacity(4 * n);

    // Top cap
    for &a in &top_angles {
        let (s, c) = a.sin_cos();
        positions.push([c, s, 1.0]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push([c, s]);
    }
    positions.push([0.0, 0.0, 1.0]);
    normals.push([0.0, 0.0, 1.0]);
    uvs.push([0.0, 0.0]);

    // Bottom cap
    for &a in &bottom_angles {
        let (s, c) = a.sin_cos();
        positions.push([c, s, -1.0]);
        normals.push([0.0, 0.0, -1.0]);
        uvs.push([c + 1.0, s]);
    }
    positions.push([0.0, 0.0, -1.0]);
    normals.push([0.0, 0.0, -1.0]);
    uvs.push([1.0, 0.0]);

    // Side wall
    for (angles, z, v) in [(&top_angles, 1.0, 0.0), (&bottom_angles, -1.0, 1.0)] {
        for &a in angles {
            let (s, c) = a.sin_cos();
            positions.push([c, s, z]);
            normals.push([c, s, 0.0]);
            uvs.push([a + 2.0, v]);
        }
    }

    for uv in &mut uvs {
        uv[0] /= UV_WIDTH;
    }

    let top_center = sides;
    let bottom_base = sides + 1;
    let bottom_center = bottom_base + sides;
    let side_base = 2 * (sides + 1);

    for k in 0..sides {
        let next = (k + 1) % sides;
        faces.push([k, next, top_center]);
    }
    for k in 0..sides {
        let next = (k + 1) % sides;
        faces.push([bottom_base + next, bottom_base + k, bottom_center]);
    }
    // Each top edge (k, k+1) faces bottom corner k, which sits halfway
    // between them; each bottom edge (k, k+1) faces top corner k+1.
    for k in 0..sides {
        let next = (k + 1) % sides;
        faces.push([side_base + k, side_base + sides + k, side_base + next]);
    }
    for k in 0..sides {
        let next = (k + 1) % sides;
        faces.push([
            side_base + next,
            side_base + sides + k,
            side_base + sides + next,
        ]);
    }

    Ok(MeshData {
        positions,
        normals,
        uvs: Some(uvs),
        faces,
    })
}
