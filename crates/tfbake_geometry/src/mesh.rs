//! # Mesh Data
//!
//! Plain vertex arrays produced by the generators, plus the topology
//! queries used to verify them.

use std::collections::HashMap;

/// An indexed triangle mesh in double precision.
///
/// Attribute arrays are parallel: `positions[i]`, `normals[i]` and
/// `uvs[i]` (when present) all describe vertex `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<[f64; 3]>,
    /// Per-vertex unit normals.
    pub normals: Vec<[f64; 3]>,
    /// Optional texture coordinates.
    pub uvs: Option<Vec<[f64; 2]>>,
    /// Triangles as vertex index triples, counter-clockwise from outside.
    pub faces: Vec<[u32; 3]>,
}

impl MeshData {
    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Largest vertex index referenced by any face.
    #[must_use]
    pub fn max_index(&self) -> Option<u32> {
        self.faces.iter().flatten().copied().max()
    }

    /// Counts how many faces use each undirected edge.
    ///
    /// Keys are normalized so that the smaller vertex index comes first.
    #[must_use]
    pub fn edge_use_counts(&self) -> HashMap<(u32, u32), usize> {
        let mut counts = HashMap::with_capacity(self.faces.len() * 3 / 2);
        for face in &self.faces {
            for (a, b) in face_edges(*face) {
                *counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Returns true if every edge is shared by exactly two faces.
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.edge_use_counts().values().all(|&count| count == 2)
    }

    /// Returns true if every directed edge appears once and its reverse
    /// appears once, i.e. neighbouring faces agree on orientation.
    #[must_use]
    pub fn is_consistently_wound(&self) -> bool {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for face in &self.faces {
            for edge in face_edges(*face) {
                *directed.entry(edge).or_insert(0) += 1;
            }
        }
        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }

    /// Unnormalized geometric normal of a face (right-hand rule).
    #[must_use]
    pub fn face_normal(&self, face: usize) -> [f64; 3] {
        let [a, b, c] = self.faces[face].map(|i| self.positions[i as usize]);
        let u = sub(b, a);
        let v = sub(c, a);
        [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]
    }

    /// Centroid of a face.
    #[must_use]
    pub fn face_centroid(&self, face: usize) -> [f64; 3] {
        let [a, b, c] = self.faces[face].map(|i| self.positions[i as usize]);
        [
            (a[0] + b[0] + c[0]) / 3.0,
            (a[1] + b[1] + c[1]) / 3.0,
            (a[2] + b[2] + c[2]) / 3.0,
        ]
    }
}

#[inline]
fn face_edges([a, b, c]: [u32; 3]) -> [(u32, u32); 3] {
    [(a, b), (b, c), (c, a)]
}

#[inline]
fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
