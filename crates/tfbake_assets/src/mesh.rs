//! # Mesh Assets
//!
//! Procedural mesh variants and their GLB encoding.
//!
//! Buffer 0 holds position, normal, optional uv and index data back to
//! back. Every section is 4-byte aligned because each float section is a
//! multiple of 4 bytes long and indices come last.

use serde::Serialize;
use tfbake_geometry::{cylinder, icosphere, MeshData, DEFAULT_CYLINDER_SIDES, DEFAULT_ICOSPHERE_DEPTH};

use crate::error::{AssetError, AssetResult};
use crate::glb::{
    Accessor, Attributes, Bounds, Buffer, BufferView, Gltf, Mesh, Node, Primitive, Scene,
    COMPONENT_FLOAT, COMPONENT_UNSIGNED_SHORT, TARGET_ARRAY_BUFFER, TARGET_ELEMENT_ARRAY_BUFFER,
};
use crate::hash::ContentHash;
use crate::pool::AssetPool;

/// Largest vertex count addressable by 16-bit indices.
pub const MAX_MESH_VERTICES: usize = u16::MAX as usize + 1;

/// A procedurally generated mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshAsset {
    /// Unit icosphere subdivided `depth` times.
    Icosphere {
        /// Subdivision depth.
        depth: u32,
    },
    /// Radius-1 cylinder from `z = -1` to `z = +1`.
    Cylinder {
        /// Number of sides of the cap polygons.
        sides: u32,
    },
}

impl MeshAsset {
    /// Icosphere at the default depth.
    #[must_use]
    pub const fn sphere() -> Self {
        Self::Icosphere {
            depth: DEFAULT_ICOSPHERE_DEPTH,
        }
    }

    /// Icosphere at a specific depth.
    #[must_use]
    pub const fn sphere_with_depth(depth: u32) -> Self {
        Self::Icosphere { depth }
    }

    /// Cylinder with the default side count.
    #[must_use]
    pub const fn cylinder() -> Self {
        Self::Cylinder {
            sides: DEFAULT_CYLINDER_SIDES,
        }
    }

    /// Deduplication key, derived from the shape parameters only.
    #[must_use]
    pub fn identity(&self) -> String {
        match self {
            Self::Icosphere { depth } => format!("icosphere(depth={depth})"),
            Self::Cylinder { sides } => format!("cylinder(sides={sides})"),
        }
    }

    /// Runs the geometry generator.
    ///
    /// # Errors
    ///
    /// Propagates `GeometryError` for rejected parameters.
    pub fn build(&self) -> AssetResult<MeshData> {
        let mesh = match *self {
            Self::Icosphere { depth } => icosphere(depth)?,
            Self::Cylinder { sides } => cylinder(sides)?,
        };
        Ok(mesh)
    }

    /// Generates the GLB bytes for this mesh.
    ///
    /// # Errors
    ///
    /// See [`MeshAsset::build`] and [`encode_mesh`].
    pub fn generate(&self) -> AssetResult<Vec<u8>> {
        encode_mesh(&self.build()?)
    }

    /// Registers the mesh in `pool` and returns a reference for save records.
    ///
    /// # Errors
    ///
    /// Propagates pool and generation failures.
    pub fn use_in(&self, pool: &AssetPool) -> AssetResult<MeshRef> {
        let sha = pool.register(&crate::Asset::Mesh(*self))?;
        Ok(MeshRef::new(sha))
    }
}

/// Reference from a save record to mesh 0, primitive 0 of an asset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MeshRef {
    /// Content hash of the GLB file.
    pub sha: ContentHash,
    /// Mesh index inside the file.
    pub mesh: u32,
    /// Primitive index inside the mesh.
    pub primitive: u32,
}

impl MeshRef {
    /// References the first mesh and primitive of an asset.
    #[must_use]
    pub const fn new(sha: ContentHash) -> Self {
        Self {
            sha,
            mesh: 0,
            primitive: 0,
        }
    }
}

/// Encodes a mesh as a self-contained GLB file.
///
/// # Errors
///
/// - `AssetError::EmptyMesh` if the mesh has no vertices or faces
/// - `AssetError::IndexOverflow` if indices do not fit in 16 bits
/// - `AssetError::Encode` if metadata serialization fails
#[allow(clippy::cast_possible_truncation)]
pub fn encode_mesh(mesh: &MeshData) -> AssetResult<Vec<u8>> {
    if mesh.positions.is_empty() || mesh.faces.is_empty() {
        return Err(AssetError::EmptyMesh);
    }
    if mesh.vertex_count() > MAX_MESH_VERTICES {
        return Err(AssetError::IndexOverflow {
            vertices: mesh.vertex_count(),
        });
    }

    let positions = to_f32_vec3(&mesh.positions);
    let normals = to_f32_vec3(&mesh.normals);
    let uvs: Option<Vec<[f32; 2]>> = mesh
        .uvs
        .as_ref()
        .map(|uvs| uvs.iter().map(|uv| uv.map(narrow)).collect());
    let indices = mesh
        .faces
        .iter()
        .flatten()
        .map(|&i| u16::try_from(i))
        .collect::<Result<Vec<u16>, _>>()
        .map_err(|_| AssetError::IndexOverflow {
            vertices: mesh.vertex_count(),
        })?;

    let mut bin: Vec<u8> = Vec::new();
    let mut buffer_views = Vec::with_capacity(4);
    let mut accessors = Vec::with_capacity(4);

    let mut push_section = |bytes: &[u8], target: u32, bin: &mut Vec<u8>| -> u32 {
        let view = buffer_views.len() as u32;
        buffer_views.push(BufferView {
            buffer: 0,
            byte_offset: bin.len(),
            byte_length: bytes.len(),
            target,
        });
        bin.extend_from_slice(bytes);
        view
    };

    let position_view = push_section(bytemuck::cast_slice(&positions), TARGET_ARRAY_BUFFER, &mut bin);
    let normal_view = push_section(bytemuck::cast_slice(&normals), TARGET_ARRAY_BUFFER, &mut bin);
    let uv_view = uvs
        .as_ref()
        .map(|uvs| push_section(bytemuck::cast_slice(uvs), TARGET_ARRAY_BUFFER, &mut bin));
    let index_view = push_section(
        bytemuck::cast_slice(&indices),
        TARGET_ELEMENT_ARRAY_BUFFER,
        &mut bin,
    );

    accessors.push(float_accessor(position_view, &positions));
    accessors.push(float_accessor(normal_view, &normals));
    if let (Some(view), Some(uvs)) = (uv_view, uvs.as_ref()) {
        accessors.push(float_accessor(view, uvs));
    }
    let (index_min, index_max) = indices
        .iter()
        .fold((u16::MAX, u16::MIN), |(lo, hi), &i| (lo.min(i), hi.max(i)));
    accessors.push(Accessor {
        buffer_view: index_view,
        count: indices.len(),
        component_type: COMPONENT_UNSIGNED_SHORT,
        kind: "SCALAR",
        min: Bounds::Integer(vec![u32::from(index_min)]),
        max: Bounds::Integer(vec![u32::from(index_max)]),
    });

    let index_accessor = accessors.len() as u32 - 1;
    let gltf = Gltf {
        scenes: vec![Scene { nodes: vec![0] }],
        nodes: vec![Node { mesh: 0 }],
        meshes: vec![Mesh {
            name: "Mesh0".to_string(),
            primitives: vec![Primitive {
                attributes: Attributes {
                    position: 0,
                    normal: 1,
                    texcoord_0: uv_view.map(|_| 2),
                },
                indices: index_accessor,
            }],
        }],
        buffers: vec![Buffer {
            byte_length: bin.len(),
        }],
        buffer_views,
        accessors,
        ..Gltf::default()
    };

    gltf.to_glb(&bin)
}

#[allow(clippy::cast_possible_truncation)]
fn narrow(v: f64) -> f32 {
    v as f32
}

fn to_f32_vec3(values: &[[f64; 3]]) -> Vec<[f32; 3]> {
    values.iter().map(|v| v.map(narrow)).collect()
}

/// Builds a FLOAT accessor with per-component bounds.
fn float_accessor<const N: usize>(view: u32, values: &[[f32; N]]) -> Accessor {
    let mut min = [f32::INFINITY; N];
    let mut max = [f32::NEG_INFINITY; N];
    for value in values {
        for (c, &v) in value.iter().enumerate() {
            min[c] = min[c].min(v);
            max[c] = max[c].max(v);
        }
    }
    Accessor {
        buffer_view: view,
        count: values.len(),
        component_type: COMPONENT_FLOAT,
        kind: if N == 2 { "VEC2" } else { "VEC3" },
        min: Bounds::Float(min.to_vec()),
        max: Bounds::Float(max.to_vec()),
    }
}
