//! # Binary glTF Container
//!
//! Writer for the subset of glTF 2.0 the pipeline emits, packed as GLB.
//!
//! ## GLB Layout
//!
//! ```text
//! GLB File:
//! ├── Header (12 bytes)
//! │   ├── "glTF" - Magic
//! │   ├── 2      - Version
//! │   └── Total length
//! ├── JSON Chunk - metadata, space-padded to 4 bytes
//! └── BIN Chunk  - buffer 0, zero-padded to 4 bytes (omitted when empty)
//! ```

use serde::Serialize;

use crate::error::AssetResult;

/// GLB magic number.
const GLB_MAGIC: [u8; 4] = *b"glTF";

/// GLB container version.
const GLB_VERSION: u32 = 2;

/// JSON chunk type tag.
const CHUNK_JSON: [u8; 4] = *b"JSON";

/// BIN chunk type tag.
const CHUNK_BIN: [u8; 4] = *b"BIN\0";

/// `bufferView.target` for vertex attributes.
pub const TARGET_ARRAY_BUFFER: u32 = 34962;

/// `bufferView.target` for indices.
pub const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;

/// `accessor.componentType` for 16-bit unsigned integers.
pub const COMPONENT_UNSIGNED_SHORT: u32 = 5123;

/// `accessor.componentType` for 32-bit floats.
pub const COMPONENT_FLOAT: u32 = 5126;

/// Top-level glTF document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gltf {
    /// Asset metadata (`version` is always `"2.0"`).
    pub asset: GltfAsset,
    /// Extensions referenced anywhere in the document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions_used: Vec<&'static str>,
    /// Scenes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenes: Vec<Scene>,
    /// Nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
    /// Meshes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meshes: Vec<Mesh>,
    /// Materials.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Material>,
    /// Buffers. Only buffer 0, backed by the BIN chunk, is ever used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buffers: Vec<Buffer>,
    /// Buffer views.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buffer_views: Vec<BufferView>,
    /// Accessors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accessors: Vec<Accessor>,
}

/// The `asset` block.
#[derive(Debug, Clone, Serialize)]
pub struct GltfAsset {
    /// glTF version.
    pub version: &'static str,
}

impl Default for GltfAsset {
    fn default() -> Self {
        Self { version: "2.0" }
    }
}

/// A scene listing root nodes.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// Root node indices.
    pub nodes: Vec<u32>,
}

/// A node instancing a mesh.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Mesh index.
    pub mesh: u32,
}

/// A mesh made of primitives.
#[derive(Debug, Clone, Serialize)]
pub struct Mesh {
    /// Mesh name.
    pub name: String,
    /// Primitives.
    pub primitives: Vec<Primitive>,
}

/// A drawable primitive.
#[derive(Debug, Clone, Serialize)]
pub struct Primitive {
    /// Vertex attribute accessors.
    pub attributes: Attributes,
    /// Index accessor.
    pub indices: u32,
}

/// Vertex attribute accessor indices.
#[derive(Debug, Clone, Serialize)]
pub struct Attributes {
    /// Position accessor.
    #[serde(rename = "POSITION")]
    pub position: u32,
    /// Normal accessor.
    #[serde(rename = "NORMAL")]
    pub normal: u32,
    /// First texture coordinate set.
    #[serde(rename = "TEXCOORD_0", skip_serializing_if = "Option::is_none")]
    pub texcoord_0: Option<u32>,
}

/// A binary buffer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    /// Buffer length in bytes, excluding chunk padding.
    pub byte_length: usize,
}

/// A slice of a buffer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    /// Buffer index.
    pub buffer: u32,
    /// Offset into the buffer.
    pub byte_offset: usize,
    /// Length in bytes.
    pub byte_length: usize,
    /// Binding hint (`ARRAY_BUFFER` or `ELEMENT_ARRAY_BUFFER`).
    pub target: u32,
}

/// Typed view over a buffer view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    /// Buffer view index.
    pub buffer_view: u32,
    /// Number of elements.
    pub count: usize,
    /// Component type.
    pub component_type: u32,
    /// Element type (`SCALAR`, `VEC2`, `VEC3`).
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Per-component minimum.
    pub min: Bounds,
    /// Per-component maximum.
    pub max: Bounds,
}

/// Accessor bounds, typed to match the component type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Bounds {
    /// Bounds of a float accessor.
    Float(Vec<f32>),
    /// Bounds of an integer accessor.
    Integer(Vec<u32>),
}

/// A PBR material.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Material name.
    pub name: String,
    /// Render both faces.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub double_sided: bool,
    /// Metallic-roughness parameters.
    pub pbr_metallic_roughness: PbrMetallicRoughness,
    /// Material extensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<MaterialExtensions>,
}

/// Metallic-roughness parameter block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    /// Linear RGBA base colour.
    pub base_color_factor: [f32; 4],
    /// Metalness.
    pub metallic_factor: f32,
    /// Roughness; the glTF default of 1.0 applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness_factor: Option<f32>,
}

/// Material extension objects.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialExtensions {
    /// Transmission (glass-like) extension.
    #[serde(rename = "KHR_materials_transmission")]
    pub transmission: Transmission,
}

/// `KHR_materials_transmission` parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transmission {
    /// Fraction of light transmitted through the surface.
    pub transmission_factor: f32,
}

impl Gltf {
    /// Serializes the document and packs it with `bin` into a GLB file.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Encode` if the metadata cannot be serialized.
    pub fn to_glb(&self, bin: &[u8]) -> AssetResult<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(pack_glb(&json, bin))
    }
}

/// Packs a JSON chunk and an optional BIN chunk into a GLB byte stream.
#[must_use]
pub fn pack_glb(json: &[u8], bin: &[u8]) -> Vec<u8> {
    let json_padded = padded_len(json.len());
    let bin_padded = padded_len(bin.len());
    let mut total = 12 + 8 + json_padded;
    if !bin.is_empty() {
        total += 8 + bin_padded;
    }

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&GLB_MAGIC);
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&chunk_len(total).to_le_bytes());

    out.extend_from_slice(&chunk_len(json_padded).to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON);
    out.extend_from_slice(json);
    out.resize(out.len() + json_padded - json.len(), b' ');

    if !bin.is_empty() {
        out.extend_from_slice(&chunk_len(bin_padded).to_le_bytes());
        out.extend_from_slice(&CHUNK_BIN);
        out.extend_from_slice(bin);
        out.resize(out.len() + bin_padded - bin.len(), 0);
    }

    debug_assert_eq!(out.len(), total);
    out
}

#[inline]
const fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn chunk_len(len: usize) -> u32 {
    // 16-bit indices keep every asset far below 4 GiB.
    len as u32
}
