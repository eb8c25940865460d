//! # Material Assets
//!
//! PBR materials shared across meshes. A material file is a JSON-only GLB
//! holding a single material named `Material0`.

use serde::Serialize;

use crate::error::AssetResult;
use crate::glb::{Gltf, Material, MaterialExtensions, PbrMetallicRoughness, Transmission};
use crate::hash::ContentHash;
use crate::pool::AssetPool;

/// A material definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialAsset {
    /// Transparent, double-sided, transmissive glass.
    Glass,
    /// Fully metallic surface of a single colour.
    RoughMonotone {
        /// Red channel, linear.
        r: f32,
        /// Green channel, linear.
        g: f32,
        /// Blue channel, linear.
        b: f32,
    },
}

impl MaterialAsset {
    /// Single-colour metallic material.
    #[must_use]
    pub const fn rough_monotone(r: f32, g: f32, b: f32) -> Self {
        Self::RoughMonotone { r, g, b }
    }

    /// Deduplication key, derived from the material parameters only.
    #[must_use]
    pub fn identity(&self) -> String {
        match self {
            Self::Glass => "glass".to_string(),
            Self::RoughMonotone { r, g, b } => format!("rough_monotone(rgb({r}, {g}, {b}))"),
        }
    }

    /// The glTF material definition.
    #[must_use]
    pub fn definition(&self) -> Material {
        match *self {
            Self::Glass => Material {
                name: "Material0".to_string(),
                double_sided: true,
                pbr_metallic_roughness: PbrMetallicRoughness {
                    base_color_factor: [1.0, 1.0, 1.0, 0.1],
                    metallic_factor: 0.0,
                    roughness_factor: Some(0.05),
                },
                extensions: Some(MaterialExtensions {
                    transmission: Transmission {
                        transmission_factor: 0.9,
                    },
                }),
            },
            Self::RoughMonotone { r, g, b } => Material {
                name: "Material0".to_string(),
                double_sided: false,
                pbr_metallic_roughness: PbrMetallicRoughness {
                    base_color_factor: [r, g, b, 1.0],
                    metallic_factor: 1.0,
                    roughness_factor: None,
                },
                extensions: None,
            },
        }
    }

    /// Generates the GLB bytes for this material.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Encode` if metadata serialization fails.
    pub fn generate(&self) -> AssetResult<Vec<u8>> {
        let material = self.definition();
        let extensions_used = if material.extensions.is_some() {
            vec!["KHR_materials_transmission"]
        } else {
            Vec::new()
        };
        let gltf = Gltf {
            extensions_used,
            materials: vec![material],
            ..Gltf::default()
        };
        gltf.to_glb(&[])
    }

    /// Registers the material in `pool` and returns a reference for save records.
    ///
    /// # Errors
    ///
    /// Propagates pool and generation failures.
    pub fn use_in(&self, pool: &AssetPool) -> AssetResult<MaterialRef> {
        let sha = pool.register(&crate::Asset::Material(*self))?;
        Ok(MaterialRef::new(sha))
    }
}

/// Reference from a save record to material 0 of an asset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MaterialRef {
    /// Content hash of the GLB file.
    pub sha: ContentHash,
    /// Material index inside the file.
    pub index: u32,
}

impl MaterialRef {
    /// References the first material of an asset.
    #[must_use]
    pub const fn new(sha: ContentHash) -> Self {
        Self { sha, index: 0 }
    }
}
