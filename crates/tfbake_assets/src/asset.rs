//! # Asset Variants
//!
//! The closed set of assets the pipeline knows how to generate.

use crate::error::AssetResult;
use crate::material::MaterialAsset;
use crate::mesh::MeshAsset;

/// A generatable asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Asset {
    /// Procedural mesh.
    Mesh(MeshAsset),
    /// PBR material.
    Material(MaterialAsset),
}

impl Asset {
    /// Deduplication key. A pure function of the asset parameters.
    #[must_use]
    pub fn identity(&self) -> String {
        match self {
            Self::Mesh(mesh) => mesh.identity(),
            Self::Material(material) => material.identity(),
        }
    }

    /// Generates the asset's GLB bytes.
    ///
    /// # Errors
    ///
    /// Propagates generator and encoder failures.
    pub fn generate(&self) -> AssetResult<Vec<u8>> {
        match self {
            Self::Mesh(mesh) => mesh.generate(),
            Self::Material(material) => material.generate(),
        }
    }
}

impl From<MeshAsset> for Asset {
    fn from(mesh: MeshAsset) -> Self {
        Self::Mesh(mesh)
    }
}

impl From<MaterialAsset> for Asset {
    fn from(material: MaterialAsset) -> Self {
        Self::Material(material)
    }
}
