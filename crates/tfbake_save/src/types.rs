//! # Record Value Types
//!
//! Transforms, display text and render layers shared by building and
//! facility records.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tfbake_assets::{AssetPool, AssetResult, MaterialAsset, MaterialRef, MeshAsset, MeshRef};

/// A point in world or parent-local space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Position {
    /// Creates a position.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A rotation quaternion.
///
/// Serializes as `{"xyzw": [x, y, z, w]}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Vector part, x.
    pub x: f64,
    /// Vector part, y.
    pub y: f64,
    /// Vector part, z.
    pub z: f64,
    /// Scalar part.
    pub w: f64,
}

impl Rotation {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Serialize for Rotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Rotation", 1)?;
        state.serialize_field("xyzw", &[self.x, self.y, self.z, self.w])?;
        state.end()
    }
}

/// Per-axis scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scale {
    /// X factor.
    pub x: f64,
    /// Y factor.
    pub y: f64,
    /// Z factor.
    pub z: f64,
}

impl Scale {
    /// Creates a scale.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The same factor on every axis.
    #[inline]
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::splat(1.0)
    }
}

/// Position, rotation and scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Transform {
    /// Translation.
    pub position: Position,
    /// Orientation.
    pub rotation: Rotation,
    /// Scale.
    pub scale: Scale,
}

impl Transform {
    /// Translation only.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Replaces the scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Replaces the rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Text shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum DisplayText {
    /// Literal text.
    Custom(String),
}

impl DisplayText {
    /// Literal text.
    #[must_use]
    pub fn custom(text: impl Into<String>) -> Self {
        Self::Custom(text.into())
    }
}

impl Default for DisplayText {
    fn default() -> Self {
        Self::Custom(String::new())
    }
}

/// A render layer as declared by a scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Layer {
    /// Nothing is drawn.
    #[default]
    Null,
    /// A mesh drawn with a PBR material.
    Pbr {
        /// Geometry.
        mesh: MeshAsset,
        /// Surface material.
        material: MaterialAsset,
    },
}

impl Layer {
    /// A PBR layer.
    #[must_use]
    pub const fn pbr(mesh: MeshAsset, material: MaterialAsset) -> Self {
        Self::Pbr { mesh, material }
    }

    /// Registers the layer's assets and returns its record form.
    ///
    /// # Errors
    ///
    /// Propagates asset pool failures.
    pub fn resolve(&self, pool: &AssetPool) -> AssetResult<LayerDef> {
        match self {
            Self::Null => Ok(LayerDef::Null),
            Self::Pbr { mesh, material } => Ok(LayerDef::Pbr {
                mesh: mesh.use_in(pool)?,
                material: material.use_in(pool)?,
            }),
        }
    }
}

/// A render layer as stored in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum LayerDef {
    /// Nothing is drawn.
    Null,
    /// A mesh drawn with a PBR material.
    Pbr {
        /// Mesh asset reference.
        mesh: MeshRef,
        /// Material asset reference.
        material: MaterialRef,
    },
}

/// Distance-dependent render layers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Layers {
    /// Drawn when the viewer is far away.
    pub distal: Layer,
    /// Drawn when the viewer is nearby.
    pub proximal: Layer,
    /// Drawn when the viewer is inside.
    pub interior: Layer,
}

impl Layers {
    /// The same layer at every distance.
    #[must_use]
    pub const fn uniform(layer: Layer) -> Self {
        Self {
            distal: layer,
            proximal: layer,
            interior: layer,
        }
    }
}

/// Label plus resolved layers, as stored in building and facility records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appearance {
    /// Display label.
    pub label: DisplayText,
    /// Far layer.
    pub distal: LayerDef,
    /// Near layer.
    pub proximal: LayerDef,
    /// Inside layer.
    pub interior: LayerDef,
}

impl Appearance {
    /// Resolves `layers` against `pool`, registering assets distal first.
    ///
    /// # Errors
    ///
    /// Propagates asset pool failures.
    pub fn resolve(label: &DisplayText, layers: &Layers, pool: &AssetPool) -> AssetResult<Self> {
        Ok(Self {
            label: label.clone(),
            distal: layers.distal.resolve(pool)?,
            proximal: layers.proximal.resolve(pool)?,
            interior: layers.interior.resolve(pool)?,
        })
    }
}
