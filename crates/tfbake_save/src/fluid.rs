//! # Fluid Records
//!
//! Fluid types, containers and per-type container contents.
//!
//! Fluid types use one of two presets of a simplified equation of state:
//!
//! | Preset     | Viscosity | Vacuum specific volume | Critical pressure | Saturation gamma |
//! |------------|-----------|------------------------|-------------------|------------------|
//! | `gas_like` | 0.1       | 22400 / molar mass     | 1000              | 100              |
//! | `aqueous`  | 2.0       | 18 / molar mass        | 1.2               | 100              |

use serde::Serialize;

use crate::context::SceneContext;
use crate::error::SaveResult;
use crate::handle::{Handle, RawHandle, Record, RecordKind};
use crate::types::DisplayText;

/// Physical constants of one fluid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluidType {
    /// Display label.
    pub label: DisplayText,
    /// Resistance to flow.
    pub viscosity: f64,
    /// Volume per unit mass at zero pressure.
    pub vacuum_specific_volume: f64,
    /// Pressure above which the fluid stops compressing.
    pub critical_pressure: f64,
    /// Steepness of the saturation curve.
    pub saturation_gamma: f64,
}

impl FluidType {
    /// Gas preset for a given molar mass.
    #[must_use]
    pub fn gas_like(label: DisplayText, molar_mass: f64) -> Self {
        Self {
            label,
            viscosity: 0.1,
            vacuum_specific_volume: 22400.0 / molar_mass,
            critical_pressure: 1000.0,
            saturation_gamma: 100.0,
        }
    }

    /// Liquid preset for a given molar mass.
    #[must_use]
    pub fn aqueous(label: DisplayText, molar_mass: f64) -> Self {
        Self {
            label,
            viscosity: 2.0,
            vacuum_specific_volume: 18.0 / molar_mass,
            critical_pressure: 1.2,
            saturation_gamma: 100.0,
        }
    }

    /// Writes the fluid type. Capture the handle before writing containers.
    ///
    /// # Errors
    ///
    /// See [`SceneContext::write`].
    pub fn write(&self, ctx: &mut SceneContext<'_>) -> SaveResult<Handle<Self>> {
        ctx.write(self)
    }
}

impl Record for FluidType {
    const KIND: RecordKind = RecordKind::FluidType;
}

/// A fluid container as stored in the save document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerRecord {
    /// Record that owns the container.
    pub owner: RawHandle,
    /// Capacity.
    pub max_volume: f64,
    /// Pressure limit.
    pub max_pressure: f64,
}

impl Record for ContainerRecord {
    const KIND: RecordKind = RecordKind::FluidContainer;

    fn references(&self) -> Vec<RawHandle> {
        vec![self.owner]
    }
}

/// Mass of one fluid type inside a container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerElement {
    /// Containing container.
    pub parent: Handle<ContainerRecord>,
    /// Fluid type.
    pub ty: Handle<FluidType>,
    /// Mass of the fluid.
    pub mass: f64,
}

impl Record for ContainerElement {
    const KIND: RecordKind = RecordKind::ContainerElement;

    fn references(&self) -> Vec<RawHandle> {
        vec![self.parent.raw(), self.ty.raw()]
    }
}

/// A fluid container and its initial contents.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidContainer {
    /// Capacity.
    pub max_volume: f64,
    /// Pressure limit.
    pub max_pressure: f64,
    /// Initial mass per fluid type, in insertion order.
    pub element_masses: Vec<(Handle<FluidType>, f64)>,
}

impl FluidContainer {
    /// An empty container.
    #[must_use]
    pub const fn new(max_volume: f64, max_pressure: f64) -> Self {
        Self {
            max_volume,
            max_pressure,
            element_masses: Vec::new(),
        }
    }

    /// Adds initial contents.
    #[must_use]
    pub fn with_mass(mut self, ty: Handle<FluidType>, mass: f64) -> Self {
        self.element_masses.push((ty, mass));
        self
    }

    /// Writes the container owned by `owner`, then one element per
    /// non-zero mass.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::DanglingHandle` if `owner` or a fluid type has not
    /// been written yet.
    #[allow(clippy::float_cmp)]
    pub fn write(
        &self,
        ctx: &mut SceneContext<'_>,
        owner: RawHandle,
    ) -> SaveResult<Handle<ContainerRecord>> {
        let handle = ctx.write(&ContainerRecord {
            owner,
            max_volume: self.max_volume,
            max_pressure: self.max_pressure,
        })?;

        for &(ty, mass) in &self.element_masses {
            if mass == 0.0 {
                continue;
            }
            ctx.write(&ContainerElement {
                parent: handle,
                ty,
                mass,
            })?;
        }
        Ok(handle)
    }
}
