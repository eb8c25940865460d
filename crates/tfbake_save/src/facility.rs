//! # Facility Records
//!
//! A facility is a component inside a building. Every building has exactly
//! one ambient facility plus any number of others.

use serde::Serialize;

use crate::building::BuildingRecord;
use crate::context::SceneContext;
use crate::error::SaveResult;
use crate::fluid::FluidContainer;
use crate::handle::{Handle, RawHandle, Record, RecordKind};
use crate::types::{Appearance, DisplayText, Layers, Transform};

/// A facility as stored in the save document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityRecord {
    /// Owning building.
    pub parent: Handle<BuildingRecord>,
    /// Whether this is the building's ambient facility.
    pub is_ambient: bool,
    /// Transform relative to the building.
    pub inner: Transform,
    /// Label and render layers.
    pub appearance: Appearance,
}

impl Record for FacilityRecord {
    const KIND: RecordKind = RecordKind::Facility;

    fn references(&self) -> Vec<RawHandle> {
        vec![self.parent.raw()]
    }
}

/// Declaration of a facility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facility {
    /// Transform relative to the building.
    pub inner: Transform,
    /// Display label.
    pub label: DisplayText,
    /// Render layers.
    pub layers: Layers,
    /// Fluid containers owned by the facility.
    pub containers: Vec<FluidContainer>,
}

impl Facility {
    /// An unlabelled facility with no layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: DisplayText) -> Self {
        self.label = label;
        self
    }

    /// Sets the transform relative to the building.
    #[must_use]
    pub fn with_inner(mut self, inner: Transform) -> Self {
        self.inner = inner;
        self
    }

    /// Sets the render layers.
    #[must_use]
    pub fn with_layers(mut self, layers: Layers) -> Self {
        self.layers = layers;
        self
    }

    /// Adds a fluid container.
    #[must_use]
    pub fn with_container(mut self, container: FluidContainer) -> Self {
        self.containers.push(container);
        self
    }

    /// Writes the facility under `parent`, then its containers.
    ///
    /// # Errors
    ///
    /// Propagates asset and writer failures.
    pub fn write(
        &self,
        ctx: &mut SceneContext<'_>,
        parent: Handle<BuildingRecord>,
        is_ambient: bool,
    ) -> SaveResult<Handle<FacilityRecord>> {
        let appearance = ctx.appearance(&self.label, &self.layers)?;
        let handle = ctx.write(&FacilityRecord {
            parent,
            is_ambient,
            inner: self.inner,
            appearance,
        })?;

        for container in &self.containers {
            container.write(ctx, handle.raw())?;
        }
        Ok(handle)
    }
}
