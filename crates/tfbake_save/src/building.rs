//! # Building Records
//!
//! A building is written first, then its ambient facility, then its other
//! facilities in declaration order.

use serde::Serialize;

use crate::context::SceneContext;
use crate::error::SaveResult;
use crate::facility::Facility;
use crate::handle::{Handle, Record, RecordKind};
use crate::types::{Appearance, DisplayText, Layers, Transform};

/// A building as stored in the save document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingRecord {
    /// World transform.
    pub transform: Transform,
    /// Label and render layers.
    pub appearance: Appearance,
}

impl Record for BuildingRecord {
    const KIND: RecordKind = RecordKind::Building;
}

/// Declaration of a building and its facilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    /// World transform.
    pub transform: Transform,
    /// Display label.
    pub label: DisplayText,
    /// Render layers.
    pub layers: Layers,
    /// The building's ambient facility.
    pub ambient: Facility,
    /// Other facilities, written in order.
    pub facilities: Vec<Facility>,
}

impl Building {
    /// A building with no layers and a default ambient facility.
    #[must_use]
    pub fn new(label: DisplayText, transform: Transform) -> Self {
        Self {
            transform,
            label,
            layers: Layers::default(),
            ambient: Facility::default(),
            facilities: Vec::new(),
        }
    }

    /// Sets the render layers.
    #[must_use]
    pub fn with_layers(mut self, layers: Layers) -> Self {
        self.layers = layers;
        self
    }

    /// Replaces the ambient facility.
    #[must_use]
    pub fn with_ambient(mut self, ambient: Facility) -> Self {
        self.ambient = ambient;
        self
    }

    /// Adds a non-ambient facility.
    #[must_use]
    pub fn with_facility(mut self, facility: Facility) -> Self {
        self.facilities.push(facility);
        self
    }

    /// Writes the building and all of its facilities.
    ///
    /// # Errors
    ///
    /// Propagates asset and writer failures.
    pub fn write(&self, ctx: &mut SceneContext<'_>) -> SaveResult<Handle<BuildingRecord>> {
        let appearance = ctx.appearance(&self.label, &self.layers)?;
        let handle = ctx.write(&BuildingRecord {
            transform: self.transform,
            appearance,
        })?;

        self.ambient.write(ctx, handle, true)?;
        for facility in &self.facilities {
            facility.write(ctx, handle, false)?;
        }
        Ok(handle)
    }
}
