//! # TFBAKE Save
//!
//! Typed scene-graph writer producing `.tfsave` documents.
//!
//! ## Design Principles
//!
//! 1. **Typed handles**: `Handle<R>` can only point at records of kind `R`
//! 2. **Append-only**: Records are never edited or removed once written
//! 3. **Parents first**: Embedding a handle before its record exists is an error
//!
//! ## Core Components
//!
//! - `SceneGraphWriter`: per-kind record tables and handle allocation
//! - `SceneContext`: writer plus shared asset pool for one construction pass
//! - `SaveDocument`: finalized tables, serialized as compact JSON
//! - `Building`, `Facility`, `FluidType`, `FluidContainer`: entity builders
//!
//! ## Example
//!
//! ```rust,ignore
//! use tfbake_assets::AssetPool;
//! use tfbake_save::{Building, DisplayText, Position, SceneContext, Transform};
//!
//! let pool = AssetPool::new();
//! let mut ctx = SceneContext::new(&pool);
//! Building::new(DisplayText::custom("Core"), Transform::at(Position::new(0.0, 0.0, 5.0)))
//!     .write(&mut ctx)?;
//! ctx.finish().write_to("assets".as_ref(), "demo")?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod building;
pub mod context;
pub mod document;
pub mod error;
pub mod facility;
pub mod fluid;
pub mod handle;
pub mod types;
pub mod writer;

pub use building::{Building, BuildingRecord};
pub use context::SceneContext;
pub use document::{KindTable, SaveDocument, SAVE_EXTENSION};
pub use error::{SaveError, SaveResult};
pub use facility::{Facility, FacilityRecord};
pub use fluid::{ContainerElement, ContainerRecord, FluidContainer, FluidType};
pub use handle::{Handle, RawHandle, Record, RecordKind};
pub use types::{
    Appearance, DisplayText, Layer, LayerDef, Layers, Position, Rotation, Scale, Transform,
};
pub use writer::SceneGraphWriter;
