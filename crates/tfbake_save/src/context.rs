//! # SceneContext
//!
//! State threaded through every builder call of one construction pass:
//! the pass's own writer plus the asset pool shared across the run.

use tfbake_assets::AssetPool;

use crate::document::SaveDocument;
use crate::error::SaveResult;
use crate::handle::{Handle, Record};
use crate::types::{Appearance, DisplayText, Layers};
use crate::writer::SceneGraphWriter;

/// Construction-pass context.
#[derive(Debug)]
pub struct SceneContext<'p> {
    writer: SceneGraphWriter,
    pool: &'p AssetPool,
}

impl<'p> SceneContext<'p> {
    /// Starts a pass that registers assets in `pool`.
    #[must_use]
    pub fn new(pool: &'p AssetPool) -> Self {
        Self {
            writer: SceneGraphWriter::new(),
            pool,
        }
    }

    /// The shared asset pool.
    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &'p AssetPool {
        self.pool
    }

    /// Records written so far.
    #[inline]
    #[must_use]
    pub const fn writer(&self) -> &SceneGraphWriter {
        &self.writer
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// See [`SceneGraphWriter::write`].
    pub fn write<R: Record>(&mut self, record: &R) -> SaveResult<Handle<R>> {
        self.writer.write(record)
    }

    /// Resolves layers against the pool.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Asset` if registration fails.
    pub fn appearance(&self, label: &DisplayText, layers: &Layers) -> SaveResult<Appearance> {
        Ok(Appearance::resolve(label, layers, self.pool)?)
    }

    /// Ends the pass.
    #[must_use]
    pub fn finish(self) -> SaveDocument {
        self.writer.into_document()
    }
}
