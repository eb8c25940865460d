//! # Save Document
//!
//! The finalized form of a scene graph:
//!
//! ```text
//! {"types":[{"type":"traffloat.save.Building","defs":[...]}, ...]}
//! ```
//!
//! Kinds appear in declaration order. Kinds with no records are omitted.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{SaveError, SaveResult};
use crate::handle::RecordKind;

/// File extension of save documents.
pub const SAVE_EXTENSION: &str = "tfsave";

/// All records of one kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindTable {
    /// The record kind.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Records in handle order.
    pub defs: Vec<Value>,
}

/// A complete save document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SaveDocument {
    /// Non-empty kind tables in declaration order.
    pub types: Vec<KindTable>,
}

impl SaveDocument {
    pub(crate) fn from_tables(tables: BTreeMap<RecordKind, Vec<Value>>) -> Self {
        let types = tables
            .into_iter()
            .filter(|(_, defs)| !defs.is_empty())
            .map(|(kind, defs)| KindTable { kind, defs })
            .collect();
        Self { types }
    }

    /// Records of `kind`, empty if the kind was never written.
    #[must_use]
    pub fn defs(&self, kind: RecordKind) -> &[Value] {
        self.types
            .iter()
            .find(|table| table.kind == kind)
            .map_or(&[], |table| table.defs.as_slice())
    }

    /// Kinds present in the document, in output order.
    #[must_use]
    pub fn kinds(&self) -> Vec<RecordKind> {
        self.types.iter().map(|table| table.kind).collect()
    }

    /// Compact JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Serialize` if encoding fails.
    pub fn to_json(&self) -> SaveResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Writes the document to `<dir>/<name>.tfsave`.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Io` if the file cannot be written.
    pub fn write_to(&self, dir: &Path, name: &str) -> SaveResult<PathBuf> {
        let path = dir.join(format!("{name}.{SAVE_EXTENSION}"));
        let json = self.to_json()?;
        fs::write(&path, &json).map_err(|source| SaveError::Io {
            path: path.clone(),
            source,
        })?;
        info!(
            scenario = name,
            path = %path.display(),
            records = self.types.iter().map(|t| t.defs.len()).sum::<usize>(),
            "wrote save file"
        );
        Ok(path)
    }
}
