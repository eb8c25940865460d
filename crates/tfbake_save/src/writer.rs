//! # SceneGraphWriter - Append-Only Record Tables
//!
//! One table per record kind. Writing a record appends it to its table and
//! returns a handle whose index is the record's position.
//!
//! ## Write Discipline
//!
//! Every handle embedded in a record must already exist. The writer checks
//! [`Record::references`] before appending and rejects dangling handles, so
//! parents are always written before children.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::document::SaveDocument;
use crate::error::{SaveError, SaveResult};
use crate::handle::{Handle, RawHandle, Record, RecordKind};

/// Typed append-only record store.
#[derive(Debug, Default)]
pub struct SceneGraphWriter {
    tables: BTreeMap<RecordKind, Vec<Value>>,
}

impl SceneGraphWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its handle.
    ///
    /// # Errors
    ///
    /// - `SaveError::DanglingHandle` if the record references an unwritten record
    /// - `SaveError::TableFull` if the kind table has exhausted `u32` indices
    /// - `SaveError::Serialize` if the record cannot be converted to JSON
    pub fn write<R: Record>(&mut self, record: &R) -> SaveResult<Handle<R>> {
        for reference in record.references() {
            self.check_reference(R::KIND, reference)?;
        }

        let value = serde_json::to_value(record)?;
        let table = self.tables.entry(R::KIND).or_default();
        let index = u32::try_from(table.len()).map_err(|_| SaveError::TableFull { kind: R::KIND })?;
        table.push(value);

        debug!(kind = R::KIND.tag(), index, "appended record");
        Ok(Handle::from_index(index))
    }

    fn check_reference(&self, referrer: RecordKind, reference: RawHandle) -> SaveResult<()> {
        let len = self.len(reference.kind);
        if (reference.index as usize) < len {
            Ok(())
        } else {
            Err(SaveError::DanglingHandle {
                referrer,
                target: reference.kind,
                index: reference.index,
                len,
            })
        }
    }

    /// Number of records written for `kind`.
    #[must_use]
    pub fn len(&self, kind: RecordKind) -> usize {
        self.tables.get(&kind).map_or(0, Vec::len)
    }

    /// Returns true if no record of any kind has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(Vec::is_empty)
    }

    /// Records written for `kind`, in handle order.
    #[must_use]
    pub fn records(&self, kind: RecordKind) -> &[Value] {
        self.tables.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Record behind `handle`.
    #[must_use]
    pub fn get<R: Record>(&self, handle: Handle<R>) -> Option<&Value> {
        self.records(R::KIND).get(handle.index() as usize)
    }

    /// Finalizes the tables into a save document.
    #[must_use]
    pub fn into_document(self) -> SaveDocument {
        SaveDocument::from_tables(self.tables)
    }
}
