//! # Record Handles
//!
//! Handles are lightweight, typed identifiers for written records:
//! - The record kind, carried in the type parameter
//! - A sequential index into that kind's table
//!
//! A handle is issued only by appending its record, so index `n` always
//! names the `n`-th record of its kind.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

/// The kinds of record a save document can hold.
///
/// Declaration order is the order tables appear in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    /// A building placed in the world.
    Building,
    /// A facility inside a building.
    Facility,
    /// A fluid type and its physical constants.
    FluidType,
    /// A fluid container owned by another record.
    FluidContainer,
    /// The mass of one fluid type inside a container.
    ContainerElement,
}

impl RecordKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Building,
        Self::Facility,
        Self::FluidType,
        Self::FluidContainer,
        Self::ContainerElement,
    ];

    /// Type tag used in the save document.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Building => "traffloat.save.Building",
            Self::Facility => "traffloat.save.Facility",
            Self::FluidType => "traffloat.save.fluid.Type",
            Self::FluidContainer => "traffloat.save.fluid.Container",
            Self::ContainerElement => "traffloat.save.fluid.ContainerElement",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for RecordKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// A record type that can be appended to a save document.
pub trait Record: Serialize {
    /// Table the record belongs to.
    const KIND: RecordKind;

    /// Handles embedded in this record.
    ///
    /// The writer rejects the record unless every referent already exists.
    fn references(&self) -> Vec<RawHandle> {
        Vec::new()
    }
}

/// Typed handle to a written record.
///
/// Serializes as the bare index.
pub struct Handle<R> {
    index: u32,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Handle<R> {
    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Position of the record in its kind table.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl<R: Record> Handle<R> {
    /// Erases the record type, keeping the kind as data.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> RawHandle {
        RawHandle {
            kind: R::KIND,
            index: self.index,
        }
    }
}

impl<R> Clone for Handle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Handle<R> {}

impl<R> PartialEq for Handle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<R> Eq for Handle<R> {}

impl<R> PartialOrd for Handle<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> Ord for Handle<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<R> Hash for Handle<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<R: Record> fmt::Debug for Handle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({} #{})", R::KIND, self.index)
    }
}

impl<R> Serialize for Handle<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index)
    }
}

/// Kind-tagged handle for references that may point at several kinds.
///
/// Serializes as `{"type": <kind tag>, "id": <index>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RawHandle {
    /// Kind of the referenced record.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Index in that kind's table.
    #[serde(rename = "id")]
    pub index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Dummy;

    impl Record for Dummy {
        const KIND: RecordKind = RecordKind::FluidType;
    }

    #[test]
    fn test_kind_order_matches_declaration() {
        let mut sorted = RecordKind::ALL;
        sorted.sort();
        assert_eq!(sorted, RecordKind::ALL);
    }

    #[test]
    fn test_handle_serializes_as_index() {
        let handle = Handle::<Dummy>::from_index(7);
        assert_eq!(serde_json::to_string(&handle).unwrap(), "7");
        assert_eq!(format!("{handle:?}"), "Handle(traffloat.save.fluid.Type #7)");
    }

    #[test]
    fn test_raw_handle_carries_tag() {
        let raw = Handle::<Dummy>::from_index(3).raw();
        assert_eq!(
            serde_json::to_string(&raw).unwrap(),
            r#"{"type":"traffloat.save.fluid.Type","id":3}"#
        );
    }
}
