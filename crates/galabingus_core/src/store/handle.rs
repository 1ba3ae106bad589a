//! # Handles
//!
//! Identifiers used to address the store:
//! - `GroupId`: an asset family, handed out by the name registry
//! - `SlotId`: the Nth entity built from that family
//! - `DenseIndex`: where a value actually lives inside one kind's column
//! - `EntityHandle`: a (group, slot) pair bound by a facade

use std::fmt;

/// Identifier of an asset/content family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct GroupId(u32);

impl GroupId {
    /// Creates a group id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the id as a table offset.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// Identifier of one entity instance inside a group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SlotId(u32);

impl SlotId {
    /// Creates a slot id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the id as a table offset.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// Offset into a kind's dense column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DenseIndex(u32);

impl DenseIndex {
    /// Creates a dense index from a column offset.
    #[inline]
    #[must_use]
    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    /// Returns the column offset.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A (group, slot) pair, the full address of one entity.
///
/// The handle is split into two parts:
/// - Upper 32 bits: group id
/// - Lower 32 bits: slot id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EntityHandle(u64);

impl EntityHandle {
    /// Creates a handle from a group and a slot.
    #[inline]
    #[must_use]
    pub const fn new(group: GroupId, slot: SlotId) -> Self {
        Self(((group.0 as u64) << 32) | (slot.0 as u64))
    }

    /// Returns the group portion of the handle.
    #[inline]
    #[must_use]
    pub const fn group(self) -> GroupId {
        GroupId((self.0 >> 32) as u32)
    }

    /// Returns the slot portion of the handle.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> SlotId {
        SlotId(self.0 as u32)
    }

    /// Returns the packed representation.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.group(), self.slot())
    }
}
