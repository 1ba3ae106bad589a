//! # Current-Selection Cursor
//!
//! Names the group consumed by the store's slot-only convenience accessors.
//! Callers select a group immediately before each dependent call; anything
//! that selects another group in between (a callback, a nested entity)
//! silently redirects the access. Prefer explicit [`EntityHandle`]s.
//!
//! [`EntityHandle`]: super::handle::EntityHandle

use super::error::{StoreError, StoreResult};
use super::handle::GroupId;

/// The currently selected group, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    current: Option<GroupId>,
}

impl Cursor {
    /// Creates a cursor with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Selects `group`, returning the previous selection.
    pub fn select(&mut self, group: GroupId) -> Option<GroupId> {
        self.current.replace(group)
    }

    /// Restores a selection previously returned by [`Cursor::select`].
    pub fn restore(&mut self, previous: Option<GroupId>) {
        self.current = previous;
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Returns the selected group.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Option<GroupId> {
        self.current
    }

    /// Returns the selected group or fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoGroupSelected`] if nothing is selected.
    #[inline]
    pub fn require(&self) -> StoreResult<GroupId> {
        self.current.ok_or(StoreError::NoGroupSelected)
    }

    /// Checks that `expected` is still selected.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CursorDesync`] if another group (or nothing) is
    /// selected.
    pub fn verify(&self, expected: GroupId) -> StoreResult<()> {
        if self.current == Some(expected) {
            Ok(())
        } else {
            Err(StoreError::CursorDesync {
                expected,
                selected: self.current,
            })
        }
    }
}
