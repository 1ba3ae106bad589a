//! # Store Error Types
//!
//! All errors the store can report. Growth itself never fails: every failure
//! here is caught before any state is touched.

use thiserror::Error;

use super::handle::GroupId;
use super::kind::ComponentKind;

/// Errors that can occur when addressing the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A raw kind value does not name any component kind.
    #[error("invalid component kind: {0}")]
    InvalidKind(u8),

    /// A value's type disagrees with the column it was written to.
    #[error("type mismatch: {expected} column cannot hold a {found} value")]
    TypeMismatch {
        /// Kind of the targeted column.
        expected: ComponentKind,
        /// Kind the supplied value belongs to.
        found: ComponentKind,
    },

    /// A cursor accessor was called before any group was selected.
    #[error("no group selected")]
    NoGroupSelected,

    /// The cursor moved away from the group a caller depended on.
    #[error("cursor desync: expected {expected} selected, found {selected:?}")]
    CursorDesync {
        /// Group the caller selected.
        expected: GroupId,
        /// Group actually selected afterwards.
        selected: Option<GroupId>,
    },

    /// The process-wide store is already locked.
    #[error("store is busy")]
    StoreBusy,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
