//! # Process-Wide Store
//!
//! One [`Store`] shared by the whole process, for call sites that cannot be
//! handed a store explicitly.
//!
//! The lock is a `parking_lot::Mutex` and is NOT reentrant: calling
//! [`with_store`] from inside a [`with_store`] closure deadlocks. Use
//! [`try_with_store`] where nesting is possible.

use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::store::{Store, StoreError, StoreResult};

static GLOBAL_STORE: OnceLock<Mutex<Store>> = OnceLock::new();

/// Returns the process-wide store, creating it on first use.
pub fn global() -> &'static Mutex<Store> {
    GLOBAL_STORE.get_or_init(|| Mutex::new(Store::new()))
}

/// Runs `f` with exclusive access to the process-wide store.
///
/// Blocks while another thread holds the store.
pub fn with_store<R>(f: impl FnOnce(&mut Store) -> R) -> R {
    let mut store = global().lock();
    f(&mut store)
}

/// Runs `f` with exclusive access to the process-wide store, without blocking.
///
/// # Errors
///
/// Returns [`StoreError::StoreBusy`] if the store is already locked,
/// including by the calling thread.
pub fn try_with_store<R>(f: impl FnOnce(&mut Store) -> R) -> StoreResult<R> {
    let mut store = global().try_lock().ok_or(StoreError::StoreBusy)?;
    Ok(f(&mut store))
}
