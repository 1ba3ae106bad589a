//! # Galabingus Core
//!
//! The component store behind every game object: player, tile, background
//! and UI widget alike.
//!
//! ## Architecture Rules
//!
//! 1. **Append-only** - a dense index, once handed out, is never remapped
//! 2. **No holes** - touching slot `n` materializes every slot below it
//! 3. **Stable names** - an asset name keeps its group id forever
//! 4. **Kinds are isolated** - a write to one column never touches another
//!
//! ## Example
//!
//! ```rust
//! use galabingus_core::{EntityHandle, Store};
//! use galabingus_shared::Vec2;
//!
//! let mut store = Store::new();
//! let group = store.resolve("player_strip4");
//! let slot = store.add::<Vec2>(group);
//! let player = EntityHandle::new(group, slot);
//!
//! store.set(player, Vec2::new(10.0, 20.0));
//! assert_eq!(store.get::<Vec2>(player), Vec2::new(10.0, 20.0));
//! assert!(store.get_by_kind(99, player).is_err());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod global;
pub mod store;

pub use store::{
    AnimationState, Collider, Component, ComponentKind, ComponentTable, ComponentValue, Cursor,
    DenseColumn, DenseIndex, EntityHandle, GroupId, NameRegistry, SlotId, SparseIndex,
    SpriteHandle, Store, StoreError, StoreResult, StoreStats,
};
