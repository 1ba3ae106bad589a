//! # The Store
//!
//! A lazily-growing, multi-key component store.
//!
//! ## Design
//!
//! - A [`NameRegistry`] turns asset names into group ids
//! - A [`SparseIndex`] maps `(kind, group, slot)` to a dense index
//! - A [`ComponentTable`] holds one append-only column per kind
//! - A [`Cursor`] names the group used by the slot-only accessors
//!
//! Every read or write of an unallocated `(kind, group, slot)` grows the
//! index first, so accessors never run out of range. An apparent
//! out-of-range symptom means the wrong group was selected.

mod column;
mod component;
mod cursor;
mod error;
mod handle;
mod kind;
mod registry;
mod sparse;
mod table;

pub use column::DenseColumn;
pub use component::{AnimationState, Collider, Component, ComponentValue, SpriteHandle};
pub use cursor::Cursor;
pub use error::{StoreError, StoreResult};
pub use handle::{DenseIndex, EntityHandle, GroupId, SlotId};
pub use kind::ComponentKind;
pub use registry::NameRegistry;
pub use sparse::SparseIndex;
pub use table::ComponentTable;

use galabingus_shared::{Rect, Vec2};
use tracing::warn;

/// Runs `$body` with `$T` aliased to the value type of `$kind`.
macro_rules! with_component_type {
    ($kind:expr, $T:ident => $body:expr) => {
        match $kind {
            ComponentKind::Animation => {
                type $T = AnimationState;
                $body
            }
            ComponentKind::Collider => {
                type $T = Collider;
                $body
            }
            ComponentKind::Transform => {
                type $T = Rect;
                $body
            }
            ComponentKind::Position => {
                type $T = Vec2;
                $body
            }
            ComponentKind::Sprite => {
                type $T = SpriteHandle;
                $body
            }
            ComponentKind::Scale => {
                type $T = f32;
                $body
            }
            ComponentKind::DisplayName => {
                type $T = String;
                $body
            }
        }
    };
}

/// Size of the store at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Registered group names.
    pub registered_groups: usize,
    /// Dense entries per kind, in discriminant order.
    pub dense_entries: [usize; ComponentKind::COUNT],
}

impl StoreStats {
    /// Total dense entries across every kind.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.dense_entries.iter().sum()
    }
}

/// The component store.
///
/// One `Store` is one independent simulation. The game owns one; tests build
/// as many as they like. A process-wide instance lives in
/// [`crate::global`] for callers that cannot thread a context through.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = Store::new();
/// let group = store.resolve("tile_strip1");
/// let handle = EntityHandle::new(group, store.add::<Vec2>(group));
/// store.set(handle, Vec2::new(0.0, -200.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Store {
    /// Asset name -> group id.
    registry: NameRegistry,
    /// (kind, group, slot) -> dense index.
    index: SparseIndex,
    /// One column per kind.
    table: ComponentTable,
    /// Group consumed by the slot-only accessors.
    cursor: Cursor,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Name Registry
    // =========================================================================

    /// Returns the group id of `name`, registering it if it is new.
    pub fn resolve(&mut self, name: &str) -> GroupId {
        self.registry.resolve(name)
    }

    /// Returns the group id of `name` without registering it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<GroupId> {
        self.registry.lookup(name)
    }

    /// Returns the name registered under `group`.
    #[must_use]
    pub fn group_name(&self, group: GroupId) -> Option<&str> {
        self.registry.name(group)
    }

    /// Returns the name registry.
    #[must_use]
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    // =========================================================================
    // Typed access
    // =========================================================================

    /// Resolves `handle` in `T`'s column, growing the index as needed.
    fn dense_index<T: Component>(&mut self, handle: EntityHandle) -> DenseIndex {
        self.index.resolve(
            T::KIND,
            handle.group(),
            handle.slot(),
            T::column_mut(&mut self.table),
        )
    }

    /// Reads the `T` component of `handle`.
    ///
    /// Unallocated slots (and every slot skipped below them) are created with
    /// `T::default()` first.
    pub fn get<T: Component>(&mut self, handle: EntityHandle) -> T {
        let index = self.dense_index::<T>(handle);
        T::column(&self.table)[index].clone()
    }

    /// Returns the `T` component of `handle` for in-place modification.
    pub fn get_mut<T: Component>(&mut self, handle: EntityHandle) -> &mut T {
        let index = self.dense_index::<T>(handle);
        &mut T::column_mut(&mut self.table)[index]
    }

    /// Writes the `T` component of `handle`.
    pub fn set<T: Component>(&mut self, handle: EntityHandle, value: T) {
        *self.get_mut::<T>(handle) = value;
    }

    /// Reads the `T` component of `handle` without growing anything.
    ///
    /// Returns `None` if the slot was never allocated.
    #[must_use]
    pub fn peek<T: Component>(&self, handle: EntityHandle) -> Option<&T> {
        let index = self.index.lookup(T::KIND, handle.group(), handle.slot())?;
        T::column(&self.table).get(index)
    }

    /// Appends a new default-valued `T` slot to `group` and returns its id.
    pub fn add<T: Component>(&mut self, group: GroupId) -> SlotId {
        self.add_with(group, T::default())
    }

    /// Appends a new `T` slot holding `value` to `group` and returns its id.
    pub fn add_with<T: Component>(&mut self, group: GroupId, value: T) -> SlotId {
        self.index
            .append(T::KIND, group, T::column_mut(&mut self.table), value)
    }

    /// Returns every allocated `T` value of `group`, in slot order.
    #[must_use]
    pub fn snapshot_group<T: Component>(&self, group: GroupId) -> Vec<T> {
        let column = T::column(&self.table);
        self.index
            .slots(T::KIND, group)
            .iter()
            .map(|&index| column[index].clone())
            .collect()
    }

    /// Returns the number of allocated slots of `(kind, group)`.
    #[must_use]
    pub fn slot_count(&self, kind: ComponentKind, group: GroupId) -> usize {
        self.index.slot_count(kind, group)
    }

    // =========================================================================
    // Dynamic access - raw kind values and tagged values
    // =========================================================================

    /// Reads the component of `handle` in the column named by a raw kind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKind`] for an unknown kind; nothing grows.
    pub fn get_by_kind(&mut self, kind: u8, handle: EntityHandle) -> StoreResult<ComponentValue> {
        let kind = ComponentKind::try_from(kind)?;
        Ok(with_component_type!(kind, T => self.get::<T>(handle).into_value()))
    }

    /// Writes a tagged value into the column named by a raw kind.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidKind`] for an unknown kind
    /// - [`StoreError::TypeMismatch`] if `value` belongs to another kind
    ///
    /// The store is unchanged on error.
    pub fn set_by_kind(
        &mut self,
        kind: u8,
        handle: EntityHandle,
        value: ComponentValue,
    ) -> StoreResult<()> {
        let kind = ComponentKind::try_from(kind)?;
        if value.kind() != kind {
            return Err(StoreError::TypeMismatch {
                expected: kind,
                found: value.kind(),
            });
        }
        with_component_type!(kind, T => {
            let value = T::from_value(value)?;
            self.set::<T>(handle, value);
        });
        Ok(())
    }

    /// Appends a default-valued slot to `group` in the column named by a raw kind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKind`] for an unknown kind; nothing grows.
    pub fn add_by_kind(&mut self, kind: u8, group: GroupId) -> StoreResult<SlotId> {
        let kind = ComponentKind::try_from(kind)?;
        Ok(with_component_type!(kind, T => self.add::<T>(group)))
    }

    /// Returns every allocated value of `group` in the column named by a raw kind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKind`] for an unknown kind.
    pub fn snapshot_by_kind(&self, kind: u8, group: GroupId) -> StoreResult<Vec<ComponentValue>> {
        let kind = ComponentKind::try_from(kind)?;
        Ok(with_component_type!(kind, T => self
            .snapshot_group::<T>(group)
            .into_iter()
            .map(T::into_value)
            .collect()))
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// Selects `group` for the slot-only accessors, returning the previous one.
    pub fn select_group(&mut self, group: GroupId) -> Option<GroupId> {
        self.cursor.select(group)
    }

    /// Selects the group named `name`, registering it first if it is new.
    pub fn select_named(&mut self, name: &str) -> GroupId {
        let group = self.registry.resolve(name);
        self.cursor.select(group);
        group
    }

    /// Returns the selected group.
    #[must_use]
    pub fn selected_group(&self) -> Option<GroupId> {
        self.cursor.current()
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.cursor.clear();
    }

    /// Runs `f` with `group` selected, then restores the previous selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CursorDesync`] if `f` left another group
    /// selected. Writes `f` made before switching are kept.
    pub fn with_group<R>(
        &mut self,
        group: GroupId,
        f: impl FnOnce(&mut Self) -> R,
    ) -> StoreResult<R> {
        let previous = self.cursor.select(group);
        let result = f(self);
        let check = self.cursor.verify(group);
        self.cursor.restore(previous);
        if let Err(err) = &check {
            warn!(%err, "selection changed inside a scoped group access");
        }
        check.map(|()| result)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Returns the current size of the store.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let mut dense_entries = [0; ComponentKind::COUNT];
        for kind in ComponentKind::ALL {
            dense_entries[kind.index()] = self.table.len_of(kind);
        }
        StoreStats {
            registered_groups: self.registry.len(),
            dense_entries,
        }
    }
}

/// Generates the slot-only accessor pair for each component type.
macro_rules! cursor_accessors {
    ($($ty:ty => $get:ident, $set:ident;)*) => {
        impl Store {
            $(
                #[doc = concat!("Reads the `", stringify!($ty), "` of `slot` in the selected group.")]
                ///
                /// # Errors
                ///
                /// Returns [`StoreError::NoGroupSelected`] if nothing is selected.
                pub fn $get(&mut self, slot: SlotId) -> StoreResult<$ty> {
                    let group = self.cursor.require()?;
                    Ok(self.get::<$ty>(EntityHandle::new(group, slot)))
                }

                #[doc = concat!("Writes the `", stringify!($ty), "` of `slot` in the selected group.")]
                ///
                /// # Errors
                ///
                /// Returns [`StoreError::NoGroupSelected`] if nothing is selected.
                pub fn $set(&mut self, slot: SlotId, value: $ty) -> StoreResult<()> {
                    let group = self.cursor.require()?;
                    self.set::<$ty>(EntityHandle::new(group, slot), value);
                    Ok(())
                }
            )*
        }
    };
}

cursor_accessors! {
    AnimationState => get_animation, set_animation;
    Collider => get_collider, set_collider;
    Rect => get_transform, set_transform;
    Vec2 => get_position, set_position;
    SpriteHandle => get_sprite, set_sprite;
    f32 => get_scale, set_scale;
    String => get_display_name, set_display_name;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(group: GroupId, slot: u32) -> EntityHandle {
        EntityHandle::new(group, SlotId::new(slot))
    }

    #[test]
    fn test_player_then_tile_scenario() {
        let mut store = Store::new();

        let player = store.resolve("player_strip4");
        assert_eq!(player, GroupId::new(0));
        let slot = store.add::<Vec2>(player);
        assert_eq!(slot, SlotId::new(0));
        store.set(handle(player, 0), Vec2::new(10.0, 20.0));
        assert_eq!(store.get::<Vec2>(handle(player, 0)), Vec2::new(10.0, 20.0));

        let tile = store.resolve("tile_strip1");
        assert_eq!(tile, GroupId::new(1));
        assert_eq!(store.add::<Vec2>(tile), SlotId::new(0));
        assert_eq!(store.get::<Vec2>(handle(tile, 0)), Vec2::ZERO);
        assert_eq!(store.get::<Vec2>(handle(player, 0)), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut store = Store::new();
        let group = store.resolve("player_strip4");
        let h = handle(group, 0);

        store.get_mut::<AnimationState>(h).current_frame = 3;
        assert_eq!(store.get::<AnimationState>(h).current_frame, 3);
    }

    #[test]
    fn test_peek_does_not_grow() {
        let mut store = Store::new();
        let group = store.resolve("tile_strip1");

        assert!(store.peek::<f32>(handle(group, 2)).is_none());
        assert_eq!(store.stats().total_entries(), 0);

        store.set(handle(group, 2), 4.0_f32);
        assert_eq!(store.peek::<f32>(handle(group, 2)), Some(&4.0));
        assert_eq!(store.peek::<f32>(handle(group, 0)), Some(&0.0));
    }

    #[test]
    fn test_dynamic_set_type_mismatch_leaves_store_untouched() {
        let mut store = Store::new();
        let group = store.resolve("player_strip4");
        let before = store.stats();

        let err = store
            .set_by_kind(ComponentKind::Position.raw(), handle(group, 0), ComponentValue::Scale(2.0))
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::TypeMismatch {
                expected: ComponentKind::Position,
                found: ComponentKind::Scale,
            }
        );
        assert_eq!(store.stats(), before);
    }

    #[test]
    fn test_dynamic_roundtrip() {
        let mut store = Store::new();
        let group = store.resolve("player_strip4");
        let h = handle(group, 1);

        store
            .set_by_kind(ComponentKind::DisplayName.raw(), h, "player".to_string().into())
            .unwrap();

        assert_eq!(
            store.get_by_kind(ComponentKind::DisplayName.raw(), h),
            Ok(ComponentValue::DisplayName("player".to_string()))
        );
        assert_eq!(
            store.snapshot_by_kind(ComponentKind::DisplayName.raw(), group),
            Ok(vec![
                ComponentValue::DisplayName(String::new()),
                ComponentValue::DisplayName("player".to_string()),
            ])
        );
    }

    #[test]
    fn test_add_by_kind() {
        let mut store = Store::new();
        let group = store.resolve("tile_strip26");

        assert_eq!(store.add_by_kind(ComponentKind::Collider.raw(), group), Ok(SlotId::new(0)));
        assert_eq!(store.add_by_kind(ComponentKind::Collider.raw(), group), Ok(SlotId::new(1)));
        assert_eq!(store.add_by_kind(200, group), Err(StoreError::InvalidKind(200)));
        assert_eq!(store.slot_count(ComponentKind::Collider, group), 2);
    }

    #[test]
    fn test_cursor_accessors_require_selection() {
        let mut store = Store::new();
        assert_eq!(
            store.get_position(SlotId::new(0)),
            Err(StoreError::NoGroupSelected)
        );

        let group = store.select_named("player_strip4");
        store.set_scale(SlotId::new(0), 2.5).unwrap();

        assert_eq!(store.selected_group(), Some(group));
        assert_eq!(store.get::<f32>(handle(group, 0)), 2.5);
    }

    #[test]
    fn test_select_named_registers_once() {
        let mut store = Store::new();
        let first = store.select_named("white_pixel_strip1");
        store.select_named("tile_strip26");
        let again = store.select_named("white_pixel_strip1");

        assert_eq!(first, again);
        assert_eq!(store.registry().len(), 2);
        assert_eq!(store.selected_group(), Some(first));
    }

    #[test]
    fn test_with_group_restores_selection() {
        let mut store = Store::new();
        let player = store.select_named("player_strip4");
        let tile = store.resolve("tile_strip1");

        let value = store
            .with_group(tile, |store| {
                store.set_position(SlotId::new(0), Vec2::new(1.0, 1.0))?;
                store.get_position(SlotId::new(0))
            })
            .unwrap()
            .unwrap();

        assert_eq!(value, Vec2::new(1.0, 1.0));
        assert_eq!(store.selected_group(), Some(player));
        assert_eq!(store.get::<Vec2>(handle(player, 0)), Vec2::ZERO);
    }

    #[test]
    fn test_with_group_detects_desync() {
        let mut store = Store::new();
        let player = store.resolve("player_strip4");
        let tile = store.resolve("tile_strip1");

        let result = store.with_group(player, |store| {
            store.select_group(tile);
        });

        assert_eq!(
            result,
            Err(StoreError::CursorDesync {
                expected: player,
                selected: Some(tile),
            })
        );
        assert_eq!(store.selected_group(), None);
    }
}
