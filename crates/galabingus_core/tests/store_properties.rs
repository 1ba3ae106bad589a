//! Integration tests for the store's growth and isolation guarantees.

use galabingus_core::{
    AnimationState, Collider, ComponentKind, ComponentValue, EntityHandle, GroupId, SlotId,
    SpriteHandle, Store, StoreError,
};
use galabingus_shared::{Rect, Vec2};

fn at(group: GroupId, slot: u32) -> EntityHandle {
    EntityHandle::new(group, SlotId::new(slot))
}

#[test]
fn test_resolve_is_idempotent_and_dense() {
    let mut store = Store::new();
    let names = ["player_strip4", "tile_strip1", "white_pixel_strip1", "enemy_strip8"];

    let ids: Vec<_> = names.iter().map(|name| store.resolve(name)).collect();
    assert_eq!(ids, (0..4).map(GroupId::new).collect::<Vec<_>>());

    for (name, id) in names.iter().zip(&ids) {
        assert_eq!(store.resolve(name), *id);
        assert_eq!(store.group_name(*id), Some(*name));
    }
    assert_eq!(store.registry().len(), 4);
}

#[test]
fn test_growth_allocates_every_skipped_slot() {
    let mut store = Store::new();
    let group = store.resolve("tile_strip1");

    for max in [0_u32, 3, 7] {
        assert_eq!(store.get::<Vec2>(at(group, max)), Vec2::ZERO);
        assert_eq!(
            store.slot_count(ComponentKind::Position, group),
            max as usize + 1
        );
    }

    let snapshot = store.snapshot_group::<Vec2>(group);
    assert_eq!(snapshot, vec![Vec2::ZERO; 8]);
    assert_eq!(store.stats().dense_entries[ComponentKind::Position.index()], 8);
}

#[test]
fn test_access_below_high_water_mark_does_not_grow() {
    let mut store = Store::new();
    let group = store.resolve("tile_strip1");
    store.get::<f32>(at(group, 4));
    let before = store.stats();

    store.get::<f32>(at(group, 2));
    store.set(at(group, 0), 1.5_f32);

    assert_eq!(store.stats(), before);
}

#[test]
fn test_set_then_get_touches_nothing_else() {
    let mut store = Store::new();
    let player = store.resolve("player_strip4");
    let tile = store.resolve("tile_strip1");
    for slot in 0..3 {
        store.get::<Vec2>(at(player, slot));
        store.get::<Vec2>(at(tile, slot));
    }

    store.set(at(player, 1), Vec2::new(5.0, -5.0));

    assert_eq!(store.get::<Vec2>(at(player, 1)), Vec2::new(5.0, -5.0));
    assert_eq!(store.get::<Vec2>(at(player, 0)), Vec2::ZERO);
    assert_eq!(store.get::<Vec2>(at(player, 2)), Vec2::ZERO);
    assert_eq!(store.snapshot_group::<Vec2>(tile), vec![Vec2::ZERO; 3]);
}

#[test]
fn test_out_of_order_access() {
    let mut store = Store::new();
    let group = store.resolve("enemy_strip8");

    assert_eq!(store.get::<AnimationState>(at(group, 5)), AnimationState::default());
    assert_eq!(store.get::<AnimationState>(at(group, 2)), AnimationState::default());
    assert_eq!(store.slot_count(ComponentKind::Animation, group), 6);
}

#[test]
fn test_kinds_are_isolated() {
    let mut store = Store::new();
    let group = store.resolve("player_strip4");
    let handle = at(group, 0);

    store.set(handle, Vec2::new(1.0, 2.0));

    assert_eq!(store.get::<f32>(handle), 0.0);
    assert_eq!(store.get::<Rect>(handle), Rect::EMPTY);
    assert_eq!(store.get::<SpriteHandle>(handle), SpriteHandle::NULL);
    assert_eq!(store.get::<Collider>(handle), Collider::default());
    assert_eq!(store.get::<String>(handle), String::new());
    assert_eq!(store.get::<Vec2>(handle), Vec2::new(1.0, 2.0));
}

#[test]
fn test_player_and_tile_positions_are_independent() {
    let mut store = Store::new();

    let player = store.resolve("player_strip4");
    assert_eq!(player, GroupId::new(0));
    assert_eq!(
        store.add_by_kind(ComponentKind::Position.raw(), player),
        Ok(SlotId::new(0))
    );
    store
        .set_by_kind(
            ComponentKind::Position.raw(),
            at(player, 0),
            Vec2::new(10.0, 20.0).into(),
        )
        .unwrap();

    let tile = store.resolve("tile_strip1");
    assert_eq!(tile, GroupId::new(1));
    assert_eq!(store.add::<Vec2>(tile), SlotId::new(0));

    assert_eq!(
        store.get_by_kind(ComponentKind::Position.raw(), at(player, 0)),
        Ok(ComponentValue::Position(Vec2::new(10.0, 20.0)))
    );
    assert_eq!(store.get::<Vec2>(at(tile, 0)), Vec2::ZERO);
}

#[test]
fn test_invalid_kind_leaves_state_unchanged() {
    let mut store = Store::new();
    let group = store.resolve("player_strip4");
    store.add::<Vec2>(group);
    let before = store.stats();

    assert_eq!(store.get_by_kind(99, at(group, 9)), Err(StoreError::InvalidKind(99)));
    assert_eq!(
        store.set_by_kind(99, at(group, 9), ComponentValue::Scale(1.0)),
        Err(StoreError::InvalidKind(99))
    );
    assert_eq!(store.add_by_kind(99, group), Err(StoreError::InvalidKind(99)));
    assert_eq!(store.snapshot_by_kind(99, group), Err(StoreError::InvalidKind(99)));

    assert_eq!(store.stats(), before);
    assert_eq!(store.slot_count(ComponentKind::Position, group), 1);
}

#[test]
fn test_add_after_sparse_get_appends_past_high_water_mark() {
    let mut store = Store::new();
    let group = store.resolve("tile_strip26");

    store.get::<Collider>(at(group, 3));
    let slot = store.add_with(group, Collider::on_layer(group));

    assert_eq!(slot, SlotId::new(4));
    assert!(store.get::<Collider>(at(group, 4)).enabled);
}
