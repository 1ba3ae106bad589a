//! Integration tests driving a full scene through the game loop.

use galabingus::core::{ComponentKind, ComponentValue, StoreError};
use galabingus::{
    ComponentPatch, Entity, EventBus, GameConfig, GameError, GameEvent, GameLoop, Scene,
};
use galabingus_shared::{Rect, Vec2};

fn config() -> GameConfig {
    GameConfig::from_toml_str(
        r#"
        [screen]
        width = 640
        height = 480

        [player]
        speed = { x = 4.0, y = 4.0 }

        [[sprites]]
        name = "player_strip4"
        width = 128
        height = 32

        [[sprites]]
        name = "white_pixel_strip1"
        width = 1
        height = 1

        [[sprites]]
        name = "tile_strip26"
        width = 832
        height = 32

        [[sprites]]
        name = "space_only_background_strip1"
        width = 480
        height = 1440
        "#,
    )
    .unwrap()
}

#[test]
fn test_player_moves_and_tiles_scroll() {
    let config = config();
    let bus = EventBus::new(1024);
    let mut scene = Scene::new(&config, bus.sender()).unwrap();
    let tile = scene.spawn_tile("tile_strip26", Vec2::new(320.0, 0.0)).unwrap();
    scene.set_camera_offset(Vec2::new(0.0, -2.0));
    scene.steer_player(Vec2::new(1.0, 0.0));

    let mut game_loop = GameLoop::new(scene, config.frame, bus.sender());
    for _ in 0..10 {
        game_loop.step(1.0 / 60.0);
    }

    let player = game_loop.scene().player().handle();
    let store = game_loop.scene().store();
    assert_eq!(store.peek::<Vec2>(player), Some(&Vec2::new(20.0, 0.0)));
    assert_eq!(store.peek::<Vec2>(tile), Some(&Vec2::new(320.0, 20.0)));
    assert_eq!(game_loop.stats().frames_recorded, 10);
}

#[test]
fn test_groups_follow_construction_order() {
    let config = config();
    let (sender, _receiver) = EventBus::create_pair(64);
    let mut scene = Scene::new(&config, sender).unwrap();
    scene.spawn_tile("tile_strip26", Vec2::ZERO).unwrap();

    let store = scene.store();
    let names: Vec<_> = store.registry().iter().map(|(_, name)| name.to_string()).collect();
    assert_eq!(
        names,
        [
            "player_strip4",
            "white_pixel_strip1",
            "space_only_background_strip1",
            "tile_strip26",
        ]
    );
    assert_eq!(store.stats().dense_entries[ComponentKind::Sprite.index()], 8);
}

#[test]
fn test_border_draw_calls() {
    let config = config();
    let (sender, _receiver) = EventBus::create_pair(64);
    let mut scene = Scene::new(&config, sender).unwrap();

    let calls = scene.draw_calls();

    assert_eq!(calls.len(), 7);
    let borders = &calls[2..6];
    assert_eq!(borders[0].position, Vec2::new(0.0, -200.0));
    assert_eq!(borders[0].scale, Vec2::new(640.0, 200.0));
    assert_eq!(borders[1].position, Vec2::new(0.0, 480.0));
    assert_eq!(borders[0].source, Rect::new(0, 0, 1, 1));
}

#[test]
fn test_background_wraps_while_scrolling() {
    let config = config();
    let (sender, _receiver) = EventBus::create_pair(1024);
    let mut scene = Scene::new(&config, sender.clone()).unwrap();
    scene.set_camera_offset(Vec2::new(0.0, -10.0));
    let background = scene.tiles().backgrounds()[1].handle();

    let mut game_loop = GameLoop::new(scene, config.frame, sender);
    for _ in 0..50 {
        game_loop.step(1.0 / 60.0);
    }

    let store = game_loop.scene().store();
    assert_eq!(store.peek::<Vec2>(background), Some(&Vec2::new(0.0, 20.0)));
    assert_eq!(store.peek::<Rect>(background), Some(&Rect::new(0, 0, 480, 1440)));
}

#[test]
fn test_faulty_patches_do_not_stop_the_frame() {
    let config = config();
    let bus = EventBus::new(1024);
    let receiver = bus.receiver();
    let mut scene = Scene::new(&config, bus.sender()).unwrap();
    let player = scene.player().handle();

    scene.queue_patch(ComponentPatch {
        handle: player,
        kind: 99,
        value: ComponentValue::Scale(9.0),
    });
    scene.queue_patch(ComponentPatch {
        handle: player,
        kind: ComponentKind::DisplayName.raw(),
        value: ComponentValue::DisplayName("ship".to_string()),
    });
    let before = scene.store().stats();

    let mut game_loop = GameLoop::new(scene, config.frame, bus.sender());
    game_loop.step(0.0);

    let faults: Vec<_> = receiver
        .drain()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::StoreFault { error, .. } => Some(error),
            _ => None,
        })
        .collect();
    assert_eq!(faults, vec![StoreError::InvalidKind(99)]);

    let store = game_loop.scene().store();
    assert_eq!(store.stats(), before);
    assert_eq!(store.peek::<String>(player).map(String::as_str), Some("ship"));
    assert_eq!(store.peek::<f32>(player), Some(&2.5));
}

#[test]
fn test_scene_rejects_malformed_config_sprite() {
    let mut config = GameConfig::default();
    config.sprites.push(galabingus::config::SpriteConfig::new("enemy", 8, 8));
    let (sender, _receiver) = EventBus::create_pair(8);

    assert!(matches!(Scene::new(&config, sender), Err(GameError::Asset(_))));
}
