//! # Scene
//!
//! Owns the store and everything built on it for one running level.
//!
//! Per frame:
//! 1. Backgrounds and tiles scroll against the camera offset
//! 2. The player moves and animates
//! 3. Queued component patches are applied
//! 4. Draw calls are collected

use galabingus_core::{ComponentValue, EntityHandle, SpriteHandle, Store};
use galabingus_shared::{Rect, Vec2};
use tracing::warn;

use crate::asset::SpriteAtlas;
use crate::config::GameConfig;
use crate::entity::{Entity, Player, Tile};
use crate::error::GameResult;
use crate::events::{EventSender, GameEvent};
use crate::tile_manager::TileManager;

/// A deferred write through the raw-kind path.
///
/// Patches come from outside the typed world (scripts, debug consoles), so
/// they may name a kind that does not exist or carry the wrong value type.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentPatch {
    /// Entity to write.
    pub handle: EntityHandle,
    /// Raw component kind.
    pub kind: u8,
    /// Value to write.
    pub value: ComponentValue,
}

/// Everything a renderer needs to draw one sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    /// Sheet to draw from.
    pub sprite: SpriteHandle,
    /// Source rectangle inside the sheet.
    pub source: Rect,
    /// Top-left screen position.
    pub position: Vec2,
    /// Per-axis draw scale.
    pub scale: Vec2,
}

/// One running level.
pub struct Scene {
    store: Store,
    atlas: SpriteAtlas,
    player: Player,
    tiles: TileManager,
    events: EventSender,
    patches: Vec<ComponentPatch>,
    camera_offset: Vec2,
}

impl Scene {
    /// Builds the level: atlas, player, borders, then the background.
    ///
    /// # Errors
    ///
    /// Fails if a configured sprite name is malformed or the player, border
    /// or background asset is missing from the atlas.
    pub fn new(config: &GameConfig, events: EventSender) -> GameResult<Self> {
        let atlas = SpriteAtlas::from_config(&config.sprites)?;
        let mut store = Store::new();

        let player = Player::spawn(&mut store, &atlas, &config.player)?;
        let mut tiles = TileManager::new();
        tiles.create_borders(&mut store, &atlas, config.screen.size(), &config.border)?;
        tiles.create_background(
            &mut store,
            &atlas,
            config.screen.size(),
            &config.background,
            config.player.scale,
        )?;

        let scene = Self {
            store,
            atlas,
            player,
            tiles,
            events,
            patches: Vec::new(),
            camera_offset: Vec2::ZERO,
        };
        scene.announce(scene.player.handle(), &config.player.asset);
        for border in scene.tiles.borders() {
            scene.announce(border.handle(), &config.border.asset);
        }
        for background in scene.tiles.backgrounds() {
            scene.announce(background.handle(), &config.background.asset);
        }
        Ok(scene)
    }

    fn announce(&self, handle: EntityHandle, asset: &str) {
        self.events.send(GameEvent::EntitySpawned {
            handle,
            asset: asset.to_string(),
        });
    }

    /// Places a scrolling tile.
    ///
    /// # Errors
    ///
    /// Fails if the asset name is malformed or missing from the atlas.
    pub fn spawn_tile(&mut self, asset: &str, position: Vec2) -> GameResult<EntityHandle> {
        let handle = self
            .tiles
            .create_object(&mut self.store, &self.atlas, asset, position)?
            .handle();
        self.announce(handle, asset);
        Ok(handle)
    }

    /// Sets the player's steering direction.
    pub fn steer_player(&mut self, direction: Vec2) {
        self.player.steer(direction);
    }

    /// Sets how far the camera moves per frame.
    pub fn set_camera_offset(&mut self, offset: Vec2) {
        self.camera_offset = offset;
    }

    /// Queues a patch for the next update.
    pub fn queue_patch(&mut self, patch: ComponentPatch) {
        self.patches.push(patch);
    }

    /// Advances the level by `delta` seconds.
    pub fn update(&mut self, delta: f64) {
        self.tiles.update(&mut self.store, self.camera_offset);
        self.player.update(&mut self.store, delta);
        self.apply_patches();
    }

    /// Applies queued patches. A rejected patch keeps the old value and is
    /// reported as a [`GameEvent::StoreFault`].
    fn apply_patches(&mut self) {
        for patch in self.patches.drain(..) {
            let ComponentPatch { handle, kind, value } = patch;
            if let Err(error) = self.store.set_by_kind(kind, handle, value) {
                warn!(%handle, kind, %error, "component patch rejected");
                self.events.send(GameEvent::StoreFault { handle, kind, error });
            }
        }
    }

    /// Collects draw calls: backgrounds, borders, tiles, then the player on
    /// top.
    pub fn draw_calls(&mut self) -> Vec<DrawCall> {
        let store = &mut self.store;
        let tiles = self
            .tiles
            .backgrounds()
            .iter()
            .chain(self.tiles.borders())
            .chain(self.tiles.tiles())
            .filter(|tile| tile.is_active());

        let mut calls: Vec<DrawCall> = tiles.map(|tile| tile_draw_call(store, tile)).collect();
        let scale = self.player.scale(store);
        calls.push(DrawCall {
            sprite: self.player.sprite(store),
            source: self.player.transform(store),
            position: self.player.position(store),
            scale: Vec2::new(scale, scale),
        });
        calls
    }

    /// The store behind the level.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable access to the store.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The level's tiles.
    #[must_use]
    pub fn tiles(&self) -> &TileManager {
        &self.tiles
    }
}

fn tile_draw_call(store: &mut Store, tile: &Tile) -> DrawCall {
    DrawCall {
        sprite: tile.sprite(store),
        source: tile.transform(store),
        position: tile.position(store),
        scale: tile.scale_vector(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventBus, EventReceiver};
    use galabingus_core::{ComponentKind, StoreError};

    fn scene() -> (Scene, EventReceiver) {
        let (sender, receiver) = EventBus::create_pair(64);
        let scene = Scene::new(&GameConfig::default(), sender).unwrap();
        (scene, receiver)
    }

    #[test]
    fn test_new_announces_player_borders_and_backgrounds() {
        let (_scene, receiver) = scene();

        let spawned = receiver
            .drain()
            .into_iter()
            .filter(|event| matches!(event, GameEvent::EntitySpawned { .. }))
            .count();
        assert_eq!(spawned, 7);
    }

    #[test]
    fn test_draw_calls_cover_every_entity() {
        let (mut scene, _receiver) = scene();
        scene.spawn_tile("tile_strip26", Vec2::new(100.0, 100.0)).unwrap();

        let calls = scene.draw_calls();

        assert_eq!(calls.len(), 8);
        let player = calls[calls.len() - 1];
        assert_eq!(player.scale, Vec2::new(2.5, 2.5));
        assert_eq!(player.source, Rect::new(0, 0, 32, 32));
    }

    #[test]
    fn test_backgrounds_draw_first_and_scroll() {
        let (mut scene, _receiver) = scene();
        scene.set_camera_offset(Vec2::new(0.0, -4.0));
        scene.update(0.0);

        let calls = scene.draw_calls();
        let backgrounds = scene.tiles().backgrounds().to_vec();
        let store = scene.store_mut();
        for (call, background) in calls.iter().zip(&backgrounds) {
            assert_eq!(call.sprite, background.sprite(store));
            assert_eq!(call.position, background.position(store));
        }
        assert_eq!(calls[1].position, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_valid_patch_is_applied() {
        let (mut scene, _receiver) = scene();
        let handle = scene.player().handle();

        scene.queue_patch(ComponentPatch {
            handle,
            kind: ComponentKind::Scale.raw(),
            value: ComponentValue::Scale(4.0),
        });
        scene.update(0.0);

        assert_eq!(scene.store().peek::<f32>(handle), Some(&4.0));
    }

    #[test]
    fn test_rejected_patch_keeps_value_and_reports() {
        let (mut scene, receiver) = scene();
        receiver.drain();
        let handle = scene.player().handle();

        scene.queue_patch(ComponentPatch {
            handle,
            kind: ComponentKind::Position.raw(),
            value: ComponentValue::Scale(4.0),
        });
        scene.update(0.0);

        assert_eq!(scene.store().peek::<Vec2>(handle), Some(&Vec2::ZERO));
        assert_eq!(
            receiver.drain(),
            vec![GameEvent::StoreFault {
                handle,
                kind: ComponentKind::Position.raw(),
                error: StoreError::TypeMismatch {
                    expected: ComponentKind::Position,
                    found: ComponentKind::Scale,
                },
            }]
        );
    }

    #[test]
    fn test_missing_player_sprite_fails() {
        let mut config = GameConfig::default();
        config.sprites.retain(|sprite| sprite.name != "player_strip4");
        let (sender, _receiver) = EventBus::create_pair(8);

        assert!(Scene::new(&config, sender).is_err());
    }
}
