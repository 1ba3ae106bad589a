//! Tiles: borders, obstacles and scenery.
//!
//! Tiles scroll with the camera. Unlike other objects they carry a
//! per-axis scale so one-pixel sheets can be stretched into walls.

use galabingus_core::{EntityHandle, SlotId, Store};
use galabingus_shared::Vec2;

use super::{Entity, GameObject};
use crate::asset::SpriteSource;
use crate::error::GameResult;

/// A tile showing one frame of its sprite sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    object: GameObject,
    frame: u32,
    scale_vector: Vec2,
    is_active: bool,
}

impl Tile {
    /// Builds a tile in `slot` showing `frame` of the sheet.
    ///
    /// # Errors
    ///
    /// As [`GameObject::spawn`].
    pub fn spawn_at(
        store: &mut Store,
        sprites: &impl SpriteSource,
        asset: &str,
        slot: SlotId,
        frame: u32,
    ) -> GameResult<Self> {
        let object = GameObject::spawn_at(store, sprites, asset, slot)?;
        Ok(Self::from_object(store, object, frame))
    }

    /// Builds a tile in a new slot showing `frame` of the sheet.
    ///
    /// # Errors
    ///
    /// As [`GameObject::spawn`].
    pub fn spawn(
        store: &mut Store,
        sprites: &impl SpriteSource,
        asset: &str,
        frame: u32,
    ) -> GameResult<Self> {
        let object = GameObject::spawn(store, sprites, asset)?;
        Ok(Self::from_object(store, object, frame))
    }

    fn from_object(store: &mut Store, object: GameObject, frame: u32) -> Self {
        let source = object.animation(store).frame(frame);
        object.set_transform(store, source);
        let scale = object.scale(store);
        Self {
            object,
            frame,
            scale_vector: Vec2::new(scale, scale),
            is_active: true,
        }
    }

    /// Frame of the sheet this tile shows.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Per-axis draw scale.
    #[must_use]
    pub fn scale_vector(&self) -> Vec2 {
        self.scale_vector
    }

    /// Sets the per-axis draw scale.
    pub fn set_scale_vector(&mut self, scale: Vec2) {
        self.scale_vector = scale;
    }

    /// Whether the tile takes part in the frame.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Enables or disables the tile.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Scrolls the tile vertically against the camera offset.
    pub fn update(&self, store: &mut Store, camera_offset: Vec2) {
        let position = self.position(store);
        self.set_position(store, Vec2::new(position.x, position.y - camera_offset.y));
    }

    /// Scrolls a background tile on both axes against the camera offset.
    pub fn update_background(&self, store: &mut Store, camera_offset: Vec2) {
        let position = self.position(store);
        self.set_position(store, position - camera_offset);
    }
}

impl Entity for Tile {
    fn handle(&self) -> EntityHandle {
        self.object.handle()
    }
}
