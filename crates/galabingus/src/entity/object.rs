//! Generic asset-backed game object.

use galabingus_core::{AnimationState, Collider, EntityHandle, SlotId, Store};
use galabingus_shared::{Vec2, DEFAULT_SCALE};
use tracing::debug;

use super::Entity;
use crate::asset::{AssetName, SpriteSource};
use crate::error::GameResult;

/// An object built from a `<file>_strip<frames>` asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameObject {
    handle: EntityHandle,
    asset: AssetName,
}

impl GameObject {
    /// Builds an object in a new slot of the asset's group.
    ///
    /// # Errors
    ///
    /// Fails if the name is malformed or no sprite is loaded under it. The
    /// store is untouched on error.
    pub fn spawn(
        store: &mut Store,
        sprites: &impl SpriteSource,
        asset: &str,
    ) -> GameResult<Self> {
        Self::build(store, sprites, asset, None)
    }

    /// Builds an object in `slot` of the asset's group.
    ///
    /// Rebuilding an occupied slot overwrites its components.
    ///
    /// # Errors
    ///
    /// As [`GameObject::spawn`].
    pub fn spawn_at(
        store: &mut Store,
        sprites: &impl SpriteSource,
        asset: &str,
        slot: SlotId,
    ) -> GameResult<Self> {
        Self::build(store, sprites, asset, Some(slot))
    }

    fn build(
        store: &mut Store,
        sprites: &impl SpriteSource,
        asset: &str,
        slot: Option<SlotId>,
    ) -> GameResult<Self> {
        let asset = AssetName::parse(asset)?;
        let sprite = sprites.load(&asset)?;

        let group = store.select_named(asset.as_str());
        let slot = slot.unwrap_or_else(|| store.add_with(group, sprite));
        let object = Self {
            handle: EntityHandle::new(group, slot),
            asset,
        };

        let animation = AnimationState::new(sprite.width, sprite.height, object.asset.frames());
        object.set_sprite(store, sprite);
        object.set_scale(store, DEFAULT_SCALE);
        object.set_animation(store, animation);
        object.set_collider(store, Collider::on_layer(group));
        object.set_position(store, Vec2::ZERO);
        object.set_transform(store, animation.frame(0));
        object.set_display_name(store, object.asset.to_string());

        debug!(asset = %object.asset, handle = %object.handle, "game object constructed");
        Ok(object)
    }

    /// Asset this object was built from.
    #[must_use]
    pub fn asset(&self) -> &AssetName {
        &self.asset
    }
}

impl Entity for GameObject {
    fn handle(&self) -> EntityHandle {
        self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::SpriteAtlas;
    use crate::error::{AssetError, GameError};
    use galabingus_core::{GroupId, SpriteHandle};
    use galabingus_shared::Rect;

    fn atlas() -> SpriteAtlas {
        let mut atlas = SpriteAtlas::new();
        atlas.insert(&AssetName::parse("player_strip4").unwrap(), 128, 32);
        atlas.insert(&AssetName::parse("tile_strip26").unwrap(), 832, 32);
        atlas
    }

    #[test]
    fn test_spawn_writes_every_component() {
        let mut store = Store::new();
        let atlas = atlas();

        let object = GameObject::spawn(&mut store, &atlas, "player_strip4").unwrap();
        let group = object.handle().group();

        assert_eq!(group, GroupId::new(0));
        assert_eq!(object.handle().slot(), SlotId::new(0));
        assert_eq!(object.sprite(&mut store), SpriteHandle::new(1, 128, 32));
        assert_eq!(object.scale(&mut store), 1.0);
        assert_eq!(object.animation(&mut store).frames, 4);
        assert_eq!(object.collider(&mut store), Collider::on_layer(group));
        assert_eq!(object.position(&mut store), Vec2::ZERO);
        assert_eq!(object.transform(&mut store), Rect::new(0, 0, 32, 32));
        assert_eq!(object.display_name(&mut store), "player_strip4");
        assert_eq!(store.selected_group(), Some(group));
    }

    #[test]
    fn test_spawn_appends_slots() {
        let mut store = Store::new();
        let atlas = atlas();

        let first = GameObject::spawn(&mut store, &atlas, "tile_strip26").unwrap();
        let second = GameObject::spawn(&mut store, &atlas, "tile_strip26").unwrap();

        assert_eq!(first.handle().group(), second.handle().group());
        assert_eq!(second.handle().slot(), SlotId::new(1));

        first.set_position(&mut store, Vec2::new(4.0, 4.0));
        assert_eq!(second.position(&mut store), Vec2::ZERO);
    }

    #[test]
    fn test_malformed_name_leaves_store_untouched() {
        let mut store = Store::new();
        let atlas = atlas();

        for name in ["player", "player_stripX", "player_strip0"] {
            let err = GameObject::spawn(&mut store, &atlas, name).unwrap_err();
            assert!(matches!(err, GameError::Asset(AssetError::MalformedName { .. })));
        }

        assert!(store.registry().is_empty());
        assert_eq!(store.stats().total_entries(), 0);
        assert_eq!(store.selected_group(), None);
    }

    #[test]
    fn test_missing_sprite_leaves_store_untouched() {
        let mut store = Store::new();

        let err = GameObject::spawn(&mut store, &atlas(), "enemy_strip8").unwrap_err();

        assert!(matches!(err, GameError::Asset(AssetError::MissingSprite(_))));
        assert!(store.lookup("enemy_strip8").is_none());
    }
}
