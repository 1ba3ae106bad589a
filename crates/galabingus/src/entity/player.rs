//! The player ship.

use galabingus_core::{AnimationState, EntityHandle, SlotId, Store};
use galabingus_shared::Vec2;

use super::{Entity, GameObject};
use crate::asset::SpriteSource;
use crate::config::PlayerConfig;
use crate::error::GameResult;

/// Fastest frame duration the ship animation runs at, in seconds.
const MIN_FRAME_DURATION: f32 = 0.005;

/// Frame duration while idle or moving fast, in seconds.
const BASE_FRAME_DURATION: f32 = 0.05;

/// The player ship. Always slot 0 of its asset's group.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    object: GameObject,
    /// Steering direction; only its direction matters.
    velocity: Vec2,
    /// Translation speed per axis.
    speed: Vec2,
    /// Aspect correction from the sprite frame shape.
    translation_ratio: Vec2,
    /// Movement applied by the last update.
    translation: Vec2,
}

impl Player {
    /// Builds the player from its config.
    ///
    /// # Errors
    ///
    /// As [`GameObject::spawn`].
    pub fn spawn(
        store: &mut Store,
        sprites: &impl SpriteSource,
        config: &PlayerConfig,
    ) -> GameResult<Self> {
        let object = GameObject::spawn_at(store, sprites, &config.asset, SlotId::new(0))?;
        object.set_scale(store, config.scale);

        let frame = object.transform(store);
        let translation_ratio = if frame.is_empty() {
            Vec2::ONE
        } else {
            let (width, height) = (frame.width as f32, frame.height as f32);
            Vec2::new(width / height / 2.0, height / width / 2.0)
        };

        Ok(Self {
            object,
            velocity: Vec2::ZERO,
            speed: config.speed,
            translation_ratio,
            translation: Vec2::ZERO,
        })
    }

    /// Sets the steering direction. Zero stops the ship.
    pub fn steer(&mut self, direction: Vec2) {
        self.velocity = direction;
    }

    /// Current steering direction.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Movement applied by the last update.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Aspect correction applied to movement.
    #[must_use]
    pub fn translation_ratio(&self) -> Vec2 {
        self.translation_ratio
    }

    /// Moves the ship and advances its animation by `delta` seconds.
    pub fn update(&mut self, store: &mut Store, delta: f64) {
        self.translation = self
            .velocity
            .normalized()
            .scale_by(self.speed)
            .scale_by(self.translation_ratio);
        let position = self.position(store) + self.translation;
        self.set_position(store, position);

        let animation = store.get_mut::<AnimationState>(self.handle());
        let magnitude = self.velocity.length();
        animation.frame_duration = if magnitude > MIN_FRAME_DURATION && magnitude < BASE_FRAME_DURATION {
            magnitude
        } else {
            BASE_FRAME_DURATION
        };
        let frame = animation.play(delta);
        self.set_transform(store, frame);
    }

    /// The underlying game object.
    #[must_use]
    pub fn object(&self) -> &GameObject {
        &self.object
    }
}

impl Entity for Player {
    fn handle(&self) -> EntityHandle {
        self.object.handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetName, SpriteAtlas};
    use galabingus_shared::{Rect, PLAYER_SCALE};

    fn setup() -> (Store, Player) {
        let mut atlas = SpriteAtlas::new();
        atlas.insert(&AssetName::parse("player_strip4").unwrap(), 128, 32);
        let mut store = Store::new();
        let player = Player::spawn(&mut store, &atlas, &PlayerConfig::default()).unwrap();
        (store, player)
    }

    #[test]
    fn test_spawn_uses_slot_zero_and_player_scale() {
        let (mut store, player) = setup();

        assert_eq!(player.handle().slot(), SlotId::new(0));
        assert_eq!(player.scale(&mut store), PLAYER_SCALE);
        assert_eq!(player.translation_ratio(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_update_moves_along_direction() {
        let (mut store, mut player) = setup();

        player.steer(Vec2::new(0.0, -3.0));
        player.update(&mut store, 0.016);

        assert_eq!(player.position(&mut store), Vec2::new(0.0, -2.5));
        assert_eq!(player.translation(), Vec2::new(0.0, -2.5));
    }

    #[test]
    fn test_idle_player_stays_put() {
        let (mut store, mut player) = setup();

        player.update(&mut store, 0.016);

        assert_eq!(player.position(&mut store), Vec2::ZERO);
    }

    #[test]
    fn test_update_advances_animation() {
        let (mut store, mut player) = setup();

        player.update(&mut store, 0.06);

        assert_eq!(player.animation(&mut store).current_frame, 1);
        assert_eq!(player.transform(&mut store), Rect::new(32, 0, 32, 32));
    }
}
