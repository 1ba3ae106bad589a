//! # Entity Facades
//!
//! Typed wrappers that bind one `(group, slot)` pair at construction and
//! route every property access through the store with that handle.
//!
//! - [`GameObject`] - any asset-backed object
//! - [`Player`] - the ship the player steers
//! - [`Tile`] - borders, obstacles and scenery

mod object;
mod player;
mod tile;

pub use object::GameObject;
pub use player::Player;
pub use tile::Tile;

use galabingus_core::{AnimationState, Collider, EntityHandle, SpriteHandle, Store};
use galabingus_shared::{Rect, Vec2};

/// Generates a getter/setter pair per component property.
macro_rules! entity_properties {
    ($($ty:ty => $get:ident, $set:ident, $doc:literal;)*) => {
        $(
            #[doc = concat!("Reads the ", $doc, ".")]
            fn $get(&self, store: &mut Store) -> $ty {
                store.get::<$ty>(self.handle())
            }

            #[doc = concat!("Writes the ", $doc, ".")]
            fn $set(&self, store: &mut Store, value: $ty) {
                store.set::<$ty>(self.handle(), value);
            }
        )*
    };
}

/// Anything living in the store under a fixed handle.
///
/// Accessors take the store explicitly; a facade never reads the store's
/// selection.
pub trait Entity {
    /// Where this entity lives in the store.
    fn handle(&self) -> EntityHandle;

    entity_properties! {
        Vec2 => position, set_position, "position";
        SpriteHandle => sprite, set_sprite, "sprite sheet handle";
        Rect => transform, set_transform, "source rectangle inside the sprite sheet";
        f32 => scale, set_scale, "draw scale";
        AnimationState => animation, set_animation, "animation playback state";
        Collider => collider, set_collider, "collider";
        String => display_name, set_display_name, "display name";
    }
}
