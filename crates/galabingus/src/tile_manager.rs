//! # Tile Manager
//!
//! Owns the scrolling background, the screen borders and the obstacle tiles.
//!
//! Borders sit just outside the viewport, one per edge, stretched from a
//! one-frame white-pixel sheet:
//!
//! ```text
//!            ┌──────────── top ────────────┐
//!            │                             │
//!          left          viewport        right
//!            │                             │
//!            └─────────── bottom ──────────┘
//! ```
//!
//! Two background tiles share one group: a lead tile parked far above the
//! viewport and a second one that starts on screen. Backgrounds scroll on
//! both axes and wrap back by one viewport height once they pass the bottom.

use galabingus_core::{SlotId, Store};
use galabingus_shared::Vec2;

use crate::asset::SpriteSource;
use crate::config::{BackgroundConfig, BorderConfig};
use crate::entity::{Entity, Tile};
use crate::error::GameResult;

/// Height of the lead background above the viewport, in viewport heights.
const BACKGROUND_LEAD: f32 = 4.3;

/// Background scale relative to the player's.
const BACKGROUND_FIT: f32 = 0.975;

/// Background, border and scrolling tiles of the current level.
#[derive(Clone, Debug, Default)]
pub struct TileManager {
    backgrounds: Vec<Tile>,
    borders: Vec<Tile>,
    tiles: Vec<Tile>,
    viewport: Vec2,
}

impl TileManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the four border tiles (top, bottom, right, left) in slots 0..4.
    ///
    /// # Errors
    ///
    /// Fails if the border asset cannot be built; borders built before the
    /// failure are discarded.
    pub fn create_borders(
        &mut self,
        store: &mut Store,
        sprites: &impl SpriteSource,
        screen: Vec2,
        config: &BorderConfig,
    ) -> GameResult<()> {
        let thickness = config.thickness;
        let layout = [
            (Vec2::new(screen.x, thickness), Vec2::new(0.0, -thickness)),
            (Vec2::new(screen.x, thickness), Vec2::new(0.0, screen.y)),
            (Vec2::new(thickness, screen.y), Vec2::new(screen.x, 0.0)),
            (Vec2::new(thickness, screen.y), Vec2::new(-thickness, 0.0)),
        ];

        let mut borders = Vec::with_capacity(layout.len());
        for (slot, (extent, position)) in (0..).zip(layout) {
            let mut tile = Tile::spawn_at(store, sprites, &config.asset, SlotId::new(slot), 0)?;
            tile.set_scale(store, config.scale);
            tile.set_scale_vector(extent);
            tile.set_position(store, position);
            borders.push(tile);
        }
        self.borders = borders;
        Ok(())
    }

    /// Builds the two background tiles in slots 0 and 1.
    ///
    /// Backgrounds are scaled so the sheet's width spans the viewport height
    /// relative to the player's scale, and never collide.
    ///
    /// # Errors
    ///
    /// Fails if the background asset cannot be built.
    pub fn create_background(
        &mut self,
        store: &mut Store,
        sprites: &impl SpriteSource,
        screen: Vec2,
        config: &BackgroundConfig,
        player_scale: f32,
    ) -> GameResult<()> {
        let layout = [Vec2::new(-screen.x, -screen.y * BACKGROUND_LEAD), Vec2::ZERO];

        let mut backgrounds = Vec::with_capacity(layout.len());
        for (slot, position) in (0..).zip(layout) {
            let mut tile = Tile::spawn_at(store, sprites, &config.asset, SlotId::new(slot), 0)?;
            let width = tile.transform(store).width.max(1) as f32;
            let scale = screen.y / width / (player_scale * BACKGROUND_FIT);
            tile.set_scale(store, scale);
            tile.set_scale_vector(Vec2::new(scale, scale));
            tile.set_position(store, position);

            let mut collider = tile.collider(store);
            collider.enabled = false;
            tile.set_collider(store, collider);
            backgrounds.push(tile);
        }
        self.backgrounds = backgrounds;
        self.viewport = screen;
        Ok(())
    }

    /// Places a scrolling tile at `position`.
    ///
    /// # Errors
    ///
    /// As [`Tile::spawn`].
    pub fn create_object(
        &mut self,
        store: &mut Store,
        sprites: &impl SpriteSource,
        asset: &str,
        position: Vec2,
    ) -> GameResult<&Tile> {
        let tile = Tile::spawn(store, sprites, asset, 0)?;
        tile.set_position(store, position);
        self.tiles.push(tile);
        Ok(&self.tiles[self.tiles.len() - 1])
    }

    /// Scrolls the backgrounds and every active tile against the camera
    /// offset. Borders stay put.
    pub fn update(&self, store: &mut Store, camera_offset: Vec2) {
        let height = self.viewport.y;
        for background in &self.backgrounds {
            background.update_background(store, camera_offset);
            let position = background.position(store);
            if height > 0.0 && position.y >= height {
                background.set_position(store, Vec2::new(position.x, position.y - height));
            }
        }
        for tile in self.tiles.iter().filter(|tile| tile.is_active()) {
            tile.update(store, camera_offset);
        }
    }

    /// Background tiles, lead tile first.
    #[must_use]
    pub fn backgrounds(&self) -> &[Tile] {
        &self.backgrounds
    }

    /// Border tiles in top, bottom, right, left order.
    #[must_use]
    pub fn borders(&self) -> &[Tile] {
        &self.borders
    }

    /// Scrolling tiles in creation order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Mutable access to the scrolling tiles.
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}
