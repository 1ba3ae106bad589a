//! # Galabingus
//!
//! The game side of the component store.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   GameLoop   │────>│    Scene     │────>│   EventBus   │
//! │ (pacing)     │     │ (one level)  │     │ (observers)  │
//! └──────────────┘     └──────┬───────┘     └──────────────┘
//!                             │
//!               ┌─────────────┼─────────────┐
//!               ▼             ▼             ▼
//!         ┌──────────┐  ┌──────────┐  ┌──────────────┐
//!         │  Player  │  │   Tile   │  │ SpriteAtlas  │
//!         └────┬─────┘  └────┬─────┘  └──────────────┘
//!              └──────┬──────┘
//!                     ▼
//!           ┌───────────────────┐
//!           │ galabingus_core   │
//!           │      Store        │
//!           └───────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `asset`: asset names and sprite sources
//! - `config`: TOML configuration
//! - `entity`: game object, player and tile facades
//! - `events`: scene-to-observer events
//! - `game_loop`: frame pacing and timing
//! - `scene`: one running level
//! - `tile_manager`: borders and scrolling tiles

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod asset;
pub mod config;
pub mod entity;
pub mod error;
pub mod events;
pub mod game_loop;
pub mod scene;
pub mod tile_manager;

pub use galabingus_core as core;

pub use asset::{AssetName, SpriteAtlas, SpriteSource};
pub use config::GameConfig;
pub use entity::{Entity, GameObject, Player, Tile};
pub use error::{AssetError, ConfigError, GameError, GameResult};
pub use events::{EventBus, EventReceiver, EventSender, GameEvent};
pub use game_loop::{FrameOutput, FrameStats, FrameStatsAccumulator, GameLoop};
pub use scene::{ComponentPatch, DrawCall, Scene};
pub use tile_manager::TileManager;
