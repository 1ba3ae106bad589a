//! # Game Constants
//!
//! Defaults baked into the binary. Anything a level designer tunes lives in
//! the TOML config instead.

/// Marker separating an asset stem from its frame count (`player_strip4`).
pub const STRIP_MARKER: &str = "strip";

/// Scale written for every freshly constructed game object.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Scale the player sprite is drawn at.
pub const PLAYER_SCALE: f32 = 2.5;

/// Thickness in pixels of the off-screen border tiles.
pub const BORDER_THICKNESS: f32 = 200.0;

/// Target frames per second.
pub const TARGET_FPS: u32 = 60;

/// Largest delta time a single frame may observe, in seconds.
///
/// Prevents entities from tunnelling after a pause or a debugger break.
pub const MAX_FRAME_DELTA: f32 = 0.1;
