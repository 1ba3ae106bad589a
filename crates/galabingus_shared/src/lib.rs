//! # Galabingus Shared
//!
//! Common types used by the store and by every game-side consumer.
//!
//! ## Rule
//!
//! This crate must never depend on a graphics or windowing crate. Sprites are
//! plain handles here; whoever draws them owns the texture.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{
    BORDER_THICKNESS, DEFAULT_SCALE, MAX_FRAME_DELTA, PLAYER_SCALE, STRIP_MARKER, TARGET_FPS,
};
pub use math::{Rect, Vec2};
