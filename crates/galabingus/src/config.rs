//! # Game Configuration
//!
//! Loaded once at startup from TOML. Every field has a default, so an empty
//! document is a valid configuration.
//!
//! ```toml
//! [screen]
//! width = 1280
//! height = 720
//!
//! [frame]
//! target_fps = 60
//! enable_timing_logs = true
//!
//! [player]
//! asset = "player_strip4"
//! speed = { x = 6.0, y = 6.0 }
//!
//! [background]
//! asset = "space_only_background_strip1"
//!
//! [[sprites]]
//! name = "player_strip4"
//! width = 128
//! height = 32
//! ```

use std::path::Path;

use galabingus_shared::{
    Vec2, BORDER_THICKNESS, MAX_FRAME_DELTA, PLAYER_SCALE, TARGET_FPS,
};
use serde::{Deserialize, Serialize};

use crate::asset::AssetName;
use crate::error::ConfigError;

/// Viewport size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Viewport width.
    pub width: u32,
    /// Viewport height.
    pub height: u32,
}

impl ScreenConfig {
    /// Viewport size as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Frame pacing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// Log frames that blow the budget.
    pub enable_timing_logs: bool,
    /// Largest delta time one frame may observe, in seconds.
    pub max_delta: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            enable_timing_logs: false,
            max_delta: MAX_FRAME_DELTA,
        }
    }
}

/// Player setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Asset the player is built from.
    pub asset: String,
    /// Translation speed per axis, in pixels per frame.
    pub speed: Vec2,
    /// Draw scale.
    pub scale: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            asset: "player_strip4".to_string(),
            speed: Vec2::new(5.0, 5.0),
            scale: PLAYER_SCALE,
        }
    }
}

/// Screen border setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    /// One-frame asset stretched into each border.
    pub asset: String,
    /// Border thickness in pixels.
    pub thickness: f32,
    /// Draw scale written to each border tile.
    pub scale: f32,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            asset: "white_pixel_strip1".to_string(),
            thickness: BORDER_THICKNESS,
            scale: 25.0,
        }
    }
}

/// Scrolling background setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// One-frame asset drawn behind everything else.
    pub asset: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            asset: "space_only_background_strip1".to_string(),
        }
    }
}

/// One sprite sheet known to the atlas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteConfig {
    /// Asset name (`<file>_strip<frames>`).
    pub name: String,
    /// Full sheet width in pixels.
    pub width: u32,
    /// Full sheet height in pixels.
    pub height: u32,
}

impl SpriteConfig {
    /// Creates a sprite entry.
    #[must_use]
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport.
    pub screen: ScreenConfig,
    /// Frame pacing.
    pub frame: FrameConfig,
    /// Player setup.
    pub player: PlayerConfig,
    /// Border setup.
    pub border: BorderConfig,
    /// Background setup.
    pub background: BackgroundConfig,
    /// Sprite sheets available to the scene.
    pub sprites: Vec<SpriteConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            frame: FrameConfig::default(),
            player: PlayerConfig::default(),
            border: BorderConfig::default(),
            background: BackgroundConfig::default(),
            sprites: vec![
                SpriteConfig::new("player_strip4", 128, 32),
                SpriteConfig::new("white_pixel_strip1", 1, 1),
                SpriteConfig::new("tile_strip26", 832, 32),
                SpriteConfig::new("space_only_background_strip1", 960, 2880),
            ],
        }
    }
}

impl GameConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML and
    /// [`ConfigError::Invalid`] for unusable values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`GameConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if self.frame.target_fps == 0 {
            return Err(ConfigError::Invalid("frame.target_fps must be positive".into()));
        }
        if !is_positive(self.frame.max_delta) {
            return Err(ConfigError::Invalid("frame.max_delta must be positive".into()));
        }
        if !is_positive(self.player.scale) {
            return Err(ConfigError::Invalid("player.scale must be positive".into()));
        }
        let names = self
            .sprites
            .iter()
            .map(|sprite| sprite.name.as_str())
            .chain([
                self.player.asset.as_str(),
                self.border.asset.as_str(),
                self.background.asset.as_str(),
            ]);
        for name in names {
            AssetName::parse(name).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        }
        Ok(())
    }

    /// Seconds per frame at the target rate.
    #[must_use]
    pub fn frame_budget(&self) -> f64 {
        1.0 / f64::from(self.frame.target_fps)
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
