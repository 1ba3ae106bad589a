//! # Assets
//!
//! Asset names follow `<file>_strip<frames>`: the sprite sheet on disk is a
//! horizontal strip of `frames` equally wide frames, and the full name is
//! the group the store files every instance under.

use std::collections::HashMap;
use std::fmt;

use galabingus_core::SpriteHandle;
use galabingus_shared::STRIP_MARKER;

use crate::config::SpriteConfig;
use crate::error::AssetError;

/// A parsed `<file>_strip<frames>` asset name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetName {
    /// Full name, used as the store group name.
    name: String,
    /// Frames in the sprite strip. Never zero.
    frames: u32,
}

impl AssetName {
    /// Parses an asset name.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::MalformedName`] if the name has no strip marker,
    /// nothing before it, or a frame count that is not a positive integer.
    pub fn parse(name: &str) -> Result<Self, AssetError> {
        let malformed = |reason| AssetError::MalformedName {
            name: name.to_string(),
            reason,
        };

        let (stem, frames) = name
            .rsplit_once(STRIP_MARKER)
            .ok_or_else(|| malformed("missing strip marker"))?;
        if stem.trim_end_matches('_').is_empty() {
            return Err(malformed("missing file stem"));
        }
        let frames: u32 = frames
            .parse()
            .map_err(|_| malformed("frame count is not a number"))?;
        if frames == 0 {
            return Err(malformed("frame count must be positive"));
        }

        Ok(Self {
            name: name.to_string(),
            frames,
        })
    }

    /// Full asset name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Frames in the sprite strip.
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Anything that can hand out sprite sheets by asset name.
pub trait SpriteSource {
    /// Loads the sprite sheet for `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::MissingSprite`] if nothing is known by that name.
    fn load(&self, asset: &AssetName) -> Result<SpriteHandle, AssetError>;
}

/// In-memory sprite registry.
///
/// Stands in for texture loading: it records sheet dimensions and hands out
/// stable ids. Id 0 is reserved for [`SpriteHandle::NULL`].
#[derive(Clone, Debug, Default)]
pub struct SpriteAtlas {
    sprites: HashMap<String, SpriteHandle>,
}

impl SpriteAtlas {
    /// Creates an empty atlas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an atlas from config entries.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::MalformedName`] for the first entry whose name
    /// is not a valid asset name.
    pub fn from_config(sprites: &[SpriteConfig]) -> Result<Self, AssetError> {
        let mut atlas = Self::new();
        for sprite in sprites {
            atlas.insert(&AssetName::parse(&sprite.name)?, sprite.width, sprite.height);
        }
        Ok(atlas)
    }

    /// Registers a sheet, replacing any previous one with the same name.
    ///
    /// A replacement keeps the id of the sheet it replaces.
    pub fn insert(&mut self, asset: &AssetName, width: u32, height: u32) -> SpriteHandle {
        let next_id = self.sprites.len() as u32 + 1;
        let handle = self
            .sprites
            .entry(asset.as_str().to_string())
            .or_insert(SpriteHandle::new(next_id, width, height));
        handle.width = width;
        handle.height = height;
        *handle
    }

    /// Number of registered sheets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl SpriteSource for SpriteAtlas {
    fn load(&self, asset: &AssetName) -> Result<SpriteHandle, AssetError> {
        self.sprites
            .get(asset.as_str())
            .copied()
            .ok_or_else(|| AssetError::MissingSprite(asset.as_str().to_string()))
    }
}
