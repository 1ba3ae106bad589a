//! # Component Kinds
//!
//! The fixed set of component kinds. Each kind owns exactly one dense column
//! of one concrete value type.

use std::fmt;

use super::error::StoreError;

/// Tag selecting which component column an operation targets.
///
/// Discriminants are stable: they are the raw values accepted by the dynamic
/// (`*_by_kind`) store API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ComponentKind {
    /// Sprite-sheet playback state.
    Animation = 0,
    /// Collision layer membership.
    Collider = 1,
    /// Source rectangle inside the sprite sheet.
    Transform = 2,
    /// Screen position.
    Position = 3,
    /// Sprite handle.
    Sprite = 4,
    /// Uniform draw scale.
    Scale = 5,
    /// Human-readable name.
    DisplayName = 6,
}

impl ComponentKind {
    /// Number of kinds.
    pub const COUNT: usize = 7;

    /// Every kind, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Animation,
        Self::Collider,
        Self::Transform,
        Self::Position,
        Self::Sprite,
        Self::Scale,
        Self::DisplayName,
    ];

    /// Returns the kind as a table offset.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the raw discriminant.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Returns a lowercase name, used in logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Animation => "animation",
            Self::Collider => "collider",
            Self::Transform => "transform",
            Self::Position => "position",
            Self::Sprite => "sprite",
            Self::Scale => "scale",
            Self::DisplayName => "display_name",
        }
    }
}

impl TryFrom<u8> for ComponentKind {
    type Error = StoreError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(StoreError::InvalidKind(raw))
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
