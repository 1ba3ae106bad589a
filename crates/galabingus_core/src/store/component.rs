//! # Component Values
//!
//! Components are plain data: one value type per [`ComponentKind`].
//!
//! | Kind          | Value type        |
//! |---------------|-------------------|
//! | Animation     | [`AnimationState`]|
//! | Collider      | [`Collider`]      |
//! | Transform     | [`Rect`]          |
//! | Position      | [`Vec2`]          |
//! | Sprite        | [`SpriteHandle`]  |
//! | Scale         | `f32`             |
//! | DisplayName   | `String`          |
//!
//! The typed store API goes through the [`Component`] trait. The dynamic API
//! (`*_by_kind`) carries values as a [`ComponentValue`] and checks the
//! variant against the kind before touching any column.

use galabingus_shared::{Rect, Vec2};

use super::column::DenseColumn;
use super::error::{StoreError, StoreResult};
use super::handle::GroupId;
use super::kind::ComponentKind;
use super::table::ComponentTable;

/// A value type bound to exactly one component kind and one column.
pub trait Component: Clone + Default + Send + Sync + 'static {
    /// The kind whose column stores this type.
    const KIND: ComponentKind;

    /// Returns this type's column.
    fn column(table: &ComponentTable) -> &DenseColumn<Self>;

    /// Returns this type's column mutably.
    fn column_mut(table: &mut ComponentTable) -> &mut DenseColumn<Self>;

    /// Wraps the value into the tagged union.
    fn into_value(self) -> ComponentValue;

    /// Unwraps the tagged union, failing if the variant belongs to another kind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TypeMismatch`] when `value` is not this kind.
    fn from_value(value: ComponentValue) -> StoreResult<Self>;
}

/// Handle to a loaded sprite sheet.
///
/// The store never owns textures; whoever draws keeps them keyed by `id`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpriteHandle {
    /// Texture id assigned by the sprite source.
    pub id: u32,
    /// Full sheet width in pixels.
    pub width: u32,
    /// Full sheet height in pixels.
    pub height: u32,
}

impl SpriteHandle {
    /// The handle every freshly grown slot starts with.
    pub const NULL: Self = Self {
        id: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new sprite handle.
    #[must_use]
    pub const fn new(id: u32, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Checks if this is the null handle.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.id == 0 && self.width == 0 && self.height == 0
    }
}

/// Collision layer membership.
///
/// Game objects collide on the layer of the group they were built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Collider {
    /// Layer this collider belongs to.
    pub layer: GroupId,
    /// Whether collision resolution should consider this collider.
    pub enabled: bool,
}

impl Collider {
    /// Creates an enabled collider on `layer`.
    #[must_use]
    pub const fn on_layer(layer: GroupId) -> Self {
        Self {
            layer,
            enabled: true,
        }
    }
}

/// Sprite-sheet playback state.
///
/// A sheet is a horizontal strip of `frames` equally wide frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Time accumulated towards the next frame, in seconds.
    pub elapsed: f64,
    /// Duration of one frame, in seconds.
    pub frame_duration: f32,
    /// Full sheet width in pixels.
    pub width: u32,
    /// Full sheet height in pixels.
    pub height: u32,
    /// Number of frames in the strip.
    pub frames: u32,
    /// Frame currently shown.
    pub current_frame: u32,
}

impl AnimationState {
    /// Creates a stopped animation over a `width` x `height` strip.
    #[must_use]
    pub const fn new(width: u32, height: u32, frames: u32) -> Self {
        Self {
            elapsed: 0.0,
            frame_duration: 0.0,
            width,
            height,
            frames,
            current_frame: 0,
        }
    }

    /// Sets the per-frame duration.
    #[must_use]
    pub const fn with_frame_duration(mut self, seconds: f32) -> Self {
        self.frame_duration = seconds;
        self
    }

    /// Returns the source rectangle of `frame` inside the sheet.
    ///
    /// Frame indices past the end of the strip wrap around. An animation
    /// without frames yields an empty rectangle.
    #[must_use]
    pub fn frame(&self, frame: u32) -> Rect {
        if self.frames == 0 {
            return Rect::EMPTY;
        }
        // stride * (frame % frames) never exceeds width.
        let offset = self.width / self.frames * (frame % self.frames);
        let width = (f64::from(self.width) / f64::from(self.frames)).round();
        Rect::new(
            saturating_i32(offset),
            0,
            width as i32,
            saturating_i32(self.height),
        )
    }

    /// Returns the source rectangle of the current frame.
    #[must_use]
    pub fn current(&self) -> Rect {
        self.frame(self.current_frame)
    }

    /// Advances playback by `delta` seconds and returns the frame to draw.
    pub fn play(&mut self, delta: f64) -> Rect {
        if self.frames == 0 {
            return Rect::EMPTY;
        }
        if delta.is_finite() {
            self.elapsed += delta;
        }
        let duration = f64::from(self.frame_duration);
        if self.elapsed >= duration {
            self.current_frame = (self.current_frame % self.frames + 1) % self.frames;
            self.elapsed -= duration;
        }
        self.current()
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Tagged union over every component value type.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentValue {
    /// An [`AnimationState`].
    Animation(AnimationState),
    /// A [`Collider`].
    Collider(Collider),
    /// A transform rectangle.
    Transform(Rect),
    /// A position.
    Position(Vec2),
    /// A [`SpriteHandle`].
    Sprite(SpriteHandle),
    /// A uniform scale.
    Scale(f32),
    /// A display name.
    DisplayName(String),
}

impl ComponentValue {
    /// Returns the kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Animation(_) => ComponentKind::Animation,
            Self::Collider(_) => ComponentKind::Collider,
            Self::Transform(_) => ComponentKind::Transform,
            Self::Position(_) => ComponentKind::Position,
            Self::Sprite(_) => ComponentKind::Sprite,
            Self::Scale(_) => ComponentKind::Scale,
            Self::DisplayName(_) => ComponentKind::DisplayName,
        }
    }
}

macro_rules! impl_component {
    ($ty:ty, $variant:ident, $column:ident) => {
        impl Component for $ty {
            const KIND: ComponentKind = ComponentKind::$variant;

            #[inline]
            fn column(table: &ComponentTable) -> &DenseColumn<Self> {
                &table.$column
            }

            #[inline]
            fn column_mut(table: &mut ComponentTable) -> &mut DenseColumn<Self> {
                &mut table.$column
            }

            fn into_value(self) -> ComponentValue {
                ComponentValue::$variant(self)
            }

            fn from_value(value: ComponentValue) -> StoreResult<Self> {
                match value {
                    ComponentValue::$variant(inner) => Ok(inner),
                    other => Err(StoreError::TypeMismatch {
                        expected: Self::KIND,
                        found: other.kind(),
                    }),
                }
            }
        }

        impl From<$ty> for ComponentValue {
            fn from(value: $ty) -> Self {
                ComponentValue::$variant(value)
            }
        }
    };
}

impl_component!(AnimationState, Animation, animations);
impl_component!(Collider, Collider, colliders);
impl_component!(Rect, Transform, transforms);
impl_component!(Vec2, Position, positions);
impl_component!(SpriteHandle, Sprite, sprites);
impl_component!(f32, Scale, scales);
impl_component!(String, DisplayName, display_names);
