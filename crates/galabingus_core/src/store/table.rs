//! # Component Kind Table
//!
//! One dense column per [`ComponentKind`]. Typed access goes through
//! `Component::column`; the store dispatches raw kinds onto those.

use galabingus_shared::{Rect, Vec2};

use super::column::DenseColumn;
use super::component::{AnimationState, Collider, SpriteHandle};
use super::kind::ComponentKind;

/// The set of dense columns, one per component kind.
///
/// Columns only ever grow. A value's dense index is recorded by the sparse
/// index the moment it is pushed and is never handed out again.
#[derive(Clone, Debug, Default)]
pub struct ComponentTable {
    // =========================================================================
    // Columns - add new component kinds here
    // =========================================================================
    /// Animation column.
    pub(crate) animations: DenseColumn<AnimationState>,
    /// Collider column.
    pub(crate) colliders: DenseColumn<Collider>,
    /// Transform column.
    pub(crate) transforms: DenseColumn<Rect>,
    /// Position column.
    pub(crate) positions: DenseColumn<Vec2>,
    /// Sprite column.
    pub(crate) sprites: DenseColumn<SpriteHandle>,
    /// Scale column.
    pub(crate) scales: DenseColumn<f32>,
    /// Display name column.
    pub(crate) display_names: DenseColumn<String>,
}

impl ComponentTable {
    /// Creates a table with every column empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of dense entries in `kind`'s column.
    #[must_use]
    pub fn len_of(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Animation => self.animations.len(),
            ComponentKind::Collider => self.colliders.len(),
            ComponentKind::Transform => self.transforms.len(),
            ComponentKind::Position => self.positions.len(),
            ComponentKind::Sprite => self.sprites.len(),
            ComponentKind::Scale => self.scales.len(),
            ComponentKind::DisplayName => self.display_names.len(),
        }
    }
}
