//! # Sparse Index
//!
//! Three-level, lazily-growing map from `(kind, group, slot)` to a dense
//! index in that kind's column.
//!
//! ```text
//! kinds[kind]             -> per-group tables (grown on demand)
//!   groups[group]         -> per-slot dense indices (grown on demand)
//!     slots[slot]         -> DenseIndex into the kind's column
//! ```
//!
//! Growth only ever appends. Touching slot `n` of a group materializes every
//! missing slot up to and including `n`, each backed by a freshly pushed
//! default value, so the index never exposes holes.

use tracing::trace;

use super::column::DenseColumn;
use super::handle::{DenseIndex, GroupId, SlotId};
use super::kind::ComponentKind;

/// Per-slot dense indices of one (kind, group).
type SlotTable = Vec<DenseIndex>;

/// The three-level index shared by every component kind.
#[derive(Clone, Debug, Default)]
pub struct SparseIndex {
    /// `kinds[kind][group][slot]`.
    kinds: Vec<Vec<SlotTable>>,
}

impl SparseIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Grows the kind and group levels so `(kind, group)` has a slot table.
    fn slots_mut(&mut self, kind: ComponentKind, group: GroupId) -> &mut SlotTable {
        // Phase 1: per-group tables for every kind up to `kind`.
        let kind_index = kind.index();
        if kind_index >= self.kinds.len() {
            self.kinds.resize_with(kind_index + 1, Vec::new);
        }
        let groups = &mut self.kinds[kind_index];

        // Phase 2: per-slot tables for every group up to `group`.
        let group_index = group.index();
        if group_index >= groups.len() {
            groups.resize_with(group_index + 1, Vec::new);
        }
        &mut groups[group_index]
    }

    /// Resolves `(kind, group, slot)` to a dense index, growing as needed.
    ///
    /// Every missing slot up to and including `slot` receives a default value
    /// pushed onto `column`. Slots at or below the high-water mark resolve
    /// directly with no growth.
    pub fn resolve<T: Default>(
        &mut self,
        kind: ComponentKind,
        group: GroupId,
        slot: SlotId,
        column: &mut DenseColumn<T>,
    ) -> DenseIndex {
        let slots = self.slots_mut(kind, group);

        // Phase 3: back-fill every missing slot with a default dense entry.
        let wanted = slot.index();
        if wanted >= slots.len() {
            let grown = wanted + 1 - slots.len();
            slots.extend(std::iter::repeat_with(|| column.push_default()).take(grown));
            trace!(%kind, %group, %slot, grown, "sparse index grew");
        }
        slots[wanted]
    }

    /// Appends a brand-new slot for `(kind, group)` holding `value`.
    ///
    /// Existing slots are ignored: the new slot id is always the previous
    /// slot count.
    pub fn append<T>(
        &mut self,
        kind: ComponentKind,
        group: GroupId,
        column: &mut DenseColumn<T>,
        value: T,
    ) -> SlotId {
        let slots = self.slots_mut(kind, group);
        let slot = SlotId::new(slots.len() as u32);
        slots.push(column.push(value));
        trace!(%kind, %group, %slot, "slot appended");
        slot
    }

    /// Looks up `(kind, group, slot)` without growing anything.
    #[must_use]
    pub fn lookup(&self, kind: ComponentKind, group: GroupId, slot: SlotId) -> Option<DenseIndex> {
        self.slots(kind, group).get(slot.index()).copied()
    }

    /// Returns the dense indices of every allocated slot of `(kind, group)`,
    /// in slot order. Unknown pairs yield an empty slice.
    #[must_use]
    pub fn slots(&self, kind: ComponentKind, group: GroupId) -> &[DenseIndex] {
        self.kinds
            .get(kind.index())
            .and_then(|groups| groups.get(group.index()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of allocated slots of `(kind, group)`.
    #[must_use]
    pub fn slot_count(&self, kind: ComponentKind, group: GroupId) -> usize {
        self.slots(kind, group).len()
    }
}
