//! # Name Registry
//!
//! Interns symbolic asset names (`"player_strip4"`) into stable group ids.
//! The table is append-only: a name keeps its id for the registry's lifetime.

use std::collections::HashMap;

use tracing::debug;

use super::handle::GroupId;

/// Ordered, append-only table of group names.
#[derive(Clone, Debug, Default)]
pub struct NameRegistry {
    /// Names in id order.
    names: Vec<String>,
    /// Reverse lookup.
    ids: HashMap<String, GroupId>,
}

impl NameRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `name`, registering it first if it is new.
    ///
    /// New ids are assigned in order: the Nth distinct name gets id N - 1.
    pub fn resolve(&mut self, name: &str) -> GroupId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = GroupId::new(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        debug!(name, %id, "registered group");
        id
    }

    /// Returns the id of `name` without registering it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<GroupId> {
        self.ids.get(name).copied()
    }

    /// Returns the name registered under `id`.
    #[must_use]
    pub fn name(&self, id: GroupId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (GroupId::new(i as u32), name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_idempotent() {
        let mut registry = NameRegistry::new();
        let first = registry.resolve("player_strip4");
        let second = registry.resolve("player_strip4");

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_ids_ascend_from_zero() {
        let mut registry = NameRegistry::new();
        let names = ["player_strip4", "tile_strip26", "white_pixel_strip1"];

        for (expected, name) in names.iter().enumerate() {
            assert_eq!(registry.resolve(name).index(), expected);
        }
        // Re-resolving in a different order changes nothing.
        for (expected, name) in names.iter().enumerate().rev() {
            assert_eq!(registry.resolve(name).index(), expected);
        }
    }

    #[test]
    fn test_lookup_does_not_register() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.lookup("ghost_strip1"), None);
        assert!(registry.is_empty());

        let id = registry.resolve("ghost_strip1");
        assert_eq!(registry.lookup("ghost_strip1"), Some(id));
        assert_eq!(registry.name(id), Some("ghost_strip1"));
        assert_eq!(registry.name(GroupId::new(1)), None);
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut registry = NameRegistry::new();
        registry.resolve("b_strip1");
        registry.resolve("a_strip1");

        let collected: Vec<_> = registry.iter().map(|(id, name)| (id.raw(), name)).collect();
        assert_eq!(collected, vec![(0, "b_strip1"), (1, "a_strip1")]);
    }
}
