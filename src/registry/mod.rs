pub mod roles;

pub use roles::RoleDirectory;

use std::collections::BTreeMap;

/// In-memory keyed store with the collaborator contract the engine relies
/// on: get by id, exists by id, insert. Iteration is in key order, so every
/// whole-store read is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Registry<V> {
    items: BTreeMap<String, V>,
}

impl<V> Registry<V> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Insert or replace the entry stored under `id`
    pub fn put(&mut self, id: &str, value: V) {
        self.items.insert(id.to_string(), value);
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut V> {
        self.items.get_mut(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
