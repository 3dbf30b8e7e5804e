//! Extension Collection
//!
//! Ordered list of extensions with unique ids. The only mutable copy of
//! the loaded data; views are derived from it.

use std::collections::HashSet;

use crate::models::Extension;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionCollection {
    items: Vec<Extension>,
}

impl ExtensionCollection {
    /// Build from loaded records. Later duplicates of an id are dropped.
    pub fn new(items: Vec<Extension>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let items = items
            .into_iter()
            .filter(|e| {
                let fresh = seen.insert(e.id);
                if !fresh {
                    log::warn!("[LOAD] Dropping duplicate extension id {}", e.id);
                }
                fresh
            })
            .collect();
        Self { items }
    }

    pub fn as_slice(&self) -> &[Extension] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Extension> {
        self.items.iter().find(|e| e.id == id)
    }

    /// Flip `is_active` in place. Returns the new state, `None` for an unknown id.
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        self.items.iter_mut().find(|e| e.id == id).map(|e| {
            e.is_active = !e.is_active;
            e.is_active
        })
    }

    /// Remove by id, returning the removed record
    pub fn remove(&mut self, id: u32) -> Option<Extension> {
        let index = self.items.iter().position(|e| e.id == id)?;
        Some(self.items.remove(index))
    }
}
