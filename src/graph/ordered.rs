// src/graph/ordered.rs
//! Insertion-ordered set: a `Vec` for order plus a `HashSet` for membership.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` unless already present. Returns `true` if it was new.
    pub fn insert(&mut self, item: &str) -> bool {
        if self.seen.contains(item) {
            return false;
        }
        self.seen.insert(item.to_string());
        self.items.push(item.to_string());
        true
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}
