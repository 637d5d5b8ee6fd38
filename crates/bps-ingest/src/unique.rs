//! Insertion-ordered set of distinct values.

use std::collections::HashSet;
use std::hash::Hash;

/// Keeps the first occurrence of each value, in insertion order.
#[derive(Debug, Clone)]
pub struct OrderedUnique<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for OrderedUnique<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> OrderedUnique<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` unless it was seen before. Returns true when added.
    pub fn push(&mut self, item: T) -> bool {
        if self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedUnique<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut unique = Self::new();
        for item in iter {
            unique.push(item);
        }
        unique
    }
}
