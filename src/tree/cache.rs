//! Item cache: completed items keyed by path, in insertion order

use crate::types::{Fingerprint, Item, ItemKind};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Memoization store for one traversal.
///
/// Holds only completed items. Each path is inserted at most once and never
/// evicted; iteration follows insertion order, which for a depth-first
/// build means every child precedes its parent folder.
#[derive(Debug, Default, Clone)]
pub struct ItemCache {
    items: Vec<Item>,
    index: HashMap<PathBuf, usize>,
}

impl ItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` has a completed item.
    ///
    /// A cached empty folder has an empty fingerprint, so presence must be
    /// asked explicitly rather than inferred from the fingerprint.
    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    pub fn get(&self, path: &Path) -> Option<&Item> {
        self.index.get(path).map(|&pos| &self.items[pos])
    }

    pub fn fingerprint_of(&self, path: &Path) -> Option<&Fingerprint> {
        self.get(path).map(|item| &item.fingerprint)
    }

    /// Insertion position of `path`, if cached.
    pub(crate) fn position(&self, path: &Path) -> Option<usize> {
        self.index.get(path).copied()
    }

    pub(crate) fn at(&self, position: usize) -> &Item {
        &self.items[position]
    }

    /// Store a completed item and return its insertion position.
    ///
    /// If the path is already cached the existing item is kept.
    pub fn insert(&mut self, item: Item) -> usize {
        if let Some(&pos) = self.index.get(&item.path) {
            return pos;
        }
        let pos = self.items.len();
        self.index.insert(item.path.clone(), pos);
        self.items.push(item);
        pos
    }

    /// Items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_kind(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a ItemCache {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
