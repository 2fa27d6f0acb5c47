// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration storage: values kept in mount order behind never-reused keys.

use alloc::vec::Vec;

/// Serial number of a registration.
///
/// Serials increase monotonically and are never handed out twice, so a key
/// held past its removal can never refer to a newer entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub(crate) struct SlotKey(u64);

/// Mount-ordered registrations.
///
/// Entries stay sorted by key because keys are issued in increasing order and
/// removal preserves relative order. Lookups are binary searches.
#[derive(Clone, Debug)]
pub(crate) struct Slots<T> {
    entries: Vec<(SlotKey, T)>,
    next: u64,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slots<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next: 0,
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> SlotKey {
        let key = SlotKey(self.next);
        self.next += 1;
        self.entries.push((key, value));
        key
    }

    pub(crate) fn remove(&mut self, key: SlotKey) -> Option<T> {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).1)
    }

    pub(crate) fn get(&self, key: SlotKey) -> Option<&T> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    pub(crate) fn get_mut(&mut self, key: SlotKey) -> Option<&mut T> {
        self.position(key).map(|idx| &mut self.entries[idx].1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Values in mount order (oldest first).
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (SlotKey, &T)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Mutable values in mount order (oldest first).
    pub(crate) fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    fn position(&self, key: SlotKey) -> Option<usize> {
        self.entries.binary_search_by_key(&key, |(k, _)| *k).ok()
    }
}
