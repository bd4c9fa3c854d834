use std::collections::HashSet;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::model::item::{Item, ItemId, ItemKind};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(ItemId),
    #[error("item text is empty after trimming")]
    EmptyText,
}

/// Ordered collection of to-do items.
///
/// Items keep insertion order: updates happen in place and deletes remove the
/// slot without reordering the rest. Ids come from a monotonic counter and are
/// never reused within a process.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: IndexMap<ItemId, Item>,
    next_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        ItemStore::default()
    }

    /// Add a new item at the end of the board.
    /// Rejects text that is empty after trimming; the caller treats that as a
    /// silent no-op, not a user-facing error.
    pub fn create(
        &mut self,
        text: &str,
        date: NaiveDate,
        priority: bool,
        kind: ItemKind,
    ) -> Result<ItemId, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items
            .insert(id, Item::new(id, text.to_string(), date, priority, kind));
        Ok(id)
    }

    /// Replace an item's fields in place, preserving its position and its
    /// `completed` flag. Empty trimmed text is rejected so the non-empty
    /// invariant holds across edits too.
    pub fn update(
        &mut self,
        id: ItemId,
        text: &str,
        date: NaiveDate,
        priority: bool,
        kind: ItemKind,
    ) -> Result<(), StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let item = self.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        item.text = text.to_string();
        item.date = date;
        item.priority = priority;
        item.kind = kind;
        Ok(())
    }

    /// Remove the item with the given id
    pub fn delete_one(&mut self, id: ItemId) -> Result<(), StoreError> {
        self.items
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// Remove every item whose id is in the set; returns the count removed.
    /// Removing zero items (empty set, or nothing matches) is a valid no-op.
    pub fn delete_many(&mut self, ids: &HashSet<ItemId>) -> usize {
        let before = self.items.len();
        self.items.retain(|id, _| !ids.contains(id));
        before - self.items.len()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Item at a board position (insertion order)
    pub fn nth(&self, index: usize) -> Option<&Item> {
        self.items.get_index(index).map(|(_, item)| item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn sample_store() -> ItemStore {
        let mut store = ItemStore::new();
        store
            .create("Wash car", day(1), false, ItemKind::None)
            .unwrap();
        store
            .create("Pay bills", day(2), true, ItemKind::Reminder)
            .unwrap();
        store
            .create("Call dentist", day(3), false, ItemKind::Alert)
            .unwrap();
        store
    }

    fn texts(store: &ItemStore) -> Vec<&str> {
        store.iter().map(|i| i.text.as_str()).collect()
    }

    // --- create ---

    #[test]
    fn create_rejects_empty_text() {
        let mut store = sample_store();
        let before = texts(&store)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        assert!(matches!(
            store.create("", day(1), false, ItemKind::None),
            Err(StoreError::EmptyText)
        ));
        assert!(matches!(
            store.create("   ", day(1), false, ItemKind::None),
            Err(StoreError::EmptyText)
        ));

        assert_eq!(store.len(), 3);
        assert_eq!(texts(&store), before);
    }

    #[test]
    fn create_with_defaults() {
        let mut store = ItemStore::new();
        let id = store
            .create("Buy milk", day(7), false, ItemKind::None)
            .unwrap();
        let item = store.get(id).unwrap();
        assert_eq!(item.text, "Buy milk");
        assert_eq!(item.date, day(7));
        assert!(!item.priority);
        assert_eq!(item.kind, ItemKind::None);
        assert!(!item.completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_assigns_unique_increasing_ids() {
        let mut store = ItemStore::new();
        let a = store.create("a", day(1), false, ItemKind::None).unwrap();
        let b = store.create("b", day(1), false, ItemKind::None).unwrap();
        store.delete_one(b).unwrap();
        let c = store.create("c", day(1), false, ItemKind::None).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn create_then_delete_round_trips() {
        let mut store = sample_store();
        let before = texts(&store)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let id = store
            .create("Transient", day(9), true, ItemKind::Tag)
            .unwrap();
        store.delete_one(id).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(texts(&store), before);
    }

    // --- update ---

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = sample_store();
        let id = store.nth(1).unwrap().id;

        store
            .update(id, "Pay bills online", day(5), false, ItemKind::Tag)
            .unwrap();

        let item = store.get(id).unwrap();
        assert_eq!(item.text, "Pay bills online");
        assert_eq!(item.date, day(5));
        assert!(!item.priority);
        assert_eq!(item.kind, ItemKind::Tag);
        // Position preserved
        assert_eq!(store.nth(1).unwrap().id, id);
    }

    #[test]
    fn update_is_idempotent() {
        let mut store = sample_store();
        let id = store.nth(0).unwrap().id;

        store
            .update(id, "Wax car", day(8), true, ItemKind::Reminder)
            .unwrap();
        let once = store.get(id).unwrap().clone();

        store
            .update(id, "Wax car", day(8), true, ItemKind::Reminder)
            .unwrap();
        assert_eq!(store.get(id).unwrap(), &once);
    }

    #[test]
    fn update_preserves_completed() {
        let mut store = sample_store();
        let id = store.nth(0).unwrap().id;
        store
            .update(id, "Wash car again", day(1), false, ItemKind::None)
            .unwrap();
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = sample_store();
        assert!(matches!(
            store.update(ItemId(999), "x", day(1), false, ItemKind::None),
            Err(StoreError::NotFound(_))
        ));
    }

    // --- delete ---

    #[test]
    fn delete_one_removes_the_slot() {
        let mut store = sample_store();
        let id = store.nth(1).unwrap().id;
        store.delete_one(id).unwrap();
        assert_eq!(texts(&store), vec!["Wash car", "Call dentist"]);
    }

    #[test]
    fn delete_one_missing_is_not_found() {
        let mut store = sample_store();
        assert!(matches!(
            store.delete_one(ItemId(999)),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn delete_many_removes_members_only() {
        let mut store = sample_store();
        let mut ids = HashSet::new();
        ids.insert(store.nth(0).unwrap().id);
        ids.insert(store.nth(2).unwrap().id);
        ids.insert(ItemId(999)); // not in store

        assert_eq!(store.delete_many(&ids), 2);
        assert_eq!(texts(&store), vec!["Pay bills"]);
    }

    #[test]
    fn delete_many_empty_set_is_noop() {
        let mut store = sample_store();
        assert_eq!(store.delete_many(&HashSet::new()), 0);
        assert_eq!(store.len(), 3);
    }
}
