use chrono::NaiveDate;

/// Unique, insertion-orderable item identifier.
///
/// Assigned from a monotonic counter owned by the store, so two items created
/// in the same instant can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category kind attached to an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemKind {
    #[default]
    None,
    Reminder,
    Alert,
    Tag,
}

impl ItemKind {
    /// The lowercase label shown in the board and the detail form
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::None => "none",
            ItemKind::Reminder => "reminder",
            ItemKind::Alert => "alert",
            ItemKind::Tag => "tag",
        }
    }

    /// Parse a lowercase label into a kind
    pub fn from_label(s: &str) -> Option<ItemKind> {
        match s {
            "none" => Some(ItemKind::None),
            "reminder" => Some(ItemKind::Reminder),
            "alert" => Some(ItemKind::Alert),
            "tag" => Some(ItemKind::Tag),
            _ => None,
        }
    }

    /// Next kind in form cycling order
    pub fn next(self) -> ItemKind {
        match self {
            ItemKind::None => ItemKind::Reminder,
            ItemKind::Reminder => ItemKind::Alert,
            ItemKind::Alert => ItemKind::Tag,
            ItemKind::Tag => ItemKind::None,
        }
    }

    /// Previous kind in form cycling order
    pub fn prev(self) -> ItemKind {
        match self {
            ItemKind::None => ItemKind::Tag,
            ItemKind::Reminder => ItemKind::None,
            ItemKind::Alert => ItemKind::Reminder,
            ItemKind::Tag => ItemKind::Alert,
        }
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique id, immutable for the lifetime of the process
    pub id: ItemId,
    /// Display text; non-empty after trimming
    pub text: String,
    /// Calendar date the item is scheduled for
    pub date: NaiveDate,
    /// Priority flag (starred on the board)
    pub priority: bool,
    /// Category kind
    pub kind: ItemKind,
    /// Never flipped by any exposed operation; kept for interface fidelity
    pub completed: bool,
}

impl Item {
    /// Create a new item with `completed = false`
    pub fn new(id: ItemId, text: String, date: NaiveDate, priority: bool, kind: ItemKind) -> Self {
        Item {
            id,
            text,
            date,
            priority,
            kind,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_label_round_trip() {
        for kind in [
            ItemKind::None,
            ItemKind::Reminder,
            ItemKind::Alert,
            ItemKind::Tag,
        ] {
            assert_eq!(ItemKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ItemKind::from_label("urgent"), None);
    }

    #[test]
    fn kind_cycle_is_closed() {
        let mut kind = ItemKind::None;
        for _ in 0..4 {
            kind = kind.next();
        }
        assert_eq!(kind, ItemKind::None);

        assert_eq!(ItemKind::None.prev(), ItemKind::Tag);
        assert_eq!(ItemKind::Tag.next(), ItemKind::None);
        assert_eq!(ItemKind::Reminder.next().prev(), ItemKind::Reminder);
    }

    #[test]
    fn new_item_starts_uncompleted() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let item = Item::new(ItemId(1), "Buy milk".into(), date, false, ItemKind::None);
        assert!(!item.completed);
        assert_eq!(item.id, ItemId(1));
    }
}
