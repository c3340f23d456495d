//! Section Logic
//!
//! Pure helpers for splitting items into folder partitions, bucketing the
//! chats list into Starred/Recents, ordering by recency, and tracking which
//! sections are expanded.

use chrono::{DateTime, Duration, Utc};

use crate::models::Item;

/// How far back the Recents section reaches.
const RECENTS_WINDOW_DAYS: i64 = 7;

/// Date-derived sections of the chats list. Recomputed every render, never
/// stored on the item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateCategory {
    Starred,
    Recents,
}

impl DateCategory {
    pub const ALL: [DateCategory; 2] = [DateCategory::Starred, DateCategory::Recents];

    /// Section header text
    pub fn label(&self) -> &'static str {
        match self {
            DateCategory::Starred => "Starred",
            DateCategory::Recents => "Recents",
        }
    }
}

/// Split items into (foldered, unfiled), both in input order.
pub fn partition_by_folder(items: &[Item]) -> (Vec<Item>, Vec<Item>) {
    items
        .iter()
        .cloned()
        .partition(|item| item.folder_id.is_some())
}

/// Whether an item belongs to a section.
///
/// Starred wins over Recents: a favorited item shows under Starred no matter
/// how old it is, and never duplicates into Recents. Items without any
/// usable timestamp never qualify for Recents.
pub fn qualifies(item: &Item, category: DateCategory, now: DateTime<Utc>) -> bool {
    match category {
        DateCategory::Starred => item.is_favorited,
        DateCategory::Recents => {
            if item.is_favorited {
                return false;
            }
            match item.effective_timestamp() {
                Some(ts) => ts >= now - Duration::days(RECENTS_WINDOW_DAYS),
                None => false,
            }
        }
    }
}

/// Stable descending sort by effective timestamp. Ties keep their relative
/// input order; items without a timestamp sort last.
pub fn sort_by_recency(items: &mut [Item]) {
    items.sort_by(|a, b| b.effective_timestamp().cmp(&a.effective_timestamp()));
}

/// One section's items, filtered and sorted for display.
pub fn section_items(items: &[Item], category: DateCategory, now: DateTime<Utc>) -> Vec<Item> {
    let mut out: Vec<Item> = items
        .iter()
        .filter(|item| qualifies(item, category, now))
        .cloned()
        .collect();
    sort_by_recency(&mut out);
    out
}

/// Expanded/collapsed state per section. Session-local, defaults to open.
#[derive(Clone, Copy, Debug)]
pub struct SectionVisibility {
    starred_open: bool,
    recents_open: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            starred_open: true,
            recents_open: true,
        }
    }
}

impl SectionVisibility {
    pub fn is_open(&self, category: DateCategory) -> bool {
        match category {
            DateCategory::Starred => self.starred_open,
            DateCategory::Recents => self.recents_open,
        }
    }

    pub fn toggle(&mut self, category: DateCategory) {
        match category {
            DateCategory::Starred => self.starred_open = !self.starred_open,
            DateCategory::Recents => self.recents_open = !self.recents_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn make_item(id: &str, folder_id: Option<&str>, favorited: bool, age_days: i64) -> Item {
        let now = Utc::now();
        Item {
            id: id.to_string(),
            name: format!("Item {}", id),
            folder_id: folder_id.map(|f| f.to_string()),
            is_favorited: favorited,
            updated_at: Some(now - Duration::days(age_days)),
            created_at: Some(now - Duration::days(age_days + 30)),
        }
    }

    fn make_undated(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: format!("Item {}", id),
            folder_id: None,
            is_favorited: false,
            updated_at: None,
            created_at: None,
        }
    }

    #[test]
    fn test_partition_disjoint_union() {
        let items = vec![
            make_item("a", Some("F1"), false, 0),
            make_item("b", None, false, 1),
            make_item("c", Some("F2"), true, 2),
            make_item("d", None, true, 3),
        ];

        let (with_folder, without_folder) = partition_by_folder(&items);

        assert_eq!(with_folder.len() + without_folder.len(), items.len());
        assert!(with_folder.iter().all(|i| i.folder_id.is_some()));
        assert!(without_folder.iter().all(|i| i.folder_id.is_none()));
        // input order preserved within each partition
        assert_eq!(with_folder[0].id, "a");
        assert_eq!(with_folder[1].id, "c");
        assert_eq!(without_folder[0].id, "b");
        assert_eq!(without_folder[1].id, "d");
    }

    #[test]
    fn test_starred_ignores_timestamps() {
        let now = Utc::now();
        let old_favorite = make_item("a", None, true, 400);

        assert!(qualifies(&old_favorite, DateCategory::Starred, now));
        assert!(!qualifies(&old_favorite, DateCategory::Recents, now));
    }

    #[test]
    fn test_recents_window() {
        let now = Utc::now();

        assert!(qualifies(&make_item("a", None, false, 2), DateCategory::Recents, now));
        assert!(!qualifies(&make_item("b", None, false, 10), DateCategory::Recents, now));
    }

    #[test]
    fn test_missing_timestamps_never_recent() {
        let now = Utc::now();
        let undated = make_undated("x");

        assert!(!qualifies(&undated, DateCategory::Recents, now));
        assert!(!qualifies(&undated, DateCategory::Starred, now));
    }

    #[test]
    fn test_sort_descending_and_idempotent() {
        let mut items = vec![
            make_item("old", None, false, 10),
            make_item("new", None, false, 0),
            make_undated("undated"),
            make_item("mid", None, false, 5),
        ];

        sort_by_recency(&mut items);
        let first_pass: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(first_pass, ["new", "mid", "old", "undated"]);

        sort_by_recency(&mut items);
        let second_pass: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let ts = Utc::now() - Duration::days(1);
        let tie = |id: &str| {
            let mut item = make_item(id, None, false, 0);
            item.updated_at = Some(ts);
            item.created_at = Some(ts);
            item
        };

        let mut items = vec![tie("first"), tie("second"), tie("third")];
        sort_by_recency(&mut items);

        let order: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_section_scenario() {
        // a: favorited now, b: plain 2 days old, c: plain 10 days old
        let now = Utc::now();
        let items = vec![
            make_item("a", None, true, 0),
            make_item("b", None, false, 2),
            make_item("c", None, false, 10),
        ];

        let starred = section_items(&items, DateCategory::Starred, now);
        let recents = section_items(&items, DateCategory::Recents, now);

        assert_eq!(starred.len(), 1);
        assert_eq!(starred[0].id, "a");
        assert_eq!(recents.len(), 1);
        assert_eq!(recents[0].id, "b");
    }

    #[test]
    fn test_section_items_sorted() {
        let now = Utc::now();
        let items = vec![
            make_item("older", None, false, 6),
            make_item("newer", None, false, 1),
        ];

        let recents = section_items(&items, DateCategory::Recents, now);
        let order: Vec<String> = recents.iter().map(|i| i.id.clone()).collect();
        assert_eq!(order, ["newer", "older"]);
    }

    #[test]
    fn test_visibility_defaults_open_and_toggles_independently() {
        let mut visibility = SectionVisibility::default();
        assert!(visibility.is_open(DateCategory::Starred));
        assert!(visibility.is_open(DateCategory::Recents));

        visibility.toggle(DateCategory::Starred);
        assert!(!visibility.is_open(DateCategory::Starred));
        assert!(visibility.is_open(DateCategory::Recents));

        visibility.toggle(DateCategory::Starred);
        assert!(visibility.is_open(DateCategory::Starred));
    }
}
