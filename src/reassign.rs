//! Folder Reassignment
//!
//! Moves an item into or out of a folder: one persistence write per drop,
//! then a by-id replacement in the shared item set. There is no optimistic
//! update; the list keeps showing the previous assignment until the write
//! resolves.

use std::future::Future;

use crate::models::Item;

/// What became of a reassignment request.
#[derive(Debug, Clone, PartialEq)]
pub enum ReassignOutcome {
    /// The backend accepted the write; carries the full updated record.
    Updated(Item),
    /// The dragged id is not in the current item set; nothing was written.
    NotFound,
    /// The backend rejected the write; the item set was left untouched.
    WriteFailed(String),
}

/// Run one reassignment against `update`, the content type's persistence
/// updater. The updater receives the item id and the new folder id and must
/// resolve to the full updated record.
pub async fn update_folder<F, Fut>(
    items: &[Item],
    item_id: &str,
    folder_id: Option<String>,
    update: F,
) -> ReassignOutcome
where
    F: FnOnce(String, Option<String>) -> Fut,
    Fut: Future<Output = Result<Item, String>>,
{
    if !items.iter().any(|item| item.id == item_id) {
        return ReassignOutcome::NotFound;
    }

    match update(item_id.to_string(), folder_id).await {
        Ok(updated) => ReassignOutcome::Updated(updated),
        Err(e) => ReassignOutcome::WriteFailed(e),
    }
}

/// User-facing notice for a finished reassignment. `None` clears any notice
/// left by an earlier failed gesture.
pub fn feedback_message(outcome: &ReassignOutcome) -> Option<String> {
    match outcome {
        ReassignOutcome::WriteFailed(e) => Some(format!("Could not move item: {}", e)),
        ReassignOutcome::Updated(_) | ReassignOutcome::NotFound => None,
    }
}

/// Replace the item matching `updated.id`, leaving every other element and
/// the overall order untouched. Returns whether a replacement happened.
pub fn replace_item(items: &mut [Item], updated: &Item) -> bool {
    match items.iter_mut().find(|item| item.id == updated.id) {
        Some(slot) => {
            *slot = updated.clone();
            true
        }
        None => false,
    }
}
