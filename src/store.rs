//! Shared Sidebar Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: one item list
//! per content type plus the active tab's folders, provided via context.
//! All access goes through typed helpers keyed by [`ContentType`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ContentType, Folder, Item};
use crate::reassign;

/// Shared sidebar state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SidebarState {
    pub chats: Vec<Item>,
    pub presets: Vec<Item>,
    pub prompts: Vec<Item>,
    pub files: Vec<Item>,
    pub collections: Vec<Item>,
    pub assistants: Vec<Item>,
    pub tools: Vec<Item>,
    pub models: Vec<Item>,
    pub chat_folders: Vec<Folder>,
    pub preset_folders: Vec<Folder>,
    pub prompt_folders: Vec<Folder>,
    pub file_folders: Vec<Folder>,
    pub collection_folders: Vec<Folder>,
    pub assistant_folders: Vec<Folder>,
    pub tool_folders: Vec<Folder>,
    pub model_folders: Vec<Folder>,
}

/// Type alias for the store
pub type SidebarStore = Store<SidebarState>;

/// Get the sidebar store from context
pub fn use_sidebar_store() -> SidebarStore {
    expect_context::<SidebarStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current items of one content type (reactive read)
pub fn items_for(store: &SidebarStore, content_type: ContentType) -> Vec<Item> {
    match content_type {
        ContentType::Chats => store.chats().get(),
        ContentType::Presets => store.presets().get(),
        ContentType::Prompts => store.prompts().get(),
        ContentType::Files => store.files().get(),
        ContentType::Collections => store.collections().get(),
        ContentType::Assistants => store.assistants().get(),
        ContentType::Tools => store.tools().get(),
        ContentType::Models => store.models().get(),
    }
}

/// Current items of one content type without reactive tracking (for async
/// handlers outside the reactive graph)
pub fn items_for_untracked(store: &SidebarStore, content_type: ContentType) -> Vec<Item> {
    match content_type {
        ContentType::Chats => store.chats().get_untracked(),
        ContentType::Presets => store.presets().get_untracked(),
        ContentType::Prompts => store.prompts().get_untracked(),
        ContentType::Files => store.files().get_untracked(),
        ContentType::Collections => store.collections().get_untracked(),
        ContentType::Assistants => store.assistants().get_untracked(),
        ContentType::Tools => store.tools().get_untracked(),
        ContentType::Models => store.models().get_untracked(),
    }
}

/// Replace one content type's item list wholesale
pub fn set_items(store: &SidebarStore, content_type: ContentType, items: Vec<Item>) {
    match content_type {
        ContentType::Chats => store.chats().set(items),
        ContentType::Presets => store.presets().set(items),
        ContentType::Prompts => store.prompts().set(items),
        ContentType::Files => store.files().set(items),
        ContentType::Collections => store.collections().set(items),
        ContentType::Assistants => store.assistants().set(items),
        ContentType::Tools => store.tools().set(items),
        ContentType::Models => store.models().set(items),
    }
}

/// Replace one item by id, leaving the rest of the list untouched
pub fn replace_item(store: &SidebarStore, content_type: ContentType, updated: &Item) -> bool {
    match content_type {
        ContentType::Chats => reassign::replace_item(&mut store.chats().write(), updated),
        ContentType::Presets => reassign::replace_item(&mut store.presets().write(), updated),
        ContentType::Prompts => reassign::replace_item(&mut store.prompts().write(), updated),
        ContentType::Files => reassign::replace_item(&mut store.files().write(), updated),
        ContentType::Collections => reassign::replace_item(&mut store.collections().write(), updated),
        ContentType::Assistants => reassign::replace_item(&mut store.assistants().write(), updated),
        ContentType::Tools => reassign::replace_item(&mut store.tools().write(), updated),
        ContentType::Models => reassign::replace_item(&mut store.models().write(), updated),
    }
}

/// Current folders of one content type (reactive read)
pub fn folders_for(store: &SidebarStore, content_type: ContentType) -> Vec<Folder> {
    match content_type {
        ContentType::Chats => store.chat_folders().get(),
        ContentType::Presets => store.preset_folders().get(),
        ContentType::Prompts => store.prompt_folders().get(),
        ContentType::Files => store.file_folders().get(),
        ContentType::Collections => store.collection_folders().get(),
        ContentType::Assistants => store.assistant_folders().get(),
        ContentType::Tools => store.tool_folders().get(),
        ContentType::Models => store.model_folders().get(),
    }
}

/// Replace one content type's folder list wholesale
pub fn set_folders(store: &SidebarStore, content_type: ContentType, folders: Vec<Folder>) {
    match content_type {
        ContentType::Chats => store.chat_folders().set(folders),
        ContentType::Presets => store.preset_folders().set(folders),
        ContentType::Prompts => store.prompt_folders().set(folders),
        ContentType::Files => store.file_folders().set(folders),
        ContentType::Collections => store.collection_folders().set(folders),
        ContentType::Assistants => store.assistant_folders().set(folders),
        ContentType::Tools => store.tool_folders().set(folders),
        ContentType::Models => store.model_folders().set(folders),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: format!("Item {}", id),
            folder_id: None,
            is_favorited: false,
            updated_at: None,
            created_at: None,
        }
    }

    fn make_folder(id: &str) -> Folder {
        Folder {
            id: id.to_string(),
            name: format!("Folder {}", id),
        }
    }

    #[test]
    fn test_folders_kept_per_content_type() {
        let store: SidebarStore = Store::new(SidebarState::default());

        set_folders(&store, ContentType::Chats, vec![make_folder("F1")]);
        set_folders(&store, ContentType::Prompts, vec![make_folder("F2")]);

        let chat_folders = folders_for(&store, ContentType::Chats);
        let prompt_folders = folders_for(&store, ContentType::Prompts);
        assert_eq!(chat_folders.len(), 1);
        assert_eq!(chat_folders[0].id, "F1");
        assert_eq!(prompt_folders.len(), 1);
        assert_eq!(prompt_folders[0].id, "F2");

        // reloading one type never clobbers another
        set_folders(&store, ContentType::Prompts, vec![]);
        assert_eq!(folders_for(&store, ContentType::Chats).len(), 1);
        assert!(folders_for(&store, ContentType::Files).is_empty());
    }

    #[test]
    fn test_replace_item_only_touches_its_content_type() {
        let store: SidebarStore = Store::new(SidebarState::default());

        set_items(&store, ContentType::Chats, vec![make_item("a")]);
        set_items(&store, ContentType::Files, vec![make_item("a")]);

        let mut updated = make_item("a");
        updated.name = "Renamed".to_string();
        assert!(replace_item(&store, ContentType::Chats, &updated));

        assert_eq!(items_for(&store, ContentType::Chats)[0].name, "Renamed");
        assert_eq!(items_for(&store, ContentType::Files)[0].name, "Item a");
    }
}
