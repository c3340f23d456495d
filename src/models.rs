//! Sidebar Models
//!
//! Data structures matching backend records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories of listed entities, one sidebar tab each.
///
/// Selects which backend command and which store list apply; every dispatch
/// on it is an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Chats,
    Presets,
    Prompts,
    Files,
    Collections,
    Assistants,
    Tools,
    Models,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::Chats,
        ContentType::Presets,
        ContentType::Prompts,
        ContentType::Files,
        ContentType::Collections,
        ContentType::Assistants,
        ContentType::Tools,
        ContentType::Models,
    ];

    /// Plural lowercase name, as the backend knows it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Chats => "chats",
            ContentType::Presets => "presets",
            ContentType::Prompts => "prompts",
            ContentType::Files => "files",
            ContentType::Collections => "collections",
            ContentType::Assistants => "assistants",
            ContentType::Tools => "tools",
            ContentType::Models => "models",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Chats => "Chats",
            ContentType::Presets => "Presets",
            ContentType::Prompts => "Prompts",
            ContentType::Files => "Files",
            ContentType::Collections => "Collections",
            ContentType::Assistants => "Assistants",
            ContentType::Tools => "Tools",
            ContentType::Models => "Models",
        }
    }

    /// Backend command updating one record of this type by id.
    pub fn update_command(&self) -> &'static str {
        match self {
            ContentType::Chats => "update_chat",
            ContentType::Presets => "update_preset",
            ContentType::Prompts => "update_prompt",
            ContentType::Files => "update_file",
            ContentType::Collections => "update_collection",
            ContentType::Assistants => "update_assistant",
            ContentType::Tools => "update_tool",
            ContentType::Models => "update_model",
        }
    }
}

/// One listed entity. Matches the backend record for its content type;
/// type-specific fields stay on the backend, the sidebar only carries what
/// grouping and display need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    /// Only meaningful for chats (Starred section)
    #[serde(default, rename = "isFavorited")]
    pub is_favorited: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    /// `updated_at` when present, else `created_at`. `None` when the record
    /// carries no usable timestamp at all.
    pub fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

/// Folder grouping items of one content type. The sidebar reads folders,
/// it never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_item(updated_at: Option<DateTime<Utc>>, created_at: Option<DateTime<Utc>>) -> Item {
        Item {
            id: "a".to_string(),
            name: "Item a".to_string(),
            folder_id: None,
            is_favorited: false,
            updated_at,
            created_at,
        }
    }

    #[test]
    fn test_effective_timestamp_prefers_updated_at() {
        let updated = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let item = make_item(Some(updated), Some(created));
        assert_eq!(item.effective_timestamp(), Some(updated));
    }

    #[test]
    fn test_effective_timestamp_falls_back_to_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            make_item(None, Some(created)).effective_timestamp(),
            Some(created)
        );
        assert_eq!(make_item(None, None).effective_timestamp(), None);
    }
}
