//! Sidebar Item Row
//!
//! Row presentation for one listed item, dispatched on content type.

use leptos::prelude::*;

use crate::models::{ContentType, Item};

#[component]
pub fn SidebarItemRow(content_type: ContentType, item: Item) -> impl IntoView {
    let icon = match content_type {
        ContentType::Chats => "💬",
        ContentType::Presets => "🎛️",
        ContentType::Prompts => "📝",
        ContentType::Files => "📄",
        ContentType::Collections => "🗂️",
        ContentType::Assistants => "🤖",
        ContentType::Tools => "🔧",
        ContentType::Models => "🧠",
    };
    let name = item.name.clone();
    let starred = content_type == ContentType::Chats && item.is_favorited;

    view! {
        <div class="sidebar-item-row">
            <span class="item-icon">{icon}</span>
            <span class="item-name" title=name.clone()>{name.clone()}</span>
            {if starred {
                view! { <span class="item-star">"★"</span> }.into_any()
            } else {
                view! { <span></span> }.into_any()
            }}
        </div>
    }
}
