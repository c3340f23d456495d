//! Folder Group
//!
//! A folder header with the folder's items underneath. The whole subtree is
//! marked as a folder drop target, so drops landing here never clear the
//! dragged item's folder assignment. Filing into a folder on drop is not
//! wired up; only dragging out of a folder is.

use leptos::prelude::*;
use leptos_dnd::make_on_drag_start;

use crate::components::SidebarItemRow;
use crate::models::{ContentType, Folder, Item};

#[component]
pub fn FolderGroup(content_type: ContentType, folder: Folder, items: Vec<Item>) -> impl IntoView {
    view! {
        <div class="folder-group" data-folder-target="">
            <div class="folder-header">
                <span class="folder-icon">"📁"</span>
                <span class="folder-name">{folder.name.clone()}</span>
            </div>
            <div class="folder-items">
                {items
                    .into_iter()
                    .map(|item| {
                        let on_drag_start = make_on_drag_start(item.id.clone());
                        view! {
                            <div class="draggable-row" draggable="true" on:dragstart=on_drag_start>
                                <SidebarItemRow content_type item/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
