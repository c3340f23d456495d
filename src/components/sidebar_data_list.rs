//! Sidebar Data List Component
//!
//! Buckets, orders, and renders one content type's items: foldered items
//! grouped under their folders, unfiled chats split into Starred/Recents
//! sections, other content types as a flat list. Rows can be dragged out of
//! their folder; the drop issues a single backend write and a by-id store
//! update once it resolves.

use chrono::Utc;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dnd::{
    create_drag_signals, make_on_drag_enter, make_on_drag_leave, make_on_drag_over,
    make_on_drag_start, make_on_drop,
};

use crate::commands;
use crate::components::{FolderGroup, SidebarItemRow};
use crate::models::{ContentType, Item};
use crate::reassign::{self, ReassignOutcome};
use crate::sections::{partition_by_folder, section_items, DateCategory, SectionVisibility};
use crate::store::{self, use_sidebar_store};

#[component]
pub fn SidebarDataList(content_type: ContentType) -> impl IntoView {
    let sidebar_store = use_sidebar_store();

    let list_ref = NodeRef::<html::Div>::new();
    let (is_overflowing, set_is_overflowing) = signal(false);
    let (visibility, set_visibility) = signal(SectionVisibility::default());
    let (reassign_error, set_reassign_error) = signal(None::<String>);

    let dnd = create_drag_signals();

    let items = move || store::items_for(&sidebar_store, content_type);

    // Re-measure the scrollbar reservation whenever the item set changes
    Effect::new(move |_| {
        let _ = items();
        if let Some(div) = list_ref.get() {
            set_is_overflowing.set(div.scroll_height() > div.client_height());
        }
    });

    // A drop outside any folder target clears the folder assignment. The
    // list keeps showing the old assignment until the write resolves.
    let on_unfile = move |item_id: String| {
        spawn_local(async move {
            let known = store::items_for_untracked(&sidebar_store, content_type);
            let outcome =
                reassign::update_folder(&known, &item_id, None, |id, folder_id| async move {
                    commands::update_item_folder(content_type, &id, folder_id.as_deref()).await
                })
                .await;

            match &outcome {
                ReassignOutcome::Updated(updated) => {
                    store::replace_item(&sidebar_store, content_type, updated);
                }
                ReassignOutcome::NotFound => {
                    web_sys::console::warn_1(
                        &format!(
                            "[SidebarDataList] Dragged id {} is not in the {} list",
                            item_id,
                            content_type.as_str()
                        )
                        .into(),
                    );
                }
                ReassignOutcome::WriteFailed(e) => {
                    web_sys::console::error_1(
                        &format!("[SidebarDataList] Folder update failed: {}", e).into(),
                    );
                }
            }
            set_reassign_error.set(reassign::feedback_message(&outcome));
        });
    };

    let handle_drop = make_on_drop(dnd, on_unfile);
    let handle_drag_enter = make_on_drag_enter(dnd);
    let handle_drag_leave = make_on_drag_leave(dnd);
    let handle_drag_over = make_on_drag_over();

    let draggable_row = move |item: Item| {
        let on_drag_start = make_on_drag_start(item.id.clone());
        view! {
            <div class="draggable-row" draggable="true" on:dragstart=on_drag_start>
                <SidebarItemRow content_type item/>
            </div>
        }
    };

    // One Starred/Recents section of the chats list
    let section_view = {
        let handle_drop = handle_drop.clone();
        move |category: DateCategory| {
            let handle_drop = handle_drop.clone();
            let sorted = Signal::derive(move || {
                let (_, without_folder) = partition_by_folder(&items());
                section_items(&without_folder, category, Utc::now())
            });
            let is_open = move || visibility.get().is_open(category);

            view! {
                <div class="list-section">
                    <div
                        class="section-header"
                        on:click=move |_| set_visibility.update(|v| v.toggle(category))
                    >
                        <span class="section-chevron" class:open=is_open>"▾"</span>
                        {category.label()}
                    </div>
                    <Show when=is_open>
                        <div
                            class="section-body"
                            class:drag-over=move || dnd.drag_over_read.get()
                            on:dragenter=handle_drag_enter
                            on:dragleave=handle_drag_leave
                            on:dragover=handle_drag_over
                            on:drop=handle_drop.clone()
                        >
                            <Show when=move || sorted.get().is_empty()>
                                <div class="empty-section">
                                    "No " {category.label().to_lowercase()} " items."
                                </div>
                            </Show>
                            <For
                                each=move || sorted.get()
                                key=|item| item.id.clone()
                                children=draggable_row
                            />
                        </div>
                    </Show>
                </div>
            }
        }
    };

    let list_body = if content_type == ContentType::Chats {
        DateCategory::ALL
            .into_iter()
            .map(section_view)
            .collect_view()
            .into_any()
    } else {
        let handle_drop = handle_drop.clone();
        view! {
            <div
                class="flat-list"
                class:drag-over=move || dnd.drag_over_read.get()
                on:dragenter=handle_drag_enter
                on:dragleave=handle_drag_leave
                on:dragover=handle_drag_over
                on:drop=handle_drop
            >
                <For
                    each=move || partition_by_folder(&items()).1
                    key=|item| item.id.clone()
                    children=draggable_row
                />
            </div>
        }
        .into_any()
    };

    let folder_groups = move || {
        let (with_folder, _) = partition_by_folder(&items());
        store::folders_for(&sidebar_store, content_type)
            .into_iter()
            .map(|folder| {
                let folder_items: Vec<Item> = with_folder
                    .iter()
                    .filter(|item| item.folder_id.as_deref() == Some(folder.id.as_str()))
                    .cloned()
                    .collect();
                view! { <FolderGroup content_type folder items=folder_items/> }
            })
            .collect_view()
    };

    view! {
        <div
            node_ref=list_ref
            class="sidebar-data-list"
            class:scrollbar-gutter=move || is_overflowing.get()
            on:dragover=handle_drag_over
            on:drop=handle_drop
        >
            <Show when=move || items().is_empty()>
                <div class="empty-list">"No " {content_type.as_str()} "."</div>
            </Show>

            {folder_groups}
            {list_body}

            <Show when=move || reassign_error.get().is_some()>
                <div class="reassign-error">
                    {move || reassign_error.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
