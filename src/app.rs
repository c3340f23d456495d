//! Sidebar App
//!
//! Root component: provides the shared store, owns the active content-type
//! tab, and loads that tab's items and folders from the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::SidebarDataList;
use crate::models::ContentType;
use crate::store::{self, SidebarState, SidebarStore};

#[component]
pub fn App() -> impl IntoView {
    let sidebar_store: SidebarStore = Store::new(SidebarState::default());
    provide_context(sidebar_store);

    let (content_type, set_content_type) = signal(ContentType::Chats);

    // Load the active tab's items and folders
    Effect::new(move |_| {
        let active = content_type.get();
        spawn_local(async move {
            match commands::list_items(active).await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[App] Loaded {} {}", loaded.len(), active.as_str()).into(),
                    );
                    store::set_items(&sidebar_store, active, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[App] Failed to load {}: {}", active.as_str(), e).into(),
                    );
                }
            }
            match commands::list_folders(active).await {
                Ok(loaded) => store::set_folders(&sidebar_store, active, loaded),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[App] Failed to load {} folders: {}", active.as_str(), e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="sidebar">
            <div class="content-type-tabs">
                <For
                    each=|| ContentType::ALL
                    key=|ct| *ct
                    children=move |ct| {
                        let is_active = move || content_type.get() == ct;
                        view! {
                            <button
                                class="content-type-tab"
                                class:active=is_active
                                on:click=move |_| set_content_type.set(ct)
                            >
                                {ct.label()}
                            </button>
                        }
                    }
                />
            </div>
            {move || {
                let active = content_type.get();
                view! { <SidebarDataList content_type=active/> }
            }}
        </div>
    }
}
