//! Tauri Command Wrappers
//!
//! Frontend bindings for the sidebar's backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::{ContentType, Folder, Item};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ContentTypeArgs<'a> {
    #[serde(rename = "contentType")]
    content_type: &'a str,
}

#[derive(Serialize)]
struct UpdateFolderArgs<'a> {
    id: &'a str,
    #[serde(rename = "folderId")]
    folder_id: Option<&'a str>,
}

// ========================
// Commands
// ========================

pub async fn list_items(content_type: ContentType) -> Result<Vec<Item>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ContentTypeArgs {
        content_type: content_type.as_str(),
    })
    .map_err(|e| e.to_string())?;
    let result = invoke("list_items", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_folders(content_type: ContentType) -> Result<Vec<Folder>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ContentTypeArgs {
        content_type: content_type.as_str(),
    })
    .map_err(|e| e.to_string())?;
    let result = invoke("list_folders", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Move an item into (`Some`) or out of (`None`) a folder. Resolves to the
/// full updated record, including the new `folder_id`.
pub async fn update_item_folder(
    content_type: ContentType,
    id: &str,
    folder_id: Option<&str>,
) -> Result<Item, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&UpdateFolderArgs { id, folder_id }).map_err(|e| e.to_string())?;
    let result = invoke(content_type.update_command(), js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
