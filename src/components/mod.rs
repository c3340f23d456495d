//! UI Components

mod folder_group;
mod item_row;
mod sidebar_data_list;

pub use folder_group::*;
pub use item_row::*;
pub use sidebar_data_list::*;
