//! Sync, served from the preview product.

pub mod sync_list;
pub mod sync_list_item;
pub mod sync_map;
