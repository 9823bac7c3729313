//! HTTP handlers for the item resource.

pub mod items;
pub use items::*;
