//! Item record and request/response shapes.

use serde::{Deserialize, Serialize};

/// Persisted item. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Body accepted by POST /items and PUT /items/:id.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub item: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedMessage {
    pub message: String,
}

impl DeletedMessage {
    pub fn for_item(item: &Item) -> Self {
        Self {
            message: format!("Deleted item {}", item.name),
        }
    }
}
