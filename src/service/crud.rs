//! Item CRUD over the injected store and event sink.

use crate::error::AppError;
use crate::model::{DeletedMessage, Item, ItemPayload};
use crate::service::validation::ItemName;
use crate::state::AppState;

pub struct ItemService;

impl ItemService {
    /// Every item, id ascending.
    pub async fn list(state: &AppState) -> Result<Vec<Item>, AppError> {
        let items = state.store.list().await?;
        Ok(items)
    }

    pub async fn create(state: &AppState, payload: ItemPayload) -> Result<Item, AppError> {
        let name = ItemName::for_create(payload.item)?;
        let item = state.store.insert(name.as_str()).await.map_err(|e| {
            tracing::error!(error = %e, "database error during create");
            AppError::Storage(e)
        })?;
        tracing::debug!(id = item.id, "item created");
        Ok(item)
    }

    /// Existence is checked first: an unknown id is a 404 whatever the body holds, so a
    /// body that failed to parse is only reported once the row is known to exist.
    pub async fn update(
        state: &AppState,
        id: i64,
        payload: Result<ItemPayload, AppError>,
    ) -> Result<Item, AppError> {
        let existing = state.store.get(id).await.map_err(|e| {
            tracing::error!(error = %e, id, "database error during lookup");
            AppError::Storage(e)
        })?;
        if existing.is_none() {
            return Err(AppError::item_not_found());
        }
        let name = ItemName::for_update(payload?.item)?;
        let renamed = state.store.rename(id, name.as_str()).await.map_err(|e| {
            tracing::error!(error = %e, id, "database error during update");
            AppError::Storage(e)
        })?;
        // The row can vanish between lookup and write when a delete races us.
        renamed.ok_or_else(AppError::item_not_found)
    }

    pub async fn delete(state: &AppState, id: i64) -> Result<DeletedMessage, AppError> {
        match state.store.remove(id).await {
            Ok(Some(item)) => {
                state.events.info(&format!("Deleted item with ID {}", id));
                Ok(DeletedMessage::for_item(&item))
            }
            Ok(None) => {
                state
                    .events
                    .warn(&format!("Attempted to delete non-existent item with ID {}", id));
                Err(AppError::item_not_found())
            }
            Err(e) => {
                state.events.error(&format!("Database error during deletion: {}", e));
                Err(AppError::Storage(e))
            }
        }
    }
}
