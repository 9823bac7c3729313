//! Item service: CRUD REST endpoints for a single `items` table.

pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use events::{EventSink, TracingSink};
pub use model::{DeletedMessage, Item, ItemPayload};
pub use routes::{app, common_routes, item_routes};
pub use service::ItemService;
pub use state::AppState;
pub use store::{ensure_items_table, ItemStore, SqliteItemStore};
