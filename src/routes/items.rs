//! Item routes: collection at /items, single resource at /items/:id.

use crate::handlers::items::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list).post(create))
        .route("/items/:id", put(update).delete(delete_handler))
        .with_state(state)
}
