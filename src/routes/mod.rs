//! Router assembly.

mod common;
mod items;

pub use common::common_routes;
pub use items::item_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: common routes plus the item resource, with HTTP tracing. The body limit is
/// enforced by the JSON extractor, so oversized payloads surface as a JSON 413 from the handler.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(item_routes(state))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
