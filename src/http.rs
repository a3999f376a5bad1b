use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{entries, get_config, search, Ctx};

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    Router::new()
        .route("/api/config", get(get_config))
        .route("/api/suggest", get(search::suggest))
        .route("/api/prompt", get(entries::get_prompt))
        .route("/api/entries", get(entries::get_entries))
        .route("/api/entries", post(entries::insert_entry))
        .route("/api/entries/{label}", get(entries::get_entry))
        .with_state(ctx)
}
