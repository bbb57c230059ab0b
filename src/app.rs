use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/entries", get(handlers::get_entries))
        .route("/api/entries/:date", put(handlers::put_entry))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        .route("/api/export", get(handlers::export_backup))
        .route("/api/import", post(handlers::import_backup))
        .route("/api/snapshot/:year/:month", get(handlers::get_snapshot))
        .with_state(state)
}
