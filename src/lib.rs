pub mod app;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod quotes;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_entries, load_settings, resolve_storage_paths};
