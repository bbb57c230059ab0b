use crate::models::AppData;
use crate::storage::StoragePaths;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The single logical actor: every handler locks, reads or mutates, persists,
/// releases. Entry and settings mutations are whole-document replacements.
#[derive(Clone)]
pub struct AppState {
    pub paths: StoragePaths,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(paths: StoragePaths, data: AppData) -> Self {
        Self {
            paths,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
