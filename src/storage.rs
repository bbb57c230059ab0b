use crate::errors::AppError;
use crate::models::{Entries, Settings};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

/// The two persisted documents: the entry map and the settings.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub entries: PathBuf,
    pub settings: PathBuf,
}

pub fn resolve_storage_paths() -> StoragePaths {
    let entries = env::var("MOOD_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/entries.json"));
    let settings = env::var("MOOD_SETTINGS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/settings.json"));
    StoragePaths { entries, settings }
}

pub async fn load_entries(path: &Path) -> Entries {
    load_json(path, "entries").await
}

pub async fn load_settings(path: &Path) -> Settings {
    load_json(path, "settings").await
}

pub async fn persist_entries(path: &Path, entries: &Entries) -> Result<(), AppError> {
    persist_json(path, entries).await
}

pub async fn persist_settings(path: &Path, settings: &Settings) -> Result<(), AppError> {
    persist_json(path, settings).await
}

/// Missing or unreadable files degrade to the default value; the failure is
/// logged and never surfaced to the caller.
async fn load_json<T: DeserializeOwned + Default>(path: &Path, what: &str) -> T {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {what} file: {err}");
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {what} file: {err}");
            T::default()
        }
    }
}

async fn persist_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mood, MoodRecord};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("stats_of_mind_{name}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn entries_round_trip_through_disk() {
        let path = scratch_path("entries");
        let mut entries = Entries::new();
        entries.insert(
            "2024-03-10".to_string(),
            MoodRecord {
                mood: Mood::A,
                note: "dia bom".to_string(),
                tags: vec!["Lazer".to_string()],
                timestamp: "2024-03-10T20:00:00-03:00".to_string(),
            },
        );

        persist_entries(&path, &entries).await.unwrap();
        let loaded = load_entries(&path).await;
        let _ = fs::remove_file(&path).await;

        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let path = scratch_path("missing");
        assert!(load_entries(&path).await.is_empty());
        assert_eq!(load_settings(&path).await, Settings::default());
    }

    #[tokio::test]
    async fn corrupt_file_loads_defaults() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();
        let loaded = load_settings(&path).await;
        let _ = fs::remove_file(&path).await;
        assert_eq!(loaded, Settings::default());
    }
}
