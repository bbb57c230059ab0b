use crate::dates::{parse_date_key, today, today_key};
use crate::errors::AppError;
use crate::models::{
    BackupImport, DashboardResponse, Entries, EntryRequest, ImportSummary, Mood, MoodRecord,
    Settings, normalize_tags,
};
use crate::quotes::quote_for;
use crate::snapshot::{month_layout, render};
use crate::state::AppState;
use crate::stats::{life_weeks, month_stats, streak, trend};
use crate::storage::{persist_entries, persist_settings};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::{Datelike, Local};
use serde::Deserialize;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data.settings))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    let now = today();
    let birth = parse_date_key(&data.settings.birth_date);

    Ok(Json(DashboardResponse {
        date: today_key(),
        today: data.entries.get(&today_key()).cloned(),
        streak: streak(&data.entries),
        month: month_stats(&data.entries, now.year(), now.month()),
        trend: trend(&data.entries),
        quote: quote_for(now),
        life: life_weeks(birth, 80),
    }))
}

pub async fn get_entries(State(state): State<AppState>) -> Json<Entries> {
    let data = state.data.lock().await;
    Json(data.entries.clone())
}

pub async fn put_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<MoodRecord>, AppError> {
    if parse_date_key(&date).is_none() {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }
    let Some(mood) = Mood::from_code(&payload.mood) else {
        return Err(AppError::bad_request("mood must be one of A-F"));
    };

    let record = MoodRecord {
        mood,
        note: payload.note,
        tags: normalize_tags(payload.tags),
        timestamp: Local::now().to_rfc3339(),
    };

    let mut data = state.data.lock().await;
    data.entries.insert(date, record.clone());
    persist_entries(&state.paths.entries, &data.entries).await?;

    Ok(Json(record))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let data = state.data.lock().await;
    Json(data.settings.clone())
}

pub async fn put_settings(
    State(state): State<AppState>,
    Json(settings): Json<Settings>,
) -> Result<Json<Settings>, AppError> {
    let mut data = state.data.lock().await;
    data.settings = settings;
    persist_settings(&state.paths.settings, &data.settings).await?;
    Ok(Json(data.settings.clone()))
}

pub async fn export_backup(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let payload = serde_json::to_string_pretty(&*data)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"mood_tracker_backup.json\"".to_string(),
            ),
        ],
        payload,
    ))
}

/// Wholesale replacement of whichever stores the backup carries. The payload
/// is parsed in full before any state is touched.
pub async fn import_backup(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportSummary>, AppError> {
    let backup: BackupImport = serde_json::from_str(&body)
        .map_err(|_| AppError::bad_request("invalid backup file"))?;
    if backup.entries.is_none() && backup.settings.is_none() {
        return Err(AppError::bad_request(
            "backup must contain 'entries' and/or 'settings'",
        ));
    }

    let mut data = state.data.lock().await;
    let mut summary = ImportSummary {
        entries_replaced: false,
        settings_replaced: false,
    };

    if let Some(entries) = backup.entries {
        data.entries = entries;
        persist_entries(&state.paths.entries, &data.entries).await?;
        summary.entries_replaced = true;
    }
    if let Some(settings) = backup.settings {
        data.settings = settings;
        persist_settings(&state.paths.settings, &data.settings).await?;
        summary.settings_replaced = true;
    }

    Ok(Json(summary))
}

#[derive(Debug, Deserialize)]
pub struct SnapshotQuery {
    #[serde(default)]
    pub legend: bool,
}

pub async fn get_snapshot(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<SnapshotQuery>,
) -> Result<impl IntoResponse, AppError> {
    let layout = {
        let data = state.data.lock().await;
        month_layout(
            &data.entries,
            year,
            month,
            &data.settings.user_name,
            data.settings.theme,
            query.legend,
        )
        .ok_or_else(|| AppError::bad_request("month must be a valid calendar month"))?
    };

    let png = render(&layout).map_err(AppError::internal)?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"stats-of-mind-{year:04}-{month:02}.png\""),
            ),
        ],
        png,
    ))
}
