//! Request handlers: thin adapters between HTTP and the pure engine.

use axum::Json;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use wellness_core::aggregate::{self, ProgressStats};
use wellness_core::charts::{self, ChartBundle};
use wellness_core::sort::{SortDirection, SortKey, sorted_entries};
use wellness_core::{JournalRow, NutritionEntry, SettingsSnapshot, export, sanitize, tags};

use crate::error::ApiError;

pub async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(snapshot))]
pub async fn progress_stats(Json(snapshot): Json<SettingsSnapshot>) -> Json<ProgressStats> {
    Json(aggregate::progress_stats(&snapshot))
}

#[instrument(skip(snapshot))]
pub async fn progress_charts(Json(snapshot): Json<SettingsSnapshot>) -> Json<ChartBundle> {
    Json(charts::chart_bundle(&snapshot))
}

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub key: Option<String>,
    pub direction: Option<String>,
}

/// Sort nutrition rows by the requested column. Defaults to the table's
/// initial view: date, most recent first.
#[instrument(skip(entries))]
pub async fn nutrition_sorted(
    Query(params): Query<SortParams>,
    Json(entries): Json<Vec<NutritionEntry>>,
) -> Result<Json<Vec<NutritionEntry>>, ApiError> {
    let key = match params.key.as_deref() {
        Some(raw) => raw.parse::<SortKey>()?,
        None => SortKey::Date,
    };
    let direction = match params.direction.as_deref() {
        Some(raw) => raw.parse::<SortDirection>()?,
        None => SortDirection::Descending,
    };
    Ok(Json(sorted_entries(&entries, key, direction)))
}

/// Encode the journal history as a downloadable CSV. An empty history
/// yields 204 so the caller suppresses the download.
#[instrument(skip(rows))]
pub async fn journal_export(Json(rows): Json<Vec<JournalRow>>) -> Response {
    match export::journal_csv(&rows) {
        None => StatusCode::NO_CONTENT.into_response(),
        Some(csv) => {
            let filename = export::export_filename(chrono::Utc::now());
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                csv,
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PrepareRequest {
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Serialize)]
pub struct PrepareResponse {
    pub journal: String,
    pub tags: Vec<String>,
}

/// Write-path half of the sanitizer/tag-parser pair: escape the journal
/// text and tokenize the tag input before they are persisted.
#[instrument(skip(req))]
pub async fn journal_prepare(Json(req): Json<PrepareRequest>) -> Json<PrepareResponse> {
    Json(PrepareResponse {
        journal: sanitize::escape_markup(&req.journal),
        tags: tags::parse_tags(&req.tags),
    })
}
