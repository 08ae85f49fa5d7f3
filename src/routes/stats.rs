use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Outcome, StatRow};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecordRequest {
    pub gamertag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordParams {
    pub gamertag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub code: u8,
    pub message: &'static str,
    pub name: String,
    #[serde(rename = "totalVictories")]
    pub total_victories: i64,
    #[serde(rename = "totalDefeats")]
    pub total_defeats: i64,
}

/// Fetch the statistics row for a user id
///
/// Returns 404 when the user has no row yet (no outcome ever recorded).
pub async fn get_stat(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<Json<StatRow>> {
    let row = db::stats::fetch_for_user(&state.pool, id_user)
        .await?
        .ok_or(AppError::StatsNotFound)?;

    Ok(Json(row))
}

/// Record a victory for the gamertag in the request
pub async fn record_victory(
    State(state): State<AppState>,
    Query(params): Query<RecordParams>,
    payload: Option<Json<RecordRequest>>,
) -> Result<Json<RecordResponse>> {
    let gamertag = extract_gamertag(payload.map(|Json(p)| p), params)?;
    record_outcome(&state, gamertag, Outcome::Victory).await
}

/// Record a defeat for the gamertag in the request
pub async fn record_defeat(
    State(state): State<AppState>,
    Query(params): Query<RecordParams>,
    payload: Option<Json<RecordRequest>>,
) -> Result<Json<RecordResponse>> {
    let gamertag = extract_gamertag(payload.map(|Json(p)| p), params)?;
    record_outcome(&state, gamertag, Outcome::Defeat).await
}

/// Pull the gamertag out of the request
///
/// The JSON body field wins; a `?gamertag=` query parameter is the only
/// fallback. Anything else (no body, empty string, unrelated params) is
/// a MissingGamertag.
fn extract_gamertag(body: Option<RecordRequest>, params: RecordParams) -> Result<String> {
    let candidate = body.and_then(|p| p.gamertag).or(params.gamertag);

    match candidate {
        Some(tag) if !tag.is_empty() => Ok(tag),
        _ => Err(AppError::MissingGamertag),
    }
}

/// Resolve the gamertag and apply the outcome, returning updated totals
async fn record_outcome(
    state: &AppState,
    gamertag: String,
    outcome: Outcome,
) -> Result<Json<RecordResponse>> {
    let user = db::users::find_by_gamertag(&state.pool, &gamertag)
        .await
        .map_err(|source| AppError::RecordFailed { outcome, source })?
        .ok_or_else(|| {
            tracing::warn!("Record attempt for unknown gamertag: {}", gamertag);
            AppError::UserNotFound
        })?;

    let updated = db::stats::record_outcome(&state.pool, user.id, outcome)
        .await
        .map_err(|source| AppError::RecordFailed { outcome, source })?;

    tracing::info!(
        "Recorded {} for {}: {} victories, {} defeats",
        outcome,
        user.gamertag,
        updated.victories,
        updated.defeats
    );

    Ok(Json(RecordResponse {
        code: 1,
        message: outcome.recorded_message(),
        name: gamertag,
        total_victories: updated.victories,
        total_defeats: updated.defeats,
    }))
}
