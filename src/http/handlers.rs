//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for the actual prediction and analytics work. The reference "today"
//! is captured once per request so day, week, and analytics responses stay
//! internally consistent.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use super::dto::{
    BestSlotResponse, HealthResponse, PredictionQuery, TempleInfo, TempleListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{AnalyticsSnapshot, DayPrediction, TempleId, WeekPrediction};
use crate::db::repository::RepositoryError;
use crate::models::temple::resolve_temple_type;
use crate::models::time::iso_date;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Parse a YYYY-MM-DD query value, defaulting to today (UTC).
fn resolve_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| AppError::BadRequest(format!("Invalid date '{}': {}", s, e))),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Resolve the temple category for an id, preferring the roster's declared
/// type. Unknown ids are not an error: predictions degrade to the generic
/// category, mirroring the frontend's fallback path for missing data.
async fn resolve_kind(state: &AppState, temple_id: &str) -> Result<String, AppError> {
    let declared = match state.repository.get_temple(&TempleId::new(temple_id)).await {
        Ok(temple) => temple.kind,
        Err(RepositoryError::NotFound(_)) => None,
        Err(e) => return Err(e.into()),
    };

    Ok(resolve_temple_type(temple_id, declared.as_deref()))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the roster
/// repository is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Temple Roster
// =============================================================================

/// GET /v1/temples
///
/// List the temple roster.
pub async fn list_temples(State(state): State<AppState>) -> HandlerResult<TempleListResponse> {
    let temples = state.repository.list_temples().await?;

    let infos: Vec<TempleInfo> = temples.into_iter().map(Into::into).collect();
    let total = infos.len();

    Ok(Json(TempleListResponse {
        temples: infos,
        total,
    }))
}

// =============================================================================
// Prediction Endpoints
// =============================================================================

/// GET /v1/temples/{temple_id}/predictions/day
///
/// Predict all four time slots for one date.
pub async fn get_day_predictions(
    State(state): State<AppState>,
    Path(temple_id): Path<String>,
    Query(query): Query<PredictionQuery>,
) -> HandlerResult<DayPrediction> {
    let date = resolve_date(query.date.as_deref())?;
    let weather = query.weather.unwrap_or_else(|| "Clear".to_string());
    let is_festival = query.festival.unwrap_or(false);

    let kind = resolve_kind(&state, &temple_id).await?;
    let day = services::predict_day(&temple_id, &kind, date, &weather, is_festival);

    Ok(Json(day))
}

/// GET /v1/temples/{temple_id}/predictions/week
///
/// Project the next seven days, starting today.
pub async fn get_week_predictions(
    State(state): State<AppState>,
    Path(temple_id): Path<String>,
    Query(query): Query<PredictionQuery>,
) -> HandlerResult<WeekPrediction> {
    let today = Utc::now().date_naive();
    let base_weather = query.weather.unwrap_or_else(|| "Clear".to_string());

    let kind = resolve_kind(&state, &temple_id).await?;
    let week = services::predict_week(&temple_id, &kind, today, &base_weather);

    Ok(Json(week))
}

/// GET /v1/temples/{temple_id}/best-slot
///
/// Recommend the least crowded slot for a date.
pub async fn get_best_slot(
    State(state): State<AppState>,
    Path(temple_id): Path<String>,
    Query(query): Query<PredictionQuery>,
) -> HandlerResult<BestSlotResponse> {
    let date = resolve_date(query.date.as_deref())?;
    let weather = query.weather.unwrap_or_else(|| "Clear".to_string());
    let is_festival = query.festival.unwrap_or(false);

    let kind = resolve_kind(&state, &temple_id).await?;
    let day = services::predict_day(&temple_id, &kind, date, &weather, is_festival);
    let best_time_slot = services::find_best_time_slot(&day.predictions);

    Ok(Json(BestSlotResponse {
        temple_id,
        date: iso_date(date),
        best_time_slot,
    }))
}

// =============================================================================
// Analytics
// =============================================================================

/// GET /v1/analytics
///
/// Cross-temple analytics snapshot over the whole roster.
pub async fn get_analytics(State(state): State<AppState>) -> HandlerResult<AnalyticsSnapshot> {
    let temples = state.repository.list_temples().await?;
    let today = Utc::now().date_naive();

    Ok(Json(services::generate_analytics(&temples, today)))
}
