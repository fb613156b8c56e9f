//! API routes for astrod
//!
//! Every response uses the same envelope. Content routes always succeed once
//! the input validates: AI failures are absorbed by the content service.

use crate::server::AppState;
use astro_common::records::{
    BirthChartRecord, CalendarEventRecord, DataSource, HoroscopeRecord, MantraRecord, MatchRecord,
    PanchangRecord, RemedyRecord, TarotReading, WeeklyForecastRecord, ZodiacProfile,
};
use astro_common::requests::{
    AccuracyQuery, BirthChartRequest, CategoryQuery, DateQuery, FeedbackRequest, HoroscopeRequest,
    MatchRequest, MonthQuery, WeekQuery,
};
use astro_common::tables;
use astro_common::{AccuracyStats, AccuracyTracker, ContentKind, Generated, ValidationError};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Envelope and errors
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_id: Option<i64>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            data_source: None,
            prediction_id: None,
        }
    }

    fn generated(generated: Generated<T>, prediction_id: Option<i64>) -> Self {
        Self {
            data_source: Some(generated.source),
            prediction_id,
            ..Self::ok(generated.record)
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            data_source: None,
            prediction_id: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Accuracy tracking is disabled")]
    TrackingDisabled,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TrackingDisabled => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(e) => {
                error!("Internal error: {:#}", e);
                let body = ApiResponse::failure("Internal server error");
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };
        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Unknown paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

/// Logs a served record when tracking is on. Failures only warn.
async fn track<T: Serialize>(
    tracker: Option<&AccuracyTracker>,
    kind: ContentKind,
    input: Value,
    generated: &Generated<T>,
) -> Option<i64> {
    let tracker = tracker?;
    let output = match serde_json::to_value(&generated.record) {
        Ok(v) => v,
        Err(e) => {
            warn!("Could not serialize {} for tracking: {}", kind.as_str(), e);
            return None;
        }
    };
    match tracker.log_prediction(kind, input, output, generated.source).await {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Failed to log {} prediction: {:#}", kind.as_str(), e);
            None
        }
    }
}

async fn serve<T: Serialize>(
    state: &AppState,
    kind: ContentKind,
    input: impl Serialize,
    generated: Generated<T>,
) -> ApiResult<T> {
    let input = serde_json::to_value(input).unwrap_or(Value::Null);
    let prediction_id = track(state.tracker.as_ref(), kind, input, &generated).await;
    info!("{} served ({})", kind.as_str(), generated.source.as_str());
    Ok(Json(ApiResponse::generated(generated, prediction_id)))
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub ai_configured: bool,
    pub tracking_enabled: bool,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: "astro-content-api",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        ai_configured: state.service.ai_configured(),
        tracking_enabled: state.tracker.is_some(),
    }))
}

// ============================================================================
// Generated content
// ============================================================================

pub fn content_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/birth-chart", post(birth_chart))
        .route("/api/horoscope", post(horoscope))
        .route("/api/matchmaking", post(matchmaking))
        .route("/api/panchang", get(panchang))
        .route("/api/calendar", get(calendar))
        .route("/api/calendar/weekly", get(weekly_forecast))
        .route("/api/tarot", get(tarot))
}

async fn birth_chart(
    State(state): State<AppStateArc>,
    payload: Result<Json<BirthChartRequest>, JsonRejection>,
) -> ApiResult<BirthChartRecord> {
    let Json(req) = payload?;
    let details = req.validate()?;
    let generated = state.service.birth_chart(&details).await;
    serve(&state, ContentKind::BirthChart, &req, generated).await
}

async fn horoscope(
    State(state): State<AppStateArc>,
    payload: Result<Json<HoroscopeRequest>, JsonRejection>,
) -> ApiResult<HoroscopeRecord> {
    let Json(req) = payload?;
    let subject = req.validate()?;
    let generated = state
        .service
        .horoscope(&subject, Utc::now().date_naive())
        .await;
    serve(&state, ContentKind::Horoscope, &req, generated).await
}

async fn matchmaking(
    State(state): State<AppStateArc>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> ApiResult<MatchRecord> {
    let Json(req) = payload?;
    let (a, b) = req.validate()?;
    let generated = state.service.matchmaking(a, b).await;
    serve(&state, ContentKind::Matchmaking, &req, generated).await
}

async fn panchang(
    State(state): State<AppStateArc>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<PanchangRecord> {
    let Query(q) = query?;
    let date = q.validate(Utc::now().date_naive())?;
    let generated = state.service.panchang(date).await;
    serve(&state, ContentKind::Panchang, &q, generated).await
}

async fn calendar(
    State(state): State<AppStateArc>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<Vec<CalendarEventRecord>> {
    let Query(q) = query?;
    let (year, month) = q.validate(Utc::now().date_naive())?;
    let generated = state.service.calendar_events(year, month).await;
    serve(&state, ContentKind::CalendarEvents, &q, generated).await
}

async fn weekly_forecast(
    State(state): State<AppStateArc>,
    query: Result<Query<WeekQuery>, QueryRejection>,
) -> ApiResult<WeeklyForecastRecord> {
    let Query(q) = query?;
    let (start, end) = q.validate(Utc::now().date_naive())?;
    let generated = state.service.weekly_forecast(start, end).await;
    serve(&state, ContentKind::WeeklyForecast, &q, generated).await
}

async fn tarot(State(state): State<AppStateArc>) -> ApiResult<TarotReading> {
    let generated = state.service.tarot().await;
    serve(&state, ContentKind::Tarot, Value::Null, generated).await
}

// ============================================================================
// Catalogues
// ============================================================================

pub fn catalogue_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/mantra", get(mantras))
        .route("/api/mantra/:id", get(mantra_by_id))
        .route("/api/remedy", get(remedies))
        .route("/api/remedy/:id", get(remedy_by_id))
        .route("/api/zodiac", get(zodiac_profiles))
        .route("/api/zodiac/:id", get(zodiac_by_id))
}

async fn mantras(
    State(state): State<AppStateArc>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> ApiResult<Vec<MantraRecord>> {
    let Query(q) = query?;
    let category = q.mantra_category()?;
    let generated = state.service.mantras(category).await;
    serve(&state, ContentKind::Mantras, &q, generated).await
}

async fn mantra_by_id(Path(id): Path<String>) -> ApiResult<MantraRecord> {
    tables::mantra::find(&id)
        .map(|m| Json(ApiResponse::ok(m)))
        .ok_or_else(|| ApiError::NotFound(format!("Mantra not found: {}", id)))
}

async fn remedies(
    State(state): State<AppStateArc>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> ApiResult<Vec<RemedyRecord>> {
    let Query(q) = query?;
    let category = q.remedy_category()?;
    let generated = state.service.remedies(category).await;
    serve(&state, ContentKind::Remedies, &q, generated).await
}

async fn remedy_by_id(Path(id): Path<String>) -> ApiResult<RemedyRecord> {
    tables::remedy::find(&id)
        .map(|r| Json(ApiResponse::ok(r)))
        .ok_or_else(|| ApiError::NotFound(format!("Remedy not found: {}", id)))
}

async fn zodiac_profiles() -> Json<ApiResponse<&'static [ZodiacProfile]>> {
    Json(ApiResponse::ok(&tables::zodiac::PROFILES[..]))
}

async fn zodiac_by_id(Path(id): Path<String>) -> ApiResult<&'static ZodiacProfile> {
    tables::zodiac::find_profile(&id)
        .map(|p| Json(ApiResponse::ok(p)))
        .ok_or_else(|| ApiError::NotFound(format!("Zodiac sign not found: {}", id)))
}

// ============================================================================
// Accuracy tracking
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAck {
    pub prediction_id: i64,
    pub rating: u8,
}

pub fn tracking_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/feedback", post(feedback))
        .route("/api/accuracy", get(accuracy))
}

async fn feedback(
    State(state): State<AppStateArc>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> ApiResult<FeedbackAck> {
    let tracker = state.tracker.as_ref().ok_or(ApiError::TrackingDisabled)?;
    let Json(req) = payload?;
    let feedback = req.validate()?;

    if !tracker.add_feedback(&feedback).await? {
        return Err(ApiError::NotFound(format!(
            "Prediction not found: {}",
            feedback.prediction_id
        )));
    }
    info!("Feedback {} recorded for prediction {}", feedback.rating, feedback.prediction_id);
    Ok(Json(ApiResponse::ok(FeedbackAck {
        prediction_id: feedback.prediction_id,
        rating: feedback.rating,
    })))
}

async fn accuracy(
    State(state): State<AppStateArc>,
    query: Result<Query<AccuracyQuery>, QueryRejection>,
) -> ApiResult<AccuracyStats> {
    let tracker = state.tracker.as_ref().ok_or(ApiError::TrackingDisabled)?;
    let Query(q) = query?;
    let (days, kind) = q.validate()?;
    let stats = tracker.accuracy_stats(days, kind).await?;
    Ok(Json(ApiResponse::ok(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_omits_empty_fields() {
        let body = serde_json::to_value(ApiResponse::ok(json!({"a": 1}))).unwrap();
        assert_eq!(body, json!({"success": true, "data": {"a": 1}}));
    }

    #[test]
    fn test_generated_envelope_carries_source() {
        let generated = Generated {
            record: 7,
            source: DataSource::Fallback,
        };
        let body = serde_json::to_value(ApiResponse::generated(generated, Some(3))).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "data": 7, "dataSource": "fallback", "predictionId": 3})
        );
    }

    #[test]
    fn test_failure_envelope() {
        let body = serde_json::to_value(ApiResponse::failure("Missing required field: date")).unwrap();
        assert_eq!(
            body,
            json!({"success": false, "error": "Missing required field: date"})
        );
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = ApiError::from(ValidationError::MissingField("zodiacSign")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::TrackingDisabled.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
