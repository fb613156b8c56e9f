//! End-to-end tests for the HTTP surface, driven in-process.

use astro_common::{
    AccuracyTracker, ContentService, DispatchError, Dispatcher, FakeGenerator, RngSource,
};
use astrod::server::{build_router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn service(fake: FakeGenerator) -> ContentService {
    ContentService::new(Dispatcher::new(Arc::new(fake)), RngSource::seeded(7))
}

fn app(fake: FakeGenerator) -> Router {
    build_router(AppState::new(service(fake), None))
}

async fn tracked_app(fake: FakeGenerator) -> Router {
    let tracker = AccuracyTracker::open_in_memory().await.unwrap();
    build_router(AppState::new(service(fake), Some(tracker)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

// ============================================================================
// Health and routing
// ============================================================================

#[tokio::test]
async fn test_health_reports_configuration() {
    let (status, body) = get(app(FakeGenerator::unconfigured()), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["aiConfigured"], false);
    assert_eq!(body["data"]["trackingEnabled"], false);
}

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let (status, body) = get(app(FakeGenerator::unconfigured()), "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Endpoint not found"}));
}

// ============================================================================
// Generated content
// ============================================================================

#[tokio::test]
async fn test_birth_chart_without_credential_uses_fallback() {
    let (status, body) = post(
        app(FakeGenerator::unconfigured()),
        "/api/birth-chart",
        json!({"name": "Ravi", "date": "1992-08-15", "time": "07:45", "place": "Pune"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["dataSource"], "fallback");
    assert_eq!(body["data"]["sunSign"], "Leo");
    assert_eq!(body["data"]["planetaryPositions"].as_array().unwrap().len(), 9);
    assert_eq!(body["data"]["housePositions"].as_array().unwrap().len(), 12);
    assert!(body.get("predictionId").is_none());
}

#[tokio::test]
async fn test_matchmaking_fallback_matrix_score() {
    let (status, body) = post(
        app(FakeGenerator::unconfigured()),
        "/api/matchmaking",
        json!({"zodiacSign1": "aries", "zodiacSign2": "Leo"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["compatibility"], 90);
    assert_eq!(body["data"]["level"], "high");
}

#[tokio::test]
async fn test_fenced_ai_reply_is_served() {
    let reply = "```json\n{\"compatibility\": 64, \"message\": \"Steady.\"}\n```";
    let (status, body) = post(
        app(FakeGenerator::always(reply)),
        "/api/matchmaking",
        json!({"zodiacSign1": "Taurus", "zodiacSign2": "Gemini"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dataSource"], "ai_generated");
    assert_eq!(body["data"]["compatibility"], 64);
    assert_eq!(body["data"]["level"], "medium");
    assert_eq!(body["data"]["message"], "Steady.");
}

#[tokio::test]
async fn test_prose_reply_still_succeeds() {
    let (status, body) = get(
        app(FakeGenerator::always("The cards are shrouded today.")),
        "/api/tarot",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["dataSource"], "fallback");
    assert_eq!(body["data"]["cards"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_timeout_still_succeeds() {
    let (status, body) = post(
        app(FakeGenerator::always_error(DispatchError::Timeout(15))),
        "/api/horoscope",
        json!({"fullName": "Mira", "dateOfBirth": "1988-11-02", "zodiacSign": "Scorpio"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dataSource"], "fallback");
    assert_eq!(body["data"]["zodiacSign"], "Scorpio");
    assert_eq!(body["data"]["fullName"], "Mira");
}

#[tokio::test]
async fn test_panchang_fallback_is_deterministic() {
    let first = get(app(FakeGenerator::unconfigured()), "/api/panchang?date=2024-01-15").await;
    let second = get(app(FakeGenerator::unconfigured()), "/api/panchang?date=2024-01-15").await;
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(first.1["data"]["dayName"], "Monday");
    assert_eq!(first.1, second.1);
}

#[tokio::test]
async fn test_calendar_events_stay_in_month() {
    let (status, body) = get(
        app(FakeGenerator::unconfigured()),
        "/api/calendar?month=2&year=2025",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let events = body["data"].as_array().unwrap();
    assert!(!events.is_empty());
    assert!(events
        .iter()
        .all(|e| e["date"].as_str().unwrap().starts_with("2025-02-")));
}

#[tokio::test]
async fn test_weekly_forecast_spans_seven_days() {
    let (status, body) = get(
        app(FakeGenerator::unconfigured()),
        "/api/calendar/weekly?weekStart=2024-04-01",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["weekStart"], "2024-04-01");
    assert_eq!(body["data"]["weekEnd"], "2024-04-07");
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_missing_field_is_named() {
    let (status, body) = post(
        app(FakeGenerator::unconfigured()),
        "/api/horoscope",
        json!({"fullName": "Mira", "dateOfBirth": "1988-11-02"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required field: zodiacSign");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/matchmaking")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(FakeGenerator::unconfigured()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_bad_query_values_are_400() {
    let (status, _) = get(app(FakeGenerator::unconfigured()), "/api/calendar?month=13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, body) = get(app(FakeGenerator::unconfigured()), "/api/mantra?category=astral").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid category: astral");
}

// ============================================================================
// Catalogues
// ============================================================================

#[tokio::test]
async fn test_catalogue_lookups() {
    let (status, body) = get(app(FakeGenerator::unconfigured()), "/api/mantra/gayatri-mantra").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Gayatri Mantra");

    let (status, _) = get(app(FakeGenerator::unconfigured()), "/api/remedy/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(app(FakeGenerator::unconfigured()), "/api/zodiac").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 12);

    let (status, body) = get(app(FakeGenerator::unconfigured()), "/api/zodiac/leo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Leo");
}

#[tokio::test]
async fn test_mantra_list_fallback() {
    let (status, body) = get(app(FakeGenerator::unconfigured()), "/api/mantra").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dataSource"], "fallback");
    assert!(!body["data"].as_array().unwrap().is_empty());
}

// ============================================================================
// Accuracy tracking
// ============================================================================

#[tokio::test]
async fn test_tracking_disabled_is_503() {
    let (status, body) = get(app(FakeGenerator::unconfigured()), "/api/accuracy").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Accuracy tracking is disabled");
}

#[tokio::test]
async fn test_feedback_roundtrip_updates_stats() {
    let app = tracked_app(FakeGenerator::unconfigured()).await;

    let (_, served) = post(
        app.clone(),
        "/api/matchmaking",
        json!({"zodiacSign1": "Aries", "zodiacSign2": "Leo"}),
    )
    .await;
    let id = served["predictionId"].as_i64().unwrap();

    let (status, body) = post(
        app.clone(),
        "/api/feedback",
        json!({"predictionId": id, "rating": 5, "feedback": "Spot on"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["predictionId"], id);

    let (status, _) = post(
        app.clone(),
        "/api/feedback",
        json!({"predictionId": id + 1000, "rating": 3}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(app.clone(), "/api/feedback", json!({"predictionId": id, "rating": 9})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(app, "/api/accuracy?days=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalPredictions"], 1);
    assert_eq!(body["data"]["byKind"]["matchmaking"]["avgUserRating"], 5.0);
    assert_eq!(body["data"]["bySource"]["fallback"]["highRatedPercentage"], 100.0);
}
