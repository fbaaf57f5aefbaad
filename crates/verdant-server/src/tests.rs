//! Server API tests

use super::*;
use axum::{body::Body, http::Request};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use verdant_core::{AnalyticsConfig, NewSimulation};

fn setup_test_app() -> Router {
    setup_with_db(Database::in_memory().unwrap())
}

fn setup_with_db(db: Database) -> Router {
    let config = ServerConfig {
        require_auth: false,
        allowed_origins: vec![],
    };
    create_router(db, AnalyticsEngine::default(), config)
}

async fn get_body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_as(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(USER_HEADER, user)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn seed(db: &Database, user: &str, month: u32, roi: f64, business_type: &str) {
    let sim = NewSimulation {
        business_type: Some(business_type.to_string()),
        roi: Some(roi),
        green_score: Some(80.0),
        energy: Some(900.0),
        savings: Some(1600.0),
        created_at: Some(Utc.with_ymd_and_hms(2026, month, 1, 9, 0, 0).unwrap()),
        ..Default::default()
    };
    db.insert_simulation(user, &sim).unwrap();
}

// ========== Health & Auth ==========

#[tokio::test]
async fn test_health() {
    let response = setup_test_app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_security_headers_present() {
    let response = setup_test_app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}

#[tokio::test]
async fn test_auth_required_without_header() {
    let app = create_router(
        Database::in_memory().unwrap(),
        AnalyticsEngine::default(),
        ServerConfig::default(),
    );

    let response = app.oneshot(get("/api/ai/insights")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Authentication required");
}

#[tokio::test]
async fn test_auth_required_health_still_open() {
    let app = create_router(
        Database::in_memory().unwrap(),
        AnalyticsEngine::default(),
        ServerConfig::default(),
    );

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_header_scopes_history() {
    let db = Database::in_memory().unwrap();
    seed(&db, "alice", 1, 10.0, "Cafe");
    seed(&db, "bob", 1, 20.0, "Cafe");
    seed(&db, "bob", 2, 30.0, "Cafe");

    let app = create_router(db, AnalyticsEngine::default(), ServerConfig::default());

    let response = app
        .oneshot(get_as("/api/simulations", "bob"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["roi"], 30.0);
    assert_eq!(items[0]["userId"], "bob");
}

#[test]
fn test_get_user_id_defaults_to_local() {
    let mut headers = HeaderMap::new();
    assert_eq!(get_user_id(&headers), LOCAL_USER);

    headers.insert(USER_HEADER, HeaderValue::from_static("  "));
    assert_eq!(get_user_id(&headers), LOCAL_USER);

    headers.insert(USER_HEADER, HeaderValue::from_static("carol"));
    assert_eq!(get_user_id(&headers), "carol");
}

#[test]
fn test_parse_origins() {
    assert_eq!(
        parse_origins("https://a.example, ,https://b.example"),
        vec!["https://a.example", "https://b.example"]
    );
    assert!(parse_origins("").is_empty());
}

// ========== Simulations ==========

#[tokio::test]
async fn test_create_simulation_runs_formula() {
    let db = Database::in_memory().unwrap();
    let app = setup_with_db(db.clone());

    let body = serde_json::json!({
        "businessType": "Office",
        "components": [{"type": "hvac", "watt": 1000, "hours": 10}]
    });
    let response = app
        .oneshot(post_json("/api/simulations", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["userId"], "local");
    assert_eq!(json["businessType"], "Office");
    assert_eq!(json["energy"], 300.0);
    assert_eq!(json["components"][0]["type"], "hvac");

    assert_eq!(db.count_simulations("local").unwrap(), 1);
}

#[tokio::test]
async fn test_create_simulation_rejects_negative_watt() {
    let body = serde_json::json!({
        "businessType": "Office",
        "components": [{"type": "pc", "watt": -5, "hours": 2}]
    });
    let response = setup_test_app()
        .oneshot(post_json("/api/simulations", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_simulations_limit() {
    let db = Database::in_memory().unwrap();
    for month in 1..=5 {
        seed(&db, "local", month, month as f64, "Cafe");
    }
    let app = setup_with_db(db);

    let response = app
        .clone()
        .oneshot(get("/api/simulations?limit=2"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["roi"], 5.0);

    let response = app.oneshot(get("/api/simulations?limit=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Reports ==========

#[tokio::test]
async fn test_insights_empty_history() {
    let response = setup_test_app()
        .oneshot(get("/api/ai/insights"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["summary"]["totalSimulations"], 0);
    assert_eq!(json["monthlyTrends"].as_array().unwrap().len(), 12);
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 1);
    assert!(json["energyDistribution"].get("renewablePct").is_some());
}

#[tokio::test]
async fn test_roi_analyze() {
    let db = Database::in_memory().unwrap();
    seed(&db, "local", 1, 10.0, "Cafe");
    seed(&db, "local", 2, 20.0, "Bakery");
    let app = setup_with_db(db);

    let response = app.oneshot(get("/api/roi/analyze")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["totalSimulations"], 2);
    assert_eq!(json["avgRoi"], 15.0);
    assert_eq!(json["monthlyProjection"].as_array().unwrap().len(), 12);
    assert_eq!(json["businessStats"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_roi_forecast_steps() {
    let db = Database::in_memory().unwrap();
    seed(&db, "local", 1, 10.0, "Cafe");
    seed(&db, "local", 2, 20.0, "Cafe");
    let app = setup_with_db(db);

    let response = app
        .clone()
        .oneshot(get("/api/roi/forecast?steps=3"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    let forecast = json["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 3);
    assert_eq!(forecast[0]["month"], "Month 3");
    assert_eq!(forecast[0]["roi"], 30.0);

    let response = app.oneshot(get("/api/roi/forecast?steps=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_roi_forecast_insufficient_data() {
    let response = setup_test_app()
        .oneshot(get("/api/roi/forecast"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert!(json["forecast"].as_array().unwrap().is_empty());
    assert!(json["slope"].is_null());
}

#[tokio::test]
async fn test_roi_carbon_uses_engine_config() {
    let db = Database::in_memory().unwrap();
    seed(&db, "local", 1, 10.0, "Cafe");

    let config = AnalyticsConfig::from_toml("[carbon]\ncost_per_kwh = 16.0\n").unwrap();
    let app = create_router(
        db,
        AnalyticsEngine::new(config),
        ServerConfig {
            require_auth: false,
            allowed_origins: vec![],
        },
    );

    let response = app.oneshot(get("/api/roi/carbon")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["totalSavings"], 1600.0);
    assert_eq!(json["kwhSaved"], 100.0);
    assert_eq!(json["kgCo2Saved"], 82.0);
}

#[tokio::test]
async fn test_roi_compare_groups() {
    let db = Database::in_memory().unwrap();
    seed(&db, "local", 1, 10.0, "Cafe");
    seed(&db, "local", 2, 20.0, "Cafe");
    seed(&db, "local", 3, 40.0, "Bakery");
    let app = setup_with_db(db);

    let response = app.oneshot(get("/api/roi/compare")).await.unwrap();
    let json = get_body_json(response).await;
    let groups = json["groups"].as_array().unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["businessType"], "Bakery");
    assert_eq!(groups[1]["businessType"], "Cafe");
    assert_eq!(groups[1]["avgRoi"], 15.0);
}
