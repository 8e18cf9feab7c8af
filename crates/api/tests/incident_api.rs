//! Integration tests for the `/api/v1/incidents` and `/api/v1/cameras`
//! resources.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use common::{body_json, get, patch};
use sqlx::PgPool;
use vigil_core::types::Timestamp;
use vigil_db::models::camera::{Camera, CreateCamera};
use vigil_db::models::incident::{CreateIncident, Incident};
use vigil_db::repositories::{CameraRepo, IncidentRepo};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 7, 20, 0, 0, 0).unwrap()
}

async fn seed_camera(pool: &PgPool, name: &str) -> Camera {
    CameraRepo::create(
        pool,
        &CreateCamera {
            name: name.to_string(),
            location: "Secure Area - Level B2".to_string(),
        },
    )
    .await
    .unwrap()
}

async fn seed_incident(
    pool: &PgPool,
    camera_id: i64,
    category: &str,
    hour_offset: i64,
    resolved: bool,
) -> Incident {
    let ts_start = base_time() + Duration::hours(hour_offset);
    IncidentRepo::create(
        pool,
        &CreateIncident {
            camera_id,
            category: category.to_string(),
            ts_start,
            ts_end: ts_start + Duration::minutes(5),
            thumbnail_url: "/thumbnails/test.jpg".to_string(),
            resolved: Some(resolved),
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Cameras
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cameras_list_in_id_order(pool: PgPool) {
    let first = seed_camera(&pool, "Main Entrance").await;
    let second = seed_camera(&pool, "Vault Camera").await;

    let response = get(common::build_test_app(pool), "/api/v1/cameras").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], first.id);
    assert_eq!(data[1]["id"], second.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_camera_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/cameras/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Incident listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn incidents_list_newest_first_with_camera(pool: PgPool) {
    let camera = seed_camera(&pool, "Shop Floor A").await;
    let early = seed_incident(&pool, camera.id, "FACE_RECOGNIZED", 2, false).await;
    let late = seed_incident(&pool, camera.id, "GUN_THREAT", 10, false).await;

    let response = get(common::build_test_app(pool), "/api/v1/incidents").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], late.id);
    assert_eq!(data[1]["id"], early.id);
    assert_eq!(data[0]["camera"]["name"], "Shop Floor A");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn incident_list_filters_by_resolution(pool: PgPool) {
    let camera = seed_camera(&pool, "Loading Dock").await;
    seed_incident(&pool, camera.id, "SUSPICIOUS_BEHAVIOR", 6, false).await;
    let resolved = seed_incident(&pool, camera.id, "UNAUTHORIZED_ACCESS", 17, true).await;

    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/incidents?resolved=true").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], resolved.id);

    let response = get(app, "/api/v1/incidents?resolved=false").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Resolution toggle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn toggling_resolution_twice_restores_original_state(pool: PgPool) {
    let camera = seed_camera(&pool, "Vault Camera").await;
    let incident = seed_incident(&pool, camera.id, "UNAUTHORIZED_ACCESS", 2, false).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/incidents/{}/resolve", incident.id);

    let response = patch(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["resolved"], true);

    let response = patch(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["resolved"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn resolving_unknown_incident_returns_404(pool: PgPool) {
    let response = patch(
        common::build_test_app(pool),
        "/api/v1/incidents/424242/resolve",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_incident_id_is_rejected(pool: PgPool) {
    let response = patch(
        common::build_test_app(pool),
        "/api/v1/incidents/not-a-number/resolve",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
