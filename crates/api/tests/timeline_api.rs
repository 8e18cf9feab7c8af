//! Integration tests for the `/api/v1/timeline` resource.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use common::{body_json, get};
use sqlx::PgPool;
use vigil_core::types::Timestamp;
use vigil_db::models::camera::{Camera, CreateCamera};
use vigil_db::models::incident::CreateIncident;
use vigil_db::repositories::{CameraRepo, IncidentRepo};

fn base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 7, 20, 0, 0, 0).unwrap()
}

async fn seed_camera(pool: &PgPool, name: &str) -> Camera {
    CameraRepo::create(
        pool,
        &CreateCamera {
            name: name.to_string(),
            location: "Building Front - Ground Floor".to_string(),
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
    duration_minutes: i64,
) {
    let ts_start = base_time() + Duration::hours(hour_offset);
    IncidentRepo::create(
        pool,
        &CreateIncident {
            camera_id,
            category: category.to_string(),
            ts_start,
            ts_end: ts_start + Duration::minutes(duration_minutes),
            thumbnail_url: "/thumbnails/test.jpg".to_string(),
            resolved: None,
        },
    )
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn timeline_layout_covers_all_incidents(pool: PgPool) {
    let entrance = seed_camera(&pool, "Main Entrance").await;
    let vault = seed_camera(&pool, "Vault Camera").await;
    seed_incident(&pool, entrance.id, "FACE_RECOGNIZED", 4, 3).await;
    seed_incident(&pool, vault.id, "UNAUTHORIZED_ACCESS", 2, 5).await;

    let response = get(common::build_test_app(pool), "/api/v1/timeline?width=1200").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    // The padded incident range (00:00-08:00 after padding) is narrower
    // than the minimum, so the window gets widened to exactly 24 hours.
    let window_start: Timestamp =
        serde_json::from_value(data["window"]["start"].clone()).unwrap();
    let window_end: Timestamp = serde_json::from_value(data["window"]["end"].clone()).unwrap();
    assert_eq!(window_end - window_start, Duration::hours(24));
    assert!(window_start <= base_time() + Duration::hours(2));
    assert!(window_end >= base_time() + Duration::hours(4) + Duration::minutes(3));

    // 1200px at ~100px spacing: 12 segments, 13 markers, HH:MM labels.
    let ticks = data["ticks"].as_array().unwrap();
    assert_eq!(ticks.len(), 13);
    assert_eq!(ticks[0]["position_px"], 0.0);
    assert_eq!(ticks[12]["position_px"], 1200.0);
    assert_eq!(ticks[0]["label"].as_str().unwrap().len(), 5);

    // Lanes are ordered by camera ID; every bar gets at least the minimum
    // width so short incidents stay clickable.
    let lanes = data["lanes"].as_array().unwrap();
    assert_eq!(lanes.len(), 2);
    assert_eq!(lanes[0]["camera"]["id"], entrance.id);
    assert_eq!(lanes[1]["camera"]["id"], vault.id);

    let bar = &lanes[1]["incidents"][0];
    assert_eq!(bar["category_meta"]["label"], "Unauthorised Access");
    assert!(bar["span"]["width"].as_f64().unwrap() >= 8.0);
    assert!(bar["span"]["left"].as_f64().unwrap() >= 0.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn timeline_respects_resolution_filter(pool: PgPool) {
    let camera = seed_camera(&pool, "Shop Floor A").await;
    let ts_start = base_time() + Duration::hours(10);
    let incident = IncidentRepo::create(
        &pool,
        &CreateIncident {
            camera_id: camera.id,
            category: "GUN_THREAT".to_string(),
            ts_start,
            ts_end: ts_start + Duration::minutes(2),
            thumbnail_url: "/thumbnails/shop-weapon-1.jpg".to_string(),
            resolved: None,
        },
    )
    .await
    .unwrap();
    IncidentRepo::toggle_resolved(&pool, incident.id).await.unwrap();

    let response = get(
        common::build_test_app(pool),
        "/api/v1/timeline?width=1200&resolved=false",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["lanes"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn timeline_rejects_non_positive_width(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/timeline?width=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let response = get(app, "/api/v1/timeline?width=-50").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
