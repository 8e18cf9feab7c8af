//! Seed the database with demo cameras and incidents.
//!
//! Wipes both tables, then recreates the fixture set the dashboard demos
//! against: four cameras and twelve incidents spread across one day.

use anyhow::Context;
use chrono::{Duration, TimeZone, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil_core::incident_category::{
    CATEGORY_FACE_RECOGNIZED, CATEGORY_GUN_THREAT, CATEGORY_SUSPICIOUS_BEHAVIOR,
    CATEGORY_UNAUTHORIZED_ACCESS,
};
use vigil_core::types::Timestamp;
use vigil_db::models::camera::CreateCamera;
use vigil_db::models::incident::CreateIncident;
use vigil_db::repositories::{CameraRepo, IncidentRepo};

/// One seeded incident: camera index, category, hour offset from the base
/// day, duration in minutes, thumbnail path, resolved flag.
struct SeedIncident {
    camera: usize,
    category: &'static str,
    hour_offset: i64,
    duration_minutes: i64,
    thumbnail: &'static str,
    resolved: bool,
}

const CAMERAS: &[(&str, &str)] = &[
    ("Main Entrance", "Building Front - Ground Floor"),
    ("Vault Camera", "Secure Area - Level B2"),
    ("Shop Floor A", "Retail Area - Ground Floor"),
    ("Loading Dock", "Rear Entrance - Ground Floor"),
];

const INCIDENTS: &[SeedIncident] = &[
    SeedIncident {
        camera: 1,
        category: CATEGORY_UNAUTHORIZED_ACCESS,
        hour_offset: 2,
        duration_minutes: 5,
        thumbnail: "/thumbnails/vault-alert-1.jpg",
        resolved: false,
    },
    SeedIncident {
        camera: 0,
        category: CATEGORY_FACE_RECOGNIZED,
        hour_offset: 4,
        duration_minutes: 3,
        thumbnail: "/thumbnails/entrance-face-1.jpg",
        resolved: true,
    },
    SeedIncident {
        camera: 3,
        category: CATEGORY_SUSPICIOUS_BEHAVIOR,
        hour_offset: 6,
        duration_minutes: 8,
        thumbnail: "/thumbnails/dock-suspicious-1.jpg",
        resolved: false,
    },
    SeedIncident {
        camera: 2,
        category: CATEGORY_GUN_THREAT,
        hour_offset: 10,
        duration_minutes: 2,
        thumbnail: "/thumbnails/shop-weapon-1.jpg",
        resolved: false,
    },
    SeedIncident {
        camera: 0,
        category: CATEGORY_UNAUTHORIZED_ACCESS,
        hour_offset: 12,
        duration_minutes: 4,
        thumbnail: "/thumbnails/entrance-unauth-1.jpg",
        resolved: true,
    },
    SeedIncident {
        camera: 2,
        category: CATEGORY_FACE_RECOGNIZED,
        hour_offset: 13,
        duration_minutes: 3,
        thumbnail: "/thumbnails/shop-face-1.jpg",
        resolved: false,
    },
    SeedIncident {
        camera: 1,
        category: CATEGORY_SUSPICIOUS_BEHAVIOR,
        hour_offset: 15,
        duration_minutes: 6,
        thumbnail: "/thumbnails/vault-suspicious-1.jpg",
        resolved: false,
    },
    SeedIncident {
        camera: 0,
        category: CATEGORY_GUN_THREAT,
        hour_offset: 16,
        duration_minutes: 2,
        thumbnail: "/thumbnails/entrance-weapon-1.jpg",
        resolved: false,
    },
    SeedIncident {
        camera: 3,
        category: CATEGORY_UNAUTHORIZED_ACCESS,
        hour_offset: 17,
        duration_minutes: 5,
        thumbnail: "/thumbnails/dock-unauth-1.jpg",
        resolved: true,
    },
    SeedIncident {
        camera: 0,
        category: CATEGORY_FACE_RECOGNIZED,
        hour_offset: 19,
        duration_minutes: 3,
        thumbnail: "/thumbnails/entrance-face-2.jpg",
        resolved: false,
    },
    SeedIncident {
        camera: 2,
        category: CATEGORY_SUSPICIOUS_BEHAVIOR,
        hour_offset: 21,
        duration_minutes: 7,
        thumbnail: "/thumbnails/shop-suspicious-1.jpg",
        resolved: false,
    },
    SeedIncident {
        camera: 1,
        category: CATEGORY_GUN_THREAT,
        hour_offset: 23,
        duration_minutes: 2,
        thumbnail: "/thumbnails/vault-weapon-1.jpg",
        resolved: false,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = vigil_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    vigil_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    // Incidents first so the camera wipe never hits live references.
    let removed_incidents = IncidentRepo::delete_all(&pool).await?;
    let removed_cameras = CameraRepo::delete_all(&pool).await?;
    tracing::info!(removed_incidents, removed_cameras, "Cleared existing data");

    let mut cameras = Vec::with_capacity(CAMERAS.len());
    for (name, location) in CAMERAS {
        let camera = CameraRepo::create(
            &pool,
            &CreateCamera {
                name: name.to_string(),
                location: location.to_string(),
            },
        )
        .await?;
        cameras.push(camera);
    }

    let base: Timestamp = Utc
        .with_ymd_and_hms(2025, 7, 20, 0, 0, 0)
        .single()
        .context("Invalid base date")?;

    for seed in INCIDENTS {
        let ts_start = base + Duration::hours(seed.hour_offset);
        IncidentRepo::create(
            &pool,
            &CreateIncident {
                camera_id: cameras[seed.camera].id,
                category: seed.category.to_string(),
                ts_start,
                ts_end: ts_start + Duration::minutes(seed.duration_minutes),
                thumbnail_url: seed.thumbnail.to_string(),
                resolved: Some(seed.resolved),
            },
        )
        .await?;
    }

    tracing::info!(
        cameras = cameras.len(),
        incidents = INCIDENTS.len(),
        "Seed complete"
    );

    Ok(())
}
