//! Handler for the `/timeline` resource: the server-side timeline layout.
//!
//! Computes everything the dashboard timeline needs for a given track
//! width: the display window, tick markers, and per-camera lanes of
//! incident bars already clipped and mapped to pixel coordinates.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use vigil_core::error::CoreError;
use vigil_core::incident_category::{category_meta, CategoryMeta};
use vigil_core::timeline::{
    compute_window, generate_ticks, incident_span, tick_count_for_width, BarSpan, Tick,
    TimeWindow,
};
use vigil_core::types::DbId;
use vigil_db::models::camera::Camera;
use vigil_db::models::incident::Incident;
use vigil_db::repositories::IncidentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /timeline`.
#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    /// Track width in pixels. Must be positive.
    pub width: f64,
    /// When present, only incidents with this resolution state are included.
    pub resolved: Option<bool>,
}

/// One incident bar on a camera lane.
#[derive(Debug, Serialize)]
pub struct TimelineIncident {
    #[serde(flatten)]
    pub incident: Incident,
    /// On-screen extent; `width == 0` means "do not render".
    pub span: BarSpan,
    /// Display metadata for the incident's category tag.
    pub category_meta: CategoryMeta,
}

/// One camera row on the timeline.
#[derive(Debug, Serialize)]
pub struct TimelineLane {
    pub camera: Camera,
    pub incidents: Vec<TimelineIncident>,
}

/// Full timeline layout for one track width.
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub window: TimeWindow,
    pub ticks: Vec<Tick>,
    pub lanes: Vec<TimelineLane>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /api/v1/timeline
///
/// Compute the timeline layout for the current incident set. Lanes are
/// ordered by camera ID; incidents within a lane keep the repository's
/// newest-first ordering.
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(params): Query<TimelineQuery>,
) -> AppResult<Json<serde_json::Value>> {
    if !(params.width > 0.0) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "width must be a positive number of pixels, got {}",
            params.width
        ))));
    }

    let incidents = IncidentRepo::list_with_camera(&state.pool, params.resolved).await?;

    let intervals: Vec<_> = incidents
        .iter()
        .map(|i| (i.incident.ts_start, i.incident.ts_end))
        .collect();
    let window = compute_window(&intervals, Utc::now());

    let ticks = generate_ticks(&window, params.width, tick_count_for_width(params.width));

    // Group into per-camera lanes, ordered by camera ID.
    let mut lanes: BTreeMap<DbId, TimelineLane> = BTreeMap::new();
    for row in incidents {
        let incident = row.incident;
        let camera = row.camera;
        let span = incident_span(incident.ts_start, incident.ts_end, &window, params.width);
        let meta = category_meta(&incident.category);

        lanes
            .entry(camera.id)
            .or_insert_with(|| TimelineLane {
                camera,
                incidents: Vec::new(),
            })
            .incidents
            .push(TimelineIncident {
                incident,
                span,
                category_meta: meta,
            });
    }

    let response = TimelineResponse {
        window,
        ticks,
        lanes: lanes.into_values().collect(),
    };

    Ok(Json(serde_json::json!({ "data": response })))
}
