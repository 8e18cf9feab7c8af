//! Handlers for the `/incidents` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use vigil_core::error::CoreError;
use vigil_core::types::DbId;
use vigil_db::repositories::IncidentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /incidents`.
#[derive(Debug, Deserialize)]
pub struct IncidentQuery {
    /// When present, only incidents with this resolution state are returned.
    pub resolved: Option<bool>,
}

/// GET /api/v1/incidents
///
/// List incidents with their owning camera, newest first, optionally
/// filtered by resolution status.
pub async fn list_incidents(
    State(state): State<AppState>,
    Query(params): Query<IncidentQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let incidents = IncidentRepo::list_with_camera(&state.pool, params.resolved).await?;

    Ok(Json(serde_json::json!({ "data": incidents })))
}

/// GET /api/v1/incidents/{id}
pub async fn get_incident(
    State(state): State<AppState>,
    Path(incident_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let incident = IncidentRepo::find_by_id(&state.pool, incident_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id: incident_id,
        }))?;

    Ok(Json(serde_json::json!({ "data": incident })))
}

/// PATCH /api/v1/incidents/{id}/resolve
///
/// Flip the incident's resolution flag and return the updated record.
/// Toggling twice restores the original state.
pub async fn resolve_incident(
    State(state): State<AppState>,
    Path(incident_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let updated = IncidentRepo::toggle_resolved(&state.pool, incident_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id: incident_id,
        }))?;

    Ok(Json(serde_json::json!({ "data": updated })))
}
