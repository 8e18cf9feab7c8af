//! Handlers for the `/cameras` resource.

use axum::extract::{Path, State};
use axum::Json;
use vigil_core::error::CoreError;
use vigil_core::types::DbId;
use vigil_db::repositories::CameraRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/cameras
///
/// List all cameras, ordered by ID.
pub async fn list_cameras(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let cameras = CameraRepo::list(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": cameras })))
}

/// GET /api/v1/cameras/{id}
pub async fn get_camera(
    State(state): State<AppState>,
    Path(camera_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let camera = CameraRepo::find_by_id(&state.pool, camera_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id: camera_id,
        }))?;

    Ok(Json(serde_json::json!({ "data": camera })))
}
