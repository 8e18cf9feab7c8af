//! Route definitions for the `/cameras` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::camera;
use crate::state::AppState;

/// Routes mounted at `/cameras`.
///
/// ```text
/// GET /          -> list_cameras
/// GET /{id}      -> get_camera
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(camera::list_cameras))
        .route("/{id}", get(camera::get_camera))
}
