pub mod camera;
pub mod health;
pub mod incident;
pub mod placeholder;
pub mod timeline;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cameras                            list cameras
/// /cameras/{id}                       get camera
///
/// /incidents                          list (?resolved=true|false)
/// /incidents/{id}                     get incident
/// /incidents/{id}/resolve             toggle resolution flag (PATCH)
///
/// /timeline                           server-side timeline layout
///                                     (?width=px, ?resolved=true|false)
///
/// /placeholder/{width}/{height}       SVG placeholder thumbnail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cameras", camera::router())
        .nest("/incidents", incident::router())
        .nest("/timeline", timeline::router())
        .nest("/placeholder", placeholder::router())
}
