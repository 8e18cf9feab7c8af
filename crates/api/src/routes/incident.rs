//! Route definitions for the `/incidents` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::incident;
use crate::state::AppState;

/// Routes mounted at `/incidents`.
///
/// ```text
/// GET   /                  -> list_incidents (?resolved=true|false)
/// GET   /{id}              -> get_incident
/// PATCH /{id}/resolve      -> resolve_incident (toggle)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(incident::list_incidents))
        .route("/{id}", get(incident::get_incident))
        .route("/{id}/resolve", patch(incident::resolve_incident))
}
