//! Route definitions for the `/timeline` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

/// Routes mounted at `/timeline`.
///
/// ```text
/// GET /      -> get_timeline (?width=px, ?resolved=true|false)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(timeline::get_timeline))
}
