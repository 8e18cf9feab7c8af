//! Route definitions for the `/placeholder` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::placeholder;
use crate::state::AppState;

/// Routes mounted at `/placeholder`.
///
/// ```text
/// GET /{width}/{height}      -> placeholder_svg
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{width}/{height}", get(placeholder::placeholder_svg))
}
