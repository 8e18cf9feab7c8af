//! Handler for the `/placeholder` resource.
//!
//! Serves a generated SVG stand-in for incident thumbnails that have no
//! captured frame yet.

use axum::extract::Path;
use axum::http::header;
use axum::response::IntoResponse;

/// Largest accepted placeholder dimension, in pixels.
const MAX_DIMENSION: u32 = 2000;

/// GET /api/v1/placeholder/{width}/{height}
///
/// Returns a gray SVG placeholder of the requested size, capped at
/// [`MAX_DIMENSION`] per side. The response is immutable, so clients may
/// cache it aggressively.
pub async fn placeholder_svg(Path((width, height)): Path<(u32, u32)>) -> impl IntoResponse {
    let width = width.clamp(1, MAX_DIMENSION);
    let height = height.clamp(1, MAX_DIMENSION);

    let svg = format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#374151"/>
  <text x="50%" y="50%" font-family="Arial, sans-serif" font-size="14"
        fill="#9CA3AF" text-anchor="middle" dominant-baseline="middle">{width}x{height}</text>
  <circle cx="50%" cy="40%" r="15" fill="#6B7280" opacity="0.5"/>
  <rect x="45%" y="55%" width="10%" height="8%" fill="#6B7280" opacity="0.5"/>
</svg>
"##
    );

    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=31536000"),
        ],
        svg,
    )
}
