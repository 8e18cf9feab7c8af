//! Incident category tags and their display metadata.
//!
//! The tag set is open: detectors may emit categories this build has never
//! seen, and those must still render with a generic label and style instead
//! of failing.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Known tags
// ---------------------------------------------------------------------------

pub const CATEGORY_UNAUTHORIZED_ACCESS: &str = "UNAUTHORIZED_ACCESS";
pub const CATEGORY_GUN_THREAT: &str = "GUN_THREAT";
pub const CATEGORY_FACE_RECOGNIZED: &str = "FACE_RECOGNIZED";
pub const CATEGORY_TRAFFIC_CONGESTION: &str = "TRAFFIC_CONGESTION";
pub const CATEGORY_SUSPICIOUS_BEHAVIOR: &str = "SUSPICIOUS_BEHAVIOR";

/// All categories this build ships dedicated styling for.
pub const KNOWN_CATEGORIES: &[&str] = &[
    CATEGORY_UNAUTHORIZED_ACCESS,
    CATEGORY_GUN_THREAT,
    CATEGORY_FACE_RECOGNIZED,
    CATEGORY_TRAFFIC_CONGESTION,
    CATEGORY_SUSPICIOUS_BEHAVIOR,
];

/// CSS classes for tags without dedicated styling.
const FALLBACK_COLOR: &str = "bg-gray-500 border-gray-400";

// ---------------------------------------------------------------------------
// Metadata lookup
// ---------------------------------------------------------------------------

/// Display metadata for an incident category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    /// Human-readable label.
    pub label: String,
    /// CSS class string used by the dashboard to style the bar.
    pub color: &'static str,
}

/// Look up display metadata for a category tag.
///
/// Unknown tags get a humanized label (underscores become spaces) and the
/// neutral fallback style.
pub fn category_meta(tag: &str) -> CategoryMeta {
    let (label, color) = match tag {
        CATEGORY_UNAUTHORIZED_ACCESS => ("Unauthorised Access", "bg-red-500 border-red-400"),
        CATEGORY_GUN_THREAT => ("Gun Threat", "bg-orange-500 border-orange-400"),
        CATEGORY_FACE_RECOGNIZED => ("Face Recognised", "bg-blue-500 border-blue-400"),
        CATEGORY_TRAFFIC_CONGESTION => ("Traffic Congestion", "bg-teal-500 border-teal-400"),
        CATEGORY_SUSPICIOUS_BEHAVIOR => ("Suspicious Behavior", "bg-yellow-600 border-yellow-500"),
        unknown => {
            return CategoryMeta {
                label: unknown.replace('_', " "),
                color: FALLBACK_COLOR,
            }
        }
    };

    CategoryMeta {
        label: label.to_string(),
        color,
    }
}
