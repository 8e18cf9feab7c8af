//! Incident entity models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vigil_core::types::{DbId, Timestamp};

use crate::models::camera::Camera;

/// A row from the `incidents` table.
///
/// `ts_end >= ts_start` is not enforced by the schema; consumers must treat
/// a malformed interval as zero-duration rather than fail.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: DbId,
    pub camera_id: DbId,
    pub category: String,
    pub ts_start: Timestamp,
    pub ts_end: Timestamp,
    pub resolved: bool,
    pub thumbnail_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an incident.
#[derive(Debug, Deserialize)]
pub struct CreateIncident {
    pub camera_id: DbId,
    pub category: String,
    pub ts_start: Timestamp,
    pub ts_end: Timestamp,
    pub thumbnail_url: String,
    /// Defaults to `false` when omitted.
    pub resolved: Option<bool>,
}

/// An incident joined with its owning camera, as returned by list queries.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentWithCamera {
    #[serde(flatten)]
    pub incident: Incident,
    pub camera: Camera,
}

/// Flat join row used internally by the repository; reassembled into
/// [`IncidentWithCamera`] before leaving the crate.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct IncidentCameraRow {
    pub id: DbId,
    pub camera_id: DbId,
    pub category: String,
    pub ts_start: Timestamp,
    pub ts_end: Timestamp,
    pub resolved: bool,
    pub thumbnail_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub camera_name: String,
    pub camera_location: String,
    pub camera_created_at: Timestamp,
    pub camera_updated_at: Timestamp,
}

impl From<IncidentCameraRow> for IncidentWithCamera {
    fn from(row: IncidentCameraRow) -> Self {
        IncidentWithCamera {
            camera: Camera {
                id: row.camera_id,
                name: row.camera_name,
                location: row.camera_location,
                created_at: row.camera_created_at,
                updated_at: row.camera_updated_at,
            },
            incident: Incident {
                id: row.id,
                camera_id: row.camera_id,
                category: row.category,
                ts_start: row.ts_start,
                ts_end: row.ts_end,
                resolved: row.resolved,
                thumbnail_url: row.thumbnail_url,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}
