//! Repository for the `incidents` table.

use sqlx::PgPool;
use vigil_core::types::DbId;

use crate::models::incident::{
    CreateIncident, Incident, IncidentCameraRow, IncidentWithCamera,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, camera_id, category, ts_start, ts_end, resolved, thumbnail_url, created_at, updated_at";

/// Column list for the camera join, with camera columns aliased so the flat
/// row struct can pick them apart.
const JOINED_COLUMNS: &str = "i.id, i.camera_id, i.category, i.ts_start, i.ts_end, i.resolved, \
    i.thumbnail_url, i.created_at, i.updated_at, \
    c.name AS camera_name, c.location AS camera_location, \
    c.created_at AS camera_created_at, c.updated_at AS camera_updated_at";

/// Provides CRUD operations for incidents.
pub struct IncidentRepo;

impl IncidentRepo {
    /// Insert a new incident, returning the created row.
    ///
    /// If `resolved` is `None`, defaults to `false`.
    pub async fn create(pool: &PgPool, input: &CreateIncident) -> Result<Incident, sqlx::Error> {
        let query = format!(
            "INSERT INTO incidents
                (camera_id, category, ts_start, ts_end, thumbnail_url, resolved)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(input.camera_id)
            .bind(&input.category)
            .bind(input.ts_start)
            .bind(input.ts_end)
            .bind(&input.thumbnail_url)
            .bind(input.resolved)
            .fetch_one(pool)
            .await
    }

    /// Find an incident by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM incidents WHERE id = $1");
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List incidents with their owning camera, newest first.
    ///
    /// When `resolved` is `Some`, only incidents with that resolution state
    /// are returned; `None` returns everything.
    pub async fn list_with_camera(
        pool: &PgPool,
        resolved: Option<bool>,
    ) -> Result<Vec<IncidentWithCamera>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM incidents i
             JOIN cameras c ON c.id = i.camera_id
             WHERE ($1::boolean IS NULL OR i.resolved = $1)
             ORDER BY i.ts_start DESC"
        );
        let rows = sqlx::query_as::<_, IncidentCameraRow>(&query)
            .bind(resolved)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(IncidentWithCamera::from).collect())
    }

    /// Flip an incident's resolution flag in place, returning the updated
    /// row. Applying this twice restores the original state.
    ///
    /// Returns `None` if no incident with the given `id` exists.
    pub async fn toggle_resolved(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!(
            "UPDATE incidents
             SET resolved = NOT resolved, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete every incident. Used by the seeder. Returns the number of
    /// rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM incidents").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
