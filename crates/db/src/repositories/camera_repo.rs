//! Repository for the `cameras` table.

use sqlx::PgPool;
use vigil_core::types::DbId;

use crate::models::camera::{Camera, CreateCamera};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location, created_at, updated_at";

/// Provides CRUD operations for cameras.
pub struct CameraRepo;

impl CameraRepo {
    /// Insert a new camera, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCamera) -> Result<Camera, sqlx::Error> {
        let query = format!(
            "INSERT INTO cameras (name, location)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find a camera by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Camera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cameras WHERE id = $1");
        sqlx::query_as::<_, Camera>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cameras, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Camera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cameras ORDER BY id ASC");
        sqlx::query_as::<_, Camera>(&query).fetch_all(pool).await
    }

    /// Delete every camera. Used by the seeder. Returns the number of rows
    /// removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cameras").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
