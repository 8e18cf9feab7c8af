//! Camera entity models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vigil_core::types::{DbId, Timestamp};

/// A row from the `cameras` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Camera {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a camera.
#[derive(Debug, Deserialize)]
pub struct CreateCamera {
    pub name: String,
    pub location: String,
}
