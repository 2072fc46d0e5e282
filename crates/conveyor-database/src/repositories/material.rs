//! Material repository implementation.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteExecutor;

use conveyor_core::error::{AppError, ErrorKind};
use conveyor_core::result::AppResult;
use conveyor_entity::catalog::Material;

use super::insert_error;

/// Repository for materials and finishes.
#[derive(Debug, Clone)]
pub struct MaterialRepository {
    pool: SqlitePool,
}

impl MaterialRepository {
    /// Create a new material repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a client's materials ordered by code.
    pub async fn find_by_client(&self, client_id: i64) -> AppResult<Vec<Material>> {
        sqlx::query_as::<_, Material>("SELECT * FROM materials WHERE client_id = ? ORDER BY code ASC")
            .bind(client_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list materials", e))
    }

    /// Insert a material and return its id.
    pub async fn create_with<'e, E>(executor: E, data: &Material) -> AppResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO materials (client_id, code, name, description) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(data.client_id)
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(executor)
        .await
        .map_err(|e| insert_error(e, "material"))
    }
}
