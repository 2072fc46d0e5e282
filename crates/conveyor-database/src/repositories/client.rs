//! Client repository implementation.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteExecutor;

use conveyor_core::error::{AppError, ErrorKind};
use conveyor_core::result::AppResult;
use conveyor_entity::catalog::Client;

use super::insert_error;

/// Repository for catalogue clients.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Create a new client repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List active clients ordered by name.
    pub async fn find_active(&self) -> AppResult<Vec<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE is_active = 1 ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clients", e))
    }

    /// Find a client by its code, active or not.
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<Client>> {
        Self::find_by_code_with(&self.pool, code).await
    }

    /// Find a client by code on an arbitrary executor (pool or transaction).
    pub async fn find_by_code_with<'e, E>(executor: E, code: &str) -> AppResult<Option<Client>>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE code = ?")
            .bind(code)
            .fetch_optional(executor)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find client", e))
    }

    /// Insert a client and return its id.
    pub async fn create_with<'e, E>(executor: E, data: &Client) -> AppResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO clients (code, name, description, country, website, catalogue_reference, is_active, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.country)
        .bind(&data.website)
        .bind(&data.catalogue_reference)
        .bind(data.is_active)
        .bind(data.created_at)
        .fetch_one(executor)
        .await
        .map_err(|e| insert_error(e, "client"))
    }
}
