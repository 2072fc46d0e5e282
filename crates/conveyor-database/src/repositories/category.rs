//! Category repository implementation.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteExecutor;

use conveyor_core::error::{AppError, ErrorKind};
use conveyor_core::result::AppResult;
use conveyor_entity::catalog::Category;

use super::insert_error;

/// Repository for product categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a client's categories in catalogue order.
    pub async fn find_by_client(&self, client_id: i64) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE client_id = ? ORDER BY id ASC")
            .bind(client_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list categories", e)
            })
    }

    /// Insert a category and return its id.
    pub async fn create_with<'e, E>(executor: E, data: &Category) -> AppResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO categories (client_id, code, name, description, page_reference) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(data.client_id)
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.page_reference)
        .fetch_one(executor)
        .await
        .map_err(|e| insert_error(e, "category"))
    }
}
