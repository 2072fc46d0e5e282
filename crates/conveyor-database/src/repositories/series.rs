//! Profile series repository implementation.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteExecutor;

use conveyor_core::error::{AppError, ErrorKind};
use conveyor_core::result::AppResult;
use conveyor_entity::catalog::ProfileSeries;

use super::insert_error;

/// Repository for track profile series.
#[derive(Debug, Clone)]
pub struct SeriesRepository {
    pool: SqlitePool,
}

impl SeriesRepository {
    /// Create a new series repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a client's series ordered by series code.
    pub async fn find_by_client(&self, client_id: i64) -> AppResult<Vec<ProfileSeries>> {
        sqlx::query_as::<_, ProfileSeries>(
            "SELECT * FROM profile_series WHERE client_id = ? ORDER BY series_code ASC",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list series", e))
    }

    /// Find one series by its code.
    pub async fn find_by_code(
        &self,
        client_id: i64,
        series_code: &str,
    ) -> AppResult<Option<ProfileSeries>> {
        sqlx::query_as::<_, ProfileSeries>(
            "SELECT * FROM profile_series WHERE client_id = ? AND series_code = ?",
        )
        .bind(client_id)
        .bind(series_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find series", e))
    }

    /// Insert a series and return its id.
    pub async fn create_with<'e, E>(executor: E, data: &ProfileSeries) -> AppResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO profile_series \
             (client_id, series_code, height_mm, width_mm, slot_width_mm, wall_thickness_mm, max_load_kg, material_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(data.client_id)
        .bind(&data.series_code)
        .bind(data.height_mm)
        .bind(data.width_mm)
        .bind(data.slot_width_mm)
        .bind(data.wall_thickness_mm)
        .bind(data.max_load_kg)
        .bind(data.material_id)
        .fetch_one(executor)
        .await
        .map_err(|e| insert_error(e, "profile series"))
    }
}
