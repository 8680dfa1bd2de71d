// src/db/photo_repository.rs
// DOCUMENTATION: Photo database operations
// PURPOSE: Handle CRUD operations for the "Photos" table

use crate::db::PhotoStore;
use crate::errors::ApiError;
use crate::models::{CreatePhotoRequest, Photo};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoStore for PhotoRepository {
    /// Insert photo and return the stored row
    async fn create_photo(&self, req: &CreatePhotoRequest) -> Result<Photo, ApiError> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            INSERT INTO "Photos" (pseudonyme, photo, "createdAt", "updatedAt")
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, pseudonyme, photo, "createdAt", "updatedAt"
            "#,
        )
        .bind(&req.pseudonyme)
        .bind(&req.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create photo: {}", e);
            ApiError::StoreError(e.to_string())
        })?;

        log::info!("Created photo with id: {}", photo.id);
        Ok(photo)
    }

    async fn get_photo(&self, id: i32) -> Result<Option<Photo>, ApiError> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, pseudonyme, photo, "createdAt", "updatedAt"
            FROM "Photos"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch photo {}: {}", id, e);
            ApiError::StoreError(e.to_string())
        })?;

        Ok(photo)
    }

    /// Fetch one page, most recent first
    /// DOCUMENTATION: Ties on "createdAt" are broken by id so pages never overlap
    async fn list_photos(&self, limit: i64, offset: i64) -> Result<(Vec<Photo>, i64), ApiError> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, pseudonyme, photo, "createdAt", "updatedAt"
            FROM "Photos"
            ORDER BY "createdAt" DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch photo page: {}", e);
            ApiError::StoreError(e.to_string())
        })?;

        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Photos""#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to count photos: {}", e);
                ApiError::StoreError(e.to_string())
            })?;

        Ok((photos, total))
    }

    async fn delete_photo(&self, id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query(r#"DELETE FROM "Photos" WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete photo {}: {}", id, e);
                ApiError::StoreError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
