// src/db/admin_photo_repository.rs
// DOCUMENTATION: Admin photo database operations
// PURPOSE: Handle CRUD operations for the admin_photos table

use crate::db::AdminPhotoStore;
use crate::errors::ApiError;
use crate::models::{AdminPhoto, CreateAdminPhotoRequest, UpdateAdminPhotoRequest};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct AdminPhotoRepository {
    pool: PgPool,
}

impl AdminPhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminPhotoStore for AdminPhotoRepository {
    async fn create_admin_photo(
        &self,
        req: &CreateAdminPhotoRequest,
    ) -> Result<AdminPhoto, ApiError> {
        let photo = sqlx::query_as::<_, AdminPhoto>(
            r#"
            INSERT INTO admin_photos (location, photo, "createdAt", "updatedAt")
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, location, photo, "createdAt", "updatedAt"
            "#,
        )
        .bind(&req.location)
        .bind(&req.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create admin photo: {}", e);
            ApiError::StoreError(e.to_string())
        })?;

        log::info!("Created admin photo with id: {}", photo.id);
        Ok(photo)
    }

    async fn list_admin_photos(&self) -> Result<Vec<AdminPhoto>, ApiError> {
        let photos = sqlx::query_as::<_, AdminPhoto>(
            r#"
            SELECT id, location, photo, "createdAt", "updatedAt"
            FROM admin_photos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch admin photos: {}", e);
            ApiError::StoreError(e.to_string())
        })?;

        Ok(photos)
    }

    async fn get_admin_photo(&self, id: i32) -> Result<Option<AdminPhoto>, ApiError> {
        let photo = sqlx::query_as::<_, AdminPhoto>(
            r#"
            SELECT id, location, photo, "createdAt", "updatedAt"
            FROM admin_photos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch admin photo {}: {}", id, e);
            ApiError::StoreError(e.to_string())
        })?;

        Ok(photo)
    }

    /// Overwrite location (when given) and photo (always)
    async fn update_admin_photo(
        &self,
        id: i32,
        req: &UpdateAdminPhotoRequest,
    ) -> Result<Option<AdminPhoto>, ApiError> {
        let photo = sqlx::query_as::<_, AdminPhoto>(
            r#"
            UPDATE admin_photos
            SET location = COALESCE($1, location),
                photo = $2,
                "updatedAt" = NOW()
            WHERE id = $3
            RETURNING id, location, photo, "createdAt", "updatedAt"
            "#,
        )
        .bind(&req.location)
        .bind(&req.photo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update admin photo {}: {}", id, e);
            ApiError::StoreError(e.to_string())
        })?;

        Ok(photo)
    }

    async fn delete_admin_photo(&self, id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM admin_photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete admin photo {}: {}", id, e);
                ApiError::StoreError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
