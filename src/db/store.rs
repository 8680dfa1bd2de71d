// src/db/store.rs
// DOCUMENTATION: Storage interfaces injected into the handlers
// PURPOSE: Let the HTTP layer run against Postgres or the in-memory store

use crate::errors::ApiError;
use crate::models::{
    AdminPhoto, CreateAdminPhotoRequest, CreatePhotoRequest, Photo, UpdateAdminPhotoRequest,
};
use async_trait::async_trait;

/// Persistence operations for the `"Photos"` table
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn create_photo(&self, req: &CreatePhotoRequest) -> Result<Photo, ApiError>;

    async fn get_photo(&self, id: i32) -> Result<Option<Photo>, ApiError>;

    /// One page of photos, newest first, plus the total row count
    async fn list_photos(&self, limit: i64, offset: i64) -> Result<(Vec<Photo>, i64), ApiError>;

    /// Returns the number of rows removed
    async fn delete_photo(&self, id: i32) -> Result<u64, ApiError>;
}

/// Persistence operations for the `admin_photos` table
#[async_trait]
pub trait AdminPhotoStore: Send + Sync {
    async fn create_admin_photo(
        &self,
        req: &CreateAdminPhotoRequest,
    ) -> Result<AdminPhoto, ApiError>;

    async fn list_admin_photos(&self) -> Result<Vec<AdminPhoto>, ApiError>;

    async fn get_admin_photo(&self, id: i32) -> Result<Option<AdminPhoto>, ApiError>;

    /// Returns `None` when no row has this id
    async fn update_admin_photo(
        &self,
        id: i32,
        req: &UpdateAdminPhotoRequest,
    ) -> Result<Option<AdminPhoto>, ApiError>;

    async fn delete_admin_photo(&self, id: i32) -> Result<u64, ApiError>;
}
