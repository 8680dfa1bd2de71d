// src/services/admin_photo_service.rs
// DOCUMENTATION: Business logic for admin photos
// PURPOSE: Intermediary between handlers and the admin photo store

use crate::db::AdminPhotoStore;
use crate::errors::{ApiError, MISSING_PHOTO};
use crate::handlers::upload::PhotoUpload;
use crate::models::{AdminPhoto, CreateAdminPhotoRequest, UpdateAdminPhotoRequest};
use validator::Validate;

/// Multipart text field carrying the location
pub const LOCATION_FIELD: &str = "location";

pub struct AdminPhotoService;

impl AdminPhotoService {
    pub async fn create_admin_photo(
        store: &dyn AdminPhotoStore,
        mut upload: PhotoUpload,
    ) -> Result<AdminPhoto, ApiError> {
        let photo = upload
            .photo
            .take()
            .ok_or_else(|| ApiError::ValidationFailed(MISSING_PHOTO.to_string()))?;

        let req = CreateAdminPhotoRequest {
            location: upload.take_text(LOCATION_FIELD),
            photo,
        };
        req.validate()?;

        store.create_admin_photo(&req).await
    }

    pub async fn list_admin_photos(store: &dyn AdminPhotoStore) -> Result<Vec<AdminPhoto>, ApiError> {
        store.list_admin_photos().await
    }

    pub async fn get_admin_photo(
        store: &dyn AdminPhotoStore,
        id: i32,
    ) -> Result<AdminPhoto, ApiError> {
        store.get_admin_photo(id).await?.ok_or_else(|| {
            log::warn!("Admin photo not found: {}", id);
            ApiError::NotFound
        })
    }

    /// Update an admin photo
    /// DOCUMENTATION: An upload without a file clears the stored blob
    pub async fn update_admin_photo(
        store: &dyn AdminPhotoStore,
        id: i32,
        mut upload: PhotoUpload,
    ) -> Result<AdminPhoto, ApiError> {
        let req = UpdateAdminPhotoRequest {
            location: upload.take_text(LOCATION_FIELD),
            photo: upload.photo.take(),
        };
        req.validate()?;

        store
            .update_admin_photo(id, &req)
            .await?
            .ok_or(ApiError::NotFound)
    }

    pub async fn delete_admin_photo(store: &dyn AdminPhotoStore, id: i32) -> Result<(), ApiError> {
        if store.delete_admin_photo(id).await? == 0 {
            return Err(ApiError::NotFound);
        }

        log::info!("Deleted admin photo with id: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use tokio_test::block_on;

    #[test]
    fn test_update_without_file_clears_photo() {
        block_on(async {
            let store = MemoryStore::new();
            let mut upload = PhotoUpload::default();
            upload.photo = Some(b"original".to_vec());
            let created = AdminPhotoService::create_admin_photo(&store, upload)
                .await
                .unwrap();
            assert_eq!(created.location, None);

            let mut upload = PhotoUpload::default();
            upload
                .fields
                .insert(LOCATION_FIELD.to_string(), "Nantes".to_string());
            let updated = AdminPhotoService::update_admin_photo(&store, created.id, upload)
                .await
                .unwrap();

            assert_eq!(updated.location.as_deref(), Some("Nantes"));
            assert_eq!(updated.photo, None);
        });
    }

    #[test]
    fn test_update_missing_row() {
        block_on(async {
            let store = MemoryStore::new();
            let result =
                AdminPhotoService::update_admin_photo(&store, 3, PhotoUpload::default()).await;
            assert!(matches!(result, Err(ApiError::NotFound)));
        });
    }
}
