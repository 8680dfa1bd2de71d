// src/services/photo_service.rs
// DOCUMENTATION: Business logic for photos
// PURPOSE: Intermediary between handlers and the photo store

use crate::db::PhotoStore;
use crate::errors::{ApiError, MISSING_PHOTO};
use crate::handlers::upload::PhotoUpload;
use crate::models::{total_pages, CreatePhotoRequest, PageMeta, PageQuery, Photo, PhotoPage};
use validator::Validate;

/// Multipart text field carrying the pseudonym
pub const PSEUDONYM_FIELD: &str = "pseudonym";

pub struct PhotoService;

impl PhotoService {
    /// Create a photo from an upload; the file is mandatory
    pub async fn create_photo(
        store: &dyn PhotoStore,
        mut upload: PhotoUpload,
    ) -> Result<Photo, ApiError> {
        let photo = upload
            .photo
            .take()
            .ok_or_else(|| ApiError::ValidationFailed(MISSING_PHOTO.to_string()))?;

        let req = CreatePhotoRequest {
            pseudonyme: upload.take_text(PSEUDONYM_FIELD),
            photo,
        };
        req.validate()?;

        store.create_photo(&req).await
    }

    pub async fn get_photo(store: &dyn PhotoStore, id: i32) -> Result<Photo, ApiError> {
        store.get_photo(id).await?.ok_or_else(|| {
            log::warn!("Photo not found: {}", id);
            ApiError::NotFound
        })
    }

    /// List one page of photos, newest first
    pub async fn list_photos(
        store: &dyn PhotoStore,
        query: &PageQuery,
    ) -> Result<PhotoPage, ApiError> {
        let page = query.page();
        let limit = query.limit();

        let (data, total_photos) = store.list_photos(limit, query.offset()).await?;

        Ok(PhotoPage {
            data,
            meta: PageMeta {
                total_photos,
                total_pages: total_pages(total_photos, limit),
                current_page: page,
                per_page: limit,
            },
        })
    }

    pub async fn delete_photo(store: &dyn PhotoStore, id: i32) -> Result<(), ApiError> {
        if store.delete_photo(id).await? == 0 {
            log::warn!("Delete of missing photo: {}", id);
            return Err(ApiError::NotFound);
        }

        log::info!("Deleted photo with id: {}", id);
        Ok(())
    }
}
