// src/handlers/admin_photos.rs
// DOCUMENTATION: HTTP handlers for admin photo operations
// PURPOSE: CRUD over the admin_photos table

use crate::db::AdminPhotoStore;
use crate::errors::ApiError;
use crate::handlers::{parse_id, upload::PhotoUpload};
use crate::services::AdminPhotoService;
use actix_web::{web, HttpResponse, Responder};

/// POST /admin_photo
pub async fn create_admin_photo(
    store: web::Data<dyn AdminPhotoStore>,
    upload: PhotoUpload,
) -> Result<impl Responder, ApiError> {
    let photo = AdminPhotoService::create_admin_photo(store.get_ref(), upload).await?;
    Ok(HttpResponse::Created().json(photo))
}

/// GET /admin_photo/all
pub async fn list_admin_photos(
    store: web::Data<dyn AdminPhotoStore>,
) -> Result<impl Responder, ApiError> {
    let photos = AdminPhotoService::list_admin_photos(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(photos))
}

/// GET /admin_photo/{id}
pub async fn get_admin_photo(
    store: web::Data<dyn AdminPhotoStore>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let id = parse_id(&path)?;
    let photo = AdminPhotoService::get_admin_photo(store.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(photo))
}

/// PUT /admin_photo/{id}
/// Replace location and photo; a request without a file clears the photo
pub async fn update_admin_photo(
    store: web::Data<dyn AdminPhotoStore>,
    path: web::Path<String>,
    upload: PhotoUpload,
) -> Result<impl Responder, ApiError> {
    let id = parse_id(&path)?;
    let photo = AdminPhotoService::update_admin_photo(store.get_ref(), id, upload).await?;
    Ok(HttpResponse::Ok().json(photo))
}

/// DELETE /admin_photo/{id}
pub async fn delete_admin_photo(
    store: web::Data<dyn AdminPhotoStore>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let id = parse_id(&path)?;
    AdminPhotoService::delete_admin_photo(store.get_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for admin photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin_photo")
            .route("", web::post().to(create_admin_photo))
            .route("/all", web::get().to(list_admin_photos))
            .route("/{id}", web::get().to(get_admin_photo))
            .route("/{id}", web::put().to(update_admin_photo))
            .route("/{id}", web::delete().to(delete_admin_photo)),
    );
}
