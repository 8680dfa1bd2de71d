// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for photo operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::PhotoStore;
use crate::errors::ApiError;
use crate::handlers::{parse_id, upload::PhotoUpload};
use crate::models::PageQuery;
use crate::services::PhotoService;
use actix_web::{web, HttpResponse, Responder};

/// POST /photo
/// Create a photo from a multipart form (`pseudonym`, `photo` file)
pub async fn create_photo(
    store: web::Data<dyn PhotoStore>,
    upload: PhotoUpload,
) -> Result<impl Responder, ApiError> {
    let photo = PhotoService::create_photo(store.get_ref(), upload).await?;
    Ok(HttpResponse::Created().json(photo))
}

/// GET /photo/{id}
pub async fn get_photo(
    store: web::Data<dyn PhotoStore>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let id = parse_id(&path)?;
    let photo = PhotoService::get_photo(store.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(photo))
}

/// GET /photo?page=&limit=
/// Paginated listing, most recent first
pub async fn list_photos(
    store: web::Data<dyn PhotoStore>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, ApiError> {
    let page = PhotoService::list_photos(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// DELETE /photo/{id}
pub async fn delete_photo(
    store: web::Data<dyn PhotoStore>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let id = parse_id(&path)?;
    PhotoService::delete_photo(store.get_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/photo")
            .route("", web::post().to(create_photo))
            .route("", web::get().to(list_photos))
            .route("/{id}", web::get().to(get_photo))
            .route("/{id}", web::delete().to(delete_photo)),
    );
}
