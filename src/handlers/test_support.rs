// src/handlers/test_support.rs
// Helpers shared by the handler tests

use crate::db::{AdminPhotoStore, MemoryStore, PhotoStore};
use actix_web::web;
use std::sync::Arc;

const BOUNDARY: &str = "----photo-service-test-boundary";

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Build a multipart body from text fields and an optional file part
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    if let Some((name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"upload.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n",
                BOUNDARY, name
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Application data the routes expect, all backed by one memory store
pub fn app_data(
    store: &Arc<MemoryStore>,
) -> (
    web::Data<dyn PhotoStore>,
    web::Data<dyn AdminPhotoStore>,
) {
    let photos: Arc<dyn PhotoStore> = store.clone();
    let admin_photos: Arc<dyn AdminPhotoStore> = store.clone();
    (web::Data::from(photos), web::Data::from(admin_photos))
}

/// Build the full application around a memory store
macro_rules! init_app {
    ($store:expr) => {
        init_app!($store, crate::handlers::upload::UploadConfig::default())
    };
    ($store:expr, $upload:expr) => {{
        let (photos, admin_photos) = crate::handlers::test_support::app_data(&$store);
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(photos)
                .app_data(admin_photos)
                .app_data(actix_web::web::Data::new($upload))
                .configure(crate::handlers::health_config)
                .configure(crate::handlers::photos_config)
                .configure(crate::handlers::admin_photos_config),
        )
        .await
    }};
}

pub(crate) use init_app;
