// src/handlers/upload.rs
// DOCUMENTATION: Request body decoder for photo uploads
// PURPOSE: Read a multipart form (one `photo` file plus text fields) into
// memory, rejecting oversized files before the handler runs

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::errors::ApiError;
use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use futures_util::TryStreamExt;
use serde_json::Value;
use std::collections::HashMap;

/// Name of the multipart field that carries the image
pub const PHOTO_FIELD: &str = "photo";

/// Limits applied by the `PhotoUpload` extractor
/// DOCUMENTATION: Register with `App::app_data(web::Data::new(...))`;
/// defaults apply when none is registered
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub max_field_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_UPLOAD_BYTES,
            max_field_size: 1024 * 1024,
        }
    }
}

impl UploadConfig {
    pub fn with_max_file_size(max_file_size: usize) -> Self {
        Self {
            max_file_size,
            ..Self::default()
        }
    }
}

/// Decoded upload: text fields by name and the optional file bytes
#[derive(Debug, Default)]
pub struct PhotoUpload {
    pub fields: HashMap<String, String>,
    pub photo: Option<Vec<u8>>,
}

impl PhotoUpload {
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}

impl FromRequest for PhotoUpload {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let config = req
            .app_data::<web::Data<UploadConfig>>()
            .map(|c| c.get_ref().clone())
            .unwrap_or_default();

        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::new(req.headers(), payload.take());
            Box::pin(async move { decode_multipart(multipart, &config).await })
        } else if content_type.starts_with("application/json") {
            let json = web::Json::<HashMap<String, Value>>::from_request(req, payload);
            Box::pin(async move {
                let body = json
                    .await
                    .map_err(|e| ApiError::ValidationFailed(e.to_string()))?;
                Ok(from_json_fields(body.into_inner()))
            })
        } else {
            // No form at all: same outcome as a form without a file
            Box::pin(async { Ok(PhotoUpload::default()) })
        }
    }
}

async fn decode_multipart(
    mut multipart: Multipart,
    config: &UploadConfig,
) -> Result<PhotoUpload, ApiError> {
    let mut upload = PhotoUpload::default();

    while let Some(mut field) = multipart.try_next().await.map_err(malformed)? {
        let disposition = field.content_disposition().clone();
        let name = disposition.get_name().unwrap_or_default().to_string();

        if disposition.get_filename().is_some() {
            if name != PHOTO_FIELD || upload.photo.is_some() {
                log::warn!("Rejected upload with unexpected file field '{}'", name);
                return Err(ApiError::ValidationFailed(format!(
                    "Unexpected field: {}",
                    name
                )));
            }
            upload.photo = Some(read_field(&mut field, config.max_file_size).await?);
        } else {
            let bytes = read_field(&mut field, config.max_field_size).await?;
            let value = String::from_utf8(bytes).map_err(|_| {
                ApiError::ValidationFailed(format!("Field {} is not valid UTF-8", name))
            })?;
            upload.fields.insert(name, value);
        }
    }

    Ok(upload)
}

/// Buffer one part, failing as soon as it grows past `limit`
async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, ApiError> {
    let mut buf = Vec::new();

    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        if buf.len() + chunk.len() > limit {
            log::warn!("Rejected multipart field larger than {} bytes", limit);
            return Err(ApiError::PayloadTooLarge(limit));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

fn malformed(e: MultipartError) -> ApiError {
    ApiError::ValidationFailed(format!("Malformed multipart body: {}", e))
}

fn from_json_fields(body: HashMap<String, Value>) -> PhotoUpload {
    let fields = body
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(s) => Some((name, s)),
            Value::Number(n) => Some((name, n.to_string())),
            Value::Bool(b) => Some((name, b.to_string())),
            _ => None,
        })
        .collect();

    PhotoUpload {
        fields,
        photo: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{multipart_body, multipart_content_type};
    use actix_web::test::TestRequest;
    use serde_json::json;

    async fn decode(req: TestRequest) -> Result<PhotoUpload, ApiError> {
        let (req, mut payload) = req.to_http_parts();
        PhotoUpload::from_request(&req, &mut payload).await
    }

    #[actix_rt::test]
    async fn test_decodes_file_and_text() {
        let body = multipart_body(&[("pseudonym", "léa")], Some((PHOTO_FIELD, &b"\x89PNG"[..])));
        let upload = decode(
            TestRequest::post()
                .insert_header((header::CONTENT_TYPE, multipart_content_type()))
                .set_payload(body),
        )
        .await
        .unwrap();

        assert_eq!(upload.photo.as_deref(), Some(&b"\x89PNG"[..]));
        assert_eq!(upload.fields.get("pseudonym").map(String::as_str), Some("léa"));
    }

    #[actix_rt::test]
    async fn test_missing_file_is_absent() {
        let body = multipart_body(&[("location", "Rome")], None);
        let upload = decode(
            TestRequest::post()
                .insert_header((header::CONTENT_TYPE, multipart_content_type()))
                .set_payload(body),
        )
        .await
        .unwrap();

        assert!(upload.photo.is_none());
        assert_eq!(upload.fields.len(), 1);
    }

    #[actix_rt::test]
    async fn test_file_over_limit() {
        let body = multipart_body(&[], Some((PHOTO_FIELD, &[7u8; 65][..])));
        let result = decode(
            TestRequest::post()
                .insert_header((header::CONTENT_TYPE, multipart_content_type()))
                .app_data(web::Data::new(UploadConfig::with_max_file_size(64)))
                .set_payload(body),
        )
        .await;

        assert!(matches!(result, Err(ApiError::PayloadTooLarge(64))));
    }

    #[actix_rt::test]
    async fn test_file_at_limit_is_accepted() {
        let body = multipart_body(&[], Some((PHOTO_FIELD, &[7u8; 64][..])));
        let upload = decode(
            TestRequest::post()
                .insert_header((header::CONTENT_TYPE, multipart_content_type()))
                .app_data(web::Data::new(UploadConfig::with_max_file_size(64)))
                .set_payload(body),
        )
        .await
        .unwrap();

        assert_eq!(upload.photo.map(|p| p.len()), Some(64));
    }

    #[actix_rt::test]
    async fn test_unexpected_file_field() {
        let body = multipart_body(&[], Some(("avatar", &b"img"[..])));
        let result = decode(
            TestRequest::post()
                .insert_header((header::CONTENT_TYPE, multipart_content_type()))
                .set_payload(body),
        )
        .await;

        assert!(matches!(result, Err(ApiError::ValidationFailed(_))));
    }

    #[actix_rt::test]
    async fn test_json_body_supplies_text_fields() {
        let upload = decode(TestRequest::put().set_json(json!({
            "location": "Oslo",
            "floor": 3,
            "tags": ["a"]
        })))
        .await
        .unwrap();

        assert!(upload.photo.is_none());
        assert_eq!(upload.fields.get("location").map(String::as_str), Some("Oslo"));
        assert_eq!(upload.fields.get("floor").map(String::as_str), Some("3"));
        assert!(!upload.fields.contains_key("tags"));
    }

    #[actix_rt::test]
    async fn test_other_content_types_decode_empty() {
        let upload = decode(TestRequest::post().set_payload("plain text"))
            .await
            .unwrap();
        assert!(upload.photo.is_none());
        assert!(upload.fields.is_empty());
    }
}
